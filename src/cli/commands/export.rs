use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        data,
        file,
        range,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&mut pool, format.clone(), data.clone(), file, range, *force)?;

        ttlog(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} as {}", data.as_str(), format.as_str()),
        )?;
    }
    Ok(())
}
