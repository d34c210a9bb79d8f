use crate::cli::commands::{in_bounds, period_bounds_opt};
use crate::cli::parser::{CardioAction, Commands};
use crate::config::Config;
use crate::core::cardio::CardioLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::repos::CardioRepo;
use crate::store::SqliteStore;
use crate::utils::formatting::{fmt_opt, fmt_opt_f1};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cardio { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut store = SqliteStore::new(&pool.conn);

        match action {
            CardioAction::Add {
                kind,
                duration,
                distance_km,
                avg_hr,
                notes,
                date,
            } => {
                // --kind falls back to the configured default
                let kind_code = kind.clone().unwrap_or_else(|| cfg.default_cardio_kind.clone());

                let log = CardioLogic::add(
                    &mut store,
                    &kind_code,
                    *duration,
                    *distance_km,
                    *avg_hr,
                    notes.clone(),
                    date.as_ref(),
                )?;

                ttlog(
                    &pool.conn,
                    "cardio",
                    &log.date_str(),
                    &format!("{} min of {}", log.duration_min, log.kind.label()),
                )?;
            }

            CardioAction::List { period } => {
                let bounds = period_bounds_opt(period)?;

                let mut logs = CardioRepo::new(&mut store).list()?;
                logs.retain(|l| in_bounds(&l.logged_at, &bounds));
                logs.sort_by_key(|l| l.logged_at);

                if logs.is_empty() {
                    println!("No cardio logged.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("ID", 8),
                    Column::new("DATE", 10),
                    Column::new("KIND", 10),
                    Column::new("MIN", 5),
                    Column::new("KM", 6),
                    Column::new("HR", 5),
                ]);

                let mut total_min: u32 = 0;
                for l in &logs {
                    total_min += l.duration_min;
                    table.add_row(vec![
                        l.id[..l.id.len().min(8)].to_string(),
                        l.date_str(),
                        l.kind.label().to_string(),
                        l.duration_min.to_string(),
                        fmt_opt_f1(&l.distance_km),
                        fmt_opt(&l.avg_hr),
                    ]);
                }

                println!("{}", table.render());
                println!("{} session(s), {} min total.", logs.len(), total_min);
            }

            CardioAction::Del { id } => {
                let removed = CardioLogic::delete(&mut store, id)?;
                ttlog(
                    &pool.conn,
                    "del",
                    &removed.id,
                    &format!("Cardio log removed ({})", removed.date_str()),
                )?;
            }
        }
    }

    Ok(())
}
