use crate::cli::commands::{in_bounds, period_bounds_opt};
use crate::cli::parser::{CheckinAction, Commands};
use crate::config::Config;
use crate::core::checkin::CheckinLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::checkin::{CheckinDraft, Mood};
use crate::store::SqliteStore;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut store = SqliteStore::new(&pool.conn);

        match action {
            CheckinAction::Add {
                mood,
                energy,
                stress,
                sleep,
                notes,
                date,
                from_draft,
            } => {
                let (log, _) = if *from_draft {
                    CheckinLogic::add_from_draft(&mut store)?
                } else {
                    let mood = mood
                        .as_ref()
                        .ok_or_else(|| AppError::IncompleteCheckin("missing --mood".into()))?;
                    let energy = energy
                        .ok_or_else(|| AppError::IncompleteCheckin("missing --energy".into()))?;
                    let stress = stress
                        .ok_or_else(|| AppError::IncompleteCheckin("missing --stress".into()))?;
                    let sleep = sleep
                        .ok_or_else(|| AppError::IncompleteCheckin("missing --sleep".into()))?;

                    CheckinLogic::add(
                        &mut store,
                        mood,
                        energy,
                        stress,
                        sleep,
                        notes.clone(),
                        date.as_ref(),
                    )?
                };

                ttlog(
                    &pool.conn,
                    "checkin",
                    &log.day_key(),
                    &format!("Check-in saved (mood {})", log.mood.as_str()),
                )?;
            }

            CheckinAction::Draft {
                mood,
                energy,
                stress,
                sleep,
                notes,
            } => {
                let mood = match mood {
                    Some(code) => Some(
                        Mood::from_code(code)
                            .ok_or_else(|| AppError::InvalidMood(code.clone()))?,
                    ),
                    None => None,
                };

                CheckinLogic::save_draft(
                    &mut store,
                    CheckinDraft {
                        mood,
                        energy: *energy,
                        stress: *stress,
                        sleep_quality: *sleep,
                        notes: notes.clone(),
                    },
                )?;
            }

            CheckinAction::List { period } => {
                let bounds = period_bounds_opt(period)?;

                let mut logs = crate::repos::CheckinRepo::new(&mut store).list()?;
                logs.retain(|l| in_bounds(&l.logged_at, &bounds));
                logs.sort_by_key(|l| l.logged_at);

                if logs.is_empty() {
                    println!("No check-ins logged.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("DATE", 10),
                    Column::new("MOOD", 6),
                    Column::new("ENERGY", 7),
                    Column::new("STRESS", 7),
                    Column::new("SLEEP", 6),
                    Column::new("NOTES", 28),
                ]);

                for l in &logs {
                    table.add_row(vec![
                        l.day_key(),
                        l.mood.as_str().to_string(),
                        l.energy.to_string(),
                        l.stress.to_string(),
                        l.sleep_quality.to_string(),
                        l.notes.clone().unwrap_or_default(),
                    ]);
                }

                println!("{}", table.render());
                println!("{} check-in(s).", logs.len());
            }
        }
    }

    Ok(())
}
