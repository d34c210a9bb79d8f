use crate::cli::commands::{in_bounds, period_bounds_opt};
use crate::cli::parser::{Commands, WorkoutAction};
use crate::config::Config;
use crate::core::workout::WorkoutLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::repos::WorkoutRepo;
use crate::store::SqliteStore;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Workout { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut store = SqliteStore::new(&pool.conn);

        match action {
            WorkoutAction::Start { workout_id } => {
                WorkoutLogic::start(&mut store, workout_id)?;
                ttlog(&pool.conn, "workout", workout_id, "Session started")?;
            }

            WorkoutAction::Set {
                workout_id,
                exercise,
                reps,
                weight_kg,
            } => {
                WorkoutLogic::add_set(&mut store, workout_id, exercise, *reps, *weight_kg)?;
            }

            WorkoutAction::Done {
                workout_id,
                duration,
                highlight,
            } => {
                let log =
                    WorkoutLogic::complete(&mut store, workout_id, *duration, highlight.clone())?;
                ttlog(
                    &pool.conn,
                    "workout",
                    workout_id,
                    &format!("Session completed ({} min)", log.duration_min),
                )?;
            }

            WorkoutAction::Cancel { workout_id } => {
                WorkoutLogic::cancel(&mut store, workout_id)?;
                ttlog(&pool.conn, "workout", workout_id, "Session cancelled")?;
            }

            WorkoutAction::List { period } => {
                let bounds = period_bounds_opt(period)?;

                let mut logs = WorkoutRepo::new(&mut store).list()?;
                logs.retain(|l| in_bounds(&l.logged_at, &bounds));
                logs.sort_by_key(|l| l.logged_at);

                if logs.is_empty() {
                    println!("No workouts logged.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("DATE", 10),
                    Column::new("WORKOUT", 16),
                    Column::new("MIN", 5),
                    Column::new("HIGHLIGHT", 32),
                ]);

                for l in &logs {
                    table.add_row(vec![
                        l.date_str(),
                        l.workout_id.clone(),
                        l.duration_min.to_string(),
                        l.highlight.clone(),
                    ]);
                }

                println!("{}", table.render());
                println!("{} workout(s).", logs.len());
            }
        }
    }

    Ok(())
}
