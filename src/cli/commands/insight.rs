use crate::cli::parser::{Commands, InsightAction};
use crate::config::Config;
use crate::core::insight::InsightLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::repos::{CardioRepo, CheckinRepo, InsightRepo, UpsertOutcome, WorkoutRepo};
use crate::store::SqliteStore;
use crate::ui::messages::{bullet, header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Insight { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut store = SqliteStore::new(&pool.conn);

        match action {
            InsightAction::Generate { days } => {
                let range_days = days.unwrap_or(cfg.insight_days).max(1) as usize;

                let workouts = WorkoutRepo::new(&mut store).list()?;
                let cardio_logs = CardioRepo::new(&mut store).list()?;
                let checkins = CheckinRepo::new(&mut store).list()?;

                let (insight, outcome) = InsightLogic::generate_and_store(
                    &mut store,
                    &workouts,
                    &cardio_logs,
                    &checkins,
                    range_days,
                )?;

                header(format!("Week of {}", insight.week_start));
                println!("{}\n", insight.title);
                println!("{}\n", insight.summary);
                for b in &insight.bullets {
                    bullet(b);
                }
                println!("\n{}", insight.focus);

                if outcome == UpsertOutcome::Replaced {
                    info("Replaced this week's previous insight.");
                }

                ttlog(
                    &pool.conn,
                    "insight",
                    &insight.week_start.to_string(),
                    &format!("Insight generated: {}", insight.title),
                )?;
            }

            InsightAction::List => {
                let insights = InsightRepo::new(&mut store).list()?;

                if insights.is_empty() {
                    println!("No insights stored. Generate one with 'vitalog insight generate'.");
                    return Ok(());
                }

                for i in &insights {
                    println!(
                        "{}  {}  ({} bullet(s))",
                        i.week_start,
                        i.title,
                        i.bullets.len()
                    );
                }
                println!("\n{} insight(s).", insights.len());
            }
        }
    }

    Ok(())
}
