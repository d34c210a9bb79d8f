use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::streak::compute_streak;
use crate::core::insight::{WEEKLY_CARDIO_TARGET_MIN, WEEKLY_WORKOUT_TARGET};
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::repos::{CardioRepo, CheckinRepo, WorkoutRepo};
use crate::store::SqliteStore;
use crate::utils::colors::{CYAN, RESET, color_for_progress, color_for_score};
use crate::utils::mins2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { days } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut store = SqliteStore::new(&pool.conn);

        let range_days = days.unwrap_or(cfg.insight_days).max(1) as usize;

        let workouts = WorkoutRepo::new(&mut store).list()?;
        let cardio_logs = CardioRepo::new(&mut store).list()?;
        let checkins = CheckinRepo::new(&mut store).list()?;

        let streak = compute_streak(&checkins);
        let summary = Core::build_week_summary(&workouts, &cardio_logs, &checkins, range_days);

        println!(
            "📊 Last {} days ({} → {})\n",
            range_days,
            summary.window_start.format("%Y-%m-%d"),
            summary.window_end.format("%Y-%m-%d")
        );

        println!("{}• Check-in streak:{} {} day(s)", CYAN, RESET, streak);

        let w = summary.workouts_completed as u32;
        println!(
            "{}• Workouts:{} {}{}{} of {} target",
            CYAN,
            RESET,
            color_for_progress(w, WEEKLY_WORKOUT_TARGET as u32),
            w,
            RESET,
            WEEKLY_WORKOUT_TARGET
        );

        println!(
            "{}• Cardio:{} {}{}{} of {} target ({})",
            CYAN,
            RESET,
            color_for_progress(summary.cardio_minutes, WEEKLY_CARDIO_TARGET_MIN),
            summary.cardio_minutes,
            RESET,
            WEEKLY_CARDIO_TARGET_MIN,
            mins2readable(summary.cardio_minutes as i64, false)
        );

        if summary.checkins > 0 {
            println!(
                "{}• Avg sleep:{} {}{:.1}{}/10 over {} check-in(s)",
                CYAN,
                RESET,
                color_for_score(summary.avg_sleep),
                summary.avg_sleep,
                RESET,
                summary.checkins
            );
        } else {
            println!("{}• Avg sleep:{} no check-ins in window", CYAN, RESET);
        }

        // Flag any session left open
        let open = WorkoutRepo::new(&mut store).open_sessions()?;
        if !open.is_empty() {
            println!(
                "\n⏳ Open session(s): {} (finish with 'vitalog workout done <id>')",
                open.join(", ")
            );
        }

        println!();
    }

    Ok(())
}
