use crate::cli::parser::{Commands, OnboardSection};
use crate::config::Config;
use crate::core::onboard::OnboardLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::profile::{
    BasicsInfo, FitnessInfo, GoalsInfo, LifestyleInfo, NutritionHabitsInfo,
};
use crate::store::SqliteStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Onboard { section } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut store = SqliteStore::new(&pool.conn);

        match section {
            OnboardSection::Basics {
                name,
                age,
                sex,
                height_cm,
                weight_kg,
            } => {
                OnboardLogic::save_basics(
                    &mut store,
                    BasicsInfo {
                        name: name.clone(),
                        age: *age,
                        sex: sex.clone(),
                        height_cm: *height_cm,
                        weight_kg: *weight_kg,
                    },
                )?;
                ttlog(&pool.conn, "onboard", "basics", "Basics section saved")?;
            }

            OnboardSection::Goals {
                primary_goal,
                target_weight_kg,
                horizon_weeks,
            } => {
                OnboardLogic::save_goals(
                    &mut store,
                    GoalsInfo {
                        primary_goal: primary_goal.clone(),
                        target_weight_kg: *target_weight_kg,
                        horizon_weeks: *horizon_weeks,
                    },
                )?;
                ttlog(&pool.conn, "onboard", "goals", "Goals section saved")?;
            }

            OnboardSection::Fitness {
                experience,
                days_per_week,
                preferred_styles,
            } => {
                OnboardLogic::save_fitness(
                    &mut store,
                    FitnessInfo {
                        experience: experience.clone(),
                        days_per_week: *days_per_week,
                        preferred_styles: preferred_styles.clone(),
                    },
                )?;
                ttlog(&pool.conn, "onboard", "fitness", "Fitness section saved")?;
            }

            OnboardSection::Lifestyle {
                sleep_hours,
                stress_level,
                occupation_activity,
            } => {
                OnboardLogic::save_lifestyle(
                    &mut store,
                    LifestyleInfo {
                        sleep_hours: *sleep_hours,
                        stress_level: *stress_level,
                        occupation_activity: occupation_activity.clone(),
                    },
                )?;
                ttlog(&pool.conn, "onboard", "lifestyle", "Lifestyle section saved")?;
            }

            OnboardSection::Nutrition {
                meals_per_day,
                dietary_pattern,
                caffeine_per_day,
                alcohol_per_week,
            } => {
                OnboardLogic::save_nutrition(
                    &mut store,
                    NutritionHabitsInfo {
                        meals_per_day: *meals_per_day,
                        dietary_pattern: dietary_pattern.clone(),
                        caffeine_per_day: *caffeine_per_day,
                        alcohol_per_week: *alcohol_per_week,
                    },
                )?;
                ttlog(&pool.conn, "onboard", "nutrition", "Nutrition section saved")?;
            }

            OnboardSection::Show => {
                OnboardLogic::show(&mut store)?;
            }
        }
    }

    Ok(())
}
