use crate::cli::commands::{in_bounds, period_bounds_opt};
use crate::cli::parser::{Commands, MealAction};
use crate::config::Config;
use crate::core::meal::MealLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::repos::MealRepo;
use crate::store::SqliteStore;
use crate::utils::formatting::fmt_opt;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Meal { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut store = SqliteStore::new(&pool.conn);

        match action {
            MealAction::Add {
                name,
                calories,
                protein_g,
                carbs_g,
                fat_g,
                date,
            } => {
                let meal = MealLogic::add(
                    &mut store,
                    name.clone(),
                    *calories,
                    *protein_g,
                    *carbs_g,
                    *fat_g,
                    date.as_ref(),
                )?;

                ttlog(
                    &pool.conn,
                    "meal",
                    &meal.date_str(),
                    &format!("'{}' ({} kcal)", meal.name, meal.calories),
                )?;
            }

            MealAction::List { period } => {
                let bounds = period_bounds_opt(period)?;

                let mut meals = MealRepo::new(&mut store).list()?;
                meals.retain(|m| in_bounds(&m.logged_at, &bounds));
                meals.sort_by_key(|m| m.logged_at);

                if meals.is_empty() {
                    println!("No meals logged.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("DATE", 10),
                    Column::new("MEAL", 24),
                    Column::new("KCAL", 6),
                    Column::new("P(g)", 5),
                    Column::new("C(g)", 5),
                    Column::new("F(g)", 5),
                ]);

                let mut total_kcal: u32 = 0;
                for m in &meals {
                    total_kcal += m.calories;
                    table.add_row(vec![
                        m.date_str(),
                        m.name.clone(),
                        m.calories.to_string(),
                        fmt_opt(&m.protein_g),
                        fmt_opt(&m.carbs_g),
                        fmt_opt(&m.fat_g),
                    ]);
                }

                println!("{}", table.render());
                println!("{} meal(s), {} kcal total.", meals.len(), total_kcal);
            }
        }
    }

    Ok(())
}
