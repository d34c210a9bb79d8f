use crate::core::cardio::resolve_timestamp;
use crate::errors::AppResult;
use crate::models::meal::MealEntry;
use crate::repos::MealRepo;
use crate::store::RecordStore;
use crate::ui::messages::success;

pub struct MealLogic;

impl MealLogic {
    pub fn add(
        store: &mut dyn RecordStore,
        name: String,
        calories: u32,
        protein_g: Option<u32>,
        carbs_g: Option<u32>,
        fat_g: Option<u32>,
        when: Option<&String>,
    ) -> AppResult<MealEntry> {
        let logged_at = resolve_timestamp(when)?;
        let meal = MealEntry::new(logged_at, name, calories, protein_g, carbs_g, fat_g);

        let mut repo = MealRepo::new(store);
        repo.add(meal.clone())?;

        success(format!(
            "Logged '{}' ({} kcal) on {}.",
            meal.name,
            meal.calories,
            meal.date_str()
        ));

        Ok(meal)
    }
}
