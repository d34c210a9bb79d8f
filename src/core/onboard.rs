use crate::errors::AppResult;
use crate::models::profile::{
    BasicsInfo, FitnessInfo, GoalsInfo, LifestyleInfo, NutritionHabitsInfo,
};
use crate::repos::ProfileRepo;
use crate::store::{RecordStore, keys};
use crate::ui::messages::success;
use serde::Serialize;

pub struct OnboardLogic;

impl OnboardLogic {
    pub fn save_basics(store: &mut dyn RecordStore, info: BasicsInfo) -> AppResult<()> {
        ProfileRepo::new(store).save(keys::ONBOARDING_BASICS, &info)?;
        success(format!("Basics saved for {}.", info.name));
        Ok(())
    }

    pub fn save_goals(store: &mut dyn RecordStore, info: GoalsInfo) -> AppResult<()> {
        ProfileRepo::new(store).save(keys::ONBOARDING_GOALS, &info)?;
        success(format!("Goal saved: {}.", info.primary_goal));
        Ok(())
    }

    pub fn save_fitness(store: &mut dyn RecordStore, info: FitnessInfo) -> AppResult<()> {
        ProfileRepo::new(store).save(keys::ONBOARDING_FITNESS, &info)?;
        success(format!(
            "Fitness profile saved ({} days/week, {}).",
            info.days_per_week, info.experience
        ));
        Ok(())
    }

    pub fn save_lifestyle(store: &mut dyn RecordStore, info: LifestyleInfo) -> AppResult<()> {
        ProfileRepo::new(store).save(keys::ONBOARDING_LIFESTYLE, &info)?;
        success("Lifestyle profile saved.");
        Ok(())
    }

    pub fn save_nutrition(store: &mut dyn RecordStore, info: NutritionHabitsInfo) -> AppResult<()> {
        ProfileRepo::new(store).save(keys::ONBOARDING_NUTRITION, &info)?;
        success("Nutrition habits saved.");
        Ok(())
    }

    /// Print every stored onboarding section as YAML.
    pub fn show(store: &mut dyn RecordStore) -> AppResult<()> {
        let repo = ProfileRepo::new(store);

        print_section::<BasicsInfo>(&repo, keys::ONBOARDING_BASICS, "Basics")?;
        print_section::<GoalsInfo>(&repo, keys::ONBOARDING_GOALS, "Goals")?;
        print_section::<FitnessInfo>(&repo, keys::ONBOARDING_FITNESS, "Fitness")?;
        print_section::<LifestyleInfo>(&repo, keys::ONBOARDING_LIFESTYLE, "Lifestyle")?;
        print_section::<NutritionHabitsInfo>(&repo, keys::ONBOARDING_NUTRITION, "Nutrition habits")?;

        Ok(())
    }
}

fn print_section<T>(repo: &ProfileRepo, key: &str, label: &str) -> AppResult<()>
where
    T: serde::de::DeserializeOwned + Serialize,
{
    match repo.load::<T>(key)? {
        Some(section) => {
            println!("--- {} ---", label);
            match serde_yaml::to_string(&section) {
                Ok(yaml) => println!("{}", yaml),
                Err(_) => println!("(unrenderable)\n"),
            }
        }
        None => println!("--- {} --- (not set)\n", label),
    }
    Ok(())
}
