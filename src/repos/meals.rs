use crate::errors::AppResult;
use crate::models::meal::MealEntry;
use crate::repos::load_list;
use crate::store::{RecordStore, keys, write};

pub struct MealRepo<'a> {
    store: &'a mut dyn RecordStore,
}

impl<'a> MealRepo<'a> {
    pub fn new(store: &'a mut dyn RecordStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> AppResult<Vec<MealEntry>> {
        load_list(&*self.store, keys::NUTRITION_MEALS)
    }

    pub fn add(&mut self, meal: MealEntry) -> AppResult<()> {
        let mut meals = self.list()?;
        meals.push(meal);
        write(self.store, keys::NUTRITION_MEALS, &meals)
    }
}
