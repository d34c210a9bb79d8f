use crate::errors::{AppError, AppResult};
use crate::models::cardio::CardioLog;
use crate::repos::load_list;
use crate::store::{RecordStore, keys, write};

pub struct CardioRepo<'a> {
    store: &'a mut dyn RecordStore,
}

impl<'a> CardioRepo<'a> {
    pub fn new(store: &'a mut dyn RecordStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> AppResult<Vec<CardioLog>> {
        load_list(&*self.store, keys::CARDIO_LOGS)
    }

    pub fn add(&mut self, log: CardioLog) -> AppResult<()> {
        let mut logs = self.list()?;
        logs.push(log);
        write(self.store, keys::CARDIO_LOGS, &logs)
    }

    /// Delete by id. Ids may be abbreviated to a unique prefix.
    pub fn delete(&mut self, id: &str) -> AppResult<CardioLog> {
        let logs = self.list()?;

        let mut matches = logs.iter().filter(|l| l.id.starts_with(id));
        let found = match (matches.next(), matches.next()) {
            (Some(l), None) => l.clone(),
            (Some(_), Some(_)) => {
                return Err(AppError::Other(format!(
                    "Cardio id prefix '{}' is ambiguous",
                    id
                )));
            }
            _ => return Err(AppError::RecordNotFound(id.to_string())),
        };

        let remaining: Vec<CardioLog> = logs.into_iter().filter(|l| l.id != found.id).collect();
        write(self.store, keys::CARDIO_LOGS, &remaining)?;
        Ok(found)
    }
}
