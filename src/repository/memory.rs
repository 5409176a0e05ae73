use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::entities::{HasId, Org, Unit};
use crate::domain::schedule::MusterConfiguration;

use super::errors::{FindAllError, FindError, InsertError, UpdateError};
use super::org::Repository;

/// Keeps organizations and units in process memory.
pub struct InMemoryRepository {
    orgs: Mutex<Vec<Org>>,
    units: Mutex<Vec<Unit>>,
}

impl InMemoryRepository {
    pub fn new() -> InMemoryRepository {
        InMemoryRepository {
            orgs: Mutex::new(vec![]),
            units: Mutex::new(vec![]),
        }
    }

    fn next_id<T: HasId>(values: &[T]) -> u32 {
        values.iter().map(HasId::get_id).max().unwrap_or(0) + 1
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert_org(&self, org: Org) -> Result<Org, InsertError> {
        let mut lock = match self.orgs.lock() {
            Ok(lock) => lock,
            _ => return Err(InsertError::Unknown),
        };

        if lock.iter().any(|existing| existing.name == org.name) {
            return Err(InsertError::Conflict);
        }

        let mut org = org;
        org.set_id(Self::next_id(lock.as_slice()));
        lock.push(org.clone());

        Ok(org)
    }

    async fn find_org(&self, id: u32) -> Result<Org, FindError> {
        let lock = match self.orgs.lock() {
            Ok(lock) => lock,
            _ => return Err(FindError::Unknown),
        };

        lock.iter()
            .find(|org| org.id == id)
            .cloned()
            .ok_or(FindError::NotFound)
    }

    async fn update_default_muster(
        &self,
        id: u32,
        musters: Vec<MusterConfiguration>,
    ) -> Result<Org, UpdateError> {
        let mut lock = match self.orgs.lock() {
            Ok(lock) => lock,
            _ => return Err(UpdateError::Unknown),
        };

        match lock.iter_mut().find(|org| org.id == id) {
            Some(org) => {
                org.default_muster_configuration = musters;
                Ok(org.clone())
            }
            None => Err(UpdateError::NotFound),
        }
    }

    async fn insert_unit(&self, unit: Unit) -> Result<Unit, InsertError> {
        let mut lock = match self.units.lock() {
            Ok(lock) => lock,
            _ => return Err(InsertError::Unknown),
        };

        if lock
            .iter()
            .any(|existing| existing.org == unit.org && existing.name == unit.name)
        {
            return Err(InsertError::Conflict);
        }

        let mut unit = unit;
        unit.set_id(Self::next_id(lock.as_slice()));
        lock.push(unit.clone());

        Ok(unit)
    }

    async fn find_unit(&self, org: u32, id: u32) -> Result<Unit, FindError> {
        let lock = match self.units.lock() {
            Ok(lock) => lock,
            _ => return Err(FindError::Unknown),
        };

        lock.iter()
            .find(|unit| unit.org == org && unit.id == id)
            .cloned()
            .ok_or(FindError::NotFound)
    }

    async fn find_units(&self, org: u32) -> Result<Vec<Unit>, FindAllError> {
        let lock = match self.units.lock() {
            Ok(lock) => lock,
            _ => return Err(FindAllError::Unknown),
        };

        Ok(lock.iter().filter(|unit| unit.org == org).cloned().collect())
    }

    async fn update_unit_muster(
        &self,
        org: u32,
        id: u32,
        musters: Option<Vec<MusterConfiguration>>,
    ) -> Result<Unit, UpdateError> {
        let mut lock = match self.units.lock() {
            Ok(lock) => lock,
            _ => return Err(UpdateError::Unknown),
        };

        match lock.iter_mut().find(|unit| unit.org == org && unit.id == id) {
            Some(unit) => {
                unit.muster_configuration = musters;
                Ok(unit.clone())
            }
            None => Err(UpdateError::NotFound),
        }
    }
}
