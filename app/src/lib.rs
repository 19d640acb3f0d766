use anyhow::{Context, Result};
use log::*;
use r2d2::Pool;

use infra::persistence::DocumentConnectionManager;

pub mod catalog;
pub mod config;
pub mod orders;
#[cfg(test)]
mod test;

/// The assembled application: owns the storage pool and hands out the
/// services built over it.
#[derive(Clone)]
pub struct PizzaDb {
    db: Pool<DocumentConnectionManager>,
}

impl PizzaDb {
    pub fn new(config: &config::Config) -> Result<Self> {
        let db = config.postgres.build()?;
        Ok(PizzaDb { db })
    }

    /// Applies the storage schema. Safe to run repeatedly.
    pub fn setup(&self) -> Result<()> {
        debug!("Init schema");
        self.db.get()?.setup().context("setup persistence")?;
        Ok(())
    }

    pub fn catalog(&self) -> catalog::Catalog {
        catalog::Catalog::new(self.db.clone())
    }
}
