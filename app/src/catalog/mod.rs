use anyhow::Result;
use log::*;
use r2d2::Pool;

use infra::persistence::DocumentConnectionManager;

pub mod models;
pub mod resources;

pub use models::{Product, Sku};

/// The persistence gateway over the product collection, keyed by SKU.
/// Implementable over any storage backend.
pub trait ProductStore {
    /// Every product currently stored; empty when none exist.
    fn find_all(&self) -> Result<Vec<Product>>;

    fn find(&self, sku: &Sku) -> Result<Option<Product>>;

    /// Inserts when the SKU is new, overwrites the stored record
    /// wholesale when it is not. Returns the persisted record.
    fn save(&self, product: Product) -> Result<Product>;

    /// Removing an absent SKU is a no-op.
    fn delete(&self, sku: &Sku) -> Result<()>;

    /// Exact, case-sensitive match on the category field. Not reachable
    /// from the HTTP surface; the `pz` CLI is its only caller.
    fn find_by_category(&self, category: &str) -> Result<Vec<Product>>;
}

/// PostgreSQL-backed catalog over the shared document store.
#[derive(Clone)]
pub struct Catalog {
    db: Pool<DocumentConnectionManager>,
}

impl Catalog {
    pub fn new(db: Pool<DocumentConnectionManager>) -> Self {
        Catalog { db }
    }
}

impl ProductStore for Catalog {
    fn find_all(&self) -> Result<Vec<Product>> {
        let mut docs = self.db.get()?;
        docs.list::<Product>()
    }

    fn find(&self, sku: &Sku) -> Result<Option<Product>> {
        let mut docs = self.db.get()?;
        docs.load::<Product>(sku.as_str())
    }

    fn save(&self, product: Product) -> Result<Product> {
        debug!("Save product: {:?}", product);
        let mut docs = self.db.get()?;
        docs.save(&product)?;
        Ok(product)
    }

    fn delete(&self, sku: &Sku) -> Result<()> {
        let mut docs = self.db.get()?;
        let removed = docs.delete::<Product>(sku.as_str())?;
        debug!("Delete {}: removed={}", sku, removed);
        Ok(())
    }

    fn find_by_category(&self, category: &str) -> Result<Vec<Product>> {
        let mut docs = self.db.get()?;
        docs.find_by::<Product>("category", category)
    }
}
