//! Repository double that counts I/O, for handler tests.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rust_decimal::Decimal;

use catalog_products::{Product, ProductId};

use crate::repository::{ProductRepository, RepositoryError, RepositoryResult};

#[derive(Debug, Default)]
pub(crate) struct RecordingRepository {
    products: Mutex<BTreeMap<ProductId, Product>>,
    reads: AtomicUsize,
    writes: AtomicUsize,
    fail_writes: bool,
    vanish_on_update: bool,
}

impl RecordingRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Every write fails with a storage error.
    pub(crate) fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// `update` behaves as if the row was deleted between read and write.
    pub(crate) fn vanishing_on_update() -> Self {
        Self {
            vanish_on_update: true,
            ..Self::default()
        }
    }

    /// Insert a stored product directly, bypassing the write counter.
    pub(crate) fn seed(&self, id: i64, price: Decimal) -> ProductId {
        let id = ProductId::from_raw(id);
        let product = Product::with_id(id, "Test Product", "Test Description", price, 10).unwrap();
        self.products.lock().unwrap().insert(id, product);
        id
    }

    pub(crate) fn stored(&self, id: ProductId) -> Option<Product> {
        self.products.lock().unwrap().get(&id).cloned()
    }

    pub(crate) fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn record_write(&self) -> RepositoryResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(RepositoryError::Storage("connection reset".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for RecordingRepository {
    async fn get_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.stored(id))
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Product>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.products.lock().unwrap().values().cloned().collect())
    }

    async fn add(&self, mut product: Product) -> RepositoryResult<ProductId> {
        self.record_write()?;
        let mut products = self.products.lock().unwrap();
        let id = ProductId::from_raw(products.keys().next_back().map_or(1, |last| last.get() + 1));
        product.assign_id(id);
        products.insert(id, product);
        Ok(id)
    }

    async fn update(&self, product: &Product) -> RepositoryResult<bool> {
        self.record_write()?;
        if self.vanish_on_update {
            return Ok(false);
        }
        let mut products = self.products.lock().unwrap();
        match products.get_mut(&product.id_typed()) {
            Some(slot) => {
                *slot = product.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ProductId) -> RepositoryResult<bool> {
        self.record_write()?;
        Ok(self.products.lock().unwrap().remove(&id).is_some())
    }
}
