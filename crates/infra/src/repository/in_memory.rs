use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use catalog_application::{ProductRepository, RepositoryError, RepositoryResult};
use catalog_products::{Product, ProductId};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<ProductId, Product>,
    last_id: i64,
}

/// In-memory product store.
///
/// Intended for tests/dev. Ids come from a monotonic counter starting at 1 and
/// are never reused, so iteration order of the map is insertion order.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    table: RwLock<Table>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned<T>(_: T) -> RepositoryError {
        RepositoryError::Storage("lock poisoned".to_string())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        let table = self.table.read().map_err(Self::poisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Product>> {
        let table = self.table.read().map_err(Self::poisoned)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn add(&self, mut product: Product) -> RepositoryResult<ProductId> {
        let mut table = self.table.write().map_err(Self::poisoned)?;
        table.last_id += 1;
        let id = ProductId::from_raw(table.last_id);
        product.assign_id(id);
        table.rows.insert(id, product);
        Ok(id)
    }

    async fn update(&self, product: &Product) -> RepositoryResult<bool> {
        let mut table = self.table.write().map_err(Self::poisoned)?;
        match table.rows.get_mut(&product.id_typed()) {
            Some(row) => {
                *row = product.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ProductId) -> RepositoryResult<bool> {
        let mut table = self.table.write().map_err(Self::poisoned)?;
        Ok(table.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(name: &str) -> Product {
        Product::new(name, "desc", Decimal::new(1000, 2), 3).unwrap()
    }

    #[tokio::test]
    async fn add_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();
        let a = repo.add(product("a")).await.unwrap();
        let b = repo.add(product("b")).await.unwrap();

        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
        assert_eq!(repo.get_by_id(b).await.unwrap().unwrap().id_typed(), b);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = InMemoryProductRepository::new();
        let a = repo.add(product("a")).await.unwrap();
        assert!(repo.delete(a).await.unwrap());

        let b = repo.add(product("b")).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn get_all_preserves_insertion_order() {
        let repo = InMemoryProductRepository::new();
        for name in ["first", "second", "third"] {
            repo.add(product(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn update_reports_missing_rows() {
        let repo = InMemoryProductRepository::new();
        let mut ghost = product("ghost");
        ghost.assign_id(ProductId::from_raw(99));

        assert!(!repo.update(&ghost).await.unwrap());
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_existing_row() {
        let repo = InMemoryProductRepository::new();
        let id = repo.add(product("a")).await.unwrap();

        let mut stored = repo.get_by_id(id).await.unwrap().unwrap();
        stored.update("renamed", "", Decimal::new(1100, 2), 7).unwrap();
        assert!(repo.update(&stored).await.unwrap());

        assert_eq!(repo.get_by_id(id).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn delete_missing_returns_false() {
        let repo = InMemoryProductRepository::new();
        assert!(!repo.delete(ProductId::from_raw(1)).await.unwrap());
    }
}
