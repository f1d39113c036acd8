use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{Product, ProductFields};

/// Repository trait for Product persistence.
///
/// Lookups by id return `None` when the row is absent; the service decides
/// what absence means.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product with the given fields
    async fn create(&self, fields: ProductFields) -> ProductResult<Product>;

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// All products, highest id first
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Overwrite name, price and availability
    async fn update(&self, id: i32, fields: ProductFields) -> ProductResult<Option<Product>>;

    /// Flip availability in a single step
    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Returns whether a row was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<i32, Product>,
    last_id: i32,
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Ids are assigned sequentially from 1 and never reused, like a serial column.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, fields: ProductFields) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let product = Product::new(store.last_id, fields);
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().rev().cloned().collect())
    }

    async fn update(&self, id: i32, fields: ProductFields) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        let Some(product) = store.products.get_mut(&id) else {
            return Ok(None);
        };
        product.apply_update(fields);

        tracing::info!(product_id = id, "Updated product");
        Ok(Some(product.clone()))
    }

    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        let Some(product) = store.products.get_mut(&id) else {
            return Ok(None);
        };
        product.availability = !product.availability;

        tracing::info!(
            product_id = id,
            availability = product.availability,
            "Toggled product availability"
        );
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
