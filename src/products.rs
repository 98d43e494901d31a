// Product collection service

use crate::error::Result;
use crate::models::{NewProduct, Product, ProductPatch};
use crate::store::Store;
use tracing::debug;

/// CRUD operations and read-only queries over the product collection.
///
/// Same load/save discipline as [`crate::users::UserService`]; the query
/// helpers are plain in-memory predicates applied after a full load.
#[derive(Debug, Clone)]
pub struct ProductService {
    store: Store,
}

impl ProductService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn list_all(&self) -> Result<Vec<Product>> {
        self.store.load()
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<Product>> {
        let products: Vec<Product> = self.store.load()?;
        Ok(products.into_iter().find(|p| p.id == id))
    }

    pub fn create(&self, input: NewProduct) -> Result<Product> {
        let mut products: Vec<Product> = self.store.load()?;

        let product = Product::new(input);
        debug!(id = %product.id, "creating product");
        products.push(product.clone());
        self.store.save(&products)?;

        Ok(product)
    }

    /// Apply a partial update to the product with the given id.
    ///
    /// Returns `Ok(None)` without writing when no such product exists. The
    /// record keeps its position in the collection.
    pub fn update(&self, id: &str, patch: ProductPatch) -> Result<Option<Product>> {
        let mut products: Vec<Product> = self.store.load()?;

        let Some(index) = products.iter().position(|p| p.id == id) else {
            return Ok(None);
        };

        products[index].apply(patch);
        let product = products[index].clone();
        debug!(id = %product.id, "updating product");
        self.store.save(&products)?;

        Ok(Some(product))
    }

    /// Delete the product with the given id. Returns `false` without
    /// writing when nothing matched.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let products: Vec<Product> = self.store.load()?;
        let initial_len = products.len();

        let remaining: Vec<Product> = products.into_iter().filter(|p| p.id != id).collect();
        if remaining.len() == initial_len {
            return Ok(false);
        }

        debug!(id, "deleting product");
        self.store.save(&remaining)?;
        Ok(true)
    }

    /// Products with `min <= price <= max`, in collection order
    pub fn by_price_range(&self, min: f64, max: f64) -> Result<Vec<Product>> {
        let products: Vec<Product> = self.store.load()?;
        Ok(products
            .into_iter()
            .filter(|p| p.price >= min && p.price <= max)
            .collect())
    }

    /// Products currently in stock, in collection order
    pub fn in_stock_only(&self) -> Result<Vec<Product>> {
        let products: Vec<Product> = self.store.load()?;
        Ok(products.into_iter().filter(|p| p.in_stock).collect())
    }
}
