// Data models for the user and product collections

use crate::record::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user. Email is unique across the collection (enforced by
/// the service layer, not here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Partial update for a user. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Build a fresh record from input, assigning the id and setting both
    /// timestamps to the same instant.
    pub fn new(input: NewUser) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id("user"),
            name: input.name,
            email: input.email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite exactly the fields present in `patch`, then refresh
    /// `updated_at`. `id` and `created_at` are never modified.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        self.updated_at = Utc::now();
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "users"
    }
}

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a product. `in_stock` defaults to true.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub in_stock: Option<bool>,
}

/// Partial update for a product. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub in_stock: Option<bool>,
}

impl Product {
    pub fn new(input: NewProduct) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id("product"),
            name: input.name,
            description: input.description,
            price: input.price,
            in_stock: input.in_stock.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite exactly the fields present in `patch`, then refresh
    /// `updated_at`. `id` and `created_at` are never modified.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }
        self.updated_at = Utc::now();
    }
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "products"
    }
}

// UUIDv7 is a timestamp/random composite, so ids sort roughly by creation
// time and collide only with negligible probability.
fn generate_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::now_v7())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    fn new_user() -> User {
        User::new(NewUser {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
    }

    #[test]
    fn test_new_user_assigns_id_and_timestamps() {
        let user = new_user();

        assert!(user.id.starts_with("user_"));
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = new_user();
        let b = new_user();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_user_apply_partial_patch() {
        let mut user = new_user();
        let original_id = user.id.clone();
        let original_created = user.created_at;

        user.apply(UserPatch {
            name: Some("Alicia".to_string()),
            email: None,
        });

        assert_eq!(user.name, "Alicia");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.id, original_id);
        assert_eq!(user.created_at, original_created);
    }

    #[test]
    fn test_empty_patch_only_touches_updated_at() {
        let mut user = new_user();
        let before = user.clone();

        thread::sleep(Duration::from_millis(2));
        user.apply(UserPatch::default());

        assert!(user.updated_at > before.updated_at);
        assert_eq!(user.id, before.id);
        assert_eq!(user.name, before.name);
        assert_eq!(user.email, before.email);
        assert_eq!(user.created_at, before.created_at);
    }

    #[test]
    fn test_new_product_defaults_in_stock() {
        let product = Product::new(NewProduct {
            name: "Mouse".to_string(),
            description: "d".to_string(),
            price: 29.99,
            in_stock: None,
        });

        assert!(product.in_stock);
        assert!(product.id.starts_with("product_"));
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_new_product_respects_explicit_in_stock() {
        let product = Product::new(NewProduct {
            name: "Keyboard".to_string(),
            description: "d".to_string(),
            price: 59.99,
            in_stock: Some(false),
        });

        assert!(!product.in_stock);
    }

    #[test]
    fn test_product_wire_field_names() {
        let product = Product::new(NewProduct {
            name: "Mouse".to_string(),
            description: "d".to_string(),
            price: 29.99,
            in_stock: None,
        });

        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"inStock\":true"));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
    }

    #[test]
    fn test_product_apply_patch() {
        let mut product = Product::new(NewProduct {
            name: "Mouse".to_string(),
            description: "d".to_string(),
            price: 29.99,
            in_stock: None,
        });

        product.apply(ProductPatch {
            price: Some(19.99),
            in_stock: Some(false),
            ..Default::default()
        });

        assert_eq!(product.price, 19.99);
        assert!(!product.in_stock);
        assert_eq!(product.name, "Mouse");
        assert_eq!(product.description, "d");
    }
}
