// RecordStore - file-backed JSON collections with CRUD services

pub mod error;
pub mod models;
pub mod products;
pub mod record;
pub mod response;
pub mod store;
pub mod users;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use models::{NewProduct, NewUser, Product, ProductPatch, User, UserPatch};
pub use products::ProductService;
pub use record::Record;
pub use response::{ApiResponse, Reply};
pub use store::Store;
pub use users::UserService;
