pub mod api;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod filter;
pub mod models;
pub mod services;
pub mod storage;

pub use cart::{CartEntry, CartLedger, CartOutcome};
pub use catalog::CatalogStore;
pub use error::AppError;
pub use models::{CheckoutInput, Course, Filters, SortKey};
pub use services::Storefront;
