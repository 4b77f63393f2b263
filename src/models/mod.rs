pub mod checkout;
pub mod course;
pub mod filters;

pub use checkout::CheckoutInput;
pub use course::{Course, seed_courses};
pub use filters::{Filters, SortKey};
