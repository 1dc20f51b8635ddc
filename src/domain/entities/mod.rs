//! Core domain entities.
//!
//! - [`Product`] - A catalogue item with a name and a positive price
//! - [`User`] - An account able to log in; only the password hash is kept
//!
//! Both are independent aggregates. They are built through validating
//! constructors and never hold invalid state once constructed.

pub mod product;
pub mod user;
pub mod validation;

pub use product::Product;
pub use user::User;
pub use validation::ValidationError;
