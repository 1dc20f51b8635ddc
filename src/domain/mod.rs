//! Domain layer containing business entities and storage contracts.
//!
//! - [`entities`] - `Product` and `User` with their invariants
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the HTTP or storage layers; the
//! repository traits are implemented in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
