//! Core data model: identities, records and datasets.

pub mod identity;
pub mod record;

pub use identity::Identity;
pub use record::{Dataset, Record};
