//! Profile persistence — key derivation, store trait, and libSQL backend.

pub mod libsql_backend;
pub mod profile;
pub mod traits;

pub use libsql_backend::LibSqlStore;
pub use profile::{UserProfile, profile_key};
pub use traits::ProfileStore;
