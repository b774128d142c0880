pub mod config;
pub mod digest;
pub mod error;
pub mod model;
pub mod vault;

pub use config::DigestConfig;
pub use digest::{write_digest, DigestOutcome};
pub use error::CoreError;
pub use model::{DigestSection, QueryResult, Row};
pub use vault::{NoteItem, RunLock, Vault};
