pub mod digest;
pub mod query;

pub use digest::{join_sections, DigestSection};
pub use query::{QueryResult, Row};
