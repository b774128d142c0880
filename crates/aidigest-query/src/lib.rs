pub mod engine;
pub mod error;
pub mod registry;

pub use engine::{CommandEngine, QueryEngine};
pub use error::QueryError;
pub use registry::EngineRegistry;
