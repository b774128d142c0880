use std::env;
use std::io::Write as _;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use aidigest_core::model::QueryResult;

use crate::error::QueryError;

/// The external query-evaluation collaborator.
///
/// Implementations evaluate a user-authored query string against the content
/// store and return the matched rows. This tool never parses the query itself.
pub trait QueryEngine {
    /// Name the engine is registered under.
    fn name(&self) -> &str;

    /// Whether the engine can be invoked at all. Checked before the
    /// prompt-to-execution pipeline starts.
    fn available(&self) -> bool;

    /// Evaluate one query. Called exactly once per run.
    fn query(&self, query: &str) -> Result<QueryResult, QueryError>;
}

/// Engine adapter that runs a configured command line.
///
/// The query string is written to the child's stdin; the child must print one
/// JSON object in the wire form `{"successful": bool, "value": {"values":
/// [...]}, "error": "..."}` on stdout. Exit status is not consulted; the
/// `successful` flag is the protocol.
pub struct CommandEngine {
    name: String,
    argv: Vec<String>,
}

impl CommandEngine {
    /// Build an engine from a non-empty argv. Returns `None` when no command
    /// is configured.
    pub fn from_argv(name: &str, argv: &[String]) -> Option<Self> {
        if argv.is_empty() || argv[0].is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            argv: argv.to_vec(),
        })
    }
}

impl QueryEngine for CommandEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn available(&self) -> bool {
        command_on_path(&self.argv[0])
    }

    fn query(&self, query: &str) -> Result<QueryResult, QueryError> {
        debug!(engine = %self.argv[0], "evaluating query");

        let mut child = Command::new(&self.argv[0])
            .args(&self.argv[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| QueryError::Spawn {
                command: self.argv[0].clone(),
                source,
            })?;

        child
            .stdin
            .take()
            .ok_or_else(|| QueryError::Spawn {
                command: self.argv[0].clone(),
                source: std::io::Error::other("failed to open engine stdin"),
            })?
            .write_all(query.as_bytes())?;

        let output = child.wait_with_output()?;
        let stdout = String::from_utf8(output.stdout)?;
        debug!(reply = %stdout, "raw engine reply");

        let value = serde_json::from_str(&stdout)?;
        Ok(QueryResult::from_value(&value)?)
    }
}

/// Resolve a command the way the shell would: an explicit path must exist,
/// a bare name must appear in some `PATH` directory.
fn command_on_path(command: &str) -> bool {
    let path = Path::new(command);
    if path.components().count() > 1 {
        return path.is_file();
    }
    let Some(dirs) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&dirs).any(|dir| dir.join(command).is_file())
}
