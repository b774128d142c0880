use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::error;

use aidigest_core::error::CoreError;
use aidigest_core::{write_digest, DigestConfig, DigestOutcome, QueryResult, Vault};
use aidigest_query::registry::VAULT_ENGINE;
use aidigest_query::{EngineRegistry, QueryError};

use crate::prompt;

#[derive(Args)]
pub struct GenerateArgs {
    /// Vault directory
    #[arg(long, default_value = ".")]
    pub vault: PathBuf,

    /// Query to evaluate, bypassing the interactive prompt
    #[arg(long)]
    pub query: Option<String>,
}

pub fn run(args: &GenerateArgs) -> Result<()> {
    let vault = Vault::open(&args.vault).context("Failed to open vault")?;
    let config = DigestConfig::load(vault.root()).context("Failed to load vault config")?;

    // Resolve the engine before collecting a query, so an unconfigured vault
    // fails fast instead of wasting a prompt.
    let registry = EngineRegistry::from_config(&config);
    let Some(engine) = registry.get(VAULT_ENGINE) else {
        bail!("Query engine is not available (set \"engine\" in .ai-digest.json, see `aidigest init`)");
    };
    if !engine.available() {
        let command = config.engine.first().map(String::as_str).unwrap_or_default();
        bail!("Query engine command `{command}` was not found on this system");
    }

    let query = match &args.query {
        Some(q) => q.clone(),
        None => match prompt::collect(&config.default_query)? {
            Some(q) => q,
            // Dismissed: no query executed, no notices, no output.
            None => return Ok(()),
        },
    };

    let result = match engine.query(&query) {
        Ok(result) => result,
        Err(QueryError::Core(CoreError::MalformedResult(detail))) => {
            error!(%detail, "unexpected query result structure");
            bail!("Unexpected query result structure (re-run with -v for details)");
        }
        Err(e) => {
            error!(error = %e, "error executing query");
            bail!("Error executing query (re-run with -v for details)");
        }
    };

    let rows = match result {
        QueryResult::Failure { message } => {
            error!(%message, "query was not successful");
            bail!("Query failed: {message}");
        }
        QueryResult::Success { rows } => rows,
    };

    match write_digest(&vault, &rows, &config) {
        Ok(DigestOutcome::Written { path, sections }) => {
            println!("AI digest saved to {path} ({sections} section(s))");
            Ok(())
        }
        Ok(DigestOutcome::Empty) => {
            eprintln!("No note contents found in query result");
            Ok(())
        }
        Err(CoreError::Locked) => {
            bail!("A digest run is already in progress for this vault");
        }
        Err(e) => {
            error!(error = %e, "error saving digest");
            bail!("Error saving AI digest (re-run with -v for details)");
        }
    }
}
