use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use aidigest_core::{DigestConfig, Vault};

#[derive(Args)]
pub struct InitArgs {
    /// Vault directory
    #[arg(long, default_value = ".")]
    pub vault: PathBuf,

    /// Overwrite an existing config
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: &InitArgs) -> Result<()> {
    let vault = Vault::open(&args.vault).context("Failed to open vault")?;

    if DigestConfig::exists(vault.root()) && !args.force {
        println!("A .ai-digest.json already exists in this vault.");
        println!("Use --force to overwrite it.");
        return Ok(());
    }

    DigestConfig::default()
        .save(vault.root())
        .context("Failed to write config")?;

    println!("Wrote .ai-digest.json. Digest generation is ready.");
    println!();
    println!("Next steps:");
    println!("  set \"engine\" in .ai-digest.json to your query engine command");
    println!("  aidigest generate                  Run a query and write the digest");
    println!("  aidigest generate --query <q>      Skip the interactive prompt");
    Ok(())
}
