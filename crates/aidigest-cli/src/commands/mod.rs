pub mod generate;
pub mod init;
pub mod version;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the AI digest from a query over the vault
    Generate(generate::GenerateArgs),
    /// Write a starter .ai-digest.json into the vault
    Init(init::InitArgs),
    /// Print version information
    Version,
}
