use anyhow::Result;

pub fn run() -> Result<()> {
    println!("aidigest {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
