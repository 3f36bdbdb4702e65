use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("vhc version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
