//! # Fruit Stand Console Entry Point
//!
//! The actual setup is in lib.rs for better testability.

fn main() -> anyhow::Result<()> {
    fruit_console::run()?;
    Ok(())
}
