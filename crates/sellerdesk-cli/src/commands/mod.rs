//! CLI subcommands

pub mod department;
pub mod seller;

/// Print `value` as pretty JSON
fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
