//! `trustissues resolve <url>` – show the derived root domain and display name.

use anyhow::Result;
use trustissues_core::{resolve_display_name, resolve_root_domain};

pub fn run_resolve(url: &str) -> Result<()> {
    let root = resolve_root_domain(url)?;
    let display = resolve_display_name(url).unwrap_or_else(|| "-".to_string());
    println!("{:<12} {}", "ROOT", root);
    println!("{:<12} {}", "DISPLAY", display);
    println!(
        "{:<12} {}",
        "LOOKUPABLE",
        if root.is_lookupable() { "yes" } else { "no" }
    );
    Ok(())
}
