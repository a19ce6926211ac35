//! `trustissues register <domain>` – ask the service to analyse a domain.

use anyhow::{Context, Result};
use trustissues_core::config::TrustConfig;
use trustissues_core::service::{HttpWarningService, WarningService};
use trustissues_core::RootDomain;

pub async fn run_register(cfg: &TrustConfig, domain: &str) -> Result<()> {
    let domain = RootDomain::new(domain);
    if !domain.is_lookupable() {
        anyhow::bail!("{domain} is not a registrable domain");
    }
    let service = HttpWarningService::new(cfg)?;
    let created = tokio::task::spawn_blocking({
        let domain = domain.clone();
        move || service.add_website(domain.as_str())
    })
    .await
    .context("register task join")??;
    match created.id {
        Some(id) => println!("Registered {domain} (id {id})"),
        None => println!("Registered {domain}"),
    }
    Ok(())
}
