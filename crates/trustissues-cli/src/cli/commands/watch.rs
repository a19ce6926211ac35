//! `trustissues watch` – replay tab events from stdin.
//!
//! Protocol: one event per line, "activate <tab>" or "navigate <tab> <url>".
//! Blank lines and lines starting with `#` are ignored.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use trustissues_core::config::TrustConfig;
use trustissues_core::events::{handle_event, HostEvent};
use trustissues_core::presentation::{build_modal, Presenter};
use trustissues_core::service::HttpWarningService;
use trustissues_core::session::TabId;
use trustissues_core::{resolve_display_name, Aggregator, AggregatorOptions, RootDomain};

use crate::cli::present::TerminalPresenter;

/// Parse one event line. `Ok(None)` for lines to skip.
pub(crate) fn parse_event_line(line: &str) -> Result<Option<HostEvent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default();
    let tab_id = parts
        .next()
        .with_context(|| format!("missing tab id: {line}"))?
        .parse::<TabId>()
        .with_context(|| format!("invalid tab id: {line}"))?;
    match verb {
        "activate" => Ok(Some(HostEvent::TabActivated { tab_id })),
        "navigate" => {
            let url = parts
                .next()
                .with_context(|| format!("missing url: {line}"))?
                .to_string();
            Ok(Some(HostEvent::TabNavigated { tab_id, url }))
        }
        other => anyhow::bail!("unknown event {other:?}: {line}"),
    }
}

/// One-line summary of the domains checked during the session, sorted.
pub(crate) fn session_summary<'a>(domains: impl Iterator<Item = &'a RootDomain>) -> String {
    let mut names: Vec<&str> = domains.map(RootDomain::as_str).collect();
    if names.is_empty() {
        return "No domains checked.".to_string();
    }
    names.sort_unstable();
    format!("Checked {} domain(s): {}", names.len(), names.join(", "))
}

pub async fn run_watch(cfg: &TrustConfig) -> Result<()> {
    let service = HttpWarningService::new(cfg)?;
    let agg = Aggregator::new(Arc::new(service), AggregatorOptions::from(cfg));
    let mut tabs: HashMap<TabId, String> = HashMap::new();
    let mut presenter = TerminalPresenter::stdout();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading events")? {
        let event = match parse_event_line(&line) {
            Ok(Some(e)) => e,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("skipping: {e:#}");
                continue;
            }
        };
        let url = match &event {
            HostEvent::TabNavigated { tab_id, url } => {
                tabs.insert(*tab_id, url.clone());
                Some(url.clone())
            }
            HostEvent::TabActivated { tab_id } => tabs.get(tab_id).cloned(),
        };
        let Some(outcome) = handle_event(&agg, &tabs, event).await else {
            continue;
        };
        let display = url
            .as_deref()
            .and_then(resolve_display_name)
            .unwrap_or_else(|| outcome.domain().to_string());
        presenter.render(&build_modal(&display, &outcome));
    }
    let summary = agg
        .with_session(|s| session_summary(s.seen_domains()))
        .await;
    tracing::info!(%summary, "watch finished");
    println!("{summary}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_activate_and_navigate() {
        assert_eq!(
            parse_event_line("activate 4").unwrap(),
            Some(HostEvent::TabActivated { tab_id: 4 })
        );
        assert_eq!(
            parse_event_line("  navigate 2 https://mail.google.com/  ").unwrap(),
            Some(HostEvent::TabNavigated {
                tab_id: 2,
                url: "https://mail.google.com/".to_string()
            })
        );
    }

    #[test]
    fn parse_skips_blank_and_comment_lines() {
        assert_eq!(parse_event_line("").unwrap(), None);
        assert_eq!(parse_event_line("# recorded session").unwrap(), None);
    }

    #[test]
    fn summary_lists_domains_sorted() {
        let domains = [RootDomain::new("zoom.us"), RootDomain::new("example.com")];
        assert_eq!(
            session_summary(domains.iter()),
            "Checked 2 domain(s): example.com, zoom.us"
        );
        assert_eq!(session_summary(std::iter::empty()), "No domains checked.");
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        assert!(parse_event_line("activate").is_err());
        assert!(parse_event_line("activate x").is_err());
        assert!(parse_event_line("navigate 1").is_err());
        assert!(parse_event_line("close 1").is_err());
    }
}
