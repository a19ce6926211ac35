//! `trustissues check <url>` – look up warnings and show the interstitial.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use trustissues_core::config::TrustConfig;
use trustissues_core::intercept::{is_signup_action, Decision, PendingAction};
use trustissues_core::presentation::{build_modal, loading_modal, ModalAction, Presenter};
use trustissues_core::service::HttpWarningService;
use trustissues_core::{resolve_display_name, Aggregator, AggregatorOptions, LookupOutcome};

use crate::cli::present::TerminalPresenter;

/// Parse an interactive answer; anything unrecognised is `None`.
pub(crate) fn parse_decision(input: &str) -> Option<Decision> {
    match input.trim().to_ascii_lowercase().as_str() {
        "l" | "leave" => Some(Decision::Leave),
        "c" | "continue" => Some(Decision::Continue),
        _ => None,
    }
}

/// Hint printed when the service could not be reached at all.
pub(crate) fn unreachable_hint(base_url: &str, outcome: &LookupOutcome) -> Option<String> {
    match outcome {
        LookupOutcome::Failed { error, .. } if error.is_transport() => Some(format!(
            "could not reach the warning service at {base_url}; check --base-url or the config file"
        )),
        _ => None,
    }
}

/// Ask on stdin until a valid answer arrives; end of input means leave.
async fn prompt_decision() -> Result<Decision> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    loop {
        stdout.write_all(b"[l]eave / [c]ontinue: ").await?;
        stdout.flush().await?;
        match lines.next_line().await.context("reading decision")? {
            None => return Ok(Decision::Leave),
            Some(line) => {
                if let Some(d) = parse_decision(&line) {
                    return Ok(d);
                }
            }
        }
    }
}

pub async fn run_check(
    cfg: &TrustConfig,
    url: &str,
    label: Option<&str>,
    decision: Option<Decision>,
) -> Result<()> {
    if let Some(label) = label {
        if !is_signup_action(label, &cfg.keywords) {
            println!("\"{}\" is not a sign-up action; nothing to check.", label.trim());
            return Ok(());
        }
    }

    let display = resolve_display_name(url)
        .with_context(|| format!("cannot derive a site name from {url}"))?;
    let service = HttpWarningService::new(cfg)?;
    let agg = Aggregator::new(Arc::new(service), AggregatorOptions::from(cfg));
    let mut presenter = TerminalPresenter::stdout();

    presenter.render(&loading_modal(&display));
    let outcome = agg.lookup_url(url).await?;
    presenter.render(&build_modal(&display, &outcome));
    if let Some(hint) = unreachable_hint(&cfg.base_url, &outcome) {
        eprintln!("{hint}");
    }

    let pending = PendingAction::new(
        label.unwrap_or(ModalAction::Continue.label()),
        url.to_string(),
    );
    let decision = match decision {
        Some(d) => d,
        None => prompt_decision().await?,
    };
    match pending.resolve(decision) {
        Some(target) => println!("Continuing to {target}"),
        None => println!("Left {}.", outcome.domain()),
    }
    Ok(())
}
