//! Endpoint URL construction.

use anyhow::{Context, Result};
use url::Url;

use crate::config::CreationEndpoint;

/// Resolved endpoint URLs for one service base.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
    creation: CreationEndpoint,
}

impl Endpoints {
    pub fn new(base_url: &str, creation: CreationEndpoint) -> Result<Self> {
        let base = Url::parse(base_url)
            .with_context(|| format!("invalid warning service URL: {base_url}"))?;
        if base.cannot_be_a_base() {
            anyhow::bail!("warning service URL cannot be a base: {base_url}");
        }
        Ok(Self { base, creation })
    }

    /// `{base}/{segments...}`, with each segment percent-encoded.
    fn join(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(segments);
        }
        url.into()
    }

    pub fn check_root_url(&self, domain: &str) -> String {
        self.join(&["check_root_url", domain])
    }

    pub fn get_warning(&self, domain: &str) -> String {
        self.join(&["get_warning", domain])
    }

    pub fn get_reviews(&self, domain: &str) -> String {
        self.join(&["get_reviews", domain])
    }

    pub fn create(&self) -> String {
        self.join(&[self.creation.path()])
    }
}
