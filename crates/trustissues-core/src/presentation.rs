//! Interstitial modal view model.
//!
//! Rendering is a host concern; this module only decides what the modal
//! says. Hosts implement [`Presenter`].

use crate::aggregator::LookupOutcome;
use crate::intercept::Decision;

const NO_WARNING: &str = "No warnings found";
const NO_EXTENDED: &str = "Additional information not available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalSection {
    /// Shown while the lookup is in flight.
    Loading,
    Warning { message: String, extended: String },
    Review { summary: String, details: String },
    /// Neutral information (e.g. nothing to check for this host).
    Notice(String),
    /// Cautionary fallback; the user may still continue.
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Leave,
    Continue,
}

impl ModalAction {
    pub fn label(self) -> &'static str {
        match self {
            ModalAction::Leave => "Leave",
            ModalAction::Continue => "Continue with Sign Up",
        }
    }
}

impl From<ModalAction> for Decision {
    fn from(action: ModalAction) -> Self {
        match action {
            ModalAction::Leave => Decision::Leave,
            ModalAction::Continue => Decision::Continue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub sections: Vec<ModalSection>,
    /// False only while loading; a failed lookup never blocks the user.
    pub continue_enabled: bool,
}

impl ModalView {
    pub fn actions(&self) -> [ModalAction; 2] {
        [ModalAction::Leave, ModalAction::Continue]
    }

    pub fn is_cautionary(&self) -> bool {
        self.sections
            .iter()
            .any(|s| matches!(s, ModalSection::Error(_)))
    }
}

/// Narrow rendering seam implemented by hosts.
pub trait Presenter {
    fn render(&mut self, view: &ModalView);
}

pub fn modal_title(display_name: &str) -> String {
    format!("TRUST ISSUES: {display_name} Analysis")
}

/// Modal shown while the lookup runs; continuing is disabled.
pub fn loading_modal(display_name: &str) -> ModalView {
    ModalView {
        title: modal_title(display_name),
        sections: vec![ModalSection::Loading],
        continue_enabled: false,
    }
}

fn non_empty(s: &str, fallback: &str) -> String {
    if s.trim().is_empty() {
        fallback.to_string()
    } else {
        s.to_string()
    }
}

/// Modal for a finished lookup.
pub fn build_modal(display_name: &str, outcome: &LookupOutcome) -> ModalView {
    let mut sections = Vec::new();
    match outcome {
        LookupOutcome::Resolved(report) => {
            match &report.warning {
                Ok(Some(w)) => sections.push(ModalSection::Warning {
                    message: non_empty(&w.message, NO_WARNING),
                    extended: non_empty(&w.extended_message, NO_EXTENDED),
                }),
                Ok(None) => sections.push(ModalSection::Warning {
                    message: NO_WARNING.to_string(),
                    extended: NO_EXTENDED.to_string(),
                }),
                Err(e) => sections.push(ModalSection::Error(format!(
                    "Failed to load security information ({e}). Proceed with caution."
                ))),
            }
            match &report.reviews {
                Ok(reviews) => {
                    sections.extend(reviews.summaries().iter().map(|r| ModalSection::Review {
                        summary: r.summary.clone(),
                        details: r.details.clone(),
                    }))
                }
                Err(_) => sections.push(ModalSection::Notice(
                    "Review summaries are unavailable right now.".to_string(),
                )),
            }
        }
        LookupOutcome::Failed { error, .. } => sections.push(ModalSection::Error(format!(
            "Error loading security data ({error}). Proceed with caution."
        ))),
        LookupOutcome::AlreadyChecked(domain) => sections.push(ModalSection::Notice(format!(
            "{domain} was already checked in this session."
        ))),
        LookupOutcome::NotLookupable(domain) => sections.push(ModalSection::Notice(format!(
            "{domain} is a local or internal host; no trust data is kept for it."
        ))),
    }
    ModalView {
        title: modal_title(display_name),
        sections,
        continue_enabled: true,
    }
}
