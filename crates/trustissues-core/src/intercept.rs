//! Sign-up action interception.
//!
//! A host hands us the label of a clicked button or link; if it looks like a
//! sign-up/continue action the click is held as a [`PendingAction`] until the
//! user answers the modal.

/// Labels intercepted when the config does not override them.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "sign up",
    "continue",
    "register",
    "get started",
    "join now",
    "join",
];

/// True when `label` contains any keyword, ignoring case and surrounding whitespace.
pub fn is_signup_action<S: AsRef<str>>(label: &str, keywords: &[S]) -> bool {
    let label = label.trim().to_lowercase();
    if label.is_empty() {
        return false;
    }
    keywords.iter().any(|k| {
        let k = k.as_ref().trim().to_lowercase();
        !k.is_empty() && label.contains(&k)
    })
}

/// User's answer to the interstitial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Close the modal and drop the intercepted action.
    Leave,
    /// Close the modal and replay the intercepted action.
    Continue,
}

/// An intercepted action waiting for the user's decision.
#[derive(Debug)]
pub struct PendingAction<A> {
    action: A,
    label: String,
}

impl<A> PendingAction<A> {
    /// Hold `action` unconditionally (the host already decided to intercept it).
    pub fn new(label: &str, action: A) -> Self {
        Self {
            action,
            label: label.trim().to_string(),
        }
    }

    /// Hold `action` if `label` matches a keyword; otherwise hand it back untouched.
    pub fn intercept<S: AsRef<str>>(label: &str, action: A, keywords: &[S]) -> Result<Self, A> {
        if is_signup_action(label, keywords) {
            tracing::debug!(label = label.trim(), "intercepted sign-up action");
            Ok(Self::new(label, action))
        } else {
            Err(action)
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Consume the pending action; `Some` means the caller should replay it.
    pub fn resolve(self, decision: Decision) -> Option<A> {
        match decision {
            Decision::Leave => {
                tracing::info!(label = %self.label, "user left before continuing");
                None
            }
            Decision::Continue => Some(self.action),
        }
    }
}
