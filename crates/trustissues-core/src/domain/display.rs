//! Display name used to title the modal.

use super::host_labels;

/// Second-to-last hostname label, capitalized (`mail.google.com` → `Google`).
///
/// Single-label hosts use their only label (`localhost` → `Localhost`).
/// Returns `None` for URLs without a parseable host.
pub fn resolve_display_name(url: &str) -> Option<String> {
    let (_, labels) = host_labels(url)?;
    let label = if labels.len() > 1 {
        &labels[labels.len() - 2]
    } else {
        &labels[0]
    };
    Some(capitalize(label))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_second_to_last_label() {
        assert_eq!(
            resolve_display_name("https://mail.google.com/x").as_deref(),
            Some("Google")
        );
        assert_eq!(
            resolve_display_name("https://ebay.com").as_deref(),
            Some("Ebay")
        );
    }

    #[test]
    fn display_name_for_single_label_host() {
        assert_eq!(
            resolve_display_name("http://localhost:8000").as_deref(),
            Some("Localhost")
        );
    }

    #[test]
    fn display_name_none_for_invalid_url() {
        assert!(resolve_display_name("not a url").is_none());
    }
}
