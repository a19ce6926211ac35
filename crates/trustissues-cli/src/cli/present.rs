//! Plain-text rendering of the interstitial.

use std::io::Write;

use trustissues_core::presentation::{ModalSection, ModalView, Presenter};

/// Format a view as the lines shown on the terminal.
pub(crate) fn format_view(view: &ModalView) -> String {
    let mut out = String::new();
    let rule = "=".repeat(view.title.chars().count());
    out.push_str(&format!("{}\n{}\n", view.title, rule));
    for section in &view.sections {
        match section {
            ModalSection::Loading => out.push_str("Checking for security warnings...\n"),
            ModalSection::Warning { message, extended } => {
                out.push_str(&format!("Message:       {message}\n"));
                out.push_str(&format!("Extended Info: {extended}\n"));
            }
            ModalSection::Review { summary, details } => {
                out.push_str(&format!("Reviews:       {summary}\n"));
                if !details.is_empty() {
                    out.push_str(&format!("               {details}\n"));
                }
            }
            ModalSection::Notice(text) => out.push_str(&format!("{text}\n")),
            ModalSection::Error(text) => out.push_str(&format!("WARNING: {text}\n")),
        }
    }
    let actions: Vec<String> = view
        .actions()
        .iter()
        .map(|a| a.label().to_string())
        .collect();
    let state = if view.continue_enabled { "" } else { " (waiting)" };
    out.push_str(&format!("[{}]{}\n", actions.join("] ["), state));
    out
}

/// Writes each view to a `Write` sink (stdout in the CLI).
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl TerminalPresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render(&mut self, view: &ModalView) {
        if let Err(e) = writeln!(self.out, "{}", format_view(view)) {
            tracing::warn!("rendering modal failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustissues_core::presentation::loading_modal;

    #[test]
    fn format_loading_view() {
        let text = format_view(&loading_modal("Example"));
        assert!(text.starts_with("TRUST ISSUES: Example Analysis\n"));
        assert!(text.contains("Checking for security warnings..."));
        assert!(text.contains("[Leave] [Continue with Sign Up] (waiting)"));
    }

    #[test]
    fn format_warning_and_error_sections() {
        let view = ModalView {
            title: "TRUST ISSUES: Example Analysis".to_string(),
            sections: vec![
                ModalSection::Warning {
                    message: "Sells data".to_string(),
                    extended: "Section 4".to_string(),
                },
                ModalSection::Review {
                    summary: "2 stars".to_string(),
                    details: String::new(),
                },
                ModalSection::Error("Proceed with caution.".to_string()),
            ],
            continue_enabled: true,
        };
        let text = format_view(&view);
        assert!(text.contains("Message:       Sells data"));
        assert!(text.contains("Extended Info: Section 4"));
        assert!(text.contains("Reviews:       2 stars"));
        assert!(text.contains("WARNING: Proceed with caution."));
        assert!(!text.contains("(waiting)"));
    }

    #[test]
    fn presenter_writes_to_sink() {
        let mut p = TerminalPresenter { out: Vec::new() };
        p.render(&loading_modal("Example"));
        let written = String::from_utf8(p.out).unwrap();
        assert!(written.contains("TRUST ISSUES: Example Analysis"));
    }
}
