//! Logging init: append to a file under the XDG state dir, or fall back to stderr.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,trustissues=debug,trustissues_core=debug";

/// `~/.local/state/trustissues/trustissues.log`
pub fn log_file_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("trustissues")?;
    Ok(dirs.get_state_home().join("trustissues.log"))
}

fn open_log(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))
}

/// Install the global subscriber. Fails if one is already installed.
fn install<W>(writer: W) -> Result<()>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))
}

/// Log to [`log_file_path`]. On error (unwritable state dir, subscriber
/// already set) the caller should fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = open_log(&path)?;
    install(Mutex::new(file))?;
    tracing::info!(path = %path.display(), "trustissues logging initialized");
    Ok(())
}

/// Log to stderr. Keeps any subscriber that is already installed.
pub fn init_logging_stderr() {
    if let Err(e) = install(std::io::stderr) {
        tracing::debug!(error = %e, "keeping existing subscriber");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn open_log_creates_dirs_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state/trustissues/trustissues.log");
        writeln!(open_log(&path).unwrap(), "first").unwrap();
        writeln!(open_log(&path).unwrap(), "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn stderr_fallback_tolerates_an_installed_subscriber() {
        init_logging_stderr();
        init_logging_stderr();
        assert!(install(std::io::sink).is_err());
    }

    #[test]
    fn log_file_lives_under_trustissues_state_dir() {
        let path = log_file_path().unwrap();
        assert!(path.ends_with("trustissues/trustissues.log"));
    }
}
