pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod explain;
pub mod export;
pub mod gaps;
pub mod init;
pub mod list;
pub mod log;
pub mod references;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::threshold::GapThreshold;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// `--threshold` wins, then `--regulatory`, then the configured live value.
pub(crate) fn resolve_threshold(
    threshold: &Option<String>,
    regulatory: bool,
    cfg: &Config,
) -> AppResult<GapThreshold> {
    match threshold {
        Some(t) => GapThreshold::parse(t),
        None if regulatory => Ok(cfg.reference_threshold()),
        None => Ok(cfg.live_threshold()),
    }
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
