use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Minimum length used while the history is being edited: every gap counts.
pub const LIVE_THRESHOLD_DAYS: i64 = 1;

/// Regulatory minimum for reference checks: one month or more.
pub const REGULATORY_THRESHOLD_DAYS: i64 = 31;

/// Minimum number of uncovered days for a gap to be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GapThreshold {
    /// Any gap of at least one day.
    Any,
    /// Gaps of 31 days or more.
    Regulatory,
    /// Custom minimum.
    Days(i64),
}

impl GapThreshold {
    /// Effective minimum in days. Anything below 1 behaves as 1, since a
    /// reported gap always spans at least one uncovered day.
    pub fn min_days(&self) -> i64 {
        match self {
            GapThreshold::Any => LIVE_THRESHOLD_DAYS,
            GapThreshold::Regulatory => REGULATORY_THRESHOLD_DAYS,
            GapThreshold::Days(n) => (*n).max(1),
        }
    }

    /// Map a configured day count onto the matching preset.
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d <= LIVE_THRESHOLD_DAYS => GapThreshold::Any,
            REGULATORY_THRESHOLD_DAYS => GapThreshold::Regulatory,
            d => GapThreshold::Days(d),
        }
    }

    /// Parse a CLI value: `any`, `regulatory` or a positive day count.
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "any" | "live" => Ok(GapThreshold::Any),
            "regulatory" | "month" => Ok(GapThreshold::Regulatory),
            other => {
                let days: i64 = other
                    .parse()
                    .map_err(|_| AppError::InvalidThreshold(s.to_string()))?;
                if days < 1 {
                    return Err(AppError::InvalidThreshold(format!(
                        "{s} (must be at least 1 day)"
                    )));
                }
                Ok(GapThreshold::from_days(days))
            }
        }
    }

    pub fn label(&self) -> String {
        match self {
            GapThreshold::Any => "any gap".to_string(),
            GapThreshold::Regulatory => format!("≥ {REGULATORY_THRESHOLD_DAYS} days"),
            GapThreshold::Days(n) => format!("≥ {} days", (*n).max(1)),
        }
    }
}
