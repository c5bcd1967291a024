//! Browsable date range.
//!
//! Dates travel as `YYYY-MM-DD` strings. The format is fixed-width and
//! zero-padded, so plain string comparison orders them chronologically.

use crate::clock::Clock;
use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use std::sync::OnceLock;

pub const DEFAULT_EARLIEST_DATE: &str = "2025-12-25";

/// Hours east of UTC used to decide what "today" is.
const LOCAL_OFFSET_HOURS: i64 = 9;

static DATE_FORMAT: OnceLock<Regex> = OnceLock::new();

fn date_format() -> &'static Regex {
    DATE_FORMAT.get_or_init(|| {
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid regex pattern defined in code")
    })
}

/// Syntactic check only: `2025-13-40` passes.
pub fn is_date_format(value: &str) -> bool {
    date_format().is_match(value)
}

pub fn compute_max_date(now: DateTime<Utc>) -> String {
    (now + Duration::hours(LOCAL_OFFSET_HOURS))
        .date_naive()
        .format("%Y-%m-%d")
        .to_string()
}

pub fn compute_min_date(configured: Option<&str>) -> String {
    configured.unwrap_or(DEFAULT_EARLIEST_DATE).to_string()
}

pub fn resolve_date(input: Option<&str>, fallback: &str) -> String {
    match input {
        Some(value) if is_date_format(value) => value.to_string(),
        _ => fallback.to_string(),
    }
}

pub fn is_in_range(date: &str, min_date: &str, max_date: &str) -> bool {
    min_date <= date && date <= max_date
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    pub min_date: String,
    pub max_date: String,
}

impl DateWindow {
    /// Recomputed for every request so the upper bound tracks the clock.
    pub fn resolve(clock: &dyn Clock, configured_min: Option<&str>) -> Self {
        Self {
            min_date: compute_min_date(configured_min),
            max_date: compute_max_date(clock.now()),
        }
    }

    /// Resolves a caller-supplied date, falling back to today.
    pub fn resolve_requested(&self, input: Option<&str>) -> String {
        resolve_date(input, &self.max_date)
    }

    pub fn contains(&self, date: &str) -> bool {
        is_in_range(date, &self.min_date, &self.max_date)
    }
}
