//! Configuration module
//!
//! The business timezone is configuration, not a literal buried in
//! parsing code. Every timestamp that crosses the engine boundary goes
//! through [`Config::resolve_timestamp`]: naive local-time strings are
//! anchored to the configured offset, and strings that already carry an
//! offset are converted exactly once.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::{DomainError, DomainResult, TimeWindow};

/// Default business timezone: IST, UTC+05:30.
pub const DEFAULT_UTC_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Default currency code for price breakdowns.
pub const DEFAULT_CURRENCY: &str = "INR";

/// Engine configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Fixed UTC offset of the operating region. All weekday and
    /// hour-of-day pricing decisions are made in this zone.
    pub business_offset: FixedOffset,
    /// ISO 4217 currency code stamped onto price breakdowns.
    pub currency: String,
}

impl Config {
    pub fn new(utc_offset_secs: i32, currency: impl Into<String>) -> DomainResult<Self> {
        let business_offset = FixedOffset::east_opt(utc_offset_secs).ok_or_else(|| {
            DomainError::Validation(format!("UTC offset out of range: {utc_offset_secs}s"))
        })?;
        Ok(Self {
            business_offset,
            currency: currency.into(),
        })
    }

    /// Anchor a naive local date-time to the business timezone.
    pub fn resolve_local(&self, naive: NaiveDateTime) -> DateTime<FixedOffset> {
        naive
            .and_local_timezone(self.business_offset)
            .single()
            .expect("fixed offsets map local times unambiguously")
    }

    /// Parse one boundary timestamp.
    ///
    /// Offset-carrying strings (RFC 3339) are taken at face value and
    /// shifted into the business zone once. Naive strings are read as
    /// business-local time, never as UTC.
    pub fn resolve_timestamp(&self, raw: &str) -> DomainResult<DateTime<FixedOffset>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.with_timezone(&self.business_offset));
        }

        let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
            .map_err(|e| DomainError::Validation(format!("Invalid timestamp '{raw}': {e}")))?;

        Ok(self.resolve_local(naive))
    }

    /// Resolve a start/end string pair into a validated window.
    pub fn resolve_window(&self, start: &str, end: &str) -> DomainResult<TimeWindow> {
        TimeWindow::new(self.resolve_timestamp(start)?, self.resolve_timestamp(end)?)
    }

    /// The business-local calendar day `[00:00, next day 00:00)`.
    pub fn day_window(&self, date: NaiveDate) -> DomainResult<TimeWindow> {
        let next = date
            .succ_opt()
            .ok_or_else(|| DomainError::Validation(format!("Date out of range: {date}")))?;
        TimeWindow::new(
            self.resolve_local(date.and_time(NaiveTime::MIN)),
            self.resolve_local(next.and_time(NaiveTime::MIN)),
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            business_offset: FixedOffset::east_opt(DEFAULT_UTC_OFFSET_SECS)
                .expect("default offset is in range"),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
