//! Half-open reservation time window

use chrono::{DateTime, Duration, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::errors::DomainError;

/// Half-open interval `[start, end)`, anchored to the business timezone.
///
/// Weekday and hour-of-day decisions read the anchored local time, so a
/// window built from "2025-06-07 18:00" is a Saturday-evening window no
/// matter where the process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl TimeWindow {
    /// Build a window, rejecting empty or inverted intervals.
    pub fn new(
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Result<Self, DomainError> {
        if end <= start {
            return Err(DomainError::InvalidWindow);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    /// Half-open overlap test. A window ending exactly when another
    /// begins does not conflict.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Whether `instant` falls inside `[start, end)`.
    pub fn contains(&self, instant: DateTime<FixedOffset>) -> bool {
        instant >= self.start && instant < self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Window length in hours. Fractional hours are allowed (a 90-minute
    /// slot is 1.5 hours).
    pub fn duration_hours(&self) -> Decimal {
        Decimal::from(self.duration().num_seconds()) / Decimal::from(3600)
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use rust_decimal::Decimal;

    use super::*;

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
    }

    fn window(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> TimeWindow {
        let tz = ist();
        TimeWindow::new(
            tz.with_ymd_and_hms(2025, 6, 2, start_hour, start_min, 0).unwrap(),
            tz.with_ymd_and_hms(2025, 6, 2, end_hour, end_min, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_inverted_interval() {
        let tz = ist();
        let start = tz.with_ymd_and_hms(2025, 6, 2, 11, 0, 0).unwrap();
        let end = tz.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap();
        assert!(matches!(
            TimeWindow::new(start, end),
            Err(DomainError::InvalidWindow)
        ));
    }

    #[test]
    fn rejects_empty_interval() {
        let tz = ist();
        let at = tz.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap();
        assert!(matches!(
            TimeWindow::new(at, at),
            Err(DomainError::InvalidWindow)
        ));
    }

    #[test]
    fn overlapping_windows_conflict() {
        let a = window(10, 0, 12, 0);
        let b = window(11, 0, 13, 0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn contained_window_conflicts() {
        let outer = window(9, 0, 18, 0);
        let inner = window(11, 0, 12, 0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn back_to_back_windows_do_not_conflict() {
        let a = window(10, 0, 11, 0);
        let b = window(11, 0, 12, 0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn disjoint_windows_do_not_conflict() {
        let a = window(8, 0, 9, 0);
        let b = window(15, 0, 16, 0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn duration_in_whole_hours() {
        assert_eq!(window(10, 0, 12, 0).duration_hours(), Decimal::from(2));
    }

    #[test]
    fn duration_allows_fractional_hours() {
        assert_eq!(
            window(10, 0, 11, 30).duration_hours(),
            Decimal::new(15, 1) // 1.5
        );
    }

    #[test]
    fn contains_is_half_open() {
        let w = window(10, 0, 11, 0);
        assert!(w.contains(w.start()));
        assert!(!w.contains(w.end()));
    }
}
