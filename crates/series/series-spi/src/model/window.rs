//! Time window types for bucketed resampling.

use chrono::{DateTime, Duration, Utc};

use crate::error::{Result, SeriesError};

/// A half-open time range `[start, end)` divided into fixed-width buckets.
///
/// Construction is validated: a non-positive bucket width or an end at or
/// before the start is a configuration error, never a zero- or
/// negative-length allocation downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    bucket_width: Duration,
}

impl TimeWindow {
    /// Create a validated window.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, bucket_width: Duration) -> Result<Self> {
        if bucket_width <= Duration::zero() {
            return Err(SeriesError::InvalidWindow {
                reason: format!("bucket width must be positive, got {}ms", bucket_width.num_milliseconds()),
            });
        }
        if end <= start {
            return Err(SeriesError::InvalidWindow {
                reason: format!("end {} must be after start {}", end, start),
            });
        }
        Ok(Self { start, end, bucket_width })
    }

    /// Window start (inclusive).
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Window end (exclusive).
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Width of each bucket.
    pub fn bucket_width(&self) -> Duration {
        self.bucket_width
    }

    /// Total span of the window.
    pub fn span(&self) -> Duration {
        self.end - self.start
    }

    /// Number of buckets: `ceil(span / bucket_width)`, at millisecond
    /// precision. Always at least 1 for a validated window.
    pub fn bucket_count(&self) -> usize {
        let span_ms = self.span().num_milliseconds();
        let width_ms = self.bucket_width.num_milliseconds();
        (span_ms as u64).div_ceil(width_ms as u64) as usize
    }

    /// Bucket index for an instant, or `None` when it falls outside
    /// `[start, end)`.
    pub fn index_of(&self, instant: DateTime<Utc>) -> Option<usize> {
        if instant < self.start || instant >= self.end {
            return None;
        }
        let offset_ms = (instant - self.start).num_milliseconds();
        let width_ms = self.bucket_width.num_milliseconds();
        Some((offset_ms / width_ms) as usize)
    }

    /// Start instant of the bucket at `index`.
    pub fn bucket_start(&self, index: usize) -> DateTime<Utc> {
        self.start + self.bucket_width * index as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_bucket_count_exact_division() {
        let w = TimeWindow::new(at(0), at(3600), Duration::minutes(5)).unwrap();
        assert_eq!(w.bucket_count(), 12);
    }

    #[test]
    fn test_bucket_count_rounds_up() {
        let w = TimeWindow::new(at(0), at(3601), Duration::minutes(5)).unwrap();
        assert_eq!(w.bucket_count(), 13);
    }

    #[test]
    fn test_bucket_count_single() {
        let w = TimeWindow::new(at(0), at(1), Duration::minutes(5)).unwrap();
        assert_eq!(w.bucket_count(), 1);
    }

    #[test]
    fn test_index_of_interior() {
        let w = TimeWindow::new(at(0), at(3600), Duration::minutes(5)).unwrap();
        assert_eq!(w.index_of(at(0)), Some(0));
        assert_eq!(w.index_of(at(299)), Some(0));
        assert_eq!(w.index_of(at(300)), Some(1));
        assert_eq!(w.index_of(at(3599)), Some(11));
    }

    #[test]
    fn test_index_of_outside() {
        let w = TimeWindow::new(at(0), at(3600), Duration::minutes(5)).unwrap();
        assert_eq!(w.index_of(at(-1)), None);
        assert_eq!(w.index_of(at(3600)), None);
        assert_eq!(w.index_of(at(9999)), None);
    }

    #[test]
    fn test_bucket_start() {
        let w = TimeWindow::new(at(0), at(3600), Duration::minutes(5)).unwrap();
        assert_eq!(w.bucket_start(0), at(0));
        assert_eq!(w.bucket_start(3), at(900));
    }

    #[test]
    fn test_rejects_zero_width() {
        let result = TimeWindow::new(at(0), at(3600), Duration::zero());
        assert!(matches!(result, Err(SeriesError::InvalidWindow { .. })));
    }

    #[test]
    fn test_rejects_negative_width() {
        let result = TimeWindow::new(at(0), at(3600), Duration::seconds(-5));
        assert!(matches!(result, Err(SeriesError::InvalidWindow { .. })));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let result = TimeWindow::new(at(3600), at(0), Duration::minutes(5));
        assert!(matches!(result, Err(SeriesError::InvalidWindow { .. })));
    }

    #[test]
    fn test_rejects_empty_range() {
        let result = TimeWindow::new(at(3600), at(3600), Duration::minutes(5));
        assert!(matches!(result, Err(SeriesError::InvalidWindow { .. })));
    }
}
