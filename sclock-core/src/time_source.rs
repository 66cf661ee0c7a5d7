use crate::constants::SECONDS_PER_DAY;
use chrono::{DateTime, Local, Offset, TimeZone};

/// One reading of the wall clock
///
/// Elapsed time is measured on `epoch_secs` alone; the UTC offset only
/// affects the time of day shown in clock mode, so an offset change (DST)
/// never credits or skips stopwatch and pomodoro time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timestamp {
    /// Seconds since the Unix epoch, clamped at 0
    pub epoch_secs: u64,
    /// Local offset from UTC in seconds
    pub utc_offset_secs: i32,
}

impl Timestamp {
    pub fn new(epoch_secs: u64, utc_offset_secs: i32) -> Self {
        Self {
            epoch_secs,
            utc_offset_secs,
        }
    }

    /// Read a zoned chrono time; pre-epoch times clamp to 0
    pub fn from_datetime<Tz: TimeZone>(time: &DateTime<Tz>) -> Self {
        Self::new(
            time.timestamp().max(0) as u64,
            time.offset().fix().local_minus_utc(),
        )
    }

    /// Seconds since the epoch shifted into local time
    pub fn local_seconds(&self) -> u64 {
        let local = self.epoch_secs as i64 + i64::from(self.utc_offset_secs);
        local.max(0) as u64
    }

    /// Local time of day in seconds, `0..86400`
    pub fn time_of_day(&self) -> u64 {
        self.local_seconds() % SECONDS_PER_DAY
    }
}

/// A bare second count is read as UTC
impl From<u64> for Timestamp {
    fn from(epoch_secs: u64) -> Self {
        Self::new(epoch_secs, 0)
    }
}

/// Source of wall-clock readings fed to `ClockState::advance`
pub trait TimeSource {
    fn now(&self) -> Timestamp;
}

/// Local wall-clock time via `chrono::Local`
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_datetime(&Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_utc_is_unshifted() {
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 12, 34, 56).unwrap();
        let ts = Timestamp::from_datetime(&time);
        assert_eq!(ts.utc_offset_secs, 0);
        assert_eq!(ts.time_of_day(), 12 * 3600 + 34 * 60 + 56);
    }

    #[test]
    fn test_offset_applied() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let time = tz.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let ts = Timestamp::from_datetime(&time);
        // Local wall time, not UTC (06:00)
        assert_eq!(ts.time_of_day(), 8 * 3600);
        assert_eq!(ts.epoch_secs % 86_400, 6 * 3600);
    }

    #[test]
    fn test_negative_offset_across_midnight() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let time = tz.with_ymd_and_hms(2024, 3, 1, 22, 30, 0).unwrap();
        assert_eq!(
            Timestamp::from_datetime(&time).time_of_day(),
            22 * 3600 + 30 * 60
        );
    }

    #[test]
    fn test_offset_change_keeps_epoch_contiguous() {
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        let edt = FixedOffset::west_opt(4 * 3600).unwrap();
        let before = Timestamp::from_datetime(&est.with_ymd_and_hms(2024, 3, 10, 1, 59, 59).unwrap());
        let after = Timestamp::from_datetime(&edt.with_ymd_and_hms(2024, 3, 10, 3, 0, 0).unwrap());
        assert_eq!(after.epoch_secs - before.epoch_secs, 1);
        assert_eq!(after.time_of_day(), 3 * 3600);
    }

    #[test]
    fn test_local_clock_advances() {
        let clock = LocalClock;
        let a = clock.now();
        let b = clock.now();
        assert!(a.epoch_secs > 0);
        assert!(b.epoch_secs >= a.epoch_secs);
    }
}
