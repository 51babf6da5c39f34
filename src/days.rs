use chrono::{DateTime, NaiveTime, TimeDelta, Utc};

/// Exact number of milliseconds in a UTC day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Truncate an instant to 00:00:00.000 UTC of its calendar day.
///
/// Both comparands go through this before differencing, so day counts are
/// immune to time-of-day, the caller's local timezone, and DST transitions.
fn utc_midnight(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Whole UTC days elapsed from `epoch` to `now`, clamped to ≥ 0.
///
/// Pure and idempotent. A `now` before `epoch` (misconfigured future epoch,
/// host clock skew) yields 0 rather than an error: an under-reported count is
/// strictly better than a negative one on the display.
pub fn elapsed_days(epoch: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let diff_ms = (utc_midnight(now) - utc_midnight(epoch)).num_milliseconds();
    diff_ms.div_euclid(MS_PER_DAY).max(0) as u64
}

/// Milliseconds from `now` until the next 00:00:00.000 UTC boundary.
///
/// Always in `(0, 86_400_000]`; exactly `86_400_000` when `now` is itself a
/// midnight. Sub-millisecond residue rounds up so a timer armed with this
/// delay never lands short of the boundary.
pub fn ms_until_next_utc_midnight(now: DateTime<Utc>) -> i64 {
    let next = utc_midnight(now) + TimeDelta::days(1);
    (next - now)
        .num_microseconds()
        .map_or(MS_PER_DAY, |us| {
            // Ceiling division; `i64::div_ceil` is still unstable (int_roundings).
            us.div_euclid(1_000) + (us.rem_euclid(1_000) != 0) as i64
        })
}

/// Width of the displayed digit string: `max(min_width, decimal digits)`.
///
/// Grows automatically when the count crosses a power-of-ten threshold and
/// never shrinks below `min_width`.
pub fn digit_width(days: u64, min_width: usize) -> usize {
    let digits = if days == 0 {
        1
    } else {
        (days.ilog10() + 1) as usize
    };
    digits.max(min_width)
}

/// Zero-pad `days` to [`digit_width`].
pub fn format_digits(days: u64, min_width: usize) -> String {
    format!("{days:0width$}", width = digit_width(days, min_width))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    const EPOCH: &str = "2015-10-22T00:00:00Z";

    fn epoch() -> DateTime<Utc> {
        EPOCH.parse().unwrap()
    }

    #[test]
    fn test_elapsed_days_known_vector() {
        assert_eq!(elapsed_days(epoch(), utc(2024, 1, 1, 0, 0, 0)), 2993);
        assert_eq!(elapsed_days(epoch(), utc(2024, 1, 2, 0, 0, 0)), 2994);
    }

    #[test]
    fn test_elapsed_days_ten_thousand() {
        // 2015-10-22 plus exactly 10_000 days.
        assert_eq!(elapsed_days(epoch(), utc(2043, 3, 9, 0, 0, 0)), 10_000);
    }

    #[test]
    fn test_elapsed_days_same_day_is_zero() {
        assert_eq!(elapsed_days(epoch(), utc(2015, 10, 22, 23, 59, 59)), 0);
    }

    #[test]
    fn test_elapsed_days_ignores_time_of_day() {
        // 18:00 on day 0 to 01:00 on day 1 is one whole calendar day apart.
        let late_epoch = utc(2015, 10, 22, 18, 0, 0);
        assert_eq!(elapsed_days(late_epoch, utc(2015, 10, 23, 1, 0, 0)), 1);
        // Time-of-day on `now` never pushes the count past the date difference.
        assert_eq!(elapsed_days(epoch(), utc(2024, 1, 1, 23, 59, 59)), 2993);
    }

    #[test]
    fn test_elapsed_days_clamps_before_epoch() {
        assert_eq!(elapsed_days(epoch(), utc(2015, 10, 21, 12, 0, 0)), 0);
        assert_eq!(elapsed_days(epoch(), utc(1999, 1, 1, 0, 0, 0)), 0);
    }

    #[test]
    fn test_elapsed_days_offset_constructed_instant_matches_utc() {
        // The same instant expressed with a fixed offset yields the same count.
        let now_offset = DateTime::parse_from_rfc3339("2024-01-01T05:30:00+05:30")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(now_offset, utc(2024, 1, 1, 0, 0, 0));
        assert_eq!(elapsed_days(epoch(), now_offset), 2993);
    }

    #[test]
    fn test_ms_until_midnight_at_exact_midnight_is_full_day() {
        assert_eq!(
            ms_until_next_utc_midnight(utc(2024, 1, 1, 0, 0, 0)),
            MS_PER_DAY
        );
    }

    #[test]
    fn test_ms_until_midnight_one_second_before() {
        assert_eq!(ms_until_next_utc_midnight(utc(2023, 12, 31, 23, 59, 59)), 1_000);
    }

    #[test]
    fn test_ms_until_midnight_always_in_range() {
        let samples = [
            utc(2024, 1, 1, 0, 0, 1),
            utc(2024, 2, 29, 12, 0, 0),
            utc(2024, 6, 15, 23, 59, 59),
            utc(2043, 3, 9, 3, 33, 7),
        ];
        for now in samples {
            let ms = ms_until_next_utc_midnight(now);
            assert!(ms > 0 && ms <= MS_PER_DAY, "out of range for {now}: {ms}");
        }
    }

    #[test]
    fn test_ms_until_midnight_rounds_submillisecond_up() {
        let now = utc(2023, 12, 31, 23, 59, 59) + TimeDelta::microseconds(999_500);
        assert_eq!(ms_until_next_utc_midnight(now), 1);
    }

    #[test]
    fn test_digit_width_thresholds() {
        assert_eq!(digit_width(0, 4), 4);
        assert_eq!(digit_width(9_999, 4), 4);
        assert_eq!(digit_width(10_000, 4), 5);
        assert_eq!(digit_width(100_000, 4), 6);
        assert_eq!(digit_width(7, 1), 1);
    }

    #[test]
    fn test_format_digits_zero_pads() {
        assert_eq!(format_digits(0, 4), "0000");
        assert_eq!(format_digits(42, 4), "0042");
        assert_eq!(format_digits(2_993, 4), "2993");
        assert_eq!(format_digits(10_000, 4), "10000");
    }
}
