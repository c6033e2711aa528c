//! Countdown helpers for the next-event display.
//!

use chrono::{NaiveDateTime, TimeDelta};

/// Time left between `now` and `target`, clamped at zero.  The display never
/// goes negative, a target already behind us reads `00:00:00`.
///
pub fn remaining(target: NaiveDateTime, now: NaiveDateTime) -> TimeDelta {
    let left = target - now;
    if left < TimeDelta::zero() {
        TimeDelta::zero()
    } else {
        left
    }
}

/// Render a delta as zero-padded `HH:MM:SS`.
///
/// Hours widen past two digits instead of wrapping at 24.
///
pub fn format_countdown(left: TimeDelta) -> String {
    let secs = left.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
