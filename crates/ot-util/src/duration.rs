//! Human-readable formatting of elapsed-time magnitudes
//!
//! The magnitude is an opaque tick count. Values below 1000 print with an
//! `ns` suffix, values below 1,000,000 are divided by 1000 and print with
//! `ms`, and anything larger is divided by 1,000,000 and printed with one
//! decimal digit and an `s` suffix. These divisors do not form a true
//! ns/ms/s ladder.

use std::fmt;

const TIER_MS_THRESHOLD: u64 = 1_000;
const TIER_S_THRESHOLD: u64 = 1_000_000;
const TENTH_OF_S: u64 = TIER_S_THRESHOLD / 10;

/// Display adapter for a duration magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HumanDuration(pub u64);

impl fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v < TIER_MS_THRESHOLD {
            write!(f, "{}ns", v)
        } else if v < TIER_S_THRESHOLD {
            write!(f, "{}ms", v / TIER_MS_THRESHOLD)
        } else {
            // Round half away from zero on whole tenths. u64::MAX / TENTH_OF_S + 1
            // fits in a u64.
            let mut tenths = v / TENTH_OF_S;
            if v % TENTH_OF_S >= TENTH_OF_S / 2 {
                tenths += 1;
            }
            write!(f, "{}.{}s", tenths / 10, tenths % 10)
        }
    }
}

impl From<u64> for HumanDuration {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Format `magnitude` as a short scaled string such as `590ns`, `9ms` or `1.6s`.
pub fn format_human_duration(magnitude: u64) -> String {
    HumanDuration(magnitude).to_string()
}
