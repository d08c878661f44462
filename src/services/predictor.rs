//! Adoption projections from download totals and frequency.
//!
//! An adoption (a real instructional use of a resource) is not directly
//! observable; it is estimated through a fixed download-to-adoption ratio
//! band. This is a rough heuristic estimator, not a calibrated model.

use crate::models::window::round2;
use crate::models::{AdoptionBand, FutureIntervalBand, Prediction};

/// Conservative assumption: one adoption per 50 downloads.
pub const ADOPTION_RATE_LOW: f64 = 0.02;
/// Liberal assumption: one adoption per 10 downloads.
pub const ADOPTION_RATE_HIGH: f64 = 0.1;

/// Downloads per adoption under the conservative assumption.
const DOWNLOADS_PER_ADOPTION_LOW: f64 = 50.0;
/// Downloads per adoption under the liberal assumption.
const DOWNLOADS_PER_ADOPTION_HIGH: f64 = 10.0;

/// Project adoption counts and future-adoption intervals.
///
/// A zero frequency zeroes both future intervals instead of dividing. No
/// other clamping is applied: malformed negative inputs propagate as negative
/// outputs, and rejecting them is the caller's job.
pub fn predict(total: f64, downloads_per_day: f64) -> Prediction {
    let adoption = AdoptionBand {
        low: round2(ADOPTION_RATE_LOW * total),
        high: round2(ADOPTION_RATE_HIGH * total),
    };

    let future_interval = if downloads_per_day == 0.0 {
        FutureIntervalBand { low: 0.0, high: 0.0 }
    } else {
        FutureIntervalBand {
            low: round2(DOWNLOADS_PER_ADOPTION_LOW / downloads_per_day),
            high: round2(DOWNLOADS_PER_ADOPTION_HIGH / downloads_per_day),
        }
    };

    Prediction {
        adoption,
        future_interval,
    }
}
