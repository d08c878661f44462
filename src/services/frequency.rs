//! Relative download frequency over an observation window.
//!
//! Cumulative totals favour resources that have simply been available longer;
//! downloads per elapsed day put resources of different ages on a comparable
//! footing.

use crate::models::window::round2;
use crate::models::{FrequencyFigure, ObservationWindow};

/// Compute the relative frequency of downloads over a window.
///
/// A degenerate window (zero or negative span) yields a frequency of zero
/// rather than a division error; the whole report then comes out all-zero.
pub fn relative_frequency(total: u64, window: &ObservationWindow) -> FrequencyFigure {
    let elapsed_days = window.elapsed_days();
    let downloads_per_day = if elapsed_days == 0.0 {
        0.0
    } else {
        round2(total as f64 / elapsed_days)
    };
    FrequencyFigure {
        elapsed_days,
        downloads_per_day,
    }
}
