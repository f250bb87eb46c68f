//! Value/percentage projection and band segment geometry.
//!
//! Every function here divides by the domain width. A zero-width domain
//! (`max == min`) is a caller error: the result is `NaN` or infinite and is
//! passed through unchanged.

use rustc_hash::FxHashMap;

use crate::{
    extremes::Extremes,
    range::{Range, RangeId},
};

/// Rounds half-way cases toward positive infinity, like `Math.round` in a
/// browser. `f64::round` would send `-2.5` to `-3`.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Position of `value` on a `min..max` track, as a whole percentage.
pub fn percent(value: f64, min: f64, max: f64) -> f64 {
    round_half_up((value - min) / (max - min) * 100.0)
}

/// Domain value at `percent` of a `min..max` track. Not rounded.
pub fn value_at_percent(percent: f64, min: f64, max: f64) -> f64 {
    min + (percent / 100.0) * (max - min)
}

/// Horizontal placement of a band on the track, in percent of track length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackSegment {
    pub left: f64,
    pub width: f64,
}

pub fn track_segment(range: &Range, extremes: &Extremes) -> TrackSegment {
    let min_percent = percent(range.min, extremes.min, extremes.max);
    let max_percent = percent(range.max, extremes.min, extremes.max);
    TrackSegment {
        left: min_percent,
        width: max_percent - min_percent,
    }
}

/// UI-side element that draws a band.
pub trait TrackHandle {
    fn set_segment(&mut self, segment: TrackSegment);
}

/// Band handles keyed by range id, owned by the UI layer.
pub type TrackRegistry<H> = FxHashMap<RangeId, H>;

/// Projects `range` and pushes the segment to its handle, if one is attached.
pub fn update_track<H: TrackHandle>(
    range: &Range,
    extremes: &Extremes,
    tracks: &mut TrackRegistry<H>,
) {
    if let Some(handle) = tracks.get_mut(&range.id) {
        handle.set_segment(track_segment(range, extremes));
    }
}
