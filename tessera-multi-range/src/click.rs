//! Track click resolution.
//!
//! A click on empty track space is turned into a domain value plus the free
//! interval around it, so the host can offer to create a new range there.

use crate::{
    error::RangeError, extremes::Extremes, projection::value_at_percent, range::Ranges,
};

/// Pointer geometry of a click on the track, measured along the track axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackClick {
    /// Pointer coordinate (`clientX` on a horizontal track).
    pub pointer: f64,
    /// Leading offset of the track element.
    pub offset: f64,
    /// Length of the track element.
    pub length: f64,
}

impl TrackClick {
    /// Creates click geometry, rejecting tracks that have no usable length.
    pub fn new(pointer: f64, offset: f64, length: f64) -> Result<Self, RangeError> {
        if !length.is_finite() || length <= 0.0 {
            return Err(RangeError::InvalidTrackLength(length));
        }
        Ok(Self {
            pointer,
            offset,
            length,
        })
    }

    /// Click position as a percentage of the track length. Not rounded.
    pub fn relative_percentage(&self) -> f64 {
        (self.pointer - self.offset) / self.length * 100.0
    }
}

/// Where a click landed and which free interval encloses it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickedValue {
    pub relative_percentage: f64,
    pub relative_value: f64,
    /// Gap between the nearest range ending before the click and the nearest
    /// range starting after it, falling back to the extremes.
    pub closest_ranges: Extremes,
}

/// Resolves a click on the track.
///
/// Purely advisory: neither `extremes` nor `ranges` are modified.
pub fn clicked_value_on_track(
    click: &TrackClick,
    extremes: &Extremes,
    ranges: &Ranges,
) -> ClickedValue {
    let relative_percentage = click.relative_percentage();
    let relative_value = value_at_percent(relative_percentage, extremes.min, extremes.max);

    let mut closest_ranges = *extremes;
    for range in ranges.values() {
        if closest_ranges.min <= range.max && range.max <= relative_value {
            closest_ranges.min = range.max;
        }
        if closest_ranges.max >= range.min && range.min >= relative_value {
            closest_ranges.max = range.min;
        }
    }

    ClickedValue {
        relative_percentage,
        relative_value,
        closest_ranges,
    }
}
