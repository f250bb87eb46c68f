//! Domain bounds of a slider track.

use serde::{Deserialize, Serialize};

use crate::{
    error::RangeError,
    range::{Ranges, Thumb},
};

/// Bounds `{min, max}` of the whole track.
///
/// Ranges are drawn relative to these bounds and are never clamped to them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extremes {
    pub min: f64,
    pub max: f64,
}

impl Default for Extremes {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Extremes {
    /// Domain used when there is nothing to derive bounds from.
    pub const DEFAULT: Extremes = Extremes {
        min: 0.0,
        max: 100.0,
    };

    /// Creates extremes after checking the domain has a finite, positive width.
    pub fn new(min: f64, max: f64) -> Result<Self, RangeError> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(RangeError::DegenerateExtremes { min, max });
        }
        Ok(Self { min, max })
    }

    /// Smallest `min` and largest `max` across `ranges`.
    ///
    /// An empty map yields [`Extremes::DEFAULT`].
    pub fn from_ranges(ranges: &Ranges) -> Self {
        let mut values = ranges.values();
        let Some(first) = values.next() else {
            return Self::DEFAULT;
        };
        values.fold(
            Self {
                min: first.min,
                max: first.max,
            },
            |acc, range| Self {
                min: if range.min < acc.min { range.min } else { acc.min },
                max: if range.max > acc.max { range.max } else { acc.max },
            },
        )
    }

    /// Externally supplied extremes win; otherwise derive them from `ranges`.
    pub fn resolve(external: Option<Extremes>, ranges: &Ranges) -> Self {
        external.unwrap_or_else(|| Self::from_ranges(ranges))
    }

    /// Bound on the side of `thumb`.
    pub fn get(&self, thumb: Thumb) -> f64 {
        match thumb {
            Thumb::Min => self.min,
            Thumb::Max => self.max,
        }
    }

    /// Width of the domain.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Free-function form of [`Extremes::from_ranges`].
pub fn min_and_max_from_ranges(ranges: Option<&Ranges>) -> Extremes {
    ranges.map_or(Extremes::DEFAULT, Extremes::from_ranges)
}
