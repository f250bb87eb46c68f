//! The band model: ranges, thumbs and the ordered range map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::RangeError;

/// Caller assigned range identifier.
pub type RangeId = String;

/// Ranges keyed by id, in insertion order.
///
/// Order matters: the normalizer repairs overlaps walking this order.
pub type Ranges = IndexMap<RangeId, Range>;

/// One endpoint of a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Thumb {
    Min,
    Max,
}

impl Thumb {
    /// Both thumbs, min first.
    pub const ALL: [Thumb; 2] = [Thumb::Min, Thumb::Max];

    /// The other endpoint of the same range.
    pub fn opposite(self) -> Thumb {
        match self {
            Thumb::Min => Thumb::Max,
            Thumb::Max => Thumb::Min,
        }
    }

    /// Side of the band this thumb sits on.
    pub fn direction(self) -> Direction {
        match self {
            Thumb::Min => Direction::Left,
            Thumb::Max => Direction::Right,
        }
    }
}

/// Side of a band, used for locks and label slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

/// Per-direction movement lock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Immovable {
    pub left: bool,
    pub right: bool,
}

impl Immovable {
    pub fn is_locked(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn is_free(&self) -> bool {
        !self.left && !self.right
    }
}

/// A named numeric interval with two draggable endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub id: RangeId,
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub name: String,
    /// Explicit color, wins over every derived color.
    #[serde(
        default,
        rename = "trackColor",
        skip_serializing_if = "Option::is_none"
    )]
    pub track_color: Option<String>,
    /// Color actually applied, filled in by
    /// [`check_ranges`](crate::normalize::check_ranges).
    #[serde(
        default,
        rename = "actualTrackColor",
        skip_serializing_if = "Option::is_none"
    )]
    pub actual_track_color: Option<String>,
    #[serde(default, skip_serializing_if = "Immovable::is_free")]
    pub immovable: Immovable,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl Range {
    /// Creates a range after checking `min < max` and that both are finite.
    pub fn new(id: impl Into<RangeId>, min: f64, max: f64) -> Result<Self, RangeError> {
        let range = Self::unchecked(id, min, max);
        range.validate()?;
        Ok(range)
    }

    /// Creates a range without validation.
    ///
    /// Overlapping or inverted data is what the normalizer exists for, so the
    /// engine accepts anything built this way.
    pub fn unchecked(id: impl Into<RangeId>, min: f64, max: f64) -> Self {
        Self {
            id: id.into(),
            min,
            max,
            name: String::new(),
            track_color: None,
            actual_track_color: None,
            immovable: Immovable::default(),
            ref_id: None,
            parent_id: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_track_color(mut self, color: impl Into<String>) -> Self {
        self.track_color = Some(color.into());
        self
    }

    pub fn with_ref_id(mut self, ref_id: impl Into<String>) -> Self {
        self.ref_id = Some(ref_id.into());
        self
    }

    pub fn with_parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_immovable(mut self, immovable: Immovable) -> Self {
        self.immovable = immovable;
        self
    }

    /// Value of the given endpoint.
    pub fn get(&self, thumb: Thumb) -> f64 {
        match thumb {
            Thumb::Min => self.min,
            Thumb::Max => self.max,
        }
    }

    /// Moves the given endpoint.
    pub fn set(&mut self, thumb: Thumb, value: f64) {
        match thumb {
            Thumb::Min => self.min = value,
            Thumb::Max => self.max = value,
        }
    }

    /// Checks the bounds invariant.
    pub fn validate(&self) -> Result<(), RangeError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(RangeError::NonFinite {
                id: self.id.clone(),
            });
        }
        if self.min >= self.max {
            return Err(RangeError::EmptyInterval {
                id: self.id.clone(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Validates every range in `ranges` and that each is stored under its own id.
///
/// Returns the first violation in map order.
pub fn validate_ranges(ranges: &Ranges) -> Result<(), RangeError> {
    for (key, range) in ranges {
        if *key != range.id {
            return Err(RangeError::IdMismatch {
                key: key.clone(),
                id: range.id.clone(),
            });
        }
        range.validate()?;
    }
    Ok(())
}

/// Collects ranges into a map keyed by their ids, keeping iteration order.
pub fn ranges_from<I>(ranges: I) -> Ranges
where
    I: IntoIterator<Item = Range>,
{
    ranges
        .into_iter()
        .map(|range| (range.id.clone(), range))
        .collect()
}
