//! Per-render slider configuration.

use derive_setters::Setters;

use crate::{
    prop::RangeCallback,
    range::{Range, Thumb},
};

/// Configuration shared by the normalizer, the drag resolver and the
/// controller.
///
/// Options are immutable for the duration of a render; build a new value to
/// change them.
#[derive(Clone, PartialEq, Setters)]
pub struct SliderOptions {
    /// Minimum numeric gap kept between neighbouring ranges.
    ///
    /// Applied on both thumbs and by the normalizer.
    pub range_padding: f64,
    /// Color derivation used when a range has no explicit `track_color`.
    #[setters(strip_option, into)]
    pub get_track_color: Option<RangeCallback<String>>,
    /// Locks every thumb of the ranges it returns `true` for.
    #[setters(strip_option, into)]
    pub is_immovable: Option<RangeCallback<bool>>,
    /// Lay the track out vertically. Display only.
    pub is_vertical: bool,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            range_padding: Self::DEFAULT_RANGE_PADDING,
            get_track_color: None,
            is_immovable: None,
            is_vertical: false,
        }
    }
}

impl SliderOptions {
    pub const DEFAULT_RANGE_PADDING: f64 = 0.0;

    /// Whether `thumb` of `range` may be dragged.
    ///
    /// The global `is_immovable` hook and the range's own lock are both
    /// honoured.
    pub fn thumb_locked(&self, range: &Range, thumb: Thumb) -> bool {
        self.is_immovable
            .as_ref()
            .is_some_and(|is_immovable| is_immovable.call(range))
            || range.immovable.is_locked(thumb.direction())
    }
}
