//! Range-consistency and interaction-geometry engine for multi-range sliders.
//!
//! A multi-range slider draws several bands on one track. Each band has two
//! thumbs, and the bands must never overlap. This crate holds the logic
//! behind such a widget and leaves drawing to the host UI:
//!
//! - [`check_ranges`] repairs overlapping input and assigns band colors,
//! - [`Extremes`] derives the track bounds,
//! - [`percent`] and [`value_at_percent`] project between values and track
//!   percentages,
//! - [`clicked_value_on_track`] turns a click into a value and a free
//!   interval,
//! - [`on_thumb_value_change`] clamps a thumb drag and applies a change
//!   policy,
//! - [`tooltip_anchor`] and friends place value and name labels.
//!
//! [`MultiRangeSlider`] bundles these behind one method per UI event.
//!
//! # Example
//!
//! ```
//! use tessera_multi_range::{
//!     ChangeVerdict, Extremes, Range, SliderOptions, Thumb, ThumbChange, check_ranges,
//!     on_thumb_value_change, ranges_from,
//! };
//!
//! let ranges = ranges_from([
//!     Range::new("morning", 0.0, 40.0)?,
//!     Range::new("evening", 60.0, 100.0)?,
//! ]);
//! let options = SliderOptions::default().range_padding(5.0);
//! let ranges = check_ranges(Some(&ranges), &options);
//! let extremes = Extremes::from_ranges(&ranges);
//!
//! let change = ThumbChange {
//!     target_value: "80",
//!     thumb: Thumb::Max,
//!     range: &ranges["morning"],
//! };
//! let update = on_thumb_value_change(change, &ranges, &options, None, &extremes);
//!
//! assert_eq!(update.verdict, ChangeVerdict::Accept);
//! assert_eq!(update.ranges["morning"].max, 55.0);
//! # Ok::<(), tessera_multi_range::RangeError>(())
//! ```
//!
//! # Preconditions
//!
//! The engine never fails. A zero-width domain or a non-numeric thumb value
//! produces `NaN`/infinite results instead of an error; use the checked
//! constructors ([`Range::new`], [`Extremes::new`], [`TrackClick::new`]) and
//! [`validate_ranges`] to catch bad input at the boundary.
//!
//! Thumb values are parsed by [`parse_thumb_value`], which reads only the
//! spelled-out `Infinity` as infinite; `inf` and `nan` become `NaN`.

pub mod click;
pub mod controller;
pub mod drag;
pub mod error;
pub mod extremes;
pub mod normalize;
pub mod options;
pub mod projection;
pub mod prop;
pub mod range;
pub mod tooltip;

#[cfg(test)]
mod test_fixtures;

pub use click::{ClickedValue, TrackClick, clicked_value_on_track};
pub use controller::{MultiRangeSlider, SliderProps, ThumbEvent};
pub use drag::{
    ChangeVerdict, MIN_THUMB_SEPARATION, ThumbChange, ThumbUpdate, clamp_thumb_value,
    on_thumb_value_change, parse_thumb_value,
};
pub use error::RangeError;
pub use extremes::{Extremes, min_and_max_from_ranges};
pub use normalize::{DEFAULT_TRACK_COLOR, check_ranges, resolve_track_color};
pub use options::SliderOptions;
pub use projection::{
    TrackHandle, TrackRegistry, TrackSegment, percent, track_segment, update_track,
    value_at_percent,
};
pub use prop::{CallbackWith, ChangeCallback, RangeCallback};
pub use range::{
    Direction, Immovable, Range, RangeId, Ranges, Thumb, ranges_from, validate_ranges,
};
pub use tooltip::{
    FLIP_THRESHOLD, LabelHandle, LabelRegistry, NameHandle, NameOffset, NameRegistry,
    ThumbLabels, TooltipAction, TooltipAnchor, change_tooltip_position, toggle_name_tooltip,
    toggle_tooltip, tooltip_anchor,
};
