//! Thumb drag resolution.
//!
//! A proposed thumb value is clamped against the range's other thumb and the
//! nearest neighbouring range, then handed to an optional change policy that
//! may accept, reject or redirect it.

use tracing::debug;

use crate::{
    extremes::Extremes,
    options::SliderOptions,
    prop::ChangeCallback,
    range::{Range, Ranges, Thumb},
    tooltip::{TooltipAnchor, tooltip_anchor},
};

/// Smallest distance kept between the two thumbs of one range.
pub const MIN_THUMB_SEPARATION: f64 = 1.0;

/// Answer of a change policy to a proposed thumb value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChangeVerdict {
    /// Apply the proposed value.
    Accept,
    /// Drop the change.
    Reject,
    /// Apply a value chosen by the policy instead.
    ///
    /// The dragged thumb takes the value stored for the *opposite* thumb: a
    /// redirected min thumb becomes `max`, a redirected max thumb becomes
    /// `min`.
    Redirect { min: f64, max: f64 },
}

impl ChangeVerdict {
    fn redirected_value(min: f64, max: f64, thumb: Thumb) -> f64 {
        match thumb.opposite() {
            Thumb::Min => min,
            Thumb::Max => max,
        }
    }
}

/// A thumb moved by the user, with the raw value reported by the input.
#[derive(Clone, Copy, Debug)]
pub struct ThumbChange<'a> {
    pub target_value: &'a str,
    pub thumb: Thumb,
    /// The dragged range as rendered when the input fired.
    pub range: &'a Range,
}

/// Result of resolving a thumb change.
#[derive(Clone, Debug, PartialEq)]
pub struct ThumbUpdate {
    /// The new range map. Equal to the input when the change was rejected.
    pub ranges: Ranges,
    /// Value after clamping, as proposed to the policy.
    pub value: f64,
    pub verdict: ChangeVerdict,
    /// New placement for the moved thumb's value label. Only set for accepted
    /// changes.
    pub tooltip: Option<TooltipAnchor>,
}

/// Parses a raw input value.
///
/// Blank input reads as `0`; anything else that is not a number reads as
/// `NaN`, which then flows through the clamping unchanged. Callers are
/// expected to hand over numeric strings.
///
/// Only the spelled-out `Infinity` (optionally signed) parses as an infinite
/// value. `inf`, `infinity` and `nan` in any case read as `NaN`, unlike
/// [`str::parse`].
pub fn parse_thumb_value(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let value: f64 = trimmed.parse().unwrap_or(f64::NAN);
    if value.is_finite() {
        return value;
    }
    match trimmed.trim_start_matches(['+', '-']) {
        "Infinity" => value,
        _ => f64::NAN,
    }
}

// `f64::min`/`f64::max` drop a NaN operand; a malformed input must stay NaN.
fn min_or_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn max_or_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Clamps `proposed` for `thumb` of `range`.
///
/// - min thumb: at most `range.max - 1`, at least the closest `max` at or
///   before `range.min` plus padding;
/// - max thumb: at least `range.min + 1`, at most the closest `min` at or
///   after `range.max` minus padding.
///
/// Without a neighbour on that side the thumb is only bounded by its sibling.
pub fn clamp_thumb_value(
    proposed: f64,
    thumb: Thumb,
    range: &Range,
    ranges: &Ranges,
    padding: f64,
) -> f64 {
    match thumb {
        Thumb::Min => {
            let value = min_or_nan(proposed, range.max - MIN_THUMB_SEPARATION);
            let neighbour = ranges
                .values()
                .map(|other| other.max)
                .filter(|max| *max <= range.min)
                .fold(f64::NEG_INFINITY, f64::max);
            max_or_nan(value, neighbour + padding)
        }
        Thumb::Max => {
            let value = max_or_nan(proposed, range.min + MIN_THUMB_SEPARATION);
            let neighbour = ranges
                .values()
                .map(|other| other.min)
                .filter(|min| *min >= range.max)
                .fold(f64::INFINITY, f64::min);
            min_or_nan(value, neighbour - padding)
        }
    }
}

fn with_range(ranges: &Ranges, range: Range) -> Ranges {
    let mut next = ranges.clone();
    next.insert(range.id.clone(), range);
    next
}

/// Resolves a thumb drag into a new range map.
///
/// The clamped value is offered to `policy` (no policy accepts everything).
/// Only the dragged range is replaced in the returned map; `ranges` itself is
/// left untouched.
#[tracing::instrument(level = "trace", skip_all, fields(range = %change.range.id, thumb = ?change.thumb))]
pub fn on_thumb_value_change(
    change: ThumbChange<'_>,
    ranges: &Ranges,
    options: &SliderOptions,
    policy: Option<&ChangeCallback>,
    extremes: &Extremes,
) -> ThumbUpdate {
    let ThumbChange {
        target_value,
        thumb,
        range,
    } = change;
    let proposed = parse_thumb_value(target_value);
    let value = clamp_thumb_value(proposed, thumb, range, ranges, options.range_padding);

    let verdict = policy.map_or(ChangeVerdict::Accept, |policy| {
        policy.call(range, value, thumb)
    });
    debug!(proposed, value, ?verdict, "thumb change resolved");

    match verdict {
        ChangeVerdict::Accept => {
            let mut moved = range.clone();
            moved.set(thumb, value);
            let tooltip = Some(tooltip_anchor(&moved, thumb, extremes));
            ThumbUpdate {
                ranges: with_range(ranges, moved),
                value,
                verdict,
                tooltip,
            }
        }
        ChangeVerdict::Reject => ThumbUpdate {
            ranges: ranges.clone(),
            value,
            verdict,
            tooltip: None,
        },
        ChangeVerdict::Redirect { min, max } => {
            let mut moved = range.clone();
            moved.set(thumb, ChangeVerdict::redirected_value(min, max, thumb));
            ThumbUpdate {
                ranges: with_range(ranges, moved),
                value,
                verdict,
                tooltip: None,
            }
        }
    }
}
