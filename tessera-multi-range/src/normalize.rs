//! Overlap repair and track color assignment.
//!
//! ## Usage
//!
//! Run [`check_ranges`] on every externally supplied range map before using
//! it as the rendering source of truth.

use tracing::debug;

use crate::{
    options::SliderOptions,
    range::{Range, Ranges},
};

/// Color used when a range offers nothing to derive one from.
pub const DEFAULT_TRACK_COLOR: &str = "#CCCCCC";

/// Number of leading id characters turned into a hex color.
const COLOR_SEED_LEN: usize = 6;

/// Color a range should be drawn with.
///
/// Explicit `track_color` first, then the `get_track_color` option, then the
/// first six characters of `ref_id` or `parent_id`. Empty strings count as
/// absent.
pub fn resolve_track_color(range: &Range, options: &SliderOptions) -> String {
    if let Some(color) = non_empty(&range.track_color) {
        return color.to_string();
    }
    if let Some(get_track_color) = &options.get_track_color {
        return get_track_color.call(range);
    }
    non_empty(&range.ref_id)
        .or(non_empty(&range.parent_id))
        .map(|seed| format!("#{}", seed.chars().take(COLOR_SEED_LEN).collect::<String>()))
        .unwrap_or_else(|| DEFAULT_TRACK_COLOR.to_string())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// Repairs simple overlaps and fills in `actual_track_color`.
///
/// Ranges are visited in map order. Each one is compared with every other
/// range as it currently stands, including ranges already repaired earlier in
/// the pass:
///
/// - a `min` strictly inside another range moves to that range's `max` plus
///   padding,
/// - a `max` strictly inside another range moves to that range's `min` minus
///   padding.
///
/// This is a single local pass. Chains of three or more entangled ranges can
/// come out still overlapping, and the outcome depends on map order.
///
/// `None` and empty maps produce an empty map. The caller's map is not
/// touched.
#[tracing::instrument(level = "trace", skip_all, fields(count = ranges.map_or(0, |r| r.len())))]
pub fn check_ranges(ranges: Option<&Ranges>, options: &SliderOptions) -> Ranges {
    let Some(ranges) = ranges else {
        return Ranges::new();
    };
    let mut checked = ranges.clone();
    let padding = options.range_padding;

    for index in 0..checked.len() {
        let Some((_, considered)) = checked.get_index_mut(index) else {
            continue;
        };
        considered.actual_track_color = Some(resolve_track_color(considered, options));

        for other_index in 0..checked.len() {
            let Some((_, other)) = checked.get_index(other_index) else {
                continue;
            };
            let (other_id, other_min, other_max) = (other.id.clone(), other.min, other.max);

            let Some((_, considered)) = checked.get_index_mut(index) else {
                continue;
            };
            if considered.id == other_id {
                continue;
            }
            if considered.min > other_min && considered.min < other_max {
                let repaired = other_max + padding;
                debug!(
                    range = %considered.id,
                    against = %other_id,
                    from = considered.min,
                    to = repaired,
                    "pushed min out of overlapping range"
                );
                considered.min = repaired;
            }
            if considered.max > other_min && considered.max < other_max {
                let repaired = other_min - padding;
                debug!(
                    range = %considered.id,
                    against = %other_id,
                    from = considered.max,
                    to = repaired,
                    "pushed max out of overlapping range"
                );
                considered.max = repaired;
            }
        }
    }

    checked
}
