//! Shared range data for unit tests.

use crate::range::{Range, Ranges, ranges_from};

const STITCHING_RANGES: &str = include_str!("../testdata/stitching_ranges.json");

/// Six consecutive ranges over a timestamp domain. The first two overlap.
pub(crate) fn stitching_ranges() -> Ranges {
    serde_json::from_str(STITCHING_RANGES).expect("fixture is valid JSON")
}

/// The four disjoint ranges of the fixture that follow the overlapping pair.
pub(crate) fn tail_ranges() -> Ranges {
    ranges_from(stitching_ranges().into_values().skip(2))
}

pub(crate) fn range(id: &str, min: f64, max: f64) -> Range {
    Range::unchecked(id, min, max)
}
