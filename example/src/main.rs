//! Replays a short editing session against a headless multi-range slider and
//! logs what the UI layer would draw.
//!
//! Run with `RUST_LOG=debug` to see every overlap repair and change verdict.

use tessera_multi_range::{
    ChangeVerdict, ClickedValue, Direction, LabelHandle, MultiRangeSlider, NameHandle,
    NameOffset, Range, Ranges, SliderOptions, SliderProps, Thumb, TooltipAction, TooltipAnchor,
    TrackClick, TrackHandle, TrackSegment, validate_ranges,
};
use tracing::info;

const SESSION_RANGES: &str = r##"{
    "range-id-1": {
        "id": "range-id-1",
        "min": 1,
        "max": 10,
        "name": "range-name",
        "parent_id": "id-of-slider",
        "ref_id": "id-of-object-represented-by-this-range",
        "trackColor": "#DD2C00"
    },
    "range-id-2": {
        "id": "range-id-2",
        "min": 8,
        "max": 40,
        "name": "overlapping-range",
        "parent_id": "a1b2c3-slider"
    },
    "range-id-3": {
        "id": "range-id-3",
        "min": 50,
        "max": 100,
        "name": "other-range-name",
        "parent_id": "id-of-slider",
        "ref_id": "5e7a90-other-object",
        "immovable": { "left": true }
    }
}"##;

/// Stands in for a value label element.
struct ConsoleLabel {
    key: String,
}

impl LabelHandle for ConsoleLabel {
    fn set_anchor(&mut self, anchor: TooltipAnchor) {
        match anchor {
            TooltipAnchor::Left(offset) => info!(label = %self.key, "left: {offset}%"),
            TooltipAnchor::Right(offset) => info!(label = %self.key, "right: {offset}%"),
        }
    }

    fn set_visible(&mut self, visible: bool) {
        info!(label = %self.key, visible, "label visibility");
    }
}

/// Stands in for a band element.
struct ConsoleBand {
    key: String,
}

impl TrackHandle for ConsoleBand {
    fn set_segment(&mut self, segment: TrackSegment) {
        info!(
            band = %self.key,
            "left: {}%, width: {}%",
            segment.left,
            segment.width
        );
    }
}

/// Stands in for a name popup element.
struct ConsoleName {
    key: String,
    width: f64,
}

impl NameHandle for ConsoleName {
    fn width(&self) -> f64 {
        self.width
    }

    fn set_visible(&mut self, visible: bool) {
        info!(popup = %self.key, visible, "name visibility");
    }

    fn set_offset(&mut self, offset: NameOffset) {
        match offset {
            NameOffset::Origin => info!(popup = %self.key, "left: 0"),
            NameOffset::Centered { shift_px } => {
                info!(popup = %self.key, "left: calc(50% + {shift_px}px)")
            }
        }
    }
}

const MAX_BAND_LENGTH: f64 = 35.0;

fn length_after(range: &Range, value: f64, thumb: Thumb) -> f64 {
    match thumb {
        Thumb::Min => range.max - value,
        Thumb::Max => value - range.min,
    }
}

type ConsoleSlider = MultiRangeSlider<ConsoleLabel, ConsoleBand, ConsoleName>;

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,example=info,tessera_multi_range=debug",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn mount(slider: &mut ConsoleSlider) {
    let ids: Vec<String> = slider.ranges().keys().cloned().collect();
    for id in ids {
        for direction in [Direction::Left, Direction::Right] {
            let key = format!("{id}/{direction:?}");
            slider.attach_label(&id, direction, ConsoleLabel { key });
        }
        slider.attach_track(&id, ConsoleBand { key: id.clone() });
        slider.attach_name(
            &id,
            ConsoleName {
                key: id.clone(),
                width: 96.0,
            },
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let ranges: Ranges = serde_json::from_str(SESSION_RANGES)?;
    if let Err(err) = validate_ranges(&ranges) {
        info!("host data needs repair: {err}");
    }

    let props = SliderProps::default()
        .ranges(ranges)
        .options(SliderOptions::default().range_padding(1.0))
        .check_continuous_changes(|range: &Range, value: f64, thumb: Thumb| {
            if length_after(range, value, thumb) > MAX_BAND_LENGTH {
                ChangeVerdict::Reject
            } else {
                ChangeVerdict::Accept
            }
        })
        .emit_changes(|range: &Range, value: f64, thumb: Thumb| {
            if length_after(range, value, thumb) > MAX_BAND_LENGTH {
                // Snap back: the moved thumb takes the opposite slot's value.
                ChangeVerdict::Redirect {
                    min: range.max,
                    max: range.min,
                }
            } else {
                ChangeVerdict::Accept
            }
        })
        .empty_space_callback(|clicked: ClickedValue| {
            info!(
                value = clicked.relative_value,
                "free space {}..{}",
                clicked.closest_ranges.min,
                clicked.closest_ranges.max
            );
        })
        .label_format(|value: f64| format!("{value:.1}"));

    let mut slider = ConsoleSlider::new(props);
    info!(extremes = ?slider.extremes(), "slider ready");
    mount(&mut slider);

    slider.thumb_hover("range-id-2", Thumb::Max, TooltipAction::Show);
    for step in ["42", "46", "49", "55"] {
        slider.thumb_input("range-id-2", Thumb::Max, step);
    }
    if let Some(update) = slider.thumb_release("range-id-2", Thumb::Max, "55") {
        info!(value = update.value, verdict = ?update.verdict, "released");
    }
    slider.thumb_hover("range-id-2", Thumb::Max, TooltipAction::Hide);

    if slider.thumb_release("range-id-3", Thumb::Min, "20").is_none() {
        info!("range-id-3 min thumb is locked");
    }

    slider.band_hover("range-id-1", TooltipAction::Show);
    slider.track_click(&TrackClick::new(470.0, 10.0, 1000.0)?);

    for id in slider.ranges().keys() {
        let min = slider.thumb_label(id, Thumb::Min).unwrap_or_default();
        let max = slider.thumb_label(id, Thumb::Max).unwrap_or_default();
        info!(range = %id, "{min} .. {max}");
    }
    println!("{}", serde_json::to_string_pretty(slider.ranges())?);

    Ok(())
}
