//! Headless controller for a multi-range slider.
//!
//! ## Usage
//!
//! Build a [`MultiRangeSlider`] from [`SliderProps`], attach label, band and
//! name handles as the UI mounts them, and forward UI events to the matching
//! methods. The controller keeps the normalized ranges and the extremes and
//! pushes geometry back through the handles.

use derive_setters::Setters;
use tracing::{debug, warn};

use crate::{
    click::{ClickedValue, TrackClick, clicked_value_on_track},
    drag::{ThumbChange, ThumbUpdate, on_thumb_value_change},
    extremes::Extremes,
    normalize::check_ranges,
    options::SliderOptions,
    projection::{TrackHandle, TrackRegistry, update_track},
    prop::{CallbackWith, ChangeCallback},
    range::{Direction, Range, Ranges, Thumb},
    tooltip::{
        LabelHandle, LabelRegistry, NameHandle, NameRegistry, TooltipAction, toggle_name_tooltip,
        toggle_tooltip,
    },
};

/// Inputs of a [`MultiRangeSlider`].
#[derive(Clone, PartialEq, Default, Setters)]
pub struct SliderProps {
    /// Ranges as supplied by the host, before normalization.
    pub ranges: Ranges,
    pub options: SliderOptions,
    /// Fixed track bounds. Derived from the ranges when absent.
    #[setters(strip_option)]
    pub extremes: Option<Extremes>,
    /// Policy consulted when a thumb is released.
    #[setters(strip_option, into)]
    pub emit_changes: Option<ChangeCallback>,
    /// Policy consulted on every intermediate drag step.
    #[setters(strip_option, into)]
    pub check_continuous_changes: Option<ChangeCallback>,
    /// Receives clicks on empty track space.
    #[setters(strip_option, into)]
    pub empty_space_callback: Option<CallbackWith<ClickedValue>>,
    /// Formats thumb values for their labels.
    #[setters(strip_option, into)]
    pub label_format: Option<CallbackWith<f64, String>>,
}

/// Whether a thumb event is an intermediate drag step or the final release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThumbEvent {
    Input,
    Release,
}

/// Slider state plus the UI handles it drives.
pub struct MultiRangeSlider<L, T, N> {
    options: SliderOptions,
    external_extremes: Option<Extremes>,
    emit_changes: Option<ChangeCallback>,
    check_continuous_changes: Option<ChangeCallback>,
    empty_space_callback: Option<CallbackWith<ClickedValue>>,
    label_format: Option<CallbackWith<f64, String>>,
    ranges: Ranges,
    extremes: Extremes,
    labels: LabelRegistry<L>,
    tracks: TrackRegistry<T>,
    names: NameRegistry<N>,
}

impl<L, T, N> MultiRangeSlider<L, T, N>
where
    L: LabelHandle,
    T: TrackHandle,
    N: NameHandle,
{
    pub fn new(props: SliderProps) -> Self {
        let SliderProps {
            ranges,
            options,
            extremes,
            emit_changes,
            check_continuous_changes,
            empty_space_callback,
            label_format,
        } = props;
        let checked = check_ranges(Some(&ranges), &options);
        let resolved = Extremes::resolve(extremes, &ranges);
        Self {
            options,
            external_extremes: extremes,
            emit_changes,
            check_continuous_changes,
            empty_space_callback,
            label_format,
            ranges: checked,
            extremes: resolved,
            labels: LabelRegistry::default(),
            tracks: TrackRegistry::default(),
            names: NameRegistry::default(),
        }
    }

    /// Normalized ranges, the rendering source of truth.
    pub fn ranges(&self) -> &Ranges {
        &self.ranges
    }

    pub fn extremes(&self) -> Extremes {
        self.extremes
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn labels_mut(&mut self) -> &mut LabelRegistry<L> {
        &mut self.labels
    }

    pub fn tracks_mut(&mut self) -> &mut TrackRegistry<T> {
        &mut self.tracks
    }

    pub fn names_mut(&mut self) -> &mut NameRegistry<N> {
        &mut self.names
    }

    /// Attaches the value label for one side of a range.
    pub fn attach_label(&mut self, range_id: &str, direction: Direction, handle: L) {
        self.labels
            .entry(range_id.to_string())
            .or_default()
            .attach(direction, handle);
    }

    /// Attaches the band element of a range and positions it.
    pub fn attach_track(&mut self, range_id: &str, handle: T) {
        self.tracks.insert(range_id.to_string(), handle);
        if let Some(range) = self.ranges.get(range_id) {
            update_track(range, &self.extremes, &mut self.tracks);
        }
    }

    pub fn attach_name(&mut self, range_id: &str, handle: N) {
        self.names.insert(range_id.to_string(), handle);
    }

    /// Replaces all ranges with a fresh host snapshot.
    ///
    /// The snapshot is normalized from scratch. Extremes are re-derived
    /// unless fixed extremes were supplied. Handles of ranges missing from
    /// the snapshot are dropped.
    pub fn set_ranges(&mut self, ranges: Ranges) {
        self.ranges = check_ranges(Some(&ranges), &self.options);
        if self.external_extremes.is_none() {
            self.extremes = Extremes::from_ranges(&ranges);
        }
        self.detach_removed();
        self.refresh_tracks();
    }

    /// Fixes the track bounds, or goes back to deriving them with `None`.
    pub fn set_extremes(&mut self, extremes: Option<Extremes>) {
        self.external_extremes = extremes;
        self.extremes = Extremes::resolve(extremes, &self.ranges);
        self.refresh_tracks();
    }

    /// Whether `thumb` of `range` is locked.
    pub fn thumb_disabled(&self, range: &Range, thumb: Thumb) -> bool {
        self.options.thumb_locked(range, thumb)
    }

    /// Intermediate drag step, checked with `check_continuous_changes`.
    pub fn thumb_input(&mut self, range_id: &str, thumb: Thumb, raw: &str) -> Option<ThumbUpdate> {
        self.thumb_changed(ThumbEvent::Input, range_id, thumb, raw)
    }

    /// Thumb release, checked with `emit_changes`.
    pub fn thumb_release(
        &mut self,
        range_id: &str,
        thumb: Thumb,
        raw: &str,
    ) -> Option<ThumbUpdate> {
        self.thumb_changed(ThumbEvent::Release, range_id, thumb, raw)
    }

    /// Applies a thumb event. Returns `None` when the range is unknown or the
    /// thumb is locked.
    pub fn thumb_changed(
        &mut self,
        event: ThumbEvent,
        range_id: &str,
        thumb: Thumb,
        raw: &str,
    ) -> Option<ThumbUpdate> {
        let Some(range) = self.ranges.get(range_id) else {
            warn!(range = range_id, "thumb event for unknown range");
            return None;
        };
        if self.thumb_disabled(range, thumb) {
            debug!(range = range_id, ?thumb, "ignoring locked thumb");
            return None;
        }

        let policy = match event {
            ThumbEvent::Input => self.check_continuous_changes.as_ref(),
            ThumbEvent::Release => self.emit_changes.as_ref(),
        };
        let change = ThumbChange {
            target_value: raw,
            thumb,
            range,
        };
        let update =
            on_thumb_value_change(change, &self.ranges, &self.options, policy, &self.extremes);

        self.ranges = update.ranges.clone();
        if let Some(anchor) = update.tooltip
            && let Some(label) = self
                .labels
                .get_mut(range_id)
                .and_then(|slots| slots.get_mut(thumb.direction()))
        {
            label.set_anchor(anchor);
        }
        self.refresh_tracks();
        Some(update)
    }

    /// Resolves a click on the track and reports it to `empty_space_callback`.
    pub fn track_click(&self, click: &TrackClick) -> ClickedValue {
        let clicked = clicked_value_on_track(click, &self.extremes, &self.ranges);
        if let Some(callback) = &self.empty_space_callback {
            callback.call(clicked);
        }
        clicked
    }

    /// Pointer entered or left a thumb.
    pub fn thumb_hover(&mut self, range_id: &str, thumb: Thumb, action: TooltipAction) {
        let Some(range) = self.ranges.get(range_id) else {
            warn!(range = range_id, "hover on unknown range");
            return;
        };
        toggle_tooltip(action, range, thumb, &mut self.labels, &self.extremes);
    }

    /// Pointer entered or left a band.
    pub fn band_hover(&mut self, range_id: &str, action: TooltipAction) {
        toggle_name_tooltip(action, range_id, &mut self.names);
    }

    /// Text for a thumb's value label.
    pub fn thumb_label(&self, range_id: &str, thumb: Thumb) -> Option<String> {
        let value = self.ranges.get(range_id)?.get(thumb);
        Some(match &self.label_format {
            Some(format) => format.call(value),
            None => value.to_string(),
        })
    }

    fn detach_removed(&mut self) {
        let ranges = &self.ranges;
        let before = self.labels.len() + self.tracks.len() + self.names.len();
        self.labels.retain(|id, _| ranges.contains_key(id));
        self.tracks.retain(|id, _| ranges.contains_key(id));
        self.names.retain(|id, _| ranges.contains_key(id));
        let dropped = before - (self.labels.len() + self.tracks.len() + self.names.len());
        if dropped > 0 {
            debug!(dropped, "detached handles of removed ranges");
        }
    }

    fn refresh_tracks(&mut self) {
        for range in self.ranges.values() {
            update_track(range, &self.extremes, &mut self.tracks);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{
        drag::ChangeVerdict,
        projection::TrackSegment,
        range::{Immovable, ranges_from},
        test_fixtures::range,
        tooltip::{NameOffset, TooltipAnchor},
    };

    #[derive(Debug, Default)]
    struct Label {
        anchor: Option<TooltipAnchor>,
        visible: bool,
    }

    impl LabelHandle for Label {
        fn set_anchor(&mut self, anchor: TooltipAnchor) {
            self.anchor = Some(anchor);
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
    }

    #[derive(Debug, Default)]
    struct Band {
        segment: Option<TrackSegment>,
    }

    impl TrackHandle for Band {
        fn set_segment(&mut self, segment: TrackSegment) {
            self.segment = Some(segment);
        }
    }

    #[derive(Debug, Default)]
    struct Name {
        visible: bool,
        offset: Option<NameOffset>,
    }

    impl NameHandle for Name {
        fn width(&self) -> f64 {
            40.0
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }

        fn set_offset(&mut self, offset: NameOffset) {
            self.offset = Some(offset);
        }
    }

    type Slider = MultiRangeSlider<Label, Band, Name>;

    fn bands() -> Ranges {
        ranges_from([
            range("a", 0.0, 20.0),
            range("b", 30.0, 60.0).with_immovable(Immovable {
                left: true,
                right: false,
            }),
            range("c", 70.0, 100.0),
        ])
    }

    #[test]
    fn test_new_normalizes_and_derives_extremes() {
        let props = SliderProps::default().ranges(ranges_from([
            range("a", 0.0, 50.0),
            range("b", 40.0, 80.0),
        ]));
        let slider = Slider::new(props);

        assert_eq!(slider.extremes(), Extremes { min: 0.0, max: 80.0 });
        assert_eq!(slider.ranges()["a"].max, 40.0);
        assert!(
            slider
                .ranges()
                .values()
                .all(|range| range.actual_track_color.is_some())
        );
    }

    #[test]
    fn test_external_extremes_survive_range_updates() {
        let fixed = Extremes { min: -50.0, max: 150.0 };
        let mut slider = Slider::new(SliderProps::default().ranges(bands()).extremes(fixed));
        slider.set_ranges(ranges_from([range("z", 500.0, 600.0)]));
        assert_eq!(slider.extremes(), fixed);

        slider.set_extremes(None);
        assert_eq!(slider.extremes(), Extremes { min: 500.0, max: 600.0 });
    }

    #[test]
    fn test_tracks_follow_ranges_and_extremes() {
        let mut slider = Slider::new(SliderProps::default().ranges(bands()));
        slider.attach_track("b", Band::default());
        assert_eq!(
            slider.tracks_mut()["b"].segment,
            Some(TrackSegment {
                left: 30.0,
                width: 30.0
            })
        );

        slider.set_extremes(Some(Extremes { min: 0.0, max: 200.0 }));
        assert_eq!(
            slider.tracks_mut()["b"].segment,
            Some(TrackSegment {
                left: 15.0,
                width: 15.0
            })
        );
    }

    #[test]
    fn test_removed_ranges_lose_their_handles() {
        let mut slider = Slider::new(SliderProps::default().ranges(bands()));
        for id in ["a", "b"] {
            slider.attach_label(id, Direction::Left, Label::default());
            slider.attach_track(id, Band::default());
            slider.attach_name(id, Name::default());
        }

        slider.set_ranges(ranges_from([range("b", 30.0, 60.0), range("d", 80.0, 90.0)]));

        assert!(!slider.labels_mut().contains_key("a"));
        assert!(!slider.tracks_mut().contains_key("a"));
        assert!(!slider.names_mut().contains_key("a"));
        assert!(slider.labels_mut().contains_key("b"));
        assert!(slider.tracks_mut().contains_key("b"));
        assert!(slider.names_mut().contains_key("b"));
    }

    #[test]
    fn test_locked_thumb_is_ignored() {
        let mut slider = Slider::new(SliderProps::default().ranges(bands()));
        assert!(slider.thumb_release("b", Thumb::Min, "25").is_none());
        assert_eq!(slider.ranges()["b"].min, 30.0);

        let update = slider.thumb_release("b", Thumb::Max, "65");
        assert!(update.is_some());
        assert_eq!(slider.ranges()["b"].max, 65.0);
    }

    #[test]
    fn test_global_immovable_option() {
        let options = SliderOptions::default().is_immovable(|range: &Range| range.id == "c");
        let mut slider = Slider::new(SliderProps::default().ranges(bands()).options(options));
        assert!(slider.thumb_input("c", Thumb::Max, "90").is_none());
        assert!(slider.thumb_input("a", Thumb::Max, "25").is_some());
        assert_eq!(slider.ranges()["a"].max, 25.0);
    }

    #[test]
    fn test_unknown_range_is_ignored() {
        let mut slider = Slider::new(SliderProps::default().ranges(bands()));
        assert!(slider.thumb_input("nope", Thumb::Min, "1").is_none());
        assert_eq!(slider.thumb_label("nope", Thumb::Min), None);
    }

    #[test]
    fn test_input_and_release_use_their_own_policy() {
        let props = SliderProps::default()
            .ranges(bands())
            .check_continuous_changes(|_: &Range, _: f64, _: Thumb| ChangeVerdict::Reject)
            .emit_changes(|_: &Range, _: f64, _: Thumb| ChangeVerdict::Accept);
        let mut slider = Slider::new(props);

        let update = slider.thumb_input("a", Thumb::Max, "25");
        assert_eq!(update.map(|u| u.verdict), Some(ChangeVerdict::Reject));
        assert_eq!(slider.ranges()["a"].max, 20.0);

        let update = slider.thumb_release("a", Thumb::Max, "25");
        assert_eq!(update.map(|u| u.verdict), Some(ChangeVerdict::Accept));
        assert_eq!(slider.ranges()["a"].max, 25.0);
    }

    #[test]
    fn test_accepted_drag_moves_label() {
        let mut slider = Slider::new(SliderProps::default().ranges(bands()));
        slider.attach_label("c", Direction::Right, Label::default());

        slider.thumb_release("c", Thumb::Max, "95");
        let label = slider.labels_mut()["c"].right.as_ref().map(|l| l.anchor);
        assert_eq!(label, Some(Some(TooltipAnchor::Right(5.0))));
    }

    #[test]
    fn test_track_click_reports_to_callback() {
        let clicks = Arc::new(Mutex::new(Vec::new()));
        let props = SliderProps::default().ranges(bands()).empty_space_callback({
            let clicks = Arc::clone(&clicks);
            move |clicked: ClickedValue| clicks.lock().unwrap().push(clicked)
        });
        let slider = Slider::new(props);

        let click = TrackClick::new(65.0, 0.0, 100.0).unwrap();
        let clicked = slider.track_click(&click);

        assert_eq!(clicked.closest_ranges, Extremes { min: 60.0, max: 70.0 });
        assert_eq!(*clicks.lock().unwrap(), vec![clicked]);
    }

    #[test]
    fn test_hover_toggles_tooltips() {
        let mut slider = Slider::new(SliderProps::default().ranges(bands()));
        slider.attach_label("a", Direction::Left, Label::default());
        slider.attach_name("a", Name::default());

        slider.thumb_hover("a", Thumb::Min, TooltipAction::Show);
        let left = slider.labels_mut()["a"].left.as_ref().map(|l| (l.visible, l.anchor));
        assert_eq!(left, Some((true, Some(TooltipAnchor::Left(0.0)))));

        slider.band_hover("a", TooltipAction::Show);
        assert!(slider.names_mut()["a"].visible);
        assert_eq!(
            slider.names_mut()["a"].offset,
            Some(NameOffset::Centered { shift_px: -20.0 })
        );
    }

    #[test]
    fn test_thumb_label_formatting() {
        let slider = Slider::new(SliderProps::default().ranges(bands()));
        assert_eq!(slider.thumb_label("b", Thumb::Max).as_deref(), Some("60"));

        let props = SliderProps::default()
            .ranges(ranges_from([range("a", 1.5, 20.0)]))
            .label_format(|value: f64| format!("{value:.2} kWh"));
        let slider = Slider::new(props);
        assert_eq!(slider.thumb_label("a", Thumb::Min).as_deref(), Some("1.50 kWh"));
    }
}
