//! Value and name tooltip placement.
//!
//! Label elements belong to the UI layer. They are handed to these functions
//! through [`LabelRegistry`] and [`NameRegistry`], which the UI owns and
//! fills as elements mount.

use rustc_hash::FxHashMap;

use crate::{
    extremes::Extremes,
    projection::percent,
    range::{Direction, Range, RangeId, Thumb},
};

/// Past this percentage a value label is anchored from the right edge so it
/// stays on the track.
pub const FLIP_THRESHOLD: f64 = 80.0;

/// Edge a value label is positioned from, with the offset in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TooltipAnchor {
    Left(f64),
    Right(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipAction {
    Show,
    Hide,
}

impl TooltipAction {
    pub fn is_visible(self) -> bool {
        self == TooltipAction::Show
    }
}

/// Horizontal offset of a name popup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NameOffset {
    /// Back at the band origin.
    Origin,
    /// Centered over the band: `50%` plus `shift_px` pixels.
    Centered { shift_px: f64 },
}

/// UI-side value label attached to one thumb.
pub trait LabelHandle {
    fn set_anchor(&mut self, anchor: TooltipAnchor);
    fn set_visible(&mut self, visible: bool);
}

/// UI-side name popup attached to a band.
pub trait NameHandle {
    /// Rendered width in pixels.
    fn width(&self) -> f64;
    fn set_visible(&mut self, visible: bool);
    fn set_offset(&mut self, offset: NameOffset);
}

/// Value labels of one range, one per side.
#[derive(Debug)]
pub struct ThumbLabels<H> {
    pub left: Option<H>,
    pub right: Option<H>,
}

impl<H> Default for ThumbLabels<H> {
    fn default() -> Self {
        Self {
            left: None,
            right: None,
        }
    }
}

impl<H> ThumbLabels<H> {
    pub fn get_mut(&mut self, direction: Direction) -> Option<&mut H> {
        match direction {
            Direction::Left => self.left.as_mut(),
            Direction::Right => self.right.as_mut(),
        }
    }

    /// Attaches the label for `direction`, replacing any previous one.
    pub fn attach(&mut self, direction: Direction, handle: H) {
        match direction {
            Direction::Left => self.left = Some(handle),
            Direction::Right => self.right = Some(handle),
        }
    }
}

pub type LabelRegistry<H> = FxHashMap<RangeId, ThumbLabels<H>>;
pub type NameRegistry<H> = FxHashMap<RangeId, H>;

/// Placement of the value label for `thumb`, flipped near the track end.
pub fn tooltip_anchor(range: &Range, thumb: Thumb, extremes: &Extremes) -> TooltipAnchor {
    let position = percent(range.get(thumb), extremes.min, extremes.max);
    if position > FLIP_THRESHOLD {
        TooltipAnchor::Right(100.0 - position)
    } else {
        TooltipAnchor::Left(position)
    }
}

fn label_for<'a, H>(
    labels: &'a mut LabelRegistry<H>,
    range: &Range,
    thumb: Thumb,
) -> Option<&'a mut H> {
    labels
        .get_mut(&range.id)
        .and_then(|slots| slots.get_mut(thumb.direction()))
}

/// Moves the value label of `thumb` to match the range's current value.
///
/// Does nothing when the label is not attached.
pub fn change_tooltip_position<H: LabelHandle>(
    range: &Range,
    thumb: Thumb,
    labels: &mut LabelRegistry<H>,
    extremes: &Extremes,
) {
    if let Some(label) = label_for(labels, range, thumb) {
        label.set_anchor(tooltip_anchor(range, thumb, extremes));
    }
}

/// Shows or hides the value label of `thumb`, then repositions it.
pub fn toggle_tooltip<H: LabelHandle>(
    action: TooltipAction,
    range: &Range,
    thumb: Thumb,
    labels: &mut LabelRegistry<H>,
    extremes: &Extremes,
) {
    if let Some(label) = label_for(labels, range, thumb) {
        label.set_visible(action.is_visible());
        label.set_anchor(tooltip_anchor(range, thumb, extremes));
    }
}

/// Shows a band's name popup centered over it, or hides it.
pub fn toggle_name_tooltip<H: NameHandle>(
    action: TooltipAction,
    range_id: &str,
    names: &mut NameRegistry<H>,
) {
    let Some(name) = names.get_mut(range_id) else {
        return;
    };
    name.set_visible(action.is_visible());
    let offset = match action {
        TooltipAction::Show => NameOffset::Centered {
            shift_px: -name.width() / 2.0,
        },
        TooltipAction::Hide => NameOffset::Origin,
    };
    name.set_offset(offset);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FakeLabel {
        anchor: Option<TooltipAnchor>,
        visible: bool,
    }

    impl LabelHandle for FakeLabel {
        fn set_anchor(&mut self, anchor: TooltipAnchor) {
            self.anchor = Some(anchor);
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
    }

    #[derive(Debug)]
    struct FakeName {
        width: f64,
        visible: bool,
        offset: NameOffset,
    }

    impl NameHandle for FakeName {
        fn width(&self) -> f64 {
            self.width
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }

        fn set_offset(&mut self, offset: NameOffset) {
            self.offset = offset;
        }
    }

    fn labels_for(id: &str) -> LabelRegistry<FakeLabel> {
        let mut slots = ThumbLabels::default();
        slots.attach(Direction::Left, FakeLabel::default());
        slots.attach(Direction::Right, FakeLabel::default());
        let mut labels = LabelRegistry::default();
        labels.insert(id.to_string(), slots);
        labels
    }

    const EXTREMES: Extremes = Extremes {
        min: 0.0,
        max: 100.0,
    };

    #[test]
    fn test_anchor_flips_past_threshold() {
        let range = Range::unchecked("a", 20.0, 90.0);
        assert_eq!(
            tooltip_anchor(&range, Thumb::Min, &EXTREMES),
            TooltipAnchor::Left(20.0)
        );
        assert_eq!(
            tooltip_anchor(&range, Thumb::Max, &EXTREMES),
            TooltipAnchor::Right(10.0)
        );

        let at_threshold = Range::unchecked("b", 10.0, 80.0);
        assert_eq!(
            tooltip_anchor(&at_threshold, Thumb::Max, &EXTREMES),
            TooltipAnchor::Left(80.0)
        );
    }

    #[test]
    fn test_change_position_targets_thumb_side() {
        let range = Range::unchecked("a", 30.0, 95.0);
        let mut labels = labels_for("a");

        change_tooltip_position(&range, Thumb::Max, &mut labels, &EXTREMES);

        let slots = &labels["a"];
        assert_eq!(slots.left.as_ref().unwrap().anchor, None);
        assert_eq!(
            slots.right.as_ref().unwrap().anchor,
            Some(TooltipAnchor::Right(5.0))
        );
    }

    #[test]
    fn test_toggle_tooltip_sets_visibility_and_position() {
        let range = Range::unchecked("a", 30.0, 95.0);
        let mut labels = labels_for("a");

        toggle_tooltip(TooltipAction::Show, &range, Thumb::Min, &mut labels, &EXTREMES);
        let left = labels["a"].left.as_ref().unwrap();
        assert!(left.visible);
        assert_eq!(left.anchor, Some(TooltipAnchor::Left(30.0)));

        toggle_tooltip(TooltipAction::Hide, &range, Thumb::Min, &mut labels, &EXTREMES);
        assert!(!labels["a"].left.as_ref().unwrap().visible);
    }

    #[test]
    fn test_missing_labels_are_ignored() {
        let range = Range::unchecked("unknown", 30.0, 95.0);
        let mut labels = labels_for("a");
        toggle_tooltip(TooltipAction::Show, &range, Thumb::Min, &mut labels, &EXTREMES);
        assert!(!labels["a"].left.as_ref().unwrap().visible);

        let mut partial: LabelRegistry<FakeLabel> = LabelRegistry::default();
        partial.insert("unknown".to_string(), ThumbLabels::default());
        change_tooltip_position(&range, Thumb::Max, &mut partial, &EXTREMES);
        assert!(partial["unknown"].right.is_none());
    }

    #[test]
    fn test_name_tooltip_centering() {
        let mut names = NameRegistry::default();
        names.insert(
            "a".to_string(),
            FakeName {
                width: 64.0,
                visible: false,
                offset: NameOffset::Origin,
            },
        );

        toggle_name_tooltip(TooltipAction::Show, "a", &mut names);
        assert!(names["a"].visible);
        assert_eq!(names["a"].offset, NameOffset::Centered { shift_px: -32.0 });

        toggle_name_tooltip(TooltipAction::Hide, "a", &mut names);
        assert!(!names["a"].visible);
        assert_eq!(names["a"].offset, NameOffset::Origin);

        toggle_name_tooltip(TooltipAction::Show, "missing", &mut names);
    }
}
