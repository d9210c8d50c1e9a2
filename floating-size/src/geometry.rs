use crate::{
    BasePlacement, Measurements, Offset, Overflow, Placement, Rect, SideOffsets, Size, Variation,
};

/// Computes where a popper of `popper` size lands when attached to `reference` at `placement`.
///
/// `offset.distance` moves the popper away from the reference, `offset.skidding` moves it along
/// the reference edge.
pub fn compute_offsets(
    reference: Rect,
    popper: Size,
    placement: Placement,
    offset: Offset,
) -> Rect {
    let center_x = reference.x + reference.width / 2.0 - popper.width / 2.0;
    let center_y = reference.y + reference.height / 2.0 - popper.height / 2.0;

    let (mut x, mut y) = match placement.base() {
        BasePlacement::Top => (center_x, reference.y - popper.height),
        BasePlacement::Bottom => (center_x, reference.bottom()),
        BasePlacement::Left => (reference.x - popper.width, center_y),
        BasePlacement::Right => (reference.right(), center_y),
    };

    if placement.is_vertical() {
        match placement.variation() {
            Some(Variation::Start) => x = reference.x,
            Some(Variation::End) => x = reference.right() - popper.width,
            None => {}
        }
        x += offset.skidding;
    } else {
        match placement.variation() {
            Some(Variation::Start) => y = reference.y,
            Some(Variation::End) => y = reference.bottom() - popper.height,
            None => {}
        }
        y += offset.skidding;
    }

    match placement.base() {
        BasePlacement::Top => y -= offset.distance,
        BasePlacement::Bottom => y += offset.distance,
        BasePlacement::Left => x -= offset.distance,
        BasePlacement::Right => x += offset.distance,
    }

    Rect::new(x, y, popper.width, popper.height)
}

/// Measures how far a floating element overflows its boundary at a candidate placement.
///
/// Implementations return `None` when the measurement is unavailable, e.g. the floating element
/// has not been laid out yet. Callers treat that as "no usable value", never as an error.
pub trait OverflowDetector {
    fn detect(
        &self,
        measurements: &Measurements,
        placement: Placement,
        padding: &SideOffsets,
    ) -> Option<Overflow>;
}

impl<F> OverflowDetector for F
where
    F: Fn(&Measurements, Placement, &SideOffsets) -> Option<Overflow>,
{
    fn detect(
        &self,
        measurements: &Measurements,
        placement: Placement,
        padding: &SideOffsets,
    ) -> Option<Overflow> {
        self(measurements, placement, padding)
    }
}

/// Rectangle-based overflow detection against the boundary, inset by `padding`.
///
/// The popper rect is derived from the reference with [`compute_offsets`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RectOverflow;

impl OverflowDetector for RectOverflow {
    fn detect(
        &self,
        measurements: &Measurements,
        placement: Placement,
        padding: &SideOffsets,
    ) -> Option<Overflow> {
        let popper = measurements.popper?;
        let boundary = measurements.boundary?;
        if !popper.is_finite()
            || !boundary.is_finite()
            || !measurements.reference.is_finite()
            || !padding.is_finite()
        {
            return None;
        }

        let element = compute_offsets(
            measurements.reference,
            popper,
            placement,
            measurements.offset,
        );
        let overflow = SideOffsets::new(
            boundary.top() - element.top() + padding.top,
            element.bottom() - boundary.bottom() + padding.bottom,
            boundary.left() - element.left() + padding.left,
            element.right() - boundary.right() + padding.right,
        );
        overflow.is_finite().then_some(overflow)
    }
}
