use alloc::sync::Arc;

use crate::{
    BOX_LOCATOR, BoundedSize, Delta, ElementTree, MaxSizeOptions, Measurements, Modifier,
    ModifierData, OverflowDetector, PassContext, Phase, Placement, RectOverflow, Registration,
    SIZE_FLIP, SideOffsets,
};

/// Registered name of [`MaxSize`].
pub const MAX_SIZE: &str = "maxSize";

/// Computes how tall (or wide) the floating box may grow before it leaves its boundary.
///
/// Pure: the result is published as [`ModifierData::MaxSize`] and applied by
/// [`crate::ApplyMaxSize`].
#[derive(Clone)]
pub struct MaxSize {
    options: MaxSizeOptions,
    detector: Arc<dyn OverflowDetector + Send + Sync>,
}

impl Default for MaxSize {
    fn default() -> Self {
        Self::new(MaxSizeOptions::default())
    }
}

impl MaxSize {
    pub fn new(options: MaxSizeOptions) -> Self {
        Self {
            options,
            detector: Arc::new(RectOverflow),
        }
    }

    /// Replaces the overflow primitive (defaults to [`RectOverflow`]).
    pub fn with_detector(
        mut self,
        detector: impl OverflowDetector + Send + Sync + 'static,
    ) -> Self {
        self.detector = Arc::new(detector);
        self
    }

    pub fn options(&self) -> &MaxSizeOptions {
        &self.options
    }

    /// Registers under [`MAX_SIZE`] in the `main` phase, after the box locator and, when present,
    /// the size-aware flip.
    pub fn registration<T: ElementTree>(self) -> Registration<T> {
        Registration::new(MAX_SIZE, Phase::Main, self)
            .with_requires([BOX_LOCATOR])
            .with_requires_if_exists([SIZE_FLIP])
    }

    /// Bound for `placement`, falling back to the first configured fallback placement when the
    /// measurement is unusable. Never fails; the last resort is a zero bound.
    pub fn compute(&self, measurements: &Measurements, placement: Placement) -> BoundedSize {
        if let Some(size) = available_size(
            &*self.detector,
            measurements,
            placement,
            &self.options.padding,
        ) {
            return size;
        }

        let Some(&fallback) = self.options.fallback_placements.first() else {
            fdebug!(
                placement = placement.as_str(),
                "overflow unavailable and no fallback placement; bounding to 0"
            );
            return BoundedSize::zero(placement.dimension());
        };

        fdebug!(
            placement = placement.as_str(),
            fallback = fallback.as_str(),
            "overflow unavailable; measuring the fallback placement"
        );
        available_size(
            &*self.detector,
            measurements,
            fallback,
            &self.options.padding,
        )
        .unwrap_or_else(|| BoundedSize::zero(placement.dimension()))
    }
}

impl core::fmt::Debug for MaxSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MaxSize")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<T: ElementTree> Modifier<T> for MaxSize {
    fn run(&self, ctx: &PassContext<'_, T>) -> Delta<T::Handle> {
        let size = self.compute(&ctx.state.measurements, ctx.state.placement);
        ftrace!(value = size.value(), "maxSize computed");
        Delta::data(ModifierData::MaxSize(size))
    }
}

/// Extent left on `placement`'s constrained edge: the popper's extent minus its overflow there.
///
/// Returns `None` for degenerate input (no overflow measurement, unmeasured popper, or a
/// non-finite result).
pub(crate) fn available_size(
    detector: &(dyn OverflowDetector + Send + Sync),
    measurements: &Measurements,
    placement: Placement,
    padding: &SideOffsets,
) -> Option<BoundedSize> {
    let overflow = detector.detect(measurements, placement, padding)?;
    let popper = measurements.popper?;
    let dimension = placement.dimension();
    let raw = popper.extent(dimension) - overflow.get(placement.constraining_edge());
    raw.is_finite().then(|| BoundedSize::new(dimension, raw))
}
