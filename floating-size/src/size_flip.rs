use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::max_size::available_size;
use crate::{
    Delta, ElementTree, FlipOutcome, Measurements, Modifier, ModifierData, OverflowDetector,
    PassContext, Phase, Placement, RectOverflow, Registration, SizeFlipOptions,
};

/// Registered name of [`SizeFlip`].
pub const SIZE_FLIP: &str = "sizeFlip";

/// Picks a placement with room for the floating box.
///
/// Candidates are the current placement followed by the fallbacks (or the opposite placement
/// when none are configured). The first candidate that does not overflow on its constrained
/// edge wins; otherwise the one leaving the most room.
#[derive(Clone)]
pub struct SizeFlip {
    options: SizeFlipOptions,
    detector: Arc<dyn OverflowDetector + Send + Sync>,
}

impl Default for SizeFlip {
    fn default() -> Self {
        Self::new(SizeFlipOptions::default())
    }
}

impl SizeFlip {
    pub fn new(options: SizeFlipOptions) -> Self {
        Self {
            options,
            detector: Arc::new(RectOverflow),
        }
    }

    pub fn with_detector(
        mut self,
        detector: impl OverflowDetector + Send + Sync + 'static,
    ) -> Self {
        self.detector = Arc::new(detector);
        self
    }

    pub fn options(&self) -> &SizeFlipOptions {
        &self.options
    }

    /// Registers under [`SIZE_FLIP`] in the `main` phase.
    pub fn registration<T: ElementTree>(self) -> Registration<T> {
        Registration::new(SIZE_FLIP, Phase::Main, self)
    }

    pub fn candidates(&self, placement: Placement) -> Vec<Placement> {
        let mut out = Vec::with_capacity(self.options.fallback_placements.len() + 1);
        out.push(placement);
        if self.options.fallback_placements.is_empty() {
            out.push(placement.opposite());
        } else {
            for &p in &self.options.fallback_placements {
                if !out.contains(&p) {
                    out.push(p);
                }
            }
        }
        out
    }

    /// Returns `None` when no candidate could be measured.
    pub fn choose(
        &self,
        measurements: &Measurements,
        placement: Placement,
    ) -> Option<FlipOutcome> {
        let mut roomiest: Option<(Placement, f64)> = None;
        for candidate in self.candidates(placement) {
            let Some(overflow) = self
                .detector
                .detect(measurements, candidate, &self.options.padding)
            else {
                continue;
            };
            if overflow.get(candidate.constraining_edge()) <= 0.0 {
                return Some(FlipOutcome {
                    placement: candidate,
                    fits: true,
                });
            }
            let Some(room) = available_size(
                &*self.detector,
                measurements,
                candidate,
                &self.options.padding,
            ) else {
                continue;
            };
            if roomiest.is_none_or(|(_, best)| room.value() > best) {
                roomiest = Some((candidate, room.value()));
            }
        }
        roomiest.map(|(placement, _)| FlipOutcome {
            placement,
            fits: false,
        })
    }
}

impl core::fmt::Debug for SizeFlip {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SizeFlip")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<T: ElementTree> Modifier<T> for SizeFlip {
    fn run(&self, ctx: &PassContext<'_, T>) -> Delta<T::Handle> {
        let Some(outcome) = self.choose(&ctx.state.measurements, ctx.state.placement) else {
            ftrace!("no measurable candidate; keeping placement");
            return Delta::none();
        };
        Delta::data(ModifierData::Flip(outcome)).with_placement(outcome.placement)
    }
}
