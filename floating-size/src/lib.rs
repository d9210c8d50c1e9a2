//! A headless positioning pipeline for floating UI panels (tooltips, menus, popovers).
//!
//! A layout pass runs a list of named modifiers, ordered by phase and by their declared
//! requirements. Each modifier reads an immutable snapshot of the pass state and returns a
//! [`Delta`] that the pipeline merges before the next modifier runs.
//!
//! The built-in modifiers keep a floating panel inside its boundary:
//! - [`BoxLocator`] (`findTippyBox`) finds the visual box inside the popper wrapper
//! - [`SizeFlip`] (`sizeFlip`) moves the panel to a placement with room for it
//! - [`MaxSize`] (`maxSize`) computes the largest height/width that avoids overflow
//! - [`ApplyMaxSize`] (`applyMaxSize`) writes that bound onto the box and enables scrolling
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - an [`ElementTree`] implementation (a DOM or an equivalent retained tree)
//! - measured rectangles for the reference, the popper and the boundary
//!
//! For a ready-made popup-menu wiring and an in-memory tree, see the `floating-size-adapter`
//! crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod apply_max_size;
mod box_locator;
mod data_map;
mod element;
mod geometry;
mod max_size;
mod modifier;
mod options;
mod pipeline;
mod placement;
mod size_flip;
mod state;
mod types;


pub use apply_max_size::{APPLY_MAX_SIZE, ApplyMaxSize};
pub use box_locator::{BOX_LOCATOR, BoxLocator, DEFAULT_BOX_CLASS};
pub use element::{ElementTree, StyleProperty, StyleValue, StyleWrite};
pub use geometry::{OverflowDetector, RectOverflow, compute_offsets};
pub use max_size::{MAX_SIZE, MaxSize};
pub use modifier::{Delta, Modifier, PassContext, Phase, Registration};
pub use options::{DEFAULT_PADDING, MaxSizeOptions, SizeFlipOptions};
pub use pipeline::{PassReport, Pipeline, PipelineBuilder, PipelineError};
pub use placement::{BasePlacement, ParsePlacementError, Placement, Variation};
pub use size_flip::{SIZE_FLIP, SizeFlip};
pub use state::{
    BoxLocation, Elements, FlipOutcome, ModifierData, ModifiersData, PassInput, PlacementState,
};
pub use types::{
    BoundedSize, Dimension, Measurements, Offset, Overflow, Rect, Side, SideOffsets, Size,
};

/// The standard bounded-size modifier set: box locator, size-aware flip, max size, and apply.
///
/// `box_class` marks the box inside the popper. `fallback_placements` feeds both the flip
/// candidates and the max-size fallback.
pub fn bounded_size_modifiers<T: ElementTree>(
    box_class: &str,
    padding: f64,
    fallback_placements: &[Placement],
) -> [Registration<T>; 4] {
    let fallbacks = fallback_placements.iter().copied();
    [
        BoxLocator::new(box_class).registration(),
        SizeFlip::new(
            SizeFlipOptions::new()
                .with_padding(padding)
                .with_fallback_placements(fallbacks.clone()),
        )
        .registration(),
        MaxSize::new(
            MaxSizeOptions::new()
                .with_padding(padding)
                .with_fallback_placements(fallbacks),
        )
        .registration(),
        ApplyMaxSize.registration(),
    ]
}
