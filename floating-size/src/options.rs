use alloc::vec::Vec;

use crate::{Placement, SideOffsets};

/// Default visual margin kept between a bounded box and its boundary, in pixels.
pub const DEFAULT_PADDING: f64 = 7.0;

/// Configuration for [`crate::MaxSize`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MaxSizeOptions {
    /// Boundary inset applied when measuring overflow.
    pub padding: SideOffsets,
    /// Alternate placements. Only the first one is consulted, and only when the current
    /// placement yields no usable measurement.
    pub fallback_placements: Vec<Placement>,
}

impl Default for MaxSizeOptions {
    fn default() -> Self {
        Self {
            padding: SideOffsets::uniform(DEFAULT_PADDING),
            fallback_placements: Vec::new(),
        }
    }
}

impl MaxSizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = SideOffsets::uniform(padding);
        self
    }

    pub fn with_side_padding(mut self, padding: SideOffsets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_fallback_placements(
        mut self,
        placements: impl IntoIterator<Item = Placement>,
    ) -> Self {
        self.fallback_placements = placements.into_iter().collect();
        self
    }
}

/// Configuration for [`crate::SizeFlip`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SizeFlipOptions {
    pub padding: SideOffsets,
    /// Candidates tried after the current placement. When empty, the opposite placement is used.
    pub fallback_placements: Vec<Placement>,
}

impl Default for SizeFlipOptions {
    fn default() -> Self {
        Self {
            padding: SideOffsets::uniform(DEFAULT_PADDING),
            fallback_placements: Vec::new(),
        }
    }
}

impl SizeFlipOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = SideOffsets::uniform(padding);
        self
    }

    pub fn with_fallback_placements(
        mut self,
        placements: impl IntoIterator<Item = Placement>,
    ) -> Self {
        self.fallback_placements = placements.into_iter().collect();
        self
    }
}
