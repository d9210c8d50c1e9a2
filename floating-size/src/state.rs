use alloc::string::ToString;
use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

use crate::data_map::DataMap;
use crate::{BoundedSize, Measurements, Placement};

/// The elements taking part in one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Elements<H> {
    /// The anchor the floating element is attached to.
    pub reference: H,
    /// The positioning wrapper of the floating element.
    pub popper: H,
    pub arrow: Option<H>,
}

impl<H> Elements<H> {
    pub fn new(reference: H, popper: H) -> Self {
        Self {
            reference,
            popper,
            arrow: None,
        }
    }

    pub fn with_arrow(mut self, arrow: Option<H>) -> Self {
        self.arrow = arrow;
        self
    }
}

/// Output of the box locator: the visual box inside the popper, if it is mounted.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxLocation<H> {
    pub box_element: Option<H>,
}

/// Output of the size-aware flip.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlipOutcome {
    pub placement: Placement,
    /// Whether the chosen placement fits without overflow on its constrained edge.
    pub fits: bool,
}

/// Data a modifier publishes for the modifiers that run after it.
#[derive(Clone)]
pub enum ModifierData<H> {
    Box(BoxLocation<H>),
    MaxSize(BoundedSize),
    Flip(FlipOutcome),
    /// Opaque output for modifiers outside this crate.
    Custom(Arc<dyn Any + Send + Sync>),
}

impl<H> ModifierData<H> {
    pub fn as_box(&self) -> Option<&BoxLocation<H>> {
        match self {
            Self::Box(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_max_size(&self) -> Option<BoundedSize> {
        match self {
            Self::MaxSize(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_flip(&self) -> Option<FlipOutcome> {
        match self {
            Self::Flip(f) => Some(*f),
            _ => None,
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Custom(v) => v.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl<H: fmt::Debug> fmt::Debug for ModifierData<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Box(b) => f.debug_tuple("Box").field(b).finish(),
            Self::MaxSize(s) => f.debug_tuple("MaxSize").field(s).finish(),
            Self::Flip(o) => f.debug_tuple("Flip").field(o).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Per-pass outputs keyed by modifier name.
#[derive(Clone)]
pub struct ModifiersData<H> {
    map: DataMap<H>,
}

impl<H> Default for ModifiersData<H> {
    fn default() -> Self {
        Self {
            map: DataMap::<H>::new(),
        }
    }
}

impl<H> ModifiersData<H> {
    pub fn get(&self, name: &str) -> Option<&ModifierData<H>> {
        self.map.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The box element published under `name`, if any.
    pub fn box_element(&self, name: &str) -> Option<&H> {
        self.get(name)?.as_box()?.box_element.as_ref()
    }

    pub fn max_size(&self, name: &str) -> Option<BoundedSize> {
        self.get(name)?.as_max_size()
    }

    pub(crate) fn insert(&mut self, name: &str, data: ModifierData<H>) {
        self.map.insert(name.to_string(), data);
    }
}

impl<H: fmt::Debug> fmt::Debug for ModifiersData<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

/// What the host supplies to start a layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PassInput<H> {
    pub placement: Placement,
    pub elements: Elements<H>,
    pub measurements: Measurements,
}

impl<H> PassInput<H> {
    pub fn new(placement: Placement, elements: Elements<H>, measurements: Measurements) -> Self {
        Self {
            placement,
            elements,
            measurements,
        }
    }
}

/// The state threaded through one layout pass.
///
/// Built fresh from a [`PassInput`] for every pass. Modifiers only see it read-only; the pass
/// driver merges their deltas.
#[derive(Clone, Debug)]
pub struct PlacementState<H> {
    pub placement: Placement,
    pub elements: Elements<H>,
    pub measurements: Measurements,
    pub modifiers_data: ModifiersData<H>,
}

impl<H> From<PassInput<H>> for PlacementState<H> {
    fn from(input: PassInput<H>) -> Self {
        Self {
            placement: input.placement,
            elements: input.elements,
            measurements: input.measurements,
            modifiers_data: ModifiersData::default(),
        }
    }
}
