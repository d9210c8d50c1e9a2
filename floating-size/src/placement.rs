use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::{Dimension, Side};

/// The side of the reference a floating element is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BasePlacement {
    Top,
    Bottom,
    Left,
    Right,
}

impl BasePlacement {
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Alignment along the reference edge. No variation means centered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variation {
    Start,
    End,
}

impl Variation {
    pub fn opposite(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

/// Where a floating element sits relative to its reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Placement {
    Top,
    TopStart,
    TopEnd,
    Bottom,
    BottomStart,
    BottomEnd,
    Left,
    LeftStart,
    LeftEnd,
    Right,
    RightStart,
    RightEnd,
}

/// Per-base edge and axis used when bounding the floating box, indexed by `BasePlacement`.
///
/// The constrained edge is the one the box grows toward.
pub(crate) const CONSTRAINT_TABLE: [(BasePlacement, Side, Dimension); 4] = [
    (BasePlacement::Top, Side::Top, Dimension::Height),
    (BasePlacement::Bottom, Side::Bottom, Dimension::Height),
    (BasePlacement::Left, Side::Left, Dimension::Width),
    (BasePlacement::Right, Side::Right, Dimension::Width),
];

impl Placement {
    pub const ALL: [Placement; 12] = [
        Self::Top,
        Self::TopStart,
        Self::TopEnd,
        Self::Bottom,
        Self::BottomStart,
        Self::BottomEnd,
        Self::Left,
        Self::LeftStart,
        Self::LeftEnd,
        Self::Right,
        Self::RightStart,
        Self::RightEnd,
    ];

    pub fn new(base: BasePlacement, variation: Option<Variation>) -> Self {
        use BasePlacement as B;
        use Variation as V;
        match (base, variation) {
            (B::Top, None) => Self::Top,
            (B::Top, Some(V::Start)) => Self::TopStart,
            (B::Top, Some(V::End)) => Self::TopEnd,
            (B::Bottom, None) => Self::Bottom,
            (B::Bottom, Some(V::Start)) => Self::BottomStart,
            (B::Bottom, Some(V::End)) => Self::BottomEnd,
            (B::Left, None) => Self::Left,
            (B::Left, Some(V::Start)) => Self::LeftStart,
            (B::Left, Some(V::End)) => Self::LeftEnd,
            (B::Right, None) => Self::Right,
            (B::Right, Some(V::Start)) => Self::RightStart,
            (B::Right, Some(V::End)) => Self::RightEnd,
        }
    }

    pub fn base(self) -> BasePlacement {
        match self {
            Self::Top | Self::TopStart | Self::TopEnd => BasePlacement::Top,
            Self::Bottom | Self::BottomStart | Self::BottomEnd => BasePlacement::Bottom,
            Self::Left | Self::LeftStart | Self::LeftEnd => BasePlacement::Left,
            Self::Right | Self::RightStart | Self::RightEnd => BasePlacement::Right,
        }
    }

    pub fn variation(self) -> Option<Variation> {
        match self {
            Self::TopStart | Self::BottomStart | Self::LeftStart | Self::RightStart => {
                Some(Variation::Start)
            }
            Self::TopEnd | Self::BottomEnd | Self::LeftEnd | Self::RightEnd => Some(Variation::End),
            _ => None,
        }
    }

    /// Mirrors the base side and keeps the alignment (`top-start` → `bottom-start`).
    pub fn opposite(self) -> Self {
        Self::new(self.base().opposite(), self.variation())
    }

    /// Mirrors the alignment and keeps the base side (`top-start` → `top-end`).
    pub fn opposite_variation(self) -> Self {
        Self::new(self.base(), self.variation().map(Variation::opposite))
    }

    /// Edge whose overflow limits the box at this placement.
    pub fn constraining_edge(self) -> Side {
        CONSTRAINT_TABLE[self.base() as usize].1
    }

    /// Axis limited at this placement: height for top/bottom, width for left/right.
    pub fn dimension(self) -> Dimension {
        CONSTRAINT_TABLE[self.base() as usize].2
    }

    pub fn is_vertical(self) -> bool {
        matches!(self.base(), BasePlacement::Top | BasePlacement::Bottom)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::Bottom => "bottom",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::Left => "left",
            Self::LeftStart => "left-start",
            Self::LeftEnd => "left-end",
            Self::Right => "right",
            Self::RightStart => "right-start",
            Self::RightEnd => "right-end",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown placement `{0}`")]
pub struct ParsePlacementError(pub String);

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParsePlacementError(s.to_string()))
    }
}

impl TryFrom<String> for Placement {
    type Error = ParsePlacementError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Placement> for String {
    fn from(value: Placement) -> Self {
        value.as_str().to_string()
    }
}
