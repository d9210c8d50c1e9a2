/// One edge of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// The axis a bound applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    Height,
    Width,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn extent(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Height => self.height,
            Dimension::Width => self.width,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

/// A rectangle in viewport pixels (`x`/`y` is the top-left corner).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}

/// Four per-edge values.
///
/// Used both for overflow measurements and for padding insets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideOffsets {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// How far an element sticks out of its boundary on each edge.
///
/// Negative values mean space remains, positive values mean the element overflows.
pub type Overflow = SideOffsets;

impl SideOffsets {
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn get(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.top.is_finite()
            && self.bottom.is_finite()
            && self.left.is_finite()
            && self.right.is_finite()
    }
}

/// Popper offset relative to its reference: `skidding` runs along the reference edge,
/// `distance` pushes away from it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub skidding: f64,
    pub distance: f64,
}

impl Offset {
    pub fn new(skidding: f64, distance: f64) -> Self {
        Self { skidding, distance }
    }
}

/// The largest extent a floating box may take without overflowing.
///
/// Values are clamped to be non-negative on construction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundedSize {
    Height(f64),
    Width(f64),
}

impl BoundedSize {
    pub fn new(dimension: Dimension, value: f64) -> Self {
        // NaN falls through `max` as 0.
        let value = value.max(0.0);
        match dimension {
            Dimension::Height => Self::Height(value),
            Dimension::Width => Self::Width(value),
        }
    }

    pub fn zero(dimension: Dimension) -> Self {
        Self::new(dimension, 0.0)
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Height(_) => Dimension::Height,
            Self::Width(_) => Dimension::Width,
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            Self::Height(v) | Self::Width(v) => v,
        }
    }

    pub fn height(&self) -> Option<f64> {
        match *self {
            Self::Height(v) => Some(v),
            Self::Width(_) => None,
        }
    }

    pub fn width(&self) -> Option<f64> {
        match *self {
            Self::Width(v) => Some(v),
            Self::Height(_) => None,
        }
    }
}

/// Geometry measured by the host for one layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurements {
    pub reference: Rect,
    /// `None` until the floating element has been laid out once.
    pub popper: Option<Size>,
    /// The clipping context (usually the viewport). `None` when unknown.
    pub boundary: Option<Rect>,
    pub offset: Offset,
}

impl Measurements {
    pub fn new(reference: Rect, popper: Option<Size>, boundary: Option<Rect>) -> Self {
        Self {
            reference,
            popper,
            boundary,
            offset: Offset::default(),
        }
    }

    pub fn with_offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }
}
