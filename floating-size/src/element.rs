use core::fmt;

/// An inline style property the pipeline may write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleProperty {
    MaxHeight,
    MaxWidth,
    Overflow,
}

impl StyleProperty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MaxHeight => "max-height",
            Self::MaxWidth => "max-width",
            Self::Overflow => "overflow",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inline style value. Displays in CSS syntax (`343px`, `auto`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleValue {
    Px(f64),
    Auto,
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Auto => f.write_str("auto"),
        }
    }
}

/// A pending inline style change. `value: None` removes the property.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleWrite<H> {
    pub element: H,
    pub property: StyleProperty,
    pub value: Option<StyleValue>,
}

impl<H> StyleWrite<H> {
    pub fn set(element: H, property: StyleProperty, value: StyleValue) -> Self {
        Self {
            element,
            property,
            value: Some(value),
        }
    }

    pub fn remove(element: H, property: StyleProperty) -> Self {
        Self {
            element,
            property,
            value: None,
        }
    }
}

/// The host's element tree (a DOM or an equivalent retained UI tree).
///
/// The pipeline only reads through `&self` while modifiers run; style writes are applied by the
/// pass driver between modifiers.
pub trait ElementTree {
    type Handle: Clone + PartialEq + fmt::Debug;

    /// Returns the first descendant of `root` (pre-order, `root` excluded) carrying `class`.
    fn query_class(&self, root: &Self::Handle, class: &str) -> Option<Self::Handle>;

    fn style(&self, element: &Self::Handle, property: StyleProperty) -> Option<StyleValue>;

    fn set_style(&mut self, element: &Self::Handle, property: StyleProperty, value: StyleValue);

    fn remove_style(&mut self, element: &Self::Handle, property: StyleProperty);

    /// Whether `element` is still mounted. A detached popper ends the pass early.
    fn is_connected(&self, element: &Self::Handle) -> bool {
        let _ = element;
        true
    }
}
