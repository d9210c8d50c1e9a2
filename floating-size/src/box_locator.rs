use alloc::string::String;

use crate::{
    BoxLocation, Delta, ElementTree, Modifier, ModifierData, PassContext, Phase, Registration,
};

/// Registered name of [`BoxLocator`].
pub const BOX_LOCATOR: &str = "findTippyBox";

/// Marker class of the visual box rendered inside a popper.
pub const DEFAULT_BOX_CLASS: &str = "tippy-box";

/// Finds the element that draws the floating panel inside the popper wrapper.
///
/// Size limits go on this box rather than the wrapper: borders and enter/exit animations live on
/// the box, so clipping the wrapper would cut them off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoxLocator {
    class: String,
}

impl Default for BoxLocator {
    fn default() -> Self {
        Self::new(DEFAULT_BOX_CLASS)
    }
}

impl BoxLocator {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Registers under [`BOX_LOCATOR`] in the `read` phase.
    pub fn registration<T: ElementTree>(self) -> Registration<T> {
        Registration::new(BOX_LOCATOR, Phase::Read, self)
    }
}

impl<T: ElementTree> Modifier<T> for BoxLocator {
    fn run(&self, ctx: &PassContext<'_, T>) -> Delta<T::Handle> {
        let box_element = ctx.tree.query_class(&ctx.state.elements.popper, &self.class);
        if box_element.is_none() {
            ftrace!(class = self.class.as_str(), "box element not mounted yet");
        }
        Delta::data(ModifierData::Box(BoxLocation { box_element }))
    }
}
