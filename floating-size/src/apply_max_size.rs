use crate::{
    BOX_LOCATOR, Delta, Dimension, ElementTree, MAX_SIZE, Modifier, PassContext, Phase,
    Registration, StyleProperty, StyleValue, StyleWrite,
};

/// Registered name of [`ApplyMaxSize`].
pub const APPLY_MAX_SIZE: &str = "applyMaxSize";

/// Writes the bound computed by [`crate::MaxSize`] onto the box found by
/// [`crate::BoxLocator`], and lets the box scroll its content.
///
/// Does nothing when the box is not mounted yet; the next pass picks it up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyMaxSize;

impl ApplyMaxSize {
    /// Registers under [`APPLY_MAX_SIZE`] in the `beforeWrite` phase.
    pub fn registration<T: ElementTree>(self) -> Registration<T> {
        Registration::new(APPLY_MAX_SIZE, Phase::BeforeWrite, self)
            .with_requires([MAX_SIZE, BOX_LOCATOR])
    }
}

impl<T: ElementTree> Modifier<T> for ApplyMaxSize {
    fn run(&self, ctx: &PassContext<'_, T>) -> Delta<T::Handle> {
        let data = &ctx.state.modifiers_data;
        let Some(element) = data.box_element(BOX_LOCATOR) else {
            ftrace!("no box element; leaving styles untouched");
            return Delta::none();
        };
        let Some(size) = data.max_size(MAX_SIZE) else {
            return Delta::none();
        };

        let (bounded, other) = match size.dimension() {
            Dimension::Height => (StyleProperty::MaxHeight, StyleProperty::MaxWidth),
            Dimension::Width => (StyleProperty::MaxWidth, StyleProperty::MaxHeight),
        };
        Delta::none()
            .with_write(StyleWrite::set(
                element.clone(),
                bounded,
                StyleValue::Px(size.value()),
            ))
            .with_write(StyleWrite::remove(element.clone(), other))
            .with_write(StyleWrite::set(
                element.clone(),
                StyleProperty::Overflow,
                StyleValue::Auto,
            ))
    }
}
