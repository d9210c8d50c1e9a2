use alloc::string::String;
use alloc::vec::Vec;

use floating_size::{
    BoundedSize, DEFAULT_BOX_CLASS, DEFAULT_PADDING, ElementTree, Elements, MAX_SIZE,
    Measurements, Offset, PassInput, PassReport, Pipeline, PipelineError, Placement, Registration,
    bounded_size_modifiers,
};

/// Options for a [`PopupMenu`].
///
/// Defaults match a dropdown menu opening above its trigger: `top` placement, 7px padding, a 2px
/// gap from the reference, and a `tippy-box` panel.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PopupMenuOptions {
    pub placement: Placement,
    pub fallback_placements: Vec<Placement>,
    pub padding: f64,
    pub offset: Offset,
    pub box_class: String,
    /// Enables the size-aware flip that moves the menu to the roomier side.
    pub size_flip: bool,
}

impl Default for PopupMenuOptions {
    fn default() -> Self {
        Self {
            placement: Placement::Top,
            fallback_placements: Vec::new(),
            padding: DEFAULT_PADDING,
            offset: Offset::new(0.0, 2.0),
            box_class: String::from(DEFAULT_BOX_CLASS),
            size_flip: true,
        }
    }
}

impl PopupMenuOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_fallback_placements(
        mut self,
        placements: impl IntoIterator<Item = Placement>,
    ) -> Self {
        self.fallback_placements = placements.into_iter().collect();
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_box_class(mut self, class: impl Into<String>) -> Self {
        self.box_class = class.into();
        self
    }

    pub fn with_size_flip(mut self, enabled: bool) -> Self {
        self.size_flip = enabled;
        self
    }

    fn registrations<T: ElementTree>(&self) -> [Registration<T>; 4] {
        let [locator, flip, max_size, apply] =
            bounded_size_modifiers(&self.box_class, self.padding, &self.fallback_placements);
        [locator, flip.with_enabled(self.size_flip), max_size, apply]
    }
}

/// A framework-neutral controller for a size-bounded popup menu.
///
/// Holds no UI objects. The host calls [`PopupMenu::update`] whenever the menu opens or its
/// layout changes, passing fresh measurements; the inline `max-*` style of the menu's box is kept
/// in sync on the host's element tree.
pub struct PopupMenu<T: ElementTree> {
    options: PopupMenuOptions,
    pipeline: Pipeline<T>,
    placement: Placement,
    last_size: Option<BoundedSize>,
}

impl<T: ElementTree> PopupMenu<T> {
    pub fn new(options: PopupMenuOptions) -> Result<Self, PipelineError> {
        Self::with_modifiers(options, core::iter::empty::<Registration<T>>())
    }

    /// Builds the menu's pipeline with `extra` modifiers merged in by name, so an entry named like
    /// a built-in replaces it.
    pub fn with_modifiers(
        options: PopupMenuOptions,
        extra: impl IntoIterator<Item = Registration<T>>,
    ) -> Result<Self, PipelineError> {
        let pipeline = Pipeline::builder()
            .with_all(options.registrations())
            .with_all(extra)
            .build()?;
        adebug!(
            order = ?pipeline.order().collect::<Vec<_>>(),
            "popup menu pipeline built"
        );
        Ok(Self {
            placement: options.placement,
            options,
            pipeline,
            last_size: None,
        })
    }

    pub fn options(&self) -> &PopupMenuOptions {
        &self.options
    }

    pub fn pipeline(&self) -> &Pipeline<T> {
        &self.pipeline
    }

    /// Placement resolved by the last completed update.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Bound computed by the last completed update.
    pub fn last_size(&self) -> Option<BoundedSize> {
        self.last_size
    }

    /// Runs one placement pass.
    ///
    /// The configured offset replaces `measurements.offset`. A pass cut short because the popper
    /// was detached leaves [`PopupMenu::placement`] and [`PopupMenu::last_size`] untouched.
    pub fn update(
        &mut self,
        tree: &mut T,
        elements: Elements<T::Handle>,
        measurements: Measurements,
    ) -> PassReport<T::Handle> {
        let measurements = measurements.with_offset(self.options.offset);
        let input = PassInput::new(self.options.placement, elements, measurements);
        let report = self.pipeline.run(tree, input);

        if report.completed {
            self.placement = report.state.placement;
            self.last_size = report.state.modifiers_data.max_size(MAX_SIZE);
        }
        atrace!(
            placement = self.placement.as_str(),
            completed = report.completed,
            style_mutations = report.style_mutations,
            "popup menu updated"
        );
        report
    }
}

impl<T: ElementTree> core::fmt::Debug for PopupMenu<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PopupMenu")
            .field("options", &self.options)
            .field("pipeline", &self.pipeline)
            .field("placement", &self.placement)
            .field("last_size", &self.last_size)
            .finish()
    }
}
