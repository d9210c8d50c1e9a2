use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::{ElementTree, ModifierData, Placement, PlacementState, StyleWrite};

/// Pipeline phases, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Phase {
    BeforeRead,
    Read,
    AfterRead,
    BeforeMain,
    Main,
    AfterMain,
    BeforeWrite,
    Write,
    AfterWrite,
}

impl Phase {
    pub const ALL: [Phase; 9] = [
        Self::BeforeRead,
        Self::Read,
        Self::AfterRead,
        Self::BeforeMain,
        Self::Main,
        Self::AfterMain,
        Self::BeforeWrite,
        Self::Write,
        Self::AfterWrite,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BeforeRead => "beforeRead",
            Self::Read => "read",
            Self::AfterRead => "afterRead",
            Self::BeforeMain => "beforeMain",
            Self::Main => "main",
            Self::AfterMain => "afterMain",
            Self::BeforeWrite => "beforeWrite",
            Self::Write => "write",
            Self::AfterWrite => "afterWrite",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view handed to a modifier while it runs.
pub struct PassContext<'a, T: ElementTree> {
    pub tree: &'a T,
    pub state: &'a PlacementState<T::Handle>,
    /// The running modifier's registered name.
    pub name: &'a str,
}

/// What a modifier asks the pass driver to change.
///
/// `data` is stored under the modifier's own name; `writes` are applied to the element tree
/// before the next modifier runs.
#[derive(Clone, Debug)]
pub struct Delta<H> {
    pub placement: Option<Placement>,
    pub data: Option<ModifierData<H>>,
    pub writes: Vec<StyleWrite<H>>,
}

impl<H> Default for Delta<H> {
    fn default() -> Self {
        Self {
            placement: None,
            data: None,
            writes: Vec::new(),
        }
    }
}

impl<H> Delta<H> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn data(data: ModifierData<H>) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    pub fn with_write(mut self, write: StyleWrite<H>) -> Self {
        self.writes.push(write);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.placement.is_none() && self.data.is_none() && self.writes.is_empty()
    }
}

/// A step of the positioning pipeline.
pub trait Modifier<T: ElementTree> {
    fn run(&self, ctx: &PassContext<'_, T>) -> Delta<T::Handle>;
}

impl<T, F> Modifier<T> for F
where
    T: ElementTree,
    F: Fn(&PassContext<'_, T>) -> Delta<T::Handle>,
{
    fn run(&self, ctx: &PassContext<'_, T>) -> Delta<T::Handle> {
        self(ctx)
    }
}

/// A named modifier together with its scheduling metadata.
pub struct Registration<T: ElementTree> {
    pub(crate) name: String,
    pub(crate) phase: Phase,
    pub(crate) enabled: bool,
    pub(crate) requires: Vec<String>,
    pub(crate) requires_if_exists: Vec<String>,
    pub(crate) modifier: Arc<dyn Modifier<T> + Send + Sync>,
}

impl<T: ElementTree> Registration<T> {
    pub fn new(
        name: impl Into<String>,
        phase: Phase,
        modifier: impl Modifier<T> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            phase,
            enabled: true,
            requires: Vec::new(),
            requires_if_exists: Vec::new(),
            modifier: Arc::new(modifier),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn requires(&self) -> &[String] {
        &self.requires
    }

    pub fn requires_if_exists(&self) -> &[String] {
        &self.requires_if_exists
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    /// Modifiers that must be registered, enabled, and run earlier in the same pass.
    pub fn with_requires<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.requires = names.into_iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Modifiers that must run earlier when they are registered and enabled.
    pub fn with_requires_if_exists<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.requires_if_exists = names.into_iter().map(|s| s.as_ref().to_string()).collect();
        self
    }
}

impl<T: ElementTree> Clone for Registration<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            phase: self.phase,
            enabled: self.enabled,
            requires: self.requires.clone(),
            requires_if_exists: self.requires_if_exists.clone(),
            modifier: Arc::clone(&self.modifier),
        }
    }
}

impl<T: ElementTree> fmt::Debug for Registration<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("phase", &self.phase)
            .field("enabled", &self.enabled)
            .field("requires", &self.requires)
            .field("requires_if_exists", &self.requires_if_exists)
            .finish_non_exhaustive()
    }
}
