use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{
    Delta, ElementTree, PassContext, PassInput, Phase, PlacementState, Registration, StyleWrite,
};

/// Problems found while ordering modifiers. Always reported at construction time.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("modifier `{0}` is registered more than once")]
    DuplicateName(String),
    #[error("modifier `{modifier}` requires `{requires}`, which is not registered or is disabled")]
    MissingRequirement { modifier: String, requires: String },
    #[error(
        "modifier `{modifier}` runs in phase {phase} but requires `{requires}`, which runs in the later phase {required_phase}"
    )]
    PhaseInversion {
        modifier: String,
        phase: Phase,
        requires: String,
        required_phase: Phase,
    },
    #[error("modifiers form a dependency cycle: {}", .0.join(", "))]
    Cycle(Vec<String>),
}

/// The result of one layout pass.
#[derive(Clone, Debug)]
pub struct PassReport<H> {
    pub state: PlacementState<H>,
    /// Style properties actually changed on the element tree.
    pub style_mutations: usize,
    /// `false` when the popper was detached and the remaining modifiers were skipped.
    pub completed: bool,
}

/// An ordered set of modifiers.
///
/// The run order is resolved once, in [`Pipeline::new`]: modifiers are grouped by phase, and
/// inside a phase every modifier runs after the ones it requires. Ties keep registration order.
pub struct Pipeline<T: ElementTree> {
    registrations: Vec<Registration<T>>,
    order: Vec<usize>,
}

impl<T: ElementTree> Pipeline<T> {
    pub fn new(registrations: Vec<Registration<T>>) -> Result<Self, PipelineError> {
        let registrations: Vec<Registration<T>> =
            registrations.into_iter().filter(|r| r.enabled).collect();
        let order = resolve_order(&registrations)?;
        fdebug!(modifiers = registrations.len(), "Pipeline::new");
        Ok(Self {
            registrations,
            order,
        })
    }

    pub fn builder() -> PipelineBuilder<T> {
        PipelineBuilder::new()
    }

    /// Modifier names in the order they run.
    pub fn order(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(|&i| self.registrations[i].name())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Runs every modifier once against a fresh [`PlacementState`].
    pub fn run(&self, tree: &mut T, input: PassInput<T::Handle>) -> PassReport<T::Handle> {
        let mut state = PlacementState::from(input);
        let mut style_mutations = 0usize;

        for &i in &self.order {
            let registration = &self.registrations[i];
            if !tree.is_connected(&state.elements.popper) {
                fdebug!(
                    next = registration.name(),
                    "popper detached; skipping the rest of the pass"
                );
                return PassReport {
                    state,
                    style_mutations,
                    completed: false,
                };
            }

            let delta = {
                let ctx = PassContext {
                    tree: &*tree,
                    state: &state,
                    name: registration.name(),
                };
                registration.modifier.run(&ctx)
            };
            ftrace!(
                modifier = registration.name(),
                phase = registration.phase().as_str(),
                "modifier ran"
            );
            style_mutations += merge(tree, &mut state, registration.name(), delta);
        }

        PassReport {
            state,
            style_mutations,
            completed: true,
        }
    }
}

impl<T: ElementTree> Clone for Pipeline<T> {
    fn clone(&self) -> Self {
        Self {
            registrations: self.registrations.clone(),
            order: self.order.clone(),
        }
    }
}

impl<T: ElementTree> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("order", &self.order().collect::<Vec<_>>())
            .finish()
    }
}

fn merge<T: ElementTree>(
    tree: &mut T,
    state: &mut PlacementState<T::Handle>,
    name: &str,
    delta: Delta<T::Handle>,
) -> usize {
    if let Some(placement) = delta.placement {
        if placement != state.placement {
            fdebug!(
                modifier = name,
                from = state.placement.as_str(),
                to = placement.as_str(),
                "placement changed"
            );
        }
        state.placement = placement;
    }
    if let Some(data) = delta.data {
        state.modifiers_data.insert(name, data);
    }
    delta
        .writes
        .into_iter()
        .filter(|w| apply_write(tree, w))
        .count()
}

/// Applies `write` unless the element already has that value. Returns whether anything changed.
fn apply_write<T: ElementTree>(tree: &mut T, write: &StyleWrite<T::Handle>) -> bool {
    let current = tree.style(&write.element, write.property);
    if current == write.value {
        return false;
    }
    match write.value {
        Some(value) => tree.set_style(&write.element, write.property, value),
        None => tree.remove_style(&write.element, write.property),
    }
    true
}

fn resolve_order<T: ElementTree>(
    registrations: &[Registration<T>],
) -> Result<Vec<usize>, PipelineError> {
    let mut by_name = BTreeMap::<&str, usize>::new();
    for (i, r) in registrations.iter().enumerate() {
        if by_name.insert(r.name(), i).is_some() {
            return Err(PipelineError::DuplicateName(r.name.clone()));
        }
    }

    // deps[i]: registrations that must run before i.
    let mut deps: Vec<Vec<usize>> = Vec::with_capacity(registrations.len());
    for r in registrations {
        let mut edges = Vec::new();
        for name in &r.requires {
            let Some(&j) = by_name.get(name.as_str()) else {
                return Err(PipelineError::MissingRequirement {
                    modifier: r.name.clone(),
                    requires: name.clone(),
                });
            };
            edges.push(j);
        }
        for name in &r.requires_if_exists {
            if let Some(&j) = by_name.get(name.as_str()) {
                edges.push(j);
            }
        }
        for &j in &edges {
            let required = &registrations[j];
            if required.phase > r.phase {
                return Err(PipelineError::PhaseInversion {
                    modifier: r.name.clone(),
                    phase: r.phase,
                    requires: required.name.clone(),
                    required_phase: required.phase,
                });
            }
        }
        deps.push(edges);
    }

    let mut order = Vec::with_capacity(registrations.len());
    let mut done = alloc::vec![false; registrations.len()];
    for phase in Phase::ALL {
        let mut pending: Vec<usize> = (0..registrations.len())
            .filter(|&i| registrations[i].phase == phase)
            .collect();
        // Kahn's algorithm; always take the earliest registered ready modifier.
        while !pending.is_empty() {
            let ready = pending
                .iter()
                .position(|&i| deps[i].iter().all(|&j| done[j]));
            let Some(pos) = ready else {
                let names = pending
                    .iter()
                    .map(|&i| registrations[i].name.clone())
                    .collect();
                return Err(PipelineError::Cycle(names));
            };
            let i = pending.remove(pos);
            done[i] = true;
            order.push(i);
        }
    }
    Ok(order)
}

/// Collects registrations, merging by name.
///
/// Registering a name twice replaces the earlier entry in place, which is how callers override
/// a default modifier (or its options) without reordering the list.
pub struct PipelineBuilder<T: ElementTree> {
    registrations: Vec<Registration<T>>,
}

impl<T: ElementTree> Default for PipelineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ElementTree> PipelineBuilder<T> {
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
        }
    }

    pub fn with(mut self, registration: Registration<T>) -> Self {
        self.push(registration);
        self
    }

    pub fn with_all(mut self, registrations: impl IntoIterator<Item = Registration<T>>) -> Self {
        for r in registrations {
            self.push(r);
        }
        self
    }

    pub fn push(&mut self, registration: Registration<T>) {
        match self
            .registrations
            .iter_mut()
            .find(|r| r.name == registration.name)
        {
            Some(existing) => *existing = registration,
            None => self.registrations.push(registration),
        }
    }

    /// Disables a registered modifier. Unknown names are ignored.
    pub fn disable(mut self, name: &str) -> Self {
        match self.registrations.iter_mut().find(|r| r.name == name) {
            Some(r) => r.enabled = false,
            None => {
                fwarn!(name, "PipelineBuilder::disable: no such modifier");
            }
        }
        self
    }

    pub fn build(self) -> Result<Pipeline<T>, PipelineError> {
        Pipeline::new(self.registrations)
    }
}
