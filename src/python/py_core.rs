//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Action, EntityId, PlayerId, TemplateId};

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    #[new]
    fn new(id: u8) -> Self {
        Self(PlayerId::new(id))
    }

    /// Seat index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    #[getter]
    fn id(&self) -> u8 {
        self.0 .0
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0 .0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 .0 as u64
    }
}

/// Python wrapper for Action.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    /// Build an action from a template id and card ids.
    #[new]
    #[pyo3(signature = (template_id, cards = Vec::new()))]
    fn new(template_id: u16, cards: Vec<u32>) -> Self {
        let pointers: Vec<EntityId> = cards.into_iter().map(EntityId::new).collect();
        Self(Action::with_pointers(TemplateId::new(template_id), &pointers))
    }

    #[getter]
    fn template_id(&self) -> u16 {
        self.0.template.0
    }

    /// Card ids this action points at.
    #[getter]
    fn cards(&self) -> Vec<u32> {
        self.0.pointers.iter().map(|p| p.raw()).collect()
    }

    fn pointer_count(&self) -> usize {
        self.0.pointer_count()
    }

    fn __repr__(&self) -> String {
        format!("Action(template={}, cards={:?})", self.0.template.0, self.cards())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::hash::{Hash, Hasher};
        let mut hasher = rustc_hash::FxHasher::default();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
