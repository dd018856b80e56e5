//! # Viewport visibility
//!
//! Hosts report how much of an element overlaps the viewport as a ratio in
//! `[0, 1]`. Elements are addressed by the `node_key` a view carries in its
//! `Modifier`, so registration can happen during composition, before the
//! host has materialized anything.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::ObserveError;

pub type IntersectionCallback = Rc<dyn Fn(f32)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObservationHandle(pub u64);

pub trait VisibilityObserver {
    /// Watches the element keyed `target`; `on_change` receives the
    /// intersection ratio whenever it crosses `threshold`.
    fn observe(
        &self,
        target: &str,
        threshold: f32,
        on_change: IntersectionCallback,
    ) -> Result<ObservationHandle, ObserveError>;

    /// Releases a registration. Unknown handles are ignored.
    fn unobserve(&self, handle: ObservationHandle);
}

/// Observer for hosts without intersection support: every `observe` fails
/// with [`ObserveError::Unsupported`] and callers fall back to showing
/// content.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysVisible;

impl VisibilityObserver for AlwaysVisible {
    fn observe(
        &self,
        _target: &str,
        _threshold: f32,
        _on_change: IntersectionCallback,
    ) -> Result<ObservationHandle, ObserveError> {
        Err(ObserveError::Unsupported)
    }

    fn unobserve(&self, _handle: ObservationHandle) {}
}

struct Registration {
    target: String,
    threshold: f32,
    on_change: IntersectionCallback,
}

/// Observer driven by hand; events are delivered with [`ManualObserver::emit`].
#[derive(Default)]
pub struct ManualObserver {
    next_id: RefCell<u64>,
    registrations: RefCell<BTreeMap<u64, Registration>>,
    delivered: RefCell<usize>,
}

impl ManualObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `ratio` to every live registration on `target`. Returns the
    /// number of callbacks invoked.
    pub fn emit(&self, target: &str, ratio: f32) -> usize {
        let callbacks: Vec<IntersectionCallback> = self
            .registrations
            .borrow()
            .values()
            .filter(|r| r.target == target)
            .map(|r| r.on_change.clone())
            .collect();
        // Callbacks may unobserve; no borrow is held while they run.
        for cb in &callbacks {
            cb(ratio);
        }
        *self.delivered.borrow_mut() += callbacks.len();
        callbacks.len()
    }

    /// Delivers `ratio` to every live registration.
    pub fn emit_all(&self, ratio: f32) -> usize {
        let targets: Vec<String> = self
            .registrations
            .borrow()
            .values()
            .map(|r| r.target.clone())
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .collect();
        targets.iter().map(|t| self.emit(t, ratio)).sum()
    }

    pub fn is_observing(&self, target: &str) -> bool {
        self.registrations
            .borrow()
            .values()
            .any(|r| r.target == target)
    }

    pub fn threshold_of(&self, target: &str) -> Option<f32> {
        self.registrations
            .borrow()
            .values()
            .find(|r| r.target == target)
            .map(|r| r.threshold)
    }

    pub fn registration_count(&self) -> usize {
        self.registrations.borrow().len()
    }

    /// Total callbacks delivered since creation.
    pub fn delivered(&self) -> usize {
        *self.delivered.borrow()
    }
}

impl VisibilityObserver for ManualObserver {
    fn observe(
        &self,
        target: &str,
        threshold: f32,
        on_change: IntersectionCallback,
    ) -> Result<ObservationHandle, ObserveError> {
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        self.registrations.borrow_mut().insert(
            id,
            Registration {
                target: target.to_string(),
                threshold,
                on_change,
            },
        );
        Ok(ObservationHandle(id))
    }

    fn unobserve(&self, handle: ObservationHandle) {
        self.registrations.borrow_mut().remove(&handle.0);
    }
}
