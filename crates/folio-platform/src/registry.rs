//! Bookkeeping behind the browser's visibility observer.
//!
//! The DOM side owns one `IntersectionObserver` per threshold; this table
//! decides which registrations an entry is delivered to and whether an
//! element can stop being observed. It knows nothing about the DOM, so the
//! element type is a parameter.

use std::collections::BTreeMap;

use folio_core::{IntersectionCallback, ObservationHandle};

struct Entry<E> {
    target: String,
    threshold: f32,
    on_change: IntersectionCallback,
    element: Option<E>,
}

/// An element that no registration watches at `threshold` any more.
#[derive(Debug, PartialEq)]
pub struct Released<E> {
    pub element: E,
    pub threshold: f32,
}

pub struct ObserverRegistry<E> {
    next_id: u64,
    entries: BTreeMap<u64, Entry<E>>,
}

impl<E> Default for ObserverRegistry<E> {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: BTreeMap::new(),
        }
    }
}

impl<E> ObserverRegistry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        target: &str,
        threshold: f32,
        on_change: IntersectionCallback,
    ) -> ObservationHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(
            id,
            Entry {
                target: target.to_string(),
                threshold,
                on_change,
                element: None,
            },
        );
        ObservationHandle(id)
    }

    /// Drops a registration. Returns its element when nothing else still
    /// watches that target at the same threshold.
    pub fn remove(&mut self, handle: ObservationHandle) -> Option<Released<E>> {
        let entry = self.entries.remove(&handle.0)?;
        let element = entry.element?;
        let shared = self
            .entries
            .values()
            .any(|e| e.target == entry.target && e.threshold == entry.threshold);
        (!shared).then_some(Released {
            element,
            threshold: entry.threshold,
        })
    }

    /// Callbacks for an entry on `target` from the observer at `threshold`.
    pub fn callbacks_for(&self, target: &str, threshold: f32) -> Vec<IntersectionCallback> {
        self.entries
            .values()
            .filter(|e| e.target == target && e.threshold == threshold)
            .map(|e| e.on_change.clone())
            .collect()
    }

    /// Registrations whose element is missing or no longer `attached`, as
    /// `(handle, target, threshold)`.
    pub fn unattached(&self, attached: impl Fn(&E) -> bool) -> Vec<(ObservationHandle, String, f32)> {
        self.entries
            .iter()
            .filter(|(_, e)| !e.element.as_ref().is_some_and(&attached))
            .map(|(id, e)| (ObservationHandle(*id), e.target.clone(), e.threshold))
            .collect()
    }

    pub fn attach(&mut self, handle: ObservationHandle, element: E) {
        if let Some(e) = self.entries.get_mut(&handle.0) {
            e.element = Some(element);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ratio handed to callbacks. A target that touches the viewport edge is
/// intersecting with a zero ratio; it is nudged above zero so it still
/// counts for a zero threshold.
pub fn effective_ratio(ratio: f64, intersecting: bool) -> f32 {
    let ratio = ratio as f32;
    if intersecting {
        ratio.max(f32::MIN_POSITIVE)
    } else {
        ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use folio_core::*;
    use folio_ui::*;

    fn recorder() -> (Rc<RefCell<Vec<f32>>>, IntersectionCallback) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let cb: IntersectionCallback = {
            let seen = seen.clone();
            Rc::new(move |r: f32| seen.borrow_mut().push(r))
        };
        (seen, cb)
    }

    #[test]
    fn shared_target_stays_observed_until_last_release() {
        let mut reg = ObserverRegistry::new();
        let (_, a) = recorder();
        let (_, b) = recorder();
        let first = reg.insert("reveal-about", 0.1, a);
        let second = reg.insert("reveal-about", 0.1, b);
        for (h, ..) in reg.unattached(|_: &&str| true) {
            reg.attach(h, "div#about");
        }

        assert_eq!(reg.remove(first), None);
        assert_eq!(reg.callbacks_for("reveal-about", 0.1).len(), 1);
        assert_eq!(
            reg.remove(second),
            Some(Released {
                element: "div#about",
                threshold: 0.1
            })
        );
        assert!(reg.is_empty());
    }

    #[test]
    fn delivery_matches_target_and_threshold() {
        let mut reg: ObserverRegistry<()> = ObserverRegistry::new();
        let (_, a) = recorder();
        let (_, b) = recorder();
        let (_, c) = recorder();
        reg.insert("top-sentinel", 0.0, a);
        reg.insert("reveal-hero", 0.1, b);
        reg.insert("reveal-hero", 0.5, c);

        assert_eq!(reg.callbacks_for("reveal-hero", 0.1).len(), 1);
        assert_eq!(reg.callbacks_for("reveal-hero", 0.5).len(), 1);
        assert!(reg.callbacks_for("reveal-hero", 0.0).is_empty());
        assert_eq!(reg.callbacks_for("top-sentinel", 0.0).len(), 1);
    }

    #[test]
    fn unattached_lists_detached_elements_again() {
        let mut reg = ObserverRegistry::new();
        let (_, a) = recorder();
        let h = reg.insert("reveal-skills", 0.1, a);
        assert_eq!(reg.unattached(|_: &bool| true).len(), 1);
        reg.attach(h, true);
        assert!(reg.unattached(|connected: &bool| *connected).is_empty());
        reg.attach(h, false);
        assert_eq!(reg.unattached(|connected: &bool| *connected)[0].1, "reveal-skills");
    }

    #[test]
    fn edge_contact_counts_as_overlap() {
        assert!(effective_ratio(0.0, true) > 0.0);
        assert_eq!(effective_ratio(0.0, false), 0.0);
        assert_eq!(effective_ratio(0.25, true), 0.25);
    }

    /// Shares one registry between a reveal and the entries a browser
    /// would deliver.
    struct TableHost(RefCell<ObserverRegistry<()>>);

    impl VisibilityObserver for TableHost {
        fn observe(
            &self,
            target: &str,
            threshold: f32,
            on_change: IntersectionCallback,
        ) -> Result<ObservationHandle, ObserveError> {
            Ok(self.0.borrow_mut().insert(target, threshold, on_change))
        }

        fn unobserve(&self, handle: ObservationHandle) {
            self.0.borrow_mut().remove(handle);
        }
    }

    #[test]
    fn swept_reveal_receives_nothing_more() {
        reset_composition();
        let table = Rc::new(TableHost(RefCell::new(ObserverRegistry::new())));
        let host = Host::new(Rc::new(ManualScheduler::new()), table.clone());
        let frame = |show: bool| {
            with_host(host.clone(), || {
                compose(|| {
                    let kids = if show {
                        vec![RevealOnVisibility("about", RevealSpec::default(), Text("About"))]
                    } else {
                        vec![]
                    };
                    Column(Modifier::new()).with_children(kids)
                })
            })
        };

        frame(true);
        assert_eq!(table.0.borrow().callbacks_for("reveal-about", 0.1).len(), 1);
        frame(false);
        assert!(table.0.borrow().callbacks_for("reveal-about", 0.1).is_empty());
        assert!(table.0.borrow().is_empty());
    }
}
