use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::View;
use crate::scope::Scope;

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
    static INVALIDATED: Cell<bool> = const { Cell::new(false) };
    static INVALIDATOR: RefCell<Option<Rc<dyn Fn()>>> = const { RefCell::new(None) };
}

#[derive(Default)]
pub struct Composer {
    pub slots: Vec<Box<dyn Any>>,
    pub cursor: usize,
    pub keyed_slots: HashMap<String, KeyedSlot>,
    pub frame: u64,
    pub composing: bool,
}

/// A key-based slot. Slots not touched during a frame are swept at the end
/// of it: the value is dropped and the slot scope disposed.
pub struct KeyedSlot {
    value: Box<dyn Any>,
    scope: Scope,
    last_frame: u64,
}

pub struct ComposeGuard {
    _private: (),
}

impl ComposeGuard {
    pub fn begin() -> Self {
        COMPOSER.with(|c| {
            let mut c = c.borrow_mut();
            c.cursor = 0;
            c.frame += 1;
            c.composing = true;
        });
        INVALIDATED.with(|i| i.set(false));
        ComposeGuard { _private: () }
    }
}

impl Drop for ComposeGuard {
    fn drop(&mut self) {
        let stale: Vec<KeyedSlot> = COMPOSER.with(|c| {
            let mut c = c.borrow_mut();
            c.composing = false;
            let frame = c.frame;
            let keys: Vec<String> = c
                .keyed_slots
                .iter()
                .filter(|(_, s)| s.last_frame != frame)
                .map(|(k, _)| k.clone())
                .collect();
            keys.into_iter()
                .filter_map(|k| {
                    log::trace!("sweeping slot '{k}'");
                    c.keyed_slots.remove(&k)
                })
                .collect()
        });
        // Cleanups may touch the composer again; run them after the borrow.
        for slot in stale {
            slot.scope.dispose();
            drop(slot.value);
        }
    }
}

/// Composes one frame: builds the tree, sweeps unused keyed slots and
/// stamps stable pre-order ids.
pub fn compose(build_root: impl FnOnce() -> View) -> View {
    let root = {
        let _guard = ComposeGuard::begin();
        build_root()
    };
    stamp_ids(root)
}

fn stamp_ids(root: View) -> View {
    fn stamp(mut v: View, id: &mut u64) -> View {
        v.id = *id;
        *id += 1;
        v.children = v.children.into_iter().map(|c| stamp(c, id)).collect();
        v
    }
    let mut id = 1u64;
    stamp(root, &mut id)
}

/// Slot-based remember (sequential composition only)
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let cursor = c.cursor;
        c.cursor += 1;

        if cursor >= c.slots.len() {
            let rc: Rc<T> = Rc::new(init());
            c.slots.push(Box::new(rc.clone()));
            return rc;
        }

        if let Some(rc) = c.slots[cursor].downcast_ref::<Rc<T>>() {
            rc.clone()
        } else {
            // replace (else panics)
            log::warn!(
                "remember: slot {} type changed; replacing. \
                 If this is due to conditional composition, prefer remember_with_key.",
                cursor
            );
            let rc: Rc<T> = Rc::new(init());
            c.slots[cursor] = Box::new(rc.clone());
            rc
        }
    })
}

/// Key-based remember. `init` runs inside the slot's own scope, so
/// `scoped_effect` cleanups registered there run when the slot is swept.
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    let key = key.into();

    let existing = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let frame = c.frame;
        let slot = c.keyed_slots.get_mut(&key)?;
        match slot.value.downcast_ref::<Rc<T>>() {
            Some(rc) => {
                slot.last_frame = frame;
                Some(rc.clone())
            }
            None => {
                log::warn!(
                    "remember_with_key: key '{}' reused with a different type; replacing.",
                    key
                );
                None
            }
        }
    });
    if let Some(rc) = existing {
        return rc;
    }

    // The initializer may itself remember or read signals; no borrow is held.
    let scope = Scope::new();
    let rc: Rc<T> = Rc::new(scope.run(init));
    let replaced = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let last_frame = c.frame;
        c.keyed_slots.insert(
            key,
            KeyedSlot {
                value: Box::new(rc.clone()),
                scope,
                last_frame,
            },
        )
    });
    if let Some(old) = replaced {
        old.scope.dispose();
    }
    rc
}

/// Number of live keyed slots.
pub fn keyed_slot_count() -> usize {
    COMPOSER.with(|c| c.borrow().keyed_slots.len())
}

/// Drops every slot. Hosts call this when tearing the whole page down.
pub fn reset_composition() {
    let (slots, keyed): (Vec<Box<dyn Any>>, Vec<KeyedSlot>) = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        c.cursor = 0;
        (
            std::mem::take(&mut c.slots),
            c.keyed_slots.drain().map(|(_, s)| s).collect(),
        )
    });
    for slot in keyed {
        slot.scope.dispose();
    }
    drop(slots);
}

/// Marks the composition stale. Called by every signal write.
pub fn invalidate() {
    INVALIDATED.with(|i| i.set(true));
    let composing = COMPOSER.with(|c| c.try_borrow().map(|c| c.composing).unwrap_or(true));
    if composing {
        return;
    }
    let hook = INVALIDATOR.with(|h| h.borrow().clone());
    if let Some(hook) = hook {
        hook();
    }
}

/// Returns whether a signal was written since the last frame began, and clears the flag.
pub fn take_invalidated() -> bool {
    INVALIDATED.with(|i| i.replace(false))
}

/// Installs the host callback that requests a new frame after invalidation.
pub fn set_invalidator(hook: impl Fn() + 'static) {
    INVALIDATOR.with(|h| *h.borrow_mut() = Some(Rc::new(hook)));
}

pub fn clear_invalidator() {
    INVALIDATOR.with(|h| *h.borrow_mut() = None);
}
