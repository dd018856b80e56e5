//! # Theming and host locals
//!
//! Folio uses thread‑local “composition locals” for parameters that a whole
//! subtree shares:
//!
//! - `Theme` — the site palette.
//! - `Host` — the timer and visibility capabilities of the running host.
//!
//! Override them for a subtree with `with_theme` and `with_host`:
//!
//! ```rust
//! use folio_core::*;
//!
//! let night = Theme {
//!     background: Color::from_hex("#0F172A"),
//!     ..Theme::default()
//! };
//!
//! with_theme(night, || {
//!     // all views composed here will see the night palette
//! });
//! ```
//!
//! Widgets in `folio-ui` read from `theme()` and should avoid hard‑coding
//! colors where possible.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::Color;
use crate::timer::{ManualScheduler, Scheduler};
use crate::visibility::{AlwaysVisible, VisibilityObserver};

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = const { RefCell::new(Vec::new()) };
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        } else {
            // no frame: create a temporary one
            let mut m = HashMap::new();
            m.insert(t, v);
            st.borrow_mut().push(m);
        }
    });
}

fn local<T: Clone + Default + 'static>() -> T {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return t.clone();
            }
        }
        T::default()
    })
}

/// Site palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Page background.
    pub background: Color,
    /// Cards, dialogs, the scrolled header.
    pub surface: Color,
    /// Alternate section background.
    pub surface_variant: Color,
    /// Body text.
    pub on_surface: Color,
    /// Low-emphasis text.
    pub muted: Color,
    /// Headings, primary buttons.
    pub primary: Color,
    /// Footer, hovered primary.
    pub primary_dark: Color,
    pub primary_light: Color,
    /// Highlights, caret, brand second word.
    pub accent: Color,
    pub on_primary: Color,
    pub outline: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_hex("#F8FAFC"),
            surface: Color::WHITE,
            surface_variant: Color::from_hex("#F9FAFB"),
            on_surface: Color::from_hex("#1F2937"),
            muted: Color::from_hex("#6B7280"),
            primary: Color::from_hex("#1E40AF"),
            primary_dark: Color::from_hex("#1E3A8A"),
            primary_light: Color::from_hex("#3B82F6"),
            accent: Color::from_hex("#0EA5E9"),
            on_primary: Color::WHITE,
            outline: Color::from_hex("#E5E7EB"),
            error: Color::from_hex("#DC2626"),
        }
    }
}

/// Capabilities of the running host.
#[derive(Clone)]
pub struct Host {
    pub scheduler: Rc<dyn Scheduler>,
    pub observer: Rc<dyn VisibilityObserver>,
}

impl Host {
    pub fn new(scheduler: Rc<dyn Scheduler>, observer: Rc<dyn VisibilityObserver>) -> Self {
        Self {
            scheduler,
            observer,
        }
    }
}

impl Default for Host {
    /// An inert host: timers only fire when advanced by hand and every
    /// element counts as visible.
    fn default() -> Self {
        Self {
            scheduler: Rc::new(ManualScheduler::new()),
            observer: Rc::new(AlwaysVisible),
        }
    }
}

// Provide helpers (push a new frame, set the local, run closure, pop frame)

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<Theme>(), Box::new(theme));
        f()
    })
}

pub fn with_host<R>(host: Host, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<Host>(), Box::new(host));
        f()
    })
}

// Getters with defaults if not set

pub fn theme() -> Theme {
    local::<Theme>()
}

pub fn host() -> Host {
    local::<Host>()
}
