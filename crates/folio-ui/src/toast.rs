//! Transient notifications.
//!
//! A [`Toaster`] shows at most one toast at a time. Showing a new toast
//! replaces the current one; each toast dismisses itself after the
//! configured timeout unless dismissed by hand first.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use folio_core::*;

use crate::{Box, Button, Column, Row, Text, TextStyle, ViewExt};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: ToastKind::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Destructive,
            ..Self::info(title, description)
        }
    }
}

pub struct Toaster {
    current: Signal<Option<Toast>>,
    timeout: Duration,
    scheduler: Rc<dyn Scheduler>,
    pending: Cell<Option<TimerHandle>>,
    shown: Cell<usize>,
}

impl Toaster {
    pub fn new(scheduler: Rc<dyn Scheduler>, timeout: Duration) -> Rc<Self> {
        Rc::new(Self {
            current: signal(None),
            timeout,
            scheduler,
            pending: Cell::new(None),
            shown: Cell::new(0),
        })
    }

    pub fn show(self: &Rc<Self>, toast: Toast) {
        log::debug!("toast: {} ({:?})", toast.title, toast.kind);
        self.cancel_pending();
        let this = Rc::downgrade(self);
        let handle = self.scheduler.schedule(
            self.timeout,
            Box::new(move || {
                if let Some(t) = this.upgrade() {
                    t.pending.set(None);
                    t.current.set(None);
                }
            }),
        );
        self.pending.set(Some(handle));
        self.shown.set(self.shown.get() + 1);
        self.current.set(Some(toast));
    }

    pub fn dismiss(&self) {
        self.cancel_pending();
        if self.current.with(Option::is_some) {
            self.current.set(None);
        }
    }

    pub fn current(&self) -> Option<Toast> {
        self.current.get()
    }

    /// Toasts shown since creation.
    pub fn shown_count(&self) -> usize {
        self.shown.get()
    }

    fn cancel_pending(&self) {
        if let Some(h) = self.pending.take() {
            self.scheduler.cancel(h);
        }
    }
}

impl Drop for Toaster {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// The page's toaster, created on first use with the host's scheduler.
pub fn remember_toaster(key: &str, timeout: Duration) -> Rc<Toaster> {
    let slot = remember_with_key(format!("toaster-{key}"), || {
        Toaster::new(host().scheduler, timeout)
    });
    (*slot).clone()
}

/// Fixed bottom-right viewport for the current toast.
pub fn ToastHost(toaster: &Rc<Toaster>) -> View {
    let viewport = Modifier::new()
        .fixed()
        .offset(None, None, Some(16.0), Some(16.0))
        .z_index(100)
        .max_width(420.0)
        .semantics(Semantics::new(Role::Status));

    let Some(toast) = toaster.current() else {
        return Box(viewport);
    };

    let th = theme();
    let (bg, fg) = match toast.kind {
        ToastKind::Info => (th.surface, th.on_surface),
        ToastKind::Destructive => (th.error, th.on_primary),
    };
    let t = toaster.clone();
    Box(viewport).child(
        Row(Modifier::new()
            .background(bg)
            .border(1.0, th.outline, 8.0)
            .shadow(4.0)
            .padding(16.0)
            .gap(12.0)
            .justify_content(JustifyContent::SpaceBetween))
        .child((
            Column(Modifier::new().gap(4.0)).child((
                Text(toast.title).color(fg).weight(FontWeight::SemiBold),
                Text(toast.description).color(fg).size(14.0),
            )),
            Button("×", move || t.dismiss()).label("Close"),
        )),
    )
}
