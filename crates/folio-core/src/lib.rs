//! # State, Signals, and Lifetimes
//!
//! Folio uses a small reactive core instead of a retained widget tree with
//! mutable fields. The whole page is re-composed from a root function each
//! frame; state lives outside the tree:
//!
//! - `Signal<T>` — observable value; every write invalidates the composition.
//! - `remember*` — storage bound to the composition.
//! - `scoped_effect` — side‑effects whose cleanup runs when their slot goes away.
//!
//! ## Signals
//!
//! ```rust
//! use folio_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Remembered state and unmounting
//!
//! - `remember` is order‑based: the Nth call in a frame always refers to the
//!   Nth stored value.
//! - `remember_with_key` is key‑based and is the unit of lifetime: a keyed
//!   slot that is not requested during a frame is *swept* when the frame
//!   ends. Its value is dropped and its `Scope` disposed.
//!
//! ```rust
//! use folio_core::*;
//!
//! fn panel(show: bool) -> View {
//!     if show {
//!         remember_with_key("panel", || {
//!             scoped_effect(|| {
//!                 log::info!("panel mounted");
//!                 on_unmount(|| log::info!("panel removed"))
//!             });
//!         });
//!     }
//!     View::new(0, ViewKind::Box)
//! }
//!
//! compose(|| panel(true));
//! compose(|| panel(false)); // "panel removed"
//! ```
//!
//! Components that own host resources (timers, visibility registrations)
//! keep them in a keyed slot and release them in `Drop`, so removal from the
//! page is enough to stop all of their work.
//!
//! ## Host capabilities
//!
//! Timers ([`timer::Scheduler`]) and viewport visibility
//! ([`visibility::VisibilityObserver`]) come from the running host through
//! the `host()` local. Both have deterministic implementations
//! (`ManualScheduler`, `ManualObserver`) for tests and static rendering.

pub mod animation;
pub mod color;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod semantics;
pub mod signal;
pub mod tests;
pub mod timer;
pub mod view;
pub mod visibility;

pub use animation::*;
pub use color::*;
pub use effects::*;
pub use error::*;
pub use geometry::*;
pub use locals::*;
pub use modifier::*;
pub use prelude::*;
pub use runtime::*;
pub use semantics::*;
pub use signal::*;
pub use view::*;
