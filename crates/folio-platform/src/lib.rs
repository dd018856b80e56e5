//! Hosts for Folio pages.
//!
//! - [`html`] and [`style`] turn a composed view tree into markup; the
//!   static export uses them directly.
//! - [`relay`] is the outbound HTTP form submission.
//! - [`registry`] is the host-independent table behind the browser's
//!   visibility observer.
//! - `web` (wasm32 only) runs a page in the browser: it composes on
//!   demand, patches the DOM, and provides `setTimeout` timers and
//!   `IntersectionObserver` visibility as the page's [`Host`](folio_core::Host).

pub mod html;
pub mod registry;
pub mod relay;
pub mod style;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use relay::{FormRelay, HttpRelay, RelayError};

use folio_core::*;

/// Composes `root` once on an inert host (virtual timers, everything
/// visible) and returns the full HTML document.
pub fn export_static(title: &str, extra_css: &str, root: impl FnOnce() -> View) -> String {
    let host = Host::new(
        std::rc::Rc::new(ManualScheduler::new()),
        std::rc::Rc::new(AlwaysVisible),
    );
    let view = with_host(host, || compose(root));
    log::info!("exported page with {} nodes", count_nodes(&view));
    html::document(title, extra_css, &view)
}

fn count_nodes(v: &View) -> usize {
    1 + v.children.iter().map(count_nodes).sum::<usize>()
}
