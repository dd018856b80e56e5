//! Fixed navigation bar.
//!
//! The bar turns solid once the page scrolls: a thin sentinel sits at the
//! very top of the page and the header watches it through the host's
//! visibility observer. When the sentinel leaves the viewport the page has
//! scrolled.

use std::cell::Cell;
use std::rc::Rc;

use folio_core::*;
use folio_ui::*;

use crate::content::{NavItem, Profile};
use crate::ui::GUTTER;

pub const SENTINEL_KEY: &str = "top-sentinel";

/// Invisible marker over the first 10px of the page.
pub fn TopSentinel() -> View {
    Box(Modifier::new()
        .absolute()
        .offset(Some(0.0), Some(0.0), None, None)
        .size(1.0, 10.0)
        .node_key(SENTINEL_KEY))
}

/// Continuous registration on the sentinel; released on drop.
pub struct ScrollWatch {
    scrolled: Signal<bool>,
    observer: Rc<dyn VisibilityObserver>,
    handle: Cell<Option<ObservationHandle>>,
}

impl ScrollWatch {
    pub fn mount(target: &str, observer: Rc<dyn VisibilityObserver>) -> Self {
        let scrolled = signal(false);
        let on_change: IntersectionCallback = {
            let scrolled = scrolled.clone();
            Rc::new(move |ratio: f32| {
                let now = ratio <= 0.0;
                if scrolled.get() != now {
                    scrolled.set(now);
                }
            })
        };
        let handle = match observer.observe(target, 0.0, on_change) {
            Ok(h) => Some(h),
            Err(e) => {
                log::debug!("header stays transparent: {e}");
                None
            }
        };
        Self {
            scrolled,
            observer,
            handle: Cell::new(handle),
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled.get()
    }

    pub fn is_watching(&self) -> bool {
        self.handle.get().is_some()
    }
}

impl Drop for ScrollWatch {
    fn drop(&mut self) {
        if let Some(h) = self.handle.take() {
            self.observer.unobserve(h);
        }
    }
}

/// First name in `color`, last name in the accent colour.
pub fn Brand(profile: &Profile, color: Color) -> View {
    let th = theme();
    Link("", "#home")
        .modifier(Modifier::new().content_color(color))
        .child((
            Text(format!("{} ", profile.first_name)).size(20.0).bold(),
            Text(&profile.last_name).size(20.0).bold().color(th.accent),
        ))
}

pub fn Header(profile: &Profile, nav: &[NavItem]) -> View {
    let th = theme();
    let watch = remember_with_key("header-scroll", || {
        ScrollWatch::mount(SENTINEL_KEY, host().observer)
    });
    let open = remember_with_key("header-menu", || signal(false));
    let scrolled = watch.is_scrolled();

    let mut bar = Modifier::new()
        .fixed()
        .offset(Some(0.0), Some(0.0), Some(0.0), None)
        .z_index(50)
        .node_key("site-header")
        .semantics(Semantics::new(Role::Navigation).label("Main"));
    bar = if scrolled {
        bar.background(th.surface).shadow(4.0).padding_xy(8.0, 0.0)
    } else {
        bar.background(Color::TRANSPARENT).padding_xy(16.0, 0.0)
    };

    let desktop = Row(Modifier::new()
        .gap(24.0)
        .align_items(AlignItems::Center)
        .node_key("nav-desktop"))
    .with_children(
        nav.iter()
            .map(|item| {
                Link(&item.label, &item.href)
                    .modifier(Modifier::new().content_color(th.on_surface))
            })
            .collect(),
    );

    let is_open = open.get();
    let toggle = Button(if is_open { "✕" } else { "☰" }, {
        let open = open.clone();
        move || open.update(|o| *o = !*o)
    })
    .label(if is_open { "Close menu" } else { "Open menu" })
    .modifier(Modifier::new().node_key("nav-toggle").content_color(th.on_surface));

    let mobile = is_open.then(|| {
        Column(
            Modifier::new()
                .absolute()
                .offset(Some(0.0), None, Some(0.0), None)
                .background(th.surface)
                .shadow(8.0)
                .padding_xy(16.0, GUTTER)
                .gap(16.0)
                .node_key("nav-mobile"),
        )
        .with_children(
            nav.iter()
                .map(|item| {
                    let open = open.clone();
                    Link(&item.label, &item.href).on_click(move || open.set(false))
                })
                .collect(),
        )
    });

    Column(bar).child((
        Row(Modifier::new()
            .fill_max_width()
            .max_width(1200.0)
            .center_horizontally()
            .padding_xy(0.0, GUTTER)
            .justify_content(JustifyContent::SpaceBetween)
            .align_items(AlignItems::Center))
        .child((Brand(profile, th.primary), toggle, desktop)),
        mobile,
    ))
}
