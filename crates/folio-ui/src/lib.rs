#![allow(non_snake_case)]
//! Widgets, layout and the page's timing components.

pub mod reveal;
pub mod toast;
pub mod typewriter;

use std::rc::Rc;

use folio_core::*;

pub use reveal::{Direction, Reveal, RevealOnVisibility, RevealSpec, RevealState, RevealStyle};
pub use toast::{Toast, ToastHost, ToastKind, Toaster, remember_toaster};
pub use typewriter::{
    Mode, Phrases, Typewriter, TypewriterCycler, TypewriterSpeeds, TypewriterState,
};

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: None,
            font_size: 16.0,
            weight: FontWeight::Regular,
            family: FontFamily::Sans,
            role: TextRole::Inline,
        },
    )
}

pub fn Grid(
    columns: usize,
    modifier: Modifier,
    children: Vec<View>,
    row_gap: f32,
    column_gap: f32,
) -> View {
    Column(modifier.grid(columns, row_gap, column_gap)).with_children(children)
}

/// Grid that fits as many `min_width` columns as the container allows.
pub fn AutoGrid(min_width: f32, gap: f32, modifier: Modifier, children: Vec<View>) -> View {
    Column(modifier.grid_auto(min_width, gap)).with_children(children)
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    View::new(
        0,
        ViewKind::Button {
            text: text.into(),
            on_click: Some(Rc::new(on_click)),
            enabled: true,
        },
    )
    .semantics(Semantics::new(Role::Button))
}

/// Navigation to `href`. Same-page anchors (`#about`) scroll in place.
pub fn Link(text: impl Into<String>, href: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Link {
            text: text.into(),
            href: href.into(),
            new_tab: false,
            on_click: None,
        },
    )
    .semantics(Semantics::new(Role::Link))
}

pub fn TextField(
    value: impl Into<String>,
    hint: impl Into<String>,
    on_change: impl Fn(String) + 'static,
) -> View {
    View::new(
        0,
        ViewKind::TextField {
            value: value.into(),
            hint: hint.into(),
            multiline: false,
            on_change: Some(Rc::new(on_change)),
        },
    )
    .semantics(Semantics::new(Role::TextField))
}

pub fn TextArea(
    value: impl Into<String>,
    hint: impl Into<String>,
    on_change: impl Fn(String) + 'static,
) -> View {
    let mut v = TextField(value, hint, on_change);
    if let ViewKind::TextField { multiline, .. } = &mut v.kind {
        *multiline = true;
    }
    v
}

pub fn ProgressBar(value: f32, range: (f32, f32), label: impl Into<String>) -> View {
    let label = label.into();
    View::new(
        0,
        ViewKind::ProgressBar {
            value: value.clamp(range.0, range.1),
            min: range.0,
            max: range.1,
            label: label.clone(),
        },
    )
    .semantics(Semantics::new(Role::ProgressBar).label(label))
}

pub fn Image(src: impl Into<String>, alt: impl Into<String>, modifier: Modifier) -> View {
    View::new(
        0,
        ViewKind::Image {
            src: src.into(),
            alt: alt.into(),
        },
    )
    .modifier(modifier)
}

/// Embedded external page.
pub fn Frame(src: impl Into<String>, title: impl Into<String>, modifier: Modifier) -> View {
    View::new(
        0,
        ViewKind::Frame {
            src: src.into(),
            title: title.into(),
        },
    )
    .modifier(modifier)
}

pub fn Caret(color: Color) -> View {
    View::new(
        0,
        ViewKind::Caret {
            color,
            font_size: 16.0,
        },
    )
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
    fn enabled(self, enabled: bool) -> Self;
    fn label(self, label: impl Into<String>) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }

    fn enabled(mut self, on: bool) -> Self {
        if let ViewKind::Button { enabled, .. } = &mut self.kind {
            *enabled = on;
        }
        if let Some(s) = self.semantics.as_mut() {
            s.enabled = on;
        }
        self
    }

    /// Accessible name, for views whose visible text is a glyph.
    fn label(mut self, label: impl Into<String>) -> Self {
        let role = self
            .semantics
            .as_ref()
            .map(|s| s.role)
            .unwrap_or(Role::Container);
        let enabled = self.semantics.as_ref().is_none_or(|s| s.enabled);
        let mut s = Semantics::new(role).label(label);
        s.enabled = enabled;
        self.semantics = Some(s);
        self
    }
}

pub trait LinkExt {
    fn new_tab(self) -> View;
    fn on_click(self, f: impl Fn() + 'static) -> View;
}

impl LinkExt for View {
    fn new_tab(mut self) -> View {
        if let ViewKind::Link { new_tab, .. } = &mut self.kind {
            *new_tab = true;
        }
        self
    }
    fn on_click(mut self, f: impl Fn() + 'static) -> View {
        if let ViewKind::Link { on_click, .. } = &mut self.kind {
            *on_click = Some(Rc::new(f));
        }
        self
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

// Tuple implementations
macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I);

/// Method styling
pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, px: f32) -> View;
    fn weight(self, w: FontWeight) -> View;
    fn bold(self) -> View;
    fn mono(self) -> View;
    fn paragraph(self) -> View;
    fn heading(self, level: u8) -> View;
    fn code(self) -> View;
}

impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text {
            color: text_color, ..
        } = &mut self.kind
        {
            *text_color = Some(c);
        }
        self
    }
    fn size(mut self, px: f32) -> View {
        match &mut self.kind {
            ViewKind::Text { font_size, .. } | ViewKind::Caret { font_size, .. } => {
                *font_size = px;
            }
            _ => {}
        }
        self
    }
    fn weight(mut self, w: FontWeight) -> View {
        if let ViewKind::Text { weight, .. } = &mut self.kind {
            *weight = w;
        }
        self
    }
    fn bold(self) -> View {
        self.weight(FontWeight::Bold)
    }
    fn mono(mut self) -> View {
        if let ViewKind::Text { family, .. } = &mut self.kind {
            *family = FontFamily::Mono;
        }
        self
    }
    fn paragraph(mut self) -> View {
        if let ViewKind::Text { role, .. } = &mut self.kind {
            *role = TextRole::Paragraph;
        }
        self
    }
    fn heading(mut self, level: u8) -> View {
        if let ViewKind::Text { role, .. } = &mut self.kind {
            *role = TextRole::Heading(level.clamp(1, 6));
        }
        self
    }
    fn code(mut self) -> View {
        if let ViewKind::Text { role, family, .. } = &mut self.kind {
            *role = TextRole::Code;
            *family = FontFamily::Mono;
        }
        self
    }
}
