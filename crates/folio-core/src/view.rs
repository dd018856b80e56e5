use crate::{Color, Modifier};
use std::rc::Rc;

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;
pub type TextCallback = Rc<dyn Fn(String)>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    SemiBold,
    Bold,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontFamily {
    #[default]
    Sans,
    Mono,
}

/// Structural role of a text run; renderers map it to a heading or
/// paragraph element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextRole {
    #[default]
    Inline,
    Paragraph,
    Heading(u8),
    Code,
}

#[derive(Clone)]
pub enum ViewKind {
    Box,
    Row,
    Column,
    Text {
        text: String,
        color: Option<Color>,
        font_size: f32,
        weight: FontWeight,
        family: FontFamily,
        role: TextRole,
    },
    Button {
        text: String,
        on_click: Option<Callback>,
        enabled: bool,
    },
    Link {
        text: String,
        href: String,
        new_tab: bool,
        on_click: Option<Callback>,
    },
    TextField {
        value: String,
        hint: String,
        multiline: bool,
        on_change: Option<TextCallback>,
    },
    ProgressBar {
        value: f32,
        min: f32,
        max: f32,
        label: String,
    },
    Image {
        src: String,
        alt: String,
    },
    Frame {
        src: String,
        title: String,
    },
    /// Blinking insertion caret, purely decorative.
    Caret {
        color: Color,
        font_size: f32,
    },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Text {
                text,
                font_size,
                role,
                ..
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("font_size", font_size)
                .field("role", role)
                .finish(),
            ViewKind::Button { text, enabled, .. } => f
                .debug_struct("Button")
                .field("text", text)
                .field("enabled", enabled)
                .field("on_click", &"<callback>")
                .finish(),
            ViewKind::Link {
                text,
                href,
                new_tab,
                ..
            } => f
                .debug_struct("Link")
                .field("text", text)
                .field("href", href)
                .field("new_tab", new_tab)
                .finish(),
            ViewKind::TextField {
                value,
                hint,
                multiline,
                ..
            } => f
                .debug_struct("TextField")
                .field("value", value)
                .field("hint", hint)
                .field("multiline", multiline)
                .finish(),
            ViewKind::ProgressBar {
                value,
                min,
                max,
                label,
            } => f
                .debug_struct("ProgressBar")
                .field("value", value)
                .field("min", min)
                .field("max", max)
                .field("label", label)
                .finish(),
            ViewKind::Image { src, alt } => f
                .debug_struct("Image")
                .field("src", src)
                .field("alt", alt)
                .finish(),
            ViewKind::Frame { src, title } => f
                .debug_struct("Frame")
                .field("src", src)
                .field("title", title)
                .finish(),
            ViewKind::Caret { color, font_size } => f
                .debug_struct("Caret")
                .field("color", color)
                .field("font_size", font_size)
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<crate::semantics::Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn semantics(mut self, s: crate::semantics::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Depth-first search by `Modifier::node_key`.
    pub fn find_by_key(&self, key: &str) -> Option<&View> {
        if self.modifier.node_key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_key(key))
    }

    /// Concatenated text of every text-bearing node in this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        fn walk(v: &View, out: &mut String) {
            match &v.kind {
                ViewKind::Text { text, .. }
                | ViewKind::Button { text, .. }
                | ViewKind::Link { text, .. } => out.push_str(text),
                _ => {}
            }
            for c in &v.children {
                walk(c, out);
            }
        }
        walk(self, &mut out);
        out
    }
}
