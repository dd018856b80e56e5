//! HTML for a view tree.
//!
//! [`element_for`] describes the element a single view maps to. The static
//! renderer and the browser runner both build from it, so exported pages
//! and live pages carry the same markup.

use std::fmt::Write;

use folio_core::*;
use html_escape::{encode_double_quoted_attribute, encode_text, encode_text_to_string};

use crate::style::css;

/// Page-wide CSS both hosts install: resets, the caret blink, and the
/// responsive switches the header relies on.
pub const BASE_CSS: &str = "\
*,*::before,*::after{box-sizing:border-box}\
html{scroll-behavior:smooth}\
body{margin:0;font-family:Inter,system-ui,-apple-system,'Segoe UI',Roboto,sans-serif;line-height:1.6}\
a{color:inherit;text-decoration:none}\
button{font:inherit;border:0;background:none}\
input,textarea{font:inherit}\
progress{accent-color:#1E40AF}\
@keyframes folio-blink{from,to{opacity:1}50%{opacity:0}}\
@media (max-width:767px){[data-node=nav-desktop]{display:none!important}}\
@media (min-width:768px){[data-node=nav-toggle],[data-node=nav-mobile]{display:none!important}}\
@media (prefers-reduced-motion:reduce){*{transition:none!important;animation:none!important}}";

/// One element: tag, attributes and leaf content.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    /// Text content of leaf views.
    pub text: Option<String>,
    /// Live value of form controls.
    pub value: Option<String>,
}

impl Element {
    pub fn is_void(&self) -> bool {
        matches!(self.tag, "input" | "img")
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Every attribute [`element_for`] can emit; hosts remove the ones a view
/// no longer carries.
pub const MANAGED_ATTRS: &[&str] = &[
    "style",
    "id",
    "data-node",
    "data-id",
    "data-click",
    "data-input",
    "role",
    "aria-label",
    "aria-disabled",
    "aria-hidden",
    "type",
    "disabled",
    "href",
    "target",
    "rel",
    "placeholder",
    "rows",
    "src",
    "alt",
    "title",
    "loading",
    "max",
    "aria-valuenow",
    "aria-valuemin",
    "aria-valuemax",
];

fn block_tag(view: &View) -> &'static str {
    let role = view
        .modifier
        .semantics
        .as_ref()
        .or(view.semantics.as_ref())
        .map(|s| s.role);
    match role {
        Some(Role::Navigation) => "nav",
        _ => "div",
    }
}

pub fn element_for(view: &View) -> Element {
    let mut attrs: Vec<(&'static str, String)> = Vec::new();
    let mut text = None;
    let mut value = None;

    let tag = match &view.kind {
        ViewKind::Box | ViewKind::Row | ViewKind::Column => block_tag(view),
        ViewKind::Text { text: t, role, .. } => {
            text = Some(t.clone());
            match role {
                TextRole::Inline => "span",
                TextRole::Paragraph => "p",
                TextRole::Code => "pre",
                TextRole::Heading(1) => "h1",
                TextRole::Heading(2) => "h2",
                TextRole::Heading(3) => "h3",
                TextRole::Heading(4) => "h4",
                TextRole::Heading(5) => "h5",
                TextRole::Heading(_) => "h6",
            }
        }
        ViewKind::Button {
            text: t,
            on_click,
            enabled,
        } => {
            text = Some(t.clone());
            attrs.push(("type", "button".into()));
            if !enabled {
                attrs.push(("disabled", String::new()));
            }
            if on_click.is_some() {
                attrs.push(("data-id", view.id.to_string()));
                attrs.push(("data-click", String::new()));
            }
            "button"
        }
        ViewKind::Link {
            text: t,
            href,
            new_tab,
            on_click,
        } => {
            text = Some(t.clone());
            attrs.push(("href", href.clone()));
            if *new_tab {
                attrs.push(("target", "_blank".into()));
                attrs.push(("rel", "noopener noreferrer".into()));
            }
            if on_click.is_some() {
                attrs.push(("data-id", view.id.to_string()));
                attrs.push(("data-click", String::new()));
            }
            "a"
        }
        ViewKind::TextField {
            value: v,
            hint,
            multiline,
            on_change,
        } => {
            value = Some(v.clone());
            if !*multiline {
                attrs.push(("type", "text".into()));
            } else {
                attrs.push(("rows", "5".into()));
            }
            if !hint.is_empty() {
                attrs.push(("placeholder", hint.clone()));
            }
            if on_change.is_some() {
                attrs.push(("data-id", view.id.to_string()));
                attrs.push(("data-input", String::new()));
            }
            if *multiline { "textarea" } else { "input" }
        }
        ViewKind::ProgressBar {
            value: v,
            min,
            max,
            ..
        } => {
            value = Some(format!("{}", v - min));
            attrs.push(("max", format!("{}", max - min)));
            attrs.push(("aria-valuenow", format!("{v}")));
            attrs.push(("aria-valuemin", format!("{min}")));
            attrs.push(("aria-valuemax", format!("{max}")));
            "progress"
        }
        ViewKind::Image { src, alt } => {
            attrs.push(("src", src.clone()));
            attrs.push(("alt", alt.clone()));
            attrs.push(("loading", "lazy".into()));
            "img"
        }
        ViewKind::Frame { src, title } => {
            attrs.push(("src", src.clone()));
            attrs.push(("title", title.clone()));
            attrs.push(("loading", "lazy".into()));
            "iframe"
        }
        ViewKind::Caret { .. } => {
            text = Some("|".into());
            attrs.push(("aria-hidden", "true".into()));
            "span"
        }
    };

    let style = css(view);
    if !style.is_empty() {
        attrs.push(("style", style));
    }
    if let Some(a) = &view.modifier.anchor {
        attrs.push(("id", a.clone()));
    }
    if let Some(k) = &view.modifier.node_key {
        attrs.push(("data-node", k.clone()));
    }

    let sem = view.semantics.as_ref().or(view.modifier.semantics.as_ref());
    if let Some(s) = sem {
        if let Some(r) = s.role.aria()
            && tag != "nav"
            && tag != "progress"
        {
            attrs.push(("role", r.into()));
        }
        if let Some(l) = &s.label {
            attrs.push(("aria-label", l.clone()));
        }
        if !s.enabled && tag != "button" {
            attrs.push(("aria-disabled", "true".into()));
        }
    }

    Element {
        tag,
        attrs,
        text,
        value,
    }
}

fn render_into(view: &View, out: &mut String) {
    let el = element_for(view);
    let _ = write!(out, "<{}", el.tag);
    for (k, v) in &el.attrs {
        if v.is_empty() && matches!(*k, "disabled" | "data-click" | "data-input") {
            let _ = write!(out, " {k}");
        } else {
            let _ = write!(out, " {k}=\"{}\"", encode_double_quoted_attribute(v));
        }
    }
    if let Some(v) = &el.value
        && el.tag != "textarea"
    {
        let _ = write!(out, " value=\"{}\"", encode_double_quoted_attribute(v));
    }
    out.push('>');
    if el.is_void() {
        return;
    }
    if el.tag == "textarea"
        && let Some(v) = &el.value
    {
        encode_text_to_string(v, out);
    }
    if let Some(t) = &el.text {
        encode_text_to_string(t, out);
    }
    for child in &view.children {
        render_into(child, out);
    }
    let _ = write!(out, "</{}>", el.tag);
}

/// Markup for `view` and its subtree.
pub fn render(view: &View) -> String {
    let mut out = String::new();
    render_into(view, &mut out);
    out
}

/// A complete page around `view`.
pub fn document(title: &str, extra_css: &str, view: &View) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style data-folio>{}{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        encode_text(title),
        BASE_CSS,
        extra_css,
        render(view)
    )
}
