use folio_core::prelude::*;
use folio_ui::*;

/// Horizontal padding shared by every section container.
pub const GUTTER: f32 = 16.0;

/// A full-width section with an anchor, centred content and a title.
pub fn Section(anchor: &str, title: &str, background: Color, body: View) -> View {
    Column(
        Modifier::new()
            .anchor(anchor)
            .fill_max_width()
            .background(background)
            .padding_xy(80.0, GUTTER),
    )
    .child(Page(Column(Modifier::new().gap(48.0)).child((
        SectionTitle(title),
        body,
    ))))
}

/// Centred, max-width container.
pub fn Page(body: View) -> View {
    Box(Modifier::new()
        .fill_max_width()
        .max_width(1200.0)
        .center_horizontally())
    .child(body)
}

pub fn SectionTitle(title: &str) -> View {
    let th = theme();
    Column(Modifier::new().gap(12.0).align_items(AlignItems::Center)).child((
        Text(title).heading(2).size(36.0).color(th.primary),
        Box(Modifier::new().size(80.0, 4.0).background(th.accent).clip_rounded(2.0)),
    ))
}

/// White rounded card.
pub fn Card(modifier: Modifier, body: View) -> View {
    let th = theme();
    Column(
        modifier
            .background(th.surface)
            .border(1.0, th.outline, 12.0)
            .shadow(4.0),
    )
    .child(body)
}

pub fn Badge(text: &str) -> View {
    let th = theme();
    Box(Modifier::new()
        .padding_xy(4.0, 10.0)
        .background(th.primary_light.with_alpha(26))
        .clip_rounded(999.0))
    .child(Text(text).size(12.0).weight(FontWeight::Medium).color(th.primary))
}

pub fn Badges<'a>(tags: impl IntoIterator<Item = &'a String>) -> View {
    Row(Modifier::new().gap(6.0).flex_wrap())
        .with_children(tags.into_iter().map(|t| Badge(t)).collect())
}

/// Filled call-to-action link.
pub fn PrimaryLink(text: &str, href: &str) -> View {
    let th = theme();
    Link(text, href).modifier(
        Modifier::new()
            .background(th.primary)
            .content_color(th.on_primary)
            .padding_xy(10.0, 20.0)
            .clip_rounded(6.0),
    )
}

/// Outlined call-to-action link.
pub fn OutlineLink(text: &str, href: &str) -> View {
    let th = theme();
    Link(text, href).modifier(
        Modifier::new()
            .content_color(th.primary)
            .border(1.0, th.primary, 6.0)
            .padding_xy(10.0, 20.0),
    )
}

/// Stand-in for an icon: a round chip with a short label.
pub fn IconChip(label: &str) -> View {
    let th = theme();
    Row(Modifier::new()
        .size(48.0, 48.0)
        .clip_rounded(24.0)
        .background(th.primary_light.with_alpha(26))
        .justify_content(JustifyContent::Center)
        .align_items(AlignItems::Center))
    .child(Text(label).size(12.0).weight(FontWeight::SemiBold).color(th.primary))
}
