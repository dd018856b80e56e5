use folio_core::*;
use folio_ui::*;

use crate::content::{About, Accent, Highlight};
use crate::ui::{Card, Section};

fn accent_color(accent: Accent, th: &Theme) -> Color {
    match accent {
        Accent::Primary => th.primary,
        Accent::Accent => th.accent,
        Accent::Light => th.primary_light,
    }
}

fn HighlightCard(h: &Highlight) -> View {
    let th = theme();
    let mut m = Modifier::new()
        .border_left(4.0, accent_color(h.accent, &th))
        .padding(24.0);
    if h.wide {
        m = m.grid_span(2);
    }
    Card(
        m,
        Column(Modifier::new().gap(8.0)).child((
            Text(&h.title)
                .heading(3)
                .size(20.0)
                .weight(FontWeight::SemiBold)
                .color(th.primary),
            Text(&h.body).paragraph().color(th.muted),
        )),
    )
}

pub fn AboutSection(about: &About) -> View {
    let th = theme();
    let story = Column(Modifier::new().gap(24.0)).with_children(
        about
            .paragraphs
            .iter()
            .map(|p| Text(p).paragraph().size(18.0).color(th.on_surface))
            .collect(),
    );
    let cards = Grid(
        2,
        Modifier::new(),
        about.highlights.iter().map(HighlightCard).collect(),
        24.0,
        24.0,
    );
    Section(
        "about",
        "About Me",
        th.surface,
        Grid(2, Modifier::new(), vec![story, cards], 48.0, 48.0),
    )
}
