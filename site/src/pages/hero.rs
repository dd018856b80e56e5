use std::time::Duration;

use folio_core::*;
use folio_ui::*;

use crate::content::Site;
use crate::ui::{GUTTER, OutlineLink, Page, PrimaryLink};

fn staggered(site: &Site, delay_ms: u64) -> RevealSpec {
    RevealSpec {
        delay: Duration::from_millis(delay_ms),
        ..site.reveal
    }
}

fn Avatar(initials: &str, specialties: &[String]) -> View {
    let th = theme();
    let badge = Column(
        Modifier::new()
            .absolute()
            .offset(None, None, Some(-16.0), Some(-16.0))
            .background(th.surface)
            .clip_rounded(8.0)
            .shadow(6.0)
            .padding(16.0)
            .width(128.0),
    )
    .with_children(
        specialties
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let c = if i % 2 == 0 { th.primary } else { th.accent };
                Text(s).weight(FontWeight::Medium).color(c)
            })
            .collect(),
    );

    Box(Modifier::new().relative()).child((
        Row(Modifier::new()
            .size(288.0, 288.0)
            .clip_rounded(144.0)
            .background(th.accent.with_alpha(51))
            .justify_content(JustifyContent::Center)
            .align_items(AlignItems::Center))
        .child(Text(initials).size(36.0).bold().color(th.accent)),
        badge,
    ))
}

pub fn Hero(site: &Site) -> View {
    let th = theme();
    let p = &site.content.profile;

    let greeting = Row(Modifier::new().align_items(AlignItems::Center).flex_wrap()).child((
        Text(&p.greeting).heading(1).size(48.0).color(th.primary),
        TypewriterCycler("hero", &site.phrases, site.speeds, 48.0),
    ));

    let socials = Row(Modifier::new().gap(16.0).margin_top(32.0)).with_children(
        p.socials
            .iter()
            .map(|s| {
                let link = Link(&s.label, &s.href)
                    .modifier(Modifier::new().content_color(th.muted))
                    .label(&s.label);
                if s.is_external() { link.new_tab() } else { link }
            })
            .collect(),
    );

    let intro = Column(Modifier::new().flex_grow(3.0)).child((
        RevealOnVisibility("hero-greeting", staggered(site, 200), greeting),
        RevealOnVisibility(
            "hero-headline",
            staggered(site, 400),
            Text(&p.headline)
                .heading(2)
                .size(28.0)
                .weight(FontWeight::Medium)
                .color(th.primary_dark)
                .modifier(Modifier::new().margin_bottom(24.0)),
        ),
        RevealOnVisibility(
            "hero-summary",
            staggered(site, 600),
            Text(&p.summary)
                .paragraph()
                .size(18.0)
                .color(th.muted)
                .modifier(Modifier::new().max_width(672.0).margin_bottom(32.0)),
        ),
        RevealOnVisibility(
            "hero-cta",
            staggered(site, 800),
            Row(Modifier::new().gap(16.0).flex_wrap()).child((
                PrimaryLink("View Projects", "#projects"),
                OutlineLink("Contact Me", "#contact"),
            )),
        ),
        RevealOnVisibility("hero-social", staggered(site, 1000), socials),
    ));

    let avatar = RevealOnVisibility(
        "hero-avatar",
        staggered(site, 500).direction(Direction::Left),
        Avatar(&p.initials, &p.specialties),
    );

    Column(
        Modifier::new()
            .anchor("home")
            .min_height(640.0)
            .justify_content(JustifyContent::Center)
            .background_brush(LinearGradient::diagonal(
                Color::WHITE,
                Color::from_hex("#EFF6FF"),
                Color::from_hex("#EEF2FF"),
            ))
            .padding_xy(96.0, GUTTER),
    )
    .child(Page(
        Row(Modifier::new()
            .gap(48.0)
            .flex_wrap()
            .align_items(AlignItems::Center)
            .justify_content(JustifyContent::SpaceBetween))
        .child((intro, avatar)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn hero_blocks_reveal_in_sequence() {
        reset_composition();
        let site = Site::embedded().expect("content");
        let observer = Rc::new(ManualObserver::new());
        let host = Host::new(Rc::new(ManualScheduler::new()), observer.clone());
        with_host(host, || compose(|| Hero(&site)));

        let keys = [
            "reveal-hero-greeting",
            "reveal-hero-headline",
            "reveal-hero-summary",
            "reveal-hero-cta",
            "reveal-hero-social",
            "reveal-hero-avatar",
        ];
        for k in keys {
            assert!(observer.is_observing(k), "{k}");
        }
    }

    #[test]
    fn avatar_slides_from_the_left_after_half_a_second() {
        reset_composition();
        let site = Site::embedded().expect("content");
        let view = compose(|| Hero(&site));
        let avatar = view.find_by_key("reveal-hero-avatar").expect("avatar");
        let t = avatar.modifier.transition.expect("transition");
        assert_eq!(t.delay, Duration::from_millis(500));
        // The default host reports no intersection support, so everything
        // is shown at once.
        assert_eq!(avatar.modifier.alpha, Some(1.0));
        assert!(view.text_content().contains("MERN Stack Developer & Python Enthusiast"));
    }
}
