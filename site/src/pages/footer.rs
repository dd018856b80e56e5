use folio_core::*;
use folio_ui::*;
use web_time::{SystemTime, UNIX_EPOCH};

use crate::content::{NavItem, Profile};
use crate::pages::header::Brand;
use crate::ui::Page;

/// Gregorian year of a Unix timestamp (UTC).
pub fn year_from_unix(secs: u64) -> i64 {
    let days = (secs / 86_400) as i64;
    // Days-to-civil, with eras of 400 years starting on 0000-03-01.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    yoe + era * 400 + i64::from(month <= 2)
}

fn current_year() -> i64 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    year_from_unix(secs)
}

pub fn Footer(profile: &Profile, nav: &[NavItem]) -> View {
    let th = theme();
    let fg = Color::WHITE;

    let brand = Column(Modifier::new().gap(8.0)).child((
        Brand(profile, fg),
        Text(&profile.tagline).color(th.primary_light),
    ));

    let socials = Row(Modifier::new().gap(16.0)).with_children(
        profile
            .socials
            .iter()
            .map(|s| {
                let link = Link(&s.label, &s.href)
                    .modifier(Modifier::new().content_color(th.primary_light))
                    .label(&s.label);
                if s.is_external() { link.new_tab() } else { link }
            })
            .collect(),
    );

    let links = Row(Modifier::new().gap(24.0).flex_wrap()).with_children(
        nav.iter()
            .map(|item| {
                Link(&item.label, &item.href)
                    .modifier(Modifier::new().content_color(th.primary_light))
            })
            .collect(),
    );

    let copyright = Text(format!(
        "© {} {}. All rights reserved.",
        current_year(),
        profile.full_name()
    ))
    .size(14.0)
    .color(th.primary_light)
    .modifier(Modifier::new().node_key("copyright"));

    Column(
        Modifier::new()
            .background(th.primary_dark)
            .padding_xy(48.0, 16.0)
            .node_key("site-footer"),
    )
    .child(Page(
        Column(Modifier::new().gap(32.0)).child((
            Row(Modifier::new()
                .flex_wrap()
                .gap(24.0)
                .justify_content(JustifyContent::SpaceBetween)
                .align_items(AlignItems::Center))
            .child((brand, socials)),
            Row(Modifier::new()
                .flex_wrap()
                .gap(16.0)
                .justify_content(JustifyContent::SpaceBetween)
                .align_items(AlignItems::Center))
            .child((copyright, links)),
        )),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Site;

    #[test]
    fn years_from_timestamps() {
        assert_eq!(year_from_unix(0), 1970);
        // 2000-02-29T12:00:00Z
        assert_eq!(year_from_unix(951_825_600), 2000);
        // 2024-12-31T23:59:59Z and one second later
        assert_eq!(year_from_unix(1_735_689_599), 2024);
        assert_eq!(year_from_unix(1_735_689_600), 2025);
    }

    #[test]
    fn footer_credits_the_owner() {
        let site = Site::embedded().expect("content");
        let c = &site.content;
        let v = compose(|| Footer(&c.profile, &c.nav));
        let line = v.find_by_key("copyright").expect("copyright").text_content();
        assert!(line.starts_with("© "));
        assert!(line.ends_with(" Kalu Ifechukwu. All rights reserved."));
        let text = v.text_content();
        assert!(text.contains("MERN Stack Developer"));
        assert!(text.contains("Projects"));
    }
}
