use std::rc::Rc;

use folio_core::*;
use folio_platform::{FormRelay, HttpRelay};
use folio_ui::*;

use crate::content::Site;
use crate::pages::{
    about::AboutSection,
    contact::ContactSection,
    footer::Footer,
    header::{Header, TopSentinel},
    hero::Hero,
    projects::ProjectsSection,
    skills::SkillsSection,
};

/// The whole page, posting contact messages to the configured relay.
pub fn app(site: &Site) -> View {
    let relay = remember_with_key("relay", || {
        HttpRelay::new(&site.content.settings.relay_endpoint)
    });
    app_with(site, &relay)
}

pub fn app_with<R: FormRelay + 'static>(site: &Site, relay: &Rc<R>) -> View {
    let toaster = remember_toaster("page", site.toast_timeout);
    let c = &site.content;

    with_theme(Theme::default(), || {
        Column(
            Modifier::new()
                .relative()
                .background(theme().background)
                .node_key("page"),
        )
        .child((
            TopSentinel(),
            Header(&c.profile, &c.nav),
            Hero(site),
            RevealOnVisibility("about", site.reveal, AboutSection(&c.about)),
            RevealOnVisibility("skills", site.reveal, SkillsSection(c)),
            RevealOnVisibility(
                "projects",
                site.reveal,
                ProjectsSection(&c.projects, &c.profile.github_profile),
            ),
            RevealOnVisibility(
                "contact",
                site.reveal,
                ContactSection(&c.contact, &c.profile.socials, relay, &toaster),
            ),
            Footer(&c.profile, &c.nav),
            ToastHost(&toaster),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_platform::{RelayError, relay};

    struct Accepting;

    impl FormRelay for Accepting {
        async fn post_json(&self, _: &serde_json::Value) -> Result<(), RelayError> {
            relay::check_status(204)
        }
    }

    fn sections(v: &View) -> Vec<String> {
        let mut out = Vec::new();
        fn walk(v: &View, out: &mut Vec<String>) {
            if let Some(a) = &v.modifier.anchor {
                out.push(a.clone());
            }
            for c in &v.children {
                walk(c, out);
            }
        }
        walk(v, &mut out);
        out
    }

    #[test]
    fn sections_in_page_order() {
        reset_composition();
        let site = Site::embedded().expect("content");
        let relay = Rc::new(Accepting);
        let v = compose(|| app_with(&site, &relay));
        assert_eq!(
            sections(&v),
            ["home", "about", "skills", "projects", "contact"]
        );
        assert!(v.find_by_key("site-header").is_some());
        assert!(v.find_by_key("site-footer").is_some());
    }

    #[test]
    fn sections_wait_for_the_viewport() {
        reset_composition();
        let site = Site::embedded().expect("content");
        let relay = Rc::new(Accepting);
        let observer = Rc::new(ManualObserver::new());
        let host = Host::new(Rc::new(ManualScheduler::new()), observer.clone());
        let frame = || with_host(host.clone(), || compose(|| app_with(&site, &relay)));

        let v = frame();
        let about = v.find_by_key("reveal-about").expect("about");
        assert_eq!(about.modifier.alpha, Some(0.0));
        assert!(observer.is_observing(crate::pages::header::SENTINEL_KEY));

        observer.emit("reveal-about", 0.5);
        let v = frame();
        assert_eq!(v.find_by_key("reveal-about").expect("about").modifier.alpha, Some(1.0));
        assert_eq!(v.find_by_key("reveal-skills").expect("skills").modifier.alpha, Some(0.0));
    }

    #[test]
    fn static_export_shows_everything() {
        reset_composition();
        let site = Site::embedded().expect("content");
        let relay = Rc::new(Accepting);
        let html = folio_platform::export_static(&site.content.settings.title, "", || {
            app_with(&site, &relay)
        });
        assert!(html.contains("<title>Kalu Ifechukwu | MERN Stack Developer</title>"));
        assert!(html.contains("id=\"contact\""));
        assert!(!html.contains("opacity: 0;"));
    }
}
