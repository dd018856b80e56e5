use std::rc::Rc;

use folio_core::*;
use folio_platform::FormRelay;
use folio_ui::*;

use crate::content::{ContactInfo, SocialLink};
use crate::form::{ContactForm, Field};
use crate::task;
use crate::ui::{Card, IconChip, Section};

fn InfoRow(icon: &str, title: &str, value: &str) -> View {
    let th = theme();
    Row(Modifier::new().gap(16.0).align_items(AlignItems::Start)).child((
        IconChip(icon),
        Column(Modifier::new()).child((
            Text(title).heading(4).size(16.0).weight(FontWeight::SemiBold).color(th.primary),
            Text(value).paragraph().color(th.muted),
        )),
    ))
}

fn FormField(form: &Rc<ContactForm>, field: Field) -> View {
    let th = theme();
    let on_change = {
        let form = form.clone();
        move |v: String| form.set(field, v)
    };
    let value = form.value(field);
    let input = if field == Field::Message {
        TextArea(value, field.hint(), on_change)
    } else {
        TextField(value, field.hint(), on_change)
    };
    let key = format!("contact-{}", field.label().to_lowercase());
    let input = input.label(field.label()).modifier(
        Modifier::new()
            .node_key(key)
            .fill_max_width()
            .border(1.0, th.outline, 6.0)
            .padding_xy(8.0, 12.0),
    );
    let error = form.error_for(field).map(|e| {
        Text(e.to_string())
            .size(14.0)
            .color(th.error)
            .modifier(Modifier::new().node_key(format!("contact-{}-error", field.label().to_lowercase())))
    });
    Column(Modifier::new().gap(8.0)).child((
        Text(field.label()).size(14.0).weight(FontWeight::Medium),
        input,
        error,
    ))
}

fn SendButton<R: FormRelay + 'static>(
    form: &Rc<ContactForm>,
    relay: &Rc<R>,
    toaster: &Rc<Toaster>,
) -> View {
    let th = theme();
    let busy = form.is_submitting();
    let on_click = {
        let (form, relay, toaster) = (form.clone(), relay.clone(), toaster.clone());
        move || {
            let (form, relay, toaster) = (form.clone(), relay.clone(), toaster.clone());
            task::spawn(async move {
                form.submit(&*relay, &toaster).await;
            });
        }
    };
    Button(if busy { "Sending..." } else { "Send Message" }, on_click)
        .enabled(!busy)
        .modifier(
            Modifier::new()
                .node_key("contact-submit")
                .fill_max_width()
                .background(th.primary)
                .content_color(th.on_primary)
                .clip_rounded(6.0)
                .padding_xy(10.0, 16.0),
        )
}

pub fn ContactSection<R: FormRelay + 'static>(
    info: &ContactInfo,
    socials: &[SocialLink],
    relay: &Rc<R>,
    toaster: &Rc<Toaster>,
) -> View {
    let th = theme();
    let form = remember_with_key("contact-form", ContactForm::new);

    let follow = Row(Modifier::new().gap(16.0)).with_children(
        socials
            .iter()
            .map(|s| {
                let link = Link(&s.label, &s.href)
                    .modifier(Modifier::new().content_color(th.primary))
                    .label(&s.label);
                if s.is_external() { link.new_tab() } else { link }
            })
            .collect(),
    );

    let details = Column(Modifier::new().gap(24.0)).child((
        Text("Get in Touch")
            .heading(3)
            .size(24.0)
            .weight(FontWeight::SemiBold)
            .color(th.primary),
        Text(&info.intro).paragraph().size(18.0).color(th.muted),
        InfoRow("@", "Email", &info.email),
        InfoRow("⌖", "Location", &info.location),
        Column(Modifier::new().gap(16.0).margin_top(24.0)).child((
            Text("Follow Me").heading(4).size(16.0).weight(FontWeight::SemiBold).color(th.primary),
            follow,
        )),
    ));

    let card = Card(
        Modifier::new().padding(24.0).shadow(8.0),
        Column(Modifier::new().gap(24.0))
            .child((
                Text("Send Me a Message")
                    .heading(3)
                    .size(20.0)
                    .weight(FontWeight::SemiBold)
                    .color(th.primary),
                Field::ALL.iter().map(|&f| FormField(&form, f)).collect::<Vec<_>>(),
                SendButton(&form, relay, toaster),
            )),
    );

    Section(
        "contact",
        "Contact Me",
        th.surface_variant,
        AutoGrid(420.0, 48.0, Modifier::new(), vec![details, card]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::time::Duration;

    use folio_platform::{RelayError, relay};

    use crate::content::Site;

    struct Recorder {
        status: u16,
        bodies: RefCell<Vec<serde_json::Value>>,
    }

    impl FormRelay for Recorder {
        async fn post_json(&self, payload: &serde_json::Value) -> Result<(), RelayError> {
            self.bodies.borrow_mut().push(payload.clone());
            relay::check_status(self.status)
        }
    }

    fn type_into(v: &View, key: &str, text: &str) {
        match v.find_by_key(key).map(|n| &n.kind) {
            Some(ViewKind::TextField {
                on_change: Some(f), ..
            }) => f(text.to_string()),
            other => panic!("no field {key}: {other:?}"),
        }
    }

    fn press(v: &View, key: &str) {
        match v.find_by_key(key).map(|n| &n.kind) {
            Some(ViewKind::Button {
                on_click: Some(f), ..
            }) => f(),
            other => panic!("no button {key}: {other:?}"),
        }
    }

    struct Page {
        site: Site,
        relay: Rc<Recorder>,
        toaster: Rc<Toaster>,
    }

    impl Page {
        fn new(status: u16) -> Self {
            reset_composition();
            Self {
                site: Site::embedded().expect("content"),
                relay: Rc::new(Recorder {
                    status,
                    bodies: RefCell::new(Vec::new()),
                }),
                toaster: Toaster::new(Rc::new(ManualScheduler::new()), Duration::from_secs(5)),
            }
        }

        fn frame(&self) -> View {
            let c = &self.site.content;
            compose(|| ContactSection(&c.contact, &c.profile.socials, &self.relay, &self.toaster))
        }
    }

    #[test]
    fn short_name_is_rejected_without_a_request() {
        let page = Page::new(200);
        let v = page.frame();
        type_into(&v, "contact-name", "A");
        type_into(&v, "contact-email", "a@b.co");
        type_into(&v, "contact-subject", "Hello there");
        type_into(&v, "contact-message", "A long enough message");
        press(&page.frame(), "contact-submit");

        let v = page.frame();
        let error = v.find_by_key("contact-name-error").expect("error shown");
        assert_eq!(error.text_content(), "Name must be at least 2 characters.");
        assert!(v.find_by_key("contact-email-error").is_none());
        assert!(page.relay.bodies.borrow().is_empty());
        assert_eq!(page.toaster.shown_count(), 0);
    }

    #[test]
    fn accepted_message_clears_the_form_and_toasts() {
        let page = Page::new(200);
        let v = page.frame();
        type_into(&v, "contact-name", "Ada");
        type_into(&v, "contact-email", "ada@example.com");
        type_into(&v, "contact-subject", "Project idea");
        type_into(&v, "contact-message", "Would you build a shop with me?");
        press(&page.frame(), "contact-submit");

        let bodies = page.relay.bodies.borrow();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["email"], "ada@example.com");
        assert_eq!(bodies[0]["subject"], "Project idea");

        let v = page.frame();
        match v.find_by_key("contact-name").map(|n| &n.kind) {
            Some(ViewKind::TextField { value, .. }) => assert!(value.is_empty()),
            other => panic!("{other:?}"),
        }
        let toast = page.toaster.current().expect("toast");
        assert_eq!(toast.title, "Message sent!");
    }

    #[test]
    fn failed_relay_keeps_the_input() {
        let page = Page::new(502);
        let v = page.frame();
        type_into(&v, "contact-name", "Ada");
        type_into(&v, "contact-email", "ada@example.com");
        type_into(&v, "contact-subject", "Project idea");
        type_into(&v, "contact-message", "Would you build a shop with me?");
        press(&page.frame(), "contact-submit");

        let v = page.frame();
        match v.find_by_key("contact-subject").map(|n| &n.kind) {
            Some(ViewKind::TextField { value, .. }) => assert_eq!(value, "Project idea"),
            other => panic!("{other:?}"),
        }
        let toast = page.toaster.current().expect("toast");
        assert_eq!(toast.kind, ToastKind::Destructive);
        assert!(v.text_content().contains("Send Message"));
    }
}
