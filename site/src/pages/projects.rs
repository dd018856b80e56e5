//! Project cards and the project dialog.
//!
//! One dialog serves every card. Opening it selects a project and starts on
//! the overview tab; closing it forgets both.

use folio_core::*;
use folio_ui::*;

use crate::content::Project;
use crate::ui::{Badges, Card, OutlineLink, PrimaryLink, Section};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Overview,
    Code,
    Demo,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Overview, Tab::Code, Tab::Demo];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Code => "Code",
            Tab::Demo => "Live Demo",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DialogState {
    pub open: Option<usize>,
    pub tab: Tab,
}

impl DialogState {
    pub fn opened(index: usize) -> Self {
        Self {
            open: Some(index),
            tab: Tab::Overview,
        }
    }
}

fn Placeholder(project: &Project, height: f32, text_size: f32) -> View {
    let th = theme();
    let frame = Modifier::new()
        .fill_max_width()
        .height(height)
        .background(th.primary.with_alpha(26))
        .justify_content(JustifyContent::Center)
        .align_items(AlignItems::Center);
    match &project.image {
        Some(src) => Row(frame).child(Image(
            src,
            &project.title,
            Modifier::new().fill_max_width().height(height),
        )),
        None => Row(frame).child(
            Text(project.initials())
                .size(text_size)
                .bold()
                .color(th.primary.with_alpha(51)),
        ),
    }
}

fn ProjectCard(index: usize, project: &Project, dialog: &Signal<DialogState>) -> View {
    let th = theme();
    let open = |d: &Signal<DialogState>| {
        let d = d.clone();
        move || d.set(DialogState::opened(index))
    };
    let code = Button("Code", open(dialog)).modifier(
        Modifier::new()
            .node_key(format!("project-{index}-code"))
            .content_color(th.primary)
            .border(1.0, th.primary, 6.0)
            .padding_xy(6.0, 12.0),
    );
    let demo = project.live_url.as_ref().map(|_| {
        Button("Live Demo", open(dialog)).modifier(
            Modifier::new()
                .node_key(format!("project-{index}-demo"))
                .background(th.primary)
                .content_color(th.on_primary)
                .clip_rounded(6.0)
                .padding_xy(6.0, 12.0),
        )
    });

    Card(
        Modifier::new().clip_rounded(12.0),
        Column(Modifier::new()).child((
            Placeholder(project, 192.0, 36.0),
            Column(Modifier::new().padding(24.0).gap(12.0)).child((
                Text(&project.title).heading(3).size(20.0).weight(FontWeight::SemiBold),
                Badges(&project.tags),
                Text(&project.description).paragraph().size(14.0).color(th.muted),
            )),
            Row(Modifier::new()
                .padding_values(PaddingValues {
                    left: 24.0,
                    right: 24.0,
                    top: 0.0,
                    bottom: 24.0,
                })
                .justify_content(JustifyContent::SpaceBetween))
            .child((code, demo)),
        )),
    )
}

fn CloneLine(project: &Project) -> Option<View> {
    let th = theme();
    project.clone_command().map(|cmd| {
        Column(
            Modifier::new()
                .background(th.surface_variant)
                .border(1.0, th.outline, 6.0)
                .padding(16.0)
                .gap(8.0),
        )
        .child((
            Text("Clone this repository:").weight(FontWeight::Medium).color(th.primary_dark),
            Box(Modifier::new()
                .background(Color::BLACK)
                .content_color(Color::WHITE)
                .clip_rounded(4.0)
                .padding(8.0))
            .child(Text(cmd).mono().size(14.0).color(Color::WHITE)),
        ))
    })
}

fn OverviewTab(project: &Project) -> View {
    let th = theme();
    let mut links = vec![OutlineLink("View Full Repository", &project.github_url).new_tab()];
    if let Some(live) = &project.live_url {
        links.push(PrimaryLink("Visit Live Site", live).new_tab());
    }
    Column(Modifier::new().gap(16.0)).child((
        Placeholder(project, 256.0, 60.0),
        Text(&project.description).paragraph().color(th.muted),
        Row(Modifier::new().gap(16.0).flex_wrap()).with_children(links),
        CloneLine(project),
    ))
}

fn CodeTab(project: &Project) -> View {
    let snippet = project
        .code
        .as_deref()
        .unwrap_or("Code snippet coming soon...");
    Column(Modifier::new().gap(16.0)).child((
        Box(Modifier::new()
            .background(Color::from_hex("#0F172A"))
            .clip_rounded(6.0)
            .padding(16.0)
            .max_height(384.0)
            .scroll_y())
        .child(Text(snippet).code().mono().size(14.0).color(Color::WHITE)),
        PrimaryLink("View Full Code on GitHub", &project.github_url).new_tab(),
        CloneLine(project),
    ))
}

fn DemoTab(project: &Project) -> View {
    let th = theme();
    match &project.live_url {
        Some(live) => Column(Modifier::new().gap(16.0)).child((
            Frame(
                live,
                format!("{} Demo", project.title),
                Modifier::new().fill_max_width().height(360.0).clip_rounded(6.0),
            ),
            Text("For the best experience, you can also visit the live demo directly:")
                .paragraph()
                .size(14.0)
                .color(th.muted),
            PrimaryLink("Open in New Tab", live).new_tab(),
        )),
        None => Column(
            Modifier::new()
                .padding_xy(32.0, 0.0)
                .align_items(AlignItems::Center)
                .gap(8.0),
        )
        .child((
            Text("Live demo is not available for this project.")
                .paragraph()
                .color(th.muted),
            Text("Check out the code instead or visit the GitHub repository for complete details.")
                .paragraph()
                .size(14.0)
                .color(th.muted),
        )),
    }
}

fn TabBar(current: Tab, dialog: &Signal<DialogState>) -> View {
    let th = theme();
    Grid(
        3,
        Modifier::new().background(th.surface_variant).clip_rounded(6.0).padding(4.0),
        Tab::ALL
            .iter()
            .map(|&tab| {
                let d = dialog.clone();
                let m = Modifier::new()
                    .padding_xy(6.0, 12.0)
                    .clip_rounded(4.0)
                    .node_key(format!("tab-{tab:?}").to_lowercase());
                let m = if tab == current {
                    m.background(th.surface).content_color(th.on_surface).shadow(1.0)
                } else {
                    m.content_color(th.muted)
                };
                Button(tab.title(), move || d.update(|s| s.tab = tab)).modifier(m)
            })
            .collect(),
        0.0,
        4.0,
    )
}

pub fn ProjectDialog(project: &Project, state: DialogState, dialog: &Signal<DialogState>) -> View {
    let th = theme();
    let close = {
        let d = dialog.clone();
        move || d.set(DialogState::default())
    };
    let body = match state.tab {
        Tab::Overview => OverviewTab(project),
        Tab::Code => CodeTab(project),
        Tab::Demo => DemoTab(project),
    };

    Row(Modifier::new()
        .fixed()
        .offset(Some(0.0), Some(0.0), Some(0.0), Some(0.0))
        .z_index(60)
        .background(Color::BLACK.with_alpha(128))
        .justify_content(JustifyContent::Center)
        .align_items(AlignItems::Center)
        .node_key("project-dialog"))
    .child(
        Column(
            Modifier::new()
                .background(th.surface)
                .clip_rounded(8.0)
                .padding(24.0)
                .gap(16.0)
                .max_width(768.0)
                .fill_max_width()
                .max_height(640.0)
                .scroll_y()
                .semantics(Semantics::new(Role::Dialog).label(project.title.clone())),
        )
        .child((
            Row(Modifier::new()
                .justify_content(JustifyContent::SpaceBetween)
                .align_items(AlignItems::Center))
            .child((
                Text(&project.title).heading(3).size(20.0).weight(FontWeight::SemiBold),
                Button("×", close)
                    .label("Close")
                    .modifier(Modifier::new().node_key("dialog-close")),
            )),
            Badges(&project.tags),
            TabBar(state.tab, dialog),
            body,
        )),
    )
}

pub fn ProjectsSection(projects: &[Project], github_profile: &str) -> View {
    let th = theme();
    let dialog = remember_with_key("project-dialog", || signal(DialogState::default()));
    let state = dialog.get();

    let cards = AutoGrid(
        300.0,
        24.0,
        Modifier::new(),
        projects
            .iter()
            .enumerate()
            .map(|(i, p)| ProjectCard(i, p, &dialog))
            .collect(),
    );
    let more = Column(
        Modifier::new()
            .margin_top(64.0)
            .gap(24.0)
            .align_items(AlignItems::Center),
    )
    .child((
        Text("Interested in seeing more of my work?").paragraph().size(18.0),
        PrimaryLink("Visit My GitHub Profile", github_profile).new_tab(),
    ));
    let open = state
        .open
        .and_then(|i| projects.get(i))
        .map(|p| ProjectDialog(p, state, &dialog));

    Section(
        "projects",
        "My Projects",
        th.surface,
        Column(Modifier::new()).child((cards, more, open)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Site;

    fn click(v: &View) {
        match &v.kind {
            ViewKind::Button {
                on_click: Some(f), ..
            } => f(),
            other => panic!("not a button: {other:?}"),
        }
    }

    fn key<'a>(v: &'a View, k: &str) -> &'a View {
        v.find_by_key(k).unwrap_or_else(|| panic!("no {k}"))
    }

    #[test]
    fn dialog_opens_on_overview_and_resets_on_close() {
        reset_composition();
        let site = Site::embedded().expect("content");
        let projects = &site.content.projects;
        let frame = || compose(|| ProjectsSection(projects, "https://github.com/kalu-ifechukwu"));

        let v = frame();
        assert!(v.find_by_key("project-dialog").is_none());
        click(key(&v, "project-0-code"));

        let v = frame();
        let text = key(&v, "project-dialog").text_content();
        assert!(text.contains("View Full Repository"));
        assert!(text.contains("git clone https://github.com/kalu-ifechukwu/mern-ecommerce.git"));

        click(key(&v, "tab-demo"));
        let v = frame();
        let dialog = key(&v, "project-dialog");
        assert!(dialog.text_content().contains("Open in New Tab"));

        click(key(dialog, "dialog-close"));
        let v = frame();
        assert!(v.find_by_key("project-dialog").is_none());

        click(key(&v, "project-1-demo"));
        let v = frame();
        assert!(key(&v, "project-dialog").text_content().contains("Clone this repository:"));
    }

    #[test]
    fn missing_demo_and_code_fall_back_to_notes() {
        let project = Project {
            title: "Scripts".into(),
            description: "Automation".into(),
            tags: vec!["Python".into()],
            image: None,
            github_url: "https://github.com/x/scripts".into(),
            repo: None,
            live_url: None,
            code: None,
        };
        let demo = DemoTab(&project).text_content();
        assert!(demo.contains("Live demo is not available for this project."));
        let code = CodeTab(&project).text_content();
        assert!(code.contains("Code snippet coming soon..."));
        assert!(!code.contains("Clone this repository:"));
    }

    #[test]
    fn card_without_live_url_has_no_demo_button() {
        reset_composition();
        let project = Project {
            title: "Scripts".into(),
            description: String::new(),
            tags: vec![],
            image: None,
            github_url: String::new(),
            repo: None,
            live_url: None,
            code: None,
        };
        let v = compose(|| ProjectsSection(std::slice::from_ref(&project), ""));
        assert!(v.find_by_key("project-0-code").is_some());
        assert!(v.find_by_key("project-0-demo").is_none());
        assert!(v.text_content().contains("SC"));
    }
}
