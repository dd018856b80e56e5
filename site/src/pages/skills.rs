use folio_core::*;
use folio_ui::*;

use crate::content::{Portfolio, Skill, SkillCategory};
use crate::ui::{Badge, Section};

/// Category groups per column, top to bottom.
const COLUMNS: [[SkillCategory; 2]; 2] = [
    [SkillCategory::Language, SkillCategory::Frontend],
    [SkillCategory::Backend, SkillCategory::Tools],
];

fn SkillBar(skill: &Skill) -> View {
    let th = theme();
    Column(Modifier::new().gap(4.0).margin_bottom(16.0)).child((
        Row(Modifier::new().justify_content(JustifyContent::SpaceBetween)).child((
            Text(&skill.name).weight(FontWeight::Medium),
            Text(format!("{}%", skill.level)).size(14.0).color(th.muted),
        )),
        ProgressBar(skill.level as f32, (0.0, 100.0), &skill.name),
    ))
}

fn Group(content: &Portfolio, category: SkillCategory) -> View {
    let th = theme();
    Column(Modifier::new().margin_bottom(40.0)).child((
        Text(category.title())
            .heading(3)
            .size(20.0)
            .weight(FontWeight::SemiBold)
            .color(th.primary)
            .modifier(Modifier::new().margin_bottom(24.0)),
        content.skills_in(category).map(SkillBar).collect::<Vec<_>>(),
    ))
}

pub fn SkillsSection(content: &Portfolio) -> View {
    let th = theme();
    let columns = COLUMNS
        .iter()
        .map(|groups| {
            Column(Modifier::new())
                .with_children(groups.iter().map(|c| Group(content, *c)).collect())
        })
        .collect();

    let cloud = Column(Modifier::new().gap(24.0).margin_top(24.0)).child((
        Text("Key Technologies")
            .heading(3)
            .size(20.0)
            .weight(FontWeight::SemiBold)
            .color(th.primary),
        Row(Modifier::new().gap(8.0).flex_wrap())
            .with_children(content.skills.iter().map(|s| Badge(&s.name)).collect()),
    ));

    Section(
        "skills",
        "My Skills",
        th.surface_variant,
        Column(Modifier::new()).child((Grid(2, Modifier::new(), columns, 0.0, 40.0), cloud)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Site;

    fn bars(v: &View, out: &mut Vec<(String, f32)>) {
        if let ViewKind::ProgressBar { value, label, .. } = &v.kind {
            out.push((label.clone(), *value));
        }
        for c in &v.children {
            bars(c, out);
        }
    }

    #[test]
    fn bars_follow_column_order() {
        let site = Site::embedded().expect("content");
        let view = compose(|| SkillsSection(&site.content));
        let mut found = Vec::new();
        bars(&view, &mut found);

        let names: Vec<&str> = found.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names.len(), site.content.skills.len());
        assert_eq!(
            &names[..5],
            ["Python", "JavaScript", "TypeScript", "HTML/CSS", "React.js"]
        );
        assert_eq!(names.last(), Some(&"RESTful APIs"));
        assert_eq!(found[0].1, 80.0);

        let text = view.text_content();
        assert!(text.contains("Programming Languages"));
        assert!(text.contains("Tools & Technologies"));
        assert!(text.contains("90%"));
    }
}
