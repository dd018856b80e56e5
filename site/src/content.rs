//! The content document and page settings.
//!
//! Everything the page shows lives in `content/portfolio.json`, embedded at
//! build time. [`Site::load`] parses it and checks the values the components
//! would otherwise reject while composing.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use folio_core::{ConfigError, duration_from_millis};
use folio_ui::{Direction, Phrases, RevealSpec, TypewriterSpeeds};

const EMBEDDED: &str = include_str!("../content/portfolio.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content document is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("skill {name:?} has level {level}, expected 0 to 100")]
    SkillLevel { name: String, level: i32 },
    #[error("project {0:?} has no title")]
    UntitledProject(usize),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Clone, Debug, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub settings: Settings,
    pub profile: Profile,
    pub nav: Vec<NavItem>,
    pub about: About,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub title: String,
    /// Where the contact form posts to.
    pub relay_endpoint: String,
    pub typewriter: TypewriterSettings,
    pub reveal: RevealSettings,
    /// How long a toast stays up.
    pub toast_ms: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Portfolio".into(),
            relay_endpoint: "https://formspree.io/f/mdkwbegz".into(),
            typewriter: TypewriterSettings::default(),
            reveal: RevealSettings::default(),
            toast_ms: 5000,
        }
    }
}

/// Millisecond delays, signed so that a negative value reaches validation
/// instead of failing to parse.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct TypewriterSettings {
    pub typing_ms: i64,
    pub deleting_ms: i64,
    pub pause_ms: i64,
}

impl Default for TypewriterSettings {
    fn default() -> Self {
        Self {
            typing_ms: 100,
            deleting_ms: 50,
            pause_ms: 1000,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    pub duration_secs: f32,
    pub threshold: f32,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            duration_secs: 0.8,
            threshold: 0.1,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub initials: String,
    pub greeting: String,
    pub phrases: Vec<String>,
    pub headline: String,
    pub summary: String,
    pub tagline: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub github_profile: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

impl SocialLink {
    /// `mailto:` links open in place; everything else gets a new tab.
    pub fn is_external(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub highlights: Vec<Highlight>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Primary,
    Accent,
    Light,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub accent: Accent,
    /// Spans both columns of the card grid.
    #[serde(default)]
    pub wide: bool,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Language,
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    pub fn title(self) -> &'static str {
        match self {
            SkillCategory::Language => "Programming Languages",
            SkillCategory::Frontend => "Frontend Development",
            SkillCategory::Backend => "Backend Development",
            SkillCategory::Tools => "Tools & Technologies",
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: i32,
    pub category: SkillCategory,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub github_url: String,
    /// `owner/name` on GitHub; enables the clone line.
    pub repo: Option<String>,
    pub live_url: Option<String>,
    pub code: Option<String>,
}

impl Project {
    /// Placeholder shown when there is no image: the first two characters
    /// of the title, upper-cased.
    pub fn initials(&self) -> String {
        self.title.chars().take(2).collect::<String>().to_uppercase()
    }

    pub fn clone_command(&self) -> Option<String> {
        self.repo
            .as_ref()
            .map(|r| format!("git clone https://github.com/{r}.git"))
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ContactInfo {
    pub intro: String,
    pub email: String,
    pub location: String,
}

impl Portfolio {
    pub fn skills_in(&self, category: SkillCategory) -> impl Iterator<Item = &Skill> {
        self.skills.iter().filter(move |s| s.category == category)
    }
}

/// The parsed document plus the validated component configuration derived
/// from it.
#[derive(Clone, Debug)]
pub struct Site {
    pub content: Portfolio,
    pub phrases: Phrases,
    pub speeds: TypewriterSpeeds,
    /// Default reveal; sections override direction and delay.
    pub reveal: RevealSpec,
    pub toast_timeout: Duration,
}

impl Site {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::load(EMBEDDED)
    }

    pub fn load(json: &str) -> Result<Self, ContentError> {
        let content: Portfolio = serde_json::from_str(json)?;

        for skill in &content.skills {
            if !(0..=100).contains(&skill.level) {
                return Err(ContentError::SkillLevel {
                    name: skill.name.clone(),
                    level: skill.level,
                });
            }
        }
        if let Some(i) = content.projects.iter().position(|p| p.title.trim().is_empty()) {
            return Err(ContentError::UntitledProject(i));
        }

        let s = &content.settings;
        let phrases = Phrases::new(content.profile.phrases.iter().map(String::as_str))?;
        let speeds = TypewriterSpeeds::from_millis(
            s.typewriter.typing_ms,
            s.typewriter.deleting_ms,
            s.typewriter.pause_ms,
        )?;
        let reveal = RevealSpec::new(
            Direction::Up,
            s.reveal.duration_secs,
            0.0,
            s.reveal.threshold,
        )?;
        let toast_timeout = duration_from_millis("toast_ms", s.toast_ms)?;

        log::debug!(
            "loaded content: {} skills, {} projects",
            content.skills.len(),
            content.projects.len()
        );
        Ok(Self {
            content,
            phrases,
            speeds,
            reveal,
            toast_timeout,
        })
    }
}
