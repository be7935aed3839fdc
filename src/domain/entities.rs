//! Domain entities. Pure data structures for the interaction core.
//!
//! No HTTP/DOM types here. Adapters and the rendering layer map their own
//! types into these.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Logical page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Section {
    /// Document order used by the default page layout.
    pub const PAGE_ORDER: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// The element id / anchor for this section.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One section's bounding edges in viewport coordinates, captured by the
/// scroll container at event time. `top` may be negative once the section
/// has scrolled past the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRegion {
    pub id: Section,
    pub top: f64,
    pub bottom: f64,
}

impl SectionRegion {
    pub fn new(id: Section, top: f64, bottom: f64) -> Self {
        Self { id, top, bottom }
    }
}

/// A visitor's contact message. Doubles as the mutable form draft and as
/// the payload handed to the submission gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact form fields; the key space of [`ValidationErrors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

/// Per-field validation messages. An empty map means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: HashMap<FormField, String>,
}

impl ValidationErrors {
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Drop the entry for one field (called when the user edits it).
    pub fn clear(&mut self, field: FormField) {
        self.entries.remove(&field);
    }

    pub fn message(&self, field: FormField) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Contact form submission lifecycle. `Success` returns to `Idle` only via
/// an explicit reset; `Error` additionally allows immediate resubmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// Fetch progress for the portfolio content. Collections read as empty
/// (never absent) until `Ready`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Error(String),
}

/// The three collections rendered by the page. Treated as an immutable
/// snapshot by consumers; replaced wholesale on (re)load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub organization: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// Skills are grouped by category (e.g. "Frontend Development").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Self-assessed proficiency in percent.
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub experience: Option<String>,
}
