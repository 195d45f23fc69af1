//! Voice search results and spoken command interpretation.

use super::{KeywordRule, KeywordTable};
use serde::Serialize;
use std::sync::LazyLock;

/// Page sections a voice command can scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Courses,
    Campus,
    About,
    Contact,
}

impl Section {
    /// Fragment anchor of the section on the landing page.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::Courses => "#courses",
            Section::Campus => "#campus",
            Section::About => "#about",
            Section::Contact => "#contact",
        }
    }
}

/// A navigation hit returned by `POST /api/voice-search`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceResult {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub target: &'static str,
    pub title: &'static str,
}

/// What the voice widget should do with a recognized phrase.
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceAction {
    ScrollTo(Section),
    DarkMode,
    LightMode,
    OpenChatbot,
    ShowHelp,
    /// No command matched; run a free-text search instead.
    Search(String),
}

static SEARCH_TABLE: LazyLock<KeywordTable<VoiceResult>> = LazyLock::new(|| {
    let nav = |keyword: &'static str, section: Section, title: &'static str| KeywordRule {
        keywords: vec![keyword],
        value: VoiceResult {
            kind: "navigation",
            target: section.anchor(),
            title,
        },
    };
    KeywordTable::new(vec![
        nav("course", Section::Courses, "Courses Section"),
        nav("campus", Section::Campus, "3D Campus Tour"),
        nav("contact", Section::Contact, "Contact Information"),
    ])
});

static COMMAND_TABLE: LazyLock<KeywordTable<VoiceAction>> = LazyLock::new(|| {
    let cmd = |keyword: &'static str, value: VoiceAction| KeywordRule {
        keywords: vec![keyword],
        value,
    };
    KeywordTable::new(vec![
        cmd("courses", VoiceAction::ScrollTo(Section::Courses)),
        cmd("course", VoiceAction::ScrollTo(Section::Courses)),
        cmd("campus", VoiceAction::ScrollTo(Section::Campus)),
        cmd("campus tour", VoiceAction::ScrollTo(Section::Campus)),
        cmd("about", VoiceAction::ScrollTo(Section::About)),
        cmd("contact", VoiceAction::ScrollTo(Section::Contact)),
        cmd("home", VoiceAction::ScrollTo(Section::Home)),
        cmd("dark mode", VoiceAction::DarkMode),
        cmd("light mode", VoiceAction::LightMode),
        cmd("chatbot", VoiceAction::OpenChatbot),
        cmd("chat", VoiceAction::OpenChatbot),
        cmd("help", VoiceAction::ShowHelp),
    ])
});

/// Every section the query mentions, each at most once, in table order.
pub fn voice_search(query: &str) -> Vec<VoiceResult> {
    SEARCH_TABLE.all_matches(query).cloned().collect()
}

/// Map a spoken phrase to a widget action. The first matching command wins.
pub fn interpret_command(phrase: &str) -> VoiceAction {
    COMMAND_TABLE
        .first_match(phrase)
        .cloned()
        .unwrap_or_else(|| VoiceAction::Search(phrase.trim().to_string()))
}
