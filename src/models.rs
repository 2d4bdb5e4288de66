//! Frontend Models
//!
//! Reply payloads sent by the server and small value types shared by the
//! components.

use serde::Deserialize;
use std::str::FromStr;

/// Review submission reply: markup for the reviews region
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewReply {
    pub html: String,
}

/// Toggle submission reply
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToggleReply {
    pub status: String,
    pub is_bookmarked: Option<bool>,
    pub is_visited: Option<bool>,
}

impl ToggleReply {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Kind of toggle a form performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Bookmark,
    Visited,
}

impl Interaction {
    /// Attribute value used in `data-interaction`
    pub fn as_str(&self) -> &'static str {
        match self {
            Interaction::Bookmark => "bookmark",
            Interaction::Visited => "visited",
        }
    }

    /// Guess the kind from an action URL such as `/toggle_bookmark/4/`.
    ///
    /// The `toggle_*` endpoint names win over bare words, so
    /// `/bookmarks/5/toggle_visited/` is a visited toggle.
    pub fn from_action(action: &str) -> Option<Self> {
        let action = action.to_ascii_lowercase();
        if action.contains("toggle_visited") {
            Some(Interaction::Visited)
        } else if action.contains("toggle_bookmark") {
            Some(Interaction::Bookmark)
        } else if action.contains("visited") {
            Some(Interaction::Visited)
        } else if action.contains("bookmark") {
            Some(Interaction::Bookmark)
        } else {
            None
        }
    }
}

impl FromStr for Interaction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bookmark" => Ok(Interaction::Bookmark),
            "visited" => Ok(Interaction::Visited),
            other => Err(format!("unknown interaction: {}", other)),
        }
    }
}

/// Notification level, named after the Bootstrap contextual colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Primary,
    Secondary,
    Success,
    #[default]
    Danger,
    Warning,
    Info,
    Light,
    Dark,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Primary => "primary",
            Severity::Secondary => "secondary",
            Severity::Success => "success",
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Light => "light",
            Severity::Dark => "dark",
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(Severity::Primary),
            "secondary" => Ok(Severity::Secondary),
            "success" => Ok(Severity::Success),
            "danger" => Ok(Severity::Danger),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "light" => Ok(Severity::Light),
            "dark" => Ok(Severity::Dark),
            other => Err(format!("unknown severity: {}", other)),
        }
    }
}

/// Leading-integer parse used for rank attributes: `" 4"` and `"4.5"` are 4,
/// `"abc"` and `""` are not numbers.
pub fn parse_rank(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}
