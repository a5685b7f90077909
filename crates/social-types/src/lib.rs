//! Shared types for the social content agent
//!
//! Closed enumerations (platform, status) and the value records that travel
//! between the generators, the store and the command surface. Strings only
//! appear at the marshaling boundary (`Display` / `FromStr` / serde).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported publishing platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Instagram,
    Tiktok,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Youtube, Platform::Instagram, Platform::Tiktok];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Instagram => "instagram",
            Self::Tiktok => "tiktok",
        }
    }

    /// Parse a comma-separated platform request.
    ///
    /// Tokens are trimmed and lowercased; unknown tokens are dropped and
    /// repeated platforms collapse onto their first occurrence.
    pub fn parse_list(value: &str) -> Vec<Platform> {
        let mut platforms = Vec::new();
        for token in value.split(',') {
            if let Ok(platform) = token.trim().to_lowercase().parse::<Platform>() {
                if !platforms.contains(&platform) {
                    platforms.push(platform);
                }
            }
        }
        platforms
    }

    /// Join platforms into the comma-separated storage form
    pub fn join(platforms: &[Platform]) -> String {
        platforms
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Static style reference for this platform
    pub fn guide(&self) -> PlatformGuide {
        let (title_limit, desc_limit, tone) = match self {
            Self::Youtube => (
                "100 characters or fewer",
                "5000 characters or fewer",
                "Branding, events and artist highlights; story-driven",
            ),
            Self::Instagram => (
                "3-line hook first, body within 2200 characters",
                "2200 characters or fewer",
                "Visual-first; short sensory lines plus hashtags",
            ),
            Self::Tiktok => (
                "Hook within 150 characters, caption short and direct",
                "1500 characters or fewer",
                "Short rhythmic copy that invites participation",
            ),
        };

        PlatformGuide {
            title_limit: title_limit.to_string(),
            desc_limit: desc_limit.to_string(),
            tone: tone.to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "youtube" => Ok(Self::Youtube),
            "instagram" => Ok(Self::Instagram),
            "tiktok" => Ok(Self::Tiktok),
            other => Err(ParseError::UnknownPlatform(other.to_string())),
        }
    }
}

/// Lifecycle status of a content entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Approved,
    Posted,
    Archived,
}

impl ContentStatus {
    pub const ALL: [ContentStatus; 4] = [
        ContentStatus::Draft,
        ContentStatus::Approved,
        ContentStatus::Posted,
        ContentStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Approved => "approved",
            Self::Posted => "posted",
            Self::Archived => "archived",
        }
    }
}

impl Default for ContentStatus {
    fn default() -> Self {
        Self::Draft
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ContentStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "approved" => Ok(Self::Approved),
            "posted" => Ok(Self::Posted),
            "archived" => Ok(Self::Archived),
            other => Err(ParseError::UnknownStatus(other.to_string())),
        }
    }
}

/// Rejected string values at the marshaling boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unsupported platform '{0}' (expected youtube, instagram or tiktok)")]
    UnknownPlatform(String),

    #[error("unrecognized status '{0}' (expected draft, approved, posted or archived)")]
    UnknownStatus(String),
}

/// Per-platform style and length reference attached to every draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformGuide {
    pub title_limit: String,
    pub desc_limit: String,
    pub tone: String,
}

/// One platform-specific generated post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub platform: Platform,
    pub title: String,
    pub hook: String,
    pub caption: String,
    pub hashtags: String,
    pub publishing_notes: String,
    pub guide: PlatformGuide,
}

/// Campaign inputs a set of drafts is generated from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignInput {
    pub topic: String,
    pub artist: Option<String>,
    pub style: Option<String>,
    pub tone: Option<String>,
    pub goal: Option<String>,
    pub event: Option<String>,
    pub due_date: Option<NaiveDate>,
    /// Raw comma-separated hashtag hints
    pub hashtags: Option<String>,
    pub platforms: Vec<Platform>,
}

impl CampaignInput {
    pub fn new(topic: impl Into<String>, platforms: Vec<Platform>) -> Self {
        Self {
            topic: topic.into(),
            platforms,
            ..Default::default()
        }
    }
}
