//! Content entry aggregate and its projections

use crate::error::{Result, SocialError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use social_types::{CampaignInput, ContentStatus, Draft, Platform};
use std::fmt;

/// Strongly typed EntryId
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(String);

impl EntryId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn from_string(s: &str) -> std::result::Result<Self, String> {
        uuid::Uuid::parse_str(s.trim())
            .map(|_| Self(s.trim().to_string()))
            .map_err(|e| format!("Invalid EntryId format: {}", e))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stores the platform list in its comma-joined form
mod platform_list {
    use serde::{Deserialize, Deserializer, Serializer};
    use social_types::Platform;

    pub fn serialize<S: Serializer>(platforms: &[Platform], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&Platform::join(platforms))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Platform>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.split(',')
            .filter(|token| !token.is_empty())
            .map(|token| token.parse::<Platform>().map_err(serde::de::Error::custom))
            .collect()
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// A campaign's full record: inputs, generated drafts and lifecycle status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    id: EntryId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    status: ContentStatus,
    pub due_date: Option<NaiveDate>,
    pub topic: String,
    pub artist: Option<String>,
    pub style: Option<String>,
    pub tone: Option<String>,
    pub goal: Option<String>,
    pub event: Option<String>,
    pub hashtags: Option<String>,
    #[serde(with = "platform_list")]
    platforms: Vec<Platform>,
    drafts: Vec<Draft>,
}

impl ContentEntry {
    /// Reject inputs that can never become an entry
    pub fn validate_input(input: &CampaignInput) -> Result<()> {
        if input.topic.trim().is_empty() {
            return Err(SocialError::Validation("Topic is required".to_string()));
        }

        if input.platforms.is_empty() {
            return Err(SocialError::Validation(
                "At least one supported platform (youtube, instagram, tiktok) is required".to_string(),
            ));
        }

        Ok(())
    }

    /// Create a new entry in `draft` status.
    ///
    /// `drafts` must hold exactly one draft per requested platform, in request order.
    pub fn new(input: &CampaignInput, drafts: Vec<Draft>) -> Result<Self> {
        Self::validate_input(input)?;

        let matches_request = drafts.len() == input.platforms.len()
            && drafts
                .iter()
                .zip(&input.platforms)
                .all(|(draft, platform)| draft.platform == *platform);
        if !matches_request {
            return Err(SocialError::Validation(format!(
                "Drafts [{}] do not match requested platforms [{}]",
                drafts.iter().map(|d| d.platform.as_str()).collect::<Vec<_>>().join(","),
                Platform::join(&input.platforms)
            )));
        }

        let now = Utc::now();

        Ok(Self {
            id: EntryId::new(),
            created_at: now,
            updated_at: now,
            status: ContentStatus::Draft,
            due_date: input.due_date,
            topic: input.topic.trim().to_string(),
            artist: non_empty(&input.artist),
            style: non_empty(&input.style),
            tone: non_empty(&input.tone),
            goal: non_empty(&input.goal),
            event: non_empty(&input.event),
            hashtags: non_empty(&input.hashtags),
            platforms: input.platforms.clone(),
            drafts,
        })
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn status(&self) -> ContentStatus {
        self.status
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Drafts are fixed at creation and only readable afterwards
    pub fn drafts(&self) -> &[Draft] {
        &self.drafts
    }

    /// Move to `next` and refresh `updated_at`.
    ///
    /// Any recognized status is accepted from any state, `archived` included.
    pub fn transition_to(&mut self, next: ContentStatus) {
        self.status = next;
        self.updated_at = Utc::now();
    }

    /// Projection for downstream automation.
    ///
    /// With a platform filter only that platform's draft is kept; entries
    /// without it yield `None`.
    pub fn export(&self, platform: Option<Platform>) -> Option<ExportRecord> {
        let drafts: Vec<Draft> = self
            .drafts
            .iter()
            .filter(|d| platform.map_or(true, |p| d.platform == p))
            .cloned()
            .collect();

        if platform.is_some() && drafts.is_empty() {
            return None;
        }

        Some(ExportRecord {
            id: self.id.clone(),
            topic: self.topic.clone(),
            due_date: self.due_date,
            status: self.status,
            artist: self.artist.clone(),
            style: self.style.clone(),
            platforms: self.platforms.clone(),
            drafts,
        })
    }
}

/// Flattened export projection of an entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub id: EntryId,
    pub topic: String,
    pub due_date: Option<NaiveDate>,
    pub status: ContentStatus,
    pub artist: Option<String>,
    pub style: Option<String>,
    pub platforms: Vec<Platform>,
    pub drafts: Vec<Draft>,
}

/// State count map for statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusCountMap {
    counts: std::collections::HashMap<ContentStatus, usize>,
}

impl StatusCountMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, status: ContentStatus) {
        *self.counts.entry(status).or_insert(0) += 1;
    }

    pub fn get(&self, status: ContentStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}
