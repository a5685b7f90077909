//! Draft generation through an OpenAI-compatible chat-completions API

use super::DraftGenerator;
use crate::config::OpenAIConfig;
use crate::constants::OPENAI_TEMPERATURE;
use crate::error::{Result, SocialError};
use crate::hashtags::normalize_hashtags;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;
use social_types::{CampaignInput, Draft, Platform};

const SYSTEM_PROMPT: &str = "You are a hands-on social media marketer.";

/// Flat record the model is asked to return
#[derive(Debug, Deserialize)]
struct GeneratedDraft {
    #[serde(default)]
    platform: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    hook: String,
    #[serde(default)]
    caption: String,
    #[serde(default)]
    hashtags: GeneratedHashtags,
    #[serde(default)]
    publishing_notes: String,
}

/// Models return hashtags either as one string or as a list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GeneratedHashtags {
    Text(String),
    List(Vec<String>),
}

impl Default for GeneratedHashtags {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl GeneratedHashtags {
    fn normalized(&self) -> String {
        match self {
            Self::Text(text) => normalize_hashtags(text.split(|c: char| c.is_whitespace() || c == ',')),
            Self::List(tags) => normalize_hashtags(tags),
        }
    }
}

pub struct OpenAIDraftGenerator {
    config: OpenAIConfig,
    http_client: HttpClient,
}

impl OpenAIDraftGenerator {
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Instruction embedding every campaign field and the expected JSON shape
    pub fn build_prompt(platform: Platform, input: &CampaignInput) -> String {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let due = input
            .due_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        format!(
            "You are the dedicated social media agent for Compass Ent.\n\
            Write exactly one {platform} post draft as JSON for the brief below.\n\
            Output only JSON that can be parsed as-is.\n\
            \n\
            Brief:\n\
            - Platform: {platform}\n\
            - Topic: {topic}\n\
            - Artist/brand: {artist}\n\
            - Style: {style}\n\
            - Tone: {tone}\n\
            - Goal: {goal}\n\
            - Event: {event}\n\
            - Planned upload date: {due}\n\
            - Hashtag hints: {hashtags}\n\
            \n\
            Output JSON schema:\n\
            {{\n  \
              \"platform\": \"{platform}\",\n  \
              \"title\": \"title\",\n  \
              \"hook\": \"hook\",\n  \
              \"caption\": \"body\",\n  \
              \"hashtags\": \"#tag1 #tag2 ...\",\n  \
              \"publishing_notes\": \"upload cautions / ideas\"\n\
            }}\n",
            platform = platform,
            topic = input.topic,
            artist = text(&input.artist),
            style = text(&input.style),
            tone = text(&input.tone),
            goal = text(&input.goal),
            event = text(&input.event),
            due = due,
            hashtags = text(&input.hashtags),
        )
    }

    /// Call the model and validate its answer
    pub async fn request_draft(&self, platform: Platform, input: &CampaignInput) -> Result<Draft> {
        let prompt = Self::build_prompt(platform, input);

        let response = self
            .http_client
            .post(self.config.chat_completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&json!({
                "model": self.config.model,
                "messages": [
                    {
                        "role": "system",
                        "content": SYSTEM_PROMPT
                    },
                    {
                        "role": "user",
                        "content": prompt
                    }
                ],
                "temperature": OPENAI_TEMPERATURE
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SocialError::ServiceUnavailable(format!(
                "OpenAI API returned {}",
                response.status()
            )));
        }

        let result: serde_json::Value = response.json().await?;

        let content = result["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| SocialError::Processing("No content in OpenAI response".to_string()))?;

        Self::parse_draft(platform, content)
    }

    /// Accept a flat JSON object with a non-empty `platform` field.
    ///
    /// The platform is overwritten with the requested one and the static
    /// guide is attached.
    pub fn parse_draft(platform: Platform, content: &str) -> Result<Draft> {
        let value: serde_json::Value = serde_json::from_str(content.trim())
            .map_err(|e| SocialError::Deserialization(format!("Model output is not JSON: {}", e)))?;
        if !value.is_object() {
            return Err(SocialError::Deserialization(
                "Model output is not a JSON object".to_string(),
            ));
        }

        let generated: GeneratedDraft = serde_json::from_value(value)
            .map_err(|e| SocialError::Deserialization(format!("Model output is not a draft object: {}", e)))?;

        let echoed = generated.platform.as_deref().map(str::trim).unwrap_or("");
        if echoed.is_empty() {
            return Err(SocialError::Processing(
                "Model output is missing the platform field".to_string(),
            ));
        }
        if echoed != platform.as_str() {
            log::debug!("Model answered for '{}' while drafting {}; overriding", echoed, platform);
        }

        Ok(Draft {
            platform,
            title: generated.title,
            hook: generated.hook,
            caption: generated.caption,
            hashtags: generated.hashtags.normalized(),
            publishing_notes: generated.publishing_notes,
            guide: platform.guide(),
        })
    }
}

#[async_trait]
impl DraftGenerator for OpenAIDraftGenerator {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn generate(&self, platform: Platform, input: &CampaignInput) -> Option<Draft> {
        match self.request_draft(platform, input).await {
            Ok(draft) => Some(draft),
            Err(e) => {
                log::warn!("External draft for {} unavailable: {}", platform, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_prompt_embeds_all_fields() {
        let input = CampaignInput {
            topic: "Sunset Session".to_string(),
            artist: Some("DJ Nova".to_string()),
            style: Some("melodic techno".to_string()),
            tone: Some("dreamy".to_string()),
            goal: Some("new followers".to_string()),
            event: Some("Harbor Stage".to_string()),
            due_date: NaiveDate::from_ymd_opt(2026, 12, 1),
            hashtags: Some("sunset,techno".to_string()),
            platforms: vec![Platform::Instagram],
        };

        let prompt = OpenAIDraftGenerator::build_prompt(Platform::Instagram, &input);

        for expected in [
            "Platform: instagram",
            "Topic: Sunset Session",
            "Artist/brand: DJ Nova",
            "Style: melodic techno",
            "Tone: dreamy",
            "Goal: new followers",
            "Event: Harbor Stage",
            "Planned upload date: 2026-12-01",
            "Hashtag hints: sunset,techno",
            "\"platform\": \"instagram\"",
            "\"publishing_notes\"",
        ] {
            assert!(prompt.contains(expected), "prompt should contain {:?}", expected);
        }
    }

    #[test]
    fn test_parse_overrides_platform_and_attaches_guide() {
        let content = r#"{
            "platform": "youtube",
            "title": "Teaser",
            "hook": "Drop incoming",
            "caption": "See you there",
            "hashtags": "edm #Live edm",
            "publishing_notes": "Post at 7pm"
        }"#;

        let draft = OpenAIDraftGenerator::parse_draft(Platform::Tiktok, content).unwrap();

        assert_eq!(draft.platform, Platform::Tiktok);
        assert_eq!(draft.guide, Platform::Tiktok.guide());
        assert_eq!(draft.title, "Teaser");
        assert_eq!(draft.hashtags, "#edm #Live");
    }

    #[test]
    fn test_parse_accepts_hashtag_list() {
        let content = r##"{"platform": "tiktok", "hashtags": ["#a", "b", "#a"]}"##;
        let draft = OpenAIDraftGenerator::parse_draft(Platform::Tiktok, content).unwrap();
        assert_eq!(draft.hashtags, "#a #b");
        assert_eq!(draft.caption, "");
    }

    #[test]
    fn test_parse_rejects_missing_platform() {
        let content = r#"{"title": "No platform here"}"#;
        assert!(OpenAIDraftGenerator::parse_draft(Platform::Youtube, content).is_err());

        let content = r#"{"platform": "", "title": "Empty platform"}"#;
        assert!(OpenAIDraftGenerator::parse_draft(Platform::Youtube, content).is_err());
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(OpenAIDraftGenerator::parse_draft(Platform::Youtube, "Sure! Here is your post").is_err());
        assert!(OpenAIDraftGenerator::parse_draft(Platform::Youtube, "[1, 2, 3]").is_err());
    }

    #[test]
    fn test_parse_rejects_nested_fields() {
        let content = r#"{"platform": "youtube", "title": {"text": "nested"}}"#;
        assert!(OpenAIDraftGenerator::parse_draft(Platform::Youtube, content).is_err());
    }
}
