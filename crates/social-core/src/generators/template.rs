//! Rule-based draft templates
//!
//! Pure and deterministic: the same input always yields the same draft, which
//! makes this the generator of last resort.

use super::DraftGenerator;
use crate::constants::{BRAND_TAGS, DEFAULT_ARTIST, DEFAULT_GOAL, DEFAULT_STYLE, DEFAULT_TONE, SCENE_TAGS};
use crate::hashtags::{normalize_hashtags, normalize_hint};
use async_trait::async_trait;
use social_types::{CampaignInput, Draft, Platform};

const YOUTUBE_NOTES: &str =
    "YouTube thumbnail 16:9, on-image text within 6 words, confirm music/video source licensing.";
const INSTAGRAM_NOTES: &str =
    "Build the first 3 lines as the hook, keep the body within 2200 characters, prepare 3 story highlights.";
const TIKTOK_NOTES: &str =
    "Hook in the first 2-3 seconds with bold subtitles; one loopable 5-15s cut recommended.";

/// Campaign fields with defaults applied
struct Fields<'a> {
    topic: &'a str,
    artist: &'a str,
    style: &'a str,
    tone: &'a str,
    goal: &'a str,
    event: Option<&'a str>,
    due: Option<String>,
}

fn field<'a>(value: &'a Option<String>) -> Option<&'a str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl<'a> Fields<'a> {
    fn resolve(input: &'a CampaignInput) -> Self {
        Self {
            topic: input.topic.trim(),
            artist: field(&input.artist).unwrap_or(DEFAULT_ARTIST),
            style: field(&input.style).unwrap_or(DEFAULT_STYLE),
            tone: field(&input.tone).unwrap_or(DEFAULT_TONE),
            goal: field(&input.goal).unwrap_or(DEFAULT_GOAL),
            event: field(&input.event),
            due: input.due_date.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateDraftGenerator;

impl TemplateDraftGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Build the draft for one platform
    pub fn draft(&self, platform: Platform, input: &CampaignInput) -> Draft {
        let fields = Fields::resolve(input);
        let hashtags = Self::tag_pool(&fields, input.hashtags.as_deref());

        let (title, hook, caption, notes) = match platform {
            Platform::Youtube => Self::youtube(&fields),
            Platform::Instagram => Self::instagram(&fields, &hashtags),
            Platform::Tiktok => Self::tiktok(&fields, &hashtags),
        };

        Draft {
            platform,
            title,
            hook,
            caption,
            hashtags,
            publishing_notes: notes.to_string(),
            guide: platform.guide(),
        }
    }

    /// Branded tags, then style and artist tags, then scene tags, then user hints
    fn tag_pool(fields: &Fields<'_>, hint: Option<&str>) -> String {
        let mut pool: Vec<String> = BRAND_TAGS.iter().map(|t| t.to_string()).collect();
        pool.push(format!("#{}", fields.style));
        pool.push(format!("#{}", fields.artist));
        pool.extend(SCENE_TAGS.iter().map(|t| t.to_string()));

        if let Some(hint) = hint {
            pool.extend(normalize_hint(hint).split_whitespace().map(str::to_string));
        }

        normalize_hashtags(pool)
    }

    fn youtube(f: &Fields<'_>) -> (String, String, String, &'static str) {
        let title = format!("{} - {} | {} #CompassEnt", f.artist, f.topic, f.style);
        let hook = format!(
            "This week's highlight opens with a {} set in a {} mood",
            f.style, f.tone
        );

        let mut lines = vec![
            format!("Latest from {}: {}", f.artist, f.topic),
            format!("Mood: {} / Concept: {}", f.style, f.goal),
        ];
        if let Some(event) = f.event {
            lines.push(format!("Event: {}", event));
        }
        if let Some(due) = &f.due {
            lines.push(format!("Release date: {}", due));
        }
        lines.push(String::new());
        lines.push("Sound points covered in the video: bassline, mood switches, peak build".to_string());
        lines.push("Check out the original tracks and the mood board card too.".to_string());

        (title, hook, lines.join("\n"), YOUTUBE_NOTES)
    }

    fn instagram(f: &Fields<'_>, hashtags: &str) -> (String, String, String, &'static str) {
        let title = format!("[{}] {} Teaser", f.artist, f.topic);
        let hook = format!(
            "{} {} stage energy, straight in within a minute.",
            capitalize(f.tone),
            f.style
        );

        let mut lines = vec![
            hook.clone(),
            String::new(),
            format!("Today's keywords: {}, club mood, peak time, rhythm drop", f.style),
        ];

        let markers: Vec<String> = f
            .event
            .map(|event| format!("📍 {}", event))
            .into_iter()
            .chain(f.due.as_ref().map(|due| format!("🗓 {}", due)))
            .collect();
        if !markers.is_empty() {
            lines.push(markers.join(" "));
        }

        lines.push("Tonight's track: #NowPlaying / details in the pinned comment".to_string());
        lines.push(hashtags.to_string());

        (title, hook, lines.join("\n"), INSTAGRAM_NOTES)
    }

    fn tiktok(f: &Fields<'_>, hashtags: &str) -> (String, String, String, &'static str) {
        let title = format!("{} · {}", f.topic, f.artist);
        let hook = format!("{} vibes, hooked in 3 seconds! {} highlight", capitalize(f.style), f.artist);

        let mut lines = vec![hook.clone(), String::new(), format!("Today's vibe: {}", f.tone)];
        if let Some(event) = f.event {
            lines.push(format!("📍 {}", event));
        }
        if let Some(due) = &f.due {
            lines.push(format!("🗓 {}", due));
        }
        lines.push(hashtags.to_string());

        (title, hook, lines.join("\n"), TIKTOK_NOTES)
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[async_trait]
impl DraftGenerator for TemplateDraftGenerator {
    fn name(&self) -> &'static str {
        "template"
    }

    async fn generate(&self, platform: Platform, input: &CampaignInput) -> Option<Draft> {
        Some(self.draft(platform, input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn full_input() -> CampaignInput {
        CampaignInput {
            topic: "Friday Night Mix".to_string(),
            artist: Some("DJ Nova".to_string()),
            style: Some("deep house".to_string()),
            tone: Some("warm".to_string()),
            goal: Some("ticket sales".to_string()),
            event: Some("Seoul Beach Fest".to_string()),
            due_date: NaiveDate::from_ymd_opt(2026, 11, 20),
            hashtags: Some("summer, #festival".to_string()),
            platforms: vec![Platform::Youtube, Platform::Instagram, Platform::Tiktok],
        }
    }

    #[test]
    fn test_youtube_template() {
        let draft = TemplateDraftGenerator::new().draft(Platform::Youtube, &full_input());

        assert_eq!(draft.platform, Platform::Youtube);
        assert_eq!(draft.title, "DJ Nova - Friday Night Mix | deep house #CompassEnt");
        assert!(draft.hook.contains("deep house"));
        assert!(draft.hook.contains("warm"));
        assert!(draft.caption.contains("Latest from DJ Nova: Friday Night Mix"));
        assert!(draft.caption.contains("Concept: ticket sales"));
        assert!(draft.caption.contains("Event: Seoul Beach Fest"));
        assert!(draft.caption.contains("Release date: 2026-11-20"));
        assert!(draft.caption.ends_with("mood board card too."));
        assert_eq!(draft.publishing_notes, YOUTUBE_NOTES);
        assert_eq!(draft.guide, Platform::Youtube.guide());
    }

    #[test]
    fn test_instagram_template() {
        let draft = TemplateDraftGenerator::new().draft(Platform::Instagram, &full_input());

        assert_eq!(draft.title, "[DJ Nova] Friday Night Mix Teaser");
        assert!(draft.caption.starts_with(&draft.hook));
        assert!(draft.caption.contains("📍 Seoul Beach Fest 🗓 2026-11-20"));
        assert!(draft.caption.contains("#NowPlaying"));
        assert!(draft.caption.ends_with(&draft.hashtags));
        assert!(draft.publishing_notes.contains("2200"));
    }

    #[test]
    fn test_tiktok_template() {
        let draft = TemplateDraftGenerator::new().draft(Platform::Tiktok, &full_input());

        assert_eq!(draft.title, "Friday Night Mix · DJ Nova");
        assert!(draft.caption.starts_with(&draft.hook));
        assert!(draft.caption.contains("Today's vibe: warm"));
        assert!(draft.caption.contains("📍 Seoul Beach Fest\n🗓 2026-11-20\n"));
        assert!(draft.publishing_notes.contains("5-15s"));
    }

    #[test]
    fn test_defaults_applied_and_optional_lines_omitted() {
        let input = CampaignInput::new("Launch Night", vec![Platform::Youtube]);
        let generator = TemplateDraftGenerator::new();

        let youtube = generator.draft(Platform::Youtube, &input);
        assert_eq!(youtube.title, "Compass Ent - Launch Night | immersive EDM #CompassEnt");
        assert!(youtube.caption.contains("Concept: stronger fan connection"));
        assert!(!youtube.caption.contains("Event:"));
        assert!(!youtube.caption.contains("Release date:"));

        let tiktok = generator.draft(Platform::Tiktok, &input);
        assert!(tiktok.caption.contains("Today's vibe: trendy and bold"));
        assert!(!tiktok.caption.contains("📍"));
        assert!(!tiktok.caption.contains("🗓"));
        assert!(!tiktok.caption.contains("\n\n\n"));

        let instagram = generator.draft(Platform::Instagram, &input);
        assert!(!instagram.caption.contains("📍"));
        assert!(!instagram.caption.contains("🗓"));
    }

    #[test]
    fn test_empty_strings_fall_back_to_defaults() {
        let mut input = CampaignInput::new("Launch Night", vec![Platform::Tiktok]);
        input.artist = Some("   ".to_string());
        input.event = Some(String::new());

        let draft = TemplateDraftGenerator::new().draft(Platform::Tiktok, &input);
        assert_eq!(draft.title, "Launch Night · Compass Ent");
        assert!(!draft.caption.contains("📍"));
    }

    #[test]
    fn test_tag_pool() {
        let draft = TemplateDraftGenerator::new().draft(Platform::Instagram, &full_input());
        assert_eq!(
            draft.hashtags,
            "#CompassEnt #DJ #Party #Mix #Live #EDM #House #deephouse #DJNova \
             #Club #Nightlife #Music #summer #festival"
        );
    }

    #[test]
    fn test_hint_duplicates_brand_tags() {
        let mut input = CampaignInput::new("Launch Night", vec![Platform::Tiktok]);
        input.hashtags = Some("EDM,#Live, Party".to_string());

        let draft = TemplateDraftGenerator::new().draft(Platform::Tiktok, &input);
        assert_eq!(draft.hashtags.matches("#EDM").count(), 1);
        assert_eq!(draft.hashtags.matches("#Live").count(), 1);
        assert!(draft.hashtags.ends_with("#Music"));
    }

    #[test]
    fn test_deterministic_output() {
        let generator = TemplateDraftGenerator::new();
        let input = full_input();

        for platform in Platform::ALL {
            let first = serde_json::to_string(&generator.draft(platform, &input)).unwrap();
            let second = serde_json::to_string(&generator.draft(platform, &input)).unwrap();
            assert_eq!(first, second);
        }
    }
}
