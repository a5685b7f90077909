/// Draft generation constants

/// Model used for external drafting when OPENAI_MODEL is not set
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Chat-completions API root when OPENAI_BASE_URL is not set
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Request timeout for the external generator
pub const DEFAULT_OPENAI_TIMEOUT_SECS: u64 = 60;

pub const OPENAI_TEMPERATURE: f64 = 0.7;

// Fallbacks for campaign fields left empty
pub const DEFAULT_ARTIST: &str = "Compass Ent";
pub const DEFAULT_STYLE: &str = "immersive EDM";
pub const DEFAULT_TONE: &str = "trendy and bold";
pub const DEFAULT_GOAL: &str = "stronger fan connection";

/// Branded tags every template draft starts from
pub const BRAND_TAGS: [&str; 7] = ["#CompassEnt", "#DJ", "#Party", "#Mix", "#Live", "#EDM", "#House"];

/// Scene tags appended after the style and artist tags
pub const SCENE_TAGS: [&str; 3] = ["#Club", "#Nightlife", "#Music"];
