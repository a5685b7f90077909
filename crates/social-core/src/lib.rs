//! Social Agent Core Library
//!
//! Draft generation and content lifecycle for the Compass Ent social agent:
//! hashtag normalization, template and external draft generators, the draft
//! orchestrator and the file-backed entry store.

pub mod config;
pub mod constants;
pub mod error;
pub mod generators;
pub mod hashtags;
pub mod paths;
pub mod workflow;

// Re-export main types for easy access
pub use config::{OpenAIConfig, SocialConfig, StoreConfig};
pub use error::{Result, SocialError};
pub use hashtags::normalize_hashtags;

pub use generators::{DraftGenerator, OpenAIDraftGenerator, TemplateDraftGenerator};

pub use workflow::{
    CampaignWorkflow,
    ContentEntry,
    ContentStore,
    DraftOrchestrator,
    EntryId,
    ExportRecord,
    StatusCountMap,
};

pub use social_types::{CampaignInput, ContentStatus, Draft, ParseError, Platform, PlatformGuide};
