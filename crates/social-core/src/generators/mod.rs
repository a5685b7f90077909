//! Draft generators
//!
//! Every generator answers the same question: given a platform and the
//! campaign inputs, is there a draft? The orchestrator tries them in priority
//! order and never needs to know which one answered.

pub mod openai;
pub mod template;

use async_trait::async_trait;
use social_types::{CampaignInput, Draft, Platform};

pub use openai::OpenAIDraftGenerator;
pub use template::TemplateDraftGenerator;

/// A source of platform drafts
#[async_trait]
pub trait DraftGenerator: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Produce a draft, or `None` when this generator has nothing usable
    async fn generate(&self, platform: Platform, input: &CampaignInput) -> Option<Draft>;
}
