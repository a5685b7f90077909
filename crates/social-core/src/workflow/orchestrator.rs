//! Draft orchestration: external generator first, templates as fallback

use crate::config::SocialConfig;
use crate::error::Result;
use crate::generators::{DraftGenerator, OpenAIDraftGenerator, TemplateDraftGenerator};
use social_types::{CampaignInput, Draft, Platform};

pub struct DraftOrchestrator {
    external: Option<Box<dyn DraftGenerator>>,
    fallback: TemplateDraftGenerator,
}

impl DraftOrchestrator {
    pub fn new(external: Option<Box<dyn DraftGenerator>>) -> Self {
        Self {
            external,
            fallback: TemplateDraftGenerator::new(),
        }
    }

    /// Orchestrator that never leaves the process
    pub fn template_only() -> Self {
        Self::new(None)
    }

    /// Wire the external generator only when a credential is configured.
    ///
    /// A generator that cannot be built leaves the templates as the only source.
    pub fn from_config(config: &SocialConfig) -> Self {
        let external = config
            .openai
            .as_ref()
            .and_then(|openai| Self::usable(OpenAIDraftGenerator::new(openai.clone())));

        Self::new(external)
    }

    fn usable<G: DraftGenerator + 'static>(built: Result<G>) -> Option<Box<dyn DraftGenerator>> {
        match built {
            Ok(generator) => {
                log::debug!("External drafting available via {}", generator.name());
                Some(Box::new(generator))
            }
            Err(e) => {
                log::warn!("External drafting disabled, using templates: {}", e);
                None
            }
        }
    }

    pub fn external_available(&self) -> bool {
        self.external.is_some()
    }

    /// One draft per platform, in request order.
    ///
    /// With `use_external` set and a generator configured, each platform gets
    /// at most one external attempt before falling back to templates.
    pub async fn build_drafts(
        &self,
        platforms: &[Platform],
        input: &CampaignInput,
        use_external: bool,
    ) -> Vec<Draft> {
        if use_external && self.external.is_none() {
            log::warn!("External drafting requested but no credential is configured; using templates");
        }

        let external = self.external.as_deref().filter(|_| use_external);
        let mut drafts = Vec::with_capacity(platforms.len());

        for &platform in platforms {
            let generated = match external {
                Some(generator) => generator.generate(platform, input).await,
                None => None,
            };

            let draft = match generated {
                Some(draft) => {
                    log::info!("Drafted {} via {}", platform, external.map(|g| g.name()).unwrap_or("external"));
                    draft
                }
                None => {
                    log::debug!("Drafting {} via {}", platform, self.fallback.name());
                    self.fallback.draft(platform, input)
                }
            };

            drafts.push(draft);
        }

        drafts
    }
}
