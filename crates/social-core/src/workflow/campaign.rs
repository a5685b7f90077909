//! Campaign workflow: validate, draft, persist

use super::entry_store::ContentStore;
use super::entry_types::ContentEntry;
use super::orchestrator::DraftOrchestrator;
use crate::config::SocialConfig;
use crate::error::Result;
use social_types::CampaignInput;

/// Single entry point tying draft generation to the entry store
pub struct CampaignWorkflow {
    orchestrator: DraftOrchestrator,
    store: ContentStore,
}

impl CampaignWorkflow {
    pub fn new(orchestrator: DraftOrchestrator, store: ContentStore) -> Self {
        Self { orchestrator, store }
    }

    pub fn from_config(config: &SocialConfig) -> Result<Self> {
        let orchestrator = DraftOrchestrator::from_config(config);
        let store = ContentStore::new(&config.store.root)?;
        log::debug!("Using entry store at {}", store.root_path().display());

        Ok(Self::new(orchestrator, store))
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn orchestrator(&self) -> &DraftOrchestrator {
        &self.orchestrator
    }

    /// Generate drafts for every requested platform and store them as a new entry.
    ///
    /// Inputs are validated before any generator runs, so a rejected request
    /// neither calls out nor writes anything.
    pub async fn create_entry(&self, input: &CampaignInput, use_external: bool) -> Result<ContentEntry> {
        ContentEntry::validate_input(input)?;

        let drafts = self
            .orchestrator
            .build_drafts(&input.platforms, input, use_external)
            .await;

        self.store.create_entry(input, drafts)
    }
}
