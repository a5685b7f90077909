//! Content workflow module

pub mod campaign;
pub mod entry_store;
pub mod entry_types;
pub mod orchestrator;

pub use campaign::CampaignWorkflow;
pub use entry_store::ContentStore;
pub use entry_types::*;
pub use orchestrator::DraftOrchestrator;
