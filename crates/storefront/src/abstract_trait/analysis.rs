use crate::domain::responses::StylingSuggestion;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOutfitAnalysisService = Arc<dyn OutfitAnalysisServiceTrait + Send + Sync>;

#[async_trait]
pub trait OutfitAnalysisServiceTrait {
    /// Sends one clothing image to the vision model and returns its styling
    /// suggestion. The order core never depends on this call.
    async fn analyze(&self, mime_type: &str, image: &[u8])
    -> Result<StylingSuggestion, ServiceError>;
}
