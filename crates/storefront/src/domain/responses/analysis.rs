use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured styling advice produced by the vision model for one upload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StylingSuggestion {
    pub success: bool,
    pub description: String,
    pub ai_analysis: AiAnalysis,
    pub suggested_combinations: Vec<SuggestedCombination>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AiAnalysis {
    pub detected_type: String,
    pub color_palette: String,
    pub style_vibe: String,
    pub occasion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuggestedCombination {
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
    pub reason: String,
}
