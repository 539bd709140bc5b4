use crate::{
    abstract_trait::OutfitAnalysisServiceTrait,
    domain::responses::{AiAnalysis, StylingSuggestion, SuggestedCombination},
};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use shared::errors::ServiceError;
use tracing::{error, info};

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent";

const STYLIST_PROMPT: &str = r#"You are a professional stylist. Analyze this clothing item image.

1. First, IDENTIFY the item type (Top, Bottom, Shoes, or Outerwear).
2. Then, suggest exactly 3 items to complete the outfit based on this logic:
   - If it is a TOP (T-Shirt, Shirt, Hoodie) -> Suggest: [Pants/Jeans, Shoes, Jacket/Layer].
   - If it is a BOTTOM (Pants, Jeans, Skirt) -> Suggest: [Top/Shirt, Shoes, Accessory/Jacket].
   - If it is SHOES -> Suggest: [Pants/Jeans, Top/Shirt, Jacket/Accessory].
   - If it is OUTERWEAR (Jacket, Coat) -> Suggest: [Inner Top, Pants/Jeans, Shoes].

Return ONLY valid JSON with this structure (no markdown):
{
    "success": true,
    "description": "One sentence description of the upload.",
    "ai_analysis": {
        "detected_type": "Top/Bottom/Shoes/Outerwear",
        "color_palette": "Dominant color name",
        "style_vibe": "e.g. Casual, Formal, Streetwear",
        "occasion": "Best occasion to wear this"
    },
    "suggested_combinations": [
        {"type": "e.g. Jeans", "color": "e.g. Black", "reason": "Why it works"},
        {"type": "e.g. Sneakers", "color": "e.g. White", "reason": "Why it works"},
        {"type": "e.g. Jacket", "color": "e.g. Denim", "reason": "Why it works"}
    ]
}"#;

pub struct OutfitAnalysisService {
    client: reqwest::Client,
    api_key: String,
}

impl OutfitAnalysisService {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

/// The model is asked for raw JSON but routinely wraps it in a markdown code
/// fence anyway, so strip fences before parsing.
fn parse_suggestion(raw: &str) -> Result<StylingSuggestion, ServiceError> {
    let cleaned = raw.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    let parsed: ParsedSuggestion = serde_json::from_str(cleaned).map_err(|err| {
        error!("❌ Vision model returned unparseable JSON: {err}");
        ServiceError::Upstream("Vision model returned an unexpected response".to_string())
    })?;

    Ok(StylingSuggestion {
        success: true,
        description: parsed.description,
        ai_analysis: parsed.ai_analysis,
        suggested_combinations: parsed.suggested_combinations,
    })
}

#[derive(Deserialize)]
struct ParsedSuggestion {
    description: String,
    ai_analysis: AiAnalysis,
    #[serde(default)]
    suggested_combinations: Vec<SuggestedCombination>,
}

#[async_trait]
impl OutfitAnalysisServiceTrait for OutfitAnalysisService {
    async fn analyze(
        &self,
        mime_type: &str,
        image: &[u8],
    ) -> Result<StylingSuggestion, ServiceError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: STYLIST_PROMPT.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.to_string(),
                            data: STANDARD.encode(image),
                        },
                    },
                ],
            }],
        };

        let response = self
            .client
            .post(GEMINI_ENDPOINT)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                error!("❌ Vision request failed: {err}");
                ServiceError::Upstream(format!("Vision request failed: {err}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("❌ Vision model responded with HTTP {status}");
            return Err(ServiceError::Upstream(format!(
                "Vision model responded with HTTP {status}"
            )));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|err| {
            error!("❌ Failed to decode vision response: {err}");
            ServiceError::Upstream("Vision model returned an unexpected response".to_string())
        })?;

        let raw = payload
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| {
                error!("❌ Vision response carried no candidates");
                ServiceError::Upstream("Vision model returned no analysis".to_string())
            })?;

        let suggestion = parse_suggestion(raw)?;

        info!(
            "✅ Analyzed outfit image: {} / {}",
            suggestion.ai_analysis.detected_type, suggestion.ai_analysis.style_vibe
        );
        Ok(suggestion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "success": true,
        "description": "A classic blue denim jacket.",
        "ai_analysis": {
            "detected_type": "Outerwear",
            "color_palette": "Blue",
            "style_vibe": "Casual",
            "occasion": "Weekend outings"
        },
        "suggested_combinations": [
            {"type": "T-Shirt", "color": "White", "reason": "Clean contrast"},
            {"type": "Jeans", "color": "Black", "reason": "Avoids denim-on-denim"},
            {"type": "Sneakers", "color": "White", "reason": "Keeps it relaxed"}
        ]
    }"#;

    #[test]
    fn parses_plain_json() {
        let suggestion = parse_suggestion(SAMPLE).unwrap();
        assert!(suggestion.success);
        assert_eq!(suggestion.ai_analysis.detected_type, "Outerwear");
        assert_eq!(suggestion.suggested_combinations.len(), 3);
        assert_eq!(suggestion.suggested_combinations[1].kind, "Jeans");
    }

    #[test]
    fn strips_markdown_fences() {
        let fenced = format!("```json\n{SAMPLE}\n```");
        let suggestion = parse_suggestion(&fenced).unwrap();
        assert_eq!(suggestion.ai_analysis.color_palette, "Blue");
    }

    #[test]
    fn garbage_is_an_upstream_error() {
        let result = parse_suggestion("I cannot analyze this image.");
        assert!(matches!(result, Err(ServiceError::Upstream(_))));
    }
}
