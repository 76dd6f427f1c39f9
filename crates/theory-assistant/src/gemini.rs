//! Gemini client for theory questions and speech synthesis

use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Summary of the theory paper, prepended to every question so the model
/// answers inside the framework instead of general physics.
pub const THEORY_CONTEXT: &str = "\
R-QNT (Rama-Quantum Network Torsion) Theory Summary:
- Spacetime is a 3D elastic network of fields A, B, and C.
- Vacuum is A+B+C=0 (flat).
- Matter: Topological knots (Borromean links) in the network.
- Charge: Geometric chirality (Right-handed = Positive, Left-handed = Negative).
- Gravity: Restorative tension from \"string consumption\" in knots.
- R-QNT-C: c is constant, relativity emerges effectively.
- R-QNT-V: c varies with local network stiffness k (c_local = c0 * sqrt(k0/k_local)).
- Neutron: A proton knot neutralized by counter-torsion impact.
";

const SYSTEM_INSTRUCTION: &str = "You are a world-leading theoretical physicist specializing \
in the R-QNT framework. Explain complex concepts clearly but with mathematical rigor where requested.";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_CHAT_MODEL: &str = "gemini-3-pro-preview";
const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";
const THINKING_BUDGET: u32 = 16_000;
const TTS_VOICE: &str = "Kore";

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("response carried no usable payload")]
    EmptyReply,
    #[error("audio payload is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
}

// Request/response DTOs for the generateContent endpoint. Only the fields
// this client touches are modeled.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    data: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    speech_config: Option<SpeechConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig {
    voice_config: VoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig {
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig {
    voice_name: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateResponse {
    /// First text part of the first candidate.
    fn reply_text(&self) -> Option<&str> {
        self.first_parts()?
            .iter()
            .find_map(|part| part.text.as_deref())
    }

    /// First inline-data payload of the first candidate.
    fn inline_audio(&self) -> Option<&str> {
        self.first_parts()?
            .iter()
            .find_map(|part| part.inline_data.as_ref().map(|d| d.data.as_str()))
    }

    fn first_parts(&self) -> Option<&[Part]> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
    }
}

/// Client for the two research-lab collaborators.
pub struct TheoryAssistant {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    chat_model: String,
    tts_model: String,
}

impl TheoryAssistant {
    /// Build a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, AssistantError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| AssistantError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            tts_model: DEFAULT_TTS_MODEL.to_string(),
        }
    }

    /// Ask a free-text theory question. Returns the reply text.
    pub async fn ask(&self, prompt: &str) -> Result<String, AssistantError> {
        let request = GenerateRequest {
            contents: vec![text_content(format!(
                "Context: {THEORY_CONTEXT}\n\nUser Question: {prompt}"
            ))],
            system_instruction: Some(text_content(SYSTEM_INSTRUCTION.to_string())),
            generation_config: Some(GenerationConfig {
                thinking_config: Some(ThinkingConfig {
                    thinking_budget: THINKING_BUDGET,
                }),
                ..Default::default()
            }),
        };

        let response = self.generate(&self.chat_model, &request).await?;
        response
            .reply_text()
            .map(str::to_string)
            .ok_or(AssistantError::EmptyReply)
    }

    /// Synthesize speech for `text`. Returns raw little-endian 16-bit PCM
    /// mono at 24 kHz, already base64-decoded.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, AssistantError> {
        let request = GenerateRequest {
            contents: vec![text_content(format!(
                "Say in a professional academic voice: {text}"
            ))],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["AUDIO".to_string()]),
                speech_config: Some(SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: TTS_VOICE.to_string(),
                        },
                    },
                }),
                ..Default::default()
            }),
        };

        let response = self.generate(&self.tts_model, &request).await?;
        let encoded = response.inline_audio().ok_or(AssistantError::EmptyReply)?;
        Ok(base64::engine::general_purpose::STANDARD.decode(encoded)?)
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, AssistantError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

fn text_content(text: String) -> Content {
    Content {
        parts: vec![Part {
            text: Some(text),
            inline_data: None,
        }],
    }
}
