//! # Theory Assistant
//!
//! The two external collaborators of the visualization: a conversational
//! assistant grounded in the theory paper, and speech synthesis for its
//! answers. Both are plain request/response clients; all failures are
//! converted into neutral user-visible signals at the chat boundary and
//! never touch simulation state.

mod chat;
mod gemini;
mod speech;

pub use chat::{ChatMessage, ChatRole, ChatSession, CONTACT_ERROR, WELCOME_MESSAGE};
pub use gemini::{AssistantError, TheoryAssistant, THEORY_CONTEXT};
pub use speech::{decode_pcm16, play, AudioClip, SpeechError, SPEECH_SAMPLE_RATE};
