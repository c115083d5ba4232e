//! Boundary types for the speech-synthesis side of the pipeline.
//!
//! The crate never talks to a speech service itself. Callers implement
//! [`SpeechSynthesizer`] on top of whatever client they use and hand it,
//! together with a [`SpeechConfig`], to [`render_wav`].

use crate::error::{Error, Result};
use crate::pcm::samples_from_base64;
use crate::wav::encode_wav;
use std::env;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-tts";
pub const DEFAULT_SAMPLE_RATE: u32 = 24000;
pub const DEFAULT_CHAR_LIMIT: usize = 4000;
pub const API_KEY_VAR: &str = "API_KEY";

/// Prebuilt voice presets offered by the speech service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voice {
    Kore,
    Puck,
    Charon,
    Fenrir,
    Zephyr,
}

impl Voice {
    pub const ALL: [Voice; 5] = [
        Voice::Kore,
        Voice::Puck,
        Voice::Charon,
        Voice::Fenrir,
        Voice::Zephyr,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Voice::Kore => "Kore",
            Voice::Puck => "Puck",
            Voice::Charon => "Charon",
            Voice::Fenrir => "Fenrir",
            Voice::Zephyr => "Zephyr",
        }
    }
}

impl Default for Voice {
    fn default() -> Self {
        Voice::Kore
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Voice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Voice::ALL
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownVoice(s.to_string()))
    }
}

/// Settings for one speech client, owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechConfig {
    pub api_key: String,
    pub model: String,
    pub voice: Voice,
    /// Rate of the PCM the service returns.
    pub sample_rate: u32,
    pub char_limit: usize,
}

impl SpeechConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        SpeechConfig {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            voice: Voice::default(),
            sample_rate: DEFAULT_SAMPLE_RATE,
            char_limit: DEFAULT_CHAR_LIMIT,
        }
    }

    /// Builds a config from the `API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        Self::from_api_key(env::var(API_KEY_VAR).ok())
    }

    fn from_api_key(key: Option<String>) -> Result<Self> {
        match key {
            Some(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(Error::MissingApiKey),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_voice(mut self, voice: Voice) -> Self {
        self.voice = voice;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_char_limit(mut self, char_limit: usize) -> Self {
        self.char_limit = char_limit;
        self
    }
}

/// Plain text pulled out of a document, plus how many pages it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentText {
    pub text: String,
    pub page_count: usize,
}

/// Something that turns text into base64-encoded 16-bit mono PCM.
pub trait SpeechSynthesizer {
    fn synthesize(&self, text: &str, voice: Voice) -> Result<String>;
}

impl<'a, T: SpeechSynthesizer + ?Sized> SpeechSynthesizer for &'a T {
    fn synthesize(&self, text: &str, voice: Voice) -> Result<String> {
        (**self).synthesize(text, voice)
    }
}

/// Cuts `text` down to at most `limit` characters.
///
/// The remainder is dropped, not queued for a later request.
pub fn limit_text(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => {
            tracing::warn!(
                chars = text.chars().count(),
                limit,
                "text too long, truncating before synthesis"
            );
            &text[..end]
        }
        None => text,
    }
}

/// Synthesizes `text` and packages the result as a WAV file.
pub fn render_wav<S: SpeechSynthesizer>(
    synth: &S,
    config: &SpeechConfig,
    text: &str,
) -> Result<Vec<u8>> {
    let text = limit_text(text.trim(), config.char_limit);
    if text.is_empty() {
        return Err(Error::EmptyText);
    }

    tracing::debug!(voice = %config.voice, model = %config.model, chars = text.len(), "synthesizing");
    let payload = synth.synthesize(text, config.voice)?;
    let payload = payload.trim();
    if payload.is_empty() {
        return Err(Error::NoAudioData);
    }

    let samples = samples_from_base64(payload)?;
    encode_wav(&samples, config.sample_rate)
}
