//! Turns base64-encoded 16-bit PCM speech payloads into playable WAV files.
//!
//! ```
//! let samples = speechwav::samples_from_base64("AEAAwA==")?;
//! assert_eq!(samples, vec![0.5, -0.5]);
//! let wav = speechwav::encode_wav(&samples, 24000)?;
//! assert_eq!(wav.len(), 44 + 4);
//! # Ok::<(), speechwav::Error>(())
//! ```

mod encoding;
mod error;
mod pcm;
pub mod speech;
pub mod wav;

pub use crate::encoding::{decode_base64, encode_base64};
pub use crate::error::{AudioParameterError, Error, Result};
pub use crate::pcm::{f32_to_pcm16, pcm16_to_f32, quantize, samples_from_base64};
pub use crate::speech::{render_wav, SpeechConfig, SpeechSynthesizer, Voice};
pub use crate::wav::{encode_wav, WavHeader};
