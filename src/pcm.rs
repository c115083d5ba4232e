use crate::encoding::decode_base64;
use crate::error::{AudioParameterError, Error, Result};
use byteorder::{ByteOrder, LittleEndian};

/// Bytes per 16-bit PCM sample.
pub const BYTES_PER_SAMPLE: usize = 2;

/// Interprets `bytes` as 16-bit signed little-endian PCM and scales each
/// sample by 1/32768, so the output lies in [-1.0, 32767/32768].
pub fn pcm16_to_f32(bytes: &[u8]) -> Result<Vec<f32>> {
    if bytes.len() % BYTES_PER_SAMPLE != 0 {
        return Err(Error::InvalidPcmLength(bytes.len()));
    }

    let samples = bytes
        .chunks_exact(BYTES_PER_SAMPLE)
        .map(|chunk| f32::from(LittleEndian::read_i16(chunk)) / 32768.0)
        .collect::<Vec<_>>();
    tracing::debug!(samples = samples.len(), "normalized pcm16 payload");
    Ok(samples)
}

/// Quantizes one unit-range sample to 16 bits.
///
/// The input is clamped to [-1.0, 1.0]. Negative values scale by 0x8000 and
/// the rest by 0x7FFF, then truncate toward zero.
pub fn quantize(sample: f32) -> i16 {
    let s = sample.max(-1.0).min(1.0);
    let scaled = if s < 0.0 {
        s * f32::from(0x8000u16)
    } else {
        s * f32::from(0x7FFFu16)
    };
    scaled as i16
}

pub(crate) fn check_finite(samples: &[f32]) -> Result<()> {
    match samples.iter().position(|s| !s.is_finite()) {
        Some(index) => Err(AudioParameterError::NonFiniteSample { index }.into()),
        None => Ok(()),
    }
}

/// Quantizes float samples back into 16-bit little-endian PCM bytes.
pub fn f32_to_pcm16(samples: &[f32]) -> Result<Vec<u8>> {
    check_finite(samples)?;
    let mut bytes = vec![0u8; samples.len() * BYTES_PER_SAMPLE];
    write_samples(samples, &mut bytes);
    Ok(bytes)
}

/// `out` must hold exactly two bytes per sample.
pub(crate) fn write_samples(samples: &[f32], out: &mut [u8]) {
    for (sample, chunk) in samples.iter().zip(out.chunks_exact_mut(BYTES_PER_SAMPLE)) {
        LittleEndian::write_i16(chunk, quantize(*sample));
    }
}

/// Decodes a base64 speech payload straight into normalized samples.
pub fn samples_from_base64(payload: &str) -> Result<Vec<f32>> {
    let bytes = decode_base64(payload)?;
    pcm16_to_f32(&bytes)
}
