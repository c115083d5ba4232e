use crate::error::{AudioParameterError, Result};
use crate::pcm::{check_finite, write_samples, BYTES_PER_SAMPLE};
use byteorder::{ByteOrder, LittleEndian};
use std::convert::TryFrom;

pub const HEADER_LEN: usize = 44;
pub const NUM_CHANNELS: u16 = 1;
pub const BITS_PER_SAMPLE: u16 = 16;
pub const FORMAT_PCM: u16 = 1;

const FMT_CHUNK_LEN: u32 = 16;
// RIFF size counts everything after the 8-byte RIFF preamble.
const RIFF_OVERHEAD: u32 = HEADER_LEN as u32 - 8;

/// Header of a mono 16-bit PCM WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    sample_rate: u32,
    data_size: u32,
}

impl WavHeader {
    pub fn new(sample_rate: u32, num_samples: usize) -> Result<Self> {
        if sample_rate == 0 {
            return Err(AudioParameterError::ZeroSampleRate.into());
        }
        if sample_rate.checked_mul(u32::from(Self::block_align())).is_none() {
            return Err(AudioParameterError::ByteRateOverflow(sample_rate).into());
        }
        let data_size = num_samples
            .checked_mul(BYTES_PER_SAMPLE)
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| n.checked_add(RIFF_OVERHEAD).is_some())
            .ok_or(AudioParameterError::TooManySamples(num_samples))?;

        Ok(WavHeader {
            sample_rate,
            data_size,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn num_samples(&self) -> usize {
        self.data_size as usize / BYTES_PER_SAMPLE
    }

    pub fn data_size(&self) -> u32 {
        self.data_size
    }

    pub fn chunk_size(&self) -> u32 {
        RIFF_OVERHEAD + self.data_size
    }

    pub fn block_align() -> u16 {
        NUM_CHANNELS * (BITS_PER_SAMPLE / 8)
    }

    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(Self::block_align())
    }

    /// Total length of the finished file.
    pub fn file_len(&self) -> usize {
        HEADER_LEN + self.data_size as usize
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        self.write_to(&mut buf);
        buf
    }

    fn write_to(&self, buf: &mut [u8]) {
        buf[0..4].copy_from_slice(b"RIFF");
        LittleEndian::write_u32(&mut buf[4..8], self.chunk_size());
        buf[8..12].copy_from_slice(b"WAVE");

        buf[12..16].copy_from_slice(b"fmt ");
        LittleEndian::write_u32(&mut buf[16..20], FMT_CHUNK_LEN);
        LittleEndian::write_u16(&mut buf[20..22], FORMAT_PCM);
        LittleEndian::write_u16(&mut buf[22..24], NUM_CHANNELS);
        LittleEndian::write_u32(&mut buf[24..28], self.sample_rate);
        LittleEndian::write_u32(&mut buf[28..32], self.byte_rate());
        LittleEndian::write_u16(&mut buf[32..34], Self::block_align());
        LittleEndian::write_u16(&mut buf[34..36], BITS_PER_SAMPLE);

        buf[36..40].copy_from_slice(b"data");
        LittleEndian::write_u32(&mut buf[40..44], self.data_size);
    }
}

/// Encodes mono float samples into a complete 16-bit PCM WAV file.
///
/// Samples outside [-1.0, 1.0] are clamped. NaN or infinite samples and a
/// zero sample rate are rejected before anything is written.
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>> {
    let header = WavHeader::new(sample_rate, samples.len())?;
    check_finite(samples)?;

    let mut wav = vec![0u8; header.file_len()];
    header.write_to(&mut wav[..HEADER_LEN]);
    write_samples(samples, &mut wav[HEADER_LEN..]);

    tracing::debug!(
        samples = samples.len(),
        sample_rate,
        bytes = wav.len(),
        "encoded wav"
    );
    Ok(wav)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn u16_at(buf: &[u8], offset: usize) -> u16 {
        LittleEndian::read_u16(&buf[offset..offset + 2])
    }

    fn u32_at(buf: &[u8], offset: usize) -> u32 {
        LittleEndian::read_u32(&buf[offset..offset + 4])
    }

    fn i16_at(buf: &[u8], offset: usize) -> i16 {
        LittleEndian::read_i16(&buf[offset..offset + 2])
    }

    #[test]
    fn header_layout() {
        let wav = encode_wav(&[0.0, 0.5, -0.5, 1.0, -1.0], 24000).unwrap();
        assert_eq!(wav.len(), 54);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(u32_at(&wav, 4), 46);
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(u32_at(&wav, 16), 16);
        assert_eq!(u16_at(&wav, 20), 1);
        assert_eq!(u16_at(&wav, 22), 1);
        assert_eq!(u32_at(&wav, 24), 24000);
        assert_eq!(u32_at(&wav, 28), 48000);
        assert_eq!(u16_at(&wav, 32), 2);
        assert_eq!(u16_at(&wav, 34), 16);
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(u32_at(&wav, 40), 10);

        let data: Vec<i16> = (0..5).map(|i| i16_at(&wav, HEADER_LEN + 2 * i)).collect();
        assert_eq!(data, vec![0, 16383, -16384, 32767, -32768]);
    }

    #[test]
    fn lengths_track_sample_count() {
        for n in &[0usize, 1, 2, 7, 1000] {
            let samples = vec![0.25f32; *n];
            let wav = encode_wav(&samples, 8000).unwrap();
            assert_eq!(wav.len(), HEADER_LEN + 2 * n);
            assert_eq!(u32_at(&wav, 4) as usize, 36 + 2 * n);
            assert_eq!(u32_at(&wav, 40) as usize, 2 * n);
        }
    }

    #[test]
    fn out_of_range_samples_clamp() {
        let clamped = encode_wav(&[2.0, -2.0], 16000).unwrap();
        let unit = encode_wav(&[1.0, -1.0], 16000).unwrap();
        assert_eq!(clamped, unit);
    }

    #[test]
    fn encoding_is_deterministic() {
        let samples = [0.1, -0.2, 0.3, -0.4];
        assert_eq!(
            encode_wav(&samples, 22050).unwrap(),
            encode_wav(&samples, 22050).unwrap()
        );
    }

    #[test]
    fn header_to_bytes_matches_encoder() {
        let header = WavHeader::new(44100, 3).unwrap();
        let wav = encode_wav(&[0.0; 3], 44100).unwrap();
        assert_eq!(&wav[..HEADER_LEN], &header.to_bytes()[..]);
        assert_eq!(header.num_samples(), 3);
        assert_eq!(header.file_len(), wav.len());
    }

    #[test]
    fn rejects_zero_sample_rate() {
        match encode_wav(&[0.0], 0) {
            Err(Error::InvalidAudioParameter(AudioParameterError::ZeroSampleRate)) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_overflowing_byte_rate() {
        match WavHeader::new(u32::MAX, 1) {
            Err(Error::InvalidAudioParameter(AudioParameterError::ByteRateOverflow(_))) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_oversized_data() {
        let too_many = (u32::MAX as usize) / 2;
        match WavHeader::new(24000, too_many) {
            Err(Error::InvalidAudioParameter(AudioParameterError::TooManySamples(n))) => {
                assert_eq!(n, too_many)
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_non_finite_samples() {
        for bad in &[f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            match encode_wav(&[0.0, 0.0, *bad], 24000) {
                Err(Error::InvalidAudioParameter(AudioParameterError::NonFiniteSample {
                    index: 2,
                })) => (),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }
}
