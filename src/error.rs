use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// The payload is not valid standard base64.
    MalformedEncoding(base64::DecodeError),
    /// PCM byte length is odd; holds the offending length.
    InvalidPcmLength(usize),
    InvalidAudioParameter(AudioParameterError),
    /// The speech collaborator returned no audio payload.
    NoAudioData,
    EmptyText,
    UnknownVoice(String),
    MissingApiKey,
    IoError(io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioParameterError {
    ZeroSampleRate,
    ByteRateOverflow(u32),
    TooManySamples(usize),
    NonFiniteSample { index: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedEncoding(e) => write!(f, "malformed base64 payload: {}", e),
            Error::InvalidPcmLength(len) => {
                write!(f, "PCM payload has odd length {} (need 2 bytes per sample)", len)
            }
            Error::InvalidAudioParameter(e) => write!(f, "invalid audio parameter: {}", e),
            Error::NoAudioData => write!(f, "no audio data received from speech service"),
            Error::EmptyText => write!(f, "no text to synthesize"),
            Error::UnknownVoice(name) => write!(f, "unknown voice: {}", name),
            Error::MissingApiKey => write!(f, "API_KEY is missing from environment variables"),
            Error::IoError(e) => write!(f, "io error: {}", e),
        }
    }
}

impl fmt::Display for AudioParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioParameterError::ZeroSampleRate => write!(f, "sample rate must be positive"),
            AudioParameterError::ByteRateOverflow(rate) => {
                write!(f, "sample rate {} overflows the byte rate field", rate)
            }
            AudioParameterError::TooManySamples(n) => {
                write!(f, "{} samples do not fit in a RIFF chunk", n)
            }
            AudioParameterError::NonFiniteSample { index } => {
                write!(f, "sample {} is not finite", index)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MalformedEncoding(e) => Some(e),
            Error::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::IoError(error)
    }
}

impl From<base64::DecodeError> for Error {
    fn from(error: base64::DecodeError) -> Self {
        Error::MalformedEncoding(error)
    }
}

impl From<AudioParameterError> for Error {
    fn from(error: AudioParameterError) -> Self {
        Error::InvalidAudioParameter(error)
    }
}
