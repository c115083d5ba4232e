use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Decodes standard (RFC 4648, padded) base64 into raw bytes.
pub fn decode_base64(input: &str) -> Result<Vec<u8>> {
    let bytes = STANDARD.decode(input)?;
    tracing::debug!(chars = input.len(), bytes = bytes.len(), "decoded base64 payload");
    Ok(bytes)
}

pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
