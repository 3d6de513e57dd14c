//! JSON payload codec using `serde_json`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// JSON codec for structured payloads.
///
/// # Example
///
/// ```
/// use framewire::codec::JsonCodec;
///
/// let encoded = JsonCodec::encode(&vec![1, 2, 3]).unwrap();
/// let decoded: Vec<i32> = JsonCodec::decode(&encoded).unwrap();
/// assert_eq!(decoded, vec![1, 2, 3]);
/// ```
pub struct JsonCodec;

impl JsonCodec {
    /// Encode a value to a JSON payload string.
    pub fn encode<T: Serialize>(value: &T) -> Result<String> {
        Ok(serde_json::to_string(value)?)
    }

    /// Decode a JSON payload string.
    pub fn decode<T: DeserializeOwned>(payload: &str) -> Result<T> {
        Ok(serde_json::from_str(payload)?)
    }
}
