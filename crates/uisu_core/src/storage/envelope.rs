//! Versioned JSON payload format for stored values.
//!
//! Written shape: `{"version":1,"data":<value>}`. Values written before
//! versioning existed are bare JSON and decode as version 1 data.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Current payload version written by this build.
pub const PAYLOAD_VERSION: u64 = 1;

const VERSION_FIELD: &str = "version";
const DATA_FIELD: &str = "data";

/// Reason a stored payload could not be decoded.
#[derive(Debug)]
pub enum PayloadError {
    /// Stored text is not valid JSON.
    Malformed(serde_json::Error),
    /// Envelope was written by a newer build.
    UnsupportedVersion(u64),
    /// JSON is valid but does not match the expected shape.
    Shape(serde_json::Error),
}

impl PayloadError {
    /// Stable short code for log lines.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "malformed_json",
            Self::UnsupportedVersion(_) => "unsupported_version",
            Self::Shape(_) => "shape_mismatch",
        }
    }
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "stored payload is not valid JSON: {err}"),
            Self::UnsupportedVersion(version) => write!(
                f,
                "stored payload version {version} is newer than supported {PAYLOAD_VERSION}"
            ),
            Self::Shape(err) => write!(f, "stored payload has unexpected shape: {err}"),
        }
    }
}

impl Error for PayloadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(err) | Self::Shape(err) => Some(err),
            Self::UnsupportedVersion(_) => None,
        }
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T: ?Sized> {
    version: u64,
    data: &'a T,
}

/// Wraps `value` in the current envelope and serializes it.
pub fn encode_payload<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(&EnvelopeRef {
        version: PAYLOAD_VERSION,
        data: value,
    })
}

/// Decodes an enveloped or legacy bare payload.
pub fn decode_payload<T: DeserializeOwned>(raw: &str) -> Result<T, PayloadError> {
    let parsed: Value = serde_json::from_str(raw).map_err(PayloadError::Malformed)?;
    let data = match split_envelope(parsed) {
        Ok((version, _)) if version > PAYLOAD_VERSION => {
            return Err(PayloadError::UnsupportedVersion(version));
        }
        Ok((_, data)) => data,
        Err(legacy) => legacy,
    };
    serde_json::from_value(data).map_err(PayloadError::Shape)
}

// Returns `(version, data)` for envelopes, or the untouched value otherwise.
fn split_envelope(value: Value) -> Result<(u64, Value), Value> {
    let Value::Object(mut map) = value else {
        return Err(value);
    };
    let is_envelope = map.len() == 2
        && map.get(VERSION_FIELD).is_some_and(Value::is_u64)
        && map.contains_key(DATA_FIELD);
    if !is_envelope {
        return Err(Value::Object(map));
    }
    let version = map
        .get(VERSION_FIELD)
        .and_then(Value::as_u64)
        .unwrap_or(PAYLOAD_VERSION);
    let data = map.remove(DATA_FIELD).unwrap_or(Value::Null);
    Ok((version, data))
}

#[cfg(test)]
mod tests {
    use super::{decode_payload, encode_payload, PayloadError};

    #[test]
    fn encode_writes_versioned_envelope() {
        let payload = encode_payload(&vec![1, 2]).unwrap();
        assert_eq!(payload, r#"{"version":1,"data":[1,2]}"#);
    }

    #[test]
    fn decode_accepts_legacy_bare_values() {
        let decoded: Vec<String> = decode_payload(r#"["a","b"]"#).unwrap();
        assert_eq!(decoded, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn decode_rejects_newer_versions() {
        let err = decode_payload::<Vec<u8>>(r#"{"version":9,"data":[]}"#).unwrap_err();
        assert!(matches!(err, PayloadError::UnsupportedVersion(9)));
    }

    #[test]
    fn decode_reports_shape_mismatch() {
        let err = decode_payload::<Vec<u8>>(r#"{"version":1,"data":"text"}"#).unwrap_err();
        assert_eq!(err.reason_code(), "shape_mismatch");
    }
}
