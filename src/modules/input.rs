use crate::modules::base::{self, DecodeError};
use num_bigint::BigInt;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/**
 * input.rs turns the json-shaped input blob into a ParsedInput: the entry
 * count n, the threshold k, and the roots decoded in key order "1".."n".
 *
 * {
 *   "keys": { "n": 4, "k": 3 },
 *   "1": { "base": "10", "value": "4" },
 *   "2": { "base": "2", "value": "111" },
 *   ...
 * }
 */

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("input must be a json object")]
    NotAnObject,
    #[error("\"{0}\" not found or not a non-negative integer")]
    MissingField(&'static str),
    #[error("entry \"{index}\" not found")]
    MissingEntry { index: usize },
    #[error("entry \"{index}\" is malformed: {reason}")]
    MalformedEntry { index: usize, reason: String },
    #[error("entry \"{index}\" has a malformed base \"{text}\"")]
    MalformedBase { index: usize, text: String },
    #[error("entry \"{index}\": {source}")]
    Decode { index: usize, source: DecodeError },
}

// raw (base, value) pair of one entry, before decoding
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RootEntry {
    pub base: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub n: usize,
    pub k: usize,
    pub roots: Vec<BigInt>,
}

impl ParsedInput {

    // degree of the polynomial to build, None when k < 1
    pub fn degree(&self) -> Option<usize> {
        self.k.checked_sub(1)
    }
}

impl RootEntry {

    // parse base and decode value into a root
    pub fn decode(&self, index: usize) -> Result<BigInt, InputError> {
        let base_text = self.base.trim();
        if base_text.is_empty() || !base_text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::MalformedBase { index, text: self.base.clone() });
        }

        // decimal digits too long for u32 are still a stated, unsupported base
        let base: u32 = base_text.parse().unwrap_or(u32::MAX);

        if !base::is_supported_base(base) {
            return Err(InputError::Decode { index, source: DecodeError::UnsupportedBase { base } });
        }

        let value = self.value.trim();
        if value.is_empty() {
            return Err(InputError::MalformedEntry { index, reason: "empty value".to_string() });
        }

        base::decode(value, base).map_err(|source| InputError::Decode { index, source })
    }
}

// "n" and "k" live under "keys", or at the top level
fn count_field(object: &Map<String, Value>, name: &'static str) -> Result<usize, InputError> {
    object
        .get("keys")
        .and_then(|keys| keys.get(name))
        .or_else(|| object.get(name))
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .ok_or(InputError::MissingField(name))
}

// pull the entries "1".."n" in order
fn entries(object: &Map<String, Value>, n: usize) -> Result<Vec<RootEntry>, InputError> {
    (1..=n)
        .map(|index| {
            let raw = object
                .get(&index.to_string())
                .ok_or(InputError::MissingEntry { index })?;
            RootEntry::deserialize(raw)
                .map_err(|e| InputError::MalformedEntry { index, reason: e.to_string() })
        })
        .collect()
}

/// Parses the input text and decodes every root.
///
/// Fails on the first missing or malformed field, and on the first entry
/// whose value cannot be decoded under its base.
pub fn parse(text: &str) -> Result<ParsedInput, InputError> {
    let document: Value = serde_json::from_str(text)?;
    let object = match document {
        Value::Object(object) => object,
        _ => return Err(InputError::NotAnObject),
    };

    let k = count_field(&object, "k")?;
    let n = count_field(&object, "n")?;

    // entries are checked before anything is sized from n
    let roots = entries(&object, n)?
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let index = i + 1;
            let root = entry.decode(index)?;
            debug!(index, base = %entry.base, value = %entry.value, %root, "decoded root");
            Ok(root)
        })
        .collect::<Result<Vec<_>, InputError>>()?;

    Ok(ParsedInput { n, k, roots })
}
