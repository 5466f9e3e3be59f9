//! Cart serialization format.
//!
//! The current layout is a versioned envelope:
//!
//! ```json
//! {"version": 1, "items": [{"id": 1, "name": "Wireless Headphones",
//!   "price": 99.99, "image": "https://...", "quantity": 2}]}
//! ```
//!
//! A bare array of items (version 0, written by the first storefront page)
//! is still accepted on read. Envelopes with a newer version are refused
//! rather than guessed at.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::cart::{CartLineItem, CartState};

/// Version written by [`encode`].
pub const SCHEMA_VERSION: u64 = 1;

/// Errors raised while encoding or decoding a stored cart.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Malformed cart data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported cart schema version {0}")]
    UnsupportedVersion(u64),

    #[error("Cart data is neither an item list nor a versioned envelope")]
    UnexpectedShape,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u64,
    items: Vec<&'a CartLineItem>,
}

#[derive(Deserialize)]
struct Envelope {
    items: Vec<CartLineItem>,
}

/// Serialize `state` into the current layout.
///
/// # Errors
///
/// Returns `CodecError::Json` if serialization fails.
pub fn encode(state: &CartState) -> Result<String, CodecError> {
    let envelope = EnvelopeRef {
        version: SCHEMA_VERSION,
        items: state.iter().collect(),
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parse a stored cart written by any supported version.
///
/// # Errors
///
/// Returns `CodecError` if the text is not valid JSON, does not match a
/// known layout, or any item fails validation (negative price, zero
/// quantity, missing field).
pub fn decode(raw: &str) -> Result<CartState, CodecError> {
    // The shape is read from a `Value`, the items straight from the text:
    // `Value` numbers lose integer prices wider than 64 bits.
    let value: Value = serde_json::from_str(raw)?;
    let items: Vec<CartLineItem> = match value {
        Value::Array(_) => serde_json::from_str(raw)?,
        Value::Object(ref fields) => {
            let version = fields
                .get("version")
                .and_then(Value::as_u64)
                .ok_or(CodecError::UnexpectedShape)?;
            if version != SCHEMA_VERSION {
                return Err(CodecError::UnsupportedVersion(version));
            }
            serde_json::from_str::<Envelope>(raw)?.items
        }
        _ => return Err(CodecError::UnexpectedShape),
    };
    Ok(CartState::from_items(items))
}
