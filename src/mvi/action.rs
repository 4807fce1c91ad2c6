//! Base trait for actions and their wire form.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::InvalidActionError;

/// Trait for action objects.
///
/// Actions represent:
/// - User actions (button clicks, key presses)
/// - System events (responses received, timers)
///
/// Actions are consumed by reducers to produce new states. Implementors are
/// expected to use adjacently tagged serde (`#[serde(tag = "kind", content = "payload")]`)
/// so their serialized form matches [`RawAction`].
pub trait Action: Serialize + DeserializeOwned + Send + 'static {
    /// Every kind this action type recognizes.
    const KINDS: &'static [&'static str];

    /// The kind tag of this action (e.g. `"INCREMENT"`).
    fn kind(&self) -> &'static str;

    /// Convert into the wire envelope.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the action does not serialize to a
    /// `{"kind": ..., "payload": ...}` object.
    fn to_raw(&self) -> serde_json::Result<RawAction> {
        let value = serde_json::to_value(self)?;
        serde_json::from_value(value)
    }

    /// Decode a wire envelope into a typed action.
    ///
    /// Returns `Ok(None)` for a kind this action type does not know, so the
    /// store can pass it through as a no-op.
    ///
    /// # Errors
    ///
    /// - [`InvalidActionError::MissingKind`] if `kind` is empty.
    /// - [`InvalidActionError::MalformedPayload`] if the kind is known but the
    ///   payload does not have the shape that kind requires.
    fn from_raw(raw: RawAction) -> Result<Option<Self>, InvalidActionError> {
        let RawAction { kind, payload } = raw;
        let kind = kind.trim();
        if kind.is_empty() {
            return Err(InvalidActionError::MissingKind);
        }
        if !Self::KINDS.contains(&kind) {
            return Ok(None);
        }

        // Fieldless kinds carry no payload: `{"kind": "INCREMENT"}`
        let tagged = match payload {
            None | Some(Value::Null) => serde_json::json!({ "kind": kind }),
            Some(payload) => serde_json::json!({ "kind": kind, "payload": payload }),
        };

        serde_json::from_value(tagged)
            .map(Some)
            .map_err(|source| InvalidActionError::MalformedPayload {
                kind: kind.to_string(),
                source,
            })
    }
}

/// Untyped action envelope: `{ "kind": string, "payload"?: any }`.
///
/// This is the form external collaborators (replay files, I/O adapters)
/// use to feed actions into a store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAction {
    /// Action kind. Missing in the input deserializes as empty.
    #[serde(default)]
    pub kind: String,
    /// Optional payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl RawAction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Parse a single envelope from JSON text.
    pub fn from_json(text: &str) -> Result<Self, InvalidActionError> {
        serde_json::from_str(text).map_err(InvalidActionError::Json)
    }
}
