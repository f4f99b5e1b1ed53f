//! Record shape machinery.
//!
//! Every wire record is declared once through the `record!` macro, which
//! derives the serde encode/decode pair and a static field table. The table
//! drives explicit structural validation and union shape matching.
//!
//! Decoding is lenient: a field whose value is `null` or of the wrong JSON
//! type reads as unset instead of failing the whole payload. Only
//! [`Record::validate`] reports such fields.

use crate::error::{TrophyError, ValidationError};
use chrono::{DateTime, TimeZone};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::cell::Cell;
use std::collections::HashMap;

thread_local! {
    static STRICT: Cell<bool> = const { Cell::new(false) };
}

/// Field deserializer installed on every `record!` field.
///
/// Reads the raw value, then the declared type. A value that does not fit
/// becomes `T::default()` (`None` for optional fields), except while
/// [`Record::validate`] is running.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    match serde_json::from_value(value) {
        Ok(field) => Ok(field),
        Err(_) if !STRICT.with(Cell::get) => Ok(T::default()),
        Err(e) => Err(de::Error::custom(e)),
    }
}

/// Run `f` with lenient field decoding turned off on this thread.
fn strict<R>(f: impl FnOnce() -> R) -> R {
    let previous = STRICT.with(|flag| flag.replace(true));
    let result = f();
    STRICT.with(|flag| flag.set(previous));
    result
}

/// One declared field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Rust field name.
    pub name: &'static str,
    /// camelCase key used on the wire.
    pub wire: &'static str,
    /// Whether the field may be absent from the payload.
    pub optional: bool,
}

/// Field-level optionality.
///
/// `Option<T>` is optional and absent when `None`; every other field type is
/// required and always emitted.
pub trait Presence {
    const OPTIONAL: bool = false;

    fn is_absent(&self) -> bool {
        false
    }
}

impl<T> Presence for Option<T> {
    const OPTIONAL: bool = true;

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl Presence for String {}
impl Presence for bool {}
impl Presence for i64 {}
impl Presence for f64 {}
impl Presence for Value {}
impl<T> Presence for Vec<T> {}
impl<K, V, S> Presence for HashMap<K, V, S> {}
impl<Tz: TimeZone> Presence for DateTime<Tz> {}

/// A JSON record with a declared shape.
pub trait Record: Serialize + DeserializeOwned {
    /// Type name used in validation messages.
    const NAME: &'static str;

    /// Declared fields in declaration order.
    const FIELDS: &'static [FieldSpec];

    /// Wire fields that did not map to a declared field.
    fn additional_properties(&self) -> &HashMap<String, Value>;

    fn additional_properties_mut(&mut self) -> &mut HashMap<String, Value>;

    /// Decode a raw response body.
    ///
    /// Missing, `null` or mistyped fields decode to their defaults; only
    /// malformed JSON or a non-object payload fails.
    fn decode(bytes: &[u8]) -> Result<Self, TrophyError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn from_value(value: Value) -> Result<Self, TrophyError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Encode to a JSON value, omitting unset optional fields and re-emitting
    /// the unrecognized-field bag.
    fn encode(&self) -> Result<Value, TrophyError> {
        serde_json::to_value(self).map_err(|e| TrophyError::JsonError(e.to_string()))
    }

    fn to_json(&self) -> Result<String, TrophyError> {
        serde_json::to_string(self).map_err(|e| TrophyError::JsonError(e.to_string()))
    }

    /// Look up a declared field by its Rust name.
    fn field(name: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|f| f.name == name)
    }

    /// Strict structural check of a raw payload against this record.
    ///
    /// The payload must be an object, every required wire key must be present
    /// and non-null, and every value must fit its declared type.
    fn validate(value: &Value) -> Result<(), ValidationError> {
        let object = value.as_object().ok_or_else(|| ValidationError::NotAnObject {
            record: Self::NAME,
            found: json_kind(value).to_string(),
        })?;

        for field in Self::FIELDS.iter().filter(|f| !f.optional) {
            if object.get(field.wire).is_none_or(Value::is_null) {
                return Err(ValidationError::MissingField {
                    record: Self::NAME,
                    field: field.wire,
                });
            }
        }

        strict(|| serde_json::from_value::<Self>(value.clone()))
            .map(|_| ())
            .map_err(|e| ValidationError::TypeMismatch {
                record: Self::NAME,
                message: e.to_string(),
            })
    }

    /// Non-failing shape predicate used by union resolution.
    fn matches(value: &Value) -> bool {
        Self::validate(value).is_ok()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
