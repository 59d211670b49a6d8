//! Payload normalization for loosely-typed request fields.
//!
//! Clients send item ids both as JSON numbers and as numeric strings,
//! and the update/remove paths tolerate both. That coercion is
//! centralized here so matching semantics cannot drift between
//! operations: update and remove go through
//! [`coerce_integer`], while add-item uses [`strict_integer`] and
//! rejects anything that is not already a JSON integer.

use serde_json::Value;

use crate::models::CollectionItem;

/// The (user_id, item_id, media_type) triple used to locate items for
/// update and removal.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemKey {
    pub user_id: i64,
    pub item_id: i64,
    pub media_type: String,
}

impl ItemKey {
    /// Whether a stored item is identified by this key.
    pub fn matches(&self, item: &CollectionItem) -> bool {
        item.user_id == self.user_id
            && item.item_id == self.item_id
            && item.media_type == self.media_type
    }

    /// Build a key from raw JSON body fields.
    ///
    /// `item_id` is numerically coerced; `user_id` and `media_type`
    /// are not. Returns None when any field cannot identify a stored
    /// item - such a key could never match, so callers treat None as
    /// "no match" rather than as malformed input.
    pub fn from_payload(user_id: &Value, item_id: &Value, media_type: &Value) -> Option<Self> {
        Some(Self {
            user_id: user_id.as_i64()?,
            item_id: coerce_integer(item_id)?,
            media_type: media_type.as_str()?.to_string(),
        })
    }
}

/// Lenient integer extraction: accepts a JSON integer or a string
/// holding one.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Strict integer extraction: the value must already be a JSON
/// integer. Floats, strings, and everything else are rejected.
pub fn strict_integer(value: &Value) -> Option<i64> {
    value.as_i64()
}

/// A JSON string with at least one character. Empty strings fall
/// through to the caller's default.
pub fn non_empty_string(value: &Value) -> Option<&str> {
    match value.as_str() {
        Some(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_integer_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_integer(&json!(999)), Some(999));
        assert_eq!(coerce_integer(&json!("999")), Some(999));
        assert_eq!(coerce_integer(&json!(" 7 ")), Some(7));
        assert_eq!(coerce_integer(&json!(-3)), Some(-3));

        assert_eq!(coerce_integer(&json!("abc")), None);
        assert_eq!(coerce_integer(&json!(1.5)), None);
        assert_eq!(coerce_integer(&json!(null)), None);
        assert_eq!(coerce_integer(&json!(true)), None);
    }

    #[test]
    fn test_strict_integer_rejects_strings_and_floats() {
        assert_eq!(strict_integer(&json!(999)), Some(999));
        assert_eq!(strict_integer(&json!("999")), None);
        assert_eq!(strict_integer(&json!(999.0)), None);
        assert_eq!(strict_integer(&json!(null)), None);
    }

    #[test]
    fn test_non_empty_string() {
        assert_eq!(non_empty_string(&json!("anime")), Some("anime"));
        assert_eq!(non_empty_string(&json!("")), None);
        assert_eq!(non_empty_string(&json!(5)), None);
        assert_eq!(non_empty_string(&json!(null)), None);
    }

    #[test]
    fn test_item_key_from_payload_coerces_item_id_only() {
        let key =
            ItemKey::from_payload(&json!(1), &json!("999"), &json!("anime")).unwrap();
        assert_eq!(key.item_id, 999);

        // user_id is never coerced from a string
        assert!(ItemKey::from_payload(&json!("1"), &json!(999), &json!("anime")).is_none());
        // missing media type can never match
        assert!(ItemKey::from_payload(&json!(1), &json!(999), &json!(null)).is_none());
    }
}
