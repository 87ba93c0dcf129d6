//! Page metadata — front matter mapping and the validated [`PageMeta`] record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::error::MetaError;

/// Raw front matter as parsed from a document header: ordered string keys to
/// arbitrary YAML values. Immutable once handed to the renderer.
pub type FrontMatter = BTreeMap<String, Value>;

/// Validated page metadata.
///
/// The four required fields are string-typed; everything else from the front
/// matter rides along in `extra` so templates can reach arbitrary keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub slug: String,
    /// Page output path, always starting with `/`.
    pub path: String,
    /// Front matter keys beyond the required four.
    #[serde(default)]
    pub extra: BTreeMap<String, Value>,
}

impl PageMeta {
    /// Validate `front_matter` into a [`PageMeta`].
    ///
    /// Fails with a field-named error for each missing required field, and
    /// rejects a `path` that does not start with `/`. Scalar values are
    /// coerced to strings; non-scalar values count as missing.
    pub fn from_front_matter(front_matter: &FrontMatter) -> Result<Self, MetaError> {
        let title = require_string(front_matter, "title")?;
        let description = require_string(front_matter, "description")?;
        let slug = require_string(front_matter, "slug")?;
        let path = require_string(front_matter, "path")?;

        if !path.starts_with('/') {
            return Err(MetaError::InvalidPath { path });
        }

        let extra = front_matter
            .iter()
            .filter(|(k, _)| !matches!(k.as_str(), "title" | "description" | "slug" | "path"))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(PageMeta {
            title,
            description,
            slug,
            path,
            extra,
        })
    }
}

fn require_string(front_matter: &FrontMatter, field: &'static str) -> Result<String, MetaError> {
    front_matter
        .get(field)
        .and_then(coerce_string)
        .ok_or(MetaError::MissingField { field })
}

/// String-coerce a YAML scalar; `None` for null and structured values.
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn front_matter(fields: &[(&str, &str)]) -> FrontMatter {
        fields
            .iter()
            .map(|(k, v)| ((*k).to_string(), Value::String((*v).to_string())))
            .collect()
    }

    fn complete() -> FrontMatter {
        front_matter(&[
            ("title", "Home"),
            ("description", "The home page"),
            ("slug", "home"),
            ("path", "/"),
        ])
    }

    #[test]
    fn complete_front_matter_validates() {
        let meta = PageMeta::from_front_matter(&complete()).expect("valid front matter");
        assert_eq!(meta.title, "Home");
        assert_eq!(meta.path, "/");
        assert!(meta.extra.is_empty());
    }

    #[rstest]
    #[case("title")]
    #[case("description")]
    #[case("slug")]
    #[case("path")]
    fn missing_required_field_names_the_field(#[case] field: &'static str) {
        let mut fm = complete();
        fm.remove(field);
        let err = PageMeta::from_front_matter(&fm).expect_err("should reject");
        match err {
            MetaError::MissingField { field: named } => assert_eq!(named, field),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn path_without_leading_slash_is_rejected() {
        let mut fm = complete();
        fm.insert("path".into(), Value::String("about".into()));
        let err = PageMeta::from_front_matter(&fm).expect_err("should reject");
        assert!(matches!(err, MetaError::InvalidPath { .. }));
    }

    #[test]
    fn scalar_values_are_string_coerced() {
        let mut fm = complete();
        fm.insert("title".into(), Value::Number(42.into()));
        let meta = PageMeta::from_front_matter(&fm).expect("number title coerces");
        assert_eq!(meta.title, "42");
    }

    #[test]
    fn structured_value_counts_as_missing() {
        let mut fm = complete();
        fm.insert("title".into(), Value::Sequence(vec![]));
        let err = PageMeta::from_front_matter(&fm).expect_err("sequence title rejected");
        assert!(matches!(err, MetaError::MissingField { field: "title" }));
    }

    #[test]
    fn unknown_keys_land_in_extra() {
        let mut fm = complete();
        fm.insert("author".into(), Value::String("ada".into()));
        let meta = PageMeta::from_front_matter(&fm).unwrap();
        assert_eq!(
            meta.extra.get("author"),
            Some(&Value::String("ada".into()))
        );
        assert!(!meta.extra.contains_key("title"));
    }
}
