//! Typed header fields.
//!
//! The header of a curriculum document is a YAML mapping. Known keys are
//! decoded into typed fields; every other key lands in [`Metadata::extra`]
//! with its value and position preserved, so documents written for newer
//! tooling survive a parse/render cycle unchanged.

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::{Mapping, Value};

/// Decoded metadata header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Display title.
    #[serde(
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    /// Author handle.
    #[serde(
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub author: Option<String>,
    /// Difficulty levels (`beginner`, `basic`, ...).
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub levels: Vec<String>,
    /// Insight type (`normal`, `exercise`, ...).
    #[serde(
        rename = "type",
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    /// Editorial category (`must-know`, `how-to`, ...).
    #[serde(
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    /// Slug of the document this one follows.
    #[serde(
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent: Option<String>,
    /// Further-reading links, kept as written.
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub links: Vec<String>,
    /// Explicit slug. Only used when no source path is known.
    #[serde(
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub slug: Option<String>,
    /// Curriculum section.
    #[serde(
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub section: Option<String>,
    /// Curriculum course.
    #[serde(
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub course: Option<String>,
    /// Curriculum topic.
    #[serde(
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub topic: Option<String>,
    /// Ordered insight slugs, used by workouts.
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub insights: Vec<String>,
    /// Every key not listed above, in source order.
    #[serde(flatten)]
    pub extra: Mapping,
}

impl Metadata {
    /// True when no key at all was decoded.
    pub fn is_empty(&self) -> bool {
        *self == Metadata::default()
    }

    /// Look up a key that has no typed field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Re-encode the metadata as YAML, typed fields first, then extras in
    /// their original order.
    pub fn to_yaml_string(&self) -> serde_yaml::Result<String> {
        serde_yaml::to_string(self)
    }
}

/// A YAML scalar read as text, so `title: 1984` decodes to `"1984"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(n) => n.to_string(),
            Scalar::UInt(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Text(s) => s,
        }
    }
}

/// Accept any scalar; a mapping or sequence is an error.
fn scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}

/// Accept either a single scalar or a list of scalars.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(Scalar),
        Many(Vec<Scalar>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(item)) => vec![item.into()],
        Some(OneOrMany::Many(items)) => items.into_iter().map(String::from).collect(),
    })
}
