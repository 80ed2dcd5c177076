use serde::{Deserialize, Serialize};

/// Public projection of a row in the `entities` table.
///
/// Every column is optional: the store owns the schema and a preview must
/// still render when a column is null or missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "super::optional_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    /// Absolute URL or a path inside the public `avatars` bucket.
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Profile {
    pub const TABLE: &'static str = "entities";

    pub const FIELDS: &'static [&'static str] = &[
        "id",
        "username",
        "given_name",
        "family_name",
        "avatar",
        "organization_name",
        "type",
        "title",
        "location",
    ];
}
