//! Import records and their normalization into catalog items
//!
//! Import files carry either a ready-made `tags` string or the structured
//! fields it is composed from: overview words followed by genres, keywords,
//! cast and crew, all joined with single spaces.

mod parse;

use serde::{Deserialize, Deserializer, Serialize};

use crate::bail_invalid_item;
use crate::catalog::Item;
use crate::error::Result;

pub use parse::{load_records, parse_csv_records, parse_records, RecordFormat};

/// A list field given either as an array or as one comma-separated string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListField {
    List(Vec<String>),
    Joined(String),
}

impl Default for ListField {
    fn default() -> Self {
        ListField::List(Vec::new())
    }
}

impl ListField {
    /// Trimmed, non-empty values
    pub fn values(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            ListField::List(values) => values.iter().map(String::as_str).collect(),
            ListField::Joined(joined) => joined.split(',').collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Ids arrive as strings or as numeric dataset ids
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(text) => text,
        RawId::Number(n) => n.to_string(),
    }))
}

/// `null` list fields count as empty
fn deserialize_list<'de, D>(deserializer: D) -> std::result::Result<ListField, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ListField>::deserialize(deserializer)?.unwrap_or_default())
}

/// One record of an import file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(
        default,
        alias = "movie_id",
        deserialize_with = "deserialize_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Pre-joined feature text; wins over the structured fields when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub genres: ListField,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub keywords: ListField,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub cast: ListField,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub crew: ListField,
}

impl ItemRecord {
    fn has_structured_fields(&self) -> bool {
        self.overview.is_some()
            || !self.genres.values().is_empty()
            || !self.keywords.values().is_empty()
            || !self.cast.values().is_empty()
            || !self.crew.values().is_empty()
    }

    /// Join the structured fields into one tag string
    pub fn compose_tags(&self) -> String {
        let mut parts: Vec<String> = self
            .overview
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        parts.extend(self.genres.values());
        parts.extend(self.keywords.values());
        parts.extend(self.cast.values());
        parts.extend(self.crew.values());
        parts.join(" ")
    }

    /// Validate and normalize into a catalog item; `index` is the record's
    /// position in its batch, used in error reports
    pub fn into_item(self, index: usize) -> Result<Item> {
        let title = match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => bail_invalid_item!(index, "missing title"),
        };

        let tags = match &self.tags {
            Some(tags) => tags.clone(),
            None if self.has_structured_fields() => self.compose_tags(),
            None => bail_invalid_item!(index, "missing tags"),
        };

        let id = self
            .id
            .map(|id| id.trim().to_string())
            .unwrap_or_default();

        Ok(Item::new(id, title, tags))
    }
}

/// Normalize a batch of records, failing on the first invalid one
pub fn into_items(records: Vec<ItemRecord>) -> Result<Vec<Item>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_item(index))
        .collect()
}
