use super::catalog::HexagramEntry;
use serde::{Deserialize, Serialize};

/// A ranked category: one hexagram with its display data and keyword phrases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub key: String,
    pub glyph: String,
    pub keywords: Vec<String>,
}

impl From<&HexagramEntry> for Category {
    fn from(entry: &HexagramEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.to_string(),
            key: entry.key.to_string(),
            glyph: entry.glyph.to_string(),
            keywords: entry.keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Metadata-only listing entry returned by `GET /hexagrams/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexagramInfo {
    pub id: u32,
    pub name: String,
    pub keyword: String,
    pub unicode: String,
}

impl From<&Category> for HexagramInfo {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            keyword: category.key.clone(),
            unicode: category.glyph.clone(),
        }
    }
}
