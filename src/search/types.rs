use serde::{Deserialize, Serialize};

/// One entry of a query's hexagram set, with its rescaled score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexagramScore {
    pub hexagram_id: u32,
    pub hexagram_name: String,
    pub hexagram_unicode: String,
    pub score: f32,
}

/// Raw cosine similarity of one hexagram, before truncation and rescaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawMatch {
    pub hexagram_id: u32,
    pub similarity: f32,
}
