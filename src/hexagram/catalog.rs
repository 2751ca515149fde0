//! The King Wen sequence: 64 hexagrams with display data and the keyword phrases
//! their prototype vectors are averaged from.

use super::types::Category;
use crate::errors::{OracleError, Result};

use std::collections::HashSet;

pub const HEXAGRAM_COUNT: usize = 64;

/// One row of the static table.
#[derive(Debug, Clone, Copy)]
pub struct HexagramEntry {
    pub id: u32,
    pub name: &'static str,
    /// Canonical short name; also the fallback seed when no keyword resolves.
    pub key: &'static str,
    pub glyph: &'static str,
    pub keywords: &'static [&'static str],
}

const fn hex(
    id: u32,
    name: &'static str,
    key: &'static str,
    glyph: &'static str,
    keywords: &'static [&'static str],
) -> HexagramEntry {
    HexagramEntry {
        id,
        name,
        key,
        glyph,
        keywords,
    }
}

pub static HEXAGRAMS: [HexagramEntry; HEXAGRAM_COUNT] = [
    hex(1, "Creative", "creative", "䷀", &["creative", "heaven", "strong", "initiating", "yang", "father"]),
    hex(2, "Receptive", "receptive", "䷁", &["receptive", "earth", "yielding", "responsive", "yin", "mother"]),
    hex(3, "Difficulty at the Beginning", "difficulty", "䷂", &["difficulty", "beginning", "sprouting", "initial", "struggle"]),
    hex(4, "Youthful Folly", "youthful", "䷃", &["youthful", "folly", "inexperience", "learning", "student"]),
    hex(5, "Waiting", "waiting", "䷄", &["waiting", "patience", "nourishment", "rain", "delay"]),
    hex(6, "Conflict", "conflict", "䷅", &["conflict", "opposition", "litigation", "arguing", "dispute"]),
    hex(7, "The Army", "army", "䷆", &["army", "collective", "discipline", "organization", "leadership"]),
    hex(8, "Holding Together", "holding", "䷇", &["holding", "together", "unity", "alliance", "cooperation"]),
    hex(9, "Small Taming", "small", "䷈", &["small", "taming", "restraint", "gentle", "accumulation"]),
    hex(10, "Treading", "treading", "䷉", &["treading", "conduct", "careful", "tiger", "danger"]),
    hex(11, "Peace", "peace", "䷊", &["peace", "harmony", "prosperity", "communication", "balance"]),
    hex(12, "Standstill", "standstill", "䷋", &["standstill", "stagnation", "obstruction", "blocked", "separation"]),
    hex(13, "Fellowship", "fellowship", "䷌", &["fellowship", "community", "people", "harmony", "cooperation"]),
    hex(14, "Great Possession", "possession", "䷍", &["possession", "great", "wealth", "abundance", "sovereignty"]),
    hex(15, "Modesty", "modesty", "䷎", &["modesty", "humility", "equalizing", "mountain", "earth"]),
    hex(16, "Enthusiasm", "enthusiasm", "䷏", &["enthusiasm", "thunder", "movement", "inspiration", "music"]),
    hex(17, "Following", "following", "䷐", &["following", "adapting", "flexibility", "influence", "leadership"]),
    hex(18, "Work on the Decayed", "work", "䷑", &["work", "decay", "corruption", "restoration", "repair"]),
    hex(19, "Approach", "approach", "䷒", &["approach", "nearing", "advance", "spring", "growth"]),
    hex(20, "Contemplation", "contemplation", "䷓", &["contemplation", "viewing", "observation", "wind", "example"]),
    hex(21, "Biting Through", "biting", "䷔", &["biting", "through", "justice", "punishment", "clarity"]),
    hex(22, "Grace", "grace", "䷕", &["grace", "beauty", "form", "ornament", "mountain"]),
    hex(23, "Splitting Apart", "splitting", "䷖", &["splitting", "apart", "decay", "mountain", "stripping"]),
    hex(24, "Return", "return", "䷗", &["return", "turning", "renewal", "winter", "solstice"]),
    hex(25, "Innocence", "innocence", "䷘", &["innocence", "unexpected", "natural", "spontaneous", "heaven"]),
    hex(26, "Great Taming", "taming", "䷙", &["great", "taming", "restraint", "potential", "mountain"]),
    hex(27, "Nourishment", "nourishment", "䷚", &["nourishment", "jaws", "nutrition", "caring", "mountain"]),
    hex(28, "Great Preponderance", "preponderance", "䷛", &["preponderance", "great", "excess", "critical", "pressure"]),
    hex(29, "The Abysmal", "abysmal", "䷜", &["abysmal", "water", "danger", "pit", "flowing"]),
    hex(30, "The Clinging", "clinging", "䷝", &["clinging", "fire", "clarity", "dependence", "light"]),
    hex(31, "Influence", "influence", "䷞", &["influence", "wooing", "attraction", "stimulation", "lake"]),
    hex(32, "Duration", "duration", "䷟", &["duration", "perseverance", "endurance", "marriage", "thunder"]),
    hex(33, "Retreat", "retreat", "䷠", &["retreat", "withdrawal", "yielding", "mountain", "heaven"]),
    hex(34, "Great Power", "power", "䷡", &["power", "great", "strength", "vigor", "thunder"]),
    hex(35, "Progress", "progress", "䷢", &["progress", "advancing", "prosperity", "sunrise", "fire"]),
    hex(36, "Darkening of the Light", "darkening", "䷣", &["darkening", "light", "injury", "hiding", "adversity"]),
    hex(37, "The Family", "family", "䷤", &["family", "clan", "home", "relationships", "wind"]),
    hex(38, "Opposition", "opposition", "䷥", &["opposition", "contradiction", "misunderstanding", "fire", "lake"]),
    hex(39, "Obstruction", "obstruction", "䷦", &["obstruction", "difficulty", "impediment", "water", "mountain"]),
    hex(40, "Deliverance", "deliverance", "䷧", &["deliverance", "release", "liberation", "thunder", "rain"]),
    hex(41, "Decrease", "decrease", "䷨", &["decrease", "loss", "restraint", "mountain", "lake"]),
    hex(42, "Increase", "increase", "䷩", &["increase", "benefit", "augmenting", "wind", "thunder"]),
    hex(43, "Breakthrough", "breakthrough", "䷪", &["breakthrough", "determination", "resolution", "lake", "heaven"]),
    hex(44, "Coming to Meet", "meeting", "䷫", &["meeting", "encounter", "temptation", "heaven", "wind"]),
    hex(45, "Gathering Together", "gathering", "䷬", &["gathering", "assembly", "accumulation", "lake", "earth"]),
    hex(46, "Pushing Upward", "pushing", "䷭", &["pushing", "ascending", "growth", "earth", "wood"]),
    hex(47, "Exhaustion", "exhaustion", "䷮", &["exhaustion", "oppression", "adversity", "lake", "water"]),
    hex(48, "The Well", "well", "䷯", &["well", "source", "unchanging", "water", "wood"]),
    hex(49, "Revolution", "revolution", "䷰", &["revolution", "molting", "change", "lake", "fire"]),
    hex(50, "The Cauldron", "cauldron", "䷱", &["cauldron", "vessel", "nourishment", "fire", "wood"]),
    hex(51, "The Arousing", "arousing", "䷲", &["arousing", "shock", "thunder", "movement", "earthquake"]),
    hex(52, "Keeping Still", "keeping", "䷳", &["keeping", "still", "meditation", "mountain", "rest"]),
    hex(53, "Development", "development", "䷴", &["development", "gradual", "progress", "wind", "mountain"]),
    hex(54, "The Marrying Maiden", "marrying", "䷵", &["marrying", "maiden", "subordinate", "thunder", "lake"]),
    hex(55, "Abundance", "abundance", "䷶", &["abundance", "fullness", "peak", "thunder", "fire"]),
    hex(56, "The Wanderer", "wanderer", "䷷", &["wanderer", "traveler", "stranger", "fire", "mountain"]),
    hex(57, "The Gentle", "gentle", "䷸", &["gentle", "penetrating", "wind", "influence", "wood"]),
    hex(58, "The Joyous", "joyous", "䷹", &["joyous", "lake", "pleasure", "satisfaction", "marsh"]),
    hex(59, "Dispersion", "dispersion", "䷺", &["dispersion", "dissolution", "scattering", "wind", "water"]),
    hex(60, "Limitation", "limitation", "䷻", &["limitation", "restraint", "articulation", "water", "lake"]),
    hex(61, "Inner Truth", "truth", "䷼", &["truth", "inner", "sincerity", "wind", "lake"]),
    hex(62, "Small Exceeding", "small_exceeding", "䷽", &["small", "exceeding", "preponderance", "thunder", "mountain"]),
    hex(63, "After Completion", "completion", "䷾", &["completion", "after", "equilibrium", "water", "fire"]),
    hex(64, "Before Completion", "incompletion", "䷿", &["incompletion", "before", "transition", "fire", "water"]),
];

/// Owned copies of the static table, in id order.
pub fn categories() -> Vec<Category> {
    HEXAGRAMS.iter().map(Category::from).collect()
}

/// Fails unless `categories` holds exactly ids `1..=64`, each once.
pub fn validate_categories(categories: &[Category]) -> Result<()> {
    if categories.len() != HEXAGRAM_COUNT {
        return Err(OracleError::Catalog(format!(
            "expected {} hexagrams, found {}",
            HEXAGRAM_COUNT,
            categories.len()
        )));
    }

    let mut seen = HashSet::with_capacity(HEXAGRAM_COUNT);
    for category in categories {
        if category.id == 0 || category.id as usize > HEXAGRAM_COUNT {
            return Err(OracleError::Catalog(format!(
                "hexagram id {} outside 1..={}",
                category.id, HEXAGRAM_COUNT
            )));
        }
        if !seen.insert(category.id) {
            return Err(OracleError::Catalog(format!(
                "duplicate hexagram id {}",
                category.id
            )));
        }
    }

    Ok(())
}
