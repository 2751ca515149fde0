//! Hexagram Module
//!
//! The fixed taxonomy of 64 hexagrams and the prototype vectors derived from their keywords.
//!
//! ## Submodules
//! - **`catalog`**: The static table (id, name, short key, glyph, keyword phrases) and its invariants.
//! - **`prototype`**: Builds the immutable, id-indexed prototype table at startup.
//! - **`handlers`**: Metadata-only listing endpoint.
//! - **`types`**: `Category` and the listing DTO.

pub mod catalog;
pub mod handlers;
pub mod prototype;
pub mod types;
