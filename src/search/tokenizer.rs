/// Lowercases and splits on whitespace. Tokens are kept exactly as split:
/// punctuation stays attached, duplicates and order are preserved.
pub fn tokenize_query(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(|word| word.to_string())
        .collect()
}
