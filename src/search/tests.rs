//! Search Module Tests
//!
//! Validates the query pipeline: tokenization, vectorization and ranking.
//!
//! ## Test Scopes
//! - **Tokenizer**: Lowercasing and whitespace splitting with tokens kept verbatim.
//! - **Vectorizer**: Mean of token vectors, zero vector for empty input, order independence.
//! - **Ranking**: Cosine similarity, id tie-breaking, truncation, and the rescale applied
//!   only to the retained shortlist.

#[cfg(test)]
mod tests {
    use crate::hexagram::prototype::{Prototype, PrototypeTable};
    use crate::hexagram::types::Category;
    use crate::lexicon::LexiconStore;
    use crate::search::engine::{
        cosine_similarity, rank, rescale, score_all, top_matches, unit_vector,
    };
    use crate::search::tokenizer::tokenize_query;
    use crate::search::vectorizer::{mean_vector, vectorize, QueryVectorizer};
    use std::collections::HashSet;
    use std::sync::Arc;

    const EPS: f32 = 1e-5;

    fn category(id: u32, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            key: name.to_lowercase(),
            glyph: char::from_u32(0x4DC0 + id - 1).unwrap().to_string(),
            keywords: vec![name.to_lowercase()],
        }
    }

    fn toy_lexicon() -> LexiconStore {
        LexiconStore::from_entries(
            2,
            vec![("peace", vec![1.0, 0.0]), ("conflict", vec![0.0, 1.0])],
        )
        .unwrap()
    }

    fn toy_prototypes() -> Vec<Prototype> {
        vec![
            Prototype::new(category(11, "Peace"), vec![1.0, 0.0]),
            Prototype::new(category(6, "Conflict"), vec![0.0, 1.0]),
        ]
    }

    fn full_table(dimension: usize) -> PrototypeTable {
        PrototypeTable::from_catalog(&LexiconStore::empty(dimension)).unwrap()
    }

    fn total(scores: &[f32]) -> f32 {
        scores.iter().sum()
    }

    // ============================================================
    // TOKENIZER TESTS
    // ============================================================

    #[test]
    fn test_tokenize_query_lowercases() {
        assert_eq!(tokenize_query("Will I Find PEACE"), vec!["will", "i", "find", "peace"]);
    }

    #[test]
    fn test_tokenize_query_keeps_punctuation() {
        // No stripping: "peace?" and "peace" are different tokens.
        assert_eq!(tokenize_query("peace? yes!"), vec!["peace?", "yes!"]);
    }

    #[test]
    fn test_tokenize_query_keeps_short_words_and_duplicates() {
        assert_eq!(tokenize_query("a a b"), vec!["a", "a", "b"]);
    }

    #[test]
    fn test_tokenize_query_empty_and_whitespace() {
        assert!(tokenize_query("").is_empty());
        assert!(tokenize_query(" \t\n ").is_empty());
    }

    // ============================================================
    // VECTORIZER TESTS
    // ============================================================

    #[test]
    fn test_vectorize_empty_is_zero_vector() {
        let lexicon = LexiconStore::empty(300);

        let v = vectorize(&lexicon, "");
        assert_eq!(v.len(), 300);
        assert!(v.iter().all(|x| *x == 0.0));

        assert!(vectorize(&lexicon, "   ").iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_vectorize_is_order_independent() {
        let lexicon = toy_lexicon();
        assert_eq!(vectorize(&lexicon, "a b"), vectorize(&lexicon, "b a"));
        assert_eq!(
            vectorize(&lexicon, "peace conflict"),
            vectorize(&lexicon, "conflict peace")
        );
    }

    #[test]
    fn test_vectorize_mean_of_known_words() {
        let lexicon = toy_lexicon();
        assert_eq!(vectorize(&lexicon, "Peace conflict"), vec![0.5, 0.5]);
    }

    #[test]
    fn test_vectorize_duplicates_weight_by_count() {
        let lexicon = toy_lexicon();
        assert_eq!(vectorize(&lexicon, "peace peace peace conflict"), vec![0.75, 0.25]);
    }

    #[test]
    fn test_vectorize_oov_is_deterministic() {
        let lexicon = LexiconStore::empty(32);
        let vectorizer = QueryVectorizer::new(Arc::new(lexicon));

        let first = vectorizer.vectorize("inscrutable quandary");
        let second = vectorizer.vectorize("inscrutable quandary");

        assert_eq!(first.len(), 32);
        assert_eq!(first, second);
        assert!(first.iter().any(|x| *x != 0.0));
    }

    #[test]
    fn test_mean_vector_none_for_no_input() {
        let empty: Vec<Vec<f32>> = Vec::new();
        assert!(mean_vector(&empty, 3).is_none());
    }

    // ============================================================
    // SIMILARITY TESTS
    // ============================================================

    #[test]
    fn test_unit_vector_zero_guard() {
        assert_eq!(unit_vector(&[0.0, 0.0, 0.0]), vec![0.0, 0.0, 0.0]);

        let u = unit_vector(&[3.0, 4.0]);
        assert!((u[0] - 0.6).abs() < EPS);
        assert!((u[1] - 0.8).abs() < EPS);
    }

    #[test]
    fn test_cosine_similarity_bounds() {
        assert!((cosine_similarity(&[1.0, 0.0], &[2.0, 0.0]) - 1.0).abs() < EPS);
        assert!((cosine_similarity(&[1.0, 0.0], &[-3.0, 0.0]) + 1.0).abs() < EPS);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_raw_similarities_within_unit_interval() {
        let table = full_table(24);
        let lexicon = LexiconStore::empty(24);
        let query = vectorize(&lexicon, "what does the future hold for my family");

        for m in score_all(&query, table.as_slice()) {
            assert!(
                (-1.0..=1.0).contains(&m.similarity),
                "similarity {} out of range",
                m.similarity
            );
        }
    }

    // ============================================================
    // RANKING TESTS
    // ============================================================

    #[test]
    fn test_toy_scenario_peace_vs_conflict() {
        let lexicon = toy_lexicon();
        let prototypes = toy_prototypes();

        let query = vectorize(&lexicon, "peace");
        assert_eq!(query, vec![1.0, 0.0]);

        let raw = top_matches(&query, &prototypes, 2);
        assert_eq!(raw[0].hexagram_id, 11);
        assert!((raw[0].similarity - 1.0).abs() < EPS);
        assert_eq!(raw[1].hexagram_id, 6);
        assert!(raw[1].similarity.abs() < EPS);

        let ranked = rank(&query, &prototypes, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].hexagram_name, "Peace");
        assert_eq!(ranked[1].hexagram_name, "Conflict");
        assert!(ranked[0].score > ranked[1].score);

        // e^2 / (e^2 + e^0)
        let expected = (2.0f64.exp() / (2.0f64.exp() + 1.0)) as f32;
        assert!((ranked[0].score - expected).abs() < EPS);
        assert!((ranked[0].score + ranked[1].score - 1.0).abs() < EPS);
    }

    #[test]
    fn test_rank_length_is_min_of_top_k_and_64() {
        let table = full_table(16);
        let query = vectorize(&LexiconStore::empty(16), "should i change jobs");

        for top_k in [1, 6, 10, 64] {
            assert_eq!(rank(&query, table.as_slice(), top_k).len(), top_k);
        }
        assert!(rank(&query, table.as_slice(), 0).is_empty());
    }

    #[test]
    fn test_top_k_above_64_is_clamped_without_duplicates() {
        let table = full_table(16);
        let query = vectorize(&LexiconStore::empty(16), "everything at once");

        let ranked = rank(&query, table.as_slice(), 500);
        assert_eq!(ranked.len(), 64);

        let ids: HashSet<u32> = ranked.iter().map(|r| r.hexagram_id).collect();
        assert_eq!(ids.len(), 64);

        let scores: Vec<f32> = ranked.iter().map(|r| r.score).collect();
        assert!((total(&scores) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_scores_sum_to_one() {
        let table = full_table(32);
        let lexicon = LexiconStore::empty(32);

        for text in ["", "love", "my career and my health", "??? !!!"] {
            let query = vectorize(&lexicon, text);
            let scores: Vec<f32> = rank(&query, table.as_slice(), 6)
                .iter()
                .map(|r| r.score)
                .collect();
            assert!((total(&scores) - 1.0).abs() < EPS, "sum for '{}'", text);
        }
    }

    #[test]
    fn test_score_order_matches_similarity_order() {
        let table = full_table(32);
        let query = vectorize(&LexiconStore::empty(32), "storm over the mountain lake");

        let raw = top_matches(&query, table.as_slice(), 10);
        let ranked = rank(&query, table.as_slice(), 10);

        for (r, m) in ranked.iter().zip(&raw) {
            assert_eq!(r.hexagram_id, m.hexagram_id);
        }
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_zero_query_ties_break_by_ascending_id() {
        let table = full_table(8);
        let ranked = rank(&[0.0; 8], table.as_slice(), 6);

        let ids: Vec<u32> = ranked.iter().map(|r| r.hexagram_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

        for r in &ranked {
            assert!((r.score - 1.0 / 6.0).abs() < EPS);
        }
    }

    #[test]
    fn test_ties_ignore_input_order() {
        let mut prototypes = vec![
            Prototype::new(category(9, "Nine"), vec![1.0, 0.0]),
            Prototype::new(category(2, "Two"), vec![2.0, 0.0]),
            Prototype::new(category(5, "Five"), vec![0.0, 1.0]),
        ];
        let ids = |p: &[Prototype]| -> Vec<u32> {
            rank(&[1.0, 0.0], p, 3).iter().map(|r| r.hexagram_id).collect()
        };

        assert_eq!(ids(&prototypes), vec![2, 9, 5]);
        prototypes.reverse();
        assert_eq!(ids(&prototypes), vec![2, 9, 5]);
    }

    #[test]
    fn test_zero_norm_prototype_scores_zero() {
        let prototypes = vec![
            Prototype::new(category(1, "Empty"), vec![0.0, 0.0]),
            Prototype::new(category(2, "Opposed"), vec![-1.0, 0.0]),
        ];

        let raw = score_all(&[1.0, 0.0], &prototypes);
        assert_eq!(raw[0].hexagram_id, 1);
        assert_eq!(raw[0].similarity, 0.0);
        assert!((raw[1].similarity + 1.0).abs() < EPS);
    }

    // ============================================================
    // RESCALE-AFTER-TRUNCATION
    // ============================================================

    #[test]
    fn test_rescale_is_over_shortlist_not_all_categories() {
        let prototypes = vec![
            Prototype::new(category(1, "A"), vec![1.0, 0.0]),
            Prototype::new(category(2, "B"), vec![0.6, 0.8]),
            Prototype::new(category(3, "C"), vec![0.0, 1.0]),
        ];

        let ranked = rank(&[1.0, 0.0], &prototypes, 2);

        let shortlist = (2.0f64.exp(), 1.2f64.exp());
        let expected_a = (shortlist.0 / (shortlist.0 + shortlist.1)) as f32;
        assert!((ranked[0].score - expected_a).abs() < EPS);

        // A global softmax over all three would give A a smaller share.
        let global_a = (2.0f64.exp() / (2.0f64.exp() + 1.2f64.exp() + 1.0)) as f32;
        assert!(ranked[0].score > global_a + 0.05);
    }

    #[test]
    fn test_categories_outside_top_k_do_not_affect_scores() {
        let mut prototypes = vec![
            Prototype::new(category(1, "A"), vec![1.0, 0.0]),
            Prototype::new(category(2, "B"), vec![0.6, 0.8]),
        ];
        let before = rank(&[1.0, 0.0], &prototypes, 2);

        prototypes.push(Prototype::new(category(3, "C"), vec![0.0, 1.0]));
        prototypes.push(Prototype::new(category(4, "D"), vec![-1.0, 0.0]));
        let after = rank(&[1.0, 0.0], &prototypes, 2);

        assert_eq!(before, after);
    }

    #[test]
    fn test_rescale_uses_factor_two() {
        let scores = rescale(&[0.5, 0.0]);
        let expected = (1.0f64.exp() / (1.0f64.exp() + 1.0)) as f32;
        assert!((scores[0] - expected).abs() < EPS);
        assert!(rescale(&[]).is_empty());
    }
}
