//! Oracle Service
//!
//! Owns the process-lifetime state (lexicon and prototypes) and exposes the single
//! scoring entry point used by the HTTP layer. Everything here is read-only after
//! construction, so one `Arc<OracleService>` serves any number of concurrent callers.

use crate::config::OracleConfig;
use crate::errors::Result;
use crate::hexagram::prototype::PrototypeTable;
use crate::hexagram::types::{Category, HexagramInfo};
use crate::lexicon::LexiconStore;
use crate::search::engine::rank;
use crate::search::types::HexagramScore;
use crate::search::vectorizer::QueryVectorizer;

use std::sync::Arc;
use std::time::Instant;

pub struct OracleService {
    lexicon: Arc<LexiconStore>,
    vectorizer: QueryVectorizer,
    prototypes: PrototypeTable,
    top_k: usize,
}

impl OracleService {
    /// Loads the lexicon described by `config` and builds the prototypes.
    ///
    /// Blocking; call it once before serving.
    pub fn initialize(config: &OracleConfig) -> Result<Arc<Self>> {
        let started = Instant::now();

        let lexicon = if config.use_cache {
            LexiconStore::load_cached(&config.lexicon_path, &config.cache_file(), config.dimension)?
        } else {
            LexiconStore::load(&config.lexicon_path, config.dimension)?
        };

        let service = Self::new(Arc::new(lexicon), config.top_k)?;
        tracing::info!("Oracle initialized in {:?}", started.elapsed());
        Ok(service)
    }

    /// Builds prototypes for the shipped catalog over an already-loaded lexicon.
    pub fn new(lexicon: Arc<LexiconStore>, top_k: usize) -> Result<Arc<Self>> {
        let prototypes = PrototypeTable::from_catalog(&lexicon)?;
        Ok(Arc::new(Self {
            vectorizer: QueryVectorizer::new(lexicon.clone()),
            lexicon,
            prototypes,
            top_k,
        }))
    }

    /// Query vector and its top `top_k` hexagrams. Never fails.
    pub fn process_query(&self, text: &str) -> (Vec<f32>, Vec<HexagramScore>) {
        self.process_query_with(text, self.top_k)
    }

    pub fn process_query_with(&self, text: &str, top_k: usize) -> (Vec<f32>, Vec<HexagramScore>) {
        let query_vector = self.vectorizer.vectorize(text);
        let ranked = rank(&query_vector, self.prototypes.as_slice(), top_k);
        (query_vector, ranked)
    }

    pub fn vectorize(&self, text: &str) -> Vec<f32> {
        self.vectorizer.vectorize(text)
    }

    /// Id, name, glyph and short keyword of every hexagram, without ranking.
    pub fn list_hexagrams(&self) -> Vec<HexagramInfo> {
        self.prototypes.categories().map(HexagramInfo::from).collect()
    }

    pub fn hexagram(&self, id: u32) -> Option<&Category> {
        self.prototypes.get(id).map(|p| &p.category)
    }

    pub fn prototypes(&self) -> &PrototypeTable {
        &self.prototypes
    }

    pub fn lexicon(&self) -> &LexiconStore {
        &self.lexicon
    }

    pub fn dimension(&self) -> usize {
        self.lexicon.dimension()
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }
}
