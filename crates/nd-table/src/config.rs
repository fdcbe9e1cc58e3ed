//! Configuration for a table session.

use std::path::Path;

use nd_engine::PresetBook;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::TableResult;

/// Configuration for a table session.
#[derive(Debug, Clone, Default)]
pub struct TableConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Maximum number of journal entries kept. `None` keeps everything.
    pub history_limit: Option<usize>,
    /// Presets offered at this table.
    pub presets: PresetBook,
}

impl TableConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cap the journal at `limit` entries (at least one).
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit.max(1));
        self
    }

    /// Replace the preset book.
    pub fn with_presets(mut self, presets: PresetBook) -> Self {
        self.presets = presets;
        self
    }

    /// Replace the preset book with one read from a JSON file.
    pub fn with_presets_file(self, path: &Path) -> TableResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let presets = PresetBook::from_json(&json)?;
        Ok(self.with_presets(presets))
    }

    /// Build the session RNG.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
