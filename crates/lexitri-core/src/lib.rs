pub mod config;
pub mod dictionary;
pub mod difficulty;
pub mod error;
pub mod harvest;

pub use config::{BuildConfig, Config, HarvestConfig};
pub use dictionary::{
    CategorizedDictionary, DictionaryBuilder, DictionarySummary, TierSummary, SUMMARY_EXAMPLES,
};
pub use difficulty::{
    estimate_syllables, DifficultyClassifier, DifficultyTier, PatternMatcher,
};
pub use error::{LexitriError, Result};
pub use harvest::{harvest, HarvestOptions, HarvestReport};
