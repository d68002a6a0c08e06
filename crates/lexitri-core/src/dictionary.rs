use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::difficulty::{DifficultyClassifier, DifficultyTier};
use crate::error::{LexitriError, Result};

/// Number of example entries reported per tier
pub const SUMMARY_EXAMPLES: usize = 5;

/// Vocabulary entries grouped by difficulty tier
///
/// Field order fixes the top-level key order of the output file;
/// BTreeMap buckets keep the inner key order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedDictionary {
    pub facile: BTreeMap<String, String>,
    pub moyen: BTreeMap<String, String>,
    pub difficile: BTreeMap<String, String>,
}

impl CategorizedDictionary {
    /// Entries of a single tier
    pub fn tier(&self, tier: DifficultyTier) -> &BTreeMap<String, String> {
        match tier {
            DifficultyTier::Facile => &self.facile,
            DifficultyTier::Moyen => &self.moyen,
            DifficultyTier::Difficile => &self.difficile,
        }
    }

    fn tier_mut(&mut self, tier: DifficultyTier) -> &mut BTreeMap<String, String> {
        match tier {
            DifficultyTier::Facile => &mut self.facile,
            DifficultyTier::Moyen => &mut self.moyen,
            DifficultyTier::Difficile => &mut self.difficile,
        }
    }

    /// Insert an entry into its tier bucket
    pub fn insert(&mut self, tier: DifficultyTier, asset_id: String, text: String) {
        self.tier_mut(tier).insert(asset_id, text);
    }

    /// Total entry count across all tiers
    pub fn total(&self) -> usize {
        DifficultyTier::all().iter().map(|t| self.tier(*t).len()).sum()
    }

    /// Per-tier counts and example entries for reporting
    pub fn summary(&self) -> DictionarySummary {
        let tiers = DifficultyTier::all()
            .iter()
            .map(|&tier| {
                let entries = self.tier(tier);
                TierSummary {
                    tier,
                    count: entries.len(),
                    examples: entries
                        .iter()
                        .take(SUMMARY_EXAMPLES)
                        .map(|(id, text)| (id.clone(), text.clone()))
                        .collect(),
                }
            })
            .collect();

        DictionarySummary {
            tiers,
            total: self.total(),
        }
    }

    /// Write as pretty-printed JSON, non-ASCII characters literal
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Report data derived from a built dictionary
#[derive(Debug, Clone)]
pub struct DictionarySummary {
    pub tiers: Vec<TierSummary>,
    pub total: usize,
}

/// Count and example entries of one tier
#[derive(Debug, Clone)]
pub struct TierSummary {
    pub tier: DifficultyTier,
    pub count: usize,
    pub examples: Vec<(String, String)>,
}

/// Batch classifier over an assetId -> text input mapping
pub struct DictionaryBuilder {
    classifier: DifficultyClassifier,
}

impl DictionaryBuilder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            classifier: DifficultyClassifier::new()?,
        })
    }

    /// Load the input mapping produced by the harvest step
    pub fn load_entries(&self, path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Err(LexitriError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| LexitriError::InvalidJson {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Classify every entry into its tier bucket
    ///
    /// Every input key lands in exactly one bucket.
    pub fn build(&self, entries: &BTreeMap<String, String>) -> CategorizedDictionary {
        let mut dictionary = CategorizedDictionary::default();
        for (asset_id, text) in entries {
            let tier = self.classifier.categorize(text);
            dictionary.insert(tier, asset_id.clone(), text.clone());
        }
        dictionary
    }

    /// The classifier used for the batch
    pub fn classifier(&self) -> &DifficultyClassifier {
        &self.classifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn sample_entries() -> BTreeMap<String, String> {
        [
            ("0001.flac", "chat"),
            ("0002.flac", "absorption"),
            ("0003.flac", "jardin"),
            ("0004.flac", "le chat"),
            ("0005.flac", "le petit chaton mignon"),
            ("0006.flac", "bébé"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_build_partitions_the_input() {
        let builder = DictionaryBuilder::new().unwrap();
        let entries = sample_entries();
        let dictionary = builder.build(&entries);

        let mut seen: BTreeSet<&String> = BTreeSet::new();
        for tier in DifficultyTier::all() {
            for key in dictionary.tier(*tier).keys() {
                // pairwise disjoint
                assert!(seen.insert(key), "{key} appears in two tiers");
            }
        }

        // union equals the input key set
        let expected: BTreeSet<&String> = entries.keys().collect();
        assert_eq!(seen, expected);
        assert_eq!(dictionary.total(), entries.len());
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = DictionaryBuilder::new().unwrap();
        let entries = sample_entries();

        let first = builder.build(&entries);
        let second = builder.build(&entries);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string_pretty(&first).unwrap(),
            serde_json::to_string_pretty(&second).unwrap()
        );
    }

    #[test]
    fn test_build_places_entries_by_rule() {
        let builder = DictionaryBuilder::new().unwrap();
        let dictionary = builder.build(&sample_entries());

        assert!(dictionary.facile.contains_key("0001.flac"));
        assert!(dictionary.difficile.contains_key("0002.flac"));
        assert!(dictionary.moyen.contains_key("0003.flac"));
        assert!(dictionary.facile.contains_key("0004.flac"));
        assert!(dictionary.difficile.contains_key("0005.flac"));
    }

    #[test]
    fn test_summary_counts_and_examples() {
        let builder = DictionaryBuilder::new().unwrap();
        let dictionary = builder.build(&sample_entries());
        let summary = dictionary.summary();

        assert_eq!(summary.total, 6);
        assert_eq!(summary.tiers.len(), 3);

        let facile = &summary.tiers[0];
        assert_eq!(facile.tier, DifficultyTier::Facile);
        assert_eq!(facile.count, 3);
        assert!(facile.examples.len() <= SUMMARY_EXAMPLES);
    }

    #[test]
    fn test_save_writes_literal_utf8() {
        let builder = DictionaryBuilder::new().unwrap();
        let dictionary = builder.build(&sample_entries());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words_dictionary.json");
        dictionary.save(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("bébé"));
        assert!(!content.contains("\\u"));

        let reloaded: CategorizedDictionary = serde_json::from_str(&content).unwrap();
        assert_eq!(reloaded, dictionary);
    }

    #[test]
    fn test_output_key_order() {
        let dictionary = CategorizedDictionary::default();
        let content = serde_json::to_string(&dictionary).unwrap();
        let facile = content.find("\"facile\"").unwrap();
        let moyen = content.find("\"moyen\"").unwrap();
        let difficile = content.find("\"difficile\"").unwrap();
        assert!(facile < moyen && moyen < difficile);
    }

    #[test]
    fn test_load_missing_input() {
        let builder = DictionaryBuilder::new().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words_flac.json");

        let err = builder.load_entries(&path).unwrap_err();
        assert!(matches!(err, LexitriError::InputNotFound { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_load_invalid_json() {
        let builder = DictionaryBuilder::new().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words_flac.json");
        fs::write(&path, "not json at all").unwrap();

        let err = builder.load_entries(&path).unwrap_err();
        assert!(matches!(err, LexitriError::InvalidJson { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_load_round_trip() {
        let builder = DictionaryBuilder::new().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words_flac.json");
        fs::write(&path, r#"{"0001.flac": "château"}"#).unwrap();

        let entries = builder.load_entries(&path).unwrap();
        assert_eq!(entries.get("0001.flac").map(String::as_str), Some("château"));
    }
}
