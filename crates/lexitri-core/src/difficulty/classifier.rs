//! Difficulty Classifier
//!
//! 単語・フレーズを3段階の難易度（facile / moyen / difficile）に分類する。
//! 固定ルールのカスケードで、先にマッチした規則が勝つ。

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::builtin::{
    COMPLEX_WORD_LEN, EASY_WORD_SET, PHRASE_EASY_MAX_AVG_LEN, PHRASE_EASY_MAX_WORDS,
    PHRASE_MEDIUM_MAX_AVG_LEN, PHRASE_MEDIUM_MAX_WORDS, WORD_EASY_MAX_LEN,
    WORD_EASY_MAX_SYLLABLES, WORD_HARD_LEN, WORD_HARD_SYLLABLES,
};
use super::patterns::PatternMatcher;
use super::syllable::estimate_syllables;

/// 難易度ティア
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Facile,
    Moyen,
    Difficile,
}

impl DifficultyTier {
    /// 全ティア（出力順）
    pub fn all() -> &'static [DifficultyTier] {
        &[Self::Facile, Self::Moyen, Self::Difficile]
    }

    /// ティア名（出力ファイルのトップレベルキーと同一）
    pub fn name(&self) -> &'static str {
        match self {
            Self::Facile => "facile",
            Self::Moyen => "moyen",
            Self::Difficile => "difficile",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 難易度分類器
///
/// パターン照合器と基礎語セットを保持し、テキスト1件を
/// [`DifficultyTier`]に写す。状態は構築後すべて不変。
pub struct DifficultyClassifier {
    patterns: PatternMatcher,
    easy_words: &'static HashSet<&'static str>,
}

impl DifficultyClassifier {
    /// ビルトインテーブルで分類器を構築
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: PatternMatcher::new()?,
            easy_words: &EASY_WORD_SET,
        })
    }

    /// テキスト1件を難易度に分類する
    ///
    /// 空白区切りで2語以上ならフレーズ規則、それ以外は単語規則。
    pub fn categorize(&self, text: &str) -> DifficultyTier {
        let tokens: Vec<&str> = text.split_whitespace().collect();

        if tokens.len() > 1 {
            return self.categorize_phrase(text, &tokens);
        }

        self.categorize_word(tokens.first().copied().unwrap_or(""))
    }

    /// フレーズ規則：語数と平均語長で判定
    fn categorize_phrase(&self, text: &str, tokens: &[&str]) -> DifficultyTier {
        let total_len = text.chars().filter(|c| *c != ' ').count();
        let avg_len = total_len as f64 / tokens.len() as f64;

        if tokens.len() <= PHRASE_EASY_MAX_WORDS && avg_len <= PHRASE_EASY_MAX_AVG_LEN {
            DifficultyTier::Facile
        } else if tokens.len() <= PHRASE_MEDIUM_MAX_WORDS && avg_len <= PHRASE_MEDIUM_MAX_AVG_LEN {
            DifficultyTier::Moyen
        } else {
            DifficultyTier::Difficile
        }
    }

    /// 単語規則：技術語尾 → 複雑綴り → 基礎語 → 長さ・音節の順に評価
    fn categorize_word(&self, word: &str) -> DifficultyTier {
        let len = word.chars().count();
        let syllables = estimate_syllables(word);

        if self.patterns.is_technical_term(word) {
            return DifficultyTier::Difficile;
        }

        if self.patterns.has_complex_spelling(word) && len > COMPLEX_WORD_LEN {
            return DifficultyTier::Difficile;
        }

        if (len <= WORD_EASY_MAX_LEN && syllables <= WORD_EASY_MAX_SYLLABLES)
            || self.easy_words.contains(word.to_lowercase().as_str())
        {
            return DifficultyTier::Facile;
        }

        // 末尾2条件は規則1・2と重複するが、カスケードの安全網として残す
        if len > WORD_HARD_LEN
            || syllables > WORD_HARD_SYLLABLES
            || self.patterns.is_technical_term(word)
            || self.patterns.has_complex_spelling(word)
        {
            return DifficultyTier::Difficile;
        }

        DifficultyTier::Moyen
    }
}
