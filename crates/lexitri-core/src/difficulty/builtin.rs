//! Builtin Difficulty Tables
//!
//! 難易度判定に使う固定テーブル。すべてコンパイル時定数で、
//! 実行中に変更されない。

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// 技術・学術用語の語尾パターン（末尾アンカー、小文字で照合）
pub const TECHNICAL_SUFFIXES: &[&str] = &[
    "*tion",
    "*sion",
    "*ique",
    "*logie",
    "*graphie",
    "*métrie",
    "*scope",
    "*phage",
    "*gène",
    "*pathie",
    "*thérapie",
];

/// 綴りの複雑さを示すパターン（部分一致、小文字で照合）
///
/// 二重子音・二重字・低頻度文字の3グループ、計17ルール。
pub const COMPLEX_SPELLING: &[&str] = &[
    // 二重子音
    "*cc*", "*mm*", "*nn*", "*ff*", "*ll*", "*rr*", "*ss*", "*tt*", "*pp*",
    // 二重字
    "*ph*", "*th*", "*ch*", "*gn*", "*qu*",
    // 低頻度文字
    "*x*", "*y*", "*w*",
];

/// 複雑綴り判定の閾値（マッチ数がこの値以上でフラグ）
pub const COMPLEX_PATTERN_THRESHOLD: usize = 2;

/// 頻出基礎語（facile判定の上書きリスト）
pub const EASY_WORDS: &[&str] = &[
    "un", "une", "le", "la", "les", "de", "du", "des", "et", "ou", "où",
    "qui", "que", "quoi", "avec", "pour", "dans", "sur", "sous", "par",
    "chat", "chien", "eau", "feu", "air", "terre", "jour", "nuit", "ami",
    "père", "mère", "fils", "fille", "homme", "femme", "enfant", "bébé",
    "rouge", "bleu", "vert", "jaune", "noir", "blanc", "grand", "petit",
    "bon", "mauvais", "beau", "laid", "nouveau", "vieux", "jeune",
    "manger", "boire", "dormir", "marcher", "courir", "voir", "entendre",
    "parler", "écouter", "regarder", "sentir", "toucher", "aimer",
    "maison", "école", "travail", "voiture", "train", "avion", "livre",
    "pain", "lait", "viande", "fruit", "légume", "temps", "argent",
];

/// [`EASY_WORDS`]のルックアップ用セット
pub static EASY_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| EASY_WORDS.iter().copied().collect());

/// フレーズをfacileとする上限（語数）
pub const PHRASE_EASY_MAX_WORDS: usize = 2;
/// フレーズをfacileとする上限（平均語長）
pub const PHRASE_EASY_MAX_AVG_LEN: f64 = 5.0;
/// フレーズをmoyenとする上限（語数）
pub const PHRASE_MEDIUM_MAX_WORDS: usize = 3;
/// フレーズをmoyenとする上限（平均語長）
pub const PHRASE_MEDIUM_MAX_AVG_LEN: f64 = 7.0;

/// 単語をfacileとする上限（文字数）
pub const WORD_EASY_MAX_LEN: usize = 5;
/// 単語をfacileとする上限（音節数）
pub const WORD_EASY_MAX_SYLLABLES: usize = 2;
/// この文字数を超える単語はdifficile
pub const WORD_HARD_LEN: usize = 12;
/// この音節数を超える単語はdifficile
pub const WORD_HARD_SYLLABLES: usize = 4;
/// 複雑綴りの単語がこの文字数を超えるとdifficile
pub const COMPLEX_WORD_LEN: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_spelling_rule_count() {
        assert_eq!(COMPLEX_SPELLING.len(), 17);
    }

    #[test]
    fn test_easy_word_set_contents() {
        assert!(EASY_WORD_SET.contains("chat"));
        assert!(EASY_WORD_SET.contains("un"));
        assert!(EASY_WORD_SET.contains("écouter"));
        assert!(!EASY_WORD_SET.contains("absorption"));
    }

    #[test]
    fn test_suffix_rules_are_end_anchored() {
        assert!(TECHNICAL_SUFFIXES.iter().all(|r| r.starts_with('*')));
        assert!(TECHNICAL_SUFFIXES.iter().all(|r| !r.ends_with('*')));
    }
}
