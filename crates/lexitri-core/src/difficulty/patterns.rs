//! Spelling Pattern Matching
//!
//! 固定ルールテーブルに基づく綴りパターンの照合。
//! 技術用語の語尾と複雑綴りのシグナルを検出する。

use glob::Pattern;

use crate::error::Result;

use super::builtin::{COMPLEX_PATTERN_THRESHOLD, COMPLEX_SPELLING, TECHNICAL_SUFFIXES};

/// コンパイル済みパターン照合器
///
/// ルールテーブルは構築時に一度だけコンパイルされる。
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    technical: Vec<Pattern>,
    complex: Vec<Pattern>,
}

impl PatternMatcher {
    /// ビルトインテーブルから照合器を構築
    pub fn new() -> Result<Self> {
        Ok(Self {
            technical: compile(TECHNICAL_SUFFIXES)?,
            complex: compile(COMPLEX_SPELLING)?,
        })
    }

    /// 技術・学術用語の語尾を持つか
    pub fn is_technical_term(&self, word: &str) -> bool {
        let lowered = word.to_lowercase();
        self.technical.iter().any(|p| p.matches(&lowered))
    }

    /// マッチする複雑綴りルールの数
    ///
    /// ルールは互いに独立で、1ルールにつき最大1カウント。
    pub fn complex_pattern_count(&self, word: &str) -> usize {
        let lowered = word.to_lowercase();
        self.complex.iter().filter(|p| p.matches(&lowered)).count()
    }

    /// 複雑綴りと判定されるか（マッチ数が閾値以上）
    pub fn has_complex_spelling(&self, word: &str) -> bool {
        self.complex_pattern_count(word) >= COMPLEX_PATTERN_THRESHOLD
    }
}

fn compile(rules: &[&str]) -> Result<Vec<Pattern>> {
    rules
        .iter()
        .map(|r| Pattern::new(r).map_err(Into::into))
        .collect()
}
