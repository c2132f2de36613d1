//! Line-by-line selector substitution.
//!
//! Matching is lexical, not syntactic: a class-selector token is a
//! literal `.` followed by one or more word characters or hyphens.
//! Pseudo-classes, attribute selectors, and combinators are not
//! distinguished. The rewriter is pure over content — it returns the
//! updated text and the diff records; the caller owns file IO.

use regex::Regex;

use crate::changes::SelectorIndex;
use crate::summary::FileDiffRecord;

/// Outcome of rewriting one file's content.
#[derive(Debug)]
pub struct RewriteOutcome {
    /// Rejoined content, present only when some substitution occurred.
    pub new_content: Option<String>,
    /// One record per selector match found in the index.
    pub diffs: Vec<FileDiffRecord>,
}

pub struct Rewriter<'a> {
    index: &'a SelectorIndex,
    token_pattern: Regex,
}

impl<'a> Rewriter<'a> {
    pub fn new(index: &'a SelectorIndex) -> Self {
        Self {
            index,
            token_pattern: Regex::new(r"\.[\w-]+").unwrap(),
        }
    }

    /// Scans `content` for indexed selector tokens and substitutes the
    /// new names. Lines are split and rejoined on `\n`.
    ///
    /// Replacement mechanics: tokens are collected from the line as it
    /// stood at scan start; each indexed token then replaces the first
    /// textual occurrence of itself in the current (possibly
    /// already-rewritten) line, and one diff record is appended per
    /// match found. When duplicate selectors share a line and the new
    /// name contains the old token, the diff count can exceed the
    /// distinct textual substitutions; that behavior is kept as-is.
    pub fn rewrite(&self, file: &str, content: &str) -> RewriteOutcome {
        let mut diffs = Vec::new();
        let mut modified = false;
        let mut new_lines = Vec::new();

        for (index, original_line) in content.split('\n').enumerate() {
            let line_number = index + 1;
            let mut line = original_line.to_string();

            let tokens: Vec<String> = self
                .token_pattern
                .find_iter(original_line)
                .map(|m| m.as_str().to_string())
                .collect();

            for token in tokens {
                if let Some(change) = self.index.get(&token) {
                    let new_selector = format!(".{}", change.new_class);
                    line = line.replacen(&token, &new_selector, 1);
                    modified = true;

                    diffs.push(FileDiffRecord {
                        file: file.to_string(),
                        line: line_number,
                        old_class: change.old_class.clone(),
                        new_class: change.new_class.clone(),
                    });
                }
            }

            new_lines.push(line);
        }

        RewriteOutcome {
            new_content: modified.then(|| new_lines.join("\n")),
            diffs,
        }
    }
}
