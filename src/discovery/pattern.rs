//! Shell-style pattern matching for exclusions
//!
//! Patterns follow `fnmatch` rules rather than gitignore rules:
//!
//! - `*` matches any run of characters, path separators included
//! - `?` matches exactly one character
//! - `[seq]` / `[!seq]` match one character in / not in the set, ranges allowed
//! - an unterminated `[` is an ordinary character
//!
//! Matching is case-sensitive and always covers the whole candidate.
//! Each pattern is translated into an anchored regular expression once and
//! then reused for every candidate.

use crate::error::ScanError;
use regex::Regex;

/// Never matches: a word boundary and a non-boundary at the same position.
const MATCH_NOTHING: &str = r"\b\B";

/// Translate a shell-style pattern into an anchored regex.
pub fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut regex = String::with_capacity(pattern.len() * 2 + 8);
    regex.push_str("^(?s:");

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                // Runs of stars behave like a single one
                while i < chars.len() && chars[i] == '*' {
                    i += 1;
                }
                regex.push_str(".*");
            }
            '?' => regex.push('.'),
            '[' => match translate_class(&chars, i) {
                Some((class, next)) => {
                    regex.push_str(&class);
                    i = next;
                }
                None => regex.push_str(r"\["),
            },
            _ => push_literal(&mut regex, c),
        }
    }

    regex.push_str(")$");
    regex
}

/// Translate a bracket expression starting right after its `[`.
///
/// Returns the regex fragment and the index following the closing `]`, or
/// `None` when the bracket is never closed.
fn translate_class(chars: &[char], start: usize) -> Option<(String, usize)> {
    let mut end = start;
    if end < chars.len() && chars[end] == '!' {
        end += 1;
    }
    // A `]` right after `[` or `[!` belongs to the set
    if end < chars.len() && chars[end] == ']' {
        end += 1;
    }
    while end < chars.len() && chars[end] != ']' {
        end += 1;
    }
    if end >= chars.len() {
        return None;
    }

    let (negated, body) = match chars[start..end].split_first() {
        Some(('!', rest)) => (true, rest),
        _ => (false, &chars[start..end]),
    };

    let mut items = String::new();
    let mut k = 0;
    while k < body.len() {
        let lo = body[k];
        if k + 2 < body.len() && body[k + 1] == '-' {
            let hi = body[k + 2];
            // Reversed ranges match nothing
            if lo <= hi {
                push_literal(&mut items, lo);
                items.push('-');
                push_literal(&mut items, hi);
            }
            k += 3;
        } else {
            push_literal(&mut items, lo);
            k += 1;
        }
    }

    let fragment = match (items.is_empty(), negated) {
        (true, true) => ".".to_string(),
        (true, false) => MATCH_NOTHING.to_string(),
        (false, true) => format!("[^{items}]"),
        (false, false) => format!("[{items}]"),
    };
    Some((fragment, end + 1))
}

fn push_literal(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

/// Compile a single pattern.
pub fn compile(pattern: &str) -> Result<Regex, ScanError> {
    Regex::new(&translate(pattern)).map_err(|source| ScanError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Test whether `pattern` matches the whole of `candidate`.
pub fn matches(pattern: &str, candidate: &str) -> bool {
    compile(pattern)
        .map(|re| re.is_match(candidate))
        .unwrap_or(false)
}

/// Compiled exclusion patterns, tested in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    patterns: Vec<String>,
    compiled: Vec<Regex>,
}

impl ExcludeSet {
    pub fn new<I, S>(patterns: I) -> Result<Self, ScanError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for pattern in patterns {
            let pattern = pattern.into();
            set.compiled.push(compile(&pattern)?);
            set.patterns.push(pattern);
        }
        tracing::debug!("Compiled {} exclude patterns", set.patterns.len());
        Ok(set)
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    /// The source patterns, in the order they are tested.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Check a candidate by bare name and, when known, by its `/`-separated
    /// path relative to the scan root.
    pub fn is_excluded(&self, name: &str, relative_path: Option<&str>) -> bool {
        self.matching_pattern(name, relative_path).is_some()
    }

    /// The first pattern that excludes the candidate, if any.
    pub fn matching_pattern(&self, name: &str, relative_path: Option<&str>) -> Option<&str> {
        self.compiled
            .iter()
            .zip(&self.patterns)
            .find(|(re, _)| re.is_match(name) || relative_path.is_some_and(|rel| re.is_match(rel)))
            .map(|(_, pattern)| pattern.as_str())
    }
}
