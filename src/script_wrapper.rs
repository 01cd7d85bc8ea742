/*!
 * Script-span wrapping for mixed-script text.
 *
 * Scans a string once, left to right, and brackets every maximal run of
 * characters from a single Unicode range with LaTeX environment markers
 * (`\begin{kannada}...\end{kannada}` by default). Everything outside the
 * range passes through untouched, so removing the markers from the output
 * always gives back the input.
 */

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::ScriptRangeError;

/// Shared Kannada wrapper used by [`wrap_kannada`]
static KANNADA_WRAPPER: Lazy<ScriptWrapper> = Lazy::new(ScriptWrapper::kannada);

/// Inclusive range of code points treated as the target script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScriptRange {
    /// First code point of the range
    pub first: char,

    /// Last code point of the range (inclusive)
    pub last: char,
}

impl ScriptRange {
    /// Kannada block, U+0C80 through U+0CFF
    pub const KANNADA: ScriptRange = ScriptRange::new('\u{0C80}', '\u{0CFF}');

    pub const fn new(first: char, last: char) -> Self {
        Self { first, last }
    }

    /// Check whether a character falls inside the range
    pub fn contains(&self, ch: char) -> bool {
        self.first <= ch && ch <= self.last
    }

    fn parse_code_point(s: &str) -> Result<char, ScriptRangeError> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix("U+")
            .or_else(|| trimmed.strip_prefix("u+"))
            .or_else(|| trimmed.strip_prefix("0x"))
            .unwrap_or(trimmed);

        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| ScriptRangeError::InvalidCodePoint(trimmed.to_string()))?;

        char::from_u32(value).ok_or_else(|| ScriptRangeError::InvalidCodePoint(trimmed.to_string()))
    }
}

impl Default for ScriptRange {
    fn default() -> Self {
        Self::KANNADA
    }
}

impl fmt::Display for ScriptRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}-U+{:04X}", self.first as u32, self.last as u32)
    }
}

// Accepts "U+0C80-U+0CFF", "0x0C80-0x0CFF" or bare "0C80-0CFF"
impl FromStr for ScriptRange {
    type Err = ScriptRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, last) = s
            .split_once('-')
            .ok_or_else(|| ScriptRangeError::InvalidFormat(s.to_string()))?;

        let first = Self::parse_code_point(first)?;
        let last = Self::parse_code_point(last)?;

        if first > last {
            return Err(ScriptRangeError::Inverted {
                first: first as u32,
                last: last as u32,
            });
        }

        Ok(Self::new(first, last))
    }
}

impl TryFrom<String> for ScriptRange {
    type Error = ScriptRangeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScriptRange> for String {
    fn from(range: ScriptRange) -> Self {
        range.to_string()
    }
}

/// A maximal run of characters sharing the same classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    /// Text of the run, borrowed from the scanned input
    pub text: &'a str,

    /// Whether the run belongs to the target script
    pub is_target: bool,
}

/// Wraps runs of one script in LaTeX environment markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptWrapper {
    range: ScriptRange,
    begin: String,
    end: String,
}

impl ScriptWrapper {
    /// Create a wrapper for `range`, delimiting runs with `\begin{environment}` / `\end{environment}`
    pub fn new(range: ScriptRange, environment: &str) -> Self {
        Self {
            range,
            begin: format!("\\begin{{{}}}", environment),
            end: format!("\\end{{{}}}", environment),
        }
    }

    /// Wrapper for the Kannada block with the `kannada` environment
    pub fn kannada() -> Self {
        Self::new(ScriptRange::KANNADA, "kannada")
    }

    pub fn range(&self) -> ScriptRange {
        self.range
    }

    /// Opening marker, e.g. `\begin{kannada}`
    pub fn begin_marker(&self) -> &str {
        &self.begin
    }

    /// Closing marker, e.g. `\end{kannada}`
    pub fn end_marker(&self) -> &str {
        &self.end
    }

    pub fn is_target(&self, ch: char) -> bool {
        self.range.contains(ch)
    }

    /// Wrap every maximal target-script run of `text` in the markers
    pub fn wrap(&self, text: &str) -> String {
        let mut segments: Vec<&str> = Vec::new();

        self.scan(text, |run| {
            if run.is_target {
                segments.push(&self.begin);
                segments.push(run.text);
                segments.push(&self.end);
            } else {
                segments.push(run.text);
            }
        });

        segments.concat()
    }

    /// Split `text` into its maximal runs, in order
    pub fn runs<'a>(&self, text: &'a str) -> Vec<Run<'a>> {
        let mut runs = Vec::new();
        self.scan(text, |run| runs.push(run));
        runs
    }

    /// Number of target-script runs in `text`
    pub fn count_target_runs(&self, text: &str) -> usize {
        let mut count = 0;
        self.scan(text, |run| {
            if run.is_target {
                count += 1;
            }
        });
        count
    }

    // Single pass over `text`. The current run is tracked as a byte offset into
    // the input; it is flushed only when the classification flips, so empty
    // runs are never emitted.
    fn scan<'a>(&self, text: &'a str, mut emit: impl FnMut(Run<'a>)) {
        let mut run_start = 0;
        let mut in_target = false;

        for (idx, ch) in text.char_indices() {
            let is_target = self.is_target(ch);
            if is_target != in_target {
                if idx > run_start {
                    emit(Run {
                        text: &text[run_start..idx],
                        is_target: in_target,
                    });
                }
                run_start = idx;
                in_target = is_target;
            }
        }

        if run_start < text.len() {
            emit(Run {
                text: &text[run_start..],
                is_target: in_target,
            });
        }
    }
}

impl Default for ScriptWrapper {
    fn default() -> Self {
        Self::kannada()
    }
}

/// Wrap Kannada runs of `text` in `\begin{kannada}` / `\end{kannada}`
pub fn wrap_kannada(text: &str) -> String {
    KANNADA_WRAPPER.wrap(text)
}
