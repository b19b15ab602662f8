//! splice.rs - Rebuilds text with matched spans replaced.
//!
//! Matches are consumed in ascending offset order and the output is written
//! into a fresh buffer in one left-to-right pass. The running `drift`
//! (output length minus consumed input length) maps each match from input
//! coordinates to output coordinates; it is updated after every replacement
//! so match `i + 1` always sees the drift produced by matches `0..=i`.
//!
//! Overlaps are resolved in favour of the earlier match: a later match that
//! starts inside an already replaced span only has its uncovered tail
//! replaced, and one that lies entirely inside it is reported as
//! `overlapped` without touching the output. Callers wanting the longest
//! match to win at a shared offset must order it first.

use crate::filter_match::{FilterMatch, SubstitutionResult};

/// Incremental output builder. See the module documentation.
#[derive(Debug)]
pub struct Splicer<'a> {
    input: &'a str,
    output: String,
    /// End of the input consumed so far.
    cursor: usize,
    drift: isize,
    /// Output offset of the most recent replacement.
    last_offset: usize,
    collapse_double_spaces: bool,
}

impl<'a> Splicer<'a> {
    pub fn new(input: &'a str, collapse_double_spaces: bool) -> Self {
        Self {
            input,
            output: String::with_capacity(input.len()),
            cursor: 0,
            drift: 0,
            last_offset: 0,
            collapse_double_spaces,
        }
    }

    /// Length change introduced by the replacements applied so far.
    pub fn drift(&self) -> isize {
        self.drift
    }

    /// Replaces the uncovered part of `m` with the text produced by
    /// `replace`. Matches must arrive in ascending offset order.
    ///
    /// `replace` sees the span that is actually removed: the whole match, or
    /// its uncovered tail when it starts inside an earlier replacement. It is
    /// not called for a match that is fully covered.
    pub fn apply<F>(&mut self, m: &FilterMatch, replace: F) -> SubstitutionResult
    where
        F: FnOnce(&FilterMatch) -> String,
    {
        let end = m.end();
        debug_assert!(end <= self.input.len());

        if end <= self.cursor {
            return SubstitutionResult {
                base_word: m.base_word.clone(),
                word: m.word.clone(),
                offset: self.last_offset,
                replacement: String::new(),
                overlapped: true,
            };
        }

        let start = m.offset.max(self.cursor);
        let replacement = if start == m.offset {
            replace(m)
        } else {
            replace(&FilterMatch::new(m.base_word.as_str(), &self.input[start..end], start))
        };

        self.output.push_str(&self.input[self.cursor..start]);
        let mut removed = end - start;

        if self.collapse_double_spaces
            && replacement.is_empty()
            && self.output.ends_with(' ')
            && self.input[end..].starts_with(' ')
        {
            self.output.pop();
            removed += 1;
        }

        let offset = self.output.len();
        self.output.push_str(&replacement);
        self.drift += replacement.len() as isize - removed as isize;
        self.cursor = end;
        self.last_offset = offset;
        debug_assert_eq!(self.output.len() as isize, self.cursor as isize + self.drift);

        SubstitutionResult {
            base_word: m.base_word.clone(),
            word: m.word.clone(),
            offset,
            replacement,
            overlapped: false,
        }
    }

    /// Appends the untouched remainder of the input and returns the output.
    pub fn finish(mut self) -> String {
        self.output.push_str(&self.input[self.cursor..]);
        self.output
    }
}

/// Applies `replace` to every match in order and returns the rewritten text
/// together with one [`SubstitutionResult`] per match.
pub fn splice<F>(
    input: &str,
    matches: &[FilterMatch],
    collapse_double_spaces: bool,
    mut replace: F,
) -> (String, Vec<SubstitutionResult>)
where
    F: FnMut(&FilterMatch) -> String,
{
    let mut splicer = Splicer::new(input, collapse_double_spaces);
    let results = matches.iter().map(|m| splicer.apply(m, &mut replace)).collect();
    (splicer.finish(), results)
}
