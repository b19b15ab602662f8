//! builder.rs - Structured construction of bad word patterns.
//!
//! A pattern is assembled from typed [`Fragment`]s rather than by string
//! concatenation. Every piece of user-supplied text enters the pattern
//! through [`Fragment::Literal`] or one of the alternation fragments, all of
//! which escape their contents when rendered.
//!
//! The shape of a fully enabled pattern is:
//!
//! ```text
//! \b(?P<word>(?:pre1|pre2)?(?:s|5|\$)h(?:i|1|!|l)(?:t|7)(?:post1|post2)?)\b
//! ```
//!
//! Case sensitivity is not part of the rendered text; it is applied by the
//! compiler when the regex is built.

use crate::config::PatternKey;

/// Name of the capture group holding the matched span.
pub const WORD_GROUP: &str = "word";

/// One typed piece of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A `\b` word boundary assertion.
    WordBoundary,
    /// Literal text.
    Literal(String),
    /// Exactly one of the given literals: `(?:a|b)`.
    Alternation(Vec<String>),
    /// At most one of the given literals: `(?:a|b)?`.
    OptionalAlternation(Vec<String>),
    /// A named capture group around the child fragments.
    Group(&'static str, Vec<Fragment>),
}

impl Fragment {
    pub fn render(&self, out: &mut String) {
        match self {
            Fragment::WordBoundary => out.push_str(r"\b"),
            Fragment::Literal(text) => out.push_str(&regex::escape(text)),
            Fragment::Alternation(options) => render_alternation(options, out),
            Fragment::OptionalAlternation(options) => {
                render_alternation(options, out);
                out.push('?');
            }
            Fragment::Group(name, children) => {
                out.push_str("(?P<");
                out.push_str(name);
                out.push('>');
                for child in children {
                    child.render(out);
                }
                out.push(')');
            }
        }
    }
}

fn render_alternation(options: &[String], out: &mut String) {
    out.push_str("(?:");
    for (i, option) in options.iter().enumerate() {
        if i > 0 {
            out.push('|');
        }
        out.push_str(&regex::escape(option));
    }
    out.push(')');
}

/// Renders a fragment list into pattern source.
pub fn render(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    for fragment in fragments {
        fragment.render(&mut out);
    }
    out
}

/// Builds the fragments describing every surface form of a base word under
/// the settings captured in a [`PatternKey`].
#[derive(Debug, Clone, Copy)]
pub struct PatternBuilder<'a> {
    key: &'a PatternKey,
}

impl<'a> PatternBuilder<'a> {
    pub fn new(key: &'a PatternKey) -> Self {
        Self { key }
    }

    /// Returns `None` for an empty word, which would only ever match
    /// zero-width spans.
    pub fn fragments(&self, word: &str) -> Option<Vec<Fragment>> {
        if word.is_empty() {
            return None;
        }

        let mut inner = Vec::new();
        inner.extend(affix_group(self.key.use_prefixes, &self.key.prefixes));
        inner.extend(self.body(word));
        inner.extend(affix_group(self.key.use_postfixes, &self.key.postfixes));

        let mut fragments = Vec::with_capacity(3);
        if self.key.use_word_boundaries {
            fragments.push(Fragment::WordBoundary);
        }
        fragments.push(Fragment::Group(WORD_GROUP, inner));
        if self.key.use_word_boundaries {
            fragments.push(Fragment::WordBoundary);
        }
        Some(fragments)
    }

    /// Pattern source for `word`, see [`PatternBuilder::fragments`].
    pub fn build(&self, word: &str) -> Option<String> {
        self.fragments(word).map(|fragments| render(&fragments))
    }

    /// Expands each character into itself plus its registered alternatives.
    /// Runs of characters without alternatives are kept as one literal.
    fn body(&self, word: &str) -> Vec<Fragment> {
        if !self.key.use_alternative_characters {
            return vec![Fragment::Literal(word.to_string())];
        }

        let mut body = Vec::new();
        let mut run = String::new();
        for c in word.chars() {
            match self.alternatives_for(c) {
                Some(alternatives) => {
                    if !run.is_empty() {
                        body.push(Fragment::Literal(std::mem::take(&mut run)));
                    }
                    let mut options = vec![c.to_string()];
                    options.extend(alternatives.iter().filter(|a| !a.is_empty()).cloned());
                    body.push(Fragment::Alternation(options));
                }
                None => run.push(c),
            }
        }
        if !run.is_empty() {
            body.push(Fragment::Literal(run));
        }
        body
    }

    fn alternatives_for(&self, c: char) -> Option<&'a Vec<String>> {
        let table = &self.key.alternative_characters;
        if let Some(alternatives) = table.get(&c) {
            return Some(alternatives);
        }
        if self.key.case_sensitive {
            return None;
        }
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) if l != c => table.get(&l),
            _ => None,
        }
    }
}

/// An optional alternation of the non-empty affixes, or nothing at all.
fn affix_group(enabled: bool, affixes: &[String]) -> Option<Fragment> {
    if !enabled {
        return None;
    }
    let options: Vec<String> = affixes.iter().filter(|a| !a.is_empty()).cloned().collect();
    if options.is_empty() {
        None
    } else {
        Some(Fragment::OptionalAlternation(options))
    }
}
