//! Command line parsing.
//!
//! A line is split once: the verb is the first whitespace-delimited word,
//! the rest is handed to the builtin untouched apart from trimming.
//! Builtins that print text verbatim take the `tail` instead, which keeps
//! any whitespace beyond the single separator after the verb.

use minishell_lib::{split_word, trim};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// Whole line with surrounding whitespace removed.
    pub line: &'a [u8],
    pub verb: &'a [u8],
    /// Everything after the verb, trimmed on both ends.
    pub args: &'a [u8],
    /// Everything after the verb and one separator byte, trimmed at the end.
    pub tail: &'a [u8],
}

/// Split `bytes` into verb and arguments; `None` for a blank line.
pub fn parse_line(bytes: &[u8]) -> Option<ParsedLine<'_>> {
    let line = trim(bytes);
    if line.is_empty() {
        return None;
    }
    let (verb, rest) = split_word(line);
    let tail = line[verb.len()..].get(1..).unwrap_or_default();
    Some(ParsedLine {
        line,
        verb,
        args: trim(rest),
        tail,
    })
}

/// Iterator over whitespace-separated words.
pub struct Words<'a> {
    rest: &'a [u8],
}

pub fn words(bytes: &[u8]) -> Words<'_> {
    Words { rest: bytes }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let (word, rest) = split_word(self.rest);
        self.rest = rest;
        if word.is_empty() { None } else { Some(word) }
    }
}
