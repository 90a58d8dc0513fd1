//! Wildcard classification and rewriting.
//!
//! A query is one of
//! - `word`: exact lookup of `word + END`,
//! - `*mid*`: any word containing `mid`, i.e. any rotation starting with `mid`,
//! - `a*b` (either side may be empty): rotate `a*b + END` until the `*` is the
//!   last symbol and drop it. `a*b` becomes `b$a`, `ab*` becomes `$ab`, `*ab`
//!   becomes `ab$`. Every word matching the pattern has a rotation starting
//!   with that prefix.
//!
//! Both wildcard forms end up as a prefix search in the permuterm trie.

use std::option;

use nom::branch::alt;
use nom::character::complete::{alpha1, char};
use nom::combinator::{map, value};
use nom::multi::many0;
use nom::IResult;

use crate::errors::IndexError;
use crate::permuterm::rotations;
use crate::wordlist::trie::trie::Trie;
use crate::wordlist::trie::Matches;

pub const WILDCARD: char = '*';

#[derive(Debug, PartialEq, Eq, Clone)]
enum Segment {
    Letters(String),
    Star,
}

fn segment(input: &str) -> IResult<&str, Segment> {
    alt((
        map(alpha1, |s: &str| Segment::Letters(s.to_ascii_lowercase())),
        value(Segment::Star, char(WILDCARD)),
    ))(input)
}

fn segments(input: &str) -> IResult<&str, Vec<Segment>> {
    many0(segment)(input)
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Pattern {
    /// No wildcard; the lowercased word.
    Exact(String),
    /// `*mid*`; the text between the stars.
    Infix(String),
    /// One `*`; the rotation prefix to search for.
    Rotated(String),
}

impl Pattern {
    /// Classifies `query`, lowercasing it into a fresh string.
    pub fn parse(query: &str) -> Result<Pattern, IndexError> {
        let (rest, parts) = segments(query)
            .map_err(|_| IndexError::UnsupportedPattern { pattern: query.to_string() })?;
        if let Some(symbol) = rest.chars().next() {
            return Err(IndexError::InvalidSymbol { symbol, input: query.to_string() });
        }

        let stars = parts.iter().filter(|x| **x == Segment::Star).count();
        let normalized: String = parts.iter()
            .map(|x| match x {
                Segment::Letters(s) => s.as_str(),
                Segment::Star => "*",
            })
            .collect();

        match stars {
            0 => Ok(Pattern::Exact(normalized)),
            1 => Self::rotate(&normalized)
                .map(Pattern::Rotated)
                .ok_or_else(|| IndexError::UnsupportedPattern { pattern: query.to_string() }),
            2 if parts.first() == Some(&Segment::Star) && parts.last() == Some(&Segment::Star) =>
                Ok(Pattern::Infix(normalized.trim_matches(WILDCARD).to_string())),
            _ => Err(IndexError::UnsupportedPattern { pattern: query.to_string() }),
        }
    }

    fn rotate(pattern: &str) -> Option<String> {
        rotations(pattern)
            .find(|r| r.ends_with(WILDCARD))
            .map(|mut r| {
                r.pop();
                r
            })
    }

    pub fn is_wildcard(&self) -> bool {
        !matches!(self, Pattern::Exact(_))
    }

    /// The string walked in the trie: the word itself for exact lookups, the
    /// prefix otherwise.
    pub fn key(&self) -> &str {
        match self {
            Pattern::Exact(s) | Pattern::Infix(s) | Pattern::Rotated(s) => s,
        }
    }

    pub fn resolve<'t>(&self, trie: &'t Trie) -> Resolved<'t> {
        log::trace!("resolving {:?}", self);
        match self {
            Pattern::Exact(word) => Resolved::Single(trie.search(word).ok().into_iter()),
            Pattern::Infix(prefix) | Pattern::Rotated(prefix) => Resolved::Subtree(trie.prefix_matches(prefix)),
        }
    }
}

/// Lazy, possibly repeating dictionary indices for one resolved pattern.
#[derive(Debug, Clone)]
pub enum Resolved<'t> {
    Single(option::IntoIter<usize>),
    Subtree(Matches<'t>),
}

impl<'t> Iterator for Resolved<'t> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Resolved::Single(x) => x.next(),
            Resolved::Subtree(x) => x.next(),
        }
    }
}
