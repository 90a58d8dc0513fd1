use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use typed_arena::Arena;
use typed_builder::TypedBuilder;

use crate::alphabet::{normalize, END};
use crate::errors::IndexError;
use crate::permuterm::rotations;
use crate::wordlist::dictionary::Dictionary;
use crate::wordlist::index::{Index, LoadReport};
use crate::wordlist::query::{Pattern, WILDCARD};
use crate::wordlist::trie::searchconfig::SearchConfig;
use crate::wordlist::trie::trie::Trie;
use crate::wordlist::trie::trie_builder::TrieBuilder;
use crate::wordlist::trie::BuilderNode;

/// How words are laid out in a word-list file.
///
/// Without a delimiter every whitespace-separated token is a word. With one,
/// each line is split on it and `word_column` (default 0) is the word.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self.delimiter {
            None => line.split_whitespace().collect(),
            Some(delimiter) => line.split(delimiter)
                .nth(self.word_column.unwrap_or(0))
                .map(|x| vec![x.trim()])
                .unwrap_or_default(),
        }
    }
}

/// Load-phase state: the growing trie plus the dictionary it points into.
pub struct Loader<'a> {
    trie: TrieBuilder<'a>,
    dictionary: Dictionary,
    config: SearchConfig,
}

impl<'a> Loader<'a> {
    pub fn new(arena: &'a Arena<BuilderNode<'a>>, config: SearchConfig) -> Loader<'a> {
        Loader {
            trie: TrieBuilder::new(arena),
            dictionary: Dictionary::new(),
            config,
        }
    }

    /// Freezes the trie. Nothing can be added afterwards.
    pub fn finish(self, report: LoadReport) -> Wordlist {
        Wordlist {
            trie: self.trie.build(),
            dictionary: self.dictionary,
            config: self.config,
            report,
        }
    }
}

impl Index for Loader<'_> {
    /// Lowercases `word`, then inserts all of its permuterms under the next
    /// dictionary index. The first permuterm decides duplicates: distinct words
    /// never share a rotation, so once it is in the rest cannot collide.
    fn add(&mut self, word: &str) -> Result<usize, IndexError> {
        if let Some(max) = self.config.max_word_len {
            if word.chars().count() > max {
                return Err(IndexError::WordTooLong { word: word.to_string(), max });
            }
        }
        let word = normalize(word)?;
        let index = self.dictionary.next_index();

        let mut permuterms = rotations(&word);
        if let Some(first) = permuterms.next() {
            self.trie.insert(&first, index)?;
        }
        self.dictionary.append(word);
        for permuterm in permuterms {
            self.trie.insert(&permuterm, index)?;
        }
        Ok(index)
    }

    fn contains(&self, word: &str) -> bool {
        normalize(word)
            .map(|mut w| {
                w.push(END);
                self.trie.get(&w).is_some()
            })
            .unwrap_or(false)
    }
}

/// Result of one query, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult<'w> {
    pub query: String,
    pub wildcard: bool,
    pub matches: Vec<&'w str>,
}

impl QueryResult<'_> {
    pub fn found(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// A frozen permuterm index over a dictionary of words.
pub struct Wordlist {
    trie: Trie,
    dictionary: Dictionary,
    config: SearchConfig,
    report: LoadReport,
}

impl Wordlist {
    pub fn build<'f, I>(words: I) -> Wordlist
        where I: IntoIterator<Item=&'f str> {
        Self::build_with_config(words, SearchConfig::new())
    }

    /// Indexes `words` in order. Words that are not purely alphabetic, too
    /// long, or already present are skipped and counted in the report.
    pub fn build_with_config<'f, I>(words: I, config: SearchConfig) -> Wordlist
        where I: IntoIterator<Item=&'f str> {
        let start = Instant::now();
        let arena = Arena::new();
        let mut loader = Loader::new(&arena, config);
        let report = loader.add_all(words);
        let wordlist = loader.finish(report);

        log::info!("indexed {} words ({} duplicates, {} invalid) as {} permuterms in {:.3}s",
                   report.indexed, report.duplicates, report.invalid,
                   wordlist.trie.len(), start.elapsed().as_secs_f64());
        wordlist
    }

    pub fn from_reader<R: BufRead>(reader: R, format: &FileFormat,
                                   config: SearchConfig) -> Result<Wordlist, IndexError> {
        let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
        let words = lines.iter().flat_map(|line| format.parse_line(line));
        Ok(Self::build_with_config(words, config))
    }

    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat,
                                     config: SearchConfig) -> Result<Wordlist, IndexError> {
        log::info!("reading words from {:?}", path.as_ref());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), format, config)
    }

    /// Matching words for `query`, distinct and in dictionary order.
    ///
    /// A query without matches yields an empty list. Only malformed queries
    /// are errors.
    pub fn lookup(&self, query: &str) -> Result<Vec<&str>, IndexError> {
        let pattern = Pattern::parse(query)?;
        metrics::counter!("permuterm.queries", 1);

        let indices: BTreeSet<usize> = pattern.resolve(&self.trie).collect();
        Ok(indices.into_iter()
            .take(self.config.max_results.unwrap_or(usize::MAX))
            .map(|i| self.dictionary.get(i))
            .collect())
    }

    pub fn query(&self, query: &str) -> Result<QueryResult<'_>, IndexError> {
        let wildcard = Pattern::parse(query)?.is_wildcard();
        Ok(QueryResult {
            query: query.to_string(),
            wildcard,
            matches: self.lookup(query)?,
        })
    }

    /// Resolves queries in parallel; results line up with `queries`.
    pub fn lookup_many<S>(&self, queries: &[S]) -> Vec<Result<Vec<&str>, IndexError>>
        where S: AsRef<str> + Sync {
        queries.par_iter()
            .map(|q| self.lookup(q.as_ref()))
            .collect()
    }

    /// Words that begin with `prefix`.
    pub fn prefix(&self, prefix: &str) -> Result<Vec<&str>, IndexError> {
        let mut pattern = normalize(prefix)?;
        pattern.push(WILDCARD);
        self.lookup(&pattern)
    }

    pub fn contains(&self, word: &str) -> bool {
        normalize(word)
            .map(|w| self.trie.search(&w).is_ok())
            .unwrap_or(false)
    }

    pub fn words(&self) -> impl Iterator<Item=&str> {
        self.dictionary.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn report(&self) -> LoadReport {
        self.report
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
