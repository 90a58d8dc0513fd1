use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::errors::IndexError;

/// Outcome counts of a load.
#[derive(new, Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub indexed: usize,
    pub duplicates: usize,
    pub invalid: usize,
}

impl LoadReport {
    pub fn seen(&self) -> usize {
        self.indexed + self.duplicates + self.invalid
    }
}

pub trait Index {
    /// Indexes one word and returns its dictionary index.
    fn add(&mut self, word: &str) -> Result<usize, IndexError>;
    fn contains(&self, word: &str) -> bool;

    /// Indexes every non-blank item, skipping the ones `add` rejects.
    fn add_all<'a, I>(&mut self, items: I) -> LoadReport
        where I: IntoIterator<Item=&'a str> {
        let mut report = LoadReport::default();
        items.into_iter()
            .filter(|x| !x.is_empty())
            .for_each(|x| match self.add(x) {
                Ok(_) => {
                    report.indexed += 1;
                    metrics::counter!("permuterm.words_indexed", 1);
                }
                Err(IndexError::DuplicateEntry { .. }) => {
                    log::debug!("skipping duplicate word {:?}", x);
                    report.duplicates += 1;
                    metrics::counter!("permuterm.words_skipped", 1);
                }
                Err(e) => {
                    log::debug!("skipping {:?}: {}", x, e);
                    report.invalid += 1;
                    metrics::counter!("permuterm.words_skipped", 1);
                }
            });
        report
    }
}
