use crate::alphabet::END;

/// Iterator over the cyclic rotations of `word + END`.
///
/// Rotation 0 is `word + END`; rotation `k` moves the first `k` symbols to the back.
/// Any character is accepted, so query patterns containing `*` rotate the same way.
#[derive(Debug, Clone)]
pub struct Rotations {
    symbols: Vec<char>,
    next: usize,
}

impl Rotations {
    pub fn new(word: &str) -> Rotations {
        let mut symbols: Vec<char> = word.chars().collect();
        symbols.push(END);
        Rotations { symbols, next: 0 }
    }
}

impl Iterator for Rotations {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.symbols.len() {
            return None;
        }
        let (head, tail) = self.symbols.split_at(self.next);
        self.next += 1;
        Some(tail.iter().chain(head.iter()).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.symbols.len() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Rotations {}

pub fn rotations(word: &str) -> Rotations {
    Rotations::new(word)
}
