use delegate::delegate;
use serde::{Deserialize, Serialize};

/// Append-only store of the original words, addressed by insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Default::default()
    }

    /// Stores `word` and returns its index. No duplicate check happens here.
    pub fn append(&mut self, word: String) -> usize {
        self.words.push(word);
        self.words.len() - 1
    }

    /// Indices come from the trie, which only hands out ones it was given.
    pub fn get(&self, index: usize) -> &str {
        &self.words[index]
    }

    pub fn next_index(&self) -> usize {
        self.words.len()
    }

    delegate! {
        to self.words {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> std::slice::Iter<'_, String>;
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::wordlist::dictionary::Dictionary;

    #[test]
    fn indices_follow_insertion_order() {
        let mut dic = Dictionary::new();
        assert!(dic.is_empty());
        assert_eq!(dic.append("cat".to_string()), 0);
        assert_eq!(dic.next_index(), 1);
        assert_eq!(dic.append("cats".to_string()), 1);
        assert_eq!(dic.append("cat".to_string()), 2);
        assert_eq!(dic.get(1), "cats");
        assert_eq!(dic.len(), 3);
        assert_eq!(dic.iter().map(String::as_str).collect::<Vec<_>>(), vec!["cat", "cats", "cat"]);
    }
}
