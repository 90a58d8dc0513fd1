use crate::errors::IndexError;

/// End-of-word sentinel. Never occurs inside an indexed word.
pub const END: char = '$';

pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz$".as_bytes();
pub const ALPHABET_LEN: usize = 27;

/// Index of `END` among the trie's children; it sorts after every letter.
pub const END_IDX: usize = ALPHABET_LEN - 1;

pub fn get_idx(a: char) -> Option<usize> {
    match a {
        END => Some(END_IDX),
        'a'..='z' => Some((a as u8 - b'a') as usize),
        _ => None,
    }
}

pub fn get_symbol(idx: usize) -> char {
    ALPHABET[idx] as char
}

/// Lowercases `s` into a fresh string, rejecting anything that is not an ASCII letter.
pub fn normalize(s: &str) -> Result<String, IndexError> {
    s.chars()
        .map(|c| {
            let lower = c.to_ascii_lowercase();
            if lower.is_ascii_lowercase() {
                Ok(lower)
            } else {
                Err(IndexError::InvalidSymbol { symbol: c, input: s.to_string() })
            }
        })
        .collect()
}

/// Maps a permuterm onto child indices, failing on the first symbol outside the alphabet.
pub fn symbols(permuterm: &str) -> Result<Vec<usize>, IndexError> {
    permuterm.chars()
        .map(|c| get_idx(c).ok_or_else(|| IndexError::InvalidSymbol {
            symbol: c,
            input: permuterm.to_string(),
        }))
        .collect()
}


#[cfg(test)]
mod tests {
    use crate::alphabet::{get_idx, get_symbol, normalize, symbols, END, END_IDX};
    use crate::errors::IndexError;

    #[test]
    fn letters_then_end() {
        assert_eq!(get_idx('a'), Some(0));
        assert_eq!(get_idx('z'), Some(25));
        assert_eq!(get_idx(END), Some(END_IDX));
        assert_eq!(get_idx('A'), None);
        assert_eq!(get_idx('1'), None);
        (0..27).for_each(|i| assert_eq!(get_idx(get_symbol(i)), Some(i)));
    }

    #[test]
    fn normalize_lowercases_without_touching_input() {
        let input = String::from("AbC");
        assert_eq!(normalize(&input).unwrap(), "abc");
        assert_eq!(input, "AbC");
    }

    #[test]
    fn normalize_rejects_digits() {
        match normalize("a1b") {
            Err(IndexError::InvalidSymbol { symbol, .. }) => assert_eq!(symbol, '1'),
            other => panic!("unexpected {:?}", other),
        }
        assert!(normalize("a$b").is_err());
    }

    #[test]
    fn symbols_accepts_end() {
        assert_eq!(symbols("b$a").unwrap(), vec![1, END_IDX, 0]);
        assert!(symbols("bA").is_err());
    }
}
