//! Helpers for working with hash keys as strings.
//!
//! Each digit narrows the region of the key before it, so string prefixes map
//! directly onto region ancestry. None of these functions need a hasher.

use crate::error::{HashError, Result};
use crate::partition::{self, BRANCHING_FACTOR};

/// Parse a key into child indices, checking its length against `max_depth`
/// first and then every character against the hex alphabet.
pub fn digits(hash: &str, max_depth: usize) -> Result<Vec<u8>> {
    let length = hash.chars().count();
    if length > max_depth {
        return Err(HashError::InvalidLength { length, max_depth });
    }

    hash.chars()
        .enumerate()
        .map(|(position, character)| {
            partition::index_of(character)
                .ok_or(HashError::InvalidCharacter { character, position })
        })
        .collect()
}

/// Check that `hash` is a key a hasher with `max_depth` would accept.
///
/// ```
/// use orbhash::prefix::validate_hash;
///
/// assert!(validate_hash("0F3A", 8).is_ok());
/// assert!(validate_hash("0f3a", 8).is_err());
/// assert!(validate_hash("0F3A", 3).is_err());
/// ```
pub fn validate_hash(hash: &str, max_depth: usize) -> Result<()> {
    digits(hash, max_depth).map(|_| ())
}

/// The key of the enclosing region one level up, or `None` for the root key.
pub fn parent(hash: &str) -> Option<&str> {
    let (last, _) = hash.char_indices().next_back()?;
    Some(&hash[..last])
}

/// The sixteen keys one level below `hash`, in child index order.
pub fn children(hash: &str) -> [String; BRANCHING_FACTOR] {
    std::array::from_fn(|index| {
        let mut child = String::with_capacity(hash.len() + 1);
        child.push_str(hash);
        child.push(partition::digit(index as u8));
        child
    })
}

/// The longest prefix shared by two keys: the key of the smallest region
/// enclosing both.
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| a.len().min(b.len()));
    &a[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(digits("09AF", 4).unwrap(), vec![0, 9, 10, 15]);
        assert!(digits("", 0).unwrap().is_empty());
    }

    #[test]
    fn test_digits_length_checked_first() {
        assert!(matches!(
            digits("ZZZ", 2),
            Err(HashError::InvalidLength {
                length: 3,
                max_depth: 2
            })
        ));
    }

    #[test]
    fn test_digits_reports_position() {
        assert!(matches!(
            digits("00x0", 8),
            Err(HashError::InvalidCharacter {
                character: 'x',
                position: 2
            })
        ));
    }

    #[test]
    fn test_digits_counts_chars_not_bytes() {
        assert!(matches!(
            digits("ää", 2),
            Err(HashError::InvalidCharacter {
                character: 'ä',
                position: 0
            })
        ));
    }

    #[test]
    fn test_parent() {
        assert_eq!(parent("0F3"), Some("0F"));
        assert_eq!(parent("A"), Some(""));
        assert_eq!(parent(""), None);
    }

    #[test]
    fn test_children() {
        let kids = children("7");
        assert_eq!(kids[0], "70");
        assert_eq!(kids[15], "7F");
        for kid in &kids {
            assert_eq!(parent(kid), Some("7"));
        }
        assert_eq!(children("")[10], "A");
    }

    #[test]
    fn test_common_prefix() {
        assert_eq!(common_prefix("0F3A", "0F7"), "0F");
        assert_eq!(common_prefix("0F3A", "0F3A"), "0F3A");
        assert_eq!(common_prefix("0F", "0F3A"), "0F");
        assert_eq!(common_prefix("1", "2"), "");
        assert_eq!(common_prefix("", "ABC"), "");
    }
}
