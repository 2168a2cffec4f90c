//! Letter addressing for menu entries.
//!
//! Entries are stored in catalog order and the letter of an entry is derived
//! from its position: the first entry is `a`, the second `b`, and so on. No
//! letter is stored per entry, so the mapping is dense and ordered by
//! construction.

use crate::error::{Error, Result};
use crate::menu::MenuEntry;

/// Letter given to the first entry of every menu.
pub const FIRST_LETTER: char = 'a';

/// Number of letters available for addressing entries.
pub const MAX_ENTRIES: usize = 26;

/// Returns the letter for the entry at `position`, if there is one.
#[must_use]
pub fn letter_for(position: usize) -> Option<char> {
    if position >= MAX_ENTRIES {
        return None;
    }

    // position < 26, so the addition stays inside `a..=z`
    char::from_u32(FIRST_LETTER as u32 + position as u32)
}

/// Returns the position addressed by `letter`, if it is a lowercase ASCII letter.
#[must_use]
pub fn position_of(letter: char) -> Option<usize> {
    if !letter.is_ascii_lowercase() {
        return None;
    }

    Some(letter as usize - FIRST_LETTER as usize)
}

/// Ordered entries of one menu, addressable by letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterIndex {
    entries: Vec<MenuEntry>,
}

impl LetterIndex {
    /// Builds the index for the entries of the menu titled `title`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyEntries`] when there are more entries than
    /// letters.
    pub fn build(title: &str, entries: Vec<MenuEntry>) -> Result<Self> {
        if entries.len() > MAX_ENTRIES {
            return Err(Error::too_many_entries(
                title.to_string(),
                entries.len(),
                MAX_ENTRIES,
            ));
        }

        Ok(Self { entries })
    }

    /// Looks up the entry addressed by `letter`.
    #[must_use]
    pub fn resolve(&self, letter: char) -> Option<&MenuEntry> {
        position_of(letter).and_then(|position| self.entries.get(position))
    }

    /// Iterates entries together with their letters, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &MenuEntry)> {
        (FIRST_LETTER..='z').zip(self.entries.iter())
    }

    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(count: usize) -> Vec<MenuEntry> {
        (0..count)
            .map(|i| MenuEntry {
                name: format!("entry-{i}"),
                description: String::new(),
                sub_menu: None,
            })
            .collect()
    }

    #[test]
    fn test_letter_for_bounds() {
        assert_eq!(letter_for(0), Some('a'));
        assert_eq!(letter_for(7), Some('h'));
        assert_eq!(letter_for(25), Some('z'));
        assert_eq!(letter_for(26), None);
    }

    #[test]
    fn test_position_of_rejects_non_lowercase() {
        assert_eq!(position_of('a'), Some(0));
        assert_eq!(position_of('z'), Some(25));
        assert_eq!(position_of('A'), None);
        assert_eq!(position_of('1'), None);
        assert_eq!(position_of(' '), None);
        assert_eq!(position_of('é'), None);
    }

    #[test]
    fn test_index_is_injective_and_total() {
        for count in 0..=MAX_ENTRIES {
            let index = LetterIndex::build("test", entries(count)).unwrap();
            assert_eq!(index.len(), count);

            let letters: Vec<char> = index.iter().map(|(letter, _)| letter).collect();
            assert_eq!(letters.len(), count);

            for (position, (letter, entry)) in index.iter().enumerate() {
                assert_eq!(Some(letter), letter_for(position));
                assert_eq!(entry.name, format!("entry-{position}"));
                assert_eq!(index.resolve(letter), Some(entry));
            }

            let mut deduplicated = letters.clone();
            deduplicated.dedup();
            assert_eq!(deduplicated, letters);
        }
    }

    #[test]
    fn test_resolve_beyond_length() {
        let index = LetterIndex::build("test", entries(3)).unwrap();
        assert!(index.resolve('c').is_some());
        assert!(index.resolve('d').is_none());
        assert!(index.resolve('C').is_none());
    }

    #[test]
    fn test_too_many_entries_rejected() {
        let result = LetterIndex::build("test", entries(MAX_ENTRIES + 1));
        assert!(matches!(
            result,
            Err(Error::TooManyEntries { count: 27, max: 26, .. })
        ));
    }
}
