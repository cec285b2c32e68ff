//! Quote Collection
//!
//! Ordered list of quotes. Insertion order is display order.

use super::entity::Entity;
use super::quote::{seed_quotes, Quote};

/// Render key assigned to a quote when it enters the collection.
///
/// Never reused, so it stays valid across removals. It is not a position:
/// removal is still addressed by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuoteId(u64);

/// A quote together with its render key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteEntry {
    pub id: QuoteId,
    pub quote: Quote,
}

impl Entity for QuoteEntry {
    type Id = QuoteId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Receiver of finalized quotes.
///
/// The form controller hands its submission to whatever implements this.
pub trait QuoteSink {
    fn append(&mut self, quote: Quote);
}

/// Authoritative ordered quote sequence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuoteCollection {
    entries: Vec<QuoteEntry>,
    next_id: u64,
}

impl QuoteCollection {
    /// Empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection holding the four example quotes
    pub fn seeded() -> Self {
        let mut collection = Self::new();
        for quote in seed_quotes() {
            collection.append(quote);
        }
        collection
    }

    /// Append to the end. Always succeeds, empty fields included.
    pub fn append(&mut self, quote: Quote) -> QuoteId {
        let id = QuoteId(self.next_id);
        self.next_id += 1;
        self.entries.push(QuoteEntry { id, quote });
        id
    }

    /// Remove the quote at `position`, shifting later quotes down by one.
    ///
    /// An out-of-range position leaves the collection untouched.
    pub fn remove_at(&mut self, position: usize) -> Option<Quote> {
        if position >= self.entries.len() {
            log::warn!(
                "[STORE] remove_at({}) ignored, collection has {} quotes",
                position,
                self.entries.len()
            );
            return None;
        }
        Some(self.entries.remove(position).quote)
    }

    /// Current position of the quote with the given key
    pub fn position_of(&self, id: QuoteId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Point-in-time copy of the quotes in display order
    pub fn snapshot(&self) -> Vec<Quote> {
        self.entries.iter().map(|entry| entry.quote.clone()).collect()
    }

    /// Entries in display order, with their render keys
    pub fn entries(&self) -> &[QuoteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl QuoteSink for QuoteCollection {
    fn append(&mut self, quote: Quote) {
        QuoteCollection::append(self, quote);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quotes(n: usize) -> Vec<Quote> {
        (0..n)
            .map(|i| Quote::new(format!("Quote {}", i), format!("Author {}", i)))
            .collect()
    }

    fn collection_of(items: &[Quote]) -> QuoteCollection {
        let mut collection = QuoteCollection::new();
        for quote in items {
            collection.append(quote.clone());
        }
        collection
    }

    #[test]
    fn test_append_preserves_call_order() {
        let items = quotes(5);
        let collection = collection_of(&items);
        assert_eq!(collection.snapshot(), items);
        assert_eq!(collection.len(), 5);
    }

    #[test]
    fn test_append_does_not_deduplicate() {
        let mut collection = QuoteCollection::new();
        let quote = Quote::new("Same", "Same");
        collection.append(quote.clone());
        collection.append(quote.clone());
        assert_eq!(collection.snapshot(), vec![quote.clone(), quote]);
    }

    #[test]
    fn test_append_accepts_empty_fields() {
        let mut collection = QuoteCollection::new();
        collection.append(Quote::new("", ""));
        assert_eq!(collection.snapshot(), vec![Quote::new("", "")]);
    }

    #[test]
    fn test_remove_at_shifts_later_quotes() {
        let items = quotes(4);
        for i in 0..items.len() {
            let mut collection = collection_of(&items);
            let removed = collection.remove_at(i);
            assert_eq!(removed.as_ref(), Some(&items[i]));

            let mut expected = items.clone();
            expected.remove(i);
            assert_eq!(collection.snapshot(), expected);
            assert_eq!(collection.len(), items.len() - 1);
        }
    }

    #[test]
    fn test_remove_at_out_of_range_is_noop() {
        let items = quotes(3);
        let mut collection = collection_of(&items);
        assert_eq!(collection.remove_at(3), None);
        assert_eq!(collection.remove_at(usize::MAX), None);
        assert_eq!(collection.snapshot(), items);

        let mut empty = QuoteCollection::new();
        assert_eq!(empty.remove_at(0), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_position_of_tracks_removals() {
        let mut collection = collection_of(&quotes(3));
        let last = collection.entries()[2].id();
        assert_eq!(collection.position_of(last), Some(2));

        collection.remove_at(0);
        assert_eq!(collection.position_of(last), Some(1));

        let removed = collection.entries()[0].id();
        collection.remove_at(0);
        assert_eq!(collection.position_of(removed), None);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut collection = QuoteCollection::new();
        let first = collection.append(Quote::new("a", "a"));
        collection.remove_at(0);
        let second = collection.append(Quote::new("a", "a"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_seeded_remove_first() {
        let mut collection = QuoteCollection::seeded();
        assert_eq!(collection.len(), 4);
        let before = collection.snapshot();
        assert_eq!(before[0].author, "Phil Karlton");

        collection.remove_at(0);
        let after = collection.snapshot();
        assert_eq!(after[0], before[1]);
        assert_eq!(after[0].author, "Alan J. Perlis");
    }

    #[test]
    fn test_sink_appends_to_end() {
        let mut collection = QuoteCollection::seeded();
        QuoteSink::append(&mut collection, Quote::new("Test", "Tester"));
        assert_eq!(collection.snapshot()[4], Quote::new("Test", "Tester"));
    }
}
