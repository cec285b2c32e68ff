//! Quote Record
//!
//! An immutable quotation with its attribution.

use serde::{Deserialize, Serialize};

/// A quote as displayed on a card.
///
/// Plain value type: two quotes with equal fields are interchangeable and the
/// collection never deduplicates them. Empty fields are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

/// Quotes the collection starts with
const SEED_QUOTES: &[(&str, &str)] = &[
    (
        "There are only two hard things in Computer Science: cache invalidation and naming things.",
        "Phil Karlton",
    ),
    (
        "It is better to have 100 functions operate on one data structure than 10 functions on 10 data structures.",
        "Alan J. Perlis",
    ),
    (
        "Premature optimization is the root of all evil (or at least most of it) in programming.",
        "Donald Knuth",
    ),
    (
        "There are two methods in software design. One is to make the program so simple, there are obviously no errors. The other is to make it so complicated, there are no obvious errors.",
        "Tony Hoare",
    ),
];

/// Build the starting contents of the quote collection
pub fn seed_quotes() -> Vec<Quote> {
    SEED_QUOTES
        .iter()
        .map(|(text, author)| Quote::new(*text, *author))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_quotes() {
        let seed = seed_quotes();
        let authors: Vec<&str> = seed.iter().map(|q| q.author.as_str()).collect();
        assert_eq!(authors, ["Phil Karlton", "Alan J. Perlis", "Donald Knuth", "Tony Hoare"]);
    }

    #[test]
    fn test_quote_wire_shape() {
        let quote = Quote::new("Test", "Tester");
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "Test", "author": "Tester" }));

        let back: Quote = serde_json::from_value(json).unwrap();
        assert_eq!(back, quote);
    }
}
