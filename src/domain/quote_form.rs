//! Quote Form Controller
//!
//! Owns the uncommitted text/author typed into the quote modal and the
//! modal's open/closed state. A submission is copied into a new `Quote` and
//! handed to a `QuoteSink`; nothing else leaves the controller.

use super::collection::QuoteSink;
use super::quote::Quote;

/// Uncommitted form input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftQuote {
    pub text: String,
    pub author: String,
}

impl DraftQuote {
    fn from_seed(seed: Option<&Quote>) -> Self {
        seed.map(|quote| Self {
            text: quote.text.clone(),
            author: quote.author.clone(),
        })
        .unwrap_or_default()
    }
}

/// Modal form state machine. `Closed` is both initial and revisitable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuoteForm {
    #[default]
    Closed,
    Open {
        draft: DraftQuote,
        /// Opened from an existing quote
        editing: bool,
    },
}

impl QuoteForm {
    pub fn new() -> Self {
        Self::Closed
    }

    /// Show the form. Opening while already open re-seeds the draft.
    pub fn open(&mut self, seed: Option<&Quote>) {
        *self = QuoteForm::Open {
            draft: DraftQuote::from_seed(seed),
            editing: seed.is_some(),
        };
    }

    pub fn update_text(&mut self, value: impl Into<String>) {
        match self {
            QuoteForm::Open { draft, .. } => draft.text = value.into(),
            QuoteForm::Closed => log::debug!("[FORM] update_text ignored while closed"),
        }
    }

    pub fn update_author(&mut self, value: impl Into<String>) {
        match self {
            QuoteForm::Open { draft, .. } => draft.author = value.into(),
            QuoteForm::Closed => log::debug!("[FORM] update_author ignored while closed"),
        }
    }

    /// Commit the draft to `sink` and close.
    ///
    /// Empty fields are submitted as-is. Returns false if the form was closed,
    /// in which case the sink is not touched.
    pub fn submit(&mut self, sink: &mut impl QuoteSink) -> bool {
        match std::mem::take(self) {
            QuoteForm::Open { draft, .. } => {
                sink.append(Quote {
                    text: draft.text,
                    author: draft.author,
                });
                true
            }
            QuoteForm::Closed => false,
        }
    }

    /// Discard the draft and close
    pub fn cancel(&mut self) {
        *self = QuoteForm::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, QuoteForm::Open { .. })
    }

    /// Current draft, `None` while closed
    pub fn draft(&self) -> Option<&DraftQuote> {
        match self {
            QuoteForm::Open { draft, .. } => Some(draft),
            QuoteForm::Closed => None,
        }
    }

    /// Modal heading
    pub fn title(&self) -> &'static str {
        match self {
            QuoteForm::Open { editing: true, .. } => "Edit Quote",
            _ => "Add a Quote",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QuoteCollection;

    /// Sink that records every append
    #[derive(Default)]
    struct RecordingSink(Vec<Quote>);

    impl QuoteSink for RecordingSink {
        fn append(&mut self, quote: Quote) {
            self.0.push(quote);
        }
    }

    #[test]
    fn test_initially_closed() {
        let form = QuoteForm::new();
        assert!(!form.is_open());
        assert!(form.draft().is_none());
    }

    #[test]
    fn test_open_starts_empty() {
        let mut form = QuoteForm::new();
        form.open(None);
        assert!(form.is_open());
        assert_eq!(form.draft(), Some(&DraftQuote::default()));
        assert_eq!(form.title(), "Add a Quote");
    }

    #[test]
    fn test_open_with_seed() {
        let mut form = QuoteForm::new();
        let seed = Quote::new("Seeded", "Someone");
        form.open(Some(&seed));
        let draft = form.draft().unwrap();
        assert_eq!(draft.text, "Seeded");
        assert_eq!(draft.author, "Someone");
        assert_eq!(form.title(), "Edit Quote");
    }

    #[test]
    fn test_reopen_reseeds_draft() {
        let mut form = QuoteForm::new();
        form.open(None);
        form.update_text("typed");
        form.open(None);
        assert_eq!(form.draft(), Some(&DraftQuote::default()));
    }

    #[test]
    fn test_submit_appends_final_draft() {
        let mut form = QuoteForm::new();
        let mut sink = RecordingSink::default();
        form.open(None);
        form.update_text("first");
        form.update_text("Test");
        form.update_author("Tester");

        assert!(form.submit(&mut sink));
        assert_eq!(sink.0, vec![Quote::new("Test", "Tester")]);
        assert!(!form.is_open());
        assert!(form.draft().is_none());

        // Reopening after submit starts from an empty draft
        form.open(None);
        assert_eq!(form.draft(), Some(&DraftQuote::default()));
    }

    #[test]
    fn test_submit_empty_fields() {
        let mut form = QuoteForm::new();
        let mut sink = RecordingSink::default();
        form.open(None);
        assert!(form.submit(&mut sink));
        assert_eq!(sink.0, vec![Quote::new("", "")]);
    }

    #[test]
    fn test_cancel_does_not_append() {
        let mut form = QuoteForm::new();
        let mut sink = RecordingSink::default();
        form.open(None);
        form.update_text("discarded");
        form.cancel();
        assert!(sink.0.is_empty());
        assert!(!form.is_open());

        // Nothing left to submit
        assert!(!form.submit(&mut sink));
        assert!(sink.0.is_empty());
    }

    #[test]
    fn test_updates_ignored_while_closed() {
        let mut form = QuoteForm::new();
        form.update_text("ignored");
        form.update_author("ignored");
        assert_eq!(form, QuoteForm::Closed);
    }

    #[test]
    fn test_submit_into_seeded_collection() {
        let mut collection = QuoteCollection::seeded();
        let mut form = QuoteForm::new();
        form.open(None);
        form.update_text("Test");
        form.update_author("Tester");
        form.submit(&mut collection);

        let snapshot = collection.snapshot();
        assert_eq!(snapshot.len(), 5);
        assert_eq!(snapshot[4], Quote::new("Test", "Tester"));
    }
}
