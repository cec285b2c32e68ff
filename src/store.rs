//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Views only
//! mutate state through the `store_*` helpers below.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::domain::{MenuVisibility, Quote, QuoteCollection, QuoteId, QuoteSink};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Printing Quotes collection, seeded at startup
    pub quotes: QuoteCollection,
    /// Navbar burger menu visibility
    pub navbar_menu: MenuVisibility,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            quotes: QuoteCollection::seeded(),
            navbar_menu: MenuVisibility::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a quote to the end of the collection
pub fn store_add_quote(store: &AppStore, quote: Quote) {
    store.quotes().write().append(quote);
    log::debug!("[STORE] quote added, {} quotes", store.quotes().read_untracked().len());
}

/// Remove the quote at `position`; out of range is a no-op
pub fn store_remove_quote_at(store: &AppStore, position: usize) {
    let removed = store.quotes().write().remove_at(position);
    if removed.is_some() {
        log::debug!(
            "[STORE] quote {} removed, {} quotes",
            position,
            store.quotes().read_untracked().len()
        );
    }
}

/// Delete a rendered quote, resolving its position at call time
pub fn store_delete_quote(store: &AppStore, id: QuoteId) {
    let position = store.quotes().read_untracked().position_of(id);
    match position {
        Some(position) => store_remove_quote_at(store, position),
        None => log::warn!("[STORE] delete of {:?} ignored, quote no longer present", id),
    }
}

/// Flip the navbar menu
pub fn store_toggle_menu(store: &AppStore) {
    store.navbar_menu().write().toggle();
}

/// Collapse the navbar menu
pub fn store_close_menu(store: &AppStore) {
    store.navbar_menu().write().close();
}

impl QuoteSink for AppStore {
    fn append(&mut self, quote: Quote) {
        store_add_quote(self, quote);
    }
}

impl QuoteSink for Callback<Quote> {
    fn append(&mut self, quote: Quote) {
        self.run(quote);
    }
}
