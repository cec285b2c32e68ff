//! Printing Quotes Exercise
//!
//! Card list over the store's quote collection plus the add-quote modal.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::components::quote_card::QuoteCard;
use crate::components::quote_form_modal::QuoteFormModal;
use crate::domain::{Entity, Quote, QuoteForm};
use crate::store::{use_app_store, store_add_quote, store_delete_quote, AppStateStoreFields};

#[component]
pub fn PrintingQuotes() -> impl IntoView {
    let store = use_app_store();
    let form = RwSignal::new(QuoteForm::new());

    view! {
        <h1 class="title">"Printing Quotes"</h1>
        // Keyed by render key; delete resolves the current position on click
        <For
            each=move || store.quotes().read().entries().to_vec()
            key=|entry| entry.id()
            children=move |entry| {
                let id = entry.id();
                view! {
                    <QuoteCard
                        quote=entry.quote
                        on_delete=Callback::new(move |_: ()| store_delete_quote(&store, id))
                    />
                }
            }
        />
        <button class="button is-link is-fullwidth" on:click=move |_| form.update(|f| f.open(None))>
            <Icon name="plus" />
        </button>
        <QuoteFormModal
            form=form
            on_submit=Callback::new(move |quote: Quote| store_add_quote(&store, quote))
        />
    }
}
