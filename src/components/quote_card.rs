//! Quote Card Component

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::domain::Quote;

/// A single quote with a delete action in its footer
#[component]
pub fn QuoteCard(quote: Quote, on_delete: Callback<()>) -> impl IntoView {
    view! {
        <div class="card mb-5">
            <div class="card-content">
                <p class="title is-4">"“" {quote.text} "”"</p>
                <p class="subtitle is-6">"— " {quote.author}</p>
            </div>
            <footer class="card-footer">
                <a class="card-footer-item" on:click=move |_| on_delete.run(())>
                    <Icon name="trash-alt" />
                </a>
            </footer>
        </div>
    }
}
