//! Portfolio Frontend App
//!
//! Composition root: owns the app store and navigation context, and lays out
//! navbar, hero and the exercises section.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    CountingCharacters, ExerciseMenu, ExercisesSummary, Hero, Navbar, PrintingQuotes, SayingHello,
};
use crate::context::{location_exercise, AppContext};
use crate::domain::Exercise;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let current_exercise = signal(location_exercise());
    let ctx = AppContext::new(current_exercise);

    // Provide store and context to all children
    provide_context(store);
    provide_context(ctx);

    // Back/forward and hand-edited hashes pick the page too
    let _hash_listener = window_event_listener(ev::hashchange, move |_| {
        ctx.navigate(location_exercise());
    });

    view! {
        <Navbar />
        <Hero />
        <ExercisesSection current=current_exercise.0 />
    }
}

/// Exercise menu beside the selected exercise page
#[component]
fn ExercisesSection(current: ReadSignal<Exercise>) -> impl IntoView {
    view! {
        <div class="container">
            <div class="columns">
                <div class="column is-narrow">
                    <ExerciseMenu />
                </div>
                <div class="column">
                    {move || match current.get() {
                        Exercise::Summary => view! { <ExercisesSummary /> }.into_any(),
                        Exercise::SayingHello => view! { <SayingHello /> }.into_any(),
                        Exercise::CountingCharacters => view! { <CountingCharacters /> }.into_any(),
                        Exercise::PrintingQuotes => view! { <PrintingQuotes /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
