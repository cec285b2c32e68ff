//! Exercise Menu Component
//!
//! Side menu listing exercise pages, highlighting the current one.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::domain::EXERCISE_SECTIONS;
use crate::store::{use_app_store, store_close_menu};

#[component]
pub fn ExerciseMenu() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <aside class="menu">
            {EXERCISE_SECTIONS.iter().map(|(label, exercises)| view! {
                <p class="menu-label">{*label}</p>
                <ul class="menu-list">
                    {exercises.iter().map(|exercise| {
                        let exercise = *exercise;
                        view! {
                            <li>
                                <a
                                    href=exercise.href()
                                    class=move || if ctx.is_current(exercise) { "is-active" } else { "" }
                                    on:click=move |_| {
                                        ctx.navigate(exercise);
                                        store_close_menu(&store);
                                    }
                                >
                                    {exercise.menu_title()}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            }).collect_view()}
        </aside>
    }
}
