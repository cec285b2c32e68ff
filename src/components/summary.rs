use leptos::prelude::*;

/// Landing page of the exercises section
#[component]
pub fn ExercisesSummary() -> impl IntoView {
    view! {
        <h1 class="title">"Exercises for Programmers"</h1>
        <p class="is-size-5">
            "My solutions to problems from "
            <a
                href="https://pragprog.com/titles/bhwb/exercises-for-programmers/"
                target="_blank"
                rel="noreferrer"
            >
                "Exercises for Programmers"
            </a>
            " by Brian P. Hogan."
        </p>
    }
}
