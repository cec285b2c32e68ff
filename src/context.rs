//! Application Context
//!
//! Shared navigation state provided via Leptos Context API.

use leptos::prelude::*;
use crate::domain::Exercise;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Exercise page currently shown - read
    pub current_exercise: ReadSignal<Exercise>,
    /// Exercise page currently shown - write
    set_current_exercise: WriteSignal<Exercise>,
}

impl AppContext {
    pub fn new(current_exercise: (ReadSignal<Exercise>, WriteSignal<Exercise>)) -> Self {
        Self {
            current_exercise: current_exercise.0,
            set_current_exercise: current_exercise.1,
        }
    }

    /// Switch to another exercise page
    pub fn navigate(&self, exercise: Exercise) {
        // Link clicks also fire hashchange for the same page
        if self.current_exercise.get_untracked() == exercise {
            return;
        }
        log::debug!("[NAV] {}", exercise.route());
        self.set_current_exercise.set(exercise);
    }

    pub fn is_current(&self, exercise: Exercise) -> bool {
        self.current_exercise.get() == exercise
    }
}

/// Exercise named by a location hash, `Summary` if none matches
pub fn exercise_for_hash(hash: &str) -> Exercise {
    Exercise::from_route(hash).unwrap_or_else(|err| {
        log::debug!("[NAV] {}, showing summary", err);
        Exercise::Summary
    })
}

/// Exercise named by the browser's current location hash
pub fn location_exercise() -> Exercise {
    let hash = web_sys::window()
        .and_then(|win| win.location().hash().ok())
        .unwrap_or_default();
    exercise_for_hash(&hash)
}
