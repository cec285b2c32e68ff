//! Exercise Catalog
//!
//! The "Exercises for Programmers" pages and their hash routes.

use super::entity::{DomainError, DomainResult};

/// A page under the exercises section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Exercise {
    /// Section landing page
    #[default]
    Summary,
    SayingHello,
    CountingCharacters,
    PrintingQuotes,
}

/// Menu sections: (label, exercises in menu order)
pub const EXERCISE_SECTIONS: &[(&str, &[Exercise])] = &[(
    "2. Input, Processing, and Output",
    &[
        Exercise::SayingHello,
        Exercise::CountingCharacters,
        Exercise::PrintingQuotes,
    ],
)];

impl Exercise {
    pub const ALL: [Exercise; 4] = [
        Exercise::Summary,
        Exercise::SayingHello,
        Exercise::CountingCharacters,
        Exercise::PrintingQuotes,
    ];

    pub fn route(&self) -> &'static str {
        match self {
            Exercise::Summary => "/e4p",
            Exercise::SayingHello => "/e4p/1",
            Exercise::CountingCharacters => "/e4p/2",
            Exercise::PrintingQuotes => "/e4p/3",
        }
    }

    /// Anchor target for this page
    pub fn href(&self) -> String {
        format!("#{}", self.route())
    }

    /// Label shown in the exercise menu
    pub fn menu_title(&self) -> &'static str {
        match self {
            Exercise::Summary => "Exercises for Programmers",
            Exercise::SayingHello => "1. Saying Hello",
            Exercise::CountingCharacters => "2. Counting Characters",
            Exercise::PrintingQuotes => "3. Printing Quotes",
        }
    }

    /// Resolve a route path or location hash (`#/e4p/3`)
    pub fn from_route(route: &str) -> DomainResult<Self> {
        let path = route.trim().trim_start_matches('#');
        if path.is_empty() || path == "/" {
            return Ok(Exercise::Summary);
        }
        if !path.starts_with('/') {
            return Err(DomainError::InvalidInput(format!("route {:?} is not a path", route)));
        }
        let path = path.strip_suffix('/').unwrap_or(path);
        Self::ALL
            .into_iter()
            .find(|exercise| exercise.route() == path)
            .ok_or_else(|| DomainError::NotFound(format!("no exercise at route {:?}", route)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_round_trip() {
        for exercise in Exercise::ALL {
            assert_eq!(Exercise::from_route(exercise.route()), Ok(exercise));
            assert_eq!(Exercise::from_route(&exercise.href()), Ok(exercise));
        }
    }

    #[test]
    fn test_empty_route_is_summary() {
        assert_eq!(Exercise::from_route(""), Ok(Exercise::Summary));
        assert_eq!(Exercise::from_route("#"), Ok(Exercise::Summary));
        assert_eq!(Exercise::from_route("#/"), Ok(Exercise::Summary));
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(Exercise::from_route("#/e4p/3/"), Ok(Exercise::PrintingQuotes));
    }

    #[test]
    fn test_unknown_route() {
        assert!(matches!(Exercise::from_route("#/e4p/9"), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_relative_route_rejected() {
        assert!(matches!(Exercise::from_route("e4p/1"), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_sections_list_every_exercise_page() {
        let listed: Vec<Exercise> = EXERCISE_SECTIONS
            .iter()
            .flat_map(|(_, items)| items.iter().copied())
            .collect();
        assert_eq!(
            listed,
            vec![Exercise::SayingHello, Exercise::CountingCharacters, Exercise::PrintingQuotes]
        );
    }
}
