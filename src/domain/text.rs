//! Text helpers for the small input/output exercises.

/// Greeting shown by the "Saying Hello" exercise
pub fn greeting(name: &str) -> String {
    format!("Hello, {}, nice to meet you!", name)
}

/// Help line under the "Counting Characters" textarea
pub fn character_count_label(text: &str) -> String {
    let count = text.chars().count();
    if count == 1 {
        format!("{} character", count)
    } else {
        format!("{} characters", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        assert_eq!(greeting("Brian"), "Hello, Brian, nice to meet you!");
        assert_eq!(greeting(""), "Hello, , nice to meet you!");
    }

    #[test]
    fn test_character_count_label() {
        assert_eq!(character_count_label(""), "0 characters");
        assert_eq!(character_count_label("a"), "1 character");
        assert_eq!(character_count_label("Homer"), "5 characters");
    }

    #[test]
    fn test_character_count_is_per_scalar() {
        assert_eq!(character_count_label("é"), "1 character");
        assert_eq!(character_count_label("日本"), "2 characters");
    }
}
