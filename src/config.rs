//! Site Constants

use log::LevelFilter;

/// Title in the hero banner
pub const SITE_TITLE: &str = "Dillon Redding";

/// Subtitle in the hero banner
pub const SITE_SUBTITLE: &str = "Software Engineer";

/// Navbar social links: (icon name, url)
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("github", "https://github.com/dillonredding"),
    ("twitter", "https://twitter.com/dillon_redding"),
    ("medium", "https://dillonredding.medium.com"),
];

/// Records kept by the in-memory log ring
pub const LOG_CAPACITY: usize = 200;

#[cfg(debug_assertions)]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
