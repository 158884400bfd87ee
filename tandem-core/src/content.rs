//! Build-time display content
//!
//! The roster and messages the board shows. Content is compiled in; there
//! is no runtime configuration path.

/// Upper bound on roster entries a board configuration may carry
pub const MAX_NAMES: usize = 33;

/// Roster shown by the name formatter, in display order
pub const NAMES: &[&str] = &[
    "Dylan Wong",
    "Stanley Cokro",
    "Nisat Nosin",
    "Luke Melfa",
    "Eric Yang",
    "Farhaan Khan",
    "Johnson Varghese",
    "Hillary Ng",
    "John Shin",
    "Ben Weng",
    "Savi Kessler",
    "Kenny Procacci",
    "Shaun Varghese",
    "Christina Wong",
    "Mahima Karanth",
    "Aritro Sarkar",
    "Kyle Han",
    "Spencer Wu",
    "Rachel Leong",
    "Natalie Sid",
    "Dilshoda Sayfillaeva",
    "Alexander Monov",
    "Pranay Srivastava",
    "Katherine Trusinski",
    "Eric Wu",
    "Devin Lee",
];

/// Main thank-you message
pub const MESSAGE: &str = "Thank you for teaching us, through good health and \
sickness, you've always been there and we appreciate you. We hope you get \
better soon";

/// Credits line
pub const SPECIAL_THANKS: &str =
    "Special Thanks to Bryant Gonzaga for organizing this student project";
