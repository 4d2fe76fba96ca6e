//! Quote records and the built-in collection

/// Stable identity of a quote
pub type QuoteId = u32;

/// A single quote with its attribution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// Unique positive identifier
    pub id: QuoteId,
    /// The quote itself
    pub text: &'static str,
    /// Who said it
    pub author: &'static str,
}

impl Quote {
    /// Build a quote; usable in `const` tables
    pub const fn new(id: QuoteId, text: &'static str, author: &'static str) -> Self {
        Self { id, text, author }
    }

    /// Attribution line shown under the quote text
    pub fn attribution(&self) -> String {
        format!("\u{2014} {}", self.author) // — author
    }
}

/// The built-in quotes in canonical order
pub const QUOTES: [Quote; 8] = [
    Quote::new(1, "The only way to do great work is to love what you do.", "Steve Jobs"),
    Quote::new(2, "Innovation distinguishes between a leader and a follower.", "Steve Jobs"),
    Quote::new(3, "Life is what happens when you're busy making other plans.", "John Lennon"),
    Quote::new(
        4,
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    Quote::new(
        5,
        "It is during our darkest moments that we must focus to see the light.",
        "Aristotle",
    ),
    Quote::new(6, "Believe you can and you're halfway there.", "Theodore Roosevelt"),
    Quote::new(7, "The only impossible journey is the one you never begin.", "Tony Robbins"),
    Quote::new(
        8,
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
];
