//! Quotes shipped with the application.

use super::Catalog;
use crate::model::Quote;

pub(super) fn catalog() -> Catalog {
    Catalog {
        happy: vec![
            Quote::new(1, "Happiness is not by chance, but by choice.", "Jim Rohn"),
            Quote::new(
                2,
                "The only way to do great work is to love what you do.",
                "Steve Jobs",
            ),
        ],
        sad: vec![
            Quote::new(3, "This too shall pass.", "Persian Proverb"),
            Quote::new(
                4,
                "Every new day is another chance to change your life.",
                "Unknown",
            ),
        ],
        stressed: vec![
            Quote::new(
                5,
                "You don't have to see the whole staircase, just take the first step.",
                "Martin Luther King Jr.",
            ),
            Quote::new(
                6,
                "Do what you can, with what you have, where you are.",
                "Theodore Roosevelt",
            ),
        ],
        tired: vec![
            Quote::new(
                7,
                "Rest is not idleness, and to lie sometimes on the grass under trees on a summer's day is by no means a waste of time.",
                "John Lubbock",
            ),
            Quote::new(8, "You are enough just as you are.", "Meghan Markle"),
        ],
        motivated: vec![
            Quote::new(
                9,
                "The future belongs to those who believe in the beauty of their dreams.",
                "Eleanor Roosevelt",
            ),
            Quote::new(
                10,
                "Success is not final, failure is not fatal: It is the courage to continue that counts.",
                "Winston Churchill",
            ),
        ],
    }
}
