//! Motivational quotes for the dashboard.

use rand::seq::SliceRandom;

pub const QUOTES: &[&str] = &[
    "The only bad workout is the one that didn't happen.",
    "Your body can stand almost anything. It's your mind that you have to convince.",
    "The difference between try and triumph is a little umph.",
    "Fitness is not about being better than someone else. It's about being better than you used to be.",
    "The hard days are the best because that's when champions are made.",
    "Don't limit your challenges. Challenge your limits.",
    "Do something today that your future self will thank you for.",
    "The only way to do great work is to love what you do.",
    "The pain you feel today will be the strength you feel tomorrow.",
    "Your health is an investment, not an expense.",
];

/// Pick a random quote for display.
pub fn random_quote() -> &'static str {
    QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(QUOTES[0])
}
