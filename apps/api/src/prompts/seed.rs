//! Synthetic prompt records for demos and load testing.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::prompt::NewPrompt;

pub const SAMPLE_AUTHORS: [&str; 4] = ["John Doe", "Jane Smith", "Emily Johnson", "Michael Davis"];

fn pick_author<R: Rng + ?Sized>(rng: &mut R) -> String {
    SAMPLE_AUTHORS
        .choose(rng)
        .copied()
        .unwrap_or(SAMPLE_AUTHORS[0])
        .to_string()
}

/// Generates `count` prompts stamped with `now`.
///
/// Creator and last updater are drawn independently, so a seeded record may
/// look as if someone else already edited it.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<NewPrompt> {
    (0..count)
        .map(|_| NewPrompt {
            prompt: format!("Prompt {}", rng.gen_range(1..=100)),
            prompt_title: format!("Sample Prompt {}", rng.gen_range(1..=100)),
            prompt_description: format!(
                "This is a sample prompt description {}",
                rng.gen_range(1..=100)
            ),
            created_by: pick_author(rng),
            created_date_time: now,
            last_updated_by: pick_author(rng),
            last_updated_date_time: now,
        })
        .collect()
}
