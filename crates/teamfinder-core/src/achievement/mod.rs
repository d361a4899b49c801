//! Achievement domain module.

mod model;

pub use model::{Achievement, AchievementDraft, AchievementPatch, AchievementPlace};
