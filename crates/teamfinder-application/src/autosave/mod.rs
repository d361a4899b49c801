//! Auto-saving profile editors.

mod bio_editor;
mod debouncer;
mod skills_editor;

pub use bio_editor::BioEditor;
pub use debouncer::{Debouncer, SubmitFn};
pub use skills_editor::SkillsEditor;
