use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use teamfinder_core::Result;
use teamfinder_core::user::{ProfileBackend, User, UserMainInfoPatch};
use teamfinder_core::validation::validate_skill_count;

use crate::query::QueryCell;

/// Skill selection, saved as soon as it changes.
///
/// Selections are compared as sets; reordering is not a change.
pub struct SkillsEditor {
    backend: Arc<dyn ProfileBackend>,
    me: QueryCell<User>,
    selected: Mutex<Vec<String>>,
    error: Mutex<Option<String>>,
}

impl SkillsEditor {
    pub fn new(profile: &User, backend: Arc<dyn ProfileBackend>, me: QueryCell<User>) -> Self {
        Self {
            backend,
            me,
            selected: Mutex::new(profile.skill_slugs()),
            error: Mutex::new(None),
        }
    }

    /// Replaces the selection.
    ///
    /// Returns `Ok(false)` for an equal set. More than the allowed number of
    /// skills is rejected inline and the previous selection is kept.
    pub async fn select(&self, slugs: Vec<String>) -> Result<bool> {
        let wanted: BTreeSet<&str> = slugs.iter().map(String::as_str).collect();

        if let Err(e) = validate_skill_count(wanted.len()) {
            *self.error.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(e.to_string());
            return Err(e);
        }
        *self.error.lock().unwrap_or_else(|e| e.into_inner()) = None;

        let unchanged = {
            let selected = self.selected.lock().unwrap_or_else(|e| e.into_inner());
            let current: BTreeSet<&str> = selected.iter().map(String::as_str).collect();
            current == wanted
        };
        if unchanged {
            return Ok(false);
        }

        let deduped: Vec<String> = wanted.into_iter().map(str::to_string).collect();
        self.backend
            .edit_main_info(&UserMainInfoPatch::skills(deduped.clone()))
            .await?;

        tracing::debug!("[SkillsEditor] Saved {} skills", deduped.len());
        *self.selected.lock().unwrap_or_else(|e| e.into_inner()) = deduped;
        self.me.invalidate();
        Ok(true)
    }

    pub fn selected(&self) -> Vec<String> {
        self.selected
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn error(&self) -> Option<String> {
        self.error.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autosave::tests::{RecordingProfileBackend, me_cell, profile_with_skills};

    fn slugs(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_reordered_selection_is_noop() {
        let backend = Arc::new(RecordingProfileBackend::default());
        let editor = SkillsEditor::new(
            &profile_with_skills(&["rust", "go"]),
            backend.clone(),
            me_cell(),
        );

        assert!(!editor.select(slugs(&["go", "rust"])).await.unwrap());
        assert!(backend.patches().is_empty());
    }

    #[tokio::test]
    async fn test_change_is_submitted_immediately() {
        let backend = Arc::new(RecordingProfileBackend::default());
        let editor = SkillsEditor::new(&profile_with_skills(&["rust"]), backend.clone(), me_cell());

        assert!(editor.select(slugs(&["rust", "sql"])).await.unwrap());

        let patches = backend.patches();
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].skill_slugs, Some(slugs(&["rust", "sql"])));
        assert_eq!(editor.selected(), slugs(&["rust", "sql"]));
    }

    #[tokio::test]
    async fn test_over_limit_keeps_previous_selection() {
        let backend = Arc::new(RecordingProfileBackend::default());
        let editor = SkillsEditor::new(&profile_with_skills(&["rust"]), backend.clone(), me_cell());

        let too_many: Vec<String> = (0..11).map(|i| format!("skill-{}", i)).collect();
        let err = editor.select(too_many).await.unwrap_err();

        assert!(err.is_validation());
        assert!(editor.error().is_some());
        assert_eq!(editor.selected(), slugs(&["rust"]));
        assert!(backend.patches().is_empty());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_previous_selection() {
        let backend = Arc::new(RecordingProfileBackend::failing(
            teamfinder_core::TeamfinderError::network("offline"),
        ));
        let editor = SkillsEditor::new(&profile_with_skills(&["rust"]), backend, me_cell());

        assert!(editor.select(slugs(&["go"])).await.is_err());
        assert_eq!(editor.selected(), slugs(&["rust"]));
    }
}
