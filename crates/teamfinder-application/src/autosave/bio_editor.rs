use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use teamfinder_core::user::{ProfileBackend, User, UserMainInfoPatch};
use teamfinder_core::validation::validate_bio;
use teamfinder_core::{Result, TeamfinderError};

use super::debouncer::Debouncer;
use crate::query::QueryCell;

#[derive(Debug, Default)]
struct BioState {
    text: String,
    last_saved: String,
    /// Inline validation message for the current text.
    error: Option<String>,
    /// Failure of the latest save.
    save_error: Option<TeamfinderError>,
}

/// Auto-saving editor for the profile bio.
///
/// Every valid edit that differs from the last saved text is saved after the
/// debounce window. Invalid text is rejected inline and never sent.
pub struct BioEditor {
    state: Arc<Mutex<BioState>>,
    debouncer: Debouncer<String>,
}

impl BioEditor {
    /// Creates an editor seeded from `profile`.
    ///
    /// # Arguments
    ///
    /// * `profile` - The current user; its bio is the initial text
    /// * `backend` - Receives the `PATCH /users/me` calls
    /// * `me` - The current-user query, invalidated after each save
    /// * `delay` - Debounce window
    pub fn new(
        profile: &User,
        backend: Arc<dyn ProfileBackend>,
        me: QueryCell<User>,
        delay: Duration,
    ) -> Self {
        let initial = profile.bio.clone().unwrap_or_default();
        let state = Arc::new(Mutex::new(BioState {
            text: initial.clone(),
            last_saved: initial,
            ..BioState::default()
        }));

        let shared = state.clone();
        let debouncer = Debouncer::new("bio", delay, move |text: String| {
            let backend = backend.clone();
            let state = shared.clone();
            let me = me.clone();
            async move { save(backend.as_ref(), &state, &me, text).await }
        });

        Self { state, debouncer }
    }

    /// Applies an edit.
    ///
    /// Returns `Ok(true)` when a save was scheduled and `Ok(false)` when the
    /// text equals the last saved one. Text over the length limit keeps the
    /// error on the editor and cancels any pending save.
    pub fn edit(&self, text: impl Into<String>) -> Result<bool> {
        let text = text.into();
        let mut state = lock(&self.state);
        state.text = text.clone();
        state.save_error = None;

        if let Err(e) = validate_bio(&text) {
            state.error = Some(e.to_string());
            drop(state);
            self.debouncer.cancel();
            return Err(e);
        }
        state.error = None;

        if text == state.last_saved {
            drop(state);
            self.debouncer.cancel();
            return Ok(false);
        }
        drop(state);

        self.debouncer.schedule(text);
        Ok(true)
    }

    /// Saves a pending edit now and reports how that save went. With nothing
    /// pending this is a no-op.
    pub async fn flush(&self) -> Result<()> {
        if !self.debouncer.flush().await {
            return Ok(());
        }
        match &lock(&self.state).save_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    pub fn text(&self) -> String {
        lock(&self.state).text.clone()
    }

    pub fn last_saved(&self) -> String {
        lock(&self.state).last_saved.clone()
    }

    pub fn error(&self) -> Option<String> {
        lock(&self.state).error.clone()
    }

    pub fn save_error(&self) -> Option<TeamfinderError> {
        lock(&self.state).save_error.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

async fn save(
    backend: &dyn ProfileBackend,
    state: &Mutex<BioState>,
    me: &QueryCell<User>,
    text: String,
) {
    let patch = if text.is_empty() {
        UserMainInfoPatch::default()
    } else {
        UserMainInfoPatch::bio(text.clone())
    };

    match backend.edit_main_info(&patch).await {
        Ok(_) => {
            tracing::debug!("[BioEditor] Saved bio ({} chars)", text.chars().count());
            let mut state = lock(state);
            state.last_saved = text;
            state.save_error = None;
            drop(state);
            me.invalidate();
        }
        Err(e) => {
            tracing::warn!("[BioEditor] Failed to save bio: {}", e);
            lock(state).save_error = Some(e);
        }
    }
}

fn lock(state: &Mutex<BioState>) -> MutexGuard<'_, BioState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autosave::tests::{RecordingProfileBackend, me_cell, profile_with_bio};
    use teamfinder_core::validation::MAX_BIO_CHARS;

    const WINDOW: Duration = Duration::from_millis(600);

    async fn settle(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_of_edits_sends_last() {
        let backend = Arc::new(RecordingProfileBackend::default());
        let editor = BioEditor::new(
            &profile_with_bio(None),
            backend.clone(),
            me_cell(),
            WINDOW,
        );

        assert!(editor.edit("R").unwrap());
        settle(100).await;
        assert!(editor.edit("Ru").unwrap());
        settle(100).await;
        assert!(editor.edit("Rust").unwrap());
        settle(700).await;

        let patches = backend.patches();
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].bio.as_deref(), Some("Rust"));
        assert_eq!(editor.last_saved(), "Rust");
    }

    #[tokio::test(start_paused = true)]
    async fn test_too_long_is_rejected_inline() {
        let backend = Arc::new(RecordingProfileBackend::default());
        let editor = BioEditor::new(
            &profile_with_bio(Some("hi")),
            backend.clone(),
            me_cell(),
            WINDOW,
        );

        assert!(editor.edit("hello").unwrap());
        let err = editor.edit("x".repeat(MAX_BIO_CHARS + 1)).unwrap_err();
        assert!(err.is_validation());
        assert!(editor.error().is_some());
        assert!(!editor.is_pending());

        settle(1000).await;
        assert!(backend.patches().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unchanged_text_is_not_sent() {
        let backend = Arc::new(RecordingProfileBackend::default());
        let editor = BioEditor::new(
            &profile_with_bio(Some("same")),
            backend.clone(),
            me_cell(),
            WINDOW,
        );

        assert!(editor.edit("other").unwrap());
        assert!(!editor.edit("same").unwrap());
        settle(1000).await;

        assert!(backend.patches().is_empty());
        assert_eq!(editor.error(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleared_bio_sends_no_field() {
        let backend = Arc::new(RecordingProfileBackend::default());
        let editor = BioEditor::new(
            &profile_with_bio(Some("old")),
            backend.clone(),
            me_cell(),
            WINDOW,
        );

        editor.edit("").unwrap();
        editor.flush().await.unwrap();

        let patches = backend.patches();
        assert_eq!(patches.len(), 1);
        assert!(patches[0].is_empty());
        assert_eq!(editor.last_saved(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_invalidates_me_query() {
        let backend = Arc::new(RecordingProfileBackend::default());
        let me = me_cell();
        me.set_data(profile_with_bio(Some("old")));

        let editor = BioEditor::new(&profile_with_bio(Some("old")), backend, me.clone(), WINDOW);
        editor.edit("new").unwrap();
        editor.flush().await.unwrap();

        // Invalidated: the next read goes to the fetcher.
        let refreshed = me.fetch().await.unwrap();
        assert_eq!(refreshed.bio.as_deref(), Some("fetched"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_save_is_reported() {
        let backend = Arc::new(RecordingProfileBackend::failing(TeamfinderError::from_status(
            500, "boom",
        )));
        let editor = BioEditor::new(&profile_with_bio(None), backend, me_cell(), WINDOW);

        editor.edit("text").unwrap();
        assert!(editor.flush().await.is_err());
        assert_eq!(editor.last_saved(), "");
        assert!(editor.save_error().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_without_pending_edit_ignores_old_failure() {
        let backend = Arc::new(RecordingProfileBackend::failing(TeamfinderError::from_status(
            500, "boom",
        )));
        let editor = BioEditor::new(&profile_with_bio(None), backend, me_cell(), WINDOW);

        editor.edit("text").unwrap();
        settle(700).await;
        assert!(editor.save_error().is_some());
        assert!(!editor.is_pending());

        editor.flush().await.unwrap();

        // A new edit starts from a clean slate.
        assert!(!editor.edit("").unwrap());
        assert_eq!(editor.save_error(), None);
    }
}
