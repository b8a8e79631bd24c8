use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Shared handler state.
///
/// Holds configuration only: the content directory is re-read on every
/// request so edits show up without a restart, and no filter state ever
/// lives on the server side.
#[derive(Clone)]
pub struct AppState {
    content_dir: Arc<PathBuf>,
    profile_dir: Arc<PathBuf>,
    page_size: usize,
}

impl AppState {
    pub fn new(content_dir: impl Into<PathBuf>, profile_dir: impl Into<PathBuf>, page_size: usize) -> Self {
        AppState {
            content_dir: Arc::new(content_dir.into()),
            profile_dir: Arc::new(profile_dir.into()),
            page_size,
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    pub fn profile_dir(&self) -> &Path {
        &self.profile_dir
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}
