//! Local archive for submitted job posts
//!
//! The wizard fire-and-forgets completed posts into a sink; the production
//! sink appends them to a JSON file under the platform data directory so
//! they survive restarts and show up on the home board.

use crate::state::JobPost;
use crate::store::traits::JobSinkTrait;
use anyhow::{Context, Result};
use async_trait::async_trait;
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// File-backed archive of submitted posts
pub struct JobStore {
    path: Option<PathBuf>,
}

impl JobStore {
    /// Open the archive at the platform data directory
    pub fn open() -> Self {
        let path = ProjectDirs::from("io", "bitwork", "bitwork-tui")
            .map(|dirs| dirs.data_dir().join("posts.json"));
        Self { path }
    }

    /// Open the archive at an explicit path
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Read every archived post, oldest first
    pub fn load(&self) -> Result<Vec<JobPost>> {
        let Some(path) = &self.path else {
            return Ok(Vec::new());
        };
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let posts: Vec<JobPost> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(posts)
    }

    /// Append one post to the archive
    pub fn append(&self, post: &JobPost) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut posts = self.load()?;
        posts.push(post.clone());
        let content = serde_json::to_string_pretty(&posts)?;
        fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

#[async_trait]
impl JobSinkTrait for JobStore {
    async fn submit(&mut self, post: &JobPost) -> Result<()> {
        self.append(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::JobForm;
    use crate::store::MockJobSinkTrait;
    use uuid::Uuid;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("bitwork-tui-test-{}", Uuid::new_v4()))
            .join("posts.json")
    }

    #[test]
    fn test_load_from_missing_file_is_empty() {
        let store = JobStore::with_path(scratch_path());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_load_round_trips() {
        let path = scratch_path();
        let store = JobStore::with_path(path.clone());

        let mut form = JobForm::default();
        form.title = "Plumber".to_string();
        form.hourly_rate = "80".to_string();
        let post = JobPost::from_form(&form);

        store.append(&post).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, post.id);
        assert_eq!(loaded[0].title, "Plumber");

        // Appends accumulate rather than overwrite
        store.append(&JobPost::from_form(&JobForm::default())).unwrap();
        assert_eq!(store.load().unwrap().len(), 2);

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_load_rejects_corrupt_archive() {
        let path = scratch_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let store = JobStore::with_path(path.clone());
        assert!(store.load().is_err());

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_sink_trait_is_fire_and_forget() {
        let mut sink = MockJobSinkTrait::new();
        sink.expect_submit().times(1).returning(|_| Ok(()));

        let post = JobPost::from_form(&JobForm::default());
        tokio_test::block_on(sink.submit(&post)).unwrap();
    }
}
