use std::path::{Path, PathBuf};

/// Route the upload directory is served under.
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Writes task attachments into a directory served at [`UPLOADS_ROUTE`].
///
/// No cleanup, deduplication or size limits: a second upload with the same
/// task id and filename overwrites the first.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Stores `bytes` as `{task_id}_{filename}` and returns the reference
    /// recorded on the task, e.g. `uploads/3_plan.pdf`.
    pub async fn save(&self, task_id: u64, filename: &str, bytes: &[u8]) -> anyhow::Result<String> {
        let name = format!("{}_{}", task_id, sanitize_filename(filename));
        let path = self.dir.join(&name);

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            anyhow::anyhow!("Failed to write upload {}: {}", path.display(), e)
        })?;

        tracing::info!(task_id, path = %path.display(), size = bytes.len(), "Stored upload");
        Ok(format!("{}/{}", UPLOADS_ROUTE.trim_start_matches('/'), name))
    }
}

/// Keeps only the final path component so uploads cannot escape the directory.
fn sanitize_filename(filename: &str) -> &str {
    match filename.rsplit(|c: char| c == '/' || c == '\\').next() {
        Some(name) if !name.is_empty() && name != "." && name != ".." => name,
        _ => "upload",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sanitize_strips_directories() {
        assert_eq!(sanitize_filename("plan.pdf"), "plan.pdf");
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\me\\photo.jpg"), "photo.jpg");
        assert_eq!(sanitize_filename("dir/"), "upload");
        assert_eq!(sanitize_filename(".."), "upload");
    }

    #[tokio::test]
    async fn save_writes_under_task_id() {
        let dir = TempDir::new().unwrap();
        let store = UploadStore::new(dir.path().join("uploads"));

        let reference = store.save(7, "notes.txt", b"stay hydrated").await.unwrap();

        assert_eq!(reference, "uploads/7_notes.txt");
        let written = std::fs::read(dir.path().join("uploads").join("7_notes.txt")).unwrap();
        assert_eq!(written, b"stay hydrated");
    }

    #[tokio::test]
    async fn save_overwrites_same_name() {
        let dir = TempDir::new().unwrap();
        let store = UploadStore::new(dir.path());

        store.save(1, "a.txt", b"first").await.unwrap();
        store.save(1, "a.txt", b"second").await.unwrap();

        let written = std::fs::read(dir.path().join("1_a.txt")).unwrap();
        assert_eq!(written, b"second");
    }
}
