use std::path::Path;
use tokio::fs;
use crate::core::library::LibraryResult;

// Replace-write for the data file: contents land in a sibling temp file first
// and are renamed over the target, so a concurrent or subsequent load never
// observes a partially written file.
pub(crate) async fn atomic_write(path: &Path, contents: &[u8]) -> LibraryResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    let tmp = path.with_extension("tmp");
    fs::write(tmp.as_path(), contents).await?;
    fs::rename(tmp.as_path(), path).await?;
    Ok(())
}

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        // keep stdout for catalog output; diagnostics go to stderr
        .with_writer(std::io::stderr)
        .json()
        .init();
}

#[cfg(test)]
mod tests {
    use crate::utils::fs::atomic_write;

    #[tokio::test]
    async fn test_should_write_and_replace() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("library.txt");

        atomic_write(path.as_path(), b"[]").await.expect("should write");
        assert_eq!("[]", tokio::fs::read_to_string(&path).await.expect("should read"));

        atomic_write(path.as_path(), b"[1]").await.expect("should replace");
        assert_eq!("[1]", tokio::fs::read_to_string(&path).await.expect("should read"));
    }

    #[tokio::test]
    async fn test_should_create_missing_parent_dirs() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("nested/dir/library.txt");

        atomic_write(path.as_path(), b"[]").await.expect("should write");
        assert_eq!("[]", tokio::fs::read_to_string(&path).await.expect("should read"));
    }
}
