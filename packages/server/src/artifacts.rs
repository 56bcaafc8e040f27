//! Optional on-disk copies of the last request and response.

use std::path::{Path, PathBuf};

use listing::PropertyInput;
use tracing::{debug, warn};

pub const INPUT_FILE: &str = "input.json";
pub const OUTPUT_FILE: &str = "output.html";

/// Writes `input.json` and `output.html` into a fixed directory, overwriting
/// the previous pair.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist both artifacts. Errors are logged, never returned.
    pub async fn write(&self, input: &PropertyInput, html: &str) {
        if let Err(e) = self.try_write(input, html).await {
            warn!(dir = %self.dir.display(), error = %e, "Failed to write listing artifacts");
        }
    }

    async fn try_write(&self, input: &PropertyInput, html: &str) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let json = serde_json::to_vec_pretty(input)?;
        tokio::fs::write(self.dir.join(INPUT_FILE), json).await?;
        tokio::fs::write(self.dir.join(OUTPUT_FILE), html).await?;

        debug!(dir = %self.dir.display(), "Wrote listing artifacts");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> PropertyInput {
        PropertyInput::from_json(
            r#"{
                "title": "Loft",
                "location": {"city": "Porto", "neighborhood": "Bonfim"},
                "price": 900,
                "listing_type": "rent"
            }"#,
        )
        .unwrap()
    }

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("listing-artifacts-{}-{}", name, std::process::id()))
    }

    #[tokio::test]
    async fn test_writes_input_and_output() {
        let dir = scratch_dir("write");
        let writer = ArtifactWriter::new(&dir);

        writer.write(&input(), "<h1>Loft</h1>").await;

        let html = tokio::fs::read_to_string(dir.join(OUTPUT_FILE)).await.unwrap();
        assert_eq!(html, "<h1>Loft</h1>");

        let json = tokio::fs::read(dir.join(INPUT_FILE)).await.unwrap();
        let stored: PropertyInput = serde_json::from_slice(&json).unwrap();
        assert_eq!(stored, input());

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_second_write_overwrites() {
        let dir = scratch_dir("overwrite");
        let writer = ArtifactWriter::new(&dir);

        writer.write(&input(), "first").await;
        writer.write(&input(), "second").await;

        let html = tokio::fs::read_to_string(dir.join(OUTPUT_FILE)).await.unwrap();
        assert_eq!(html, "second");

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_unwritable_dir_is_not_fatal() {
        let file = scratch_dir("blocker");
        tokio::fs::write(&file, b"not a directory").await.unwrap();

        // A regular file where the directory should be.
        ArtifactWriter::new(&file).write(&input(), "<p></p>").await;

        assert!(!file.join(OUTPUT_FILE).exists());
        let _ = tokio::fs::remove_file(&file).await;
    }
}
