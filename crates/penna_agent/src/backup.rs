//! Local backup artifacts for generated content.

use chrono::Local;
use penna_core::GeneratedContent;
use penna_error::{StorageError, StorageErrorKind};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Writes two backup artifacts per content object before any publish
/// attempt: a structured JSON record and a human-readable text rendering.
/// Content is never lost even when every publish fails.
#[derive(Debug)]
pub struct BackupWriter {
    content_dir: PathBuf,
}

impl BackupWriter {
    /// Create a backup writer, creating the content directory if needed.
    pub fn new(content_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let content_dir = content_dir.into();
        std::fs::create_dir_all(&content_dir).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                content_dir.display(),
                e
            )))
        })?;
        Ok(Self { content_dir })
    }

    /// Save both artifacts, returning their paths.
    #[instrument(skip(self, content), fields(platform = %content.platform))]
    pub fn save(&self, content: &GeneratedContent) -> Result<(PathBuf, PathBuf), StorageError> {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let stem = format!("{}_{}", content.platform, stamp);

        let json_path = self.content_dir.join(format!("{stem}.json"));
        let record = serde_json::to_string_pretty(content)
            .map_err(|e| StorageError::new(StorageErrorKind::Serialize(e.to_string())))?;
        write_file(&json_path, &record)?;

        let text_path = self.content_dir.join(format!("{stem}.txt"));
        write_file(&text_path, &render_text(content))?;

        info!(
            json = %json_path.display(),
            text = %text_path.display(),
            "Content saved locally"
        );
        Ok((json_path, text_path))
    }
}

fn write_file(path: &PathBuf, data: &str) -> Result<(), StorageError> {
    std::fs::write(path, data)
        .map_err(|e| StorageError::new(StorageErrorKind::Io(format!("{}: {}", path.display(), e))))
}

fn render_text(content: &GeneratedContent) -> String {
    format!(
        "TITLE: {}\nPLATFORM: {}\nGENERATED: {}\nLENGTH: {} characters\n\n{}\n\n{}",
        content.title,
        content.platform,
        content.generated_at,
        content.character_count,
        "=".repeat(70),
        content.content
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use penna_core::Platform;

    #[test]
    fn rendering_carries_header_and_body() {
        let content = GeneratedContent::new(
            "agent memory",
            "On Agent Memory",
            "Body of the post.",
            Platform::LinkedIn,
        );
        let rendered = render_text(&content);
        assert!(rendered.starts_with("TITLE: On Agent Memory\nPLATFORM: linkedin\n"));
        assert!(rendered.contains(&"=".repeat(70)));
        assert!(rendered.ends_with("Body of the post."));
    }
}
