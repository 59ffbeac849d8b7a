use crate::models::Curriculum;
use crate::progress::ProgressTracker;
use crate::source::{CurriculumFormat, SourceError, load_curriculum};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to load curriculum: {0}")]
    Source(#[from] SourceError),
}

/// Read a curriculum document and return its content
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read and load a curriculum file, detecting the format from its extension
/// unless one is given
pub fn load_curriculum_file(
    path: &Path,
    format: Option<CurriculumFormat>,
) -> Result<Curriculum, IoError> {
    let format = format.unwrap_or_else(|| CurriculumFormat::from_path(path));
    let text = read_document(path)?;
    log::info!("Loading {format} curriculum from {}", path.display());
    Ok(load_curriculum(&text, format)?)
}

/// Read saved progress for a curriculum with `chapter_count` chapters.
///
/// A missing file is not an error: it yields fresh progress.
pub fn read_progress(path: &Path, chapter_count: usize) -> Result<ProgressTracker, IoError> {
    if !path.exists() {
        log::debug!("No saved progress at {}", path.display());
        return Ok(ProgressTracker::new(chapter_count));
    }
    let text = fs::read_to_string(path).map_err(IoError::Io)?;
    Ok(ProgressTracker::restore(Some(&text), chapter_count))
}
