pub mod io;
pub mod models;
pub mod parsing;
pub mod progress;
pub mod source;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use parsing::parse_curriculum;
pub use progress::{ChapterProgress, PROGRESS_KEY, ProgressError, ProgressSummary, ProgressTracker};
pub use source::{CurriculumFormat, SourceError, UnknownFormat, load_curriculum};
