//! Curriculum sources.
//!
//! A curriculum arrives either as a markdown document, which goes through
//! the line parser and only yields titles and section bodies, or as a
//! structured JSON document carrying the full data model (objectives,
//! code examples, exercises, quizzes).

use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::models::{Chapter, Curriculum};
use crate::parsing::parse_curriculum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurriculumFormat {
    Markdown,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Invalid curriculum JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid chapter {chapter}: {reason}")]
    Invalid { chapter: usize, reason: String },
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown curriculum format '{0}' (expected 'markdown' or 'json')")]
pub struct UnknownFormat(String);

impl CurriculumFormat {
    /// Pick a format from a file extension; anything but `.json` is markdown.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CurriculumFormat::Json,
            _ => CurriculumFormat::Markdown,
        }
    }
}

impl FromStr for CurriculumFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(CurriculumFormat::Markdown),
            "json" => Ok(CurriculumFormat::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for CurriculumFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurriculumFormat::Markdown => f.write_str("markdown"),
            CurriculumFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StructuredDoc {
    Bare(Vec<Chapter>),
    Wrapped { chapters: Vec<Chapter> },
}

/// Load a curriculum from document text in the given format.
pub fn load_curriculum(text: &str, format: CurriculumFormat) -> Result<Curriculum, SourceError> {
    let chapters = match format {
        CurriculumFormat::Markdown => parse_curriculum(text),
        CurriculumFormat::Json => {
            let chapters = match serde_json::from_str::<StructuredDoc>(text)? {
                StructuredDoc::Bare(chapters) => chapters,
                StructuredDoc::Wrapped { chapters } => chapters,
            };
            validate(&chapters)?;
            chapters
        }
    };
    log::debug!("Loaded {} chapters from {format} source", chapters.len());
    Ok(Curriculum::new(chapters))
}

fn validate(chapters: &[Chapter]) -> Result<(), SourceError> {
    for (index, chapter) in chapters.iter().enumerate() {
        let invalid = |reason: String| SourceError::Invalid {
            chapter: index,
            reason,
        };

        if chapter.title.trim().is_empty() {
            return Err(invalid("chapter title is empty".to_string()));
        }
        if let Some(pos) = chapter.sections.iter().position(|s| s.title.trim().is_empty()) {
            return Err(invalid(format!("section {pos} has an empty title")));
        }
        let Some(quiz) = &chapter.quiz else {
            continue;
        };
        for (q, question) in quiz.questions.iter().enumerate() {
            if question.options.is_empty() {
                return Err(invalid(format!("quiz question {q} has no options")));
            }
            if question.correct_answer >= question.options.len() {
                return Err(invalid(format!(
                    "quiz question {q} answer {} is out of range for {} options",
                    question.correct_answer,
                    question.options.len()
                )));
            }
        }
    }
    Ok(())
}
