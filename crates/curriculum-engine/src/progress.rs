//! Per-chapter learner progress.
//!
//! One [`ChapterProgress`] record per chapter, index aligned with the loaded
//! curriculum. The record array never changes length after construction.

use serde::{Deserialize, Serialize};

/// Fixed key under which hosts persist the serialized progress array.
pub const PROGRESS_KEY: &str = "curriculum-progress";

pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterProgress {
    pub completed: bool,
    pub score: u8,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProgressError {
    #[error("Chapter index {index} is out of range for {len} chapters")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSummary {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    pub average_score: f64,
    pub overall_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressTracker {
    chapters: Vec<ChapterProgress>,
}

impl ProgressTracker {
    pub fn new(chapter_count: usize) -> Self {
        Self {
            chapters: vec![ChapterProgress::default(); chapter_count],
        }
    }

    /// Rehydrate saved progress.
    ///
    /// The saved array is only accepted when it parses and its length matches
    /// `chapter_count`; anything else falls back to fresh defaults.
    pub fn restore(saved: Option<&str>, chapter_count: usize) -> Self {
        let Some(text) = saved else {
            return Self::new(chapter_count);
        };

        match serde_json::from_str::<Vec<ChapterProgress>>(text) {
            Ok(chapters) if chapters.len() == chapter_count => {
                let mut tracker = Self { chapters };
                for p in &mut tracker.chapters {
                    p.score = p.score.min(MAX_SCORE);
                }
                tracker
            }
            Ok(chapters) => {
                log::info!(
                    "Discarding saved progress for {} chapters, curriculum has {chapter_count}",
                    chapters.len()
                );
                Self::new(chapter_count)
            }
            Err(e) => {
                log::warn!("Discarding unreadable saved progress: {e}");
                Self::new(chapter_count)
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.chapters).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ChapterProgress> {
        self.chapters.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChapterProgress> {
        self.chapters.iter()
    }

    /// Set completion for a chapter; `score` replaces the stored score only
    /// when given.
    pub fn update(
        &mut self,
        index: usize,
        completed: bool,
        score: Option<u8>,
    ) -> Result<(), ProgressError> {
        let len = self.chapters.len();
        let entry = self
            .chapters
            .get_mut(index)
            .ok_or(ProgressError::OutOfRange { index, len })?;

        entry.completed = completed;
        if let Some(score) = score {
            entry.score = score.min(MAX_SCORE);
        }
        Ok(())
    }

    pub fn complete_quiz(&mut self, index: usize, score: u8) -> Result<(), ProgressError> {
        self.update(index, true, Some(score))
    }

    pub fn reset(&mut self, index: usize) -> Result<(), ProgressError> {
        let len = self.chapters.len();
        let entry = self
            .chapters
            .get_mut(index)
            .ok_or(ProgressError::OutOfRange { index, len })?;
        *entry = ChapterProgress::default();
        Ok(())
    }

    pub fn reset_all(&mut self) {
        self.chapters.fill(ChapterProgress::default());
    }

    pub fn summary(&self) -> ProgressSummary {
        let total = self.chapters.len();
        let completed = self.chapters.iter().filter(|p| p.completed).count();
        let (average_score, overall_percent) = if total == 0 {
            (0.0, 0.0)
        } else {
            let score_sum: u32 = self.chapters.iter().map(|p| u32::from(p.score)).sum();
            (
                f64::from(score_sum) / total as f64,
                completed as f64 / total as f64 * 100.0,
            )
        };

        ProgressSummary {
            total,
            completed,
            remaining: total - completed,
            average_score,
            overall_percent,
        }
    }
}
