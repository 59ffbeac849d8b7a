use serde::{Deserialize, Serialize};

use super::chapter::Chapter;

/// An ordered collection of chapters loaded from a single source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curriculum {
    pub chapters: Vec<Chapter>,
}

/// Titles only view of a chapter, used for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterOutline {
    pub title: String,
    pub sections: Vec<String>,
}

impl Curriculum {
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Self { chapters }
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    /// Clamp a requested chapter index into the valid range.
    ///
    /// Returns `None` when there are no chapters to select.
    pub fn clamp_index(&self, index: usize) -> Option<usize> {
        if self.chapters.is_empty() {
            None
        } else {
            Some(index.min(self.chapters.len() - 1))
        }
    }

    pub fn outline(&self) -> Vec<ChapterOutline> {
        self.chapters
            .iter()
            .map(|c| ChapterOutline {
                title: c.title.clone(),
                sections: c.sections.iter().map(|s| s.title.clone()).collect(),
            })
            .collect()
    }
}

impl From<Vec<Chapter>> for Curriculum {
    fn from(chapters: Vec<Chapter>) -> Self {
        Self::new(chapters)
    }
}
