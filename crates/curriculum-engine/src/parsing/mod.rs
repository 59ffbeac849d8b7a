//! # Curriculum Parsing
//!
//! Converts a markdown curriculum document into chapters and sections in a
//! single pass over its lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified on its
//!    own as a chapter heading (`## **Title**`), a section heading
//!    (`### **Title**`) or body text
//!
//! 2. **Accumulation** (`builder`): a `CurriculumBuilder` keeps the open
//!    chapter and section, appending body lines and closing both at heading
//!    transitions and at end of input
//!
//! ## Key Invariants
//!
//! - Parsing is total: malformed structure only drops content
//! - Sections before the first chapter heading are discarded
//! - Section content keeps its raw markdown, trimmed only at both ends

pub mod builder;
pub mod classify;

pub use builder::CurriculumBuilder;
pub use classify::{LineKind, classify_line};

use crate::models::Chapter;

/// Parse a curriculum document into its chapters, in document order.
pub fn parse_curriculum(text: &str) -> Vec<Chapter> {
    let mut builder = CurriculumBuilder::new();

    for line in text.lines() {
        builder.push(classify_line(line));
    }

    builder.finish()
}
