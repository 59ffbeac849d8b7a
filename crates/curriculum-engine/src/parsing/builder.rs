use crate::models::{Chapter, Section};

use super::classify::LineKind;

/// Accumulates classified lines into chapters.
///
/// Holds at most one open chapter and one open section. Every transition
/// closes the open section through [`CurriculumBuilder::close_section`],
/// so a section is always trimmed and attached the same way whether it
/// ends at a heading or at end of input.
#[derive(Debug, Default)]
pub struct CurriculumBuilder {
    chapters: Vec<Chapter>,
    current_chapter: Option<Chapter>,
    current_section: Option<Section>,
}

impl CurriculumBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: LineKind<'_>) {
        match line {
            LineKind::Chapter(title) => {
                self.close_chapter();
                self.current_chapter = Some(Chapter::new(title));
            }
            LineKind::Section(title) => {
                self.close_section();
                self.current_section = Some(Section::new(title));
            }
            LineKind::Body(text) => {
                if let Some(section) = self.current_section.as_mut() {
                    section.content.push_str(text);
                    section.content.push('\n');
                }
            }
        }
    }

    pub fn finish(mut self) -> Vec<Chapter> {
        // EOF flush
        self.close_chapter();
        self.chapters
    }

    fn close_section(&mut self) {
        let Some(mut section) = self.current_section.take() else {
            return;
        };

        match self.current_chapter.as_mut() {
            Some(chapter) => {
                section.content = section.content.trim().to_string();
                chapter.sections.push(section);
            }
            None => log::debug!("Dropping section {:?} with no owning chapter", section.title),
        }
    }

    fn close_chapter(&mut self) {
        self.close_section();
        if let Some(chapter) = self.current_chapter.take() {
            self.chapters.push(chapter);
        }
    }
}
