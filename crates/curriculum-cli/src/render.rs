use curriculum_engine::{Curriculum, ProgressTracker};

pub const EMPTY_NOTICE: &str = "No chapters found in curriculum";

/// Numbered chapter titles with section counts and completion marks.
pub fn render_chapters(curriculum: &Curriculum, progress: &ProgressTracker) -> Vec<String> {
    if curriculum.is_empty() {
        return vec![EMPTY_NOTICE.to_string()];
    }

    curriculum
        .chapters
        .iter()
        .enumerate()
        .map(|(i, chapter)| {
            let mark = match progress.get(i) {
                Some(p) if p.completed => format!("[x] {:>3}%", p.score),
                _ => "[ ]     ".to_string(),
            };
            let sections = chapter.sections.len();
            let noun = if sections == 1 { "section" } else { "sections" };
            let quiz = if chapter.has_quiz() { ", quiz" } else { "" };
            format!(
                "{mark} {:>2}. {} ({sections} {noun}{quiz})",
                i + 1,
                chapter.title
            )
        })
        .collect()
}

pub fn render_outline(curriculum: &Curriculum) -> Vec<String> {
    if curriculum.is_empty() {
        return vec![EMPTY_NOTICE.to_string()];
    }

    let mut lines = Vec::new();
    for (i, chapter) in curriculum.outline().iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, chapter.title));
        for section in &chapter.sections {
            lines.push(format!("   - {section}"));
        }
    }
    lines
}

pub fn render_stats(progress: &ProgressTracker) -> Vec<String> {
    if progress.is_empty() {
        return vec![EMPTY_NOTICE.to_string()];
    }

    let summary = progress.summary();
    vec![
        format!(
            "Completed: {}/{} chapters ({} remaining)",
            summary.completed, summary.total, summary.remaining
        ),
        format!("Average score: {:.0}%", summary.average_score),
        format!("Overall progress: {:.0}%", summary.overall_percent),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use curriculum_engine::{CurriculumFormat, load_curriculum};
    use pretty_assertions::assert_eq;

    fn curriculum() -> Curriculum {
        load_curriculum(
            "## **Intro**\n### **Basics**\nHi\n### **Types**\n## **Tables**\n### **Arrays**\n## **Closures**\n",
            CurriculumFormat::Markdown,
        )
        .unwrap()
    }

    #[test]
    fn chapters_listing_marks_completed() {
        let curriculum = curriculum();
        let mut progress = ProgressTracker::new(curriculum.len());
        progress.complete_quiz(1, 80).unwrap();

        assert_eq!(
            render_chapters(&curriculum, &progress),
            vec![
                "[ ]       1. Intro (2 sections)",
                "[x]  80%  2. Tables (1 section)",
                "[ ]       3. Closures (0 sections)",
            ]
        );
    }

    #[test]
    fn outline_nests_sections() {
        assert_eq!(
            render_outline(&curriculum()),
            vec![
                "1. Intro",
                "   - Basics",
                "   - Types",
                "2. Tables",
                "   - Arrays",
                "3. Closures",
            ]
        );
    }

    #[test]
    fn stats_round_percentages() {
        let mut progress = ProgressTracker::new(3);
        progress.complete_quiz(0, 100).unwrap();
        progress.complete_quiz(1, 50).unwrap();

        assert_eq!(
            render_stats(&progress),
            vec![
                "Completed: 2/3 chapters (1 remaining)",
                "Average score: 50%",
                "Overall progress: 67%",
            ]
        );
    }

    #[test]
    fn empty_curriculum_prints_notice() {
        let empty = Curriculum::default();
        let progress = ProgressTracker::new(0);

        assert_eq!(render_chapters(&empty, &progress), vec![EMPTY_NOTICE]);
        assert_eq!(render_outline(&empty), vec![EMPTY_NOTICE]);
        assert_eq!(render_stats(&progress), vec![EMPTY_NOTICE]);
    }
}
