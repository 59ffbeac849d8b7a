use regex::Regex;
use std::sync::OnceLock;

/// Classification of a single source line.
///
/// Headings carry their extracted title, body lines carry the raw line
/// exactly as it appeared in the source (without its terminator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `## **Title**`
    Chapter(&'a str),
    /// `### **Title**`
    Section(&'a str),
    Body(&'a str),
}

pub const CHAPTER_MARKER: &str = "##";
pub const SECTION_MARKER: &str = "###";

fn heading_regex(marker: &str) -> Regex {
    Regex::new(&format!(r"^{marker}\s+\*\*(.+)\*\*")).expect("Invalid heading regex")
}

fn chapter_regex() -> &'static Regex {
    static CHAPTER_REGEX: OnceLock<Regex> = OnceLock::new();
    CHAPTER_REGEX.get_or_init(|| heading_regex(CHAPTER_MARKER))
}

fn section_regex() -> &'static Regex {
    static SECTION_REGEX: OnceLock<Regex> = OnceLock::new();
    SECTION_REGEX.get_or_init(|| heading_regex(SECTION_MARKER))
}

/// Trimmed heading title; a blank title is not a heading.
fn heading_title<'a>(regex: &Regex, line: &'a str) -> Option<&'a str> {
    regex
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|title| !title.is_empty())
}

/// Classify a raw line (terminator already stripped).
///
/// Chapter headings are checked before section headings, and a line that
/// starts with the section marker is never taken as a chapter heading.
pub fn classify_line(raw: &str) -> LineKind<'_> {
    let line = raw.trim_end();

    if !line.starts_with(SECTION_MARKER)
        && let Some(title) = heading_title(chapter_regex(), line)
    {
        return LineKind::Chapter(title);
    }

    if let Some(title) = heading_title(section_regex(), line) {
        return LineKind::Section(title);
    }

    LineKind::Body(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("## **Intro**", LineKind::Chapter("Intro"))]
    #[case("##   **  Spaced Title  **   ", LineKind::Chapter("Spaced Title"))]
    #[case("## **Chapter 1: Getting Started**", LineKind::Chapter("Chapter 1: Getting Started"))]
    #[case("### **Basics**", LineKind::Section("Basics"))]
    #[case("###\t**Tabbed**", LineKind::Section("Tabbed"))]
    #[case("## **Outer** and **inner**", LineKind::Chapter("Outer** and **inner"))]
    fn classifies_headings(#[case] line: &str, #[case] expected: LineKind) {
        assert_eq!(classify_line(line), expected);
    }

    #[rstest]
    #[case("")]
    #[case("Plain text")]
    #[case("## Not bold")]
    #[case("##**No space**")]
    #[case("#### **Too deep**")]
    #[case("# **Top level**")]
    #[case(" ## **Indented**")]
    #[case("## ****")]
    #[case("**Bold only**")]
    #[case("## **   **")]
    #[case("### ** **")]
    fn other_lines_are_body(#[case] line: &str) {
        assert_eq!(classify_line(line), LineKind::Body(line));
    }

    #[test]
    fn level_three_is_never_a_chapter() {
        assert!(matches!(
            classify_line("### **Section**"),
            LineKind::Section("Section")
        ));
    }

    #[test]
    fn body_keeps_trailing_whitespace() {
        assert_eq!(classify_line("code   "), LineKind::Body("code   "));
    }
}
