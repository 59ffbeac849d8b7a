use curriculum_engine::{Curriculum, CurriculumFormat, load_curriculum_file};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}/tests/fixtures/{name}",
        env!("CARGO_MANIFEST_DIR")
    ))
}

fn load(name: &str) -> Curriculum {
    load_curriculum_file(&fixture(name), None).unwrap()
}

#[test]
fn fixture_outline() {
    let curriculum = load("lua_basics.md");

    insta::assert_debug_snapshot!(curriculum.outline(), @r###"
    [
        ChapterOutline {
            title: "Chapter 1: Getting Started",
            sections: [
                "Installing Lua",
                "Your First Script",
            ],
        },
        ChapterOutline {
            title: "Chapter 2: Tables",
            sections: [
                "Arrays",
                "Dictionaries",
            ],
        },
        ChapterOutline {
            title: "Chapter 3: Review",
            sections: [],
        },
    ]
    "###);
}

#[test]
fn fixture_section_content_is_raw_markdown() {
    let curriculum = load("lua_basics.md");
    let first_script = &curriculum.chapters[0].sections[1];

    assert_eq!(
        first_script.content,
        "Create `hello.lua`:\n\n```lua\nprint(\"Hello, world!\")\n```\n\nRun it with `lua hello.lua`."
    );
}

#[test]
fn fixture_level_four_heading_stays_in_content() {
    let curriculum = load("lua_basics.md");
    let dictionaries = &curriculum.chapters[1].sections[1];

    assert_eq!(
        dictionaries.content,
        "#### **Key Types**\n\nAny value except `nil` can be a key."
    );
}

#[test]
fn fixture_stray_section_is_not_attached() {
    let curriculum = load("lua_basics.md");

    assert!(
        curriculum
            .chapters
            .iter()
            .flat_map(|c| &c.sections)
            .all(|s| s.title != "Stray Notes")
    );
}

#[test]
fn fixture_parser_chapters_carry_defaults() {
    let curriculum = load("lua_basics.md");

    for chapter in &curriculum.chapters {
        assert!(chapter.description.is_empty());
        assert!(chapter.objectives.is_empty());
        assert!(chapter.quiz.is_none());
        for section in &chapter.sections {
            assert!(section.code_examples.is_empty());
            assert!(section.exercises.is_empty());
        }
    }
}

#[test]
fn structured_fixture_round_trips_through_json() {
    let curriculum = load("lua_structured.json");
    assert_eq!(curriculum.len(), 2);

    let json = serde_json::to_string(&curriculum).unwrap();
    let reloaded = curriculum_engine::load_curriculum(&json, CurriculumFormat::Json).unwrap();

    assert_eq!(reloaded, curriculum);
}

#[test]
fn structured_fixture_quiz_scoring() {
    let curriculum = load("lua_structured.json");
    let quiz = curriculum.chapters[0].quiz.as_ref().unwrap();

    assert_eq!(quiz.questions.len(), 3);
    assert_eq!(quiz.score(&[Some(1), Some(0), Some(2)]), 100);
    assert_eq!(quiz.score(&[Some(1), None, Some(0)]), 33);
}
