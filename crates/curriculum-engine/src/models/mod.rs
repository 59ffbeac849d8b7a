pub mod chapter;
pub mod curriculum;
pub mod quiz;

pub use chapter::{Chapter, CodeExample, Difficulty, Exercise, Section};
pub use curriculum::{ChapterOutline, Curriculum};
pub use quiz::{Quiz, QuizQuestion};
