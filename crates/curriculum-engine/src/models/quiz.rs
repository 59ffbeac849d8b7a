use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub correct_answer: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuizQuestion {
    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct_answer
    }
}

impl Quiz {
    /// Count answers matching their question's correct option.
    ///
    /// `answers` is aligned with `questions`; `None` marks an unanswered
    /// question and answers past the last question are ignored.
    pub fn correct_count(&self, answers: &[Option<usize>]) -> usize {
        self.questions
            .iter()
            .zip(answers)
            .filter(|(q, a)| a.is_some_and(|a| q.is_correct(a)))
            .count()
    }

    /// Score as a rounded percentage in `0..=100`.
    pub fn score(&self, answers: &[Option<usize>]) -> u8 {
        if self.questions.is_empty() {
            return 0;
        }
        let correct = self.correct_count(answers) as f64;
        let total = self.questions.len() as f64;
        (correct / total * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn question(correct_answer: usize) -> QuizQuestion {
        QuizQuestion {
            question: "Which keyword declares a local variable?".to_string(),
            options: vec!["var".into(), "local".into(), "let".into()],
            correct_answer,
            explanation: None,
        }
    }

    fn quiz(n: usize) -> Quiz {
        Quiz {
            questions: (0..n).map(|_| question(1)).collect(),
        }
    }

    #[rstest]
    #[case(vec![Some(1), Some(1), Some(1)], 100)]
    #[case(vec![Some(1), Some(0), Some(1)], 67)]
    #[case(vec![Some(1), None, None], 33)]
    #[case(vec![], 0)]
    #[case(vec![Some(0), Some(2), Some(0)], 0)]
    fn score_rounds_to_nearest_percent(#[case] answers: Vec<Option<usize>>, #[case] expected: u8) {
        assert_eq!(quiz(3).score(&answers), expected);
    }

    #[test]
    fn empty_quiz_scores_zero() {
        assert_eq!(quiz(0).score(&[Some(1)]), 0);
    }

    #[test]
    fn extra_answers_are_ignored() {
        let q = quiz(2);
        assert_eq!(q.correct_count(&[Some(1), Some(1), Some(1), Some(1)]), 2);
        assert_eq!(q.score(&[Some(1), Some(1), Some(1)]), 100);
    }

    #[test]
    fn question_field_names_match_wire_format() {
        let json = r#"{"question": "2 + 2?", "options": ["3", "4"], "correctAnswer": 1}"#;
        let q: QuizQuestion = serde_json::from_str(json).unwrap();

        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
        assert!(q.explanation.is_none());
    }
}
