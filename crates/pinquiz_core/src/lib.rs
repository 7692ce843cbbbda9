use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuestionError {
    #[error("correct answer index {0} is out of range 1..=3")]
    CorrectIndexOutOfRange(u8),
    #[error("no questions defined")]
    Empty,
    #[error("invalid question data: {0}")]
    Parse(String),
    #[error("{path}: {reason}")]
    File { path: String, reason: String },
}

/// One multiple-choice question. Immutable once constructed; `correct` is a
/// 1-based index into `answers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    answers: [String; 3],
    correct: u8,
}

impl Question {
    pub fn new(
        prompt: impl Into<String>,
        answers: [String; 3],
        correct: u8,
    ) -> Result<Self, QuestionError> {
        let question = Self {
            prompt: prompt.into(),
            answers,
            correct,
        };
        question.validate()?;
        Ok(question)
    }

    fn validate(&self) -> Result<(), QuestionError> {
        if !(1..=3).contains(&self.correct) {
            return Err(QuestionError::CorrectIndexOutOfRange(self.correct));
        }
        Ok(())
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn answers(&self) -> &[String; 3] {
        &self.answers
    }

    pub fn correct_index(&self) -> u8 {
        self.correct
    }

    /// Prompt plus the three enumerated answers, one per line.
    pub fn render(&self) -> String {
        let mut out = self.prompt.clone();
        for (i, answer) in self.answers.iter().enumerate() {
            out.push_str(&format!("\n{}) {}", i + 1, answer));
        }
        out
    }

    pub fn is_correct(&self, choice: u8) -> bool {
        choice == self.correct
    }

    /// Echo of the chosen answer plus the verdict; names the correct answer
    /// when the choice was wrong.
    pub fn explain(&self, choice: u8) -> String {
        let mut out = format!("Wybrano odpowiedz {choice}.");
        if self.is_correct(choice) {
            out.push_str("\nPrawidlowa odpowiedz!");
        } else {
            out.push_str("\nBledna odpowiedz!");
            out.push_str(&format!(
                "\nPoprawna odpowiedz to: {} - {}",
                self.correct,
                self.answers[usize::from(self.correct) - 1]
            ));
        }
        out
    }
}

/// The compiled-in question set.
pub fn builtin() -> Vec<Question> {
    let q = |prompt: &str, answers: [&str; 3], correct: u8| Question {
        prompt: prompt.to_string(),
        answers: answers.map(String::from),
        correct,
    };
    vec![
        q(
            "Podaj date bitwy pod Grunwaldem.",
            ["1410r.", "1353r.", "1420r."],
            1,
        ),
        q("Ile jest dni tygodnia?", ["6 dni", "7 dni", "8 dni"], 2),
        q(
            "Godzina 21.00 to jaka godzina w formacie 12 godzinnym?",
            ["8.00 p.m.", "9.00 a.m.", "9.00 p.m."],
            3,
        ),
        q("Ile zon mial krol Anglii Henryk XIII", ["1", "3", "6"], 3),
        q("Ile dni ma kwiecien?", ["29", "30", "31"], 2),
    ]
}

/// Parse a JSON array of questions, validating every entry.
pub fn parse_questions(content: &str) -> Result<Vec<Question>, QuestionError> {
    let questions: Vec<Question> =
        serde_json::from_str(content).map_err(|e| QuestionError::Parse(e.to_string()))?;
    if questions.is_empty() {
        return Err(QuestionError::Empty);
    }
    for question in &questions {
        question.validate()?;
    }
    Ok(questions)
}

/// Load questions from a JSON file.
pub fn load_questions(path: &str) -> Result<Vec<Question>, QuestionError> {
    let content = std::fs::read_to_string(path).map_err(|e| QuestionError::File {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    parse_questions(&content).map_err(|e| match e {
        QuestionError::Parse(reason) => QuestionError::File {
            path: path.to_string(),
            reason,
        },
        other => other,
    })
}
