use crate::poller::{PollOutcome, Poller};
use crate::rig::LineRig;
use crate::signaler::Signaler;
use pinquiz_core::Question;
use pinquiz_hal::traits::LineBackend;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Every question was asked and answered.
    Completed,
    /// The quit button ended the session early.
    QuitByUser,
    /// An input line read failed; the session stops the same way a quit
    /// does, but the reason stays distinguishable.
    InputFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub asked: usize,
    pub correct: usize,
    pub total: usize,
    pub end: EndReason,
}

impl SessionReport {
    pub fn completed(&self) -> bool {
        matches!(self.end, EndReason::Completed)
    }

    pub fn score_line(&self) -> String {
        format!("Wynik: {}/{}", self.correct, self.asked)
    }
}

/// Drives one quiz session: ask, poll, explain, signal, tally. Only fully
/// answered questions count toward the score; a question interrupted by quit
/// or by an input failure is not counted as asked.
pub struct QuizRunner {
    poller: Poller,
    signaler: Signaler,
}

impl QuizRunner {
    pub fn new(poller: Poller, signaler: Signaler) -> Self {
        Self { poller, signaler }
    }

    pub fn run<B: LineBackend>(
        &self,
        rig: &mut LineRig<'_, B>,
        questions: &[Question],
        out: &mut impl Write,
    ) -> io::Result<SessionReport> {
        let mut asked = 0;
        let mut correct = 0;
        let mut end = EndReason::Completed;

        for question in questions {
            writeln!(out, "{}", question.render())?;
            match self.poller.wait(rig) {
                PollOutcome::Quit => {
                    end = EndReason::QuitByUser;
                    break;
                }
                PollOutcome::ReadFailed(e) => {
                    log::warn!("input read failed, ending quiz: {e}");
                    end = EndReason::InputFailed;
                    break;
                }
                PollOutcome::Choice(choice) => {
                    writeln!(out, "{}", question.explain(choice))?;
                    let ok = question.is_correct(choice);
                    self.signaler.signal(rig, ok);
                    asked += 1;
                    if ok {
                        correct += 1;
                    }
                }
            }
        }

        let report = SessionReport {
            asked,
            correct,
            total: questions.len(),
            end,
        };
        if report.completed() {
            writeln!(out, "Odpowiedziales na wszystkie pytania.")?;
        }
        writeln!(out, "{}", report.score_line())?;
        Ok(report)
    }
}
