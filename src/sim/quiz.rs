//! Five-question quiz bound to one planet
//!
//! Score moves only when an answer is locked in, and the cursor moves only
//! on an explicit key press after that.

use glam::Vec2;

use super::catalog::Question;
use super::planet::Body;
use crate::layout::answer_slot;

pub const QUESTIONS_PER_QUIZ: usize = 5;
pub const ANSWERS_PER_QUESTION: usize = 4;

/// How an answer option is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionShade {
    /// Not answered yet
    Neutral,
    /// The right answer, once answered
    Correct,
    /// The chosen wrong answer
    Wrong,
    /// Any other option once answered
    Dimmed,
}

#[derive(Debug, Clone)]
pub struct Quiz {
    body: Option<Body>,
    questions: &'static [Question],
    current_question: usize,
    score: u32,
    selected_answer: Option<usize>,
    answered: bool,
    finished: bool,
}

impl Quiz {
    pub fn new(body: Body) -> Self {
        Self::with_questions(Some(body), body.questions())
    }

    /// Quiz for a planet name. Unknown names give an already-finished quiz
    /// with no questions and a zero score.
    pub fn for_name(name: &str) -> Self {
        match Body::from_name(name) {
            Some(body) => Self::new(body),
            None => {
                log::warn!("No quiz questions for {name:?}");
                Self::with_questions(None, &[])
            }
        }
    }

    fn with_questions(body: Option<Body>, questions: &'static [Question]) -> Self {
        Self {
            body,
            questions,
            current_question: 0,
            score: 0,
            selected_answer: None,
            answered: false,
            finished: questions.is_empty(),
        }
    }

    pub fn body(&self) -> Option<Body> {
        self.body
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn current_question(&self) -> usize {
        self.current_question
    }

    pub fn question(&self) -> Option<&'static Question> {
        self.questions.get(self.current_question)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Every question answered correctly
    pub fn is_perfect(&self) -> bool {
        self.finished && self.score as usize == QUESTIONS_PER_QUIZ
    }

    /// Map a click to an answer slot; first matching slot wins
    pub fn handle_pointer(&mut self, pos: Vec2) {
        if self.answered || self.finished {
            return;
        }
        if let Some(slot) = (0..ANSWERS_PER_QUESTION).find(|&i| answer_slot(i).contains(pos)) {
            self.select_answer(slot);
        }
    }

    /// Lock in an answer for the current question
    pub fn select_answer(&mut self, slot: usize) {
        if self.answered || self.finished || slot >= ANSWERS_PER_QUESTION {
            return;
        }
        let Some(question) = self.question() else {
            return;
        };

        self.selected_answer = Some(slot);
        self.answered = true;
        if slot == question.correct {
            self.score += 1;
        }
        log::debug!(
            "Question {} answered with {} (score {})",
            self.current_question + 1,
            slot,
            self.score
        );
    }

    /// Move past an answered question
    pub fn advance(&mut self) {
        if !self.answered || self.finished {
            return;
        }
        self.current_question += 1;
        self.answered = false;
        self.selected_answer = None;
        if self.current_question >= QUESTIONS_PER_QUIZ.min(self.questions.len()) {
            self.finished = true;
        }
    }

    pub fn option_shade(&self, slot: usize) -> OptionShade {
        if !self.answered {
            return OptionShade::Neutral;
        }
        match self.question() {
            Some(q) if slot == q.correct => OptionShade::Correct,
            _ if self.selected_answer == Some(slot) => OptionShade::Wrong,
            _ => OptionShade::Dimmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn click(slot: usize) -> Vec2 {
        answer_slot(slot).center()
    }

    #[test]
    fn test_fresh_quiz() {
        let quiz = Quiz::new(Body::Pamant);
        assert_eq!(quiz.current_question(), 0);
        assert_eq!(quiz.score(), 0);
        assert!(!quiz.is_finished());
        assert_eq!(quiz.questions().len(), QUESTIONS_PER_QUIZ);
    }

    #[test]
    fn test_unknown_name_is_degenerate() {
        let quiz = Quiz::for_name("Pluto");
        assert!(quiz.is_finished());
        assert_eq!(quiz.score(), 0);
        assert!(quiz.questions().is_empty());
        assert!(!quiz.is_perfect());
    }

    #[test]
    fn test_score_counts_once_per_question() {
        let mut quiz = Quiz::new(Body::Marte);
        let correct = quiz.question().unwrap().correct;

        quiz.handle_pointer(click(correct));
        assert_eq!(quiz.score(), 1);

        // Clicks after locking in change nothing
        quiz.handle_pointer(click(correct));
        quiz.handle_pointer(click((correct + 1) % 4));
        assert_eq!(quiz.score(), 1);
        assert_eq!(quiz.selected_answer(), Some(correct));
    }

    #[test]
    fn test_advance_requires_answer() {
        let mut quiz = Quiz::new(Body::Venus);
        quiz.advance();
        assert_eq!(quiz.current_question(), 0);

        quiz.select_answer(2);
        quiz.advance();
        assert_eq!(quiz.current_question(), 1);
        assert!(!quiz.is_answered());
        assert_eq!(quiz.selected_answer(), None);
    }

    #[test]
    fn test_click_outside_slots_is_ignored() {
        let mut quiz = Quiz::new(Body::Saturn);
        quiz.handle_pointer(Vec2::new(10.0, 10.0));
        assert!(!quiz.is_answered());
    }

    #[test]
    fn test_perfect_run() {
        let mut quiz = Quiz::new(Body::Jupiter);
        for _ in 0..QUESTIONS_PER_QUIZ {
            let correct = quiz.question().unwrap().correct;
            quiz.handle_pointer(click(correct));
            quiz.advance();
        }
        assert!(quiz.is_finished());
        assert!(quiz.is_perfect());
        assert_eq!(quiz.score(), 5);
    }

    #[test]
    fn test_shades_after_wrong_answer() {
        let mut quiz = Quiz::new(Body::Uranus);
        assert!((0..4).all(|i| quiz.option_shade(i) == OptionShade::Neutral));

        let correct = quiz.question().unwrap().correct;
        let wrong = (correct + 1) % 4;
        quiz.select_answer(wrong);

        assert_eq!(quiz.option_shade(correct), OptionShade::Correct);
        assert_eq!(quiz.option_shade(wrong), OptionShade::Wrong);
        let others = (0..4).filter(|&i| i != correct && i != wrong);
        for i in others {
            assert_eq!(quiz.option_shade(i), OptionShade::Dimmed);
        }
    }

    #[test]
    fn test_shades_after_right_answer() {
        let mut quiz = Quiz::new(Body::Neptun);
        let correct = quiz.question().unwrap().correct;
        quiz.select_answer(correct);

        assert_eq!(quiz.option_shade(correct), OptionShade::Correct);
        assert!((0..4).filter(|&i| i != correct).all(|i| quiz.option_shade(i) == OptionShade::Dimmed));
    }

    proptest! {
        #[test]
        fn prop_five_cycles_finish(choices in proptest::collection::vec(0usize..4, 5)) {
            let mut quiz = Quiz::new(Body::Mercur);
            for &choice in &choices {
                prop_assert!(!quiz.is_finished());
                quiz.select_answer(choice);
                quiz.advance();
            }
            prop_assert!(quiz.is_finished());
            prop_assert!(quiz.score() <= 5);

            let expected = choices
                .iter()
                .zip(Body::Mercur.questions())
                .filter(|(c, q)| **c == q.correct)
                .count();
            prop_assert_eq!(quiz.score() as usize, expected);
        }
    }
}
