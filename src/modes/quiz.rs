use glam::Vec2;

use super::{Mode, ModeContext};
use crate::consts::SCREEN_WIDTH;
use crate::layout::answer_slot;
use crate::platform::InputEvent;
use crate::renderer::palette::{self, Color};
use crate::renderer::{Anchor, FontSize, Frame};
use crate::sim::{OptionShade, QUESTIONS_PER_QUIZ, Quiz};

pub const NEXT_PROMPT: &str = "Apasa orice tasta pentru a continua...";

fn shade_color(shade: OptionShade) -> Color {
    match shade {
        OptionShade::Neutral => palette::OPTION_NEUTRAL,
        OptionShade::Correct => palette::GREEN,
        OptionShade::Wrong => palette::RED,
        OptionShade::Dimmed => palette::OPTION_DIMMED,
    }
}

impl Mode for Quiz {
    fn handle_input(&mut self, event: &InputEvent, _ctx: &mut ModeContext<'_>) {
        match event {
            InputEvent::PointerDown(pos) => self.handle_pointer(*pos),
            InputEvent::KeyDown(_) => self.advance(),
            InputEvent::Text(_) => {}
        }
    }

    fn render(&self, frame: &mut Frame<'_>, _ctx: &ModeContext<'_>) {
        let cx = SCREEN_WIDTH / 2.0;

        if let Some(question) = self.question() {
            frame.text(
                format!("Intrebarea {}/{}", self.current_question() + 1, QUESTIONS_PER_QUIZ),
                Vec2::new(cx, 100.0),
                FontSize::Medium,
                palette::YELLOW,
                Anchor::TopCenter,
            );
            frame.text(
                question.prompt,
                Vec2::new(cx, 200.0),
                FontSize::Small,
                palette::WHITE,
                Anchor::TopCenter,
            );

            for (i, answer) in question.answers.iter().enumerate() {
                let slot = answer_slot(i);
                frame.rect(slot, shade_color(self.option_shade(i)));
                frame.rect_outline(slot, 2.0, palette::WHITE);
                frame.text(*answer, slot.center(), FontSize::Small, palette::WHITE, Anchor::Center);
            }

            if self.is_answered() {
                frame.text(
                    NEXT_PROMPT,
                    Vec2::new(cx, 650.0),
                    FontSize::Small,
                    palette::YELLOW,
                    Anchor::TopCenter,
                );
            }
        }

        frame.text(
            format!("Scor: {}/{}", self.score(), QUESTIONS_PER_QUIZ),
            Vec2::new(20.0, 20.0),
            FontSize::Small,
            palette::YELLOW,
            Anchor::TopLeft,
        );
    }

    fn is_finished(&self) -> bool {
        Quiz::is_finished(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::test_support::Fixture;
    use crate::platform::Key;
    use crate::renderer::DrawCmd;
    use crate::sim::Body;

    fn option_fills(fixture: &mut Fixture, quiz: &Quiz) -> Vec<Color> {
        fixture
            .render_commands(quiz)
            .into_iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Rect { color, .. } => Some(color),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_events_route_to_quiz() {
        let mut fixture = Fixture::new();
        let mut quiz = Quiz::new(Body::Pamant);

        quiz.handle_input(&InputEvent::KeyDown(Key::Space), &mut fixture.ctx());
        assert_eq!(quiz.current_question(), 0);

        quiz.handle_input(&InputEvent::PointerDown(answer_slot(0).center()), &mut fixture.ctx());
        assert!(quiz.is_answered());
        assert_eq!(quiz.score(), 1);

        // Typed characters never advance
        quiz.handle_input(&InputEvent::Text(' '), &mut fixture.ctx());
        assert_eq!(quiz.current_question(), 0);

        quiz.handle_input(&InputEvent::KeyDown(Key::Other), &mut fixture.ctx());
        assert_eq!(quiz.current_question(), 1);
    }

    #[test]
    fn test_header_and_score_text() {
        let mut fixture = Fixture::new();
        let quiz = Quiz::new(Body::Jupiter);
        let texts = fixture.render(&quiz);
        assert_eq!(texts[0], "Intrebarea 1/5");
        assert_eq!(texts[1], Body::Jupiter.questions()[0].prompt);
        assert_eq!(texts.last().map(String::as_str), Some("Scor: 0/5"));
        assert!(!texts.contains(&NEXT_PROMPT.to_string()));
    }

    #[test]
    fn test_option_colors_follow_answer() {
        let mut fixture = Fixture::new();
        let mut quiz = Quiz::new(Body::Venus);
        assert_eq!(option_fills(&mut fixture, &quiz), vec![palette::OPTION_NEUTRAL; 4]);

        let correct = quiz.question().unwrap().correct;
        let wrong = (correct + 1) % 4;
        quiz.select_answer(wrong);

        let fills = option_fills(&mut fixture, &quiz);
        assert_eq!(fills[correct], palette::GREEN);
        assert_eq!(fills[wrong], palette::RED);
        assert_eq!(fills.iter().filter(|c| **c == palette::OPTION_DIMMED).count(), 2);
        assert!(fixture.render(&quiz).contains(&NEXT_PROMPT.to_string()));
    }

    #[test]
    fn test_finished_quiz_shows_only_score() {
        let mut fixture = Fixture::new();
        let quiz = Quiz::for_name("Pluto");
        assert!(Mode::is_finished(&quiz));
        assert_eq!(fixture.render(&quiz), vec!["Scor: 0/5".to_string()]);
    }
}
