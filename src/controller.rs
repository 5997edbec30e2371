//! Game controller: owns the shared state and the active mode
//!
//! Transitions are checked after every dispatched event, so a dodge run
//! that ends during `update` is left on the next input event.

use std::collections::BTreeSet;
use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::modes::{Exploration, Info, Menu, Mode, ModeContext};
use crate::persistence::NoteStore;
use crate::platform::{HeldKeys, InputEvent};
use crate::renderer::{Frame, palette};
use crate::settings::Settings;
use crate::sim::{
    Astronaut, Body, Dodge, Notes, Planet, PlanetKind, QUESTIONS_PER_QUIZ, Quiz, Slideshow, TOTAL_BODIES, default_planets,
};

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Exploration,
    Info,
    Quiz,
    Dodge,
    Slideshow,
    Notes,
}

/// The active mode and its session
enum ActiveMode {
    Menu(Menu),
    Exploration(Exploration),
    Info(Info),
    Quiz(Quiz),
    Dodge(Dodge),
    Slideshow(Slideshow),
    Notes(Notes),
}

impl ActiveMode {
    fn state(&self) -> GameState {
        match self {
            ActiveMode::Menu(_) => GameState::Menu,
            ActiveMode::Exploration(_) => GameState::Exploration,
            ActiveMode::Info(_) => GameState::Info,
            ActiveMode::Quiz(_) => GameState::Quiz,
            ActiveMode::Dodge(_) => GameState::Dodge,
            ActiveMode::Slideshow(_) => GameState::Slideshow,
            ActiveMode::Notes(_) => GameState::Notes,
        }
    }

    fn as_mode(&self) -> &dyn Mode {
        match self {
            ActiveMode::Menu(m) => m,
            ActiveMode::Exploration(m) => m,
            ActiveMode::Info(m) => m,
            ActiveMode::Quiz(m) => m,
            ActiveMode::Dodge(m) => m,
            ActiveMode::Slideshow(m) => m,
            ActiveMode::Notes(m) => m,
        }
    }

    fn as_mode_mut(&mut self) -> &mut dyn Mode {
        match self {
            ActiveMode::Menu(m) => m,
            ActiveMode::Exploration(m) => m,
            ActiveMode::Info(m) => m,
            ActiveMode::Quiz(m) => m,
            ActiveMode::Dodge(m) => m,
            ActiveMode::Slideshow(m) => m,
            ActiveMode::Notes(m) => m,
        }
    }
}

pub struct GameController {
    settings: Settings,
    store: Rc<dyn NoteStore>,
    rng: Pcg32,
    astronaut: Astronaut,
    planets: Vec<Planet>,
    visited: BTreeSet<Body>,
    /// Index into `planets`
    current: Option<usize>,
    mode: ActiveMode,
}

impl GameController {
    pub fn new(settings: Settings, store: Rc<dyn NoteStore>, seed: u64) -> Self {
        Self {
            settings,
            store,
            rng: Pcg32::seed_from_u64(seed),
            astronaut: Astronaut::default(),
            planets: default_planets(),
            visited: BTreeSet::new(),
            current: None,
            mode: ActiveMode::Menu(Menu::new()),
        }
    }

    pub fn state(&self) -> GameState {
        self.mode.state()
    }

    pub fn visited(&self) -> &BTreeSet<Body> {
        &self.visited
    }

    pub fn current_planet(&self) -> Option<&Planet> {
        self.current.and_then(|i| self.planets.get(i))
    }

    pub fn astronaut(&self) -> &Astronaut {
        &self.astronaut
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// One frame: every event, then one update, then one render
    pub fn tick(&mut self, events: &[InputEvent], held: HeldKeys, frame: &mut Frame<'_>) {
        for event in events {
            self.dispatch(event);
        }
        self.update(held);
        self.render(frame);
    }

    /// Hand one event to the active mode, then switch modes if it is done
    pub fn dispatch(&mut self, event: &InputEvent) {
        let mut ctx = ModeContext {
            astronaut: &mut self.astronaut,
            planets: &self.planets,
            visited: &self.visited,
            current: self.current.and_then(|i| self.planets.get(i)),
        };
        self.mode.as_mode_mut().handle_input(event, &mut ctx);
        self.transition();
    }

    pub fn update(&mut self, held: HeldKeys) {
        let mut ctx = ModeContext {
            astronaut: &mut self.astronaut,
            planets: &self.planets,
            visited: &self.visited,
            current: self.current.and_then(|i| self.planets.get(i)),
        };
        self.mode.as_mode_mut().update(held, &mut ctx);
    }

    pub fn render(&mut self, frame: &mut Frame<'_>) {
        frame.clear(palette::SPACE_BLUE);
        let ctx = ModeContext {
            astronaut: &mut self.astronaut,
            planets: &self.planets,
            visited: &self.visited,
            current: self.current.and_then(|i| self.planets.get(i)),
        };
        self.mode.as_mode().render(frame, &ctx);
    }

    fn transition(&mut self) {
        if !self.mode.as_mode().is_finished() {
            return;
        }
        let from = self.mode.state();

        let next = match &self.mode {
            ActiveMode::Menu(_) => ActiveMode::Exploration(Exploration::new()),
            ActiveMode::Exploration(exploration) => {
                let Some(index) = exploration.selected() else {
                    return;
                };
                self.current = Some(index);
                self.enter_planet(index)
            }
            ActiveMode::Info(_) => match self.current.and_then(|i| self.planets.get(i)) {
                Some(planet) => ActiveMode::Quiz(match planet.as_body() {
                    Some(body) => Quiz::new(body),
                    None => Quiz::for_name(planet.name),
                }),
                None => ActiveMode::Exploration(Exploration::new()),
            },
            ActiveMode::Quiz(quiz) if quiz.is_perfect() => ActiveMode::Dodge(Dodge::new(self.rng.random())),
            ActiveMode::Quiz(quiz) => {
                log::info!("Quiz ended with {} of {}", quiz.score(), QUESTIONS_PER_QUIZ);
                self.current = None;
                ActiveMode::Exploration(Exploration::new())
            }
            ActiveMode::Dodge(dodge) => {
                // A finished run counts, won or lost
                let body = self.current.and_then(|i| self.planets.get(i)).and_then(Planet::as_body);
                if let Some(body) = body {
                    self.visited.insert(body);
                    log::info!(
                        "{} visited after a {} run ({} of {})",
                        body.name(),
                        if dodge.won { "winning" } else { "losing" },
                        self.visited.len(),
                        TOTAL_BODIES
                    );
                }
                self.current = None;
                ActiveMode::Exploration(Exploration::new())
            }
            ActiveMode::Slideshow(_) | ActiveMode::Notes(_) => {
                self.current = None;
                ActiveMode::Exploration(Exploration::new())
            }
        };

        self.mode = next;
        log::info!("{:?} -> {:?}", from, self.mode.state());
    }

    fn enter_planet(&self, index: usize) -> ActiveMode {
        let Some(planet) = self.planets.get(index) else {
            return ActiveMode::Exploration(Exploration::new());
        };
        match planet.kind {
            PlanetKind::SlideshowHub => ActiveMode::Slideshow(Slideshow::load(&self.settings.slide_paths)),
            PlanetKind::NotesHub => ActiveMode::Notes(Notes::open(Rc::clone(&self.store))),
            PlanetKind::Body(_) => ActiveMode::Info(Info::new()),
        }
    }
}
