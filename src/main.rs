//! Sa invatam planetele entry point
//!
//! Opens the window and runs one game tick per displayed frame. Closing the window
//! is the only way out.

use std::rc::Rc;

use macroquad::window::{Conf, next_frame};

use planete::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use planete::persistence::JsonFileStore;
use planete::platform::native;
use planete::renderer::Frame;
use planete::renderer::backend::Backend;
use planete::{GameController, Settings};

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Sa invatam planetele starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Game initialized with seed: {}", seed);

    let store = Rc::new(JsonFileStore::new(settings.notes_path.clone()));
    log::info!("Notes file: {}", store.path().display());

    let mut backend = Backend::new(&settings).await;
    let mut game = GameController::new(settings, store, seed);

    loop {
        let events = native::poll_events();
        let held = native::held_keys();

        let commands = {
            let mut frame = Frame::new(&backend.text);
            game.tick(&events, held, &mut frame);
            frame.into_commands()
        };
        backend.present(&commands);

        next_frame().await;
    }
}
