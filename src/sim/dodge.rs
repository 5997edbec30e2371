//! Asteroid dodge challenge
//!
//! Survive `DODGE_DURATION` ticks moving left and right. The first hit ends
//! the run; after that `update` does nothing.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{FPS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::platform::HeldKeys;

/// Ticks to survive (30 seconds at 60 Hz)
pub const DODGE_DURATION: u32 = 1800;
pub const PLAYER_SIZE: f32 = 25.0;
pub const PLAYER_SPEED: f32 = 7.0;
/// Ticks between asteroid spawns
pub const SPAWN_INTERVAL: u32 = 30;
/// Spawn columns stay this far from the side edges
pub const SPAWN_MARGIN: i32 = 20;
pub const SPAWN_Y: f32 = -20.0;
pub const ASTEROID_SIZE_RANGE: (i32, i32) = (15, 35);
pub const ASTEROID_SPEED_RANGE: (f32, f32) = (3.0, 7.0);
/// Asteroids below `SCREEN_HEIGHT + DESPAWN_MARGIN` are dropped
pub const DESPAWN_MARGIN: f32 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

#[derive(Debug, Clone)]
pub struct Dodge {
    pub player: Vec2,
    pub player_size: f32,
    pub speed: f32,
    pub asteroids: Vec<Asteroid>,
    pub spawn_timer: u32,
    pub spawn_rate: u32,
    pub time_survived: u32,
    pub duration: u32,
    pub finished: bool,
    pub won: bool,
    rng: Pcg32,
}

impl Dodge {
    pub fn new(seed: u64) -> Self {
        Self {
            player: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT - 100.0),
            player_size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
            asteroids: Vec::new(),
            spawn_timer: 0,
            spawn_rate: SPAWN_INTERVAL,
            time_survived: 0,
            duration: DODGE_DURATION,
            finished: false,
            won: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Whole seconds left on the clock
    pub fn seconds_left(&self) -> u32 {
        self.duration.saturating_sub(self.time_survived) / FPS
    }

    /// Advance one tick
    pub fn update(&mut self, held: HeldKeys) {
        if self.finished {
            return;
        }

        if held.left {
            self.player.x -= self.speed;
        }
        if held.right {
            self.player.x += self.speed;
        }
        self.player.x = self.player.x.clamp(self.player_size, SCREEN_WIDTH - self.player_size);

        self.spawn_timer += 1;
        if self.spawn_timer >= self.spawn_rate {
            self.spawn_timer = 0;
            self.spawn_asteroid();
        }

        // Asteroids after the one that hits are left where they are
        let mut hit = false;
        for asteroid in &mut self.asteroids {
            asteroid.pos.y += asteroid.speed;
            if asteroid.pos.distance(self.player) < asteroid.size + self.player_size {
                hit = true;
                break;
            }
        }
        if hit {
            self.finished = true;
            self.won = false;
            log::info!("Dodge lost after {} ticks", self.time_survived);
            return;
        }

        self.asteroids.retain(|a| a.pos.y <= SCREEN_HEIGHT + DESPAWN_MARGIN);

        self.time_survived += 1;
        if self.time_survived >= self.duration {
            self.finished = true;
            self.won = true;
            log::info!("Dodge won");
        }
    }

    fn spawn_asteroid(&mut self) {
        let x = self
            .rng
            .random_range(SPAWN_MARGIN..=SCREEN_WIDTH as i32 - SPAWN_MARGIN);
        let size = self
            .rng
            .random_range(ASTEROID_SIZE_RANGE.0..=ASTEROID_SIZE_RANGE.1);
        let speed = self
            .rng
            .random_range(ASTEROID_SPEED_RANGE.0..ASTEROID_SPEED_RANGE.1);
        self.asteroids.push(Asteroid {
            pos: Vec2::new(x as f32, SPAWN_Y),
            size: size as f32,
            speed,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn asteroid_above_player(dodge: &Dodge, gap: f32) -> Asteroid {
        Asteroid {
            pos: Vec2::new(dodge.player.x, dodge.player.y - gap),
            size: 20.0,
            speed: 5.0,
        }
    }

    #[test]
    fn test_initial_state() {
        let dodge = Dodge::new(1);
        assert_eq!(dodge.player, Vec2::new(512.0, 668.0));
        assert!(dodge.asteroids.is_empty());
        assert!(!dodge.finished);
        assert_eq!(dodge.seconds_left(), 30);
    }

    #[test]
    fn test_spawns_on_interval() {
        let mut dodge = Dodge::new(42);
        for _ in 0..SPAWN_INTERVAL - 1 {
            dodge.update(HeldKeys::default());
        }
        assert!(dodge.asteroids.is_empty());

        dodge.update(HeldKeys::default());
        assert_eq!(dodge.asteroids.len(), 1);

        let asteroid = &dodge.asteroids[0];
        assert!(asteroid.pos.x >= 20.0 && asteroid.pos.x <= 1004.0);
        assert!(asteroid.size >= 15.0 && asteroid.size <= 35.0);
        assert!(asteroid.speed >= 3.0 && asteroid.speed < 7.0);
        // Spawned and moved in the same tick
        assert_eq!(asteroid.pos.y, SPAWN_Y + asteroid.speed);
    }

    #[test]
    fn test_same_seed_same_asteroids() {
        let mut a = Dodge::new(7);
        let mut b = Dodge::new(7);
        for _ in 0..200 {
            a.update(HeldKeys::default());
            b.update(HeldKeys::default());
        }
        assert_eq!(a.asteroids, b.asteroids);
    }

    #[test]
    fn test_player_clamped() {
        let mut dodge = Dodge::new(3);
        let held = HeldKeys {
            left: true,
            ..Default::default()
        };
        for _ in 0..100 {
            dodge.update(held);
        }
        assert_eq!(dodge.player.x, PLAYER_SIZE);
    }

    #[test]
    fn test_collision_ends_run() {
        let mut dodge = Dodge::new(5);
        // After moving 5 px the gap is 40, inside 20 + 25
        let asteroid = asteroid_above_player(&dodge, 45.0);
        dodge.asteroids.push(asteroid);

        dodge.update(HeldKeys::default());
        assert!(dodge.finished);
        assert!(!dodge.won);
        assert_eq!(dodge.time_survived, 0);
    }

    #[test]
    fn test_finished_is_terminal() {
        let mut dodge = Dodge::new(5);
        dodge.asteroids.push(asteroid_above_player(&dodge, 45.0));
        dodge.update(HeldKeys::default());
        assert!(dodge.finished);

        let snapshot = dodge.asteroids.clone();
        let player = dodge.player;
        for _ in 0..SPAWN_INTERVAL * 3 {
            dodge.update(HeldKeys {
                right: true,
                ..Default::default()
            });
        }
        assert!(!dodge.won);
        assert_eq!(dodge.asteroids, snapshot);
        assert_eq!(dodge.player, player);
    }

    #[test]
    fn test_offscreen_asteroids_dropped() {
        let mut dodge = Dodge::new(9);
        dodge.asteroids.push(Asteroid {
            pos: Vec2::new(30.0, SCREEN_HEIGHT + DESPAWN_MARGIN - 1.0),
            size: 15.0,
            speed: 3.0,
        });
        dodge.update(HeldKeys::default());
        assert!(dodge.asteroids.is_empty());
    }

    #[test]
    fn test_last_tick_wins() {
        let mut dodge = Dodge::new(11);
        dodge.time_survived = DODGE_DURATION - 1;
        dodge.update(HeldKeys::default());
        assert!(dodge.finished);
        assert!(dodge.won);
    }

    proptest! {
        #[test]
        fn prop_hit_is_detected_on_that_tick(gap in 0.0f32..40.0, dx in -10.0f32..10.0) {
            let mut dodge = Dodge::new(13);
            let asteroid = Asteroid {
                pos: Vec2::new(dodge.player.x + dx, dodge.player.y - gap - 5.0),
                size: 20.0,
                speed: 5.0,
            };
            dodge.asteroids.push(asteroid);
            dodge.update(HeldKeys::default());
            prop_assert!(dodge.finished);
            prop_assert!(!dodge.won);
        }

        #[test]
        fn prop_no_spawn_after_finish(seed in any::<u64>(), extra in 1u32..200) {
            let mut dodge = Dodge::new(seed);
            dodge.finished = true;
            for _ in 0..extra {
                dodge.update(HeldKeys::default());
            }
            prop_assert!(dodge.asteroids.is_empty());
            prop_assert!(!dodge.won);
        }
    }
}
