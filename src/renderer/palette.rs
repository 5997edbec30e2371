//! Colors for game elements (RGBA, 0-1)

pub type Color = [f32; 4];

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

pub const WHITE: Color = rgb(255, 255, 255);
pub const BLACK: Color = rgb(0, 0, 0);
pub const SPACE_BLUE: Color = rgb(10, 10, 40);
pub const YELLOW: Color = rgb(255, 255, 0);
pub const GREEN: Color = rgb(0, 255, 0);
pub const RED: Color = rgb(255, 0, 0);
pub const PINK: Color = rgb(255, 105, 180);
pub const LIGHT_BLUE: Color = rgb(135, 206, 250);

// Planets
pub const MERCUR: Color = rgb(169, 169, 169);
pub const VENUS: Color = rgb(255, 198, 73);
pub const PAMANT: Color = rgb(100, 149, 237);
pub const MARTE: Color = rgb(188, 39, 50);
pub const JUPITER: Color = rgb(201, 138, 87);
pub const SATURN: Color = rgb(238, 217, 130);
pub const URANUS: Color = rgb(79, 208, 231);
pub const NEPTUN: Color = rgb(62, 84, 232);

// Quiz options
pub const OPTION_NEUTRAL: Color = rgb(50, 50, 150);
pub const OPTION_DIMMED: Color = rgb(100, 100, 100);

// Dodge
pub const ASTEROID: Color = rgb(139, 69, 19);
pub const ASTEROID_RIM: Color = rgb(101, 67, 33);

// Notes
pub const PANEL: Color = rgb(30, 30, 60);
pub const INPUT_ACTIVE: Color = rgb(50, 50, 100);
pub const HINT: Color = rgb(100, 100, 100);
pub const MUTED: Color = rgb(150, 150, 150);
pub const DISABLED_TEXT: Color = rgb(50, 50, 50);
