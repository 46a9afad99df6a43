use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const PANEL_WIDTH: f32 = 360.0;
pub const LEFT_MARGIN: f32 = PANEL_WIDTH + 110.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 110.0;
pub const BOTTOM_MARGIN: f32 = 90.0;

pub const TITLE_Y: f32 = 46.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

pub const DEFAULT_SPEED_MPS: f32 = 20.0;
pub const DEFAULT_ANGLE_DEG: f32 = 45.0;
pub const DEFAULT_GRAVITY_TEXT: &str = "9.8";
pub const SPEED_RANGE_MPS: std::ops::Range<f32> = 1.0..100.0;
pub const ANGLE_RANGE_DEG: std::ops::Range<f32> = 0.0..90.0;

pub const CURVE_COLOR: Color = Color::new(0.31, 0.27, 0.90, 1.0);
pub const CURVE_FILL_COLOR: Color = Color::new(0.31, 0.27, 0.90, 0.10);
pub const MARKER_COLOR: Color = Color::new(0.78, 0.12, 0.12, 1.0);
pub const MARKER_RADIUS: f32 = 7.0;
