pub const WINDOW_WIDTH: i32 = 1280;           // Initial window width
pub const WINDOW_HEIGHT: i32 = 720;           // Initial window height
pub const FPS: u32 = 60;                      // Display refresh rate the loop is paced to

pub const DEFAULT_BASE_IMAGE_DIR: &str = "assets/images/rgb_frames/";
pub const DEFAULT_OVERLAY_IMAGE_DIR: &str = "assets/images/overlay_frames/";
pub const DEFAULT_IMAGE_FORMAT: &str = "webp";
pub const DEFAULT_FRAME_PADDING: usize = 6;
pub const DEFAULT_TOTAL_FRAMES: usize = 100;
pub const DEFAULT_MIN_FRAME: u32 = 1;
pub const DEFAULT_FRAME_DELAY_MS: u32 = 50;   // Target delay between logical frame advances
pub const DEFAULT_FETCH_WORKERS: usize = 8;

pub const PROGRESS_REPORT_INTERVAL: usize = 10; // Report progress every N completions
pub const MAX_UPLOADS_PER_REFRESH: usize = 4;  // Texture uploads per window refresh
pub const FIRST_PAIR_COMPLETIONS: usize = 2;    // One base + one overlay

pub const LABEL_HIDE_TRACKS: &str = "Hide Tracks";
pub const LABEL_SHOW_TRACKS: &str = "Show Tracks";
pub const STATUS_LOADING: &str = "Loading frames...";

pub const FIT_RATIO: f32 = 0.9;               // Fraction of the window a frame may occupy
pub const BUTTON_WIDTH: f32 = 160.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const BUTTON_MARGIN: f32 = 16.0;
pub const FONT_SIZE: i32 = 20;
