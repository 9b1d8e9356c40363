// Board geometry
pub const GOMOKU_BOARD_SIZE: usize = 15;
pub const GO_BOARD_SIZE: usize = 19;

// Gomoku
pub const WIN_LENGTH: u32 = 5;

// Go
pub const PASSES_TO_END: u8 = 2;
pub const EYES_TO_LIVE: usize = 2;

// Default game settings
pub const DEFAULT_KOMI: f64 = 6.5;
pub const DEFAULT_MAIN_TIME_SECONDS: u32 = 30 * 60;
pub const DEFAULT_BYO_YOMI_SECONDS: u32 = 30;
pub const DEFAULT_BYO_YOMI_PERIODS: u32 = 3;

// Config
pub const SETTINGS_DIR_NAME: &str = ".stoneplay";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
