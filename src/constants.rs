// Board geometry
pub const NUM_SLOTS: usize = 14;
pub const BOTTOM_STORE: usize = 6;
pub const TOP_STORE: usize = 13;
pub const STONES_PER_PIT: u8 = 4;
pub const TOTAL_STONES: i32 = 48;

// Evaluation
pub const GO_AGAIN_BONUS: i32 = 1;
pub const CAPTURE_THREAT_BONUS: i32 = 50;
pub const CAPTURE_THREAT_MIN_STONES: u8 = 2; // mirror pit must hold more than this
pub const WIN_THRESHOLD: i32 = TOTAL_STONES / 2; // a store past this majority decides the game
pub const WIN_BONUS: i32 = 500;

// Search
pub const DEFAULT_TIME_PER_MOVE_MS: u64 = 1000;

// Match settings
pub const MOVE_LIMIT: usize = 1000;
