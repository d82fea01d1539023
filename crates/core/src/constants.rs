/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Market used when no valid market signal is present
pub const DEFAULT_MARKET_CODE: &str = "lb";

/// Suffix appended to price columns holding Australian prices
pub const AU_COLUMN_SUFFIX: &str = "_au";

/// Option id of the implicit first stone
pub const DIAMOND_STONE_ID: &str = "diamond";

/// Image extension for pre-rendered product photos
pub const VARIANT_IMAGE_EXTENSION: &str = "webp";
