//! Global constants shared across the clock face and engine modules.

/// The total width of the LED panel in pixels.
pub const PANEL_WIDTH: usize = 64;
/// The total height of the LED panel in pixels.
pub const PANEL_HEIGHT: usize = 32;

// Clockface colors run from min at the edges of the bloom window up to
// max at midday and back down.
pub const DAILY_R_MIN: f32 = 5.0;
pub const DAILY_G_MIN: f32 = 0.0;
pub const DAILY_B_MIN: f32 = 0.0;
pub const DAILY_R_MAX: f32 = 50.0;
pub const DAILY_G_MAX: f32 = 50.0;
pub const DAILY_B_MAX: f32 = 50.0;
pub const DAILY_BRIGHTNESS_MIN: f32 = 1.0;
pub const DAILY_BRIGHTNESS_MAX: f32 = 40.0;

/// Colors rescaled below this peak channel intensity are clamped to a
/// single-channel floor instead of rounding to black.
pub const GLOBAL_BRIGHTNESS_MIN: u8 = 2;

/// Fallbacks for the bloom window when no sunrise/sunset is known yet.
pub const DEFAULT_SUNRISE_HOUR: u32 = 6;
pub const DEFAULT_SUNSET_HOUR: u32 = 19;
/// Offset from the sunrise hour to the start of the color bloom.
pub const BLOOM_START_HOUR_OFFSET: u32 = 0;
/// Offset from the sunset hour to the end of the color bloom.
pub const BLOOM_END_HOUR_OFFSET: u32 = 3;

/// Length of the sunrise/sunset sweep animation.
pub const SUN_ANIMATION_DURATION_SECS: i64 = 600;

/// Number of hourly forecast entries ahead of now to reduce to a single
/// worst-case forecast.
pub const WEATHER_FORECAST_HOURS: usize = 8;

/// Fraction of current intensity neighboring pixels are knocked back to
/// when adjacency masking is on.
pub const MASK_DIM_PERCENT: f32 = 0.5;

// Worker cache intervals. Keep these generous; both upstream APIs are
// rate limited.
pub const WEATHER_CACHE_MINUTES: u64 = 10;
pub const TRAFFIC_CACHE_MINUTES: u64 = 5;

/// Weekday window during which the traffic rows are shown.
pub const DEFAULT_TRAFFIC_START_HOUR: u32 = 7;
pub const DEFAULT_TRAFFIC_END_HOUR: u32 = 10;

/// Minimum seconds between clock-state updates.
pub const DEFAULT_UPDATE_FREQ: f32 = 0.2;
