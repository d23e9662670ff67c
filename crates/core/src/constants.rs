use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for return calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Largest scale a `Decimal` can carry
pub const MAX_DECIMAL_SCALE: u32 = 28;

/// Scale factor from a ratio to a percentage
pub const PERCENT_SCALE: Decimal = dec!(100);

/// Currency label used when none is configured
pub const DEFAULT_BASE_CURRENCY: &str = "USD";
