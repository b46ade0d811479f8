//! System-wide constants for the SplitFair settlement engine.

use rust_decimal::Decimal;

/// Decimal places used when rendering transfer amounts for display.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Tolerated rounding residue on a worklist entry after a full run.
///
/// Internal arithmetic is exact `Decimal`, but a fair share like 100/3
/// cannot be represented exactly, so opposing entries can be left a few
/// units in the 26th decimal place apart. Anything beyond this epsilon
/// indicates real precision loss and is surfaced as a warning.
pub const RESIDUAL_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 6);

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "SplitFair";
