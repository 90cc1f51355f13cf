// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Gallery Grid Defaults
// ==========================================================================

/// Default number of cards per gallery row.
pub const DEFAULT_GRID_COLUMNS: u16 = 3;

/// Minimum allowed cards per gallery row.
pub const MIN_GRID_COLUMNS: u16 = 1;

/// Maximum allowed cards per gallery row.
pub const MAX_GRID_COLUMNS: u16 = 6;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_GRID_COLUMNS > 0);
    assert!(MAX_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);
};
