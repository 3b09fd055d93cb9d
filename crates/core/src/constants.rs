/// Decimal precision for intermediate calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Placeholder for references that cannot be resolved
pub const UNKNOWN_PLACEHOLDER: &str = "N/A";

/// Group label for expenses without a category
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";
