pub mod csv;

pub use csv::write_spreadsheet;

/// Spreadsheet column order, one column per StandardRecord field.
pub const COLUMNS: &[&str] = &[
    "Operating Name",
    "Legal Name",
    "Website",
    "Document Name",
    "Standard Title",
    "Publishing Date",
    "American Standard",
];
