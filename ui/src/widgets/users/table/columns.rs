//! Column definitions for the users table.

use egui_extras::Column;

/// Fixed column widths for consistent table layout
pub const PHONE_WIDTH: f32 = 110.0;
pub const CITY_WIDTH: f32 = 100.0;
pub const CERT_COUNT_WIDTH: f32 = 90.0;
pub const PROFESSION_WIDTH: f32 = 110.0;
pub const ROW_HEIGHT: f32 = 26.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Column configuration, in display order:
/// Name, Email, Phone, Address, City, certification count, certificate list,
/// profession. Text-heavy columns flex, numeric/short ones are fixed.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::remainder().at_least(100.0), // Name
        Column::remainder().at_least(140.0), // Email
        Column::exact(PHONE_WIDTH),          // Phone
        Column::remainder().at_least(120.0), // Address
        Column::exact(CITY_WIDTH),           // City
        Column::exact(CERT_COUNT_WIDTH),     // Certification count
        Column::remainder().at_least(120.0), // Certificate list
        Column::exact(PROFESSION_WIDTH),     // Profession
    ]
}
