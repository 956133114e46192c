pub mod aggregate;
pub mod country;
pub mod fields;
pub mod row;

pub use aggregate::{build_season_records, build_tables, GenderMode};
pub use country::detect_country;
pub use fields::{normalize_field, slug_table_key};
pub use row::{extract_row, split_champion};
