pub mod csv;
pub mod json;
pub mod writer;

pub use csv::to_csv;
pub use json::to_json;
pub use writer::ArtifactWriter;
