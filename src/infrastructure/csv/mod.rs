// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV reading with encoding detection, and writing

mod csv_reader;
mod csv_writer;

pub use csv_reader::{decode_bytes, CsvDocument, CsvTableReader};
pub use csv_writer::CsvTableWriter;
