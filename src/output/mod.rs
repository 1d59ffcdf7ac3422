//! CSV output
//!
//! Flattens the fetched records into a single CSV file: one column per
//! distinct field name seen anywhere in the result set, one row per record.

mod csv_writer;

pub use csv_writer::write_csv;

#[cfg(test)]
mod tests;
