//! Registry sheet ingestion.
//!
//! Reads a CSV export of the reference-product registry into
//! [`rxref_model::RegistryRow`] values: locates the header row, validates
//! the expected columns, forward-fills merged cells and drops rows without
//! a product entry. Classification of the loaded rows is the job of
//! `rxref-core`.

pub mod csv_table;
pub mod error;
pub mod loader;

pub use csv_table::{read_csv_table, CsvTable};
pub use error::{IngestError, Result};
pub use loader::load_registry;
