pub mod form;
pub mod options;
pub mod query;
pub mod row;

pub use form::{ParsedForm, ReleaseType, Route, RouteToken};
pub use options::{ReferenceOption, SampleRow, SAMPLE_ROWS_PER_OPTION};
pub use query::Query;
pub use row::RegistryRow;
