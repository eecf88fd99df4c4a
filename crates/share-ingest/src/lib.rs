pub mod discovery;
pub mod error;
pub mod terminology;
pub mod workbook;

pub use discovery::{collect_templates, is_template_file, list_template_files};
pub use error::{IngestError, Result};
pub use terminology::{read_terminology, terms_from_sheets};
pub use workbook::{cell_from_data, read_workbook, sheet_from_range};
