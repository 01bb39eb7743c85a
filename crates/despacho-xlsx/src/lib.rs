//! `despacho-xlsx` is the spreadsheet boundary of Despacho: calamine-based
//! ingestion of the source report and rust_xlsxwriter-based export of
//! listados and distribution documents. All writes go through an atomic
//! temp-file-then-rename helper so a mid-export crash leaves no partial
//! file behind.

mod atomic;
pub mod document;
pub mod reader;
pub mod writer;

pub use atomic::write_file_atomic;
pub use document::{build_document, DateTag, ListadoDocument, ListadoSection};
pub use reader::{read_dataset, ReadError};
pub use writer::{
    default_filename, write_distribution_workbook, write_listado_workbook, ExportKind,
};
