pub use export::{export_file, export_xlsx, EXPORT_FILE_NAME};
pub use import::{apply_import, import_bytes, import_file, ImportedRow};

mod export;
mod import;
