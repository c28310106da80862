pub mod ingest;
pub mod statement;

pub use ingest::load_source_file;
pub use statement::{package_statement, STATEMENT_FILE_NAME};
