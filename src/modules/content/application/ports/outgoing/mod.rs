mod content_table;

pub use content_table::ContentTable;
