mod bundled_table;

pub use bundled_table::BundledContentTable;
