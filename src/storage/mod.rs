pub mod csv_table;

pub use csv_table::{ProductTable, write_labels};
