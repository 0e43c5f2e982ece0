pub mod toml_loader;

pub use toml_loader::{load_builtin_table, load_table, load_table_file};
