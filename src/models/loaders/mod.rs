pub mod structure_files;
pub mod toml_loader;

pub use structure_files::{protein_id_from_path, scan_structure_files};
pub use toml_loader::{load_alias_table, parse_alias_table};
