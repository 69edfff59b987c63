pub mod aliases;
pub mod loaders;
pub mod prediction;
pub mod stats;

pub use aliases::AliasTable;
pub use loaders::{load_alias_table, protein_id_from_path, scan_structure_files};
pub use prediction::{Category, CategoryResult, PredictionItem, ProteinResult};
pub use stats::BatchStatistics;
