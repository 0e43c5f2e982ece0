pub mod alternative;
pub mod loaders;

pub use alternative::{AlternativeRecord, AlternativesTable, ExerciseAlternatives};
pub use loaders::{load_builtin_table, load_table, load_table_file};
