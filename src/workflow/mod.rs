pub mod patch_flow;

pub use patch_flow::{PatchFlow, PatchOutcome};
