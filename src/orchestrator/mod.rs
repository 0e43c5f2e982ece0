//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理整张替代动作表)
//!     ↓
//! workflow::PatchFlow (处理单个练习)
//!     ↓
//! services (能力层：locate / render / warn)
//! ```
//!
//! 编排层只做调度和统计，不做具体的文本匹配

pub mod batch_processor;

// 重新导出主要类型
pub use batch_processor::{apply_table, App, PatchReport, PatchStats};
