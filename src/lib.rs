//! # Add Alternatives
//!
//! 给练习数据文件（`src/data/exercises.ts`）中的指定练习批量写入 `alternatives` 字段
//!
//! 用正则定位记录块再拼接文本，不解析 TS，保留文件原有格式。
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 替代动作 / 替代动作表，以及 TOML、JSON、内置表的加载
//!
//! ### ② 业务能力层（Services）
//! - `BlockLocator` - 按练习ID定位记录块
//! - `alternatives_writer` - 生成 TS 对象字面量文本
//! - `WarnWriter` - 写 warn.txt 能力
//!
//! ### ③ 流程层（Workflow）
//! - `PatchFlow` - 单个练习的定位 → 生成 → 插入
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 读文件、按表顺序修补、统计、写回

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AlternativeRecord, AlternativesTable, ExerciseAlternatives};
pub use orchestrator::{apply_table, App, PatchReport, PatchStats};
pub use workflow::{PatchFlow, PatchOutcome};
