//! 批量修补处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次完整的批量写入。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：校验配置、加载替代动作表
//! 2. **整文件读取**：一次性读入目标数据文件
//! 3. **顺序修补**：按表的定义顺序逐个练习调用 `PatchFlow`
//! 4. **失败兜底**：未匹配的练习记录到 warn 文件，继续下一个
//! 5. **整文件写回**：全部处理完后一次性写回（预览模式跳过）
//! 6. **全局统计**：汇总成功/失败数量

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::AlternativesTable;
use crate::services::WarnWriter;
use crate::utils::logging::{log_startup, print_final_stats};
use crate::workflow::{PatchFlow, PatchOutcome};
use anyhow::{Context, Result};
use tokio::fs;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    table: AlternativesTable,
    flow: PatchFlow,
    warn_writer: WarnWriter,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        config.validate().context("配置无效")?;

        log_startup(&config);

        let table = crate::models::load_table(config.alternatives_file.as_deref()).await?;
        Ok(Self::with_table(config, table))
    }

    /// 使用已加载的替代动作表创建应用
    pub fn with_table(config: Config, table: AlternativesTable) -> Self {
        let flow = PatchFlow::new(config.anchor_field.clone());
        let warn_writer = WarnWriter::with_path(config.warn_file.clone());
        Self {
            config,
            table,
            flow,
            warn_writer,
        }
    }

    /// 不写 warn 文件
    pub fn without_warn_file(mut self) -> Self {
        self.warn_writer = WarnWriter::disabled();
        self
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<PatchStats> {
        let target = &self.config.target_file;

        if self.table.is_empty() {
            warn!("⚠️ 替代动作表为空，程序结束");
            return Ok(PatchStats::default());
        }

        info!("\n📁 正在读取: {}", target);
        let content = fs::read_to_string(target)
            .await
            .map_err(|e| AppError::file_read_failed(target, e))?;

        let report = apply_table(&self.flow, &self.table, content)?;

        for exercise_id in &report.missing {
            if let Err(e) = self.warn_writer.write(target, exercise_id) {
                error!("写入警告文件失败: {}", e);
            }
        }

        if self.config.dry_run {
            info!("🔍 预览模式，跳过写回: {}", target);
        } else {
            fs::write(target, &report.document)
                .await
                .map_err(|e| AppError::file_write_failed(target, e))?;
            info!("💾 已写回: {}", target);
        }

        let stats = report.stats;
        print_final_stats(stats.success, stats.failed, stats.total);

        Ok(stats)
    }
}

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PatchStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

/// 一次批量修补的结果
#[derive(Debug, Clone)]
pub struct PatchReport {
    /// 修补后的文档
    pub document: String,
    pub stats: PatchStats,
    /// 未找到记录块的练习ID，按处理顺序
    pub missing: Vec<String>,
}

/// 按表顺序把所有替代动作写入文档
///
/// 每个练习独立修补，失败的练习不影响后续处理
pub fn apply_table(
    flow: &PatchFlow,
    table: &AlternativesTable,
    document: String,
) -> AppResult<PatchReport> {
    let mut report = PatchReport {
        document,
        stats: PatchStats {
            total: table.len(),
            ..Default::default()
        },
        missing: Vec::new(),
    };

    for entry in table.iter() {
        match flow.locate_and_patch(&report.document, &entry.id, &entry.alternatives)? {
            PatchOutcome::Patched(next) => {
                report.document = next;
                report.stats.success += 1;
                info!("✅ 已为 {} 添加 {} 个替代动作", entry.id, entry.alternatives.len());
            }
            PatchOutcome::NotFound => {
                report.stats.failed += 1;
                report.missing.push(entry.id.clone());
                info!("❌ 无法为 {} 添加替代动作", entry.id);
            }
        }
    }

    Ok(report)
}
