//! 警告写入服务 - 业务能力层
//!
//! 只负责"把未匹配的练习写进 warn 文件"，不关心流程

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 警告写入服务
///
/// 每个未找到记录块的练习ID追加一行，带时间戳
pub struct WarnWriter {
    warn_file_path: Option<String>,
}

impl WarnWriter {
    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: Some(path.into()),
        }
    }

    /// 不写文件（只保留控制台日志）
    pub fn disabled() -> Self {
        Self {
            warn_file_path: None,
        }
    }

    /// 写入警告信息
    ///
    /// # 参数
    /// - `target_file`: 被修改的数据文件
    /// - `exercise_id`: 未匹配的练习ID
    pub fn write(&self, target_file: &str, exercise_id: &str) -> Result<()> {
        let Some(path) = &self.warn_file_path else {
            return Ok(());
        };

        debug!("写入警告: 文件 {} | 练习 {}", target_file, exercise_id);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("无法打开警告文件: {}", path))?;

        let warn_msg = format!(
            "{} | 文件 {} | 未找到练习: {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            target_file,
            exercise_id
        );

        file.write_all(warn_msg.as_bytes())
            .with_context(|| format!("无法写入警告文件: {}", path))?;

        Ok(())
    }
}
