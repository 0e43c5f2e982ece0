use crate::error::{AppResult, ConfigError};
use regex::Regex;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 待修改的练习数据文件
    pub target_file: String,
    /// 替代动作表文件（.toml / .json），为空时使用内置表
    pub alternatives_file: Option<String>,
    /// 锚点字段（记录中最后一个已知字段）
    pub anchor_field: String,
    /// 只预览，不写回文件
    pub dry_run: bool,
    /// 未匹配练习的记录文件
    pub warn_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_file: "src/data/exercises.ts".to_string(),
            alternatives_file: None,
            anchor_field: "defaultRestSeconds".to_string(),
            dry_run: false,
            warn_file: "warn.txt".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            target_file: std::env::var("TARGET_FILE").unwrap_or(default.target_file),
            alternatives_file: std::env::var("ALTERNATIVES_FILE").ok().filter(|v| !v.trim().is_empty()),
            anchor_field: std::env::var("ANCHOR_FIELD").unwrap_or(default.anchor_field),
            dry_run: std::env::var("DRY_RUN").ok().and_then(|v| v.parse().ok()).unwrap_or(default.dry_run),
            warn_file: std::env::var("WARN_FILE").unwrap_or(default.warn_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 校验配置
    ///
    /// 锚点字段会被拼进正则，只允许合法的 JS 标识符
    pub fn validate(&self) -> AppResult<()> {
        let ident = Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$")?;
        if !ident.is_match(&self.anchor_field) {
            return Err(ConfigError::InvalidAnchorField {
                field: self.anchor_field.clone(),
            }
            .into());
        }
        Ok(())
    }
}
