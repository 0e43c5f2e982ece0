//! 记录定位服务 - 业务能力层
//!
//! 在数据文件文本中按练习ID找到对应的记录块，返回插入位置

use crate::error::AppResult;
use crate::services::alternatives_writer::Layout;
use crate::utils::logging::truncate_text;
use regex::Regex;
use std::ops::Range;
use tracing::debug;

/// 定位结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMatch {
    /// 整个记录块的范围（从 `{` 到 `}`）
    pub block: Range<usize>,
    /// 插入位置：锚点字段值之后
    pub insert_at: usize,
    /// 根据记录本身推断的输出布局
    pub layout: Layout,
}

/// 记录定位服务
///
/// 匹配规则：
/// - `{` 后紧跟 `id: '<id>'`（单双引号均可）
/// - 非贪婪地跨行匹配到锚点字段 `<anchor>: <数字>`
/// - 锚点之后只能是空白和记录的 `}`
/// - 记录体允许一层嵌套的 `{...}`，但不会越过记录自身的 `}`
pub struct BlockLocator {
    anchor_field: String,
}

impl BlockLocator {
    pub fn new(anchor_field: impl Into<String>) -> Self {
        Self {
            anchor_field: anchor_field.into(),
        }
    }

    pub fn anchor_field(&self) -> &str {
        &self.anchor_field
    }

    /// 构建某个练习ID的匹配正则
    pub fn pattern_for(&self, exercise_id: &str) -> AppResult<Regex> {
        let pattern = format!(
            r#"\{{\s*id\s*:\s*['"]{id}['"]\s*,(?:[^{{}}]|\{{[^{{}}]*\}})*?(?P<anchor>{anchor}\s*:\s*\d+)\s*\}}"#,
            id = regex::escape(exercise_id),
            anchor = regex::escape(&self.anchor_field),
        );
        Ok(Regex::new(&pattern)?)
    }

    /// 查找第一个匹配的记录块
    ///
    /// # 返回
    /// 找不到时返回 `None`；同一ID出现多次时只返回第一个
    pub fn locate(&self, document: &str, exercise_id: &str) -> AppResult<Option<BlockMatch>> {
        let re = self.pattern_for(exercise_id)?;

        let Some(caps) = re.captures(document) else {
            debug!("未匹配到练习 {} 的记录块", exercise_id);
            return Ok(None);
        };

        let (Some(whole), Some(anchor)) = (caps.get(0), caps.name("anchor")) else {
            return Ok(None);
        };

        let block_text = whole.as_str();
        let layout = if block_text.contains('\n') {
            let head = &document[whole.start()..anchor.start()];
            Layout::Multiline {
                indent: line_indent(head).unwrap_or("    ").to_string(),
                newline: if block_text.contains("\r\n") { "\r\n" } else { "\n" },
            }
        } else {
            Layout::Inline
        };

        debug!(
            "练习 {} 的记录块位于 {}..{}: {}",
            exercise_id,
            whole.start(),
            whole.end(),
            truncate_text(block_text, 60)
        );

        Ok(Some(BlockMatch {
            block: whole.range(),
            insert_at: anchor.end(),
            layout,
        }))
    }
}

/// 取最后一行的前导空白（该行在锚点之前只有空白时才有效）
fn line_indent(head: &str) -> Option<&str> {
    let pos = head.rfind('\n')?;
    let indent = &head[pos + 1..];
    indent
        .chars()
        .all(|c| c == ' ' || c == '\t')
        .then_some(indent)
}
