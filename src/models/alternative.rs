use crate::error::TableError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 替代动作
///
/// 主动作无法完成时（缺器械、难度不合适）提供的替换动作
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeRecord {
    /// 显示名称
    pub name: String,
    /// 替换原因
    pub reason: String,
    /// 教学视频链接
    pub youtube_url: String,
    /// 简要技术要点
    pub brief_technique: String,
}

impl AlternativeRecord {
    pub fn new(
        name: impl Into<String>,
        reason: impl Into<String>,
        youtube_url: impl Into<String>,
        brief_technique: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
            youtube_url: youtube_url.into(),
            brief_technique: brief_technique.into(),
        }
    }

    /// 按输出顺序排列的字段（字段名, 值）
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", self.name.as_str()),
            ("reason", self.reason.as_str()),
            ("youtubeUrl", self.youtube_url.as_str()),
            ("briefTechnique", self.brief_technique.as_str()),
        ]
    }
}

/// 单个练习的替代动作列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseAlternatives {
    /// 练习ID（对应数据文件中的 `id` 字段）
    pub id: String,
    #[serde(default)]
    pub alternatives: Vec<AlternativeRecord>,
}

/// 替代动作表
///
/// 练习ID → 替代动作列表，保持定义顺序，加载后只读
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativesTable {
    #[serde(rename = "exercise", default)]
    entries: Vec<ExerciseAlternatives>,
}

impl AlternativesTable {
    /// 从条目列表构建，校验ID非空且唯一
    pub fn new(entries: Vec<ExerciseAlternatives>) -> Result<Self, TableError> {
        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    /// 校验ID非空且唯一
    pub fn validate(&self) -> Result<(), TableError> {
        let mut seen = HashSet::new();
        for (idx, entry) in self.entries.iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(TableError::EmptyId { position: idx + 1 });
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(TableError::DuplicateId {
                    id: entry.id.clone(),
                });
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&[AlternativeRecord]> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.alternatives.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExerciseAlternatives> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
