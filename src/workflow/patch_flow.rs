//! 单个练习的修补流程 - 流程层
//!
//! 流程顺序：
//! 1. 定位记录块（BlockLocator）
//! 2. 按记录布局生成 alternatives 文本
//! 3. 插入到锚点字段之后、记录 `}` 之前

use tracing::warn;

use crate::error::AppResult;
use crate::models::alternative::AlternativeRecord;
use crate::services::alternatives_writer::render_alternatives;
use crate::services::block_locator::BlockLocator;

/// 修补结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// 已插入，携带新的文档内容
    Patched(String),
    /// 没有找到记录块，文档保持不变
    NotFound,
}

impl PatchOutcome {
    pub fn is_patched(&self) -> bool {
        matches!(self, PatchOutcome::Patched(_))
    }
}

/// 修补流程
///
/// - 每次调用最多修改一个记录块
/// - 已经插入过的记录不再匹配（锚点后不再紧跟 `}`），重复执行只会报告失败
pub struct PatchFlow {
    locator: BlockLocator,
}

impl PatchFlow {
    pub fn new(anchor_field: impl Into<String>) -> Self {
        Self {
            locator: BlockLocator::new(anchor_field),
        }
    }

    /// 给单个练习插入替代动作
    ///
    /// # 参数
    /// - `document`: 当前文档内容
    /// - `exercise_id`: 练习ID
    /// - `alternatives`: 替代动作列表
    ///
    /// # 返回
    /// 找到记录块时返回新文档，否则返回 `NotFound`
    pub fn locate_and_patch(
        &self,
        document: &str,
        exercise_id: &str,
        alternatives: &[AlternativeRecord],
    ) -> AppResult<PatchOutcome> {
        let Some(found) = self.locator.locate(document, exercise_id)? else {
            warn!(
                "⚠️ 找不到练习 {} 的记录块 (锚点字段: {})",
                exercise_id,
                self.locator.anchor_field()
            );
            return Ok(PatchOutcome::NotFound);
        };

        let inserted = render_alternatives(alternatives, &found.layout);

        let mut patched = String::with_capacity(document.len() + inserted.len());
        patched.push_str(&document[..found.insert_at]);
        patched.push_str(&inserted);
        patched.push_str(&document[found.insert_at..]);

        Ok(PatchOutcome::Patched(patched))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"export const exercises: Exercise[] = [
  {
    id: 'dips',
    name: 'Dips',
    equipment: ['parallel_bars'],
    defaultRestSeconds: 90
  },
  {
    id: 'pushups',
    name: 'Push-ups',
    equipment: ['bodyweight'],
    defaultRestSeconds: 60
  }
];
"#;

    fn flow() -> PatchFlow {
        PatchFlow::new("defaultRestSeconds")
    }

    fn patched(outcome: PatchOutcome) -> String {
        match outcome {
            PatchOutcome::Patched(doc) => doc,
            PatchOutcome::NotFound => panic!("应该找到记录块"),
        }
    }

    #[test]
    fn test_end_to_end_inline_record() {
        let doc = r#"{ id: "x", ..., defaultRestSeconds: 30 }"#;
        let alts = vec![AlternativeRecord::new("A", "r", "u", "t")];

        let result = patched(flow().locate_and_patch(doc, "x", &alts).unwrap());
        assert_eq!(
            result,
            r#"{ id: "x", ..., defaultRestSeconds: 30, alternatives: [ { name: 'A', reason: 'r', youtubeUrl: 'u', briefTechnique: 't' } ] }"#
        );
    }

    #[test]
    fn test_patch_multiline_leaves_other_records() {
        let alts = vec![AlternativeRecord::new("Knee Push-ups", "Progresión más fácil", "u", "t")];
        let result = patched(flow().locate_and_patch(DOC, "pushups", &alts).unwrap());

        let expected_block = "  {\n    id: 'pushups',\n    name: 'Push-ups',\n    equipment: ['bodyweight'],\n    defaultRestSeconds: 60,\n    alternatives: [\n      {\n        name: 'Knee Push-ups',\n        reason: 'Progresión más fácil',\n        youtubeUrl: 'u',\n        briefTechnique: 't'\n      }\n    ]\n  }\n];\n";
        assert!(result.ends_with(expected_block));

        // dips 记录逐字节不变
        let dips_end = DOC.find("  },\n").unwrap();
        assert_eq!(&result[..dips_end], &DOC[..dips_end]);
        assert_eq!(result.matches("alternatives:").count(), 1);
    }

    #[test]
    fn test_patch_crlf_record_keeps_line_endings() {
        let doc = "[\r\n  {\r\n    id: 'dips',\r\n    defaultRestSeconds: 30\r\n  }\r\n]\r\n";
        let alts = vec![
            AlternativeRecord::new("A", "r", "u", "t"),
            AlternativeRecord::new("B", "r", "u", "t"),
        ];
        let result = patched(flow().locate_and_patch(doc, "dips", &alts).unwrap());

        // 没有裸 LF
        assert_eq!(result.matches('\n').count(), result.matches("\r\n").count());
        assert!(result.contains("defaultRestSeconds: 30,\r\n    alternatives: [\r\n      {\r\n"));
        assert!(result.ends_with("      }\r\n    ]\r\n  }\r\n]\r\n"));
    }

    #[test]
    fn test_missing_id_returns_not_found() {
        let alts = vec![AlternativeRecord::new("A", "r", "u", "t")];
        let outcome = flow().locate_and_patch(DOC, "squats", &alts).unwrap();
        assert_eq!(outcome, PatchOutcome::NotFound);
        assert!(!outcome.is_patched());
    }

    #[test]
    fn test_second_pass_reports_not_found() {
        let alts = vec![AlternativeRecord::new("A", "r", "u", "t")];
        let once = patched(flow().locate_and_patch(DOC, "dips", &alts).unwrap());

        let again = flow().locate_and_patch(&once, "dips", &alts).unwrap();
        assert_eq!(again, PatchOutcome::NotFound);
        assert_eq!(once.matches("alternatives:").count(), 1);
    }

    #[test]
    fn test_only_first_duplicate_is_patched() {
        let doc = "[{ id: 'x', defaultRestSeconds: 1 }, { id: 'x', defaultRestSeconds: 1 }]";
        let alts = vec![AlternativeRecord::new("A", "r", "u", "t")];
        let result = patched(flow().locate_and_patch(doc, "x", &alts).unwrap());

        assert_eq!(result.matches("alternatives:").count(), 1);
        assert!(result.ends_with("{ id: 'x', defaultRestSeconds: 1 }]"));
    }
}
