//! 替代动作序列化 - 业务能力层
//!
//! 把替代动作列表写成 TS 对象字面量语法，只负责"生成文本"，不关心插入位置

use crate::models::alternative::AlternativeRecord;

/// 插入的字段名
pub const ALTERNATIVES_FIELD: &str = "alternatives";

/// 输出布局
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// 多行布局，`indent` 为记录字段的缩进，`newline` 沿用记录本身的换行符
    Multiline {
        indent: String,
        newline: &'static str,
    },
    /// 单行布局
    Inline,
}

impl Layout {
    /// 数据文件默认的多行布局（字段缩进 4 个空格，LF 换行）
    #[cfg(test)]
    pub fn multiline_default() -> Self {
        Layout::Multiline {
            indent: "    ".to_string(),
            newline: "\n",
        }
    }
}

/// 生成要插入在锚点字段之后的文本（以逗号开头）
///
/// # 参数
/// - `alternatives`: 替代动作列表，按原顺序输出
/// - `layout`: 输出布局
pub fn render_alternatives(alternatives: &[AlternativeRecord], layout: &Layout) -> String {
    match layout {
        Layout::Inline => render_inline(alternatives),
        Layout::Multiline { indent, newline } => render_multiline(alternatives, indent, newline),
    }
}

fn render_inline(alternatives: &[AlternativeRecord]) -> String {
    if alternatives.is_empty() {
        return format!(", {}: []", ALTERNATIVES_FIELD);
    }

    let items: Vec<String> = alternatives
        .iter()
        .map(|alt| {
            let fields: Vec<String> = alt
                .fields()
                .iter()
                .map(|(key, value)| format!("{}: {}", key, quote_ts_string(value)))
                .collect();
            format!("{{ {} }}", fields.join(", "))
        })
        .collect();

    format!(", {}: [ {} ]", ALTERNATIVES_FIELD, items.join(", "))
}

fn render_multiline(alternatives: &[AlternativeRecord], indent: &str, nl: &str) -> String {
    if alternatives.is_empty() {
        return format!(",{}{}{}: []", nl, indent, ALTERNATIVES_FIELD);
    }

    let item_indent = format!("{}  ", indent);
    let field_indent = format!("{}    ", indent);
    let separator = format!(",{}", nl);

    let items: Vec<String> = alternatives
        .iter()
        .map(|alt| {
            let fields: Vec<String> = alt
                .fields()
                .iter()
                .map(|(key, value)| format!("{}{}: {}", field_indent, key, quote_ts_string(value)))
                .collect();
            format!(
                "{}{{{}{}{}{}}}",
                item_indent,
                nl,
                fields.join(separator.as_str()),
                nl,
                item_indent
            )
        })
        .collect();

    format!(
        ",{nl}{indent}{field}: [{nl}{items}{nl}{indent}]",
        nl = nl,
        indent = indent,
        field = ALTERNATIVES_FIELD,
        items = items.join(separator.as_str()),
    )
}

/// 单引号 TS 字符串字面量
pub fn quote_ts_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}
