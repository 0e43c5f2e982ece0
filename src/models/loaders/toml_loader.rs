use crate::error::{AppError, TableError};
use crate::models::alternative::AlternativesTable;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 内置替代动作表
const BUILTIN_TABLE: &str = include_str!("../../../data/alternatives.toml");

/// 加载内置替代动作表
pub fn load_builtin_table() -> Result<AlternativesTable> {
    parse_toml_table(BUILTIN_TABLE, "<builtin>").context("内置替代动作表无效")
}

/// 从文件加载替代动作表，按扩展名选择 TOML 或 JSON
pub async fn load_table_file(table_file_path: &Path) -> Result<AlternativesTable> {
    let path_display = table_file_path.display().to_string();

    let content = fs::read_to_string(table_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_display, e))?;

    let table = match table_file_path.extension().and_then(|s| s.to_str()) {
        Some("toml") => parse_toml_table(&content, &path_display)?,
        Some("json") => parse_json_table(&content, &path_display)?,
        _ => {
            return Err(AppError::from(TableError::UnsupportedFormat { path: path_display }).into());
        }
    };

    tracing::info!("成功加载 {} 个练习的替代动作: {}", table.len(), path_display);
    Ok(table)
}

/// 加载替代动作表：有路径用文件，否则用内置表
pub async fn load_table(table_file: Option<&str>) -> Result<AlternativesTable> {
    match table_file {
        Some(path) => load_table_file(Path::new(path)).await,
        None => {
            let table = load_builtin_table()?;
            tracing::info!("使用内置替代动作表 ({} 个练习)", table.len());
            Ok(table)
        }
    }
}

fn parse_toml_table(content: &str, path: &str) -> Result<AlternativesTable, AppError> {
    let table: AlternativesTable =
        toml::from_str(content).map_err(|source| TableError::TomlParseFailed {
            path: path.to_string(),
            source,
        })?;
    table.validate()?;
    Ok(table)
}

fn parse_json_table(content: &str, path: &str) -> Result<AlternativesTable, AppError> {
    let table: AlternativesTable =
        serde_json::from_str(content).map_err(|source| TableError::JsonParseFailed {
            path: path.to_string(),
            source,
        })?;
    table.validate()?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let table = load_builtin_table().unwrap();
        let ids: Vec<&str> = table.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "dips",
                "pushups",
                "decline-pushups",
                "close-grip-pushups",
                "deficit-pushups",
                "judo-pushup",
                "front-raises",
                "db-shoulder-press",
                "db-upright-row",
                "arnold-press",
            ]
        );

        let pushups = table.get("pushups").unwrap();
        assert_eq!(pushups.len(), 3);
        assert_eq!(pushups[2].name, "Archer Push-ups");
        assert_eq!(pushups[1].reason, "Progresión más fácil");
        assert!(table
            .iter()
            .flat_map(|e| e.alternatives.iter())
            .all(|a| a.youtube_url.starts_with("https://www.youtube.com/watch?v=")));
    }

    #[test]
    fn test_parse_toml_rejects_duplicates() {
        let content = r#"
[[exercise]]
id = "dips"

[[exercise]]
id = "dips"
"#;
        let err = parse_toml_table(content, "dup.toml").unwrap_err();
        assert!(matches!(
            err,
            AppError::Table(TableError::DuplicateId { .. })
        ));
    }

    #[tokio::test]
    async fn test_load_json_table_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("table.json");
        std::fs::write(
            &path,
            r#"{"exercise":[{"id":"x","alternatives":[{"name":"A","reason":"r","youtubeUrl":"u","briefTechnique":"t"}]}]}"#,
        )
        .unwrap();

        let table = load_table(Some(path.to_str().unwrap())).await.unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("x").unwrap()[0].brief_technique, "t");
    }

    #[tokio::test]
    async fn test_load_unsupported_extension() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("table.yaml");
        std::fs::write(&path, "exercise: []").unwrap();

        let err = load_table_file(&path).await.unwrap_err();
        assert!(err.to_string().contains("不支持"));
    }
}
