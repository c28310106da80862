//! 源文件接入 - 业务能力层
//!
//! 只负责"把用户给的文件变成源文件制品"这一件事：
//! 先做扩展名校验，通过后异步读取完整内容。
//! 通过校验之后不限制文件大小和内容。

use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::SourceArtifact;

/// 加载源文件
///
/// # 参数
/// - `path`: 用户提供的文件路径
///
/// # 返回
/// 扩展名不是 `.cpp` 时返回校验错误，此时不会尝试读取文件；
/// 否则读取全部内容并返回制品。
pub async fn load_source_file(path: &Path) -> AppResult<SourceArtifact> {
    // 扩展名不通过就不碰文件系统
    if path.extension().and_then(|e| e.to_str()) != Some("cpp") {
        return Err(AppError::validation("must be a .cpp file"));
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("solution.cpp")
        .to_string();

    debug!("正在读取源文件: {}", path.display());

    let content = fs::read(path).await?;

    Ok(SourceArtifact { file_name, content })
}
