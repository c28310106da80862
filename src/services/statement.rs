//! 问题描述打包 - 业务能力层
//!
//! 把自由文本的问题描述包装成可以走 multipart 通道的文本制品。
//! 纯函数，无副作用。

use crate::error::{AppError, AppResult};
use crate::models::StatementArtifact;

/// 描述制品的固定名称
pub const STATEMENT_FILE_NAME: &str = "problem.txt";

/// 打包问题描述
///
/// # 参数
/// - `text`: 用户输入的问题描述
///
/// # 返回
/// 去除首尾空白后为空时返回校验错误；否则返回名为
/// `problem.txt` 的文本制品，内容原样保留。
pub fn package_statement(text: &str) -> AppResult<StatementArtifact> {
    if text.trim().is_empty() {
        return Err(AppError::validation("description required"));
    }

    Ok(StatementArtifact {
        file_name: STATEMENT_FILE_NAME.to_string(),
        content: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_rejects_empty_description() {
        let err = package_statement("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "description required");
    }

    #[test]
    fn test_rejects_whitespace_only_description() {
        let err = package_statement("   \n\t  ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "description required");
    }

    #[test]
    fn test_packages_description_as_problem_txt() {
        let artifact = package_statement("求两数之和").unwrap();
        assert_eq!(artifact.file_name, "problem.txt");
        // 内容原样保留，不做 trim
        assert_eq!(artifact.content, "求两数之和");
    }

    #[test]
    fn test_keeps_surrounding_whitespace_in_content() {
        let artifact = package_statement("  sum of two numbers  ").unwrap();
        assert_eq!(artifact.content, "  sum of two numbers  ");
    }
}
