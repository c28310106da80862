//! 提交制品数据模型
//!
//! 统一描述通过 multipart 通道传输的文件型载荷：
//! 用户上传的源文件和由问题描述包装出来的文本制品
//! 走同一条传输路径。

/// 目标语言标识（随请求一起提交的固定字段）
pub const TARGET_LANGUAGE: &str = "cpp";

/// 源文件制品
///
/// 内容在扩展名校验通过之后一次性读入内存，
/// 之后不再限制大小或内容。
#[derive(Debug, Clone)]
pub struct SourceArtifact {
    /// 显示名（原始文件名）
    pub file_name: String,
    /// 文件内容
    pub content: Vec<u8>,
}

/// 问题描述制品
///
/// 问题描述包装为名为 `problem.txt` 的文本制品
#[derive(Debug, Clone)]
pub struct StatementArtifact {
    /// 制品名（固定为 `problem.txt`）
    pub file_name: String,
    /// 描述文本
    pub content: String,
}

/// 一次提交请求
///
/// 两个制品都校验通过后才能构建；构建后不可变。
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    solution: SourceArtifact,
    statement: StatementArtifact,
}

impl SubmissionRequest {
    /// 组装提交请求
    pub fn new(solution: SourceArtifact, statement: StatementArtifact) -> Self {
        Self {
            solution,
            statement,
        }
    }

    pub fn solution(&self) -> &SourceArtifact {
        &self.solution
    }

    pub fn statement(&self) -> &StatementArtifact {
        &self.statement
    }
}
