//! 分析服务响应模型
//!
//! 约定的响应 JSON 形状：
//! `{ status: "success"|"fail", code?, message?, data?: { compile_output?, llm_feedback? } }`

use serde::Deserialize;

/// 服务端响应
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// 结果状态；缺失时整个响应视为格式错误，不会默认成功
    pub status: ResponseStatus,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<AnalysisData>,
}

/// 结果状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
}

/// 成功响应携带的分析数据
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisData {
    /// 编译器输出（警告或错误文本，可能为空）
    #[serde(default)]
    pub compile_output: Option<String>,
    /// LLM 代码评审文本
    #[serde(default)]
    pub llm_feedback: Option<String>,
}

/// 一次成功分析的最终结果
///
/// 由编排器持有并对外暴露；缺失的字段落为空字符串。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// 编译诊断文本
    pub compile_output: String,
    /// 代码评审文本
    pub llm_feedback: String,
}
