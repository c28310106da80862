//! 提交编排 - 流程层
//!
//! 核心职责：持有一次提交周期的完整生命周期
//!
//! 状态流转：
//! `Idle → Validating → Submitting → Succeeded | Failed`
//!
//! - 同一周期内只向前流转，新的提交从 `Validating` 重新开始
//! - 阶段 / 结果 / 错误三元组只由编排器自己修改
//! - 同一实例同时最多一次在途提交，再入调用直接忽略
//! - 对外只暴露不可变快照

use std::path::Path;

use tracing::{info, warn};

use crate::clients::AnalyzeClient;
use crate::config::Config;
use crate::error::AppError;
use crate::models::{AnalysisResult, ApiResponse, ResponseStatus, SubmissionRequest};
use crate::services::{load_source_file, package_statement};

/// 提交周期所处的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// 尚未提交过
    Idle,
    /// 正在校验本地输入
    Validating,
    /// 请求在途
    Submitting,
    /// 本周期成功结束
    Succeeded,
    /// 本周期失败结束
    Failed,
}

/// 对外暴露的不可变状态快照
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub phase: Phase,
    pub result: Option<AnalysisResult>,
    pub error: Option<AppError>,
}

/// 提交编排器
///
/// 职责：
/// - 串起校验 → 打包 → 提交 → 解读的完整流程
/// - 独占持有当前阶段、最新结果和最新错误
/// - 不关心传输细节（交给 `AnalyzeClient`）
pub struct Analyzer {
    client: AnalyzeClient,
    phase: Phase,
    result: Option<AnalysisResult>,
    error: Option<AppError>,
}

impl Analyzer {
    /// 创建新的编排器
    pub fn new(config: &Config) -> Self {
        Self {
            client: AnalyzeClient::new(config),
            phase: Phase::Idle,
            result: None,
            error: None,
        }
    }

    /// 当前状态快照
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            result: self.result.clone(),
            error: self.error.clone(),
        }
    }

    /// 提交一次分析
    ///
    /// # 参数
    /// - `source_path`: 源文件路径
    /// - `description`: 问题描述文本
    ///
    /// # 返回
    /// 本次调用结束后的状态快照。校验失败不发起网络请求；
    /// 已有提交在途时本次调用不产生任何变化。
    pub async fn submit(&mut self, source_path: &Path, description: &str) -> Snapshot {
        // 再入保护：在途提交期间的调用一律忽略
        if self.phase == Phase::Submitting {
            warn!("⚠️ 已有提交在进行中，忽略本次调用");
            return self.snapshot();
        }

        self.phase = Phase::Validating;

        let solution = match load_source_file(source_path).await {
            Ok(artifact) => artifact,
            Err(err) => return self.fail_local(err),
        };

        let statement = match package_statement(description) {
            Ok(artifact) => artifact,
            Err(err) => return self.fail_local(err),
        };

        let request = SubmissionRequest::new(solution, statement);

        // 输入全部通过后才进入提交阶段，并清掉上一轮的结果和错误
        self.phase = Phase::Submitting;
        self.result = None;
        self.error = None;

        match self.client.analyze(&request).await {
            Ok(response) => match interpret_response(response) {
                Ok(result) => {
                    info!("✅ 分析完成");
                    self.result = Some(result);
                    self.phase = Phase::Succeeded;
                }
                Err(err) => self.record_failure(err),
            },
            Err(err) => self.record_failure(err),
        }

        self.snapshot()
    }

    /// 本地校验失败：记录错误并结束周期，但保留上一轮的成功结果
    fn fail_local(&mut self, err: AppError) -> Snapshot {
        warn!("❌ 本地校验未通过: {}", err);
        self.error = Some(err);
        self.phase = Phase::Failed;
        self.snapshot()
    }

    /// 提交阶段失败：记录错误并结束周期
    fn record_failure(&mut self, err: AppError) {
        warn!("❌ 分析失败: {}", err);
        self.error = Some(err);
        self.phase = Phase::Failed;
    }
}

/// 解读 2xx 响应体
///
/// body 里 `status:"fail"` 的响应仍按失败周期处理，不误报成功。
fn interpret_response(response: ApiResponse) -> Result<AnalysisResult, AppError> {
    match response.status {
        ResponseStatus::Success => {
            let data = response.data.unwrap_or_default();
            Ok(AnalysisResult {
                compile_output: data.compile_output.unwrap_or_default(),
                llm_feedback: data.llm_feedback.unwrap_or_default(),
            })
        }
        ResponseStatus::Fail => {
            let message = response
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "analysis failed".to_string());
            Err(AppError::server(message, response.code))
        }
    }
}
