//! 分析服务 API 客户端
//!
//! 封装与远端分析服务的全部交互：
//! - 组装三段式 multipart 请求（源文件、描述制品、语言字段）
//! - 在整个调用期间挂一个超时定时器，到期即中止在途请求
//! - 把原始结果分类为成功 / HTTP 失败 / 网络失败

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{ApiResponse, SubmissionRequest, TARGET_LANGUAGE};

/// 分析服务客户端
pub struct AnalyzeClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl AnalyzeClient {
    /// 创建新的分析客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// 提交分析请求
    ///
    /// # 参数
    /// - `request`: 已通过本地校验的提交请求
    ///
    /// # 返回
    /// 2xx 响应返回解析后的 `ApiResponse`（body 内容原样交给调用方解释）；
    /// 其余情况返回分类后的错误。
    pub async fn analyze(&self, request: &SubmissionRequest) -> AppResult<ApiResponse> {
        let url = format!("{}/api/upload", self.base_url);
        let form = build_form(request);

        debug!("📤 正在提交分析请求: {}", url);

        // 定时器覆盖发送和读取响应的全过程；到期丢弃整个 future，
        // 在途请求随之中止，迟到的响应不会再产生任何状态变化
        let outcome = tokio::time::timeout(self.timeout, async {
            let response = self
                .http
                .post(&url)
                .header(ACCEPT, "application/json")
                .multipart(form)
                .send()
                .await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        })
        .await;

        let (status, body) = match outcome {
            Ok(Ok(pair)) => pair,
            Ok(Err(err)) => return Err(err.into()),
            Err(_) => {
                warn!("⚠️ 分析请求超时 ({:?})", self.timeout);
                return Err(AppError::network("request timed out"));
            }
        };

        if !status.is_success() {
            return Err(classify_failure_body(status, &body));
        }

        parse_success_body(&body)
    }
}

/// 组装 multipart 表单
///
/// 恰好三个部分：源文件、描述制品、固定的 `language` 字段。
fn build_form(request: &SubmissionRequest) -> Form {
    let solution = request.solution();
    let statement = request.statement();

    Form::new()
        .part(
            "solution_file",
            Part::bytes(solution.content.clone()).file_name(solution.file_name.clone()),
        )
        .part(
            "problem_file",
            Part::text(statement.content.clone()).file_name(statement.file_name.clone()),
        )
        .text("language", TARGET_LANGUAGE)
}

/// 分类非 2xx 响应体
///
/// 先尝试按 JSON 解析：带 `status:"fail"` 的结构化失败归为服务端错误；
/// 是 JSON 但不符合失败形状、或根本不是 JSON 的，归为响应格式错误，
/// 并把 HTTP 状态码作为错误码带出。
fn classify_failure_body(status: StatusCode, body: &str) -> AppError {
    let http_code = Some(status.as_u16().to_string());

    match serde_json::from_str::<Value>(body) {
        Ok(parsed) => {
            if parsed.get("status").and_then(Value::as_str) == Some("fail") {
                let message = parsed
                    .get("message")
                    .and_then(Value::as_str)
                    .filter(|m| !m.is_empty())
                    .unwrap_or("analysis failed")
                    .to_string();
                let code = parsed.get("code").and_then(code_as_string);
                AppError::server(message, code)
            } else {
                AppError::malformed_response(parsed.to_string(), http_code)
            }
        }
        Err(_) => AppError::malformed_response(body.to_string(), http_code),
    }
}

/// 解析 2xx 响应体
///
/// 缺少 `status` 字段或形状对不上的响应不默认成功，一律视为格式错误。
fn parse_success_body(body: &str) -> AppResult<ApiResponse> {
    serde_json::from_str::<ApiResponse>(body)
        .map_err(|err| AppError::malformed_response(format!("unrecognized response shape: {}", err), None))
}

/// 错误码可能是字符串也可能是数字，统一转成字符串
fn code_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
