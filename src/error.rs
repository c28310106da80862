//! 应用程序错误类型
//!
//! 所有失败形态（本地校验、网络传输、服务端结构化错误、无法解析的响应）
//! 在这里收敛为一个封闭的错误枚举。新的失败来源只在此处扩展，
//! 其他模块一律不检查具体错误的内部字段。

use thiserror::Error;

/// 应用程序错误
///
/// 每个变体携带面向用户的消息；`Server` 和 `MalformedResponse`
/// 额外携带机器可读的错误码（服务端错误码或 HTTP 状态码）。
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// 本地校验失败（扩展名错误、描述为空），不会发起网络请求
    #[error("{message}")]
    Validation { message: String },
    /// 网络失败（超时、中断、无法连接）
    #[error("{message}")]
    Network { message: String },
    /// 服务端返回的结构化失败（status = "fail"）
    #[error("{message}")]
    Server {
        message: String,
        code: Option<String>,
    },
    /// 响应体无法按约定的 JSON 形状解析
    #[error("{message}")]
    MalformedResponse {
        message: String,
        code: Option<String>,
    },
    /// 其他未分类错误
    #[error("{message}")]
    Unknown { message: String },
}

/// 错误类别标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Network,
    Server,
    MalformedResponse,
    Unknown,
}

impl AppError {
    /// 创建校验错误
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
        }
    }

    /// 创建网络错误
    pub fn network(message: impl Into<String>) -> Self {
        AppError::Network {
            message: message.into(),
        }
    }

    /// 创建服务端错误
    pub fn server(message: impl Into<String>, code: Option<String>) -> Self {
        AppError::Server {
            message: message.into(),
            code,
        }
    }

    /// 创建响应格式错误
    pub fn malformed_response(message: impl Into<String>, code: Option<String>) -> Self {
        AppError::MalformedResponse {
            message: message.into(),
            code,
        }
    }

    /// 创建未分类错误
    pub fn unknown(message: impl Into<String>) -> Self {
        AppError::Unknown {
            message: message.into(),
        }
    }

    /// 返回错误类别
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation { .. } => ErrorKind::Validation,
            AppError::Network { .. } => ErrorKind::Network,
            AppError::Server { .. } => ErrorKind::Server,
            AppError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            AppError::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    /// 返回机器可读错误码（如果有）
    pub fn code(&self) -> Option<&str> {
        match self {
            AppError::Server { code, .. } | AppError::MalformedResponse { code, .. } => {
                code.as_deref()
            }
            _ => None,
        }
    }

    /// 归一化任意错误
    ///
    /// 已知的 `AppError` 原样通过；其他错误统一折叠为 `Unknown`。
    /// 这是对外暴露错误前的最后一道收口。
    pub fn normalize(err: anyhow::Error) -> Self {
        match err.downcast::<AppError>() {
            Ok(known) => known,
            Err(other) => AppError::unknown(format!("unexpected error: {}", other)),
        }
    }
}

// ========== 从常见错误类型转换 ==========

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::network("request timed out")
        } else if err.is_connect() || err.is_request() {
            AppError::network(format!("network request failed: {}", err))
        } else if err.is_decode() {
            AppError::malformed_response(format!("failed to decode response: {}", err), None)
        } else {
            AppError::unknown(format!("unexpected error: {}", err))
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::unknown(format!("failed to read file: {}", err))
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
