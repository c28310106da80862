//! # Cpp Analyze Submit
//!
//! 一个把 C++ 源文件和问题描述提交给远端分析服务并解读结论的 Rust 客户端
//!
//! ## 架构设计
//!
//! 本系统采用严格的分层架构：
//!
//! ### ① 数据模型层（Models）
//! - `models/artifact` - 源文件制品、描述制品、提交请求
//! - `models/response` - 服务端响应的约定形状和最终分析结果
//!
//! ### ② 业务能力层（Services）
//! - `services/ingest` - 源文件接入（扩展名校验 + 异步读取）
//! - `services/statement` - 问题描述打包为 `problem.txt` 制品
//!
//! ### ③ 传输层（Clients）
//! - `clients/analyze_client` - multipart 提交、超时中止、结果分类
//!
//! ### ④ 编排层（Workflow）
//! - `workflow/analyzer` - 提交周期状态机，独占持有阶段 / 结果 / 错误
//!
//! 所有失败形态在 `error` 收敛为一个封闭的错误枚举；
//! 外部观察者只消费编排器给出的不可变快照。

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::AnalyzeClient;
pub use config::Config;
pub use error::{AppError, AppResult, ErrorKind};
pub use models::{AnalysisResult, ApiResponse, SubmissionRequest};
pub use workflow::{Analyzer, Phase, Snapshot};
