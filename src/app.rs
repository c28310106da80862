use crate::config::Config;
use crate::utils::logging::{init_log_file, log_startup, truncate_text};
use crate::workflow::{Analyzer, Phase, Snapshot};
use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::{error, info};

/// 应用主结构
pub struct App {
    config: Config,
    analyzer: Analyzer,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config.api_base_url, config.request_timeout_secs);

        let analyzer = Analyzer::new(&config);

        Ok(Self { config, analyzer })
    }

    /// 运行一次完整的提交周期
    pub async fn run(&mut self, source_path: &Path, description: &str) -> Result<()> {
        info!("📄 源文件: {}", source_path.display());

        if self.config.verbose_logging {
            info!("📝 问题描述: {}", truncate_text(description, 80));
        }

        let snapshot = self.analyzer.submit(source_path, description).await;

        let summary = report_verdict(&snapshot);
        self.append_to_log(&summary)?;

        Ok(())
    }

    /// 把本次结论追加到输出日志文件
    fn append_to_log(&self, summary: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.config.output_log_file)?;
        writeln!(file, "{}", summary)?;
        Ok(())
    }
}

/// 输出结论并返回写入日志文件的摘要
fn report_verdict(snapshot: &Snapshot) -> String {
    match (snapshot.phase, snapshot.result.as_ref()) {
        (Phase::Succeeded, Some(result)) => {
            info!("{}", "=".repeat(60));
            info!("✅ 分析成功");
            if result.compile_output.is_empty() {
                info!("🛠️ 编译输出: (无)");
            } else {
                info!("🛠️ 编译输出:\n{}", result.compile_output);
            }
            info!("🧐 代码评审:\n{}", result.llm_feedback);
            info!("{}", "=".repeat(60));

            format!("成功: 评审 {} 字", result.llm_feedback.chars().count())
        }
        (_, _) => {
            // 失败周期只需要最新错误的消息
            let message = snapshot
                .error
                .as_ref()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "analysis failed".to_string());

            error!("❌ 分析失败: {}", message);

            format!("失败: {}", message)
        }
    }
}
