use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use cpp_analyze_submit::utils::logging;
use cpp_analyze_submit::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    // 解析命令行参数
    let mut args = std::env::args().skip(1);
    let source_path = match args.next() {
        Some(arg) => PathBuf::from(arg),
        None => bail!("用法: cpp_analyze_submit <solution.cpp> <问题描述 | 描述文件路径>"),
    };
    let description_arg = match args.next() {
        Some(arg) => arg,
        None => bail!("用法: cpp_analyze_submit <solution.cpp> <问题描述 | 描述文件路径>"),
    };

    // 第二个参数既可以是描述文本，也可以是描述文件的路径
    let description = if Path::new(&description_arg).is_file() {
        tokio::fs::read_to_string(&description_arg).await?
    } else {
        description_arg
    };

    // 初始化并运行应用
    let mut app = App::initialize(config)?;
    app.run(&source_path, &description).await?;

    Ok(())
}
