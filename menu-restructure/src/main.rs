use anyhow::Context;
use menu_restructure::{Config, init_logger_with_file, restructure_file};

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!("Menu restructure starting...");
    if !config.is_in_place() {
        tracing::info!(output = %config.output_path.display(), "Writing to a separate output file");
    }

    // 2. 读取 -> 合并 -> 写回
    let report = restructure_file(&config.input_path, &config.output_path)
        .inspect_err(|e| tracing::error!("Restructure failed: {}", e))
        .with_context(|| format!("failed to restructure {}", config.input_path.display()))?;

    // 3. 摘要
    report.log_summary(config.summary_limit);

    Ok(())
}
