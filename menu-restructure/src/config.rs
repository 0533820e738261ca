use std::path::PathBuf;

/// Default location of the menu data document (read and rewritten in place)
pub const DEFAULT_MENU_DATA_PATH: &str = "app/src/main/assets/firebase_sample_data.json";

/// 运行配置，从环境变量读取
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | MENU_INPUT_PATH | app/src/main/assets/firebase_sample_data.json | 输入文件 |
/// | MENU_OUTPUT_PATH | 同 MENU_INPUT_PATH | 输出文件 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志目录 (存在时写入滚动文件) |
/// | SUMMARY_LIMIT | 10 | 输出的合并摘要条数 |
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub summary_limit: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let input_path = lookup("MENU_INPUT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MENU_DATA_PATH));
        let output_path = lookup("MENU_OUTPUT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| input_path.clone());

        Self {
            input_path,
            output_path,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR"),
            summary_limit: lookup("SUMMARY_LIMIT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Input and output are the same file
    pub fn is_in_place(&self) -> bool {
        self.input_path == self.output_path
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
