use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

/// 日志过滤环境变量
const LOG_ENV: &str = "RLQ_LOG";

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub(crate) enum Config {
    /// -V,--version    打印版本信息。
    Version,
    /// -h,--help       打印帮助信息。
    ///                 -h|--help[ opt|in|op|cond|out|code]
    Help,
    /// -v,--verbose    执行之前打印流水线详情，并输出调试日志。
    Verbose,
    /// -d,--dry-run    仅解析流水线，不执行。
    DryRun,
    /// -n,--nocase     全局忽略大小写。
    Nocase,
}

#[inline]
pub(crate) fn is_nocase(nocase: bool, configs: &[Config]) -> bool {
    nocase || configs.contains(&Config::Nocase)
}

/// 安装日志输出，`RLQ_LOG`优先于`--verbose`。
pub(crate) fn init_logging(configs: &[Config]) {
    let default_level = if configs.contains(&Config::Verbose) { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    // 重复安装（例如在测试中多次调用`run`）时保留已有的订阅者
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

pub(crate) fn pipe_info(input: &Input, ops: &[Op], output: &Output) -> String {
    format!(
        "Input:\n    {input:?}\nOp:\n{}\nOutput:\n    {output:?}",
        ops.iter().map(|op| format!("    {op:?}")).join("\n")
    )
}
