use crate::config::Config;
use std::iter::Peekable;

/// 解析开头的选项，遇到第一个非选项参数时停止。
pub(crate) fn parse_configs(args: &mut Peekable<impl Iterator<Item = String>>) -> Vec<Config> {
    let mut configs = Vec::new();
    while let Some(config) = args.peek().and_then(|arg| parse_config(arg)) {
        args.next();
        configs.push(config);
    }
    configs
}

fn parse_config(arg: &str) -> Option<Config> {
    match arg {
        "-h" | "--help" => Some(Config::Help),
        "-V" | "--version" => Some(Config::Version),
        "-v" | "--verbose" => Some(Config::Verbose),
        "-d" | "--dry-run" => Some(Config::DryRun),
        "-n" | "--nocase" => Some(Config::Nocase),
        _ => None,
    }
}
