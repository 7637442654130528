use crate::err::RlqErr;
use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use crate::parse::args::input::parse_input;
use crate::parse::args::op::parse_ops;
use crate::parse::args::output::parse_output;
use crate::parse::token::is_cmd_token;
use std::iter::Peekable;
use std::str::FromStr;

mod condition;
mod config;
mod input;
mod op;
mod output;

pub(crate) use config::parse_configs;

/// 依次解析输入、操作和输出，剩余任何参数都视为错误。
pub(crate) fn parse(mut args: Peekable<impl Iterator<Item = String>>) -> Result<(Input, Vec<Op>, Output), RlqErr> {
    let input = parse_input(&mut args)?;
    let ops = parse_ops(&mut args)?;
    let output = parse_output(&mut args)?;
    let remaining = args.collect::<Vec<_>>();
    if !remaining.is_empty() { Err(RlqErr::UnknownArgs { args: remaining }) } else { Ok((input, ops, output)) }
}

/// 解析一个必选参数，参数不为命令格式，处理转义
fn parse_arg(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<String, RlqErr> {
    parse_opt_arg(args).ok_or(RlqErr::MissingArg { cmd, arg })
}

/// 解析一个或多个参数，参数不为命令格式，处理转义
fn parse_arg1(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<Vec<String>, RlqErr> {
    let mut res = vec![parse_arg(args, cmd, arg)?];
    while let Some(value) = parse_opt_arg(args) {
        res.push(value);
    }
    Ok(res)
}

/// 解析一个可选的参数，参数不为命令格式，处理转义
fn parse_opt_arg(args: &mut Peekable<impl Iterator<Item = String>>) -> Option<String> {
    args.next_if(|value| !is_cmd_token(value)).map(escape)
}

/// `::`开头的参数转义为`:`开头的普通参数
fn escape(arg: String) -> String {
    if let Some(stripped) = arg.strip_prefix("::") { format!(":{stripped}") } else { arg }
}

fn parse_tag_nocase(args: &mut Peekable<impl Iterator<Item = String>>, tag: &'static str) -> bool {
    args.next_if(|value| value.eq_ignore_ascii_case(tag)).is_some()
}

fn parse_as<T: FromStr>(args: &mut Peekable<impl Iterator<Item = String>>) -> Option<T> {
    let value = args.peek()?.parse::<T>().ok()?;
    args.next();
    Some(value)
}

#[cfg(test)]
fn build_args(args_line: &'static str) -> Peekable<impl Iterator<Item = String>> {
    args_line.split(' ').filter(|s| !s.is_empty()).map(String::from).peekable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{Cond, CondKind};
    use crate::Num;

    #[test]
    fn test_parse() {
        assert_eq!(
            parse(build_args(":gen 1,13 :drop 2 :take 8 :where num =3")),
            Ok((
                Input::Gen { start: 1, end: 13, step: 1 },
                vec![
                    Op::Drop(2),
                    Op::Take(8),
                    Op::Where(Cond::new(CondKind::NumSpec { spec: Num::from(3) }, false))
                ],
                Output::StdOut
            ))
        );
        assert_eq!(parse(build_args("")), Ok((Input::StdIn, vec![], Output::StdOut)));
        assert_eq!(parse(build_args(":to count")), Ok((Input::StdIn, vec![], Output::Count)));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse(build_args(":of a :take 1 :sort")),
            Err(RlqErr::UnknownArgs { args: vec![":sort".to_string()] })
        );
        assert_eq!(
            parse(build_args(":of a :to out extra")),
            Err(RlqErr::UnknownArgs { args: vec!["extra".to_string()] })
        );
    }

    #[test]
    fn test_parse_arg() {
        let mut args = build_args("a ::b :c");
        assert_eq!(parse_arg(&mut args, ":of", "value"), Ok("a".to_string()));
        assert_eq!(parse_arg(&mut args, ":of", "value"), Ok(":b".to_string()));
        assert_eq!(parse_arg(&mut args, ":of", "value"), Err(RlqErr::MissingArg { cmd: ":of", arg: "value" }));
        assert_eq!(args.next(), Some(":c".to_string()));
    }

    #[test]
    fn test_parse_arg1() {
        let mut args = build_args("a b :c");
        assert_eq!(parse_arg1(&mut args, ":of", "value"), Ok(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(parse_arg1(&mut args, ":of", "value"), Err(RlqErr::MissingArg { cmd: ":of", arg: "value" }));
    }

    #[test]
    fn test_parse_tag_and_as() {
        let mut args = build_args("NoCase 10 x");
        assert!(parse_tag_nocase(&mut args, "nocase"));
        assert!(!parse_tag_nocase(&mut args, "nocase"));
        assert_eq!(parse_as::<usize>(&mut args), Some(10));
        assert_eq!(parse_as::<usize>(&mut args), None);
        assert_eq!(args.next(), Some("x".to_string()));
    }
}
