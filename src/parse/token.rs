use crate::parse::ParserError;
use crate::{Integer, Num};
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::char;
use nom::combinator::{cut, map, map_res, opt, value, verify};
use nom::error::context;
use nom::number::complete::recognize_float;
use nom::sequence::preceded;
use nom::{IResult, Parser};

/// 重新导出解析整数的函数
pub(crate) use nom::character::complete::i64 as parse_integer;
pub(crate) use nom::character::complete::usize as parse_usize;

/// 解析整数或有限的浮点数，优先解析为整数。
pub(crate) fn parse_num(input: &str) -> IResult<&str, Num, ParserError<'_>> {
    context("<num>", map_res(recognize_float, str::parse::<Num>)).parse(input)
}

/// 解析`[<min>],[<max>]`，最小值和最大值至少指定其一。
pub(crate) fn parse_cond_range<'a, T, F>(
    range_arg: F,
) -> impl Parser<&'a str, Output = (Option<T>, Option<T>), Error = ParserError<'a>>
where
    F: Parser<&'a str, Output = T, Error = ParserError<'a>> + Clone,
{
    verify(
        map(
            (context("[<min>]", opt(range_arg.clone())), char(','), context("[<max>]", opt(range_arg))),
            |(min, _, max)| (min, max),
        ),
        |(min, max): &(Option<T>, Option<T>)| min.is_some() || max.is_some(),
    )
}

/// 解析`=<spec>`。
pub(crate) fn parse_cond_spec<'a, T, F>(spec_arg: F) -> impl Parser<&'a str, Output = T, Error = ParserError<'a>>
where
    F: Parser<&'a str, Output = T, Error = ParserError<'a>>,
{
    preceded(char('='), context("<spec>", spec_arg))
}

/// 解析`integer|float`，整数返回`true`。
pub(crate) fn parse_cond_number(input: &str) -> IResult<&str, bool, ParserError<'_>> {
    alt((value(true, tag_no_case("integer")), value(false, tag_no_case("float")))).parse(input)
}

/// 解析`<start>,<end>[,<step>]`，步长不能为0。
pub(crate) fn parse_range_in_gen(input: &str) -> IResult<&str, (Integer, Integer, Integer), ParserError<'_>> {
    map(
        (
            context("<start>", parse_integer),
            preceded(char(','), context("<end>", parse_integer)),
            opt(preceded(char(','), cut(context("<step>", verify(parse_integer, |step: &Integer| *step != 0))))),
        ),
        |(start, end, step)| (start, end, step.unwrap_or(1)),
    )
    .parse(input)
}

/// 命令以`:`开头，`::`开头的是转义后的普通参数。
pub(crate) fn is_cmd_token(arg: &str) -> bool {
    arg.starts_with(':') && !arg.starts_with("::") && arg.len() > 1
}
