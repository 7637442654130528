use crate::err::RlqErr;
use nom::Parser;
use nom_language::error::{VerboseError, convert_error};

pub(crate) mod args;
mod token;

/// 解析错误的类型
pub(crate) type ParserError<'a> = VerboseError<&'a str>;

/// 用`parser`解析整个参数值，不允许有剩余内容。
pub(crate) fn parse_whole<'a, O>(
    mut parser: impl Parser<&'a str, Output = O, Error = ParserError<'a>>, value: &'a str, cmd: &'static str,
    arg: &'static str,
) -> Result<O, RlqErr> {
    match parser.parse(value) {
        Ok(("", output)) => Ok(output),
        Ok((remaining, _)) => Err(RlqErr::UnexpectedRemaining { cmd, arg, remaining: remaining.to_string() }),
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => Err(RlqErr::ArgParseErr {
            cmd,
            arg,
            arg_value: value.to_string(),
            error: convert_error(value, err).trim_end().to_string(),
        }),
        Err(nom::Err::Incomplete(_)) => Err(RlqErr::ArgParseErr {
            cmd,
            arg,
            arg_value: value.to_string(),
            error: "incomplete input".to_string(),
        }),
    }
}
