use crate::err::RlqErr;
use crate::output::Output;
use crate::parse::args::{parse_arg, parse_tag_nocase};
use crate::parse::parse_whole;
use crate::parse::token::parse_usize;
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_output(
    args: &mut Peekable<impl Iterator<Item = String>>,
) -> Result<Output, RlqErr> {
    if !parse_tag_nocase(args, ":to") {
        return Ok(Output::StdOut);
    }
    let target = args.next().ok_or(RlqErr::MissingArg { cmd: ":to", arg: "target" })?;
    match target.to_ascii_lowercase().as_str() {
        "out" => Ok(Output::StdOut),
        "count" => Ok(Output::Count),
        "head" => {
            let size = parse_arg(args, ":to head", "size")?;
            Ok(Output::Head(parse_whole(parse_usize, &size, ":to head", "size")?))
        }
        "file" => {
            let file = parse_arg(args, ":to file", "file_name")?;
            let append = parse_tag_nocase(args, "append");
            let crlf = if parse_tag_nocase(args, "crlf") {
                Some(true)
            } else if parse_tag_nocase(args, "lf") {
                Some(false)
            } else {
                None
            };
            Ok(Output::File { file, append, crlf })
        }
        _ => Err(RlqErr::ArgParseErr {
            cmd: ":to",
            arg: "target",
            arg_value: target,
            error: "expected one of out|file|count|head".to_string(),
        }),
    }
}
