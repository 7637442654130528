use crate::err::RlqErr;
use crate::input::{GEN_LIMIT, Input, gen_len};
use crate::parse::args::{parse_arg, parse_arg1};
use crate::parse::parse_whole;
use crate::parse::token::parse_range_in_gen;
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_input(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RlqErr> {
    let Some(cmd) = args.peek() else {
        return Ok(Input::StdIn);
    };
    match cmd.to_ascii_lowercase().as_str() {
        ":in" => {
            args.next();
            Ok(Input::StdIn)
        }
        ":file" => {
            args.next();
            Ok(Input::File { files: parse_arg1(args, ":file", "file_name")? })
        }
        ":of" => {
            args.next();
            Ok(Input::Of { values: parse_arg1(args, ":of", "value")? })
        }
        ":gen" => {
            args.next();
            let range = parse_arg(args, ":gen", "range")?;
            let (start, end, step) = parse_whole(parse_range_in_gen, &range, ":gen", "range")?;
            let len = gen_len(start, end, step);
            if len > GEN_LIMIT {
                return Err(RlqErr::ArgParseErr {
                    cmd: ":gen",
                    arg: "range",
                    arg_value: range,
                    error: format!("range yields {len} values, at most {GEN_LIMIT} are allowed"),
                });
            }
            Ok(Input::Gen { start, end, step })
        }
        _ => Ok(Input::StdIn),
    }
}
