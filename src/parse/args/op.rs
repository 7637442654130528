use crate::err::RlqErr;
use crate::op::{CaseArg, Op, ReplaceArg};
use crate::parse::args::condition::parse_cond;
use crate::parse::args::{parse_arg, parse_as, parse_tag_nocase};
use crate::parse::parse_whole;
use crate::parse::token::parse_integer;
use crate::Integer;
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_ops(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Vec<Op>, RlqErr> {
    let mut ops = vec![];
    while let Some(op) = parse_op(args)? {
        ops.push(op);
    }
    Ok(ops)
}

fn parse_op(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, RlqErr> {
    let Some(op) = args.peek() else {
        return Ok(None);
    };
    let lower_op = op.to_ascii_lowercase();
    let cmd = match lower_op.as_str() {
        ":take" => ":take",
        ":drop" => ":drop",
        ":where" => ":where",
        ":where-ne" => ":where-ne",
        ":until" => ":until",
        ":until-eq" => ":until-eq",
        ":upper" => ":upper",
        ":lower" => ":lower",
        ":case" => ":case",
        ":replace" => ":replace",
        ":len" => ":len",
        _ => return Ok(None),
    };
    args.next();
    Ok(Some(match cmd {
        ":take" => Op::Take(parse_count(args, cmd)?),
        ":drop" => Op::Drop(parse_count(args, cmd)?),
        ":where" => Op::Where(parse_cond(args, cmd)?),
        ":where-ne" => {
            let value = parse_arg(args, cmd, "value")?;
            Op::WhereNe { value, nocase: parse_tag_nocase(args, "nocase") }
        }
        ":until" => Op::Until(parse_cond(args, cmd)?),
        ":until-eq" => {
            let value = parse_arg(args, cmd, "value")?;
            Op::UntilEq { value, nocase: parse_tag_nocase(args, "nocase") }
        }
        ":upper" => Op::Case(CaseArg::Upper),
        ":lower" => Op::Case(CaseArg::Lower),
        ":case" => Op::Case(CaseArg::Switch),
        ":replace" => Op::Replace(parse_replace(args)?),
        _ => Op::Len,
    }))
}

fn parse_count(args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str) -> Result<Integer, RlqErr> {
    let count = args.next().ok_or(RlqErr::MissingArg { cmd, arg: "count" })?;
    parse_whole(parse_integer, &count, cmd, "count")
}

fn parse_replace(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<ReplaceArg, RlqErr> {
    // 被替换字符串和替换目标字符串必选
    let from = parse_arg(args, ":replace", "from")?;
    let to = parse_arg(args, ":replace", "to")?;
    let count = parse_as::<usize>(args);
    let nocase = parse_tag_nocase(args, "nocase");
    Ok(ReplaceArg::new(from, to, count, nocase))
}
