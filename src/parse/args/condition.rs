use crate::condition::{Cond, CondKind};
use crate::err::RlqErr;
use crate::parse::args::{parse_arg, parse_tag_nocase};
use crate::parse::parse_whole;
use crate::parse::token::{parse_cond_number, parse_cond_range, parse_cond_spec, parse_num, parse_usize};
use nom::branch::alt;
use nom::combinator::map;
use std::iter::Peekable;

/// 解析`[not ]<cond>`。
pub(in crate::parse::args) fn parse_cond(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str,
) -> Result<Cond, RlqErr> {
    let not = parse_tag_nocase(args, "not");
    let Some(kind) = args.next_if(|arg| {
        matches!(arg.to_ascii_lowercase().as_str(), "len" | "num" | "reg" | "upper" | "lower" | "empty" | "blank")
    }) else {
        return Err(RlqErr::MissingArg { cmd, arg: "condition" });
    };
    let kind = match kind.to_ascii_lowercase().as_str() {
        "len" => {
            let value = parse_arg(args, cmd, "len range or spec")?;
            parse_whole(
                alt((
                    map(parse_cond_range(parse_usize), |(min, max)| CondKind::TextLenRange { min, max }),
                    map(parse_cond_spec(parse_usize), |spec| CondKind::TextLenSpec { spec }),
                )),
                &value,
                cmd,
                "len range or spec",
            )?
        }
        "num" => parse_num_kind(args, cmd),
        "reg" => CondKind::new_reg_match(&parse_arg(args, cmd, "reg regex")?)?,
        "upper" => CondKind::TextAllCase { upper: true },
        "lower" => CondKind::TextAllCase { upper: false },
        "empty" => CondKind::TextEmptyOrBlank { empty: true },
        _ => CondKind::TextEmptyOrBlank { empty: false },
    };
    Ok(Cond::new(kind, not))
}

/// `num`之后的参数可选，无法解析时不消耗。
fn parse_num_kind(args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str) -> CondKind {
    let parsed = args.peek().and_then(|value| {
        parse_whole(
            alt((
                map(parse_cond_range(parse_num), |(min, max)| CondKind::NumRange { min, max }),
                map(parse_cond_spec(parse_num), |spec| CondKind::NumSpec { spec }),
                map(parse_cond_number, |is_integer| CondKind::Number { is_integer: Some(is_integer) }),
            )),
            value,
            cmd,
            "num range or spec",
        )
        .ok()
    });
    match parsed {
        Some(kind) => {
            args.next();
            kind
        }
        None => CondKind::Number { is_integer: None },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Num;
    use crate::parse::args::build_args;

    fn parse(args_line: &'static str) -> Result<Cond, RlqErr> {
        parse_cond(&mut build_args(args_line), ":where")
    }

    #[test]
    fn test_parse_cond_text_len() {
        assert_eq!(parse("len 1,3"), Ok(Cond::new(CondKind::TextLenRange { min: Some(1), max: Some(3) }, false)));
        assert_eq!(parse("len ,3"), Ok(Cond::new(CondKind::TextLenRange { min: None, max: Some(3) }, false)));
        assert_eq!(parse("not len 1,"), Ok(Cond::new(CondKind::TextLenRange { min: Some(1), max: None }, true)));
        assert_eq!(parse("LEN =3"), Ok(Cond::new(CondKind::TextLenSpec { spec: 3 }, false)));
        assert_eq!(parse("len"), Err(RlqErr::MissingArg { cmd: ":where", arg: "len range or spec" }));
        assert!(matches!(parse("len ,"), Err(RlqErr::ArgParseErr { cmd: ":where", .. })));
        assert!(matches!(parse("len =-1"), Err(RlqErr::ArgParseErr { .. })));
    }

    #[test]
    fn test_parse_cond_num() {
        assert_eq!(
            parse("num 1,3.5"),
            Ok(Cond::new(CondKind::NumRange { min: Some(Num::from(1)), max: Some(Num::from(3.5)) }, false))
        );
        assert_eq!(parse("not num =-2"), Ok(Cond::new(CondKind::NumSpec { spec: Num::from(-2) }, true)));
        assert_eq!(parse("num integer"), Ok(Cond::new(CondKind::Number { is_integer: Some(true) }, false)));
        assert_eq!(parse("num float"), Ok(Cond::new(CondKind::Number { is_integer: Some(false) }, false)));

        let mut args = build_args("num :take");
        assert_eq!(parse_cond(&mut args, ":where"), Ok(Cond::new(CondKind::Number { is_integer: None }, false)));
        assert_eq!(args.next(), Some(":take".to_string()));
    }

    #[test]
    fn test_parse_cond_text() {
        assert_eq!(parse("upper"), Ok(Cond::new(CondKind::TextAllCase { upper: true }, false)));
        assert_eq!(parse("not lower"), Ok(Cond::new(CondKind::TextAllCase { upper: false }, true)));
        assert_eq!(parse("empty"), Ok(Cond::new(CondKind::TextEmptyOrBlank { empty: true }, false)));
        assert_eq!(parse("blank"), Ok(Cond::new(CondKind::TextEmptyOrBlank { empty: false }, false)));
    }

    #[test]
    fn test_parse_cond_reg() {
        assert_eq!(parse(r"reg \d+"), Ok(Cond::new(CondKind::new_reg_match(r"\d+").unwrap(), false)));
        assert_eq!(parse("reg"), Err(RlqErr::MissingArg { cmd: ":where", arg: "reg regex" }));
        assert!(matches!(parse("reg ("), Err(RlqErr::ParseRegexErr { .. })));
    }

    #[test]
    fn test_parse_cond_missing() {
        assert_eq!(parse(""), Err(RlqErr::MissingArg { cmd: ":where", arg: "condition" }));
        assert_eq!(parse("not"), Err(RlqErr::MissingArg { cmd: ":where", arg: "condition" }));
        assert_eq!(parse("unknown"), Err(RlqErr::MissingArg { cmd: ":where", arg: "condition" }));
    }
}
