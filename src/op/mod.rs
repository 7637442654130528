mod replace;

use crate::adapter::{Filter, Select, Skip, Take, Until};
use crate::condition::Cond;
use crate::config::{Config, is_nocase};
use crate::cursor::Transfer;
use crate::err::RlqErr;
use crate::Integer;
use tracing::debug;
use unicase::UniCase;

pub(crate) use replace::ReplaceArg;

/// 游标链的终点，拿到完整的游标链后负责拉取
pub(crate) type Finish<'f> = dyn FnMut(&mut dyn Transfer<Item = String>) -> Result<(), RlqErr> + 'f;

#[derive(Debug, PartialEq)]
pub(crate) enum Op {
    /// :take <n>       最多保留前n个值，n为任意整数，非正数时结果为空。
    Take(Integer),
    /// :drop <n>       丢弃前n个值，n为任意整数，非正数时不丢弃。
    Drop(Integer),
    /// :where <cond>   只保留满足条件的值。
    Where(Cond),
    /// :where-ne <value>[ nocase]
    ///                 只保留不等于<value>的值。
    WhereNe { value: String, nocase: bool },
    /// :until <cond>   保留首个满足条件的值之前的所有值。
    Until(Cond),
    /// :until-eq <value>[ nocase]
    ///                 保留首个等于<value>的值之前的所有值。
    UntilEq { value: String, nocase: bool },
    /// :upper          转为ASCII大写。
    /// :lower          转为ASCII小写。
    /// :case           切换ASCII大小写。
    Case(CaseArg),
    /// :replace <from> <to>[ <count>][ nocase]
    ///                 替换子串，<count>为每个值最多替换的次数。
    Replace(ReplaceArg),
    /// :len            转为字符数量。
    Len,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum CaseArg {
    Upper,
    Lower,
    Switch,
}

impl CaseArg {
    fn apply(self, item: &str) -> String {
        match self {
            CaseArg::Upper => item.to_ascii_uppercase(),
            CaseArg::Lower => item.to_ascii_lowercase(),
            CaseArg::Switch => item
                .chars()
                .map(|c| match c {
                    'A'..='Z' => c.to_ascii_lowercase(),
                    'a'..='z' => c.to_ascii_uppercase(),
                    _ => c,
                })
                .collect(),
        }
    }
}

fn text_eq(left: &str, right: &str, nocase: bool) -> bool {
    if nocase { UniCase::new(left) == UniCase::new(right) } else { left == right }
}

/// 按顺序为每个操作包装一层适配器，然后把完整的游标链交给`finish`。
///
/// 适配器只借用上游，所以每一层都放在自己的栈帧上，直到`finish`返回才释放。
pub(crate) fn drain(
    cursor: &mut dyn Transfer<Item = String>, ops: &[Op], configs: &[Config], finish: &mut Finish<'_>,
) -> Result<(), RlqErr> {
    let Some((op, rest)) = ops.split_first() else {
        return finish(cursor);
    };
    debug!(?op, remaining = rest.len(), "wrapping cursor");
    match op {
        Op::Take(amount) => drain(&mut Take::new(cursor, *amount), rest, configs, finish),
        Op::Drop(count) => drain(&mut Skip::new(cursor, *count), rest, configs, finish),
        Op::Where(cond) => drain(&mut Filter::new(cursor, |item: &String| cond.test(item)), rest, configs, finish),
        Op::WhereNe { value, nocase } => {
            let nocase = is_nocase(*nocase, configs);
            drain(&mut Filter::new(cursor, |item: &String| !text_eq(item, value, nocase)), rest, configs, finish)
        }
        Op::Until(cond) => drain(&mut Until::new(cursor, |item: &String| cond.test(item)), rest, configs, finish),
        Op::UntilEq { value, nocase } => {
            let nocase = is_nocase(*nocase, configs);
            drain(&mut Until::new(cursor, |item: &String| text_eq(item, value, nocase)), rest, configs, finish)
        }
        Op::Case(case_arg) => {
            drain(&mut Select::new(cursor, |item: &String| case_arg.apply(item)), rest, configs, finish)
        }
        Op::Replace(replace_arg) => drain(
            &mut Select::new(cursor, |item: &String| replace_arg.replace(item, configs).into_owned()),
            rest,
            configs,
            finish,
        ),
        Op::Len => {
            drain(&mut Select::new(cursor, |item: &String| item.chars().count().to_string()), rest, configs, finish)
        }
    }
}
