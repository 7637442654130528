use crate::config::{Config, is_nocase};
use std::borrow::Cow;

/// `:replace`的参数，按字面子串替换。
#[derive(Debug, PartialEq)]
pub(crate) struct ReplaceArg {
    /// 忽略大小写时已转为ASCII小写
    from: String,
    to: String,
    /// 每个值最多替换的次数，未指定时全部替换
    count: Option<usize>,
    nocase: bool,
}

impl ReplaceArg {
    pub(crate) fn new(from: String, to: String, count: Option<usize>, nocase: bool) -> Self {
        let from = if nocase { from.to_ascii_lowercase() } else { from };
        ReplaceArg { from, to, count, nocase }
    }

    /// 没有发生替换时借用原值，避免分配。
    pub(crate) fn replace<'a>(&self, text: &'a str, configs: &[Config]) -> Cow<'a, str> {
        let nocase = is_nocase(self.nocase, configs);
        let lowered;
        let haystack = if nocase {
            lowered = text.to_ascii_lowercase();
            lowered.as_str()
        } else {
            text
        };
        // ASCII小写转换不改变字节偏移，下标可以直接用于原值
        let from = if nocase && !self.nocase {
            Cow::Owned(self.from.to_ascii_lowercase())
        } else {
            Cow::Borrowed(self.from.as_str())
        };
        let mut matches = haystack.match_indices(&*from).take(self.count.unwrap_or(usize::MAX)).peekable();
        if matches.peek().is_none() {
            return Cow::Borrowed(text);
        }
        let mut replaced = String::with_capacity(text.len());
        let mut tail = 0;
        for (start, found) in matches {
            replaced.push_str(&text[tail..start]);
            replaced.push_str(&self.to);
            tail = start + found.len();
        }
        replaced.push_str(&text[tail..]);
        Cow::Owned(replaced)
    }
}
