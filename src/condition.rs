use crate::err::RlqErr;
use crate::{Float, Integer, Num};
use regex::Regex;

/// 条件，用于`:where`和`:until`的谓词。
#[derive(Debug, Clone)]
pub(crate) struct Cond {
    kind: CondKind,
    not: bool,
}

#[derive(Debug, Clone)]
pub(crate) enum CondKind {
    /// len <min>,<max>     字符数量在范围内，最小值和最大值至少指定其一。
    TextLenRange { min: Option<usize>, max: Option<usize> },
    /// len =<len>          字符数量等于给定值。
    TextLenSpec { spec: usize },
    /// num <min>,<max>     数值在范围内，无法解析为数值时不满足。
    NumRange { min: Option<Num>, max: Option<Num> },
    /// num =<value>        数值等于给定值，无法解析为数值时不满足。
    NumSpec { spec: Num },
    /// num[ integer|float] 可以解析为数值、整数或浮点数。
    Number { is_integer: Option<bool> },
    /// upper|lower         不含小写或大写字符。
    TextAllCase { upper: bool },
    /// empty|blank         没有任何字符或全部为空白字符。
    TextEmptyOrBlank { empty: bool },
    /// reg <exp>           整体匹配给定的正则表达式。
    RegMatch(Regex),
}

impl PartialEq for CondKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CondKind::TextLenRange { min: l_min, max: l_max }, CondKind::TextLenRange { min: r_min, max: r_max }) => {
                l_min == r_min && l_max == r_max
            }
            (CondKind::TextLenSpec { spec: l }, CondKind::TextLenSpec { spec: r }) => l == r,
            (CondKind::NumRange { min: l_min, max: l_max }, CondKind::NumRange { min: r_min, max: r_max }) => {
                l_min == r_min && l_max == r_max
            }
            (CondKind::NumSpec { spec: l }, CondKind::NumSpec { spec: r }) => l == r,
            (CondKind::Number { is_integer: l }, CondKind::Number { is_integer: r }) => l == r,
            (CondKind::TextAllCase { upper: l }, CondKind::TextAllCase { upper: r }) => l == r,
            (CondKind::TextEmptyOrBlank { empty: l }, CondKind::TextEmptyOrBlank { empty: r }) => l == r,
            // Regex 比较模式字符串
            (CondKind::RegMatch(l), CondKind::RegMatch(r)) => l.as_str() == r.as_str(),
            _ => false,
        }
    }
}

impl PartialEq for Cond {
    fn eq(&self, other: &Self) -> bool {
        self.not == other.not && self.kind == other.kind
    }
}

impl CondKind {
    pub(crate) fn new_reg_match(regex: &str) -> Result<CondKind, RlqErr> {
        let reg = format!(r"\A(?:{regex})\z");
        Regex::new(&reg).map(CondKind::RegMatch).map_err(|err| RlqErr::ParseRegexErr { reg, err: err.to_string() })
    }

    fn test(&self, input: &str) -> bool {
        match self {
            CondKind::TextLenRange { min, max } => in_range(input.chars().count(), min, max),
            CondKind::TextLenSpec { spec } => input.chars().count() == *spec,
            CondKind::NumRange { min, max } => input.parse::<Num>().is_ok_and(|num| in_range(num, min, max)),
            CondKind::NumSpec { spec } => input.parse::<Num>().is_ok_and(|num| num == *spec),
            CondKind::Number { is_integer } => match is_integer {
                Some(true) => input.parse::<Integer>().is_ok(),
                Some(false) => input.parse::<Integer>().is_err() && is_finite_float(input),
                None => is_finite_float(input),
            },
            CondKind::TextAllCase { upper: true } => !input.chars().any(char::is_lowercase),
            CondKind::TextAllCase { upper: false } => !input.chars().any(char::is_uppercase),
            CondKind::TextEmptyOrBlank { empty: true } => input.is_empty(),
            CondKind::TextEmptyOrBlank { empty: false } => input.chars().all(char::is_whitespace),
            CondKind::RegMatch(regex) => regex.is_match(input),
        }
    }
}

fn in_range<T: PartialOrd>(value: T, min: &Option<T>, max: &Option<T>) -> bool {
    min.as_ref().is_none_or(|min| value >= *min) && max.as_ref().is_none_or(|max| value <= *max)
}

fn is_finite_float(input: &str) -> bool {
    input.parse::<Float>().is_ok_and(Float::is_finite)
}

impl Cond {
    pub(crate) fn new(kind: CondKind, not: bool) -> Cond {
        Cond { kind, not }
    }

    pub(crate) fn test(&self, input: &str) -> bool {
        self.kind.test(input) != self.not
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cond(kind: CondKind) -> Cond {
        Cond::new(kind, false)
    }

    fn not(kind: CondKind) -> Cond {
        Cond::new(kind, true)
    }

    #[test]
    fn test_text_len_range() {
        let range = CondKind::TextLenRange { min: Some(3), max: Some(5) };
        assert!(!cond(range.clone()).test("12"));
        assert!(cond(range.clone()).test("123"));
        assert!(cond(range.clone()).test("12345"));
        assert!(!cond(range.clone()).test("123456"));
        assert!(cond(range.clone()).test("你好世界"));
        assert!(not(range.clone()).test("12"));
        assert!(!not(range).test("1234"));
        assert!(cond(CondKind::TextLenRange { min: Some(3), max: None }).test("123456"));
        assert!(cond(CondKind::TextLenRange { min: None, max: Some(3) }).test(""));
        assert!(!cond(CondKind::TextLenRange { min: None, max: Some(3) }).test("1234"));
    }

    #[test]
    fn test_text_len_spec() {
        assert!(cond(CondKind::TextLenSpec { spec: 0 }).test(""));
        assert!(!cond(CondKind::TextLenSpec { spec: 0 }).test("1"));
        assert!(cond(CondKind::TextLenSpec { spec: 3 }).test("123"));
        assert!(not(CondKind::TextLenSpec { spec: 3 }).test("1234"));
    }

    #[test]
    fn test_num_range() {
        let range = CondKind::NumRange { min: Some(Num::from(3)), max: Some(Num::from(5.5)) };
        assert!(!cond(range.clone()).test("2"));
        assert!(cond(range.clone()).test("3"));
        assert!(cond(range.clone()).test("5.5"));
        assert!(!cond(range.clone()).test("6"));
        assert!(!cond(range.clone()).test("abc"));
        assert!(!cond(range.clone()).test("nan"));
        assert!(!cond(range.clone()).test(""));
        assert!(not(range.clone()).test("6"));
        assert!(not(range).test("abc"));
        assert!(cond(CondKind::NumRange { min: None, max: Some(Num::from(0)) }).test("-12"));
    }

    #[test]
    fn test_num_spec() {
        assert!(cond(CondKind::NumSpec { spec: Num::from(3) }).test("3"));
        assert!(cond(CondKind::NumSpec { spec: Num::from(3) }).test("3.0"));
        assert!(!cond(CondKind::NumSpec { spec: Num::from(3) }).test("3.1"));
        assert!(!cond(CondKind::NumSpec { spec: Num::from(3.0) }).test("inf"));
        assert!(not(CondKind::NumSpec { spec: Num::from(3) }).test("4"));
    }

    #[test]
    fn test_number() {
        assert!(cond(CondKind::Number { is_integer: None }).test("123"));
        assert!(cond(CondKind::Number { is_integer: None }).test("123.1"));
        assert!(!cond(CondKind::Number { is_integer: None }).test("inf"));
        assert!(!cond(CondKind::Number { is_integer: None }).test("abc"));
        assert!(cond(CondKind::Number { is_integer: Some(true) }).test("-123"));
        assert!(!cond(CondKind::Number { is_integer: Some(true) }).test("123.0"));
        assert!(cond(CondKind::Number { is_integer: Some(false) }).test("123.0"));
        assert!(!cond(CondKind::Number { is_integer: Some(false) }).test("123"));
        assert!(not(CondKind::Number { is_integer: None }).test("NaN"));
    }

    #[test]
    fn test_text_all_case() {
        assert!(!cond(CondKind::TextAllCase { upper: true }).test("abc"));
        assert!(cond(CondKind::TextAllCase { upper: true }).test("ABC"));
        assert!(cond(CondKind::TextAllCase { upper: true }).test("你好123.#!@"));
        assert!(cond(CondKind::TextAllCase { upper: false }).test("abc"));
        assert!(!cond(CondKind::TextAllCase { upper: false }).test("abcABC"));
    }

    #[test]
    fn test_text_empty_or_blank() {
        assert!(cond(CondKind::TextEmptyOrBlank { empty: true }).test(""));
        assert!(!cond(CondKind::TextEmptyOrBlank { empty: true }).test(" "));
        assert!(cond(CondKind::TextEmptyOrBlank { empty: false }).test(""));
        assert!(cond(CondKind::TextEmptyOrBlank { empty: false }).test(" \n\t\r "));
        assert!(!cond(CondKind::TextEmptyOrBlank { empty: false }).test(" a "));
    }

    #[test]
    fn test_reg_match() {
        assert!(CondKind::new_reg_match(r"[").is_err());
        assert!(cond(CondKind::new_reg_match(r"\d+").unwrap()).test("123"));
        assert!(!cond(CondKind::new_reg_match(r"\d+").unwrap()).test("123abc"));
        assert!(!cond(CondKind::new_reg_match(r"\d+").unwrap()).test("123\n123"));
        assert!(not(CondKind::new_reg_match(r"\d+").unwrap()).test("abc"));
    }
}
