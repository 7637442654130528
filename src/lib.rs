//! # rlinq: lazy cursor adapters over borrowed sequences
//!
//! 以拉取式游标为核心的惰性序列处理库。叶子游标[`RangeCursor`]包装外部拥有的切片，
//! 适配器（[`Take`]、[`Skip`]、[`Filter`]、[`Select`]、[`Until`]）通过可变借用串联上游游标，
//! 直到终端消费者（[`Transfer::materialize`]、[`Transfer::copy_into`]）拉取时才真正执行。
//!
//! ```
//! use rlinq::{from, Cursor, Transfer};
//!
//! let source = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
//! let result = from(&source).skip(2).take(8).select(|x| x * 3).filter(|x| x % 3 == 0).materialize();
//! assert_eq!(result, vec![9, 12, 15, 18, 21, 24, 27, 30]);
//! ```
//!
//! 同一套游标也驱动命令行工具`rlq`，见[`run`]。

use crate::config::Config;
use std::iter::Peekable;
use std::str::FromStr;
use tracing::debug;

pub mod adapter;
mod condition;
mod config;
mod cursor;
mod err;
mod help;
mod input;
mod op;
mod output;
mod parse;
pub(crate) mod print;
mod range;

pub use adapter::{Filter, Select, Skip, Take, Until};
pub use cursor::{Cursor, Transfer};
pub use err::RlqErr;
pub use range::{from, from_range, RangeCursor};

pub(crate) type Integer = i64;
pub(crate) type Float = f64;

#[derive(Debug, Copy, Clone)]
pub(crate) enum Num {
    Integer(Integer),
    Float(Float),
}

impl From<Integer> for Num {
    fn from(i: Integer) -> Num {
        Num::Integer(i)
    }
}

impl From<Float> for Num {
    fn from(f: Float) -> Num {
        Num::Float(f)
    }
}

impl FromStr for Num {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(i) = s.parse::<Integer>() {
            Ok(Num::Integer(i))
        } else if let Ok(f) = s.parse::<Float>()
            && f.is_finite()
        {
            Ok(Num::Float(f))
        } else {
            Err(())
        }
    }
}

impl PartialOrd for Num {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (Num::Integer(a), Num::Integer(b)) => a.partial_cmp(b),
            (Num::Float(a), Num::Float(b)) => a.partial_cmp(b),
            (Num::Integer(a), Num::Float(b)) => (*a as Float).partial_cmp(b),
            (Num::Float(a), Num::Integer(b)) => a.partial_cmp(&(*b as Float)),
        }
    }
}

impl PartialEq for Num {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(std::cmp::Ordering::Equal)
    }
}

/// 解析命令行参数，读取输入，构建游标链并输出结果。
pub fn run(mut args: Peekable<impl Iterator<Item = String>>) -> Result<(), RlqErr> {
    let configs = parse::args::parse_configs(&mut args);
    config::init_logging(&configs);
    if configs.contains(&Config::Help) {
        help::print_help(args.next());
        return Ok(());
    } else if configs.contains(&Config::Version) {
        help::print_version();
        return Ok(());
    }
    let (input, ops, output) = parse::args::parse(args)?;
    if configs.contains(&Config::Verbose) {
        println!("{}", config::pipe_info(&input, &ops, &output));
    }
    if configs.contains(&Config::DryRun) {
        return Ok(());
    }
    let values = input.read()?;
    debug!(count = values.len(), "input loaded");
    let mut leaf = from(&values);
    op::drain(&mut leaf, &ops, &configs, &mut |cursor: &mut dyn Transfer<Item = String>| output.handle(cursor))
}
