use crate::Integer;
use crate::err::RlqErr;
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use tracing::debug;

/// `:gen`最多生成的元素个数，生成结果会被完整读入内存。
pub(crate) const GEN_LIMIT: u128 = 10_000_000;

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Input {
    /// :in         从标准输入读取，每行一个值。
    ///             未指定输入命令时的默认输入。
    StdIn,
    /// :file <file>...
    ///             依次读取各个文件，每行一个值。
    File { files: Vec<String> },
    /// :of <value>...
    ///             直接使用字面值。
    Of { values: Vec<String> },
    /// :gen <start>,<end>[,<step>]
    ///             生成[start,end)内的整数，步长默认为1，负数步长时从尾部倒序生成。
    Gen { start: Integer, end: Integer, step: Integer },
}

impl Input {
    /// 读取全部值，叶子游标借用读取结果。
    pub(crate) fn read(self) -> Result<Vec<String>, RlqErr> {
        match self {
            Input::StdIn => read_lines(io::stdin().lock()).map_err(|err| RlqErr::ReadFromStdInErr(err.to_string())),
            Input::File { files } => {
                let mut values = vec![];
                for file in files {
                    let reader = File::open(&file)
                        .map(BufReader::new)
                        .map_err(|err| RlqErr::OpenFileErr { file: file.clone(), err: err.to_string() })?;
                    let lines = read_lines(reader)
                        .map_err(|err| RlqErr::ReadFromFileErr { file: file.clone(), err: err.to_string() })?;
                    debug!(file, lines = lines.len(), "file loaded");
                    values.extend(lines);
                }
                Ok(values)
            }
            Input::Of { values } => Ok(values),
            Input::Gen { start, end, step } => Ok(gen_range(start, end, step).map(|i| i.to_string()).collect()),
        }
    }
}

fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// `:gen`将要生成的元素个数。
pub(crate) fn gen_len(start: Integer, end: Integer, step: Integer) -> u128 {
    if start >= end {
        return 0;
    }
    let span = (i128::from(end) - i128::from(start)).unsigned_abs();
    span.div_ceil(u128::from(step.unsigned_abs().max(1)))
}

/// 步长为0时解析阶段已拒绝，此处视为1。
fn gen_range(start: Integer, end: Integer, step: Integer) -> Box<dyn Iterator<Item = Integer>> {
    let by = usize::try_from(step.unsigned_abs()).unwrap_or(usize::MAX).max(1);
    if step < 0 { Box::new((start..end).rev().step_by(by)) } else { Box::new((start..end).step_by(by)) }
}
