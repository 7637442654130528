use crate::cursor::Transfer;
use crate::err::RlqErr;
use std::fs::OpenOptions;
use std::io;
use std::io::{BufWriter, Write};
use std::ops::ControlFlow;
use tracing::debug;

/// `:to head`的缓冲区按块增长，每块最多这么多个槽位。
const HEAD_CHUNK: usize = 1024;

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Output {
    /// :to out     输出到标准输出。
    ///             未指定输出命令时的默认输出。
    StdOut,
    /// :to file <file_name>[ append][ lf|crlf]
    ///             输出到文件，默认覆盖，默认换行符为'LF'。
    File { file: String, append: bool, crlf: Option<bool> },
    /// :to count   只输出元素数量。
    Count,
    /// :to head <n>
    ///             最多输出前n个元素，先写入按块增长的缓冲区再输出，缓冲区不会超过实际拉取到的元素个数。
    Head(usize),
}

impl Output {
    /// 拉取游标链并写出结果。
    pub(crate) fn handle(&self, cursor: &mut dyn Transfer<Item = String>) -> Result<(), RlqErr> {
        match self {
            Output::File { file, append, crlf } => {
                let writer = OpenOptions::new()
                    .write(true)
                    .truncate(!append)
                    .append(*append)
                    .create(true)
                    .open(file)
                    .map_err(|err| RlqErr::OpenFileErr { file: file.clone(), err: err.to_string() })?;
                let ending = if crlf.unwrap_or(false) { "\r\n" } else { "\n" };
                self.write_to(cursor, &mut BufWriter::new(writer), file, ending)
            }
            _ => self.write_to(cursor, &mut io::stdout().lock(), "stdout", "\n"),
        }
    }

    fn write_to(
        &self, cursor: &mut dyn Transfer<Item = String>, writer: &mut impl Write, target: &str, ending: &str,
    ) -> Result<(), RlqErr> {
        let write_err = |item: &str, err: io::Error| RlqErr::WriteErr {
            target: target.to_string(),
            item: item.to_string(),
            err: err.to_string(),
        };
        match self {
            Output::Count => {
                let count = cursor.for_each(&mut |_| ControlFlow::Continue(())).to_string();
                write!(writer, "{count}{ending}").map_err(|err| write_err(&count, err))?;
            }
            Output::Head(limit) => {
                let mut buffer = Vec::new();
                while buffer.len() < *limit {
                    let filled = buffer.len();
                    let chunk = (*limit - filled).min(HEAD_CHUNK);
                    buffer.resize(filled + chunk, String::new());
                    let written = cursor.fill(&mut buffer[filled..].iter_mut());
                    buffer.truncate(filled + written);
                    if written < chunk {
                        break;
                    }
                }
                for item in &buffer {
                    write!(writer, "{item}{ending}").map_err(|err| write_err(item, err))?;
                }
            }
            Output::StdOut | Output::File { .. } => {
                let mut failed = None;
                let count = cursor.for_each(&mut |item: String| match write!(writer, "{item}{ending}") {
                    Ok(()) => ControlFlow::Continue(()),
                    Err(err) => {
                        failed = Some(write_err(&item, err));
                        ControlFlow::Break(())
                    }
                });
                if let Some(err) = failed {
                    return Err(err);
                }
                debug!(count, target, "items written");
            }
        }
        writer.flush().map_err(|err| write_err("", err))
    }
}
