use crate::println_err;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RlqErr {
    #[error("[Arg Parse Err] Unable to parse `{arg_value}` in argument `{arg}` of cmd `{cmd}`, error: {error}")]
    ArgParseErr { cmd: &'static str, arg: &'static str, arg_value: String, error: String },

    #[error("[Bad Arg] Unexpected remaining value `{remaining}` in argument `{arg}` of cmd `{cmd}`")]
    UnexpectedRemaining { cmd: &'static str, arg: &'static str, remaining: String },

    #[error("[Missing Arg] Missing argument `{arg}` of cmd `{cmd}`")]
    MissingArg { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unknown arguments: {args:?}")]
    UnknownArgs { args: Vec<String> },

    #[error("[Regex] Invalid regular expression `{reg}`: {err}")]
    ParseRegexErr { reg: String, err: String },

    #[error("[Input] Unable to read from stdin: {0}")]
    ReadFromStdInErr(String),

    #[error("[Input] Unable to read file `{file}`: {err}")]
    ReadFromFileErr { file: String, err: String },

    #[error("[IO] Unable to open file `{file}`: {err}")]
    OpenFileErr { file: String, err: String },

    #[error("[Output] Unable to write `{item}` to `{target}`: {err}")]
    WriteErr { target: String, item: String, err: String },
}

/// 退出码说明，与`RlqErr::code`保持一致。
pub(crate) const EXIT_CODES: [(i32, &str); 9] = [
    (1, "参数无法解析"),
    (2, "参数解析后存在多余内容"),
    (3, "缺少必选参数"),
    (4, "存在无法识别的参数"),
    (5, "正则表达式无效"),
    (6, "读取标准输入失败"),
    (7, "读取文件失败"),
    (8, "打开文件失败"),
    (9, "写入输出失败"),
];

impl RlqErr {
    pub fn code(&self) -> i32 {
        match self {
            RlqErr::ArgParseErr { .. } => 1,
            RlqErr::UnexpectedRemaining { .. } => 2,
            RlqErr::MissingArg { .. } => 3,
            RlqErr::UnknownArgs { .. } => 4,
            RlqErr::ParseRegexErr { .. } => 5,
            RlqErr::ReadFromStdInErr(_) => 6,
            RlqErr::ReadFromFileErr { .. } => 7,
            RlqErr::OpenFileErr { .. } => 8,
            RlqErr::WriteErr { .. } => 9,
        }
    }

    /// 打印错误信息并以对应的退出码结束进程。
    pub fn termination(self) -> ! {
        println_err!("{self}");
        std::process::exit(self.code())
    }
}
