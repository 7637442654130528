/// 向标准错误输出一行，终端下以红色显示。
#[macro_export]
macro_rules! println_err {
    () => {};
    ($($arg:tt)*) => {
        if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
            eprintln!("\x1b[1;31m{}\x1b[0m", format_args!($($arg)*));
        } else {
            eprintln!($($arg)*);
        }
    };
}
