use time::OffsetDateTime;
use time::macros::format_description;

fn main() {
    // build.rs 改变时重新运行
    println!("cargo:rerun-if-changed=build.rs");
    // 注入为环境变量，供主程序通过 env! 读取
    println!("cargo:rustc-env=BUILD_TIME={}", get_build_time());
}

fn get_build_time() -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    // 优先使用本地时间，失败则回退到 UTC
    if let Ok(local) = OffsetDateTime::now_local()
        && let Ok(formatted) = local.format(format)
    {
        return formatted;
    }
    match OffsetDateTime::now_utc().format(format) {
        Ok(formatted) => format!("{formatted} (UTC)"),
        Err(_) => "unknown-build-time".to_string(),
    }
}
