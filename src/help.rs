use crate::err::EXIT_CODES;

const OPTIONS_HELP: &str = "    -h,--help       打印帮助信息。
                    -h|--help[ opt|in|op|cond|out|code]
    -V,--version    打印版本信息。
    -v,--verbose    执行之前打印流水线详情，并输出调试日志。
                    设置环境变量RLQ_LOG时以RLQ_LOG为准。
    -d,--dry-run    仅解析流水线，不执行。
    -n,--nocase     全局忽略大小写。";

const INPUT_HELP: &str = "    :in         从标准输入读取，每行一个值。
                未指定输入命令时的默认输入。
    :file       依次读取各个文件，每行一个值。
                :file <file_name>[ <file_name>...]
    :of         直接使用字面值，以`:`开头的值需要写作`::`。
                :of <value>[ <value>...]
    :gen        生成[start,end)内的整数，步长默认为1。
                生成结果会在执行前全部读入内存，最多生成10000000个整数。
                :gen <start>,<end>[,<step>]
                    <step>  不能为0，负数时从尾部倒序生成。
                例如：
                    :gen 1,13
                    :gen 0,10,2
                    :gen 0,10,-1";

const OP_HELP: &str = "    :take       最多保留前n个值，n为任意整数，非正数时结果为空。
                :take <n>
    :drop       丢弃前n个值，n为任意整数，非正数时不丢弃。
                :drop <n>
    :where      只保留满足条件的值。
                :where <cond>
    :where-ne   只保留不等于<value>的值。
                :where-ne <value>[ nocase]
    :until      保留首个满足条件的值之前的所有值，之后的值不再读取。
                :until <cond>
    :until-eq   保留首个等于<value>的值之前的所有值。
                :until-eq <value>[ nocase]
    :upper      转为ASCII大写。
    :lower      转为ASCII小写。
    :case       切换ASCII大小写。
    :replace    替换子串。
                :replace <from> <to>[ <count>][ nocase]
                    <count> 每个值最多替换的次数，未指定时全部替换。
    :len        转为字符数量。";

const COND_HELP: &str = "    条件前可以加`not`取反：[not ]<cond>
    len <min>,<max>     字符数量在范围内，最小值和最大值至少指定其一。
    len =<len>          字符数量等于给定值。
    num <min>,<max>     数值在范围内，无法解析为数值时不满足。
    num =<value>        数值等于给定值，无法解析为数值时不满足。
    num[ integer|float] 可以解析为数值、整数或浮点数。
    upper               不含小写字符。
    lower               不含大写字符。
    empty               没有任何字符。
    blank               全部为空白字符。
    reg <exp>           整体匹配给定的正则表达式。
    例如：
        :where len 2,
        :where not num =3
        :until reg '\\d+x'";

const OUTPUT_HELP: &str = "    :to out     输出到标准输出。
                未指定输出命令时的默认输出。
    :to file    输出到文件。
                :to file <file_name>[ append][ lf|crlf]
                    append      追加输出而不是覆盖。
                    lf|crlf     换行符，默认为'LF'。
    :to count   只输出元素数量。
    :to head    最多输出前n个元素。
                :to head <n>";

pub(crate) fn print_version() {
    println!("rlq (rust linq) - {} - {}", env!("CARGO_PKG_VERSION"), env!("BUILD_TIME"));
}

pub(crate) fn print_help(topic: Option<String>) {
    match topic {
        Some(topic) => {
            print_general_help();
            match topic.to_ascii_lowercase().as_str() {
                "opt" | "options" => print_section("<options> 选项：", OPTIONS_HELP),
                "in" | "input" => print_section("<input_cmd> 数据输入命令：", INPUT_HELP),
                "op" => print_section("<op_cmd> 数据操作命令：", OP_HELP),
                "cond" | "condition" => print_section("<cond> 条件表达式：", COND_HELP),
                "out" | "output" => print_section("<output_cmd> 数据输出命令：", OUTPUT_HELP),
                "code" => print_code_help(),
                _ => (),
            }
        }
        None => print_all_help(),
    }
}

fn print_all_help() {
    print_general_help();
    print_section("<options> 选项：", OPTIONS_HELP);
    print_section("<input_cmd> 数据输入命令：", INPUT_HELP);
    print_section("<op_cmd> 数据操作命令：", OP_HELP);
    print_section("<cond> 条件表达式：", COND_HELP);
    print_section("<output_cmd> 数据输出命令：", OUTPUT_HELP);
    print_code_help();
}

fn print_general_help() {
    print_version();
    println!("\n{}", env!("CARGO_PKG_DESCRIPTION"));
    println!("\nUsage: rlq [<options>] [<input_cmd>] [<op_cmd>[ ...]] [<output_cmd>]");
}

fn print_section(title: &str, body: &str) {
    println!("\n{title}\n{body}");
}

fn print_code_help() {
    println!("\n命令退出码：");
    for (code, desc) in EXIT_CODES {
        println!("    {code:>2}  {desc}");
    }
}
