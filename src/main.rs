//! # alloyparam 命令行工具
//!
//! ## 子命令
//! - `query` - 单点求出全部材料参数
//! - `sweep` - 沿组分、温度、掺杂或波长扫描并导出
//! - `constants` - 打印端元常数表
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   └── utils/      (终端输出)
//! ```

use alloyparam::cli::Cli;
use alloyparam::{commands, utils};

use clap::Parser;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
