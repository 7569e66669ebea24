//! # constants 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/constants.rs`

use clap::Args;

/// constants 子命令参数
#[derive(Args, Debug)]
pub struct ConstantsArgs {
    /// Material system to print (all systems if omitted)
    #[arg(short, long)]
    pub material: Option<String>,
}
