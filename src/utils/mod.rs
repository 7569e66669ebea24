//! # 工具函数模块
//!
//! 终端美化输出与进度条。
//!
//! ## 依赖关系
//! - 被 `commands/`、`sweep/` 模块使用
//! - 子模块: output, progress

pub mod output;
pub mod progress;
