//! # 参数查询分发
//!
//! 宿主器件仿真器与物理模型之间的请求/响应层。
//!
//! ## 子模块
//! - `context`: 查询上下文与边界校验
//! - `engine`: 每个物理量一个入口的查询引擎
//!
//! ## 依赖关系
//! - 被 `abi.rs`、`ffi.rs`、`commands/`、`sweep/` 调用
//! - 使用 `physics/`、`materials/`

pub mod context;
pub mod engine;

pub use context::QueryContext;
pub use engine::{BandStructure, GapSource, ParameterEngine, ParameterSet};
