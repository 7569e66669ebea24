//! # alloyparam - 化合物半导体合金参数库
//!
//! 为外部器件仿真器逐网格节点提供材料参数：禁带、复折射率、载流子迁移率、
//! 介电常数、复合寿命与复合系数。合金常数由两个二元端元按组分插值，
//! 再经温度、掺杂和电场标度得到。
//!
//! ## 分层
//! - `materials/`: 端元常数表与合金体系注册表（只读静态数据）
//! - `physics/`: 插值规则与各物理模型（纯函数）
//! - `query/`: 查询上下文、边界校验与查询引擎
//! - `abi`: 宿主固定位置参数签名的安全适配层
//! - `ffi`: `extern "C"` 导出（`ffi` feature）
//! - `cli/`, `commands/`, `sweep/`, `utils/`: 命令行工具
//!
//! ## 依赖关系
//! ```text
//! ffi.rs ── abi.rs ── query/ ── physics/ ── materials/
//! main.rs ── cli/ ── commands/ ──┬── query/
//!                                ├── sweep/   (rayon, csv, plotters)
//!                                └── utils/   (colored, indicatif)
//! error.rs: 被所有模块使用
//! ```

pub mod abi;
pub mod cli;
pub mod commands;
pub mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod materials;
pub mod physics;
pub mod query;
pub mod sweep;
pub mod utils;

pub use error::{AlloyError, QueryError, Result};
pub use materials::{get_system, AlloySystem, Carrier};
pub use query::{GapSource, ParameterEngine, ParameterSet, QueryContext};
