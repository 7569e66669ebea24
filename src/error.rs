//! # 统一错误处理模块
//!
//! 定义 alloyparam 的错误类型，使用 `thiserror` 派生。
//!
//! ## 两层错误
//! - `QueryError`: 单点物理查询的输入校验错误，每个变体对应一个非零状态码，
//!   由 `abi` 适配层直接返回给宿主器件仿真器
//! - `AlloyError`: 命令行工具层错误（文件、CSV、绘图、参数解析），包裹 `QueryError`
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 成功状态码
pub const STATUS_OK: i32 = 0;

/// 查询校验错误
///
/// 所有变体都是 `Copy` 的，查询路径上不分配内存。
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum QueryError {
    #[error("Composition fraction {name} = {value} is outside [0, 1]")]
    InvalidComposition { name: &'static str, value: f64 },

    #[error("Temperature must be positive, got {0} K")]
    NonPositiveTemperature(f64),

    #[error("Wavelength must be positive, got {0} um")]
    NonPositiveWavelength(f64),

    #[error("Binary constant {name} = {value} cannot enter harmonic mixing")]
    DegenerateBinaryConstant { name: &'static str, value: f64 },

    #[error("Concentration {name} = {value} must be non-negative")]
    NegativeConcentration { name: &'static str, value: f64 },

    #[error("Electric field magnitude must be non-negative, got {0} V/cm")]
    NegativeField(f64),

    #[error("Output slot {0} is a null pointer")]
    NullOutputSlot(&'static str),
}

impl QueryError {
    /// 返回给宿主的状态码（非零）
    pub fn status(&self) -> i32 {
        match self {
            QueryError::InvalidComposition { .. } => 1,
            QueryError::NonPositiveTemperature(_) => 2,
            QueryError::NonPositiveWavelength(_) => 3,
            QueryError::DegenerateBinaryConstant { .. } => 4,
            QueryError::NegativeConcentration { .. } | QueryError::NegativeField(_) => 5,
            QueryError::NullOutputSlot(_) => 6,
        }
    }
}

/// alloyparam 工具层统一错误类型
#[derive(Error, Debug)]
pub enum AlloyError {
    // ─────────────────────────────────────────────────────────────
    // 物理查询错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid query: {0}")]
    Query(#[from] QueryError),

    #[error("Unknown material system: {0}")]
    UnknownMaterial(String),

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // CSV / 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plotting failed: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AlloyError>;

/// 单点查询 Result 类型别名
pub type QueryResult<T> = std::result::Result<T, QueryError>;
