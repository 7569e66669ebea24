//! # query 子命令 CLI 定义
//!
//! 查询点参数（`PointArgs`）同时被 `sweep` 复用。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs`、`cli/sweep.rs` 使用
//! - 参数传递给 `commands/query.rs`

use crate::query::QueryContext;

use clap::Args;

/// 查询点参数
#[derive(Args, Debug, Clone)]
pub struct PointArgs {
    /// Material system (ingan, czts)
    #[arg(short, long, env = "ALLOYPARAM_MATERIAL", default_value = "ingan")]
    pub material: String,

    /// Composition fraction x of the first end-member (InN for InGaN)
    #[arg(short, long, default_value_t = 0.0)]
    pub x: f64,

    /// Second composition fraction y (reserved for quaternary alloys)
    #[arg(short, long, default_value_t = 0.0)]
    pub y: f64,

    /// Temperature in K
    #[arg(short = 'T', long = "temp", default_value_t = 300.0)]
    pub temperature: f64,

    /// Donor concentration Nd in cm^-3
    #[arg(long, default_value_t = 0.0)]
    pub nd: f64,

    /// Acceptor concentration Na in cm^-3
    #[arg(long, default_value_t = 0.0)]
    pub na: f64,

    /// Optical wavelength in um
    #[arg(short, long, default_value_t = 0.5)]
    pub wavelength: f64,

    /// Electric field magnitude in V/cm (high-field mobility)
    #[arg(long, default_value_t = 0.0)]
    pub field: f64,
}

impl PointArgs {
    /// 组装查询上下文
    pub fn context(&self) -> QueryContext {
        QueryContext::new(self.x, self.temperature)
            .with_y(self.y)
            .with_doping(self.nd, self.na)
            .with_wavelength(self.wavelength)
            .with_field(self.field)
    }
}

/// query 子命令参数
#[derive(Args, Debug)]
pub struct QueryArgs {
    #[command(flatten)]
    pub point: PointArgs,

    /// Use the temperature-corrected (Varshni) bandgap for the optical index
    #[arg(long, default_value_t = false)]
    pub varshni_gap: bool,
}
