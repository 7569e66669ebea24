//! # 参数扫描模块
//!
//! 沿一个变量（组分、温度、掺杂、波长）批量求值并导出。
//!
//! ## 子模块
//! - `grid`: 范围解析与采样点
//! - `runner`: 并行求值
//! - `export`: CSV / XY 导出
//! - `plot`: PNG / SVG 曲线
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 调用
//! - 使用 `query/` 引擎

pub mod export;
pub mod grid;
pub mod plot;
pub mod runner;

pub use grid::SweepRange;
pub use runner::{SweepPoint, SweepResult, SweepRunner};

use crate::cli::sweep::{SweepAxis, SweepQuantity};
use crate::query::{ParameterSet, QueryContext};

/// 把扫描变量的取值写入查询上下文
pub fn context_at(base: &QueryContext, axis: SweepAxis, value: f64) -> QueryContext {
    let mut ctx = *base;
    match axis {
        SweepAxis::X => ctx.x = value,
        SweepAxis::Temp => ctx.temperature = value,
        SweepAxis::Doping => ctx.donors = value,
        SweepAxis::Wavelength => ctx.wavelength = value,
    }
    ctx
}

/// 取出指定物理量
pub fn quantity_value(quantity: SweepQuantity, set: &ParameterSet) -> f64 {
    match quantity {
        SweepQuantity::Eg => set.band.bandgap,
        SweepQuantity::EgT => set.band.bandgap_at_temperature,
        SweepQuantity::Affinity => set.band.affinity,
        SweepQuantity::Degdt => set.band.degdt,
        SweepQuantity::N => set.optical.n,
        SweepQuantity::K => set.optical.k,
        SweepQuantity::Alpha => set.optical.absorption,
        SweepQuantity::Mun => set.electron_mobility,
        SweepQuantity::Mup => set.hole_mobility,
        SweepQuantity::Eps => set.permittivity,
        SweepQuantity::Copt => set.copt,
        SweepQuantity::Augn => set.augn,
        SweepQuantity::Augp => set.augp,
    }
}

/// 成功点的 (扫描值, 物理量) 序列
pub fn series(result: &SweepResult, quantity: SweepQuantity) -> Vec<(f64, f64)> {
    result
        .successes()
        .map(|(value, set)| (value, quantity_value(quantity, set)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::tables::INGAN;
    use crate::query::{GapSource, ParameterEngine};

    #[test]
    fn test_context_at_sets_only_the_axis() {
        let base = QueryContext::new(0.2, 300.0)
            .with_doping(1e16, 1e15)
            .with_wavelength(0.6);

        let ctx = context_at(&base, SweepAxis::Temp, 450.0);
        assert_eq!(ctx.temperature, 450.0);
        assert_eq!(ctx.x, 0.2);

        let ctx = context_at(&base, SweepAxis::Doping, 1e18);
        assert_eq!(ctx.donors, 1e18);
        assert_eq!(ctx.acceptors, 1e15);

        let ctx = context_at(&base, SweepAxis::Wavelength, 0.4);
        assert_eq!(ctx.wavelength, 0.4);
        assert_eq!(context_at(&base, SweepAxis::X, 0.9).x, 0.9);
    }

    #[test]
    fn test_quantity_value() {
        let set = ParameterEngine::new(&INGAN)
            .evaluate_all(&QueryContext::new(0.5, 300.0), GapSource::Reference)
            .unwrap();
        assert_eq!(quantity_value(SweepQuantity::Eg, &set), set.band.bandgap);
        assert_eq!(quantity_value(SweepQuantity::K, &set), set.optical.k);
        assert_eq!(quantity_value(SweepQuantity::Eps, &set), set.permittivity);
    }

    #[test]
    fn test_series_skips_failed_points() {
        let engine = ParameterEngine::new(&INGAN);
        let base = QueryContext::default();
        let result = SweepRunner::new(1)
            .run(&[0.0, 2.0, 1.0], |x| {
                engine.evaluate_all(&context_at(&base, SweepAxis::X, x), GapSource::Reference)
            })
            .unwrap();

        let s = series(&result, SweepQuantity::Eg);
        assert_eq!(s, vec![(0.0, 3.42), (1.0, 0.7)]);
    }
}
