//! # 组分插值
//!
//! 由两个二元端元常数按摩尔分数 x 混合出合金常数。
//!
//! ## 混合规则
//! - 线性: P = x·P_A + (1-x)·P_B
//! - 弯曲修正: P = x·P_A + (1-x)·P_B - b·x·(1-x)
//! - 调和: 1/P = x/P_A + (1-x)/P_B
//!
//! x = 0 时精确返回 P_B，x = 1 时精确返回 P_A；两端元相同时对任意 x 精确返回该值。
//!
//! ## 依赖关系
//! - 被 `physics/` 各模型与 `query/` 调用
//! - 使用 `materials/` 的常数表

use crate::error::{QueryError, QueryResult};
use crate::materials::{AlloySystem, BinaryMaterialConstants};

/// 混合规则
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MixingRule {
    Linear,
    /// 带弯曲参数 b 的二次修正
    Bowing(f64),
    Harmonic,
}

impl MixingRule {
    /// 按规则混合两个端元值
    ///
    /// `name` 只用于调和混合的错误报告。
    pub fn mix(self, name: &'static str, x: f64, first: f64, second: f64) -> QueryResult<f64> {
        match self {
            MixingRule::Linear => Ok(linear(x, first, second)),
            MixingRule::Bowing(b) => Ok(bowed(x, first, second, b)),
            MixingRule::Harmonic => harmonic(name, x, first, second),
        }
    }
}

/// 线性混合
pub fn linear(x: f64, first: f64, second: f64) -> f64 {
    if first == second {
        return first;
    }
    (x * first) + ((1.0 - x) * second)
}

/// 弯曲修正混合
pub fn bowed(x: f64, first: f64, second: f64, bowing: f64) -> f64 {
    linear(x, first, second) - (bowing * x * (1.0 - x))
}

/// 调和（倒数）混合
///
/// 任一端元 <= 0 视为前置条件违例。
pub fn harmonic(name: &'static str, x: f64, first: f64, second: f64) -> QueryResult<f64> {
    for value in [first, second] {
        if !(value > 0.0) {
            return Err(QueryError::DegenerateBinaryConstant { name, value });
        }
    }

    // 端点直接返回端元值，避免 1/(1/P) 的舍入
    if first == second || x == 1.0 {
        return Ok(first);
    }
    if x == 0.0 {
        return Ok(second);
    }

    Ok(1.0 / ((x / first) + ((1.0 - x) / second)))
}

/// 某一合金体系在固定组分下的混合器
#[derive(Debug, Clone, Copy)]
pub struct Composition<'a> {
    x: f64,
    first: &'a BinaryMaterialConstants,
    second: &'a BinaryMaterialConstants,
}

impl<'a> Composition<'a> {
    /// 创建混合器（x 的范围由调用方校验）
    pub fn new(system: &'a AlloySystem, x: f64) -> Self {
        Self {
            x,
            first: &system.first,
            second: &system.second,
        }
    }

    /// 直接由两个端元创建
    pub fn between(
        first: &'a BinaryMaterialConstants,
        second: &'a BinaryMaterialConstants,
        x: f64,
    ) -> Self {
        Self { x, first, second }
    }

    /// 组分 x
    pub fn x(&self) -> f64 {
        self.x
    }

    /// 线性混合某一常数
    pub fn linear<F>(&self, field: F) -> f64
    where
        F: Fn(&BinaryMaterialConstants) -> f64,
    {
        linear(self.x, field(self.first), field(self.second))
    }

    /// 按给定规则混合某一常数
    pub fn mix<F>(&self, rule: MixingRule, name: &'static str, field: F) -> QueryResult<f64>
    where
        F: Fn(&BinaryMaterialConstants) -> f64,
    {
        rule.mix(name, self.x, field(self.first), field(self.second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::tables::{CZTS, GAN, INGAN, INN};

    #[test]
    fn test_endpoints_exact_for_every_rule() {
        let rules = [
            MixingRule::Linear,
            MixingRule::Bowing(1.43),
            MixingRule::Harmonic,
        ];
        let pairs = [(0.7, 3.42), (30.0, 55.0), (1100.0, 1000.0), (9.1e17, 2.3e18)];

        for rule in rules {
            for (a, b) in pairs {
                assert_eq!(rule.mix("p", 1.0, a, b).unwrap(), a, "{:?} at x=1", rule);
                assert_eq!(rule.mix("p", 0.0, a, b).unwrap(), b, "{:?} at x=0", rule);
            }
        }
    }

    #[test]
    fn test_bowing_symmetry_under_swap() {
        for i in 0..=20 {
            let x = i as f64 / 20.0;
            let forward = bowed(x, INN.eg300, GAN.eg300, 1.43);
            let swapped = bowed(1.0 - x, GAN.eg300, INN.eg300, 1.43);
            assert!(
                (forward - swapped).abs() < 1e-12,
                "x = {}: {} vs {}",
                x,
                forward,
                swapped
            );
        }
    }

    #[test]
    fn test_bowing_lowers_midpoint() {
        let mid = bowed(0.5, 0.7, 3.42, 1.43);
        assert!((mid - (2.06 - 1.43 * 0.25)).abs() < 1e-12);
    }

    #[test]
    fn test_harmonic_value() {
        // 1 / (0.5/30 + 0.5/55) = 38.8235...
        let mu = harmonic("mu1n", 0.5, 30.0, 55.0).unwrap();
        assert!((mu - 1.0 / (0.5 / 30.0 + 0.5 / 55.0)).abs() < 1e-12);
        assert!(mu < linear(0.5, 30.0, 55.0));
    }

    #[test]
    fn test_harmonic_rejects_degenerate_input() {
        assert_eq!(
            harmonic("mu2p", 0.3, 0.0, 170.0),
            Err(QueryError::DegenerateBinaryConstant {
                name: "mu2p",
                value: 0.0
            })
        );
        assert!(harmonic("mu2p", 0.3, 340.0, -1.0).is_err());
        assert!(harmonic("mu2p", 0.3, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_identical_end_members_mix_exactly() {
        let comp = Composition::new(&CZTS, 0.37);
        assert_eq!(comp.linear(|m| m.nc300), 2.2e18);
        assert_eq!(comp.mix(MixingRule::Bowing(0.0), "eg300", |m| m.eg300).unwrap(), 1.5);
        assert_eq!(comp.mix(MixingRule::Harmonic, "mu2n", |m| m.electron.mu2).unwrap(), 200.0);
    }

    #[test]
    fn test_composition_mixes_system_end_members() {
        let comp = Composition::new(&INGAN, 0.5);
        let eps = comp.linear(|m| m.permittivity);
        assert!((eps - (15.3 + 8.9) / 2.0).abs() < 1e-12);

        let eg = comp
            .mix(MixingRule::Bowing(INGAN.bowing.bandgap), "eg300", |m| m.eg300)
            .unwrap();
        assert!((eg - bowed(0.5, INN.eg300, GAN.eg300, 1.43)).abs() < 1e-15);
    }
}
