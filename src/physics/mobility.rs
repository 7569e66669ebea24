//! # 迁移率模型
//!
//! Caughey-Thomas 掺杂与温度相关迁移率：
//!
//! ```text
//! mu(T, N) = mu1·T_a + (mu2·T_b - mu1·T_a) / (1 + (N / (ncrit·T_c))^(delta·T_d))
//! ```
//!
//! 其中 N = Nd + Na，T_e = (T/300)^e。N = 0 时为 mu2·T_b，N → ∞ 时趋于 mu1·T_a；
//! 饱和方向由数据决定。
//!
//! 合金端点 mu1、mu2 调和插值（合金散射主导），ncrit、delta、温度指数线性插值。
//!
//! 高场修正（不属于宿主回调接口）：
//!
//! ```text
//! mu(E) = mu0 / (1 + (mu0·E / vsat)^beta)^(1/beta)
//! ```
//!
//! ## 依赖关系
//! - 被 `query/` 调用
//! - 使用 `physics/interpolation.rs`, `physics/temperature.rs`

use crate::error::QueryResult;
use crate::materials::{Carrier, HighFieldParameters, TemperatureExponents};
use crate::physics::interpolation::{linear, Composition, MixingRule};
use crate::physics::temperature::{alloy_exponents, TemperatureFactors};

/// 端点迁移率 mu1、mu2 的混合规则
pub const ENDPOINT_MOBILITY_RULE: MixingRule = MixingRule::Harmonic;

/// 合金的 Caughey-Thomas 参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaugheyThomas {
    pub mu1: f64,
    pub mu2: f64,
    pub ncrit: f64,
    pub delta: f64,
    pub exponents: TemperatureExponents,
}

impl CaugheyThomas {
    /// 由组分插值出指定载流子的参数
    pub fn for_alloy(comp: &Composition<'_>, carrier: Carrier) -> QueryResult<Self> {
        let (mu1_name, mu2_name) = match carrier {
            Carrier::Electron => ("mu1n", "mu2n"),
            Carrier::Hole => ("mu1p", "mu2p"),
        };

        Ok(Self {
            mu1: comp.mix(ENDPOINT_MOBILITY_RULE, mu1_name, |m| m.transport(carrier).mu1)?,
            mu2: comp.mix(ENDPOINT_MOBILITY_RULE, mu2_name, |m| m.transport(carrier).mu2)?,
            ncrit: comp.linear(|m| m.transport(carrier).ncrit),
            delta: comp.linear(|m| m.transport(carrier).delta),
            exponents: alloy_exponents(comp),
        })
    }

    /// 温度 T (K)、总掺杂 N (cm⁻³) 下的迁移率 (cm²/V·s)
    pub fn mobility(&self, t: f64, n_total: f64) -> f64 {
        let f = TemperatureFactors::new(t, &self.exponents);
        let low = self.mu1 * f.a;
        let high = self.mu2 * f.b;

        let ratio = n_total / (self.ncrit * f.c);
        low + ((high - low) / (1.0 + ratio.powf(self.delta * f.d)))
    }

    /// 迁移率的上下界 (min, max)，在温度 T 下
    pub fn bounds(&self, t: f64) -> (f64, f64) {
        let f = TemperatureFactors::new(t, &self.exponents);
        let low = self.mu1 * f.a;
        let high = self.mu2 * f.b;
        (low.min(high), low.max(high))
    }
}

/// 合金高场参数（任一端元缺失时为 None）
pub fn alloy_high_field(
    comp: &Composition<'_>,
    first: Option<HighFieldParameters>,
    second: Option<HighFieldParameters>,
) -> Option<HighFieldParameters> {
    match (first, second) {
        (Some(a), Some(b)) => Some(HighFieldParameters {
            vsat: linear(comp.x(), a.vsat, b.vsat),
            beta: linear(comp.x(), a.beta, b.beta),
        }),
        _ => None,
    }
}

/// 高场迁移率修正
pub fn field_dependent_mobility(mu0: f64, field: f64, params: &HighFieldParameters) -> f64 {
    if field <= 0.0 {
        return mu0;
    }
    let ratio = mu0 * field / params.vsat;
    mu0 / (1.0 + ratio.powf(params.beta)).powf(1.0 / params.beta)
}
