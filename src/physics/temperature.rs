//! # 温度标度
//!
//! ## Varshni 禁带温度关系
//! Eg(T) = Eg0 - α·T²/(T+β)
//!
//! dEg/dT = (-2αT(T+β) + αT²)/(T+β)²
//!
//! 常数表给出 300 K 禁带 Eg300，参考值 Eg0 = Eg300 + α·300²/(300+β)，
//! 因此 Eg(300) = Eg300。
//!
//! ## 幂律输运标度
//! T_e = (T/300)^e，e 为组分插值后的 Caughey-Thomas 指数
//!
//! ## 前置条件
//! T > 0；T + β 远离 0 由数据保证（β 为数百 K）
//!
//! ## 依赖关系
//! - 被 `physics/mobility.rs` 和 `query/` 调用
//! - 使用 `physics/interpolation.rs` 获取合金 α、β 与指数

use crate::materials::TemperatureExponents;
use crate::physics::interpolation::Composition;

/// 参考温度 (K)
pub const T_REF: f64 = 300.0;

/// Varshni 定律
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarshniLaw {
    /// 300 K 禁带 (eV)
    pub eg300: f64,
    /// α (eV/K)
    pub alpha: f64,
    /// β (K)
    pub beta: f64,
}

impl VarshniLaw {
    pub fn new(eg300: f64, alpha: f64, beta: f64) -> Self {
        Self { eg300, alpha, beta }
    }

    /// 由合金组分构造：α、β 线性插值，Eg300 由调用方给出（含弯曲）
    pub fn for_alloy(comp: &Composition<'_>, eg300: f64) -> Self {
        Self {
            eg300,
            alpha: comp.linear(|m| m.egalpha),
            beta: comp.linear(|m| m.egbeta),
        }
    }

    /// 0 K 参考禁带
    pub fn eg0(&self) -> f64 {
        self.eg300 + varshni_shift(self.alpha, self.beta, T_REF)
    }

    /// 温度 T 下的禁带 (eV)
    pub fn bandgap(&self, t: f64) -> f64 {
        if t == T_REF {
            return self.eg300;
        }
        varshni_gap(self.eg0(), self.alpha, self.beta, t)
    }

    /// dEg/dT (eV/K)
    pub fn slope(&self, t: f64) -> f64 {
        varshni_slope(self.alpha, self.beta, t)
    }
}

/// α·T²/(T+β)
fn varshni_shift(alpha: f64, beta: f64, t: f64) -> f64 {
    alpha * t * t / (t + beta)
}

/// Eg(T) = Eg0 - α·T²/(T+β)
pub fn varshni_gap(eg0: f64, alpha: f64, beta: f64, t: f64) -> f64 {
    eg0 - varshni_shift(alpha, beta, t)
}

/// Varshni 定律对 T 的导数
pub fn varshni_slope(alpha: f64, beta: f64, t: f64) -> f64 {
    let tb = t + beta;
    ((-2.0 * alpha * t * tb) + (alpha * t * t)) / (tb * tb)
}

/// 幂律因子 (T/300)^e
pub fn power_law(t: f64, exponent: f64) -> f64 {
    (t / T_REF).powf(exponent)
}

/// 作用在 Caughey-Thomas 四个量上的温度因子
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureFactors {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl TemperatureFactors {
    /// 由指数计算温度因子
    pub fn new(t: f64, exponents: &TemperatureExponents) -> Self {
        Self {
            a: power_law(t, exponents.a),
            b: power_law(t, exponents.b),
            c: power_law(t, exponents.c),
            d: power_law(t, exponents.d),
        }
    }
}

/// 组分插值后的温度指数
pub fn alloy_exponents(comp: &Composition<'_>) -> TemperatureExponents {
    TemperatureExponents {
        a: comp.linear(|m| m.exponents.a),
        b: comp.linear(|m| m.exponents.b),
        c: comp.linear(|m| m.exponents.c),
        d: comp.linear(|m| m.exponents.d),
    }
}
