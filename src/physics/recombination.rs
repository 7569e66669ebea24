//! # 复合参数
//!
//! SRH 寿命、辐射复合系数和 Auger 系数按组分线性插值。
//! 当前模型与位置、温度无关；位置与温度参数只为接口兼容而保留。
//!
//! ## 依赖关系
//! - 被 `query/` 调用
//! - 使用 `physics/interpolation.rs`

use crate::materials::Carrier;
use crate::physics::interpolation::Composition;

/// 合金复合常数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecombinationConstants {
    /// 电子 SRH 寿命 (s)
    pub taun: f64,
    /// 空穴 SRH 寿命 (s)
    pub taup: f64,
    /// 辐射复合系数 (cm³/s)
    pub copt: f64,
    /// 电子 Auger 系数 (cm⁶/s)
    pub augn: f64,
    /// 空穴 Auger 系数 (cm⁶/s)
    pub augp: f64,
}

impl RecombinationConstants {
    pub fn for_alloy(comp: &Composition<'_>) -> Self {
        Self {
            taun: comp.linear(|m| m.taun0),
            taup: comp.linear(|m| m.taup0),
            copt: comp.linear(|m| m.copt),
            augn: comp.linear(|m| m.augn),
            augp: comp.linear(|m| m.augp),
        }
    }

    /// 指定载流子的 SRH 寿命
    pub fn lifetime(&self, carrier: Carrier) -> f64 {
        match carrier {
            Carrier::Electron => self.taun,
            Carrier::Hole => self.taup,
        }
    }

    /// 指定载流子的 Auger 系数
    pub fn auger(&self, carrier: Carrier) -> f64 {
        match carrier {
            Carrier::Electron => self.augn,
            Carrier::Hole => self.augp,
        }
    }
}
