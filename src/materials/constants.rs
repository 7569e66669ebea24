//! # 材料常数数据结构
//!
//! 单个二元端元的物理常数表，以及由两个端元组成的合金体系描述。
//! 常数表在编译期构造，进程内只读共享，从不修改。
//!
//! ## 依赖关系
//! - 被 `materials/tables.rs` 用于声明常数
//! - 被 `physics/interpolation.rs` 读取
//! - 使用 `physics/optical.rs` 的 `OpticalModel`

use crate::error::{QueryError, QueryResult};
use crate::physics::interpolation::MixingRule;
use crate::physics::optical::OpticalModel;

use serde::Serialize;

/// 载流子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Carrier {
    Electron,
    Hole,
}

impl std::fmt::Display for Carrier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Carrier::Electron => write!(f, "electron"),
            Carrier::Hole => write!(f, "hole"),
        }
    }
}

/// Caughey-Thomas 温度指数 {a, b, c, d}
///
/// 分别作用于 mu1、mu2、ncrit 和 delta：`T_e = (T/300)^e`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureExponents {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// 高场迁移率参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HighFieldParameters {
    /// 饱和漂移速度 (cm/s)
    pub vsat: f64,
    /// 高场过渡指数
    pub beta: f64,
}

/// 单种载流子的输运常数
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarrierTransport {
    /// 重掺杂极限迁移率 (cm²/V·s)
    pub mu1: f64,
    /// 晶格散射限制的迁移率 (cm²/V·s)
    pub mu2: f64,
    /// 临界掺杂浓度 (cm⁻³)
    pub ncrit: f64,
    /// 过渡陡度
    pub delta: f64,
    /// 高场参数（原始数据未给出时为 None）
    pub high_field: Option<HighFieldParameters>,
}

/// 二元端元材料常数表
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinaryMaterialConstants {
    /// 材料名称
    pub name: &'static str,

    /// 300 K 禁带宽度 (eV)
    pub eg300: f64,
    /// Varshni α (eV/K)
    pub egalpha: f64,
    /// Varshni β (K)
    pub egbeta: f64,

    /// 300 K 导带有效态密度 (cm⁻³)
    pub nc300: f64,
    /// 300 K 价带有效态密度 (cm⁻³)
    pub nv300: f64,

    /// 相对介电常数
    pub permittivity: f64,
    /// 电子亲和能 (eV)
    pub affinity: f64,

    pub electron: CarrierTransport,
    pub hole: CarrierTransport,
    pub exponents: TemperatureExponents,

    /// 电子 SRH 寿命 (s)
    pub taun0: f64,
    /// 空穴 SRH 寿命 (s)
    pub taup0: f64,
    /// 辐射复合系数 (cm³/s)
    pub copt: f64,
    /// 电子 Auger 系数 (cm⁶/s)
    pub augn: f64,
    /// 空穴 Auger 系数 (cm⁶/s)
    pub augp: f64,
}

impl BinaryMaterialConstants {
    /// 指定载流子的输运常数
    pub fn transport(&self, carrier: Carrier) -> &CarrierTransport {
        match carrier {
            Carrier::Electron => &self.electron,
            Carrier::Hole => &self.hole,
        }
    }

    /// 以 (名称, 数值) 列出全部标量常数
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        let mut entries = vec![
            ("eg300", self.eg300),
            ("egalpha", self.egalpha),
            ("egbeta", self.egbeta),
            ("nc300", self.nc300),
            ("nv300", self.nv300),
            ("permittivity", self.permittivity),
            ("affinity", self.affinity),
            ("mu1n", self.electron.mu1),
            ("mu2n", self.electron.mu2),
            ("ncritn", self.electron.ncrit),
            ("deltan", self.electron.delta),
            ("mu1p", self.hole.mu1),
            ("mu2p", self.hole.mu2),
            ("ncritp", self.hole.ncrit),
            ("deltap", self.hole.delta),
            ("tempa", self.exponents.a),
            ("tempb", self.exponents.b),
            ("tempc", self.exponents.c),
            ("tempd", self.exponents.d),
            ("taun0", self.taun0),
            ("taup0", self.taup0),
            ("copt", self.copt),
            ("augn", self.augn),
            ("augp", self.augp),
        ];

        if let Some(hf) = self.electron.high_field {
            entries.push(("vsatn", hf.vsat));
            entries.push(("betan", hf.beta));
        }
        if let Some(hf) = self.hole.high_field {
            entries.push(("vsatp", hf.vsat));
            entries.push(("betap", hf.beta));
        }

        entries
    }

    /// 检查所有常数为有限正数
    pub fn validate(&self) -> QueryResult<()> {
        for (name, value) in self.entries() {
            if !(value.is_finite() && value > 0.0) {
                return Err(QueryError::DegenerateBinaryConstant { name, value });
            }
        }
        Ok(())
    }
}

/// 合金弯曲参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlloyBowingParameters {
    /// 禁带弯曲参数 (eV)
    pub bandgap: f64,
    /// 电子亲和能弯曲参数 (eV)
    pub affinity: f64,
}

impl AlloyBowingParameters {
    /// 无弯曲
    pub const NONE: Self = Self {
        bandgap: 0.0,
        affinity: 0.0,
    };

    /// 禁带的混合规则
    pub fn bandgap_rule(&self) -> MixingRule {
        MixingRule::Bowing(self.bandgap)
    }

    /// 电子亲和能的混合规则
    pub fn affinity_rule(&self) -> MixingRule {
        MixingRule::Bowing(self.affinity)
    }
}

/// 合金体系：两个端元 + 弯曲参数 + 光学模型
///
/// 组分 x 为 `first` 的摩尔分数：x = 1 为纯 `first`，x = 0 为纯 `second`。
/// 单一化合物体系的两个端元相同。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlloySystem {
    pub name: &'static str,
    pub description: &'static str,
    pub first: BinaryMaterialConstants,
    pub second: BinaryMaterialConstants,
    pub bowing: AlloyBowingParameters,
    pub optics: OpticalModel,
    /// 只含位置参数的寿命查询所采用的组分
    pub lifetime_composition: f64,
}

impl AlloySystem {
    /// 是否为单一化合物（两个端元相同）
    pub fn is_single_compound(&self) -> bool {
        self.first == self.second
    }

    /// 检查两个端元的常数
    pub fn validate(&self) -> QueryResult<()> {
        self.first.validate()?;
        self.second.validate()
    }
}
