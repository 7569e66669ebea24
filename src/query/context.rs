//! # 查询上下文
//!
//! 单次参数查询的输入（组分、温度、掺杂、位置、波长、电场），以及边界校验。
//! 每次调用构造，调用结束即丢弃。
//!
//! ## 依赖关系
//! - 被 `query/engine.rs` 和 `abi.rs` 使用
//! - 使用 `error.rs` 的 `QueryError`

use crate::error::{QueryError, QueryResult};
use crate::physics::temperature::T_REF;

/// 单点查询上下文
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryContext {
    /// 组分 x ∈ [0, 1]
    pub x: f64,
    /// 组分 y ∈ [0, 1]（四元合金预留）
    pub y: f64,
    /// 温度 (K)
    pub temperature: f64,
    /// 施主浓度 Nd (cm⁻³)
    pub donors: f64,
    /// 受主浓度 Na (cm⁻³)
    pub acceptors: f64,
    /// 位置 (µm)，仅作信息
    pub position: (f64, f64),
    /// 波长 (µm)，光学查询使用
    pub wavelength: f64,
    /// 电场强度 (V/cm)
    pub field: f64,
    /// 电子浓度 (cm⁻³)，光学查询签名的一部分
    pub electron_density: f64,
    /// 空穴浓度 (cm⁻³)，光学查询签名的一部分
    pub hole_density: f64,
    /// 宿主传入的 SRH 寿命 (s)
    pub lifetime: Option<f64>,
}

impl Default for QueryContext {
    fn default() -> Self {
        QueryContext {
            x: 0.0,
            y: 0.0,
            temperature: T_REF,
            donors: 0.0,
            acceptors: 0.0,
            position: (0.0, 0.0),
            wavelength: 0.5,
            field: 0.0,
            electron_density: 0.0,
            hole_density: 0.0,
            lifetime: None,
        }
    }
}

impl QueryContext {
    /// 以组分和温度创建
    pub fn new(x: f64, temperature: f64) -> Self {
        Self {
            x,
            temperature,
            ..Self::default()
        }
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub fn with_doping(mut self, donors: f64, acceptors: f64) -> Self {
        self.donors = donors;
        self.acceptors = acceptors;
        self
    }

    pub fn with_position(mut self, x_um: f64, y_um: f64) -> Self {
        self.position = (x_um, y_um);
        self
    }

    pub fn with_wavelength(mut self, wavelength_um: f64) -> Self {
        self.wavelength = wavelength_um;
        self
    }

    pub fn with_field(mut self, field: f64) -> Self {
        self.field = field;
        self
    }

    pub fn with_carriers(mut self, electrons: f64, holes: f64) -> Self {
        self.electron_density = electrons;
        self.hole_density = holes;
        self
    }

    pub fn with_lifetime(mut self, lifetime: f64) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    /// 总掺杂 Nd + Na
    pub fn total_doping(&self) -> f64 {
        self.donors + self.acceptors
    }

    // ─────────────────────────────────────────────────────────────
    // 边界校验
    // ─────────────────────────────────────────────────────────────

    /// 校验组分 x、y
    pub fn check_composition(&self) -> QueryResult<()> {
        check_fraction("x", self.x)?;
        check_fraction("y", self.y)
    }

    /// 校验温度
    pub fn check_temperature(&self) -> QueryResult<()> {
        if self.temperature.is_finite() && self.temperature > 0.0 {
            Ok(())
        } else {
            Err(QueryError::NonPositiveTemperature(self.temperature))
        }
    }

    /// 校验波长
    pub fn check_wavelength(&self) -> QueryResult<()> {
        if self.wavelength.is_finite() && self.wavelength > 0.0 {
            Ok(())
        } else {
            Err(QueryError::NonPositiveWavelength(self.wavelength))
        }
    }

    /// 校验掺杂浓度
    pub fn check_doping(&self) -> QueryResult<()> {
        check_concentration("nd", self.donors)?;
        check_concentration("na", self.acceptors)
    }

    /// 校验电场强度
    pub fn check_field(&self) -> QueryResult<()> {
        if self.field.is_finite() && self.field >= 0.0 {
            Ok(())
        } else {
            Err(QueryError::NegativeField(self.field))
        }
    }

    /// 校验载流子浓度
    pub fn check_carriers(&self) -> QueryResult<()> {
        check_concentration("nconc", self.electron_density)?;
        check_concentration("pconc", self.hole_density)
    }
}

/// 组分必须在 [0, 1]
pub fn check_fraction(name: &'static str, value: f64) -> QueryResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(QueryError::InvalidComposition { name, value })
    }
}

/// 浓度必须为有限非负数
pub fn check_concentration(name: &'static str, value: f64) -> QueryResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(QueryError::NegativeConcentration { name, value })
    }
}
