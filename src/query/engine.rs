//! # 参数查询引擎
//!
//! 每个物理量一个入口：校验 → 组分插值 → 温度标度 → 求值。
//! 引擎只持有对合金体系常数表的只读引用，所有方法都是纯函数，可跨线程并发调用。
//!
//! ## 依赖关系
//! - 被 `abi.rs`、`ffi.rs`、`commands/`、`sweep/` 调用
//! - 使用 `physics/` 各模型和 `materials/` 常数表

use crate::error::QueryResult;
use crate::materials::{AlloySystem, Carrier, HighFieldParameters};
use crate::physics::mobility::{alloy_high_field, field_dependent_mobility};
use crate::physics::{Composition, CaugheyThomas, OpticalResponse, RecombinationConstants, VarshniLaw};
use crate::query::context::QueryContext;

use serde::Serialize;

/// 能带查询结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandStructure {
    /// 300 K 禁带 (eV)
    pub bandgap: f64,
    /// 电子亲和能 (eV)
    pub affinity: f64,
    /// 导带有效态密度 (cm⁻³)
    pub nc: f64,
    /// 价带有效态密度 (cm⁻³)
    pub nv: f64,
    /// dEg/dT (eV/K)，在查询温度下
    pub degdt: f64,
    /// 查询温度下的禁带 (eV)
    pub bandgap_at_temperature: f64,
}

/// 光学查询所用的禁带来源
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GapSource {
    /// 300 K 禁带（宿主接口默认）
    Reference,
    /// 按 Varshni 定律修正到查询温度
    TemperatureCorrected,
    /// 由调用方直接给出 (eV)
    Fixed(f64),
}

/// 单点全部参数（CLI 与扫描使用）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    pub band: BandStructure,
    pub optical: OpticalResponse,
    pub electron_mobility: f64,
    pub hole_mobility: f64,
    /// 高场修正后的迁移率（缺少高场数据时为 None）
    pub electron_field_mobility: Option<f64>,
    pub hole_field_mobility: Option<f64>,
    pub permittivity: f64,
    pub taun: f64,
    pub taup: f64,
    pub copt: f64,
    pub augn: f64,
    pub augp: f64,
}

/// 合金参数查询引擎
#[derive(Debug, Clone, Copy)]
pub struct ParameterEngine<'a> {
    system: &'a AlloySystem,
}

impl<'a> ParameterEngine<'a> {
    pub fn new(system: &'a AlloySystem) -> Self {
        Self { system }
    }

    fn composition(&self, x: f64) -> Composition<'a> {
        Composition::new(self.system, x)
    }

    /// 300 K 合金禁带（含弯曲）
    fn gap300(&self, comp: &Composition<'_>) -> QueryResult<f64> {
        comp.mix(self.system.bowing.bandgap_rule(), "eg300", |m| m.eg300)
    }

    // ─────────────────────────────────────────────────────────────
    // 能带与介电
    // ─────────────────────────────────────────────────────────────

    /// 能带查询：Eg、亲和能、Nc、Nv、dEg/dT
    pub fn band_structure(&self, ctx: &QueryContext) -> QueryResult<BandStructure> {
        ctx.check_composition()?;
        ctx.check_temperature()?;

        let comp = self.composition(ctx.x);
        let bandgap = self.gap300(&comp)?;
        let varshni = VarshniLaw::for_alloy(&comp, bandgap);

        Ok(BandStructure {
            bandgap,
            affinity: comp.mix(self.system.bowing.affinity_rule(), "affinity", |m| m.affinity)?,
            nc: comp.linear(|m| m.nc300),
            nv: comp.linear(|m| m.nv300),
            degdt: varshni.slope(ctx.temperature),
            bandgap_at_temperature: varshni.bandgap(ctx.temperature),
        })
    }

    /// 相对介电常数
    pub fn permittivity(&self, ctx: &QueryContext) -> QueryResult<f64> {
        ctx.check_composition()?;
        ctx.check_temperature()?;
        Ok(self.composition(ctx.x).linear(|m| m.permittivity))
    }

    // ─────────────────────────────────────────────────────────────
    // 光学
    // ─────────────────────────────────────────────────────────────

    /// 复折射率（使用 300 K 禁带）
    pub fn optical_index(&self, ctx: &QueryContext) -> QueryResult<OpticalResponse> {
        self.optical_index_with_gap(ctx, GapSource::Reference)
    }

    /// 复折射率，禁带来源可选
    pub fn optical_index_with_gap(
        &self,
        ctx: &QueryContext,
        gap: GapSource,
    ) -> QueryResult<OpticalResponse> {
        ctx.check_wavelength()?;
        ctx.check_temperature()?;
        ctx.check_composition()?;
        ctx.check_carriers()?;

        let comp = self.composition(ctx.x);
        let eg = match gap {
            GapSource::Reference => self.gap300(&comp)?,
            GapSource::TemperatureCorrected => {
                VarshniLaw::for_alloy(&comp, self.gap300(&comp)?).bandgap(ctx.temperature)
            }
            GapSource::Fixed(eg) => eg,
        };

        Ok(self.system.optics.evaluate(ctx.wavelength, ctx.x, eg))
    }

    // ─────────────────────────────────────────────────────────────
    // 输运
    // ─────────────────────────────────────────────────────────────

    /// 低场迁移率 (cm²/V·s)
    ///
    /// 位置与寿命参数不参与计算。
    pub fn mobility(&self, ctx: &QueryContext, carrier: Carrier) -> QueryResult<f64> {
        ctx.check_composition()?;
        ctx.check_temperature()?;
        ctx.check_doping()?;

        let ct = CaugheyThomas::for_alloy(&self.composition(ctx.x), carrier)?;
        Ok(ct.mobility(ctx.temperature, ctx.total_doping()))
    }

    /// 合金高场参数
    pub fn high_field(&self, x: f64, carrier: Carrier) -> Option<HighFieldParameters> {
        alloy_high_field(
            &self.composition(x),
            self.system.first.transport(carrier).high_field,
            self.system.second.transport(carrier).high_field,
        )
    }

    /// 在 `ctx.field` 下的高场迁移率（缺少高场数据时为 None）
    pub fn field_mobility(&self, ctx: &QueryContext, carrier: Carrier) -> QueryResult<Option<f64>> {
        ctx.check_field()?;
        let mu0 = self.mobility(ctx, carrier)?;
        Ok(self
            .high_field(ctx.x, carrier)
            .map(|hf| field_dependent_mobility(mu0, ctx.field, &hf)))
    }

    // ─────────────────────────────────────────────────────────────
    // 复合
    // ─────────────────────────────────────────────────────────────

    /// SRH 寿命 (s)，在体系固定的寿命组分下求值
    pub fn lifetime(&self, ctx: &QueryContext, carrier: Carrier) -> QueryResult<f64> {
        ctx.check_temperature()?;
        ctx.check_doping()?;

        let comp = self.composition(self.system.lifetime_composition);
        Ok(RecombinationConstants::for_alloy(&comp).lifetime(carrier))
    }

    /// 辐射复合系数 (cm³/s)
    pub fn radiative_rate(&self, ctx: &QueryContext) -> QueryResult<f64> {
        Ok(self.recombination(ctx)?.copt)
    }

    /// Auger 系数 (cm⁶/s)
    pub fn auger_rate(&self, ctx: &QueryContext, carrier: Carrier) -> QueryResult<f64> {
        Ok(self.recombination(ctx)?.auger(carrier))
    }

    fn recombination(&self, ctx: &QueryContext) -> QueryResult<RecombinationConstants> {
        ctx.check_temperature()?;
        ctx.check_composition()?;
        Ok(RecombinationConstants::for_alloy(&self.composition(ctx.x)))
    }

    // ─────────────────────────────────────────────────────────────
    // 全部参数
    // ─────────────────────────────────────────────────────────────

    /// 单点求出全部参数
    pub fn evaluate_all(&self, ctx: &QueryContext, gap: GapSource) -> QueryResult<ParameterSet> {
        Ok(ParameterSet {
            band: self.band_structure(ctx)?,
            optical: self.optical_index_with_gap(ctx, gap)?,
            electron_mobility: self.mobility(ctx, Carrier::Electron)?,
            hole_mobility: self.mobility(ctx, Carrier::Hole)?,
            electron_field_mobility: self.field_mobility(ctx, Carrier::Electron)?,
            hole_field_mobility: self.field_mobility(ctx, Carrier::Hole)?,
            permittivity: self.permittivity(ctx)?,
            taun: self.lifetime(ctx, Carrier::Electron)?,
            taup: self.lifetime(ctx, Carrier::Hole)?,
            copt: self.radiative_rate(ctx)?,
            augn: self.auger_rate(ctx, Carrier::Electron)?,
            augp: self.auger_rate(ctx, Carrier::Hole)?,
        })
    }
}
