//! # 位置参数适配层
//!
//! 按宿主器件仿真器的固定回调签名暴露十个入口。每个入口把位置参数组装成
//! `QueryContext`，调用 `ParameterEngine`，把结果写入输出槽并返回状态码。
//!
//! ## 状态码
//! - 0: 成功
//! - 1..=6: 见 `QueryError::status`；出错时所有输出槽写入 NaN
//!
//! ## 依赖关系
//! - 被 `ffi.rs` 调用
//! - 使用 `query/` 模块

use crate::error::{QueryResult, STATUS_OK};
use crate::materials::{AlloySystem, Carrier};
use crate::query::{ParameterEngine, QueryContext};

/// 写入输出槽：成功写结果，失败写 NaN
fn write_slots<const N: usize>(result: QueryResult<[f64; N]>, slots: [&mut f64; N]) -> i32 {
    match result {
        Ok(values) => {
            for (slot, value) in slots.into_iter().zip(values) {
                *slot = value;
            }
            STATUS_OK
        }
        Err(e) => {
            for slot in slots {
                *slot = f64::NAN;
            }
            e.status()
        }
    }
}

/// 能带：(x, y, T) → Eg, 亲和能, Nc, Nv, dEg/dT
#[allow(clippy::too_many_arguments)]
pub fn bandcomp(
    system: &AlloySystem,
    x: f64,
    y: f64,
    t: f64,
    eg: &mut f64,
    affinity: &mut f64,
    nc: &mut f64,
    nv: &mut f64,
    degdt: &mut f64,
) -> i32 {
    let ctx = QueryContext::new(x, t).with_y(y);
    let result = ParameterEngine::new(system)
        .band_structure(&ctx)
        .map(|b| [b.bandgap, b.affinity, b.nc, b.nv, b.degdt]);
    write_slots(result, [eg, affinity, nc, nv, degdt])
}

/// 折射率：(λ, T, x, y, n, p, E) → n, k
#[allow(clippy::too_many_arguments)]
pub fn index(
    system: &AlloySystem,
    lambda: f64,
    t: f64,
    x: f64,
    y: f64,
    nconc: f64,
    pconc: f64,
    field: f64,
    n: &mut f64,
    k: &mut f64,
) -> i32 {
    let ctx = QueryContext::new(x, t)
        .with_y(y)
        .with_wavelength(lambda)
        .with_carriers(nconc, pconc)
        .with_field(field);
    let result = ParameterEngine::new(system)
        .optical_index(&ctx)
        .map(|r| [r.n, r.k]);
    write_slots(result, [n, k])
}

#[allow(clippy::too_many_arguments)]
fn mobility(
    system: &AlloySystem,
    carrier: Carrier,
    x: f64,
    y: f64,
    t: f64,
    nd: f64,
    na: f64,
    xpos: f64,
    ypos: f64,
    tau: f64,
    mu: &mut f64,
) -> i32 {
    let ctx = QueryContext::new(x, t)
        .with_y(y)
        .with_doping(nd, na)
        .with_position(xpos, ypos)
        .with_lifetime(tau);
    let result = ParameterEngine::new(system)
        .mobility(&ctx, carrier)
        .map(|v| [v]);
    write_slots(result, [mu])
}

/// 电子迁移率：(x, y, T, Nd, Na, xpos, ypos, τn) → μn
#[allow(clippy::too_many_arguments)]
pub fn conmun(
    system: &AlloySystem,
    x: f64,
    y: f64,
    t: f64,
    nd: f64,
    na: f64,
    xpos: f64,
    ypos: f64,
    taun: f64,
    mun: &mut f64,
) -> i32 {
    mobility(system, Carrier::Electron, x, y, t, nd, na, xpos, ypos, taun, mun)
}

/// 空穴迁移率：(x, y, T, Nd, Na, xpos, ypos, τp) → μp
#[allow(clippy::too_many_arguments)]
pub fn conmup(
    system: &AlloySystem,
    x: f64,
    y: f64,
    t: f64,
    nd: f64,
    na: f64,
    xpos: f64,
    ypos: f64,
    taup: f64,
    mup: &mut f64,
) -> i32 {
    mobility(system, Carrier::Hole, x, y, t, nd, na, xpos, ypos, taup, mup)
}

/// 相对介电常数：(x, y, T) → ε
pub fn epsilon(system: &AlloySystem, x: f64, y: f64, t: f64, eps: &mut f64) -> i32 {
    let ctx = QueryContext::new(x, t).with_y(y);
    let result = ParameterEngine::new(system).permittivity(&ctx).map(|v| [v]);
    write_slots(result, [eps])
}

#[allow(clippy::too_many_arguments)]
fn lifetime(
    system: &AlloySystem,
    carrier: Carrier,
    xpos: f64,
    ypos: f64,
    t: f64,
    nd: f64,
    na: f64,
    tau: &mut f64,
) -> i32 {
    let ctx = QueryContext::new(system.lifetime_composition, t)
        .with_doping(nd, na)
        .with_position(xpos, ypos);
    let result = ParameterEngine::new(system)
        .lifetime(&ctx, carrier)
        .map(|v| [v]);
    write_slots(result, [tau])
}

/// 电子 SRH 寿命：(xpos, ypos, T, Nd, Na) → τn
pub fn taun(
    system: &AlloySystem,
    xpos: f64,
    ypos: f64,
    t: f64,
    nd: f64,
    na: f64,
    taun: &mut f64,
) -> i32 {
    lifetime(system, Carrier::Electron, xpos, ypos, t, nd, na, taun)
}

/// 空穴 SRH 寿命：(xpos, ypos, T, Nd, Na) → τp
pub fn taup(
    system: &AlloySystem,
    xpos: f64,
    ypos: f64,
    t: f64,
    nd: f64,
    na: f64,
    taup: &mut f64,
) -> i32 {
    lifetime(system, Carrier::Hole, xpos, ypos, t, nd, na, taup)
}

/// 辐射复合系数：(T, x, y) → copt
pub fn copt(system: &AlloySystem, t: f64, x: f64, y: f64, copt: &mut f64) -> i32 {
    let ctx = QueryContext::new(x, t).with_y(y);
    let result = ParameterEngine::new(system).radiative_rate(&ctx).map(|v| [v]);
    write_slots(result, [copt])
}

/// 电子 Auger 系数：(T, x, y) → Cn
pub fn gaun(system: &AlloySystem, t: f64, x: f64, y: f64, gaun: &mut f64) -> i32 {
    let ctx = QueryContext::new(x, t).with_y(y);
    let result = ParameterEngine::new(system)
        .auger_rate(&ctx, Carrier::Electron)
        .map(|v| [v]);
    write_slots(result, [gaun])
}

/// 空穴 Auger 系数：(T, x, y) → Cp
pub fn gaup(system: &AlloySystem, t: f64, x: f64, y: f64, gaup: &mut f64) -> i32 {
    let ctx = QueryContext::new(x, t).with_y(y);
    let result = ParameterEngine::new(system)
        .auger_rate(&ctx, Carrier::Hole)
        .map(|v| [v]);
    write_slots(result, [gaup])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::tables::{CZTS, GAN, INGAN, INN};

    #[test]
    fn test_bandcomp_end_member() {
        let (mut eg, mut chi, mut nc, mut nv, mut degdt) = (0.0, 0.0, 0.0, 0.0, 0.0);
        let status = bandcomp(
            &INGAN, 1.0, 0.0, 300.0, &mut eg, &mut chi, &mut nc, &mut nv, &mut degdt,
        );
        assert_eq!(status, 0);
        assert_eq!(eg, INN.eg300);
        assert_eq!(chi, INN.affinity);
        assert_eq!(nc, INN.nc300);
        assert_eq!(nv, INN.nv300);
        assert!(degdt < 0.0);
    }

    #[test]
    fn test_bandcomp_invalid_composition_writes_nan() {
        let (mut eg, mut chi, mut nc, mut nv, mut degdt) = (1.0, 1.0, 1.0, 1.0, 1.0);
        let status = bandcomp(
            &INGAN, -0.2, 0.0, 300.0, &mut eg, &mut chi, &mut nc, &mut nv, &mut degdt,
        );
        assert_eq!(status, 1);
        for v in [eg, chi, nc, nv, degdt] {
            assert!(v.is_nan());
        }
    }

    #[test]
    fn test_index_status_codes() {
        let (mut n, mut k) = (0.0, 0.0);
        assert_eq!(
            index(&INGAN, 2.0, 300.0, 0.0, 0.0, 0.0, 0.0, 0.0, &mut n, &mut k),
            0
        );
        assert_eq!(k, 0.0);
        assert!(n > 1.0);

        assert_eq!(
            index(&INGAN, 0.0, 300.0, 0.0, 0.0, 0.0, 0.0, 0.0, &mut n, &mut k),
            3
        );
        assert!(n.is_nan() && k.is_nan());

        assert_eq!(
            index(&INGAN, 0.5, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, &mut n, &mut k),
            2
        );
        assert_eq!(
            index(&INGAN, 0.5, 300.0, 0.0, 0.0, -1.0, 0.0, 0.0, &mut n, &mut k),
            5
        );
    }

    #[test]
    fn test_mobility_entry_points() {
        let mut mu = 0.0;
        assert_eq!(
            conmun(&INGAN, 0.0, 0.0, 300.0, 0.0, 0.0, 1.0, 2.0, 1e-9, &mut mu),
            0
        );
        assert!((mu - GAN.electron.mu2).abs() < 1e-9);

        assert_eq!(
            conmup(&INGAN, 0.0, 0.0, 300.0, 0.0, 0.0, 1.0, 2.0, 1e-9, &mut mu),
            0
        );
        assert!((mu - GAN.hole.mu2).abs() < 1e-9);

        assert_eq!(
            conmup(&INGAN, 0.0, 0.0, 300.0, -5.0, 0.0, 1.0, 2.0, 1e-9, &mut mu),
            5
        );
        assert!(mu.is_nan());
    }

    #[test]
    fn test_degenerate_constant_reaches_mobility_entry_point() {
        let mut system = INGAN;
        system.first.electron.mu1 = 0.0;

        let mut mu = 0.0;
        assert_eq!(
            conmun(&system, 0.5, 0.0, 300.0, 1e17, 0.0, 0.0, 0.0, 1e-9, &mut mu),
            4
        );
        assert!(mu.is_nan());

        // the hole table is untouched
        assert_eq!(
            conmup(&system, 0.5, 0.0, 300.0, 1e17, 0.0, 0.0, 0.0, 1e-9, &mut mu),
            0
        );
        assert!(mu > 0.0);
    }

    #[test]
    fn test_scalar_entry_points() {
        let mut v = 0.0;
        assert_eq!(epsilon(&INGAN, 0.5, 0.0, 300.0, &mut v), 0);
        assert!((v - 12.1).abs() < 1e-12);

        assert_eq!(taun(&INGAN, 0.0, 0.0, 300.0, 0.0, 0.0, &mut v), 0);
        assert_eq!(v, 1e-9);
        assert_eq!(taup(&CZTS, 0.0, 0.0, 300.0, 0.0, 0.0, &mut v), 0);
        assert_eq!(v, 1e-6);

        assert_eq!(copt(&INGAN, 300.0, 1.0, 0.0, &mut v), 0);
        assert_eq!(v, INN.copt);
        assert_eq!(gaun(&INGAN, 300.0, 0.0, 0.0, &mut v), 0);
        assert_eq!(v, GAN.augn);
        assert_eq!(gaup(&INGAN, 300.0, 0.0, 0.0, &mut v), 0);
        assert_eq!(v, GAN.augp);

        assert_eq!(gaup(&INGAN, 300.0, 0.0, 2.0, &mut v), 1);
        assert!(v.is_nan());
        assert_eq!(taun(&INGAN, 0.0, 0.0, 0.0, 0.0, 0.0, &mut v), 2);
    }
}
