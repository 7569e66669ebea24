//! # 光学响应
//!
//! 由波长和合金禁带计算吸收系数与复折射率 ñ = n + ik。
//!
//! ## 算法概述
//! 1. 光子能量 Eph = 1.23984 / λ (eV，λ 单位 µm)
//! 2. 按 Eph >= Eg 分支计算吸收（α 或 k），禁带以下 α = k = 0
//! 3. α 与 k 满足 k = λ·1e-4·α / (4π)，模型给出其中一个，另一个由此换算
//! 4. 实部 n 由模型给出，在 Eph = Eg 处连续
//!
//! ## 模型
//! - `GradedTernary`: 组分渐变三元合金（InGaN），
//!   α = α0·sqrt(C(x)·ΔE + D(x)·ΔE²)，n 为类 Sellmeier 形式
//! - `SquareRootEdge`: 单一化合物，k = (2Eg/Eph)·k_A·sqrt((Eph-Eg)/Eg)，n 为常数
//!
//! ## 参考
//! - G.F. Brown et al., Sol. Energy Mater. Sol. Cells 94 (2010) 478
//! - M. Nawaz et al., Semicond. Sci. Technol. 27 (2012) 035019
//!
//! ## 依赖关系
//! - 被 `query/` 调用
//! - 被 `materials/` 用于描述合金体系的光学模型
//! - 使用 `num-complex` 表示复折射率

use crate::physics::interpolation::linear;

use num_complex::Complex64;
use std::f64::consts::{PI, SQRT_2};

/// hc (eV·µm)
pub const HC_EV_UM: f64 = 1.23984;

/// 光子能量 (eV)
pub fn photon_energy(lambda_um: f64) -> f64 {
    HC_EV_UM / lambda_um
}

/// 与光子能量对应的波长 (µm)
pub fn wavelength_for_energy(energy_ev: f64) -> f64 {
    HC_EV_UM / energy_ev
}

/// 吸收系数 (cm⁻¹) 转消光系数
pub fn extinction_from_absorption(lambda_um: f64, absorption: f64) -> f64 {
    lambda_um * 1e-4 * absorption / (4.0 * PI)
}

/// 消光系数转吸收系数 (cm⁻¹)
pub fn absorption_from_extinction(lambda_um: f64, extinction: f64) -> f64 {
    4.0 * PI * extinction / (lambda_um * 1e-4)
}

/// 多项式求值（系数按升幂排列）
fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// 组分渐变三元合金光学模型
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradedTernaryOptics {
    /// 吸收系数前因子 (cm⁻¹)
    pub alpha0: f64,
    /// C(x) 多项式系数
    pub c_poly: &'static [f64],
    /// D(x) 多项式系数
    pub d_poly: &'static [f64],
    /// 端元 A 系数（x = 1 与 x = 0）
    pub a_first: f64,
    pub a_second: f64,
    /// 端元 B 系数（x = 1 与 x = 0）
    pub b_first: f64,
    pub b_second: f64,
}

impl GradedTernaryOptics {
    fn absorption(&self, x: f64, eph: f64, eg: f64) -> f64 {
        if eph < eg {
            return 0.0;
        }
        let de = eph - eg;
        let c = polyval(self.c_poly, x);
        let d = polyval(self.d_poly, x);
        // 远高于禁带时 D < 0 可使根号内为负，此时截断为 0
        let radicand = (c * de) + (d * de * de);
        self.alpha0 * radicand.max(0.0).sqrt()
    }

    fn real_index(&self, x: f64, eph: f64, eg: f64) -> f64 {
        let a = linear(x, self.a_first, self.a_second);
        let b = linear(x, self.b_first, self.b_second);

        if eph >= eg {
            ((a * (2.0 - SQRT_2)) + b).sqrt()
        } else {
            let r = eph / eg;
            ((a * below_gap_dispersion(r) / (r * r)) + b).sqrt()
        }
    }
}

/// 禁带以下色散项 2 - sqrt(1+r) - sqrt(1-r)，r = Eph/Eg ∈ [0, 1]
///
/// 按 2r² / ((s₊ + s₋)(1 + s₊)(1 + s₋)) 求值，r → 0 时不发生相消。
fn below_gap_dispersion(r: f64) -> f64 {
    let sp = (1.0 + r).sqrt();
    let sm = (1.0 - r).sqrt();
    2.0 * r * r / ((sp + sm) * (1.0 + sp) * (1.0 + sm))
}

/// 平方根吸收边光学模型
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareRootEdgeOptics {
    /// 消光系数前因子 k_A
    pub extinction_prefactor: f64,
    /// 折射率实部
    pub refractive_index: f64,
}

impl SquareRootEdgeOptics {
    fn extinction(&self, eph: f64, eg: f64) -> f64 {
        if eph < eg {
            return 0.0;
        }
        (2.0 * eg / eph) * self.extinction_prefactor * ((eph - eg) / eg).sqrt()
    }
}

/// 光学模型
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpticalModel {
    GradedTernary(GradedTernaryOptics),
    SquareRootEdge(SquareRootEdgeOptics),
}

impl OpticalModel {
    /// 计算波长 λ (µm)、组分 x、禁带 Eg (eV) 下的光学响应
    pub fn evaluate(&self, lambda_um: f64, x: f64, eg: f64) -> OpticalResponse {
        let eph = photon_energy(lambda_um);

        let (absorption, n, k) = match self {
            OpticalModel::GradedTernary(m) => {
                let absorption = m.absorption(x, eph, eg);
                let k = if absorption > 0.0 {
                    extinction_from_absorption(lambda_um, absorption)
                } else {
                    0.0
                };
                (absorption, m.real_index(x, eph, eg), k)
            }
            OpticalModel::SquareRootEdge(m) => {
                let k = m.extinction(eph, eg);
                (absorption_from_extinction(lambda_um, k), m.refractive_index, k)
            }
        };

        OpticalResponse {
            wavelength: lambda_um,
            photon_energy: eph,
            bandgap: eg,
            absorption,
            n,
            k,
        }
    }

    /// 模型名称
    pub fn label(&self) -> &'static str {
        match self {
            OpticalModel::GradedTernary(_) => "graded ternary",
            OpticalModel::SquareRootEdge(_) => "square-root edge",
        }
    }
}

/// 光学响应
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpticalResponse {
    /// 波长 (µm)
    pub wavelength: f64,
    /// 光子能量 (eV)
    pub photon_energy: f64,
    /// 使用的禁带 (eV)
    pub bandgap: f64,
    /// 吸收系数 (cm⁻¹)
    pub absorption: f64,
    /// 折射率实部
    pub n: f64,
    /// 消光系数
    pub k: f64,
}

impl OpticalResponse {
    /// 复折射率 n + ik
    pub fn complex_index(&self) -> Complex64 {
        Complex64::new(self.n, self.k)
    }

    /// 复相对介电函数 ε = ñ²
    pub fn dielectric_function(&self) -> Complex64 {
        let idx = self.complex_index();
        idx * idx
    }

    /// 光子能量是否高于禁带
    pub fn is_above_gap(&self) -> bool {
        self.photon_energy >= self.bandgap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::tables::{CZTS, INGAN};

    fn ingan_gap(x: f64) -> f64 {
        linear(x, 0.7, 3.42) - 1.43 * x * (1.0 - x)
    }

    #[test]
    fn test_photon_energy() {
        assert!((photon_energy(1.23984) - 1.0).abs() < 1e-15);
        assert!((photon_energy(0.4) - 3.0996).abs() < 1e-12);
        assert!((wavelength_for_energy(photon_energy(0.55)) - 0.55).abs() < 1e-15);
    }

    #[test]
    fn test_polyval() {
        assert_eq!(polyval(&[1.0, 2.0, 3.0], 2.0), 17.0);
        assert_eq!(polyval(&[], 2.0), 0.0);
    }

    #[test]
    fn test_below_gap_has_zero_extinction() {
        let eg = ingan_gap(0.2);
        let lambda = wavelength_for_energy(eg) * 1.2;
        let resp = INGAN.optics.evaluate(lambda, 0.2, eg);
        assert!(!resp.is_above_gap());
        assert_eq!(resp.k, 0.0);
        assert_eq!(resp.absorption, 0.0);
        assert!(resp.n > 2.0 && resp.n < 3.5, "n = {}", resp.n);
    }

    #[test]
    fn test_above_gap_absorbs() {
        let resp = INGAN.optics.evaluate(0.3, 0.1, ingan_gap(0.1));
        assert!(resp.is_above_gap());
        assert!(resp.absorption > 1e4, "alpha = {}", resp.absorption);
        assert!(resp.k > 0.0);
        assert!(
            (resp.k - extinction_from_absorption(0.3, resp.absorption)).abs() < 1e-15
        );
    }

    #[test]
    fn test_graded_ternary_continuity_at_gap() {
        for x in [0.0, 0.25, 0.56, 1.0] {
            let eg = ingan_gap(x);
            let lambda_c = wavelength_for_energy(eg);
            let delta = 1e-12;

            let above = INGAN.optics.evaluate(lambda_c * (1.0 - delta), x, eg);
            let below = INGAN.optics.evaluate(lambda_c * (1.0 + delta), x, eg);

            assert!(above.is_above_gap() && !below.is_above_gap());
            assert!(
                (above.n - below.n).abs() < 1e-5,
                "x = {}: n jumps {} -> {}",
                x,
                below.n,
                above.n
            );
            assert!((above.k - below.k).abs() < 1e-5, "x = {}: k jumps", x);
        }
    }

    #[test]
    fn test_continuity_gap_narrows_with_offset() {
        let x = 0.3;
        let eg = ingan_gap(x);
        let lambda_c = wavelength_for_energy(eg);

        let jump = |delta: f64| {
            let above = INGAN.optics.evaluate(lambda_c * (1.0 - delta), x, eg);
            let below = INGAN.optics.evaluate(lambda_c * (1.0 + delta), x, eg);
            (above.n - below.n).abs() + (above.k - below.k).abs()
        };

        assert!(jump(1e-10) < jump(1e-6));
        assert!(jump(1e-6) < jump(1e-3));
    }

    #[test]
    fn test_square_root_edge_model() {
        let eg = CZTS.first.eg300;
        let below = CZTS.optics.evaluate(1.0, 0.0, eg);
        assert_eq!(below.k, 0.0);
        assert_eq!(below.n, 2.59);

        let at_edge = CZTS.optics.evaluate(wavelength_for_energy(eg), 0.0, eg);
        assert!(at_edge.k < 1e-6);

        // Eph = 2Eg: k = k_A · sqrt(1)
        let resp = CZTS.optics.evaluate(wavelength_for_energy(2.0 * eg), 0.0, eg);
        assert!((resp.k - 0.2).abs() < 1e-12);
        assert_eq!(resp.n, 2.59);
    }

    #[test]
    fn test_square_root_edge_extinction_across_wavelengths() {
        let eg = 1.5;
        let expected = |lambda: f64| {
            let eph = 1.23984 / lambda;
            (2.0 * eg / eph) * 0.2 * ((eph - eg) / eg).sqrt()
        };

        for lambda in [0.3, 0.5, 0.7, 0.8] {
            let resp = CZTS.optics.evaluate(lambda, 0.0, eg);
            assert!(
                (resp.k - expected(lambda)).abs() < 1e-12,
                "lambda = {}: k = {}",
                lambda,
                resp.k
            );
            assert!(
                (resp.k - extinction_from_absorption(lambda, resp.absorption)).abs() < 1e-12
            );
        }

        assert!((CZTS.optics.evaluate(0.3, 0.0, eg).k - 0.1923).abs() < 1e-4);
        assert!((CZTS.optics.evaluate(0.8, 0.0, eg).k - 0.0705).abs() < 1e-4);
    }

    #[test]
    fn test_below_gap_dispersion_matches_direct_form() {
        for r in [0.1_f64, 0.5, 0.9, 1.0] {
            let direct = 2.0 - (1.0 + r).sqrt() - (1.0 - r).sqrt();
            assert!((below_gap_dispersion(r) - direct).abs() < 1e-14, "r = {}", r);
        }
        assert_eq!(below_gap_dispersion(0.0), 0.0);
    }

    #[test]
    fn test_long_wavelength_index_converges() {
        let x = 0.4;
        let OpticalModel::GradedTernary(m) = INGAN.optics else {
            panic!("InGaN uses the graded ternary model");
        };
        let a = linear(x, m.a_first, m.a_second);
        let b = linear(x, m.b_first, m.b_second);
        // r → 0: χ/r² → 1/4
        let limit = (a / 4.0 + b).sqrt();

        for lambda in [1e3, 1e8, 1e9] {
            let resp = INGAN.optics.evaluate(lambda, x, ingan_gap(x));
            assert!(
                (resp.n - limit).abs() < 1e-6,
                "lambda = {}: n = {} vs {}",
                lambda,
                resp.n,
                limit
            );
        }
    }

    #[test]
    fn test_far_above_gap_stays_finite() {
        // D(x) < 0 for x = 0: radicand turns negative for ΔE > C/|D|
        let resp = INGAN.optics.evaluate(0.1, 0.0, 3.42);
        assert!(resp.k.is_finite() && resp.k >= 0.0);
        assert!(resp.n.is_finite());
    }

    #[test]
    fn test_dielectric_function() {
        let resp = OpticalResponse {
            wavelength: 0.5,
            photon_energy: photon_energy(0.5),
            bandgap: 1.0,
            absorption: 0.0,
            n: 2.0,
            k: 0.5,
        };
        let eps = resp.dielectric_function();
        assert!((eps.re - 3.75).abs() < 1e-15);
        assert!((eps.im - 2.0).abs() < 1e-15);
    }
}
