//! # 端元常数表
//!
//! InN、GaN 与 CZTS 的物理常数，以及由它们组成的合金体系。
//!
//! ## 数据来源
//! - InN / GaN 能带与态密度: http://www.ioffe.ru/SVA/NSM/Semicond/
//! - Caughey-Thomas 迁移率: G.F. Brown et al., Sol. Energy Mater. Sol. Cells 94 (2010) 478
//! - InGaN 光学常数: M. Nawaz et al., Semicond. Sci. Technol. 27 (2012) 035019
//! - CZTS: M. Patel, A. Ray, Physica B 407 (2012) 4391
//!
//! ## 依赖关系
//! - 被 `materials/mod.rs` 注册
//! - 纯静态数据，无外部依赖

use super::constants::{
    AlloyBowingParameters, AlloySystem, BinaryMaterialConstants, CarrierTransport,
    HighFieldParameters, TemperatureExponents,
};
use crate::physics::optical::{GradedTernaryOptics, OpticalModel, SquareRootEdgeOptics};

/// 所有已知端元的迁移率温度指数
const UNIT_EXPONENTS: TemperatureExponents = TemperatureExponents {
    a: 1.0,
    b: 1.0,
    c: 1.0,
    d: 1.0,
};

/// 氮化铟 (InN)
pub const INN: BinaryMaterialConstants = BinaryMaterialConstants {
    name: "InN",
    eg300: 0.7,
    egalpha: 0.914e-3,
    egbeta: 825.0,
    nc300: 9.1e17,
    nv300: 5.3e19,
    permittivity: 15.3,
    affinity: 5.6,
    electron: CarrierTransport {
        mu1: 30.0,
        mu2: 1100.0,
        ncrit: 8e18,
        delta: 1.0,
        high_field: Some(HighFieldParameters {
            vsat: 1.3e7,
            beta: 1.0,
        }),
    },
    hole: CarrierTransport {
        mu1: 3.0,
        mu2: 340.0,
        ncrit: 3e17,
        delta: 2.0,
        high_field: Some(HighFieldParameters {
            vsat: 1.7e7,
            beta: 2.0,
        }),
    },
    exponents: UNIT_EXPONENTS,
    // taun0 from Appl. Phys. Lett. 71 (18) 1997
    taun0: 1.0e-9,
    taup0: 1.0e-9,
    copt: 2.0e-10,
    augn: 1.5e-30,
    augp: 1.5e-30,
};

/// 氮化镓 (GaN)
pub const GAN: BinaryMaterialConstants = BinaryMaterialConstants {
    name: "GaN",
    eg300: 3.42,
    egalpha: 9.47e-4,
    egbeta: 621.0,
    nc300: 2.3e18,
    nv300: 4.6e19,
    permittivity: 8.9,
    affinity: 4.1,
    electron: CarrierTransport {
        mu1: 55.0,
        mu2: 1000.0,
        ncrit: 2e17,
        delta: 1.0,
        high_field: Some(HighFieldParameters {
            vsat: 1.3e7,
            beta: 1.0,
        }),
    },
    hole: CarrierTransport {
        mu1: 3.0,
        mu2: 170.0,
        ncrit: 3e17,
        delta: 2.0,
        high_field: Some(HighFieldParameters {
            vsat: 1.7e7,
            beta: 2.0,
        }),
    },
    exponents: UNIT_EXPONENTS,
    taun0: 1.0e-9,
    taup0: 1.0e-9,
    copt: 1.1e-8,
    augn: 1.5e-30,
    augp: 1.5e-30,
};

/// 铜锌锡硫 (Cu₂ZnSnS₄)
pub const CZTS_COMPOUND: BinaryMaterialConstants = BinaryMaterialConstants {
    name: "CZTS",
    eg300: 1.5,
    egalpha: 4e-4,
    egbeta: 300.0,
    nc300: 2.2e18,
    nv300: 1.8e19,
    permittivity: 10.0,
    affinity: 4.5,
    electron: CarrierTransport {
        mu1: 50.0,
        mu2: 200.0,
        ncrit: 1e18,
        delta: 1.0,
        high_field: None,
    },
    hole: CarrierTransport {
        mu1: 5.0,
        mu2: 50.0,
        ncrit: 1e17,
        delta: 2.0,
        high_field: None,
    },
    exponents: UNIT_EXPONENTS,
    taun0: 1.0e-6,
    taup0: 1.0e-6,
    copt: 1e-12,
    augn: 1e-30,
    augp: 1e-30,
};

/// InGaN 吸收系数多项式 C(x)，按 x 的升幂排列
const INGAN_C_POLY: [f64; 5] = [
    3.525016201,
    -18.297594473,
    40.221588785,
    -37.52274528,
    12.772362503,
];

/// InGaN 吸收系数多项式 D(x)，按 x 的升幂排列
const INGAN_D_POLY: [f64; 3] = [-0.665086247, 3.616441372, -2.460307692];

/// In(x)Ga(1-x)N 三元合金
pub static INGAN: AlloySystem = AlloySystem {
    name: "InGaN",
    description: "In(x)Ga(1-x)N ternary alloy",
    first: INN,
    second: GAN,
    bowing: AlloyBowingParameters {
        bandgap: 1.43,
        affinity: 0.8,
    },
    optics: OpticalModel::GradedTernary(GradedTernaryOptics {
        // checked against GaN absorption spectra, Appl. Phys. Lett. 71 (18) 1997
        alpha0: 1e5,
        c_poly: &INGAN_C_POLY,
        d_poly: &INGAN_D_POLY,
        a_first: 13.55,
        a_second: 9.31,
        b_first: 2.05,
        b_second: 3.03,
    }),
    // SRH lifetime taken as the same for InN and GaN
    lifetime_composition: 0.5,
};

/// CZTS 单一化合物
pub static CZTS: AlloySystem = AlloySystem {
    name: "CZTS",
    description: "Cu2ZnSnS4 absorber (single compound)",
    first: CZTS_COMPOUND,
    second: CZTS_COMPOUND,
    bowing: AlloyBowingParameters::NONE,
    optics: OpticalModel::SquareRootEdge(SquareRootEdgeOptics {
        extinction_prefactor: 0.2,
        refractive_index: 2.59,
    }),
    lifetime_composition: 0.5,
};
