//! # 物理模型模块
//!
//! 合金参数插值引擎的核心：全部为无状态纯函数。
//!
//! ## 子模块
//! - `interpolation`: 组分插值（线性、弯曲、调和）
//! - `temperature`: Varshni 禁带与幂律温度标度
//! - `optical`: 吸收系数与复折射率
//! - `mobility`: Caughey-Thomas 迁移率
//! - `recombination`: SRH 寿命与复合系数
//!
//! ## 依赖关系
//! - 被 `query/` 调用
//! - 使用 `materials/` 常数表

pub mod interpolation;
pub mod mobility;
pub mod optical;
pub mod recombination;
pub mod temperature;

pub use interpolation::{Composition, MixingRule};
pub use mobility::CaugheyThomas;
pub use optical::{OpticalModel, OpticalResponse};
pub use recombination::RecombinationConstants;
pub use temperature::VarshniLaw;
