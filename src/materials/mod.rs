//! # 材料常数模块
//!
//! 定义二元端元材料常数表、合金弯曲参数和合金体系注册表。
//!
//! ## 子模块
//! - `constants`: 常数表数据结构
//! - `tables`: InN、GaN、CZTS 的编译期常数
//!
//! ## 依赖关系
//! - 被 `physics/` 和 `query/` 使用
//! - 使用 `physics/optical.rs` 的光学模型描述合金体系

pub mod constants;
pub mod tables;

pub use constants::{
    AlloyBowingParameters, AlloySystem, BinaryMaterialConstants, Carrier, CarrierTransport,
    HighFieldParameters, TemperatureExponents,
};

use std::collections::HashMap;
use std::sync::LazyLock;

/// 合金体系注册表（名称 -> 体系），小写名称与常用别名
pub static SYSTEMS: LazyLock<HashMap<&'static str, &'static AlloySystem>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert("ingan", &tables::INGAN);
    m.insert("in-ga-n", &tables::INGAN);
    m.insert("czts", &tables::CZTS);
    m.insert("cu2znsns4", &tables::CZTS);

    m
});

/// 按名称查找合金体系（大小写不敏感）
pub fn get_system(name: &str) -> Option<&'static AlloySystem> {
    SYSTEMS.get(name.trim().to_lowercase().as_str()).copied()
}

/// 所有不同的合金体系（去除别名），按名称排序
pub fn all_systems() -> Vec<&'static AlloySystem> {
    let mut systems: Vec<&'static AlloySystem> = Vec::new();
    for system in SYSTEMS.values() {
        if !systems.iter().any(|s| s.name == system.name) {
            systems.push(system);
        }
    }
    systems.sort_by_key(|s| s.name);
    systems
}
