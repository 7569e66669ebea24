//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `query/`, `sweep/`, `utils/`
//! - 子模块: query, sweep, constants

pub mod constants;
pub mod query;
pub mod sweep;

use crate::cli::Commands;
use crate::error::{AlloyError, Result};
use crate::materials::{self, AlloySystem};

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Query(args) => query::execute(args),
        Commands::Sweep(args) => sweep::execute(args),
        Commands::Constants(args) => constants::execute(args),
    }
}

/// 按名称查找合金体系
pub fn resolve_system(name: &str) -> Result<&'static AlloySystem> {
    materials::get_system(name).ok_or_else(|| {
        let known: Vec<&str> = materials::all_systems().iter().map(|s| s.name).collect();
        AlloyError::UnknownMaterial(format!("'{}' (available: {})", name, known.join(", ")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_system() {
        assert_eq!(resolve_system("InGaN").unwrap().name, "InGaN");
        assert_eq!(resolve_system("czts").unwrap().name, "CZTS");

        let err = resolve_system("gaas").unwrap_err();
        assert!(err.to_string().contains("gaas"));
        assert!(err.to_string().contains("CZTS, InGaN"));
    }
}
