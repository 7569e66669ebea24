//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `query`: 单点求出全部材料参数
//! - `sweep`: 沿一个轴扫描并导出 CSV/XY/图像
//! - `constants`: 打印端元常数表
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: query, sweep, constants

pub mod constants;
pub mod query;
pub mod sweep;

use clap::{Parser, Subcommand};

/// alloyparam - 化合物半导体合金参数计算
#[derive(Parser)]
#[command(name = "alloyparam")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Alloy material parameters (bandgap, optics, mobility, recombination) for device simulation",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate every material parameter at one query point
    Query(query::QueryArgs),

    /// Sweep one variable and export the parameters (CSV, XY, PNG, SVG)
    Sweep(sweep::SweepArgs),

    /// Print the end-member constant tables of the material systems
    Constants(constants::ConstantsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_query() {
        let cli = Cli::try_parse_from([
            "alloyparam", "query", "--material", "czts", "--x", "0.3", "--temp", "350",
        ])
        .unwrap();
        match cli.command {
            Commands::Query(args) => {
                assert_eq!(args.point.material, "czts");
                assert_eq!(args.point.x, 0.3);
                assert_eq!(args.point.temperature, 350.0);
                assert!(!args.varshni_gap);
            }
            _ => panic!("expected query"),
        }
    }

    #[test]
    fn test_parse_sweep() {
        let cli = Cli::try_parse_from([
            "alloyparam", "sweep", "--axis", "wavelength", "--range", "0.3:1.2:100", "-o",
            "index.csv", "--quantity", "k",
        ])
        .unwrap();
        match cli.command {
            Commands::Sweep(args) => {
                assert_eq!(args.axis, sweep::SweepAxis::Wavelength);
                assert_eq!(args.quantity, sweep::SweepQuantity::K);
                assert_eq!(args.range, "0.3:1.2:100");
                assert_eq!(args.jobs, 0);
            }
            _ => panic!("expected sweep"),
        }
    }
}
