//! # constants 子命令实现
//!
//! 打印合金体系的端元常数表、弯曲参数和光学模型。
//!
//! ## 依赖关系
//! - 使用 `cli/constants.rs` 定义的参数
//! - 使用 `materials/` 注册表
//! - 使用 `tabled` 打印表格

use crate::cli::constants::ConstantsArgs;
use crate::commands::resolve_system;
use crate::error::Result;
use crate::materials::{self, AlloySystem};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 常数表行
#[derive(Debug, Clone, Tabled)]
struct ConstantRow {
    #[tabled(rename = "Constant")]
    name: &'static str,
    #[tabled(rename = "x = 1")]
    first: String,
    #[tabled(rename = "x = 0")]
    second: String,
}

/// 执行常数表打印
pub fn execute(args: ConstantsArgs) -> Result<()> {
    let systems = match args.material {
        Some(ref name) => vec![resolve_system(name)?],
        None => materials::all_systems(),
    };

    for system in systems {
        print_system(system);
    }

    Ok(())
}

fn print_system(system: &AlloySystem) {
    output::print_header(&format!("{}: {}", system.name, system.description));

    if let Err(e) = system.validate() {
        output::print_warning(&format!("Constant table is degenerate: {}", e));
    }

    if system.is_single_compound() {
        output::print_info("Single compound: composition does not change any constant");
    } else {
        output::print_input("Bandgap bowing", &format!("{} eV", system.bowing.bandgap));
        output::print_input("Affinity bowing", &format!("{} eV", system.bowing.affinity));
    }
    output::print_input("Optical model", system.optics.label());
    output::print_input(
        "Lifetime composition",
        &system.lifetime_composition.to_string(),
    );
    println!();

    println!("{}", Table::new(constant_rows(system)));
}

/// 两个端元按名称对齐；只有一端提供的常数在另一端显示 "-"
fn constant_rows(system: &AlloySystem) -> Vec<ConstantRow> {
    let first = system.first.entries();
    let second = system.second.entries();

    let mut rows: Vec<ConstantRow> = first
        .iter()
        .map(|&(name, value)| ConstantRow {
            name,
            first: format!("{:e}", value),
            second: lookup(&second, name),
        })
        .collect();

    for &(name, value) in &second {
        if !first.iter().any(|(n, _)| *n == name) {
            rows.push(ConstantRow {
                name,
                first: "-".to_string(),
                second: format!("{:e}", value),
            });
        }
    }

    rows
}

fn lookup(entries: &[(&'static str, f64)], name: &str) -> String {
    entries
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| format!("{:e}", v))
        .unwrap_or_else(|| "-".to_string())
}
