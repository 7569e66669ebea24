//! # query 子命令实现
//!
//! 在一个查询点求出全部材料参数并打印表格。
//!
//! ## 依赖关系
//! - 使用 `cli/query.rs` 定义的参数
//! - 使用 `query/` 引擎
//! - 使用 `utils/output.rs` 和 `tabled`

use crate::cli::query::{PointArgs, QueryArgs};
use crate::commands::resolve_system;
use crate::error::Result;
use crate::query::{GapSource, ParameterEngine, ParameterSet};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 参数表行
#[derive(Debug, Clone, Tabled)]
struct ParameterRow {
    #[tabled(rename = "Quantity")]
    quantity: &'static str,
    #[tabled(rename = "Symbol")]
    symbol: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Unit")]
    unit: &'static str,
}

impl ParameterRow {
    fn new(quantity: &'static str, symbol: &'static str, value: f64, unit: &'static str) -> Self {
        Self {
            quantity,
            symbol,
            value: format_value(value),
            unit,
        }
    }
}

/// 数量级跨度大的量用科学计数法
fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 {
        "0".to_string()
    } else if (1e-3..1e5).contains(&magnitude) {
        format!("{:.5}", value)
    } else {
        format!("{:.4e}", value)
    }
}

/// 执行单点查询
pub fn execute(args: QueryArgs) -> Result<()> {
    let system = resolve_system(&args.point.material)?;
    output::print_header(&format!("{} Material Parameters", system.name));

    print_point(&args.point, system.description);

    let gap = if args.varshni_gap {
        GapSource::TemperatureCorrected
    } else {
        GapSource::Reference
    };

    let engine = ParameterEngine::new(system);
    let set = engine.evaluate_all(&args.point.context(), gap)?;

    println!("{}", Table::new(parameter_rows(&set)));

    if set.optical.is_above_gap() {
        output::print_info(&format!(
            "Photon energy {:.4} eV is above the gap ({:.4} eV): absorbing",
            set.optical.photon_energy, set.optical.bandgap
        ));
    } else {
        output::print_info(&format!(
            "Photon energy {:.4} eV is below the gap ({:.4} eV): transparent",
            set.optical.photon_energy, set.optical.bandgap
        ));
    }

    if args.point.field > 0.0 && set.electron_field_mobility.is_none() {
        output::print_warning(&format!(
            "{} has no saturation velocity data, high-field mobility skipped",
            system.name
        ));
    }

    output::print_done("Query complete");
    Ok(())
}

/// 打印查询点
fn print_point(point: &PointArgs, description: &str) {
    output::print_info(description);
    output::print_input("x", &point.x.to_string());
    output::print_input("y", &point.y.to_string());
    output::print_input("T", &format!("{} K", point.temperature));
    output::print_input("Nd", &format!("{:e} cm^-3", point.nd));
    output::print_input("Na", &format!("{:e} cm^-3", point.na));
    output::print_input("lambda", &format!("{} um", point.wavelength));
    if point.field > 0.0 {
        output::print_input("E", &format!("{:e} V/cm", point.field));
    }
    println!();
}

/// 把参数集展开为表格行
fn parameter_rows(set: &ParameterSet) -> Vec<ParameterRow> {
    let mut rows = vec![
        ParameterRow::new("Bandgap (300 K)", "Eg", set.band.bandgap, "eV"),
        ParameterRow::new("Bandgap (T)", "Eg(T)", set.band.bandgap_at_temperature, "eV"),
        ParameterRow::new("Gap slope", "dEg/dT", set.band.degdt, "eV/K"),
        ParameterRow::new("Electron affinity", "chi", set.band.affinity, "eV"),
        ParameterRow::new("Conduction band DOS", "Nc", set.band.nc, "cm^-3"),
        ParameterRow::new("Valence band DOS", "Nv", set.band.nv, "cm^-3"),
        ParameterRow::new("Relative permittivity", "eps_r", set.permittivity, "-"),
        ParameterRow::new("Absorption coefficient", "alpha", set.optical.absorption, "cm^-1"),
        ParameterRow::new("Refractive index", "n", set.optical.n, "-"),
        ParameterRow::new("Extinction coefficient", "k", set.optical.k, "-"),
        ParameterRow::new("Electron mobility", "mu_n", set.electron_mobility, "cm^2/Vs"),
        ParameterRow::new("Hole mobility", "mu_p", set.hole_mobility, "cm^2/Vs"),
    ];

    if let Some(mu) = set.electron_field_mobility {
        rows.push(ParameterRow::new("Electron mobility (field)", "mu_n(E)", mu, "cm^2/Vs"));
    }
    if let Some(mu) = set.hole_field_mobility {
        rows.push(ParameterRow::new("Hole mobility (field)", "mu_p(E)", mu, "cm^2/Vs"));
    }

    rows.extend([
        ParameterRow::new("Electron SRH lifetime", "tau_n", set.taun, "s"),
        ParameterRow::new("Hole SRH lifetime", "tau_p", set.taup, "s"),
        ParameterRow::new("Radiative coefficient", "Copt", set.copt, "cm^3/s"),
        ParameterRow::new("Electron Auger coefficient", "Cn", set.augn, "cm^6/s"),
        ParameterRow::new("Hole Auger coefficient", "Cp", set.augp, "cm^6/s"),
    ]);

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::tables::{CZTS, INGAN};
    use crate::query::QueryContext;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(3.42), "3.42000");
        assert_eq!(format_value(1.1e-8), "1.1000e-8");
        assert_eq!(format_value(2.3e18), "2.3000e18");
    }

    #[test]
    fn test_parameter_rows_include_field_mobility_when_available() {
        let ctx = QueryContext::new(0.5, 300.0);
        let ingan = ParameterEngine::new(&INGAN)
            .evaluate_all(&ctx, GapSource::Reference)
            .unwrap();
        assert_eq!(parameter_rows(&ingan).len(), 19);

        let czts = ParameterEngine::new(&CZTS)
            .evaluate_all(&ctx, GapSource::Reference)
            .unwrap();
        let rows = parameter_rows(&czts);
        assert_eq!(rows.len(), 17);
        assert_eq!(rows[0].value, "1.50000");
    }
}
