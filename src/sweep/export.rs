//! # 扫描数据导出
//!
//! ## 支持格式
//! - CSV: 每个成功点一行，包含全部物理量（`serde` 行结构）
//! - XY: 扫描值与所选物理量两列，带 `#` 注释头
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 调用
//! - 使用 `csv` + `serde` 写入 CSV

use crate::cli::sweep::{SweepAxis, SweepQuantity};
use crate::error::{AlloyError, Result};
use crate::query::ParameterSet;
use crate::sweep::SweepResult;

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV 中扫描值之后的列
pub const CSV_COLUMNS: [&str; 20] = [
    "eg_eV",
    "eg_T_eV",
    "affinity_eV",
    "nc_cm-3",
    "nv_cm-3",
    "degdt_eV/K",
    "photon_energy_eV",
    "alpha_cm-1",
    "n",
    "k",
    "mun_cm2/Vs",
    "mup_cm2/Vs",
    "mun_field_cm2/Vs",
    "mup_field_cm2/Vs",
    "eps_r",
    "taun_s",
    "taup_s",
    "copt_cm3/s",
    "augn_cm6/s",
    "augp_cm6/s",
];

/// CSV 行
#[derive(Debug, Serialize)]
struct SweepRow {
    value: f64,
    eg: f64,
    eg_t: f64,
    affinity: f64,
    nc: f64,
    nv: f64,
    degdt: f64,
    photon_energy: f64,
    alpha: f64,
    n: f64,
    k: f64,
    mun: f64,
    mup: f64,
    mun_field: Option<f64>,
    mup_field: Option<f64>,
    eps: f64,
    taun: f64,
    taup: f64,
    copt: f64,
    augn: f64,
    augp: f64,
}

impl SweepRow {
    fn new(value: f64, set: &ParameterSet) -> Self {
        Self {
            value,
            eg: set.band.bandgap,
            eg_t: set.band.bandgap_at_temperature,
            affinity: set.band.affinity,
            nc: set.band.nc,
            nv: set.band.nv,
            degdt: set.band.degdt,
            photon_energy: set.optical.photon_energy,
            alpha: set.optical.absorption,
            n: set.optical.n,
            k: set.optical.k,
            mun: set.electron_mobility,
            mup: set.hole_mobility,
            mun_field: set.electron_field_mobility,
            mup_field: set.hole_field_mobility,
            eps: set.permittivity,
            taun: set.taun,
            taup: set.taup,
            copt: set.copt,
            augn: set.augn,
            augp: set.augp,
        }
    }
}

/// 导出全部物理量为 CSV
pub fn to_csv(result: &SweepResult, axis: SweepAxis, output_path: &Path) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output_path)?;

    let mut header = vec![axis.column()];
    header.extend(CSV_COLUMNS);
    wtr.write_record(&header)?;

    for (value, set) in result.successes() {
        wtr.serialize(SweepRow::new(value, set))?;
    }

    wtr.flush().map_err(|e| AlloyError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出所选物理量为 XY
pub fn to_xy(
    data: &[(f64, f64)],
    material: &str,
    axis: SweepAxis,
    quantity: SweepQuantity,
    output_path: &Path,
) -> Result<()> {
    let write_err = |e: std::io::Error| AlloyError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let file = File::create(output_path).map_err(write_err)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# Material: {}", material).map_err(write_err)?;
    writeln!(out, "# Columns: {}, {}", axis.label(), quantity.label()).map_err(write_err)?;
    writeln!(out, "#").map_err(write_err)?;

    for (x, y) in data {
        writeln!(out, "{:.6e}\t{:.6e}", x, y).map_err(write_err)?;
    }

    out.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::tables::INGAN;
    use crate::query::{GapSource, ParameterEngine, QueryContext};
    use crate::sweep::SweepRunner;

    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("alloyparam_{}_{}", std::process::id(), name))
    }

    fn sweep() -> SweepResult {
        let engine = ParameterEngine::new(&INGAN);
        SweepRunner::new(1)
            .run(&[0.0, 0.5, 1.0], |x| {
                engine.evaluate_all(&QueryContext::new(x, 300.0), GapSource::Reference)
            })
            .unwrap()
    }

    #[test]
    fn test_csv_export() {
        let path = temp_path("sweep.csv");
        to_csv(&sweep(), SweepAxis::X, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("x,eg_eV,eg_T_eV"));

        let header_cols = lines[0].split(',').count();
        assert_eq!(header_cols, CSV_COLUMNS.len() + 1);
        for line in &lines[1..] {
            assert_eq!(line.split(',').count(), header_cols);
        }
        assert!(lines[1].starts_with("0.0,3.42,"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_xy_export() {
        let path = temp_path("sweep.xy");
        let data = [(0.0, 3.42), (1.0, 0.7)];
        to_xy(&data, "InGaN", SweepAxis::X, SweepQuantity::Eg, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(rows.len(), 2);
        let cols: Vec<f64> = rows[1]
            .split('\t')
            .map(|c| c.parse().unwrap())
            .collect();
        assert_eq!(cols, vec![1.0, 0.7]);
        assert!(text.starts_with("# Material: InGaN"));

        fs::remove_file(&path).ok();
    }
}
