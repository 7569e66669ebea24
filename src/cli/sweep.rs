//! # sweep 子命令 CLI 定义
//!
//! 沿一个变量扫描查询点，其余输入取 `PointArgs` 给出的值。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sweep.rs`，枚举被 `sweep/` 使用

use crate::cli::query::PointArgs;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────
// 扫描轴与采样
// ─────────────────────────────────────────────────────────────

/// 扫描变量
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SweepAxis {
    /// Composition fraction x
    X,
    /// Temperature (K)
    Temp,
    /// Donor concentration Nd (cm^-3)
    Doping,
    /// Optical wavelength (um)
    Wavelength,
}

impl SweepAxis {
    /// 列名
    pub fn column(&self) -> &'static str {
        match self {
            SweepAxis::X => "x",
            SweepAxis::Temp => "temperature_K",
            SweepAxis::Doping => "nd_cm-3",
            SweepAxis::Wavelength => "wavelength_um",
        }
    }

    /// 坐标轴标签
    pub fn label(&self) -> &'static str {
        match self {
            SweepAxis::X => "Composition x",
            SweepAxis::Temp => "Temperature (K)",
            SweepAxis::Doping => "Nd (cm⁻³)",
            SweepAxis::Wavelength => "Wavelength (µm)",
        }
    }
}

impl std::fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SweepAxis::X => write!(f, "x"),
            SweepAxis::Temp => write!(f, "temp"),
            SweepAxis::Doping => write!(f, "doping"),
            SweepAxis::Wavelength => write!(f, "wavelength"),
        }
    }
}

/// 采样间隔
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum Spacing {
    /// Evenly spaced values
    #[default]
    Lin,
    /// Logarithmically spaced values (positive range only)
    Log,
}

// ─────────────────────────────────────────────────────────────
// 输出量与格式
// ─────────────────────────────────────────────────────────────

/// XY 与图像输出的物理量
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum SweepQuantity {
    /// Bandgap at 300 K (eV)
    #[default]
    Eg,
    /// Bandgap at the query temperature (eV)
    EgT,
    /// Electron affinity (eV)
    Affinity,
    /// dEg/dT (eV/K)
    Degdt,
    /// Real refractive index
    N,
    /// Extinction coefficient
    K,
    /// Absorption coefficient (cm^-1)
    Alpha,
    /// Electron mobility (cm^2/Vs)
    Mun,
    /// Hole mobility (cm^2/Vs)
    Mup,
    /// Relative permittivity
    Eps,
    /// Radiative recombination coefficient (cm^3/s)
    Copt,
    /// Electron Auger coefficient (cm^6/s)
    Augn,
    /// Hole Auger coefficient (cm^6/s)
    Augp,
}

impl SweepQuantity {
    /// 坐标轴标签
    pub fn label(&self) -> &'static str {
        match self {
            SweepQuantity::Eg => "Eg (eV, 300 K)",
            SweepQuantity::EgT => "Eg(T) (eV)",
            SweepQuantity::Affinity => "Electron affinity (eV)",
            SweepQuantity::Degdt => "dEg/dT (eV/K)",
            SweepQuantity::N => "Refractive index n",
            SweepQuantity::K => "Extinction coefficient k",
            SweepQuantity::Alpha => "Absorption (cm⁻¹)",
            SweepQuantity::Mun => "Electron mobility (cm²/V·s)",
            SweepQuantity::Mup => "Hole mobility (cm²/V·s)",
            SweepQuantity::Eps => "Relative permittivity",
            SweepQuantity::Copt => "Copt (cm³/s)",
            SweepQuantity::Augn => "Cn Auger (cm⁶/s)",
            SweepQuantity::Augp => "Cp Auger (cm⁶/s)",
        }
    }
}

/// 扫描输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SweepOutputFormat {
    /// CSV table with every quantity
    Csv,
    /// Two-column XY file of the selected quantity
    Xy,
    /// PNG plot of the selected quantity
    Png,
    /// SVG plot of the selected quantity
    Svg,
}

/// sweep 子命令参数
#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub point: PointArgs,

    /// Variable to sweep
    #[arg(short, long, value_enum, default_value = "x")]
    pub axis: SweepAxis,

    /// Sweep range "start:end[:points]" (e.g., "0:1:101", "1e15:1e20:60")
    #[arg(short, long, default_value = "0:1")]
    pub range: String,

    /// Sample spacing
    #[arg(long, value_enum, default_value = "lin")]
    pub spacing: Spacing,

    /// Quantity written to XY files and plots
    #[arg(short, long, value_enum, default_value = "eg")]
    pub quantity: SweepQuantity,

    /// Output file
    #[arg(short, long, default_value = "sweep.csv")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<SweepOutputFormat>,

    /// Use the temperature-corrected (Varshni) bandgap for the optical index
    #[arg(long, default_value_t = false)]
    pub varshni_gap: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot (default: material and quantity)
    #[arg(long)]
    pub title: Option<String>,
}
