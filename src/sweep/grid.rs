//! # 扫描网格
//!
//! 解析 `start:end[:points]` 范围字符串并生成线性或对数采样点。
//! 两个端点总是精确落在网格上。
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 调用
//! - 使用 `regex` 解析范围字符串

use crate::cli::sweep::Spacing;
use crate::error::{AlloyError, Result};

use regex::Regex;

/// 未给出点数时的默认值
pub const DEFAULT_POINTS: usize = 51;

const RANGE_PATTERN: &str = r"^\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*:\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*(?::\s*(\d+))?\s*$";

/// 扫描范围
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    pub start: f64,
    pub end: f64,
    pub points: usize,
}

impl SweepRange {
    /// 解析 "start:end[:points]"
    pub fn parse(range: &str) -> Result<Self> {
        let re = Regex::new(RANGE_PATTERN).map_err(|e| AlloyError::Other(e.to_string()))?;
        let caps = re
            .captures(range)
            .ok_or_else(|| AlloyError::InvalidRange(format!("{} (expected start:end[:points])", range)))?;

        let number = |i: usize| -> Result<f64> {
            caps[i]
                .parse::<f64>()
                .map_err(|_| AlloyError::InvalidRange(range.to_string()))
        };
        let start = number(1)?;
        let end = number(2)?;

        let points = match caps.get(3) {
            Some(m) => m
                .as_str()
                .parse::<usize>()
                .map_err(|_| AlloyError::InvalidRange(range.to_string()))?,
            None => DEFAULT_POINTS,
        };

        if points == 0 {
            return Err(AlloyError::InvalidRange(format!(
                "{} (points must be at least 1)",
                range
            )));
        }

        Ok(Self { start, end, points })
    }

    /// 生成采样点
    pub fn values(&self, spacing: Spacing) -> Result<Vec<f64>> {
        if self.points == 1 {
            return Ok(vec![self.start]);
        }

        let last = (self.points - 1) as f64;
        let mut values: Vec<f64> = match spacing {
            Spacing::Lin => (0..self.points)
                .map(|i| self.start + (self.end - self.start) * (i as f64 / last))
                .collect(),
            Spacing::Log => {
                if !(self.start > 0.0 && self.end > 0.0) {
                    return Err(AlloyError::InvalidRange(format!(
                        "{}:{} (log spacing needs a positive range)",
                        self.start, self.end
                    )));
                }
                let (a, b) = (self.start.ln(), self.end.ln());
                (0..self.points)
                    .map(|i| (a + (b - a) * (i as f64 / last)).exp())
                    .collect()
            }
        };

        values[0] = self.start;
        values[self.points - 1] = self.end;
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        let r = SweepRange::parse("0:1:11").unwrap();
        assert_eq!(r, SweepRange { start: 0.0, end: 1.0, points: 11 });

        let r = SweepRange::parse(" 1e15 : 1E20 ").unwrap();
        assert_eq!(r.start, 1e15);
        assert_eq!(r.end, 1e20);
        assert_eq!(r.points, DEFAULT_POINTS);

        let r = SweepRange::parse("-.5:+2.5:3").unwrap();
        assert_eq!(r.start, -0.5);
        assert_eq!(r.end, 2.5);
    }

    #[test]
    fn test_parse_range_errors() {
        assert!(SweepRange::parse("0-1").is_err());
        assert!(SweepRange::parse("a:b").is_err());
        assert!(SweepRange::parse("0:1:0").is_err());
        assert!(SweepRange::parse("0:1:2:3").is_err());
    }

    #[test]
    fn test_linear_values() {
        let v = SweepRange::parse("0.3:1.2:4").unwrap().values(Spacing::Lin).unwrap();
        assert_eq!(v.len(), 4);
        assert_eq!(v[0], 0.3);
        assert_eq!(v[3], 1.2);
        assert!((v[1] - 0.6).abs() < 1e-12);
        assert!((v[2] - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_log_values() {
        let v = SweepRange::parse("1e15:1e19:5").unwrap().values(Spacing::Log).unwrap();
        assert_eq!(v[0], 1e15);
        assert_eq!(v[4], 1e19);
        for (i, value) in v.iter().enumerate() {
            let expected = 10f64.powi(15 + i as i32);
            assert!((value - expected).abs() / expected < 1e-12);
        }
    }

    #[test]
    fn test_log_spacing_needs_positive_range() {
        let r = SweepRange::parse("0:1e19:5").unwrap();
        assert!(r.values(Spacing::Log).is_err());
    }

    #[test]
    fn test_descending_and_single_point() {
        let v = SweepRange::parse("500:100:5").unwrap().values(Spacing::Lin).unwrap();
        assert_eq!(v, vec![500.0, 400.0, 300.0, 200.0, 100.0]);

        let v = SweepRange::parse("300:400:1").unwrap().values(Spacing::Lin).unwrap();
        assert_eq!(v, vec![300.0]);
    }
}
