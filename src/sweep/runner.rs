//! # 扫描执行器
//!
//! 在 rayon 线程池上并行求值扫描网格。查询是无状态纯函数，
//! 各点之间无需任何同步；结果按网格顺序返回。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代
//! - 进度条显示
//! - 失败点收集与汇总
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{AlloyError, QueryError, QueryResult, Result};
use crate::query::ParameterSet;
use crate::utils::progress;

use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 少于该点数时不显示进度条
const QUIET_BELOW: usize = 200;

/// 单个网格点的结果
#[derive(Debug, Clone)]
pub struct SweepPoint {
    /// 扫描变量取值
    pub value: f64,
    pub outcome: QueryResult<ParameterSet>,
}

/// 扫描结果
#[derive(Debug, Default)]
pub struct SweepResult {
    /// 按网格顺序排列
    pub points: Vec<SweepPoint>,
    pub succeeded: usize,
    pub failed: usize,
}

impl SweepResult {
    /// 求值成功的点
    pub fn successes(&self) -> impl Iterator<Item = (f64, &ParameterSet)> {
        self.points
            .iter()
            .filter_map(|p| p.outcome.as_ref().ok().map(|set| (p.value, set)))
    }

    /// 求值失败的点
    pub fn failures(&self) -> impl Iterator<Item = (f64, &QueryError)> {
        self.points
            .iter()
            .filter_map(|p| p.outcome.as_ref().err().map(|e| (p.value, e)))
    }

    pub fn total(&self) -> usize {
        self.points.len()
    }
}

/// 扫描执行器
pub struct SweepRunner {
    /// 并行作业数
    jobs: usize,
}

impl SweepRunner {
    /// 创建执行器，`jobs = 0` 时使用全部核心
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行求值
    pub fn run<F>(&self, values: &[f64], evaluate: F) -> Result<SweepResult>
    where
        F: Fn(f64) -> QueryResult<ParameterSet> + Sync + Send,
    {
        let pb = progress::create_sweep_bar(
            values.len() as u64,
            "Evaluating",
            values.len() < QUIET_BELOW,
        );

        let succeeded = AtomicUsize::new(0);
        let failed = AtomicUsize::new(0);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| AlloyError::Other(format!("Failed to build thread pool: {}", e)))?;

        let points: Vec<SweepPoint> = pool.install(|| {
            values
                .par_iter()
                .map(|&value| {
                    let outcome = evaluate(value);
                    match &outcome {
                        Ok(_) => succeeded.fetch_add(1, Ordering::Relaxed),
                        Err(_) => failed.fetch_add(1, Ordering::Relaxed),
                    };
                    pb.inc(1);
                    SweepPoint { value, outcome }
                })
                .collect()
        });

        pb.finish_and_clear();

        Ok(SweepResult {
            points,
            succeeded: succeeded.into_inner(),
            failed: failed.into_inner(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::tables::INGAN;
    use crate::query::{GapSource, ParameterEngine, QueryContext};

    #[test]
    fn test_runner_preserves_grid_order() {
        let engine = ParameterEngine::new(&INGAN);
        let values: Vec<f64> = (0..=20).map(|i| i as f64 / 20.0).collect();

        let result = SweepRunner::new(4)
            .run(&values, |x| {
                engine.evaluate_all(&QueryContext::new(x, 300.0), GapSource::Reference)
            })
            .unwrap();

        assert_eq!(result.total(), 21);
        assert_eq!(result.succeeded, 21);
        assert_eq!(result.failed, 0);
        for (point, expected) in result.points.iter().zip(&values) {
            assert_eq!(point.value, *expected);
        }

        let gaps: Vec<f64> = result.successes().map(|(_, s)| s.band.bandgap).collect();
        assert_eq!(gaps[0], 3.42);
        assert_eq!(gaps[20], 0.7);
    }

    #[test]
    fn test_runner_collects_failures() {
        let engine = ParameterEngine::new(&INGAN);
        let values = [0.5, 1.5, -0.1];

        let result = SweepRunner::new(2)
            .run(&values, |x| {
                engine.evaluate_all(&QueryContext::new(x, 300.0), GapSource::Reference)
            })
            .unwrap();

        assert_eq!(result.succeeded, 1);
        assert_eq!(result.failed, 2);
        let failed: Vec<f64> = result.failures().map(|(v, _)| v).collect();
        assert_eq!(failed, vec![1.5, -0.1]);
    }

    #[test]
    fn test_auto_jobs() {
        assert!(SweepRunner::new(0).jobs() >= 1);
        assert_eq!(SweepRunner::new(3).jobs(), 3);
    }
}
