//! src/experiment.rs
//!
//! Batch-experiment: genereer `num_graphs` willekeurige grafen, kleur ze
//! greedy, verbeter met tabu-zoektocht en meet beide stappen. Het resultaat
//! is één rij per graaf, plus een voorbeeldgraaf voor presentatielagen.
use crate::{
    coloring::{Color, Coloring},
    error::MscError,
    generate::generate_random_graphs,
    graph::Graph,
    greedy::greedy_color,
    params::{ExperimentParams, TabuConfig},
    search::tabu_search,
};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::time::Instant;
use tracing::{info, instrument};

#[cfg(feature = "parallel_batch")]
use rayon::prelude::*;

/// Meetwaarden voor één graaf. Tijden in seconden.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResult {
    /// 1-gebaseerde index in de batch.
    pub index: usize,
    pub greedy_sum: u64,
    pub tabu_sum: u64,
    pub greedy_colors: Color,
    pub tabu_colors: Color,
    pub greedy_time: f64,
    pub tabu_time: f64,
}

/// Gemiddelden over de hele batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExperimentSummary {
    pub avg_greedy_sum: f64,
    pub avg_tabu_sum: f64,
    pub avg_improvement: f64,
}

/// Alle rijen van een run, plus de eerste graaf met zijn tabu-kleuring.
#[derive(Clone, Debug)]
pub struct ExperimentReport {
    pub results: Vec<ExperimentResult>,
    pub example: Option<(Graph, Coloring)>,
}

impl ExperimentReport {
    /// `None` voor een lege batch.
    pub fn summary(&self) -> Option<ExperimentSummary> {
        if self.results.is_empty() {
            return None;
        }
        let count = self.results.len() as f64;
        let avg_greedy_sum = self.results.iter().map(|r| r.greedy_sum as f64).sum::<f64>() / count;
        let avg_tabu_sum = self.results.iter().map(|r| r.tabu_sum as f64).sum::<f64>() / count;
        Some(ExperimentSummary {
            avg_greedy_sum,
            avg_tabu_sum,
            avg_improvement: avg_greedy_sum - avg_tabu_sum,
        })
    }
}

/// Voert het volledige experiment uit. Faalt alleen bij ongeldige parameters.
#[instrument(skip_all, fields(num_graphs = params.num_graphs, n = params.n, p = params.p))]
pub fn run_experiment(params: &ExperimentParams, config: &TabuConfig) -> Result<ExperimentReport, MscError> {
    let graphs = generate_random_graphs(params.num_graphs, params.n, params.p, params.base_seed)?;
    info!(?config, "running greedy + tabu search over batch");

    #[cfg(feature = "parallel_batch")]
    let mut evaluated: Vec<(ExperimentResult, Coloring)> = graphs
        .par_iter()
        .enumerate()
        .map(|(i, g)| evaluate(i + 1, g, config))
        .collect();

    #[cfg(not(feature = "parallel_batch"))]
    let mut evaluated: Vec<(ExperimentResult, Coloring)> = graphs
        .iter()
        .enumerate()
        .map(|(i, g)| evaluate(i + 1, g, config))
        .collect();

    let example = match (graphs.into_iter().next(), evaluated.first_mut()) {
        (Some(g), Some((_, coloring))) => Some((g, std::mem::take(coloring))),
        _ => None,
    };
    let report = ExperimentReport {
        results: evaluated.into_iter().map(|(r, _)| r).collect(),
        example,
    };

    if let Some(s) = report.summary() {
        info!(
            avg_greedy_sum = s.avg_greedy_sum,
            avg_tabu_sum = s.avg_tabu_sum,
            avg_improvement = s.avg_improvement,
            "experiment summary"
        );
    }
    Ok(report)
}

/// Greedy + tabu op één graaf, met tijdmeting per stap.
fn evaluate(index: usize, graph: &Graph, config: &TabuConfig) -> (ExperimentResult, Coloring) {
    let t0 = Instant::now();
    let (greedy, greedy_sum) = greedy_color(graph);
    let greedy_time = t0.elapsed().as_secs_f64();

    let t1 = Instant::now();
    let (best, tabu_sum) = tabu_search(graph, &greedy, config);
    let tabu_time = t1.elapsed().as_secs_f64();

    let result = ExperimentResult {
        index,
        greedy_sum,
        tabu_sum,
        greedy_colors: greedy.color_count(),
        tabu_colors: best.color_count(),
        greedy_time,
        tabu_time,
    };
    info!(
        index,
        greedy_sum,
        tabu_sum,
        greedy_colors = result.greedy_colors,
        tabu_colors = result.tabu_colors,
        "graph evaluated"
    );
    (result, best)
}

/// Schrijft de metrieken als CSV: één kopregel en één regel per graaf.
pub fn write_metrics_csv<W: Write>(results: &[ExperimentResult], mut writer: W) -> io::Result<()> {
    writeln!(writer, "index,greedy_sum,tabu_sum,greedy_colors,tabu_colors,greedy_time,tabu_time")?;
    for r in results {
        writeln!(
            writer,
            "{},{},{},{},{},{:.6},{:.6}",
            r.index, r.greedy_sum, r.tabu_sum, r.greedy_colors, r.tabu_colors, r.greedy_time, r.tabu_time
        )?;
    }
    writer.flush()
}
