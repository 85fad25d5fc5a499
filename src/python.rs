//! src/python.rs
//!
//! Python-bindings (feature `python`). Grafen gaan over de grens als
//! `(n, edges)`, kleuringen als lijsten van kleuren per knoop.

use crate::{
    error::MscError,
    experiment::{run_experiment, write_metrics_csv},
    generate::generate_graph,
    greedy::greedy_color,
    params::{ExperimentParams, TabuConfig},
    search::try_tabu_search,
    Coloring, Graph,
};
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use std::fs::File;
use std::io::BufWriter;

impl From<MscError> for PyErr {
    fn from(e: MscError) -> Self {
        PyValueError::new_err(e.to_string())
    }
}

fn io_err(e: std::io::Error) -> PyErr {
    PyIOError::new_err(e.to_string())
}

/// Python-spiegel van [`TabuConfig`].
#[pyclass(name = "TabuConfig")]
#[derive(Clone, Debug)]
pub struct PyTabuConfig {
    #[pyo3(get, set)]
    pub max_iterations: usize,
    #[pyo3(get, set)]
    pub tabu_tenure: usize,
    #[pyo3(get, set)]
    pub max_no_improve: usize,
}

#[pymethods]
impl PyTabuConfig {
    #[new]
    #[pyo3(signature = (max_iterations = 500, tabu_tenure = 7, max_no_improve = 100))]
    pub fn new(max_iterations: usize, tabu_tenure: usize, max_no_improve: usize) -> Self {
        Self {
            max_iterations,
            tabu_tenure,
            max_no_improve,
        }
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "TabuConfig(max_iterations={}, tabu_tenure={}, max_no_improve={})",
            self.max_iterations, self.tabu_tenure, self.max_no_improve
        )
    }
}

impl From<&PyTabuConfig> for TabuConfig {
    fn from(p: &PyTabuConfig) -> Self {
        TabuConfig::new(p.max_iterations, p.tabu_tenure, p.max_no_improve)
    }
}

/// Python-spiegel van [`ExperimentParams`].
#[pyclass(name = "ExperimentParams")]
#[derive(Clone, Debug)]
pub struct PyExperimentParams {
    #[pyo3(get, set)]
    pub num_graphs: usize,
    #[pyo3(get, set)]
    pub n: usize,
    #[pyo3(get, set)]
    pub p: f64,
    #[pyo3(get, set)]
    pub base_seed: Option<u64>,
}

#[pymethods]
impl PyExperimentParams {
    #[new]
    #[pyo3(signature = (num_graphs = 20, n = 100, p = 0.2, base_seed = Some(42)))]
    pub fn new(num_graphs: usize, n: usize, p: f64, base_seed: Option<u64>) -> Self {
        Self {
            num_graphs,
            n,
            p,
            base_seed,
        }
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl From<&PyExperimentParams> for ExperimentParams {
    fn from(p: &PyExperimentParams) -> Self {
        ExperimentParams {
            num_graphs: p.num_graphs,
            n: p.n,
            p: p.p,
            base_seed: p.base_seed,
        }
    }
}

fn vertex_count(n: i64) -> PyResult<usize> {
    usize::try_from(n)
        .map_err(|_| MscError::InvalidParameter(format!("vertex count must be non-negative, got {n}")).into())
}

/// Genereert een G(n, p) graaf en geeft zijn kantenlijst terug.
#[pyfunction]
#[pyo3(name = "generate_graph", signature = (n, p, seed = None))]
fn generate_graph_py(n: i64, p: f64, seed: Option<u64>) -> PyResult<Vec<(usize, usize)>> {
    let graph = generate_graph(vertex_count(n)?, p, seed)?;
    Ok(graph.edges().collect())
}

/// Greedy kleuring van de graaf `(n, edges)`.
#[pyfunction]
#[pyo3(name = "greedy_color")]
fn greedy_color_py(n: i64, edges: Vec<(usize, usize)>) -> PyResult<(Vec<u32>, u64)> {
    let graph = Graph::from_edge_list(vertex_count(n)?, &edges);
    let (coloring, total) = greedy_color(&graph);
    Ok((coloring.into_vec(), total))
}

/// Tabu-zoektocht vanaf een door Python aangeleverde kleuring.
/// Een ongeldige startkleuring geeft een `ValueError`.
#[pyfunction]
#[pyo3(name = "tabu_search", signature = (n, edges, coloring, config = None))]
fn tabu_search_py(
    py: Python<'_>,
    n: i64,
    edges: Vec<(usize, usize)>,
    coloring: Vec<u32>,
    config: Option<PyTabuConfig>,
) -> PyResult<(Vec<u32>, u64)> {
    let graph = Graph::from_edge_list(vertex_count(n)?, &edges);
    let initial = Coloring::new(coloring);
    let cfg = config.as_ref().map(TabuConfig::from).unwrap_or_default();

    let (best, total) = py.allow_threads(|| try_tabu_search(&graph, &initial, &cfg))?;
    Ok((best.into_vec(), total))
}

/// Voert het batch-experiment uit en geeft de rijen terug in CSV-kolomvolgorde:
/// `(index, greedy_sum, tabu_sum, greedy_colors, tabu_colors, greedy_time, tabu_time)`.
#[pyfunction]
#[pyo3(name = "run_experiment", signature = (params = None, config = None, csv_path = None))]
#[allow(clippy::type_complexity)]
fn run_experiment_py(
    py: Python<'_>,
    params: Option<PyExperimentParams>,
    config: Option<PyTabuConfig>,
    csv_path: Option<String>,
) -> PyResult<Vec<(usize, u64, u64, u32, u32, f64, f64)>> {
    let params = params.as_ref().map(ExperimentParams::from).unwrap_or_default();
    let cfg = config.as_ref().map(TabuConfig::from).unwrap_or_default();

    let report = py.allow_threads(|| run_experiment(&params, &cfg))?;

    if let Some(path) = csv_path {
        let file = File::create(&path).map_err(io_err)?;
        write_metrics_csv(&report.results, BufWriter::new(file)).map_err(io_err)?;
    }

    Ok(report
        .results
        .into_iter()
        .map(|r| {
            (
                r.index,
                r.greedy_sum,
                r.tabu_sum,
                r.greedy_colors,
                r.tabu_colors,
                r.greedy_time,
                r.tabu_time,
            )
        })
        .collect())
}

/// Parset een DIMACS-bestand en geeft `(n, edges)` terug.
#[pyfunction]
#[pyo3(name = "parse_dimacs")]
fn parse_dimacs_py(instance_path: String) -> PyResult<(usize, Vec<(usize, usize)>)> {
    let file = File::open(&instance_path).map_err(io_err)?;
    let graph = Graph::parse_dimacs(file).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok((graph.n(), graph.edges().collect()))
}

/// Definieert de Python-module `_native`.
#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTabuConfig>()?;
    m.add_class::<PyExperimentParams>()?;
    m.add_function(wrap_pyfunction!(generate_graph_py, m)?)?;
    m.add_function(wrap_pyfunction!(greedy_color_py, m)?)?;
    m.add_function(wrap_pyfunction!(tabu_search_py, m)?)?;
    m.add_function(wrap_pyfunction!(run_experiment_py, m)?)?;
    m.add_function(wrap_pyfunction!(parse_dimacs_py, m)?)?;
    Ok(())
}
