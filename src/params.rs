//! src/params.rs
//!
//! Bundelt alle afstembare parameters voor de tabu-zoektocht en de
//! experiment-runner. Er zijn geen globale constanten: de aanroeper geeft
//! altijd expliciet een configuratie mee.

use serde::{Deserialize, Serialize};

/// Afstembare besturingselementen voor de tabu-zoektocht.
///
/// De standaardwaarden zijn afgestemd op grafen met ongeveer 100 knopen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabuConfig {
    /// Absolute bovengrens op het aantal iteraties.
    pub max_iterations: usize,
    /// Aantal iteraties dat een omgekeerde move taboe blijft.
    pub tabu_tenure: usize,
    /// Stop na zoveel iteraties zonder nieuwe beste oplossing.
    pub max_no_improve: usize,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            tabu_tenure: 7,
            max_no_improve: 100,
        }
    }
}

impl TabuConfig {
    pub fn new(max_iterations: usize, tabu_tenure: usize, max_no_improve: usize) -> Self {
        Self {
            max_iterations,
            tabu_tenure,
            max_no_improve,
        }
    }
}

/// Parameters van een batch-experiment over willekeurige G(n, p) grafen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentParams {
    pub num_graphs: usize,
    pub n: usize,
    pub p: f64,
    /// Graaf `i` krijgt seed `base_seed + i`; `None` = niet reproduceerbaar.
    pub base_seed: Option<u64>,
}

impl Default for ExperimentParams {
    fn default() -> Self {
        Self {
            num_graphs: 20,
            n: 100,
            p: 0.2,
            base_seed: Some(42),
        }
    }
}
