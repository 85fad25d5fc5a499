//! src/generate.rs
//!
//! Erdős–Rényi G(n, p) generatoren. Met een seed wordt `ChaCha8Rng` gebruikt,
//! zodat dezelfde `(n, p, seed)` op elk platform exact dezelfde graaf oplevert.

use crate::{error::MscError, graph::Graph};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Genereert een ongerichte G(n, p) graaf.
///
/// Elk paar `(u, v)` met `u < v` wordt (u buiten, v binnen) onafhankelijk
/// opgenomen als een uniforme trekking in `[0, 1)` kleiner is dan `p`.
/// Zonder `seed` komt de RNG uit OS-entropie en is de trekking niet reproduceerbaar.
pub fn generate_graph(n: usize, p: f64, seed: Option<u64>) -> Result<Graph, MscError> {
    check_probability(p)?;
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    Ok(erdos_renyi(n, p, &mut rng))
}

/// Genereert `count` onafhankelijke grafen. Graaf `i` gebruikt seed
/// `base_seed + i`, zodat de hele batch uit één waarde reproduceerbaar is.
pub fn generate_random_graphs(
    count: usize,
    n: usize,
    p: f64,
    base_seed: Option<u64>,
) -> Result<Vec<Graph>, MscError> {
    check_probability(p)?;
    (0..count)
        .map(|i| generate_graph(n, p, base_seed.map(|s| s.wrapping_add(i as u64))))
        .collect()
}

fn erdos_renyi<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> Graph {
    let mut g = Graph::with_vertices(n);
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen::<f64>() < p {
                g.add_edge(u, v);
            }
        }
    }
    g
}

fn check_probability(p: f64) -> Result<(), MscError> {
    // NaN valt ook buiten het bereik.
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(MscError::InvalidParameter(format!(
            "edge probability p must be in [0, 1], got {p}"
        )))
    }
}
