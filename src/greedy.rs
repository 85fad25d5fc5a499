//! src/greedy.rs
//!
//! Greedy constructie van een eerste toegelaten kleuring: knopen in
//! niet-stijgende graadvolgorde (gelijke graad: oplopend id), elke knoop
//! krijgt de kleinste positieve kleur die geen reeds gekleurde buur draagt.
use crate::{
    coloring::{Color, Coloring},
    graph::Graph,
};
use tracing::instrument;

/// De deterministische verwerkingsvolgorde van de greedy heuristiek.
pub fn degree_order(graph: &Graph) -> Vec<usize> {
    let mut order: Vec<usize> = (0..graph.n()).collect();
    // Stabiele sort: gelijke graden blijven in oplopende id-volgorde.
    order.sort_by_key(|&v| std::cmp::Reverse(graph.degree(v)));
    order
}

/// Kleurt `graph` in één doorgang en geeft de kleuring met zijn som terug.
#[instrument(skip_all, fields(n = graph.n()))]
pub fn greedy_color(graph: &Graph) -> (Coloring, u64) {
    // 0 = nog niet gekleurd.
    let mut colors: Vec<Color> = vec![0; graph.n()];
    // `used[c]` gelijk aan de stempel van de huidige knoop = kleur c is bezet.
    let mut used: Vec<usize> = Vec::new();

    for (stamp, v) in degree_order(graph).into_iter().enumerate() {
        let stamp = stamp + 1;
        for &u in graph.neighbors(v) {
            let c = colors[u] as usize;
            if c > 0 {
                if c >= used.len() {
                    used.resize(c + 1, 0);
                }
                used[c] = stamp;
            }
        }
        let mut c = 1;
        while used.get(c) == Some(&stamp) {
            c += 1;
        }
        colors[v] = c as Color;
    }

    let coloring = Coloring::new(colors);
    let total = coloring.objective();
    tracing::debug!(objective = total, colors = coloring.color_count(), "greedy coloring built");
    (coloring, total)
}
