//! src/coloring.rs
//!
//! Een kleuring als waarde-object: knoop `v` krijgt kleur `colors[v] >= 1`.
//! De doelwaarde (som van de kleuren) en het aantal kleuren (maximum) worden
//! hier berekend; de tabu-zoektocht houdt de som daarna incrementeel bij.

use crate::{error::MscError, graph::Graph};
use serde::{Deserialize, Serialize};

/// Een kleur is een positief geheel getal (1-gebaseerd).
pub type Color = u32;

/// Een totale toewijzing knoop → kleur.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coloring {
    colors: Vec<Color>,
}

impl Coloring {
    /// Wikkelt een vector van kleuren, geïndexeerd per knoop.
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Geeft de kleur van knoop `v` terug, of `None` buiten bereik.
    #[inline]
    pub fn color(&self, v: usize) -> Option<Color> {
        self.colors.get(v).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    pub fn into_vec(self) -> Vec<Color> {
        self.colors
    }

    /// Aantal gekleurde knopen.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// De MSC-doelwaarde: `Σ color[v]`.
    pub fn objective(&self) -> u64 {
        self.colors.iter().map(|&c| u64::from(c)).sum()
    }

    /// Het hoogste kleurnummer in gebruik (0 voor een lege kleuring).
    pub fn color_count(&self) -> Color {
        self.colors.iter().copied().max().unwrap_or(0)
    }

    /// `true` als geen enkele kant twee knopen met dezelfde kleur verbindt.
    /// Veronderstelt dat de lengte overeenkomt met `graph.n()`.
    pub fn is_feasible(&self, graph: &Graph) -> bool {
        self.colors.len() == graph.n()
            && graph.edges().all(|(u, v)| self.colors[u] != self.colors[v])
    }

    /// Valideert een door de aanroeper aangeleverde kleuring tegen `graph`:
    /// juiste lengte, alleen positieve kleuren en geen conflicterende kant.
    pub fn check_feasible(&self, graph: &Graph) -> Result<(), MscError> {
        if self.colors.len() != graph.n() {
            return Err(MscError::InvalidColoring(format!(
                "coloring has {} entries but graph has {} vertices",
                self.colors.len(),
                graph.n()
            )));
        }
        if let Some(v) = self.colors.iter().position(|&c| c == 0) {
            return Err(MscError::InvalidColoring(format!(
                "vertex {v} has color 0; colors start at 1"
            )));
        }
        if let Some((u, v)) = graph.edges().find(|&(u, v)| self.colors[u] == self.colors[v]) {
            return Err(MscError::InvalidColoring(format!(
                "adjacent vertices {u} and {v} share color {}",
                self.colors[u]
            )));
        }
        Ok(())
    }

    /// Herkleurt knoop `v`. Alleen de zoekmotor wijzigt een kleuring in-place,
    /// en dan altijd op zijn eigen werkkopie.
    #[inline]
    pub(crate) fn set(&mut self, v: usize, c: Color) {
        self.colors[v] = c;
    }
}

impl From<Vec<Color>> for Coloring {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}
