//! src/tabu.rs
//!
//! Korte-termijn tabu-geheugen voor herkleur-moves. Voor elk paar
//! (knoop, kleur) wordt bijgehouden tot en met welke iteratie het taboe is om
//! de knoop weer die kleur te geven. Verlopen gebeurt impliciet bij het lezen.

use crate::coloring::Color;

/// Beheert de `(vertex, color) → forbidden-until` tabel van één zoekrun.
#[derive(Clone, Debug)]
pub struct TabuList {
    /// `expiry[v][c]` is de laatste iteratie waarin kleur `c` taboe is voor `v`.
    /// 0 betekent "nooit verboden"; iteraties beginnen bij 1.
    expiry: Vec<Vec<usize>>,
    /// Huidige globale iteratieteller.
    iter: usize,
    /// Vaste tabu-duur.
    tenure: usize,
}

impl TabuList {
    /// Creëert een lege tabu-lijst voor `n` knopen.
    pub fn new(n: usize, tenure: usize) -> Self {
        Self {
            expiry: vec![Vec::new(); n],
            iter: 0,
            tenure,
        }
    }

    /// De huidige iteratie.
    #[inline]
    pub fn iteration(&self) -> usize {
        self.iter
    }

    /// Controleert of het taboe is om knoop `v` kleur `c` te geven.
    #[inline]
    pub fn is_tabu(&self, v: usize, c: Color) -> bool {
        self.expiry
            .get(v)
            .and_then(|row| row.get(c as usize))
            .is_some_and(|&until| self.iter <= until)
    }

    /// Verbiedt de terugkeer van `v` naar kleur `c` tot en met `iter + tenure`.
    pub fn forbid(&mut self, v: usize, c: Color) {
        let row = &mut self.expiry[v];
        let c = c as usize;
        if c >= row.len() {
            row.resize(c + 1, 0);
        }
        row[c] = self.iter + self.tenure;
    }

    /// Verhoogt de globale iteratieteller.
    #[inline]
    pub fn step(&mut self) {
        self.iter += 1;
    }
}
