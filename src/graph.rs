//! src/graph.rs
//!
//! Representeert een simpele, ongerichte graaf. Elke knoop heeft een 'BitVec'-rij
//! in de adjacency matrix (O(1) kant-test) en een aaneengesloten lijst van
//! buur-indices (voor het opsommen van buren in de tabu-zoektocht).
//! Ondersteunt het parsen van het DIMACS *.col/*.clq-formaat.

use bitvec::prelude::*;
use std::io::{self, BufRead, Read};

/// Bovengrens op `n` in een DIMACS-kopregel; de matrix kost `n²` bits.
pub const MAX_DIMACS_VERTICES: usize = 1 << 15;

/// Een ongerichte graaf zonder zelf-lussen, onveranderlijk na constructie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    /// Adjacency matrix; `adj[i][j]` is 1 als er een kant (i,j) bestaat, met j != i.
    adj: Vec<BitVec>,
    /// `neighbours[v]` bevat dezelfde kanten als `adj[v]`, als indexlijst.
    neighbours: Vec<Vec<usize>>,
}

impl Graph {
    /*────────── Constructors ──────────*/

    /// Creëert een lege graaf met `n` geïsoleerde knopen.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            adj: (0..n).map(|_| bitvec![0; n]).collect(),
            neighbours: vec![Vec::new(); n],
        }
    }

    /// Bouwt een graaf op basis van een expliciete lijst van kanten (0-gebaseerde indices).
    /// Kanten buiten bereik, zelf-lussen en duplicaten worden genegeerd.
    pub fn from_edge_list(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut g = Self::with_vertices(n);
        for &(u, v) in edges {
            if u < n && v < n && u != v {
                g.add_edge(u, v);
            }
        }
        g
    }

    /// Parset het DIMACS-formaat (`p edge n m`, `e u v`) vanuit een reader.
    pub fn parse_dimacs<R: Read>(reader: R) -> io::Result<Self> {
        let mut n = 0usize;
        let mut edges: Vec<(usize, usize)> = Vec::new();
        let mut header_found = false;

        for line_result in io::BufReader::new(reader).lines() {
            let line = line_result?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('c') {
                continue;
            }

            let parts: Vec<_> = line.split_whitespace().collect();
            match parts[0] {
                "p" if parts.len() >= 4 => {
                    n = parse_field(parts[2])?;
                    let m: usize = parse_field(parts[3])?;
                    if n > MAX_DIMACS_VERTICES {
                        return Err(invalid_data(&format!(
                            "n={n} exceeds the supported maximum of {MAX_DIMACS_VERTICES} vertices"
                        )));
                    }
                    // De kopregel is onbetrouwbaar: reserveer nooit meer dan n(n-1)/2 kanten.
                    edges.reserve(m.min(n * n.saturating_sub(1) / 2));
                    header_found = true;
                }
                "e" if parts.len() >= 3 => {
                    if !header_found {
                        return Err(invalid_data("Edge line 'e' found before problem line 'p'"));
                    }
                    let u = parse_field(parts[1])?;
                    let v = parse_field(parts[2])?;
                    if u == 0 || v == 0 || u > n || v > n {
                        return Err(invalid_data(&format!(
                            "Edge ({u}, {v}) out of bounds for n={n}"
                        )));
                    }
                    edges.push((u - 1, v - 1)); // DIMACS is 1-based, wij zijn 0-based
                }
                _ => { /* Negeer andere regels */ }
            }
        }

        if !header_found {
            return Err(invalid_data("Missing problem line 'p'"));
        }
        Ok(Self::from_edge_list(n, &edges))
    }

    /*────────── Getters ──────────*/

    /// Geeft het aantal knopen (vertices) in de graaf terug.
    #[inline]
    pub fn n(&self) -> usize {
        self.adj.len()
    }

    /// Geeft het aantal kanten (edges) in de graaf terug (elke kant eenmaal geteld).
    pub fn m(&self) -> usize {
        self.neighbours.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Geeft de graad van knoop `v` terug; 0 voor een knoop buiten bereik.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.neighbours.get(v).map_or(0, Vec::len)
    }

    /// De buren van `v`. Een knoop buiten bereik heeft geen buren.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.neighbours.get(v).map(Vec::as_slice).unwrap_or_default()
    }

    /// Controleert of de kant (u,v) bestaat.
    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u < self.n() && v < self.n() && self.adj[u][v]
    }

    /// Alle kanten als paren `(u, v)` met `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.neighbours.iter().enumerate().flat_map(|(u, ns)| {
            ns.iter().copied().filter(move |&v| u < v).map(move |v| (u, v))
        })
    }

    /*────────── Mutators ──────────*/

    /// Voegt een ongerichte kant toe. Alleen constructors en generatoren
    /// mogen de graaf opbouwen; daarna is hij onveranderlijk.
    pub(crate) fn add_edge(&mut self, u: usize, v: usize) {
        debug_assert!(u < self.n() && v < self.n() && u != v, "Knoopindex buiten bereik of zelf-lus");
        if self.adj[u][v] {
            return;
        }
        self.adj[u].set(v, true);
        self.adj[v].set(u, true);
        self.neighbours[u].push(v);
        self.neighbours[v].push(u);
    }
}

fn parse_field(s: &str) -> io::Result<usize> {
    s.parse().map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn invalid_data(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.to_owned())
}
