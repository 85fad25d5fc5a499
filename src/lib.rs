// src/lib.rs

//! Minimum Sum Coloring: een greedy constructie gevolgd door tabu-zoektocht.
//!
//! Graaf → [`greedy_color`] → kleuring → [`tabu_search`] → verbeterde kleuring.
//! De kern doet geen I/O en gebruikt alleen willekeur via de seed van de
//! graafgenerator.

// Publieke modules voor gebruik binnen de Rust-crate
pub mod coloring;
pub mod error;
pub mod experiment;
pub mod generate;
pub mod graph;
pub mod greedy;
pub mod params;
pub mod search;
pub mod tabu;

#[cfg(feature = "python")]
mod python;

// Her-exporteer de belangrijkste types voor Rust-gebruikers
pub use coloring::{Color, Coloring};
pub use error::MscError;
pub use generate::{generate_graph, generate_random_graphs};
pub use graph::Graph;
pub use greedy::greedy_color;
pub use params::{ExperimentParams, TabuConfig};
pub use search::{tabu_search, try_tabu_search, TabuSearch};
