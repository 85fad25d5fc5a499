//! src/error.rs
//!
//! Foutentaxonomie van de kern. Alleen de graafgeneratie en het valideren
//! van door de aanroeper aangeleverde kleuringen kunnen falen; de greedy
//! constructie en de tabu-zoektocht zijn totaal over geldige invoer.

/// Fouten die de publieke API kan teruggeven.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MscError {
    /// Een parameter buiten zijn domein, bv. een kantkans buiten `[0, 1]`.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Een kleuring die niet past bij de graaf of niet toegelaten is.
    #[error("invalid coloring: {0}")]
    InvalidColoring(String),
}
