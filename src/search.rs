//! src/search.rs
//!
//! Tabu-zoektocht voor Minimum Sum Coloring. De buurt bestaat uit alle
//! toegelaten herkleuringen van één knoop; elke iteratie wordt de beste
//! niet-taboe move genomen (ook als die verslechtert), en de terugkeer naar de
//! vorige kleur wordt `tabu_tenure` iteraties verboden. Een taboe move mag toch
//! als hij een nieuwe globale beste oplossing oplevert (aspiratie).
use crate::{
    coloring::{Color, Coloring},
    error::MscError,
    graph::Graph,
    params::TabuConfig,
    tabu::TabuList,
};
use tracing::{debug, instrument};

/// Eén herkleur-move: knoop `vertex` gaat van `from` naar `to`, met `value`
/// als doelwaarde na de move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub vertex: usize,
    pub from: Color,
    pub to: Color,
    pub value: u64,
}

/// Waarom een zoekrun stopte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// `max_iterations` bereikt.
    IterationLimit,
    /// `max_no_improve` iteraties zonder nieuwe beste oplossing.
    Stagnation,
    /// Geen enkele toegelaten, niet-verboden move meer.
    NoAdmissibleMove,
}

/// Resultaat van een volledige zoekrun.
#[derive(Clone, Debug)]
pub struct TabuOutcome {
    pub coloring: Coloring,
    pub objective: u64,
    /// Aantal gestarte iteraties.
    pub iterations: usize,
    /// Iteratie van de laatste verbetering (0 = nooit verbeterd).
    pub last_improvement: usize,
    pub stop_reason: StopReason,
}

/// De toestand van één tabu-zoekrun. Bezit zijn werkkopie, de incumbent en het
/// tabu-geheugen; de graaf wordt alleen gelezen.
#[derive(Clone, Debug)]
pub struct TabuSearch<'g> {
    graph: &'g Graph,
    config: TabuConfig,
    current: Coloring,
    current_value: u64,
    best: Coloring,
    best_value: u64,
    tabu: TabuList,
    /// Hoogste kleur die in deze run gebruikt is; groeit alleen.
    max_color: Color,
    no_improve: usize,
    last_improvement: usize,
    /// `marks[c] == stamp` betekent dat een buur van de huidige knoop kleur `c` heeft.
    marks: Vec<usize>,
    stamp: usize,
}

impl<'g> TabuSearch<'g> {
    /// Als [`TabuSearch::new`], maar valideert `initial` eerst met
    /// [`Coloring::check_feasible`] in plaats van te vertrouwen op de aanroeper.
    pub fn try_new(graph: &'g Graph, initial: &Coloring, config: &TabuConfig) -> Result<Self, MscError> {
        initial.check_feasible(graph)?;
        Ok(Self::new(graph, initial, config))
    }

    /// Start een zoekrun vanaf een toegelaten kleuring. De kleuring van de
    /// aanroeper wordt gekopieerd, nooit gewijzigd.
    ///
    /// # Panics
    ///
    /// Als `initial` niet precies één kleur per knoop heeft. Toegelaatbaarheid
    /// wordt alleen in debug-builds gecontroleerd; gebruik [`TabuSearch::try_new`]
    /// voor niet-vertrouwde invoer.
    pub fn new(graph: &'g Graph, initial: &Coloring, config: &TabuConfig) -> Self {
        assert_eq!(initial.len(), graph.n(), "Kleuring en graaf hebben een verschillend aantal knopen");
        debug_assert!(initial.is_feasible(graph), "Startkleuring is niet toegelaten");

        let current_value = initial.objective();
        let max_color = initial.color_count();
        Self {
            graph,
            config: config.clone(),
            current: initial.clone(),
            current_value,
            best: initial.clone(),
            best_value: current_value,
            tabu: TabuList::new(graph.n(), config.tabu_tenure),
            max_color,
            no_improve: 0,
            last_improvement: 0,
            marks: vec![0; max_color as usize + 2],
            stamp: 0,
        }
    }

    /*────────── Queries ──────────*/

    #[inline]
    pub fn current(&self) -> &Coloring {
        &self.current
    }

    #[inline]
    pub fn current_objective(&self) -> u64 {
        self.current_value
    }

    #[inline]
    pub fn best(&self) -> &Coloring {
        &self.best
    }

    #[inline]
    pub fn best_objective(&self) -> u64 {
        self.best_value
    }

    /// Aantal gestarte iteraties.
    #[inline]
    pub fn iteration(&self) -> usize {
        self.tabu.iteration()
    }

    #[inline]
    pub fn iterations_without_improvement(&self) -> usize {
        self.no_improve
    }

    #[inline]
    pub fn max_color(&self) -> Color {
        self.max_color
    }

    /*────────── Zoeken ──────────*/

    /// Voert één iteratie uit: kies en pas de beste toegestane move toe.
    /// Geeft `None` terug als er geen enkele toegestane move bestaat.
    pub fn step(&mut self) -> Option<Move> {
        self.tabu.step();
        let mv = self.best_move()?;

        self.current.set(mv.vertex, mv.to);
        self.current_value = mv.value;
        if mv.to > self.max_color {
            self.max_color = mv.to;
            self.marks.resize(self.max_color as usize + 2, 0);
        }
        // Verbied de terugkeer naar de kleur die we net verlaten hebben.
        self.tabu.forbid(mv.vertex, mv.from);

        if self.current_value < self.best_value {
            self.best = self.current.clone();
            self.best_value = self.current_value;
            self.no_improve = 0;
            self.last_improvement = self.tabu.iteration();
            debug!(iteration = self.tabu.iteration(), objective = self.best_value, "new incumbent");
        } else {
            self.no_improve += 1;
        }
        Some(mv)
    }

    /// Loopt tot een van de stopcriteria bereikt is en geeft de beste
    /// gevonden kleuring terug.
    pub fn run(mut self) -> TabuOutcome {
        let stop_reason = loop {
            if self.tabu.iteration() >= self.config.max_iterations {
                break StopReason::IterationLimit;
            }
            if self.no_improve >= self.config.max_no_improve {
                break StopReason::Stagnation;
            }
            if self.step().is_none() {
                break StopReason::NoAdmissibleMove;
            }
        };

        debug!(
            iterations = self.tabu.iteration(),
            objective = self.best_value,
            ?stop_reason,
            "tabu search finished"
        );
        TabuOutcome {
            coloring: self.best,
            objective: self.best_value,
            iterations: self.tabu.iteration(),
            last_improvement: self.last_improvement,
            stop_reason,
        }
    }

    /// Zoekt over alle knopen `v` en kleuren `c ∈ 1..=max_color+1` de move met
    /// de laagste doelwaarde. Bij gelijke waarde wint de eerst gevonden move
    /// (laagste knoop, dan laagste kleur).
    fn best_move(&mut self) -> Option<Move> {
        let mut best: Option<Move> = None;

        for v in 0..self.graph.n() {
            self.stamp += 1;
            let stamp = self.stamp;
            for &u in self.graph.neighbors(v) {
                self.marks[self.current.as_slice()[u] as usize] = stamp;
            }

            let from = self.current.as_slice()[v];
            for to in 1..=self.max_color + 1 {
                if to == from || self.marks[to as usize] == stamp {
                    continue;
                }
                let value = self.current_value - u64::from(from) + u64::from(to);

                // Aspiratie: een taboe move mag alleen als hij de globale beste verbetert.
                if self.tabu.is_tabu(v, to) && value >= self.best_value {
                    continue;
                }
                if best.map_or(true, |b| value < b.value) {
                    best = Some(Move { vertex: v, from, to, value });
                }
            }
        }
        best
    }
}

/// Verbetert een toegelaten kleuring met tabu-zoektocht en geeft de beste
/// gevonden kleuring met zijn som terug. De som is nooit groter dan die van
/// `initial`.
///
/// # Panics
///
/// Als `initial` niet precies `graph.n()` kleuren heeft. De startkleuring
/// moet toegelaten zijn; [`try_tabu_search`] controleert dat eerst.
#[instrument(skip_all, fields(n = graph.n()))]
pub fn tabu_search(graph: &Graph, initial: &Coloring, config: &TabuConfig) -> (Coloring, u64) {
    let outcome = TabuSearch::new(graph, initial, config).run();
    (outcome.coloring, outcome.objective)
}

/// [`tabu_search`] voor niet-vertrouwde invoer: een startkleuring met de
/// verkeerde lengte, kleur 0 of een conflict geeft `MscError::InvalidColoring`.
pub fn try_tabu_search(graph: &Graph, initial: &Coloring, config: &TabuConfig) -> Result<(Coloring, u64), MscError> {
    let outcome = TabuSearch::try_new(graph, initial, config)?.run();
    Ok((outcome.coloring, outcome.objective))
}
