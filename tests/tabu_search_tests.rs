// tests/tabu_search_tests.rs
//! Tests voor de tabu-zoektocht: toegelaatbaarheid, geen verslechtering,
//! randgevallen, convergentie op een pad en het respecteren van de tabu-duur.

extern crate msc_tabu;
use msc_tabu::graph::Graph;
use msc_tabu::search::{StopReason, TabuSearch};
use msc_tabu::{generate_graph, greedy_color, tabu_search, try_tabu_search, Coloring, MscError, TabuConfig};
use proptest::prelude::*;

fn path4() -> Graph {
    Graph::from_edge_list(4, &[(0, 1), (1, 2), (2, 3)])
}

#[test]
fn test_empty_edge_set_is_unchanged() {
    let g = Graph::with_vertices(10);
    let (greedy, greedy_sum) = greedy_color(&g);
    let (best, best_sum) = tabu_search(&g, &greedy, &TabuConfig::default());
    assert_eq!(best, greedy);
    assert_eq!(best_sum, greedy_sum);
    assert_eq!(best_sum, 10);
}

#[test]
fn test_complete_graph_keeps_sum_15() {
    let g = generate_graph(5, 1.0, Some(9)).unwrap();
    let (greedy, _) = greedy_color(&g);
    let (best, best_sum) = tabu_search(&g, &greedy, &TabuConfig::default());
    assert_eq!(best_sum, 15);
    assert!(best.is_feasible(&g));
}

#[test]
fn test_path_reaches_optimum_from_greedy() {
    let g = path4();
    let (greedy, _) = greedy_color(&g);
    let (best, best_sum) = tabu_search(&g, &greedy, &TabuConfig::default());
    assert!(best.is_feasible(&g));
    // Twee onafhankelijke paren: 1 + 2 + 1 + 2.
    assert_eq!(best_sum, 6);
}

#[test]
fn test_path_reaches_optimum_from_poor_starts() {
    let g = path4();
    for start in [vec![3, 1, 2, 4], vec![1, 2, 3, 1], vec![4, 3, 2, 1], vec![5, 6, 7, 8]] {
        let initial = Coloring::new(start.clone());
        assert!(initial.is_feasible(&g));
        let (best, best_sum) = tabu_search(&g, &initial, &TabuConfig::default());
        assert!(best.is_feasible(&g), "start {start:?}");
        assert_eq!(best_sum, 6, "start {start:?}");
        assert_eq!(best.objective(), best_sum);
    }
}

#[test]
fn test_input_coloring_is_not_mutated() {
    let g = path4();
    let initial = Coloring::new(vec![3, 1, 2, 4]);
    let snapshot = initial.clone();
    let _ = tabu_search(&g, &initial, &TabuConfig::default());
    assert_eq!(initial, snapshot);
}

#[test]
fn test_reverse_move_is_tabu_within_tenure() {
    let g = Graph::from_edge_list(2, &[(0, 1)]);
    let initial = Coloring::new(vec![1, 2]);
    let mut search = TabuSearch::new(&g, &initial, &TabuConfig::default());

    // Iteratie 1: vertex 1 gaat van 2 naar 3 (de minst slechte move).
    let first = search.step().unwrap();
    assert_eq!((first.vertex, first.from, first.to), (1, 2, 3));

    // Iteratie 2: terug naar 2 zou waarde 3 geven, gelijk aan de beste, dus
    // geen aspiratie. De move is verboden; vertex 0 → 2 wordt gekozen.
    let second = search.step().unwrap();
    assert_ne!((second.vertex, second.to), (1, 2));
    assert_eq!((second.vertex, second.to), (0, 2));
    assert_eq!(search.current().as_slice(), &[2, 3]);
}

#[test]
fn test_reverse_move_allowed_after_zero_tenure() {
    let g = Graph::from_edge_list(2, &[(0, 1)]);
    let initial = Coloring::new(vec![1, 2]);
    let config = TabuConfig::new(500, 0, 100);
    let mut search = TabuSearch::new(&g, &initial, &config);

    search.step().unwrap();
    let second = search.step().unwrap();
    assert_eq!((second.vertex, second.from, second.to), (1, 3, 2));
}

#[test]
fn test_objective_is_tracked_incrementally() {
    let g = generate_graph(30, 0.3, Some(5)).unwrap();
    let (greedy, _) = greedy_color(&g);
    let mut search = TabuSearch::new(&g, &greedy, &TabuConfig::default());
    for _ in 0..50 {
        if search.step().is_none() {
            break;
        }
        assert_eq!(search.current_objective(), search.current().objective());
        assert!(search.current().is_feasible(&g));
        assert!(search.best_objective() <= search.current_objective());
    }
}

#[test]
fn test_stops_on_stagnation() {
    let g = Graph::with_vertices(10);
    let initial = Coloring::new(vec![1; 10]);
    let config = TabuConfig::new(500, 7, 5);
    let outcome = TabuSearch::new(&g, &initial, &config).run();
    assert_eq!(outcome.stop_reason, StopReason::Stagnation);
    assert_eq!(outcome.iterations, 5);
    assert_eq!(outcome.last_improvement, 0);
    assert_eq!(outcome.objective, 10);
}

#[test]
fn test_stops_on_iteration_limit() {
    let g = Graph::with_vertices(10);
    let initial = Coloring::new(vec![1; 10]);
    let config = TabuConfig::new(3, 7, 100);
    let outcome = TabuSearch::new(&g, &initial, &config).run();
    assert_eq!(outcome.stop_reason, StopReason::IterationLimit);
    assert_eq!(outcome.iterations, 3);

    let zero = TabuSearch::new(&g, &initial, &TabuConfig::new(0, 7, 100)).run();
    assert_eq!(zero.iterations, 0);
    assert_eq!(zero.coloring, initial);
}

#[test]
fn test_stops_without_admissible_moves() {
    // Geen knopen, dus geen moves.
    let g = Graph::with_vertices(0);
    let outcome = TabuSearch::new(&g, &Coloring::default(), &TabuConfig::default()).run();
    assert_eq!(outcome.stop_reason, StopReason::NoAdmissibleMove);
    assert_eq!(outcome.objective, 0);
}

#[test]
fn test_try_tabu_search_rejects_invalid_starts() {
    let g = path4();
    let config = TabuConfig::default();
    for start in [vec![1, 2, 1], vec![1, 2, 1, 2, 1], vec![0, 2, 1, 2], vec![1, 1, 2, 1]] {
        match try_tabu_search(&g, &Coloring::new(start.clone()), &config) {
            Err(MscError::InvalidColoring(_)) => {}
            other => panic!("expected InvalidColoring for {start:?}, got {other:?}"),
        }
    }
    assert!(TabuSearch::try_new(&g, &Coloring::new(vec![1, 2]), &config).is_err());

    let initial = Coloring::new(vec![3, 1, 2, 4]);
    assert_eq!(try_tabu_search(&g, &initial, &config).unwrap(), tabu_search(&g, &initial, &config));
}

#[test]
fn test_search_is_deterministic() {
    let g = generate_graph(50, 0.25, Some(21)).unwrap();
    let (greedy, _) = greedy_color(&g);
    let config = TabuConfig::default();
    assert_eq!(tabu_search(&g, &greedy, &config), tabu_search(&g, &greedy, &config));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_tabu_is_feasible_and_never_worse(n in 1usize..30, p in 0.0f64..=1.0, seed in any::<u64>()) {
        let g = generate_graph(n, p, Some(seed)).unwrap();
        let (greedy, greedy_sum) = greedy_color(&g);
        let config = TabuConfig::new(200, 7, 50);
        let (best, best_sum) = tabu_search(&g, &greedy, &config);
        prop_assert!(best.is_feasible(&g));
        prop_assert!(best_sum <= greedy_sum);
        prop_assert_eq!(best_sum, best.objective());
    }

    #[test]
    fn prop_tabu_never_worse_from_distinct_colors(n in 1usize..30, p in 0.0f64..=1.0, seed in any::<u64>()) {
        // Elke knoop een eigen kleur: altijd toegelaten, en ver van greedy.
        let g = generate_graph(n, p, Some(seed)).unwrap();
        let initial = Coloring::new((1..=n as u32).collect());
        let start_sum = initial.objective();
        let config = TabuConfig::new(200, 7, 50);
        let (best, best_sum) = try_tabu_search(&g, &initial, &config).unwrap();
        prop_assert!(best.is_feasible(&g));
        prop_assert!(best_sum <= start_sum);
        prop_assert_eq!(best_sum, best.objective());
    }
}
