use std::collections::HashSet;

use proptest::prelude::*;

use crate::automaton::index_of;
use crate::{Action, Config, Extent, GridSimulator, Point, Session};

fn grid_with(side_length: usize, alive: &[usize]) -> GridSimulator {
    let mut grid = GridSimulator::new(side_length).unwrap();
    for &i in alive {
        grid.set_cell_alive(i).unwrap();
    }
    grid
}

#[test]
fn test_new_grid_is_all_dead() {
    for n in 1..12 {
        let grid = GridSimulator::new(n).unwrap();
        assert_eq!(grid.len(), n * n);
        assert_eq!(grid.side_length(), n);
        assert!(grid.get_live_cells().is_empty());
    }
}

#[test]
fn test_center_cell_on_five_by_five_dies() {
    let mut grid = grid_with(5, &[12]);
    assert_eq!(grid.count_live_neighbors(12), 0);

    grid.evolve();

    assert!(grid.cells().iter().all(|c| !c.alive));
}

#[test]
fn test_beehive_is_still_life() {
    let n = 8;
    let cells: Vec<usize> = [(2, 3), (2, 4), (3, 2), (3, 5), (4, 3), (4, 4)]
        .iter()
        .map(|&(r, c)| index_of(n, r, c))
        .collect();
    let mut grid = grid_with(n, &cells);
    let before = grid.alive_mask();

    for _ in 0..3 {
        grid.evolve();
        assert_eq!(grid.alive_mask(), before);
    }
    assert_eq!(grid.current_slot(), 3);
}

#[test]
fn test_toad_period_two_then_full_rewind() {
    let n = 8;
    let cells: Vec<usize> = [(3, 3), (3, 4), (3, 5), (4, 2), (4, 3), (4, 4)]
        .iter()
        .map(|&(r, c)| index_of(n, r, c))
        .collect();
    let mut grid = grid_with(n, &cells);
    let start = grid.alive_mask();

    grid.evolve();
    let phase_two = grid.alive_mask();
    assert_ne!(phase_two, start);
    grid.evolve();
    assert_eq!(grid.alive_mask(), start);

    grid.devolve();
    assert_eq!(grid.alive_mask(), phase_two);
    grid.devolve();
    assert_eq!(grid.alive_mask(), start);
    grid.devolve();
    assert_eq!(grid.alive_mask(), start);
    assert_eq!(grid.current_slot(), 0);
}

#[test]
fn test_session_drives_blinker() {
    let mut session = Session::new(Config {
        subdivisions: 9,
        tick_rate: 5,
        extent: Extent::new(90.0, 90.0),
    })
    .unwrap();

    for x in [35.0, 45.0, 55.0] {
        session
            .apply(Action::PaintAlive(Point::new(x, 45.0)))
            .unwrap();
    }
    let start = session.grid().alive_mask();

    session.apply(Action::ToggleTick).unwrap();
    let produced = (0..10).filter(|_| session.tick()).count();

    assert_eq!(produced, 2);
    assert_eq!(session.grid().alive_mask(), start);
    assert_eq!(session.frame().generation, 2);
}

proptest! {
    #[test]
    fn test_neighbors_distinct(n in 3..40usize, seed: usize) {
        let grid = GridSimulator::new(n).unwrap();
        let index = seed % grid.len();
        let neighbors = grid.get_neighbors(index).unwrap();
        let unique: HashSet<usize> = neighbors.iter().map(|c| c.index).collect();
        prop_assert_eq!(unique.len(), 8);
        prop_assert!(!unique.contains(&index));
    }

    #[test]
    fn test_evolve_devolve_round_trip(
        n in 1..16usize,
        alive in proptest::collection::vec(any::<bool>(), 256),
        steps in 0..6usize,
    ) {
        let mut grid = GridSimulator::new(n).unwrap();
        grid.load_alive_mask(&alive[..n * n]).unwrap();
        let before = grid.cells().to_vec();
        let slot = grid.current_slot();

        for _ in 0..steps {
            grid.evolve();
        }
        prop_assert_eq!(grid.current_slot(), slot + steps);
        for _ in 0..steps {
            grid.devolve();
        }

        prop_assert_eq!(grid.cells(), &before[..]);
        prop_assert_eq!(grid.current_slot(), slot);
        prop_assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn test_point_always_maps_in_range(
        n in 1..64usize,
        x in -1e6f32..1e6,
        y in -1e6f32..1e6,
        w in 0.01f32..100.0,
        h in 0.01f32..100.0,
    ) {
        let grid = GridSimulator::new(n).unwrap();
        let index = grid.cell_index_from_point(Point::new(x, y), Extent::new(w, h)).unwrap();
        prop_assert!(index < grid.len());
    }
}
