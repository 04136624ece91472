use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use rand::Rng;
use tracing::{debug, instrument};
use unordered_pair::UnorderedPair;

use crate::board::Board;
use crate::cell::Cell;
use crate::direction::Direction;
use crate::disjoint::DisjointSet;
use crate::error::GenerationError;
use crate::location::{Dimension, Location};

/// Weight of a candidate edge, drawn from `0..width * height`.
pub type Weight = usize;

/// One grid adjacency considered for the spanning tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct CandidateEdge {
    // lower location first
    pub(crate) nodes: UnorderedPair<Location>,
    pub(crate) weight: Weight,
}

/// Every location on a board of size `dims`, column by column.
pub(crate) fn locations(dims: (Dimension, Dimension)) -> impl Iterator<Item = Location> {
    (0..dims.0.get())
        .cartesian_product(0..dims.1.get())
        .map(|(col, row)| Location(col, row))
}

/// Enumerate every adjacency on the board and weigh each one uniformly at random.
///
/// Adjacencies come out column by column, and at each location the one below precedes the one to the right.
/// Weights are drawn in that same order, so a given seed always produces the same list.
pub(crate) fn candidate_edges<R: Rng>(dims: (Dimension, Dimension), rng: &mut R) -> Vec<CandidateEdge> {
    let bound = dims.0.get() * dims.1.get();

    locations(dims)
        .flat_map(|from| Direction::FORWARD_VARIANTS.iter().map(move |dir| (from, dir.attempt_from(from))))
        .filter(|(_, to)| to.within(dims))
        .map(|(from, to)| CandidateEdge {
            nodes: UnorderedPair(from, to),
            weight: rng.gen_range(0..bound),
        })
        .collect_vec()
}

/// Kruskal's algorithm over `candidates`.
///
/// Candidates are visited by ascending weight; ties keep their enumeration order.
/// Every candidate is inspected even after the tree is complete.
/// Edges appear in the returned graph in the order they were accepted.
pub(crate) fn spanning_tree(
    dims: (Dimension, Dimension),
    candidates: Vec<CandidateEdge>,
) -> Result<UnGraphMap<Location, Weight>, GenerationError> {
    let cell_count = dims.0.get() * dims.1.get();
    let mut components = DisjointSet::new(locations(dims));
    let mut tree = UnGraphMap::with_capacity(cell_count, cell_count - 1);
    for location in locations(dims) {
        tree.add_node(location);
    }

    // sorted_by_key is a stable sort
    for edge in candidates.into_iter().sorted_by_key(|edge| edge.weight) {
        let UnorderedPair(u, v) = edge.nodes;
        if components.same_component(u, v)? {
            continue;
        }

        tree.add_edge(u, v, edge.weight);
        components.union(u, v)?;
    }

    Ok(tree)
}

/// Lay wires along every edge of `tree`: each edge sets the facing connector on both of its ends.
pub(crate) fn assign_connectors(dims: (Dimension, Dimension), tree: &UnGraphMap<Location, Weight>) -> Array2<Cell> {
    let mut cells = Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), Cell::default);

    for (u, v, _) in tree.all_edges() {
        if let Some(dir) = Direction::direction_to(u, v) {
            cells[u.as_index()].connectors[dir] = true;
            cells[v.as_index()].connectors[dir.invert()] = true;
        }
    }

    cells
}

/// Turn every tile a random number of quarter turns, column by column.
pub(crate) fn scramble<R: Rng>(cells: &mut Array2<Cell>, rng: &mut R) {
    for mut column in cells.columns_mut() {
        for cell in column.iter_mut() {
            let turns: u8 = rng.gen_range(0..4);
            for _ in 0..turns {
                cell.rotate();
            }
        }
    }
}

/// Run the whole pipeline: weigh adjacencies, grow the tree, wire it up, then scramble.
///
/// The power source is placed at `power_source`, which must lie on the board. Nothing is powered yet.
#[instrument(level = "debug", skip(rng))]
pub(crate) fn generate<R: Rng>(
    dims: (Dimension, Dimension),
    power_source: Location,
    rng: &mut R,
) -> Result<Board, GenerationError> {
    let candidates = candidate_edges(dims, rng);
    let candidate_count = candidates.len();
    let tree = spanning_tree(dims, candidates)?;
    debug!(candidates = candidate_count, accepted = tree.edge_count(), "spanning tree grown");

    let mut cells = assign_connectors(dims, &tree);
    scramble(&mut cells, rng);

    Ok(Board::new(dims, cells, power_source))
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use itertools::Itertools;
    use petgraph::algo::connected_components;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use unordered_pair::UnorderedPair;

    use super::{assign_connectors, candidate_edges, spanning_tree, CandidateEdge};
    use crate::direction::Direction;
    use crate::location::{Dimension, Location};

    fn dims(width: usize, height: usize) -> (Dimension, Dimension) {
        (NonZero::new(width).unwrap(), NonZero::new(height).unwrap())
    }

    fn edge(a: Location, b: Location, weight: usize) -> CandidateEdge {
        CandidateEdge { nodes: UnorderedPair(a, b), weight }
    }

    #[test]
    fn enumerates_columns_then_rows_below_before_right() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let nodes = candidate_edges(dims(2, 2), &mut rng).into_iter()
            .map(|edge| (edge.nodes.0, edge.nodes.1))
            .collect_vec();

        assert_eq!(nodes, vec![
            (Location(0, 0), Location(0, 1)),
            (Location(0, 0), Location(1, 0)),
            (Location(0, 1), Location(1, 1)),
            (Location(1, 0), Location(1, 1)),
        ]);
    }

    #[test]
    fn weights_stay_below_cell_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let candidates = candidate_edges(dims(5, 3), &mut rng);
        // 4 * 3 horizontal, 5 * 2 vertical
        assert_eq!(candidates.len(), 22);
        assert!(candidates.iter().all(|edge| edge.weight < 15));
    }

    #[test]
    fn same_seed_same_candidates() {
        let first = candidate_edges(dims(6, 4), &mut ChaCha8Rng::seed_from_u64(99));
        let second = candidate_edges(dims(6, 4), &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn two_by_two_with_fixed_weights() {
        let candidates = vec![
            edge(Location(0, 0), Location(0, 1), 3),
            edge(Location(0, 0), Location(1, 0), 0),
            edge(Location(0, 1), Location(1, 1), 2),
            edge(Location(1, 0), Location(1, 1), 2),
        ];

        let tree = spanning_tree(dims(2, 2), candidates).unwrap();
        let accepted = tree.all_edges().map(|(a, b, w)| (a, b, *w)).collect_vec();

        // the top row goes first; the two weight-2 edges keep their order; the weight-3 edge closes a cycle
        assert_eq!(accepted, vec![
            (Location(0, 0), Location(1, 0), 0),
            (Location(0, 1), Location(1, 1), 2),
            (Location(1, 0), Location(1, 1), 2),
        ]);
    }

    #[test]
    fn ties_are_broken_by_enumeration_order() {
        // all four candidates tie; the first three enumerated are accepted and the last closes the square
        let candidates = vec![
            edge(Location(0, 0), Location(0, 1), 1),
            edge(Location(0, 0), Location(1, 0), 1),
            edge(Location(0, 1), Location(1, 1), 1),
            edge(Location(1, 0), Location(1, 1), 1),
        ];

        let tree = spanning_tree(dims(2, 2), candidates).unwrap();
        assert_eq!(tree.edge_count(), 3);
        assert!(!tree.contains_edge(Location(1, 0), Location(1, 1)));
    }

    #[test]
    fn wires_follow_tree_edges() {
        let candidates = vec![
            edge(Location(0, 0), Location(0, 1), 0),
            edge(Location(0, 0), Location(1, 0), 1),
            edge(Location(0, 1), Location(1, 1), 2),
            edge(Location(1, 0), Location(1, 1), 3),
        ];
        let tree = spanning_tree(dims(2, 2), candidates).unwrap();
        let cells = assign_connectors(dims(2, 2), &tree);

        let facing = |location: Location| cells[location.as_index()].connectors.directions().collect_vec();
        assert_eq!(facing(Location(0, 0)), vec![Direction::East, Direction::South]);
        assert_eq!(facing(Location(1, 0)), vec![Direction::West]);
        assert_eq!(facing(Location(0, 1)), vec![Direction::North, Direction::East]);
        assert_eq!(facing(Location(1, 1)), vec![Direction::West]);
    }

    #[test]
    fn single_cell_has_no_edges() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let candidates = candidate_edges(dims(1, 1), &mut rng);
        assert!(candidates.is_empty());
        let tree = spanning_tree(dims(1, 1), candidates).unwrap();
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.edge_count(), 0);
    }

    proptest! {
        #[test]
        fn tree_spans_the_grid(width in 1usize..9, height in 1usize..9, seed: u64) {
            let dims = dims(width, height);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let tree = spanning_tree(dims, candidate_edges(dims, &mut rng)).unwrap();

            prop_assert_eq!(tree.edge_count(), width * height - 1);
            prop_assert_eq!(connected_components(&tree), 1);
        }

        #[test]
        fn each_tree_edge_sets_exactly_one_facing_pair(width in 1usize..7, height in 1usize..7, seed: u64) {
            let dims = dims(width, height);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let tree = spanning_tree(dims, candidate_edges(dims, &mut rng)).unwrap();
            let cells = assign_connectors(dims, &tree);

            for (u, v, _) in tree.all_edges() {
                let dir = Direction::direction_to(u, v).unwrap();
                prop_assert!(cells[u.as_index()].connectors[dir]);
                prop_assert!(cells[v.as_index()].connectors[dir.invert()]);
            }

            // nothing but tree edges lays wire
            let wire_ends: usize = cells.iter().map(|cell| cell.connectors.count()).sum();
            prop_assert_eq!(wire_ends, 2 * tree.edge_count());
        }
    }
}
