use crate::prelude::*;

use serde::Serialize;
use smallvec::SmallVec;

pub const COMPLETION_MESSAGE: &str = "Congratulations!";

// Longest parent chain to follow before declaring the table broken; far
// above the deepest level the builder ever produces.
const MAX_PATH: usize = 32;

/// Reconstructs shortest solutions from a built solution tree. The table is
/// injected once and only ever read, so any number of solves may run
/// concurrently over the same instance.
pub struct Solver<T: TableLookup> {
    table: T,
}

/// An ordered solution: the recorded turn at each step of the walk from the
/// queried state back to the solved state, in that order, not reversed. The
/// recorded turns are the clockwise build-time edges, so each letter names
/// the layer the holder turns counterclockwise next to undo it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    moves: SmallVec<[Move; 16]>,
}

impl Solution {
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Letter codes for each step, terminated by the completion marker.
    pub fn labels(&self) -> Vec<String> {
        self.moves
            .iter()
            .map(|move_| move_.letter().to_string())
            .chain(std::iter::once(COMPLETION_MESSAGE.to_string()))
            .collect()
    }
}

/// Outcome of a symmetry lookup: whether the queried state, or one of its
/// reorientations, is a known state, and which key to solve with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymmetryMatch {
    pub found: bool,
    pub state: Option<StateKey>,
    pub message: &'static str,
}

impl<T: TableLookup> Solver<T> {
    pub fn new(table: T) -> Solver<T> {
        Solver { table }
    }

    /// Find the shortest solution for `query`.
    ///
    /// The exact key is tried first; failing that, the query must parse as a
    /// cube state and its 24 reorientations are tried in turn. [`Error::NotFound`]
    /// means neither the query nor any reorientation is a known state.
    pub fn solve(&self, query: &str) -> Result<Solution> {
        let entry = match self.table.get(query)? {
            Some(node) => node,
            None => self.reoriented_entry(query)?,
        };

        let mut moves = SmallVec::new();
        let mut node = entry;
        while node.state != SOLVED_KEY {
            if moves.len() >= MAX_PATH {
                log::warn!("parent chain from {} exceeds {} steps", node.state, MAX_PATH);
                return Err(Error::NotFound);
            }
            let (turn, parent) = match (node.action, node.parent.take()) {
                (Some(turn), Some(parent)) => (turn, parent),
                _ => {
                    log::warn!("{} has no parent link but is not the root", node.state);
                    return Err(Error::NotFound);
                }
            };

            moves.push(turn);
            node = match self.table.get(&parent)? {
                Some(next) => next,
                None => {
                    log::warn!("{} references missing parent {}", node.state, parent);
                    return Err(Error::NotFound);
                }
            };
        }

        Ok(Solution { moves })
    }

    /// Symmetry lookup: report whether `query` or one of its reorientations
    /// is a known state, and which key to use for solving.
    pub fn find_symmetric(&self, query: &str) -> Result<SymmetryMatch> {
        if self.table.get(query)?.is_some() {
            return Ok(SymmetryMatch {
                found: true,
                state: Some(query.to_string()),
                message: "exact match; no reorientation needed",
            });
        }

        let cube = Cube::from_key(query)?;
        for candidate in reorientations(&cube).iter() {
            let key = candidate.key();
            if self.table.get(&key)?.is_some() {
                return Ok(SymmetryMatch {
                    found: true,
                    state: Some(key),
                    message: "reoriented match; hold the cube in this orientation before solving",
                });
            }
        }

        Ok(SymmetryMatch {
            found: false,
            state: None,
            message: "neither the state nor any reorientation of it is known",
        })
    }

    fn reoriented_entry(&self, query: &str) -> Result<TreeNode> {
        let cube = Cube::from_key(query)?;
        for candidate in reorientations(&cube).iter() {
            if let Some(node) = self.table.get(&candidate.key())? {
                return Ok(node);
            }
        }
        Err(Error::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(state: &str, parent: &str, action: Move) -> TreeNode {
        TreeNode {
            state: state.to_string(),
            parent: Some(parent.to_string()),
            action: Some(action),
        }
    }

    fn root() -> TreeNode {
        TreeNode {
            state: SOLVED_KEY.to_string(),
            parent: None,
            action: None,
        }
    }

    fn mock_table() -> MemoryTable {
        let mut table = MemoryTable::new();
        table.insert(node("state3", "state2", Move::Left));
        table.insert(node("state2", "state1", Move::Front));
        table.insert(node("state1", SOLVED_KEY, Move::Up));
        table.insert(root());
        table
    }

    #[test]
    fn walks_the_chain_and_appends_the_marker() {
        let solver = Solver::new(mock_table());
        let solution = solver.solve("state3").unwrap();
        assert_eq!(solution.labels(), vec!["L", "F", "U", COMPLETION_MESSAGE]);
        assert_eq!(solution.moves(), &[Move::Left, Move::Front, Move::Up]);
    }

    #[test]
    fn solving_the_solved_state_is_just_the_marker() {
        let solver = Solver::new(mock_table());
        let solution = solver.solve(SOLVED_KEY).unwrap();
        assert!(solution.is_empty());
        assert_eq!(solution.labels(), vec![COMPLETION_MESSAGE]);
    }

    #[test]
    fn finds_the_entry_through_a_reorientation() {
        let twisted = Cube::solved().apply(Move::Up);
        let mut table = MemoryTable::new();
        table.insert(root());
        table.insert(node(&twisted.key(), SOLVED_KEY, Move::Up));

        // The same physical state held in a different orientation.
        let held_differently = twisted.apply(Move::Up).apply(Move::Down);
        assert_ne!(held_differently.key(), twisted.key());

        let solver = Solver::new(table);
        let solution = solver.solve(&held_differently.key()).unwrap();
        assert_eq!(solution.labels(), vec!["U", COMPLETION_MESSAGE]);
    }

    #[test]
    fn unknown_states_are_not_found() {
        let mut table = MemoryTable::new();
        table.insert(root());
        let solver = Solver::new(table);

        let deep = Cube::solved().apply_all([Move::Up, Move::Front]);
        assert!(matches!(solver.solve(&deep.key()), Err(Error::NotFound)));
    }

    #[test]
    fn malformed_queries_are_rejected_before_the_symmetry_scan() {
        let solver = Solver::new(mock_table());
        assert!(matches!(
            solver.solve("tooshort"),
            Err(Error::InvalidLength { got: 8 })
        ));
        assert!(matches!(
            solver.solve("XBBBGGGGOOOORRRRWWWWYYYY"),
            Err(Error::InvalidColor { .. })
        ));
        assert!(matches!(
            solver.solve("BBBBBGGGOOOORRRRWWWWYYYY"),
            Err(Error::InvalidColorCount { .. })
        ));
    }

    #[test]
    fn broken_chains_read_as_not_found() {
        let mut table = MemoryTable::new();
        table.insert(node("stateX", "gone", Move::Right));
        let solver = Solver::new(table);
        assert!(matches!(solver.solve("stateX"), Err(Error::NotFound)));

        // A node that is neither the root nor linked anywhere.
        let mut table = MemoryTable::new();
        table.insert(TreeNode {
            state: "stateY".to_string(),
            parent: None,
            action: None,
        });
        let solver = Solver::new(table);
        assert!(matches!(solver.solve("stateY"), Err(Error::NotFound)));
    }

    #[test]
    fn cyclic_tables_do_not_hang() {
        let mut table = MemoryTable::new();
        table.insert(node("stateA", "stateB", Move::Up));
        table.insert(node("stateB", "stateA", Move::Down));
        let solver = Solver::new(table);
        assert!(matches!(solver.solve("stateA"), Err(Error::NotFound)));
    }

    #[test]
    fn symmetry_lookup_reports_exact_and_reoriented_matches() {
        let twisted = Cube::solved().apply(Move::Up);
        let mut table = MemoryTable::new();
        table.insert(root());
        table.insert(node(&twisted.key(), SOLVED_KEY, Move::Up));
        let solver = Solver::new(table);

        let exact = solver.find_symmetric(&twisted.key()).unwrap();
        assert!(exact.found);
        assert_eq!(exact.state, Some(twisted.key()));

        let held_differently = twisted.apply(Move::Up).apply(Move::Down);
        let reoriented = solver.find_symmetric(&held_differently.key()).unwrap();
        assert!(reoriented.found);
        assert_eq!(reoriented.state, Some(twisted.key()));

        let deep = Cube::solved().apply_all([Move::Up, Move::Front]);
        let missing = solver.find_symmetric(&deep.key()).unwrap();
        assert!(!missing.found);
        assert_eq!(missing.state, None);
    }
}
