use crate::prelude::*;

use crate::cube::symmetry;
use std::collections::{HashSet, VecDeque};

const BATCH_SIZE: usize = 1000;

#[derive(Debug, Default, Clone)]
pub struct BuildOptions {
    /// Stop exploring past this depth. `None` builds the exhaustive tree.
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    pub states: usize,
    pub levels: usize,
}

/// Breadth-first exploration of the reachable state graph outward from the
/// solved cube.
///
/// Each dequeued state is expanded with all six turns on a copy. A child is
/// discarded when any of its 24 reorientations has been seen, so exactly one
/// representative per orientation class is ever recorded; because levels are
/// processed in order, the recorded parent chain of every state is a shortest
/// path. Records stream to `sink` in batches; a failed batch aborts the
/// build.
pub fn build_tree(sink: &mut impl TableSink, options: &BuildOptions) -> Result<BuildStats> {
    symmetry::init();

    let solved = Cube::solved();
    let mut visited: HashSet<Cube> = HashSet::new();
    let mut queue: VecDeque<Cube> = VecDeque::new();

    visited.insert(solved);
    queue.push_back(solved);
    let mut batch = vec![TreeNode {
        state: solved.key(),
        parent: None,
        action: None,
    }];

    let mut stats = BuildStats { states: 1, levels: 0 };
    let mut level = 0;
    let mut level_size = 1;
    log::info!("building the solution tree from {}", SOLVED_KEY);

    while !queue.is_empty() {
        if options.max_depth.map_or(false, |max| level >= max) {
            break;
        }

        let mut next_level = 0;
        for _ in 0..level_size {
            let current = match queue.pop_front() {
                Some(cube) => cube,
                None => break,
            };
            let current_key = current.key();

            for turn in Move::all() {
                let child = current.apply(turn);
                if reorientations(&child)
                    .iter()
                    .any(|candidate| visited.contains(candidate))
                {
                    continue;
                }

                visited.insert(child);
                queue.push_back(child);
                next_level += 1;
                stats.states += 1;

                batch.push(TreeNode {
                    state: child.key(),
                    parent: Some(current_key.clone()),
                    action: Some(turn),
                });
                if batch.len() >= BATCH_SIZE {
                    sink.insert_batch(&batch)?;
                    batch.clear();
                }
            }
        }

        level_size = next_level;
        if next_level > 0 {
            level += 1;
            stats.levels = level;
            log::info!("level {}: {} new states, {} total", level, next_level, stats.states);
        }
    }

    if !batch.is_empty() {
        sink.insert_batch(&batch)?;
    }
    log::info!(
        "solution tree complete: {} states across {} levels",
        stats.states,
        stats.levels
    );

    Ok(stats)
}
