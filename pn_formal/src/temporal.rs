//! Path quantifiers shared by both formula families.
//!
//! Paths alternate places and transitions, so the nodes of the same kind as
//! the start node sit at the even positions of a path. Every walk below
//! only looks at those positions. The callbacks get the path set they are
//! evaluated against.

use pn_domain::{NodeIndex, Path, PathSet};
use rustc_hash::FxHashSet;
use tracing::trace;

fn same_kind(path: &Path, end: usize) -> impl Iterator<Item = NodeIndex> + '_ {
    path.nodes()[..end].iter().step_by(2).copied()
}

/// Where the walk along a path stops: at the repeated node of a cyclic
/// path, or at the end.
fn walk_end(path: &Path) -> usize {
    path.loop_bounds()
        .map(|(_, close)| close)
        .unwrap_or_else(|| path.len())
}

fn last_same_kind(path: &Path) -> NodeIndex {
    let last = path.len() - 1;
    path.nodes()[last - last % 2]
}

/// Some path from `node` reaches a `goal` node with `hold` true at every
/// node before it.
pub(crate) fn exists_until<H, G>(node: NodeIndex, paths: &PathSet<'_>, hold: &H, goal: &G) -> bool
where
    H: Fn(NodeIndex, &PathSet<'_>) -> bool,
    G: Fn(NodeIndex, &PathSet<'_>) -> bool,
{
    paths.starting_at(node).any(|(_, path)| {
        for n in same_kind(path, walk_end(path)) {
            if goal(n, paths) {
                return true;
            }
            if !hold(n, paths) {
                return false;
            }
        }
        false
    })
}

/// Every path from `node` has a `goal` node. On a cyclic path only the
/// nodes up to and including the loop entry count.
pub(crate) fn forall_eventually<G>(node: NodeIndex, paths: &PathSet<'_>, goal: &G) -> bool
where
    G: Fn(NodeIndex, &PathSet<'_>) -> bool,
{
    paths.starting_at(node).all(|(_, path)| {
        let end = match path.loop_bounds() {
            Some((entry, _)) => entry + 1,
            None => path.len(),
        };
        same_kind(path, end).any(|n| goal(n, paths))
    })
}

enum Walk {
    Satisfied,
    Violated,
    Unresolved,
}

fn walk_until<H, G>(path: &Path, end: usize, paths: &PathSet<'_>, hold: &H, goal: &G) -> Walk
where
    H: Fn(NodeIndex, &PathSet<'_>) -> bool,
    G: Fn(NodeIndex, &PathSet<'_>) -> bool,
{
    for n in same_kind(path, end).skip(1) {
        if goal(n, paths) {
            return Walk::Satisfied;
        }
        if !hold(n, paths) {
            return Walk::Violated;
        }
    }
    Walk::Unresolved
}

/// On every path from `node`, `hold` stays true until `goal` is reached.
///
/// The walk starts at the second node of the start's kind. A cycle-free
/// path that never reaches `goal` must end in it. A cyclic path that is
/// still unresolved when its loop closes is checked again from the loop.
/// Every anchor is checked once per call; a loop leading back to an anchor
/// that is already being checked is accepted.
pub(crate) fn forall_until<H, G>(node: NodeIndex, paths: &PathSet<'_>, hold: &H, goal: &G) -> bool
where
    H: Fn(NodeIndex, &PathSet<'_>) -> bool,
    G: Fn(NodeIndex, &PathSet<'_>) -> bool,
{
    let mut anchors = FxHashSet::default();
    until_from(node, paths, hold, goal, &mut anchors)
}

fn until_from<H, G>(
    node: NodeIndex,
    paths: &PathSet<'_>,
    hold: &H,
    goal: &G,
    anchors: &mut FxHashSet<NodeIndex>,
) -> bool
where
    H: Fn(NodeIndex, &PathSet<'_>) -> bool,
    G: Fn(NodeIndex, &PathSet<'_>) -> bool,
{
    if !anchors.insert(node) {
        return true;
    }
    for (i, path) in paths.starting_at(node) {
        match path.loop_bounds() {
            None => match walk_until(path, path.len(), paths, hold, goal) {
                Walk::Satisfied => {}
                Walk::Violated => return false,
                Walk::Unresolved => {
                    if !goal(last_same_kind(path), paths) {
                        return false;
                    }
                }
            },
            Some((entry, close)) => match walk_until(path, close, paths, hold, goal) {
                Walk::Satisfied => {}
                Walk::Violated => return false,
                Walk::Unresolved => {
                    // a loop closing on a node of the other kind is picked up
                    // at the node following it
                    let anchor = path.nodes()[entry + entry % 2];
                    trace!(
                        path = i,
                        anchor = anchor.index(),
                        checked = anchors.len(),
                        "until unresolved on cycle"
                    );
                    if !until_from(anchor, paths, hold, goal, anchors) {
                        return false;
                    }
                }
            },
        }
    }
    true
}

/// Direct successors of `node` as far as the path set shows them, without
/// repetitions.
pub(crate) fn successors_in(node: NodeIndex, paths: &PathSet<'_>) -> Vec<NodeIndex> {
    let mut seen = FxHashSet::default();
    at_offset(node, paths, 1)
        .filter(|n| seen.insert(*n))
        .collect()
}

/// Nodes found at `offset` on the paths leaving `node`.
pub(crate) fn at_offset<'a>(
    node: NodeIndex,
    paths: &'a PathSet<'_>,
    offset: usize,
) -> impl Iterator<Item = NodeIndex> + 'a {
    paths
        .starting_at(node)
        .filter_map(move |(_, p)| p.get(offset))
}
