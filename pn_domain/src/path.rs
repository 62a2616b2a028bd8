//! Paths through a net and the path set a verification run works on.

use super::*;
use rustc_hash::FxHashSet;

/// A walk through the net, alternating places and transitions. Never empty.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
#[serde(try_from = "PathNodes")]
pub struct Path {
    nodes: Vec<NodeIndex>,
}

#[derive(Deserialize)]
struct PathNodes {
    nodes: Vec<NodeIndex>,
}

impl TryFrom<PathNodes> for Path {
    type Error = PNError;

    fn try_from(raw: PathNodes) -> PNResult<Path> {
        Path::new(raw.nodes)
    }
}

impl Path {
    pub fn new(nodes: Vec<NodeIndex>) -> PNResult<Self> {
        if nodes.is_empty() {
            return Err(PNError::EmptyPath);
        }
        Ok(Path { nodes })
    }

    pub fn single(node: NodeIndex) -> Self {
        Path { nodes: vec![node] }
    }

    pub fn from_ids(net: &PetriNet, ids: &[&str]) -> PNResult<Self> {
        let nodes = ids
            .iter()
            .map(|id| net.lookup(id))
            .collect::<PNResult<Vec<_>>>()?;
        Path::new(nodes)
    }

    pub fn nodes(&self) -> &[NodeIndex] {
        self.nodes.as_slice()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first(&self) -> NodeIndex {
        self.nodes[0]
    }

    pub fn last(&self) -> NodeIndex {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn get(&self, i: usize) -> Option<NodeIndex> {
        self.nodes.get(i).copied()
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        self.nodes.contains(&node)
    }

    pub(crate) fn push(&mut self, node: NodeIndex) {
        self.nodes.push(node);
    }

    /// The first repetition on the path as `(entry, close)`, where
    /// `nodes[entry] == nodes[close]` and `close` is the earliest position
    /// that revisits a node.
    pub fn loop_bounds(&self) -> Option<(usize, usize)> {
        let mut seen: FxHashSet<NodeIndex> = FxHashSet::default();
        for (close, n) in self.nodes.iter().enumerate() {
            if !seen.insert(*n) {
                let entry = self.nodes.iter().position(|m| m == n)?;
                return Some((entry, close));
            }
        }
        None
    }

    pub fn is_circle_free(&self) -> bool {
        self.loop_bounds().is_none()
    }

    pub fn describe(&self, net: &PetriNet) -> String {
        let ids: Vec<_> = self
            .nodes
            .iter()
            .map(|n| net.get(*n).map(|n| n.id()).unwrap_or("?"))
            .collect();
        ids.join(" -> ")
    }
}

/// Every path a verification run may look at. Built once and handed,
/// unchanged, to every nested evaluation.
#[derive(Debug, Clone)]
pub struct PathSet<'n> {
    net: &'n PetriNet,
    paths: Vec<Path>,
}

impl<'n> PathSet<'n> {
    pub fn new(net: &'n PetriNet, paths: Vec<Path>) -> Self {
        PathSet { net, paths }
    }

    pub fn empty(net: &'n PetriNet) -> Self {
        PathSet { net, paths: vec![] }
    }

    pub fn net(&self) -> &'n PetriNet {
        self.net
    }

    pub fn paths(&self) -> &[Path] {
        self.paths.as_slice()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Paths whose first node is `node`, with their position in the set.
    pub fn starting_at(&self, node: NodeIndex) -> impl Iterator<Item = (usize, &Path)> + '_ {
        self.paths
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.first() == node)
    }

    /// The same set with the path at position `i` removed.
    pub fn without(&self, i: usize) -> PathSet<'n> {
        let mut paths = self.paths.clone();
        if i < paths.len() {
            paths.remove(i);
        }
        PathSet {
            net: self.net,
            paths,
        }
    }

    pub fn extend(&mut self, other: PathSet<'n>) {
        self.paths.extend(other.paths);
    }
}

impl fmt::Display for PathSet<'_> {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.paths {
            let marker = if p.is_circle_free() { "" } else { " (cycle)" };
            writeln!(fmtr, "{}{}", p.describe(self.net), marker)?;
        }
        Ok(())
    }
}
