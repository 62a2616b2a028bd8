//! Depth-first enumeration of the maximal paths of a net.
//!
//! A path is extended along source arcs until it reaches a node without
//! successors or revisits a node. In the latter case the repeated node is
//! kept as the last element so the loop can be seen on the path.

use super::*;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PathScope {
    /// Paths from every node of the net, so operators nested below the
    /// start node find paths at the nodes they are evaluated at.
    #[default]
    All,
    /// Only the paths leaving the start node.
    FromStart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EnumeratorConfig {
    #[serde(default)]
    pub max_paths: Option<usize>,
    #[serde(default)]
    pub scope: PathScope,
}

pub struct PathEnumerator<'n> {
    net: &'n PetriNet,
    config: EnumeratorConfig,
}

impl<'n> PathEnumerator<'n> {
    pub fn new(net: &'n PetriNet) -> Self {
        PathEnumerator {
            net,
            config: EnumeratorConfig::default(),
        }
    }

    pub fn with_config(net: &'n PetriNet, config: EnumeratorConfig) -> Self {
        PathEnumerator { net, config }
    }

    /// The path set for a run starting at `start`, according to the
    /// configured scope.
    pub fn path_set(&self, start: NodeIndex) -> PNResult<PathSet<'n>> {
        match self.config.scope {
            PathScope::All => self.all_paths(),
            PathScope::FromStart => self.paths_from(start),
        }
    }

    pub fn paths_from(&self, start: NodeIndex) -> PNResult<PathSet<'n>> {
        let mut out = vec![];
        self.walk(start, &mut out)?;
        debug!(
            net = self.net.id(),
            start = start.index(),
            paths = out.len(),
            "enumerated paths"
        );
        Ok(PathSet::new(self.net, out))
    }

    pub fn all_paths(&self) -> PNResult<PathSet<'n>> {
        let mut out = vec![];
        for (idx, _) in self.net.nodes() {
            self.walk(idx, &mut out)?;
        }
        debug!(net = self.net.id(), paths = out.len(), "enumerated all paths");
        Ok(PathSet::new(self.net, out))
    }

    fn walk(&self, start: NodeIndex, out: &mut Vec<Path>) -> PNResult<()> {
        if self.net.get(start).is_none() {
            return Err(PNError::UnknownNode(format!("#{}", start.index())));
        }
        let mut stack = vec![Path::single(start)];
        while let Some(path) = stack.pop() {
            let last = path.last();
            let successors = self.net.successors(last);
            let revisited = path.nodes()[..path.len() - 1].contains(&last);
            if successors.is_empty() || revisited {
                out.push(path);
                if let Some(max) = self.config.max_paths {
                    if out.len() > max {
                        return Err(PNError::PathLimit(max));
                    }
                }
                continue;
            }
            // reversed so that the first arc is explored first
            for s in successors.iter().rev() {
                let mut next = path.clone();
                next.push(*s);
                stack.push(next);
            }
        }
        Ok(())
    }
}
