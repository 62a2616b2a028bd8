//! The structural Petri net: places and transitions connected by directed,
//! bipartite arcs. There are no markings; the net is only walked.

use super::*;
use rustc_hash::FxHashMap;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct Arc {
    pub source: NodeIndex,
    pub target: NodeIndex,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "NetDescription", into = "NetDescription")]
pub struct PetriNet {
    id: String,
    nodes: Vec<Node>,
    arcs: Vec<Arc>,
    index: FxHashMap<String, NodeIndex>,
    outgoing: Vec<Vec<NodeIndex>>,
    incoming: Vec<Vec<NodeIndex>>,
}

impl PetriNet {
    pub fn new(id: &str) -> Self {
        PetriNet {
            id: id.to_string(),
            ..Default::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn add_place(&mut self, place: Place) -> PNResult<NodeIndex> {
        self.add_node(Node::Place(place))
    }

    pub fn add_transition(&mut self, transition: Transition) -> PNResult<NodeIndex> {
        self.add_node(Node::Transition(transition))
    }

    pub fn add_node(&mut self, node: Node) -> PNResult<NodeIndex> {
        if self.index.contains_key(node.id()) {
            return Err(PNError::DuplicateNode(node.id().to_string()));
        }
        let idx = NodeIndex(self.nodes.len());
        self.index.insert(node.id().to_string(), idx);
        self.nodes.push(node);
        self.outgoing.push(vec![]);
        self.incoming.push(vec![]);
        Ok(idx)
    }

    /// Adds the arc `source -> target`. Arcs form a set, adding an existing
    /// arc again is a no-op.
    pub fn add_arc(&mut self, source: NodeIndex, target: NodeIndex) -> PNResult<()> {
        let (from, to) = match (self.get(source), self.get(target)) {
            (Some(from), Some(to)) => (from, to),
            (None, _) => return Err(PNError::UnknownNode(format!("#{}", source.0))),
            (_, None) => return Err(PNError::UnknownNode(format!("#{}", target.0))),
        };
        if from.kind() == to.kind() {
            return Err(PNError::NotBipartite {
                from: from.id().to_string(),
                to: to.id().to_string(),
            });
        }
        if self.outgoing[source.0].contains(&target) {
            return Ok(());
        }
        self.arcs.push(Arc { source, target });
        self.outgoing[source.0].push(target);
        self.incoming[target.0].push(source);
        Ok(())
    }

    pub fn connect(&mut self, source: &str, target: &str) -> PNResult<()> {
        let s = self.lookup(source)?;
        let t = self.lookup(target)?;
        self.add_arc(s, t)
    }

    pub fn find(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn lookup(&self, id: &str) -> PNResult<NodeIndex> {
        self.find(id)
            .ok_or_else(|| PNError::UnknownNode(id.to_string()))
    }

    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(idx.0)
    }

    pub fn node(&self, idx: NodeIndex) -> &Node {
        &self.nodes[idx.0]
    }

    pub fn kind(&self, idx: NodeIndex) -> Option<NodeKind> {
        self.get(idx).map(|n| n.kind())
    }

    pub fn is_place(&self, idx: NodeIndex) -> bool {
        self.get(idx).map(|n| n.is_place()).unwrap_or(false)
    }

    pub fn is_transition(&self, idx: NodeIndex) -> bool {
        self.get(idx).map(|n| n.is_transition()).unwrap_or(false)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &Node)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeIndex(i), n))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn places(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes().filter(|(_, n)| n.is_place()).map(|(i, _)| i)
    }

    pub fn transitions(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes().filter(|(_, n)| n.is_transition()).map(|(i, _)| i)
    }

    pub fn arcs(&self) -> &[Arc] {
        self.arcs.as_slice()
    }

    /// Arcs leaving `idx`.
    pub fn source_arcs(&self, idx: NodeIndex) -> impl Iterator<Item = &Arc> + '_ {
        self.arcs.iter().filter(move |a| a.source == idx)
    }

    /// Arcs entering `idx`.
    pub fn target_arcs(&self, idx: NodeIndex) -> impl Iterator<Item = &Arc> + '_ {
        self.arcs.iter().filter(move |a| a.target == idx)
    }

    /// Direct successors in arc insertion order. Unknown nodes have none.
    pub fn successors(&self, idx: NodeIndex) -> &[NodeIndex] {
        self.outgoing.get(idx.0).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn predecessors(&self, idx: NodeIndex) -> &[NodeIndex] {
        self.incoming.get(idx.0).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn from_json(json: &str) -> PNResult<PetriNet> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> PNResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for PetriNet {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(fmtr, "net {}:", self.id)?;
        for a in &self.arcs {
            writeln!(fmtr, "  {} -> {}", self.node(a.source), self.node(a.target))?;
        }
        Ok(())
    }
}

/// The on-disk shape of a net. Arcs refer to nodes by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NetDescription {
    pub id: String,
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(default)]
    pub transitions: Vec<Transition>,
    #[serde(default)]
    pub arcs: Vec<ArcDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcDescription {
    pub source: String,
    pub target: String,
}

impl TryFrom<NetDescription> for PetriNet {
    type Error = PNError;

    fn try_from(desc: NetDescription) -> PNResult<PetriNet> {
        let mut net = PetriNet::new(&desc.id);
        for p in desc.places {
            net.add_place(p)?;
        }
        for t in desc.transitions {
            net.add_transition(t)?;
        }
        for a in &desc.arcs {
            net.connect(&a.source, &a.target)?;
        }
        Ok(net)
    }
}

impl From<PetriNet> for NetDescription {
    fn from(net: PetriNet) -> Self {
        let arcs = net
            .arcs
            .iter()
            .map(|a| ArcDescription {
                source: net.node(a.source).id().to_string(),
                target: net.node(a.target).id().to_string(),
            })
            .collect();
        let mut places = vec![];
        let mut transitions = vec![];
        for n in net.nodes {
            match n {
                Node::Place(p) => places.push(p),
                Node::Transition(t) => transitions.push(t),
            }
        }
        NetDescription {
            id: net.id,
            places,
            transitions,
            arcs,
        }
    }
}
