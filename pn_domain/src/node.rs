//! Places, transitions and the handles used to address them in a net.

use super::*;
use std::collections::BTreeSet;

/// Position of a node inside its `PetriNet`. Only meaningful together with
/// the net that handed it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub(crate) usize);

impl NodeIndex {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Place,
    Transition,
}

impl NodeKind {
    pub fn other(&self) -> NodeKind {
        match self {
            NodeKind::Place => NodeKind::Transition,
            NodeKind::Transition => NodeKind::Place,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Place => write!(fmtr, "place"),
            NodeKind::Transition => write!(fmtr, "transition"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Place {
    pub fn new(id: &str) -> Self {
        Place {
            id: id.to_string(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.insert(tag.to_string());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, Default)]
pub enum TransitionKind {
    #[default]
    #[serde(rename = "APP")]
    App,
    #[serde(rename = "CONTROL")]
    Control,
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionKind::App => write!(fmtr, "app"),
            TransitionKind::Control => write!(fmtr, "control"),
        }
    }
}

/// What a transition does to the data it touches, and under which
/// circumstances (`context`) it happens.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Default)]
pub struct ContextObject {
    #[serde(default)]
    pub context: BTreeSet<String>,
    #[serde(default)]
    pub read: BTreeSet<String>,
    #[serde(default)]
    pub write: BTreeSet<String>,
    #[serde(default)]
    pub erase: BTreeSet<String>,
    #[serde(default)]
    pub kind: TransitionKind,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Transition {
    pub id: String,
    #[serde(default)]
    pub context: ContextObject,
}

impl Transition {
    pub fn new(id: &str) -> Self {
        Transition {
            id: id.to_string(),
            context: ContextObject::default(),
        }
    }

    pub fn with_context(mut self, tag: &str) -> Self {
        self.context.context.insert(tag.to_string());
        self
    }

    pub fn reading(mut self, resource: &str) -> Self {
        self.context.read.insert(resource.to_string());
        self
    }

    pub fn writing(mut self, resource: &str) -> Self {
        self.context.write.insert(resource.to_string());
        self
    }

    pub fn erasing(mut self, resource: &str) -> Self {
        self.context.erase.insert(resource.to_string());
        self
    }

    pub fn of_kind(mut self, kind: TransitionKind) -> Self {
        self.context.kind = kind;
        self
    }

    pub fn kind(&self) -> TransitionKind {
        self.context.kind
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Node {
    Place(Place),
    Transition(Transition),
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Node::Place(p) => &p.id,
            Node::Transition(t) => &t.id,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Place(_) => NodeKind::Place,
            Node::Transition(_) => NodeKind::Transition,
        }
    }

    pub fn is_place(&self) -> bool {
        matches!(self, Node::Place(_))
    }

    pub fn is_transition(&self) -> bool {
        matches!(self, Node::Transition(_))
    }

    pub fn as_place(&self) -> Option<&Place> {
        match self {
            Node::Place(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_transition(&self) -> Option<&Transition> {
        match self {
            Node::Transition(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Place(p) => write!(fmtr, "{}", p.id),
            Node::Transition(t) => write!(fmtr, "{} [{}]", t.id, t.kind()),
        }
    }
}

impl From<Place> for Node {
    fn from(p: Place) -> Self {
        Node::Place(p)
    }
}

impl From<Transition> for Node {
    fn from(t: Transition) -> Self {
        Node::Transition(t)
    }
}
