//! GraphViz rendering of a net, used when inspecting a model by hand.

use super::*;
use std::fmt::Write;

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

pub fn to_dot(net: &PetriNet) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "digraph \"{}\" {{", escape(net.id()));
    for (idx, node) in net.nodes() {
        let (shape, label) = match node {
            Node::Place(p) if p.tags.is_empty() => ("circle", escape(&p.id)),
            Node::Place(p) => {
                let tags: Vec<_> = p.tags.iter().map(|t| escape(t)).collect();
                ("circle", format!("{}\\n{}", escape(&p.id), tags.join(", ")))
            }
            Node::Transition(t) => ("box", format!("{}\\n[{}]", escape(&t.id), t.kind())),
        };
        let _ = writeln!(
            out,
            "  n{} [shape={}, label=\"{}\"];",
            idx.index(),
            shape,
            label
        );
    }
    for a in net.arcs() {
        let _ = writeln!(out, "  n{} -> n{};", a.source.index(), a.target.index());
    }
    out.push_str("}\n");
    out
}
