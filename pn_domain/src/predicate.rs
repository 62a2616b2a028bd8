/// This file defines the atomic node predicates used in formula leaves

use super::*;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub enum Predicate {
    AND(Vec<Predicate>),
    OR(Vec<Predicate>),
    NOT(Box<Predicate>),
    TRUE,
    FALSE,
    ID(String),
    TAG(String),      // place tag or transition context
    READS(String),    // transitions only
    WRITES(String),   // transitions only
    ERASES(String),   // transitions only
    KIND(TransitionKind),
    TERMINAL,         // no arcs leave the node
    INITIAL,          // no arcs enter the node
}

pub trait EvaluatePredicate {
    fn eval(&self, net: &PetriNet, node: NodeIndex) -> bool;
}

impl fmt::Display for Predicate {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = match &self {
            Predicate::AND(x) if x.is_empty() => "TRUE".into(),
            Predicate::OR(x) if x.is_empty() => "FALSE".into(),
            Predicate::AND(x) | Predicate::OR(x) if x.len() == 1 => format!("{}", x[0]),
            Predicate::AND(x) => {
                let children: Vec<_> = x.iter().map(|p| format!("{p}")).collect();
                format!("({})", children.join(" && "))
            }
            Predicate::OR(x) => {
                let children: Vec<_> = x.iter().map(|p| format!("{p}")).collect();
                format!("({})", children.join(" || "))
            }
            Predicate::NOT(p) => format!("!({p})"),
            Predicate::TRUE => "TRUE".into(),
            Predicate::FALSE => "FALSE".into(),
            Predicate::ID(id) => format!("id == {}", quoted(id)),
            Predicate::TAG(t) => format!("tag({})", quoted(t)),
            Predicate::READS(r) => format!("reads({})", quoted(r)),
            Predicate::WRITES(r) => format!("writes({})", quoted(r)),
            Predicate::ERASES(r) => format!("erases({})", quoted(r)),
            Predicate::KIND(k) => format!("kind == {k}"),
            Predicate::TERMINAL => "terminal".into(),
            Predicate::INITIAL => "initial".into(),
        };

        write!(fmtr, "{}", &s)
    }
}

fn quoted(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

impl Default for Predicate {
    fn default() -> Self {
        Predicate::TRUE
    }
}

impl Predicate {
    pub fn from_string(from: &str) -> Option<Self> {
        predicate_parser::pred_parser::pred(from).ok()
    }

    pub fn parse(from: &str) -> PNResult<Self> {
        predicate_parser::pred_parser::pred(from).map_err(|e| PNError::parse(from, e))
    }

    pub fn id(id: &str) -> Self {
        Predicate::ID(id.to_string())
    }

    pub fn tag(tag: &str) -> Self {
        Predicate::TAG(tag.to_string())
    }

    pub fn reads(resource: &str) -> Self {
        Predicate::READS(resource.to_string())
    }

    pub fn writes(resource: &str) -> Self {
        Predicate::WRITES(resource.to_string())
    }

    pub fn erases(resource: &str) -> Self {
        Predicate::ERASES(resource.to_string())
    }

    pub fn not(p: Predicate) -> Self {
        Predicate::NOT(Box::new(p))
    }
}

impl EvaluatePredicate for Predicate {
    fn eval(&self, net: &PetriNet, node: NodeIndex) -> bool {
        let n = match net.get(node) {
            Some(n) => n,
            None => return false,
        };
        match self {
            Predicate::AND(ps) => ps.iter().all(|p| p.eval(net, node)),
            Predicate::OR(ps) => ps.iter().any(|p| p.eval(net, node)),
            Predicate::NOT(p) => !p.eval(net, node),
            Predicate::TRUE => true,
            Predicate::FALSE => false,
            Predicate::ID(id) => n.id() == id,
            Predicate::TAG(t) => match n {
                Node::Place(p) => p.tags.contains(t),
                Node::Transition(tr) => tr.context.context.contains(t),
            },
            Predicate::READS(r) => n
                .as_transition()
                .map(|t| t.context.read.contains(r))
                .unwrap_or(false),
            Predicate::WRITES(r) => n
                .as_transition()
                .map(|t| t.context.write.contains(r))
                .unwrap_or(false),
            Predicate::ERASES(r) => n
                .as_transition()
                .map(|t| t.context.erase.contains(r))
                .unwrap_or(false),
            Predicate::KIND(k) => n.as_transition().map(|t| t.kind() == *k).unwrap_or(false),
            Predicate::TERMINAL => net.successors(node).is_empty(),
            Predicate::INITIAL => net.predecessors(node).is_empty(),
        }
    }
}

#[cfg(test)]
mod predicate_test {
    use super::*;

    fn net() -> PetriNet {
        let mut net = PetriNet::new("n");
        net.add_place(Place::new("place://start").with_tag("start")).unwrap();
        net.add_place(Place::new("place://end")).unwrap();
        net.add_transition(
            Transition::new("trans://getData")
                .with_context("france")
                .reading("data")
                .erasing("data"),
        )
        .unwrap();
        net.connect("place://start", "trans://getData").unwrap();
        net.connect("trans://getData", "place://end").unwrap();
        net
    }

    #[test]
    fn eval_pred() {
        let net = net();
        let start = net.lookup("place://start").unwrap();
        let get = net.lookup("trans://getData").unwrap();
        let end = net.lookup("place://end").unwrap();

        assert!(Predicate::tag("start").eval(&net, start));
        assert!(!Predicate::tag("start").eval(&net, end));
        assert!(Predicate::tag("france").eval(&net, get));
        assert!(Predicate::reads("data").eval(&net, get));
        assert!(!Predicate::writes("data").eval(&net, get));
        assert!(Predicate::erases("data").eval(&net, get));
        assert!(!Predicate::reads("data").eval(&net, start));
        assert!(Predicate::KIND(TransitionKind::App).eval(&net, get));
        assert!(!Predicate::KIND(TransitionKind::App).eval(&net, start));
        assert!(Predicate::INITIAL.eval(&net, start));
        assert!(Predicate::TERMINAL.eval(&net, end));
        assert!(!Predicate::TERMINAL.eval(&net, get));

        let p = Predicate::AND(vec![
            Predicate::id("trans://getData"),
            Predicate::not(Predicate::writes("data")),
        ]);
        assert!(p.eval(&net, get));
        assert!(!p.eval(&net, start));
        assert!(Predicate::OR(vec![Predicate::FALSE, Predicate::TERMINAL]).eval(&net, end));
    }

    // the printed form should always be accepted by the parser
    #[test]
    fn display_vs_parser() {
        let preds = vec![
            Predicate::TRUE,
            Predicate::id("place://start"),
            Predicate::KIND(TransitionKind::Control),
            Predicate::not(Predicate::tag("say \"hi\"")),
            Predicate::AND(vec![
                Predicate::reads("data"),
                Predicate::OR(vec![Predicate::TERMINAL, Predicate::INITIAL]),
                Predicate::erases("a\\b"),
            ]),
        ];
        for p in preds {
            let s = p.to_string();
            println!("{s}");
            assert_eq!(Predicate::from_string(&s), Some(p));
        }
    }

    // empty and single-child groups print without the group, so only their
    // meaning survives the trip through the parser
    #[test]
    fn degenerate_groups_keep_their_meaning() {
        let net = net();
        let groups = vec![
            (Predicate::AND(vec![]), Predicate::TRUE),
            (Predicate::OR(vec![]), Predicate::FALSE),
            (Predicate::AND(vec![Predicate::tag("start")]), Predicate::tag("start")),
            (Predicate::OR(vec![Predicate::INITIAL]), Predicate::INITIAL),
        ];
        for (group, printed_as) in groups {
            let back = Predicate::parse(&group.to_string()).unwrap();
            assert_eq!(back, printed_as);
            for (n, _) in net.nodes() {
                assert_eq!(back.eval(&net, n), group.eval(&net, n));
            }
        }
    }

    #[test]
    fn parse_errors() {
        let res = Predicate::parse("id = \"x\"");
        println!("{:?}", res);
        assert!(matches!(res, Err(PNError::Parse { .. })));
        assert_eq!(Predicate::from_string("tag(unquoted)"), None);
    }
}
