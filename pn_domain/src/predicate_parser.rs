use super::*;

fn conjunction(mut xs: Vec<Predicate>) -> Predicate {
    if xs.len() == 1 {
        xs.remove(0)
    } else {
        Predicate::AND(xs)
    }
}

fn disjunction(mut xs: Vec<Predicate>) -> Predicate {
    if xs.len() == 1 {
        xs.remove(0)
    } else {
        Predicate::OR(xs)
    }
}

peg::parser!(pub grammar pred_parser() for str {
    rule _() = quiet!{[' ' | '\t' | '\n' | '\r']*}

    pub rule string() -> String
        = "\"" cs:string_char()* "\"" { cs.into_iter().collect() }

    rule string_char() -> char
        = "\\\\" { '\\' }
        / "\\\"" { '"' }
        / c:[^ '"' | '\\'] { c }

    rule kind() -> TransitionKind
        = "app" { TransitionKind::App }
        / "control" { TransitionKind::Control }

    rule argument() -> String
        = _ "(" _ s:string() _ ")" { s }

    rule atom() -> Predicate
        = "TRUE" { Predicate::TRUE }
        / "FALSE" { Predicate::FALSE }
        / "id" _ "==" _ s:string() { Predicate::ID(s) }
        / "kind" _ "==" _ k:kind() { Predicate::KIND(k) }
        / "tag" s:argument() { Predicate::TAG(s) }
        / "reads" s:argument() { Predicate::READS(s) }
        / "writes" s:argument() { Predicate::WRITES(s) }
        / "erases" s:argument() { Predicate::ERASES(s) }
        / "terminal" { Predicate::TERMINAL }
        / "initial" { Predicate::INITIAL }
        / "!" _ p:atom() { Predicate::NOT(Box::new(p)) }
        / "(" _ p:disj() _ ")" { p }

    rule conj() -> Predicate
        = xs:(atom() ++ (_ "&&" _)) { conjunction(xs) }

    rule disj() -> Predicate
        = xs:(conj() ++ (_ "||" _)) { disjunction(xs) }

    pub rule pred() -> Predicate
        = _ p:disj() _ { p }
});

#[cfg(test)]
mod parser_test {
    use super::*;

    #[test]
    fn parse_flat_and_nested() {
        let p = pred_parser::pred(r#" tag("a") && reads("x") || !(terminal) "#).unwrap();
        println!("{p}");
        assert_eq!(
            p,
            Predicate::OR(vec![
                Predicate::AND(vec![Predicate::tag("a"), Predicate::reads("x")]),
                Predicate::not(Predicate::TERMINAL),
            ])
        );

        let p = pred_parser::pred(r#"kind == control && (id == "trans://t" || initial)"#).unwrap();
        assert_eq!(
            p,
            Predicate::AND(vec![
                Predicate::KIND(TransitionKind::Control),
                Predicate::OR(vec![Predicate::id("trans://t"), Predicate::INITIAL]),
            ])
        );
    }

    #[test]
    fn parse_strings() {
        assert_eq!(pred_parser::string(r#""a \"b\" \\ c""#).unwrap(), "a \"b\" \\ c");
        assert!(pred_parser::string(r#""open"#).is_err());
    }
}
