use hero_sieve_core::model::{Faction, Role};
use hero_sieve_core::sieve::{parse, Comparison, Field, Predicate, StarRange};

fn stars(min: u8, max: u8) -> Predicate {
    Predicate::Stars(StarRange::new(min, max).expect("valid range"))
}

#[test]
fn empty_text_yields_empty_criteria() {
    for text in ["", "   ", "\t\n"] {
        let criteria = parse(text);
        assert!(criteria.is_empty());
        assert!(criteria.ignored().is_empty());
        assert_eq!(criteria.text(), text);
    }
}

#[test]
fn untagged_tokens_become_lowercase_name_substrings() {
    let criteria = parse("AJ  Bor");
    assert_eq!(
        criteria.predicates(),
        &[Predicate::NameContains("aj".into()), Predicate::NameContains("bor".into())]
    );
    assert_eq!(criteria.text(), "AJ  Bor");
}

#[test]
fn tagged_role_and_faction_tokens() {
    let criteria = parse("role:Tank r:mage faction:dark F:LIGHT");
    assert_eq!(
        criteria.predicates(),
        &[
            Predicate::Role(Role::Tank),
            Predicate::Role(Role::Mage),
            Predicate::Faction(Faction::Dark),
            Predicate::Faction(Faction::Light),
        ]
    );
    assert!(criteria.ignored().is_empty());
}

#[test]
fn comma_separated_values_expand_to_one_predicate_each() {
    let criteria = parse("role:tank,support");
    assert_eq!(
        criteria.predicates(),
        &[Predicate::Role(Role::Tank), Predicate::Role(Role::Support)]
    );
}

#[test]
fn star_expressions() {
    assert_eq!(parse("stars:5").predicates(), &[stars(5, 5)]);
    assert_eq!(parse("s:3-5").predicates(), &[stars(3, 5)]);
    assert_eq!(parse("star:8+").predicates(), &[stars(8, 10)]);
    assert_eq!(parse("s:>=7").predicates(), &[stars(7, 10)]);
    assert_eq!(parse("s:>7").predicates(), &[stars(8, 10)]);
    assert_eq!(parse("s:<=2").predicates(), &[stars(1, 2)]);
    assert_eq!(parse("s:<3").predicates(), &[stars(1, 2)]);
    assert_eq!(parse("5*").predicates(), &[stars(5, 5)]);
    assert_eq!(parse("2-4*").predicates(), &[stars(2, 4)]);
    assert_eq!(parse("is:shardable").predicates(), &[stars(3, 5)]);
}

#[test]
fn malformed_star_expressions_are_ignored() {
    for token in ["s:0", "s:11", "s:5-3", "s:>10", "s:<1", "s:abc", "s:", "0*", "12*", "s:-4"] {
        let criteria = parse(token);
        assert!(criteria.is_empty(), "{token} should not filter");
        assert_eq!(criteria.ignored(), &[token.to_string()]);
    }
}

#[test]
fn unknown_tokens_are_preserved_but_do_not_filter() {
    let criteria = parse("color:red role:paladin Ajax is:legendary");
    assert_eq!(criteria.predicates(), &[Predicate::NameContains("ajax".into())]);
    assert_eq!(criteria.ignored(), &["color:red", "role:paladin", "is:legendary"]);
    assert_eq!(criteria.text(), "color:red role:paladin Ajax is:legendary");
}

#[test]
fn partially_valid_lists_keep_good_values() {
    let criteria = parse("role:tank,paladin");
    assert_eq!(criteria.predicates(), &[Predicate::Role(Role::Tank)]);
    assert_eq!(criteria.ignored(), &["role:tank,paladin"]);
}

#[test]
fn bare_star_is_a_name_term() {
    assert_eq!(parse("*").predicates(), &[Predicate::NameContains("*".into())]);
}

#[test]
fn predicates_report_field_and_comparison() {
    let criteria = parse("aj role:tank f:dark s:4 s:2-6");
    let tags: Vec<(Field, Comparison)> =
        criteria.predicates().iter().map(|p| (p.field(), p.comparison())).collect();
    assert_eq!(
        tags,
        vec![
            (Field::Name, Comparison::Substring),
            (Field::Role, Comparison::Equality),
            (Field::Faction, Comparison::Equality),
            (Field::Stars, Comparison::Equality),
            (Field::Stars, Comparison::Range),
        ]
    );
}

#[test]
fn each_parse_returns_a_fresh_value() {
    let first = parse("ajax");
    let second = parse("ajax role:tank");
    assert_eq!(first.predicates().len(), 1);
    assert_eq!(second.predicates().len(), 2);
    assert_eq!(first, parse("ajax"));
}
