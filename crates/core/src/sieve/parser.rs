use crate::model::{Faction, Role, MAX_STARS, MIN_STARS};
use crate::sieve::{FilterCriteria, Predicate, StarRange};

/// Stars covered by the `is:shardable` shorthand.
const SHARDABLE_STARS: (u8, u8) = (3, 5);

/// Parse free-form smart text into filter criteria.
///
/// Never fails: tokens that cannot be understood are kept in
/// [`FilterCriteria::ignored`] and otherwise skipped, so a bad query degrades
/// to a looser filter instead of an error.
///
/// Grammar, one whitespace-separated token at a time:
/// - `role:<name>` / `r:<name>`
/// - `faction:<name>` / `f:<name>`
/// - `stars:<expr>` / `star:<expr>` / `s:<expr>`
/// - `is:shardable`
/// - `<expr>*` where `<expr>` starts with a digit (e.g. `5*`, `3-5*`)
/// - anything else matches as a case-insensitive name substring
///
/// Tagged values may be comma-separated; each value becomes its own predicate.
pub fn parse(text: &str) -> FilterCriteria {
    let mut predicates = Vec::new();
    let mut ignored = Vec::new();

    for token in text.split_whitespace() {
        let outcome = parse_token(token);
        if !outcome.clean {
            log::debug!("ignoring smart-text token '{token}'");
            ignored.push(token.to_string());
        }
        predicates.extend(outcome.predicates);
    }

    log::trace!("parsed '{text}' into {} predicate(s)", predicates.len());
    FilterCriteria::from_parts(text.to_string(), predicates, ignored)
}

/// Predicates produced by one token; `clean` is false if any part was rejected.
struct TokenOutcome {
    predicates: Vec<Predicate>,
    clean: bool,
}

impl TokenOutcome {
    fn rejected() -> Self {
        Self { predicates: vec![], clean: false }
    }
}

fn parse_token(token: &str) -> TokenOutcome {
    if let Some((key, value)) = token.split_once(':') {
        return parse_tagged(&key.to_lowercase(), value);
    }

    if let Some(expr) = token.strip_suffix('*') {
        if expr.starts_with(|c: char| c.is_ascii_digit()) {
            return match parse_star_expr(expr) {
                Some(range) => TokenOutcome { predicates: vec![Predicate::Stars(range)], clean: true },
                None => TokenOutcome::rejected(),
            };
        }
    }

    TokenOutcome { predicates: vec![Predicate::name_contains(token)], clean: true }
}

fn parse_tagged(key: &str, value: &str) -> TokenOutcome {
    let parse_value: fn(&str) -> Option<Predicate> = match key {
        "role" | "r" => parse_role,
        "faction" | "f" => parse_faction,
        "stars" | "star" | "s" => parse_stars_value,
        "is" => parse_flag,
        _ => return TokenOutcome::rejected(),
    };

    let mut outcome = TokenOutcome { predicates: vec![], clean: true };
    for part in value.split(',') {
        match parse_value(part) {
            Some(predicate) => outcome.predicates.push(predicate),
            None => outcome.clean = false,
        }
    }
    outcome
}

fn parse_role(value: &str) -> Option<Predicate> {
    value.parse::<Role>().ok().map(Predicate::Role)
}

fn parse_faction(value: &str) -> Option<Predicate> {
    value.parse::<Faction>().ok().map(Predicate::Faction)
}

fn parse_stars_value(value: &str) -> Option<Predicate> {
    parse_star_expr(value).map(Predicate::Stars)
}

fn parse_flag(value: &str) -> Option<Predicate> {
    match value.to_lowercase().as_str() {
        "shardable" => {
            let (min, max) = SHARDABLE_STARS;
            StarRange::new(min, max).map(Predicate::Stars)
        }
        _ => None,
    }
}

/// Parse `N`, `N-M`, `N+`, `>=N`, `>N`, `<=N` or `<N` into a star range.
fn parse_star_expr(expr: &str) -> Option<StarRange> {
    let expr = expr.trim();
    if let Some(rest) = expr.strip_prefix(">=") {
        return StarRange::new(parse_stars(rest)?, MAX_STARS);
    }
    if let Some(rest) = expr.strip_prefix("<=") {
        return StarRange::new(MIN_STARS, parse_stars(rest)?);
    }
    if let Some(rest) = expr.strip_prefix('>') {
        return StarRange::new(parse_stars(rest)?.checked_add(1)?, MAX_STARS);
    }
    if let Some(rest) = expr.strip_prefix('<') {
        return StarRange::new(MIN_STARS, parse_stars(rest)?.checked_sub(1)?);
    }
    if let Some(rest) = expr.strip_suffix('+') {
        return StarRange::new(parse_stars(rest)?, MAX_STARS);
    }
    if let Some((lo, hi)) = expr.split_once('-') {
        return StarRange::new(parse_stars(lo)?, parse_stars(hi)?);
    }
    StarRange::exactly(parse_stars(expr)?)
}

fn parse_stars(digits: &str) -> Option<u8> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
