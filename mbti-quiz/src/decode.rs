//! Tolerant decoding of whatever sits under the result key.
//!
//! The quiz only ever writes a bare code such as `ESTJ`, but the result page
//! also accepts values written by other producers:
//!
//! 1. a bare code in any case (`"estj"`),
//! 2. a JSON string holding a code (`"\"ESTJ\""`),
//! 3. a JSON object of per-letter counts (`{"E":3,"I":0,...}`) or per-pair
//!    scores (`{"EI":2,"SN":-1,...}`), resolved one axis at a time.
//!
//! Strategies run in that order and the first code wins. Anything else is
//! reported as an unrecognized value (it parsed as JSON) or as unreadable
//! (it did not).
use crate::ResultStore;
use crate::axis::{Axis, Letter};
use crate::code::{TypologyCode, looks_like_code};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// Which decoding strategy produced a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    BareCode,
    JsonString,
    AxisScores,
}

impl Strategy {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BareCode => "bare-code",
            Self::JsonString => "json-string",
            Self::AxisScores => "axis-scores",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Uppercase four-letter code over `EISNTFJP`.
///
/// Letters are not guaranteed to sit on their own axis (`EEEE` is accepted),
/// which is why label lookup can miss.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedCode(String);

impl ResolvedCode {
    fn parse(s: &str) -> Option<Self> {
        looks_like_code(s).then(|| Self(s.to_ascii_uppercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The axis-ordered code, when the letters form one.
    #[must_use]
    pub fn typology(&self) -> Option<TypologyCode> {
        self.0.parse().ok()
    }
}

impl From<TypologyCode> for ResolvedCode {
    fn from(code: TypologyCode) -> Self {
        Self(code.to_string())
    }
}

impl fmt::Display for ResolvedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    Resolved { code: ResolvedCode, via: Strategy },
    /// Nothing stored under the key.
    Missing,
    /// Valid JSON of an unknown shape, rendered back as text.
    Unrecognized(String),
    /// Neither a code nor JSON.
    Unreadable,
}

impl DecodeOutcome {
    #[must_use]
    pub const fn code(&self) -> Option<&ResolvedCode> {
        match self {
            Self::Resolved { code, .. } => Some(code),
            Self::Missing | Self::Unrecognized(_) | Self::Unreadable => None,
        }
    }
}

/// Stored text plus its JSON reading, parsed once for every strategy.
struct Candidate<'a> {
    raw: &'a str,
    parsed: Option<Value>,
}

impl<'a> Candidate<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            raw,
            parsed: serde_json::from_str(raw).ok(),
        }
    }
}

type StrategyFn = fn(&Candidate<'_>) -> Option<ResolvedCode>;

const STRATEGIES: &[(Strategy, StrategyFn)] = &[
    (Strategy::BareCode, bare_code),
    (Strategy::JsonString, json_string),
    (Strategy::AxisScores, axis_scores),
];

fn bare_code(candidate: &Candidate<'_>) -> Option<ResolvedCode> {
    ResolvedCode::parse(candidate.raw)
}

fn json_string(candidate: &Candidate<'_>) -> Option<ResolvedCode> {
    match candidate.parsed.as_ref()? {
        Value::String(s) => ResolvedCode::parse(s),
        _ => None,
    }
}

fn axis_scores(candidate: &Candidate<'_>) -> Option<ResolvedCode> {
    match candidate.parsed.as_ref()? {
        Value::Object(map) => Some(resolve_axis_scores(map).into()),
        _ => None,
    }
}

/// Decode a raw stored value; `None` means the key was absent.
#[must_use]
pub fn decode(raw: Option<&str>) -> DecodeOutcome {
    let Some(raw) = raw else {
        return DecodeOutcome::Missing;
    };
    let candidate = Candidate::new(raw);
    if let Some((via, code)) = STRATEGIES
        .iter()
        .find_map(|(via, strategy)| strategy(&candidate).map(|code| (*via, code)))
    {
        log::debug!("decoded {code} via {via}");
        return DecodeOutcome::Resolved { code, via };
    }

    match candidate.parsed {
        Some(Value::String(text)) => DecodeOutcome::Unrecognized(text),
        Some(value) => serde_json::to_string(&value)
            .map_or(DecodeOutcome::Unreadable, DecodeOutcome::Unrecognized),
        None => {
            log::warn!("stored result is neither a code nor JSON");
            DecodeOutcome::Unreadable
        }
    }
}

/// Read the result key from `store` and decode it.
///
/// A store that cannot be read is treated like an absent key.
pub fn decode_from_store<S: ResultStore>(store: &S, key: &str) -> DecodeOutcome {
    match store.read(key) {
        Ok(raw) => decode(raw.as_deref()),
        Err(err) => {
            log::warn!("could not read {key}: {err}");
            DecodeOutcome::Missing
        }
    }
}

/// Resolve each axis from an object of letter counts or pair scores.
///
/// Keys are matched case-insensitively. Per axis `(A, B)`:
/// - if `A` or `B` is present, the strictly larger count wins (missing is 0);
/// - else if `AB` or `BA` is present, the larger of the two wins (missing is 0);
/// - else, and on every tie, `A` wins.
#[must_use]
pub fn resolve_axis_scores(map: &Map<String, Value>) -> TypologyCode {
    let scores: HashMap<String, f64> = map
        .iter()
        .filter_map(|(key, value)| coerce_number(value).map(|n| (key.to_uppercase(), n)))
        .collect();
    TypologyCode::from_axes(|axis| resolve_axis(&scores, axis))
}

fn resolve_axis(scores: &HashMap<String, f64>, axis: Axis) -> Letter {
    let lookup = |a: Letter, b: Option<Letter>| {
        let mut key = a.to_string();
        if let Some(b) = b {
            key.push(b.as_char());
        }
        scores.get(&key).copied()
    };
    let (first, second) = (axis.first(), axis.second());

    let direct = (lookup(first, None), lookup(second, None));
    if direct.0.is_some() || direct.1.is_some() {
        return axis.pick(direct.0.unwrap_or(0.0), direct.1.unwrap_or(0.0));
    }
    let paired = (lookup(first, Some(second)), lookup(second, Some(first)));
    if paired.0.is_some() || paired.1.is_some() {
        return axis.pick(paired.0.unwrap_or(0.0), paired.1.unwrap_or(0.0));
    }
    first
}

/// Numeric reading of a stored score, following loose `Number(v)` rules.
///
/// Only values without a numeric reading are dropped. A one-element array is
/// read through its element, where booleans and objects have none.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => coerce_text(s),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Array(items) => match items.as_slice() {
            [] => Some(0.0),
            [item @ (Value::Null | Value::Number(_) | Value::String(_) | Value::Array(_))] => {
                coerce_number(item)
            }
            _ => None,
        },
        Value::Object(_) => None,
    }
}

fn coerce_text(s: &str) -> Option<f64> {
    let text = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    match text {
        "" => Some(0.0),
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => radix_integer(text).or_else(|| {
            // `str::parse` also reads `inf` and `nan`, which are not scores.
            text.bytes()
                .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
                .then(|| text.parse().ok())
                .flatten()
        }),
    }
}

/// Unsigned `0x`, `0o` or `0b` literal.
fn radix_integer(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc.mul_add(f64::from(radix), f64::from(d)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError};
    use serde_json::json;

    fn resolved(raw: &str) -> (String, Strategy) {
        match decode(Some(raw)) {
            DecodeOutcome::Resolved { code, via } => (code.to_string(), via),
            other => panic!("expected a code for {raw:?}, got {other:?}"),
        }
    }

    fn scores(value: Value) -> String {
        let Value::Object(map) = value else {
            panic!("test input must be an object");
        };
        resolve_axis_scores(&map).to_string()
    }

    #[test]
    fn bare_code_wins_and_is_uppercased() {
        assert_eq!(resolved("intp"), ("INTP".to_string(), Strategy::BareCode));
    }

    #[test]
    fn json_string_code_is_accepted() {
        assert_eq!(
            resolved("\"enfj\""),
            ("ENFJ".to_string(), Strategy::JsonString)
        );
    }

    #[test]
    fn letter_counts_break_ties_toward_first_letter() {
        let raw = r#"{"E":2,"I":2,"S":1,"N":0,"T":0,"F":0,"J":1,"P":1}"#;
        assert_eq!(resolved(raw), ("ESTJ".to_string(), Strategy::AxisScores));
    }

    #[test]
    fn letter_counts_ignore_key_case_and_default_missing_side() {
        assert_eq!(scores(json!({"i": 1, "n": "2", "f": 3, "p": true})), "INFP");
        assert_eq!(scores(json!({"I": 0, "N": -1})), "ESTJ");
    }

    #[test]
    fn pair_scores_compare_both_orders() {
        assert_eq!(scores(json!({"EI": 2, "SN": -1, "FT": 3, "JP": 0})), "ENFJ");
        assert_eq!(scores(json!({"ie": 4, "ei": 4})), "ESTJ");
    }

    #[test]
    fn direct_counts_take_precedence_over_pair_scores() {
        assert_eq!(scores(json!({"E": 0, "I": 1, "EI": 9})), "ISTJ");
    }

    #[test]
    fn values_without_a_numeric_reading_are_discarded() {
        assert_eq!(
            scores(json!({"I": "lots", "N": [3], "F": {"n": 1}, "P": "4"})),
            "ENTP"
        );
        assert_eq!(scores(json!({"I": "inf", "E": 1, "N": [true], "F": [1, 2]})), "ESTJ");
        assert_eq!(scores(json!({"P": "nan", "J": "-0x1"})), "ESTJ");
    }

    #[test]
    fn infinities_and_radix_literals_count() {
        assert_eq!(scores(json!({"E": "Infinity", "I": 5})), "ESTJ");
        assert_eq!(scores(json!({"S": " -Infinity ", "N": -5})), "ENTJ");
        assert_eq!(scores(json!({"I": "0x10", "E": 3})), "ISTJ");
        assert_eq!(scores(json!({"F": "0b11", "T": "0o2"})), "ESFJ");
    }

    #[test]
    fn single_element_arrays_read_through_their_element() {
        assert_eq!(scores(json!({"N": [3]})), "ENTJ");
        assert_eq!(scores(json!({"N": [[2]], "F": [], "P": ["0b11"]})), "ENTP");
        assert_eq!(scores(json!({"I": [null], "E": -1})), "ISTJ");
    }

    #[test]
    fn empty_object_falls_back_to_first_letters() {
        assert_eq!(resolved("{}"), ("ESTJ".to_string(), Strategy::AxisScores));
    }

    #[test]
    fn off_axis_bare_code_still_resolves() {
        let (code, via) = resolved("eeee");
        assert_eq!((code.as_str(), via), ("EEEE", Strategy::BareCode));
        let DecodeOutcome::Resolved { code, .. } = decode(Some("EEEE")) else {
            unreachable!()
        };
        assert!(code.typology().is_none());
    }

    #[test]
    fn non_ascii_look_alike_letters_do_not_resolve() {
        assert_eq!(decode(Some("E\u{17F}TJ")), DecodeOutcome::Unreadable);
        assert_eq!(
            decode(Some("\"\u{17F}\u{17F}\u{17F}\u{17F}\"")),
            DecodeOutcome::Unrecognized("\u{17F}\u{17F}\u{17F}\u{17F}".to_string())
        );
    }

    #[test]
    fn missing_key_is_its_own_outcome() {
        assert_eq!(decode(None), DecodeOutcome::Missing);
    }

    #[test]
    fn malformed_json_is_unreadable() {
        assert_eq!(decode(Some("{not json")), DecodeOutcome::Unreadable);
        assert_eq!(decode(Some("")), DecodeOutcome::Unreadable);
    }

    #[test]
    fn other_json_shapes_are_unrecognized() {
        assert_eq!(
            decode(Some("[1,2,3]")),
            DecodeOutcome::Unrecognized("[1,2,3]".to_string())
        );
        assert_eq!(
            decode(Some("\"hello\"")),
            DecodeOutcome::Unrecognized("hello".to_string())
        );
        assert_eq!(
            decode(Some("null")),
            DecodeOutcome::Unrecognized("null".to_string())
        );
        assert_eq!(
            decode(Some(" 42 ")),
            DecodeOutcome::Unrecognized("42".to_string())
        );
    }

    struct BrokenStore;

    impl ResultStore for BrokenStore {
        type Error = StorageError;

        fn read(&self, _key: &str) -> Result<Option<String>, Self::Error> {
            Err(StorageError::Unavailable("blocked".into()))
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), Self::Error> {
            Err(StorageError::Unavailable("blocked".into()))
        }
    }

    #[test]
    fn store_reads_feed_the_cascade() {
        let store = MemoryStore::new().with_entry("k", "\"istj\"");
        assert_eq!(
            decode_from_store(&store, "k").code().map(ResolvedCode::as_str),
            Some("ISTJ")
        );
        assert_eq!(decode_from_store(&store, "other"), DecodeOutcome::Missing);
        assert_eq!(decode_from_store(&BrokenStore, "k"), DecodeOutcome::Missing);
    }
}
