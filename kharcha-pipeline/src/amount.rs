//! Amount extraction from lower-cased phrases.
//!
//! Rules are tried in order and each rule only looks at its first match.
//! Currency-marked numbers come first so that a quantity such as
//! "3 mangoes" never wins over "250 rupees" later in the same phrase.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::{KharchaError, Result};

/// Any Unicode decimal digit (general category Nd)
const DIGIT: &str = r"\d";

/// Single-character Nd test. `None` only if the regex engine was built
/// without Unicode tables, in which case only ASCII digits count.
static DECIMAL_DIGIT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d$").ok());

/// One rule of the amount grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountRule {
    /// "500 rupees", "500rs", "500 ₹"
    SuffixCurrency,
    /// "₹500", "₹ 500"
    RupeeSign,
    /// "rs 500", "rs.500"
    RsPrefix,
    /// "500 rupaye", "500 rupaiye"
    SuffixRupaye,
    /// Any number at all
    BareNumber,
}

impl AmountRule {
    /// Precedence order
    pub const ORDER: [AmountRule; 5] = [
        AmountRule::SuffixCurrency,
        AmountRule::RupeeSign,
        AmountRule::RsPrefix,
        AmountRule::SuffixRupaye,
        AmountRule::BareNumber,
    ];

    fn pattern(&self) -> String {
        let num = format!(r"({DIGIT}+(?:\.{DIGIT}+)?)");
        match self {
            AmountRule::SuffixCurrency => format!(r"{num}\s*(?:rupees?|rs\.?|₹)"),
            AmountRule::RupeeSign => format!(r"₹\s*{num}"),
            AmountRule::RsPrefix => format!(r"rs\.?\s*{num}"),
            AmountRule::SuffixRupaye => format!(r"{num}\s*(?:rupaye|rupaiye)"),
            AmountRule::BareNumber => num,
        }
    }
}

/// Compiled amount rules, in precedence order
#[derive(Debug, Clone)]
pub struct AmountGrammar {
    rules: Vec<(AmountRule, Regex)>,
}

/// An accepted amount and the rule that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountMatch {
    pub rule: AmountRule,
    pub value: f64,
}

impl AmountGrammar {
    pub fn new() -> Result<Self> {
        let rules = AmountRule::ORDER
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                Regex::new(&rule.pattern())
                    .map(|re| (*rule, re))
                    .map_err(|source| KharchaError::Pattern { index, source })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Positive amount in `text`, if any rule yields one.
    pub fn extract(&self, text: &str) -> Option<f64> {
        self.extract_match(text).map(|m| m.value)
    }

    /// Like [`extract`](Self::extract) but also reports which rule fired.
    pub fn extract_match(&self, text: &str) -> Option<AmountMatch> {
        let lower = text.to_lowercase();

        for (rule, re) in &self.rules {
            let Some(caps) = re.captures(&lower) else {
                continue;
            };
            let raw = &caps[1];
            match parse_number(raw) {
                Some(value) if value > 0.0 => {
                    debug!(?rule, raw, value, "amount accepted");
                    return Some(AmountMatch { rule: *rule, value });
                }
                _ => {
                    debug!(?rule, raw, "amount rejected, trying next rule");
                }
            }
        }

        None
    }
}

pub(crate) fn is_decimal_digit(c: char) -> bool {
    if c.is_ascii_digit() {
        return true;
    }
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT
        .as_ref()
        .is_some_and(|re| re.is_match(c.encode_utf8(&mut buf)))
}

/// Numeric value of a decimal digit in any script.
///
/// Unicode encodes every Nd script as contiguous runs of 0..=9, so the
/// value is the distance from the start of the run, modulo 10.
fn digit_value(c: char) -> Option<u32> {
    if let Some(v) = c.to_digit(10) {
        return Some(v);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

/// `digits` or `digits.digits`
pub(crate) fn is_plain_number(token: &str) -> bool {
    let (int, frac) = match token.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (token, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(is_decimal_digit);
    all_digits(int) && frac.is_none_or(all_digits)
}

fn parse_number(raw: &str) -> Option<f64> {
    let ascii = raw
        .chars()
        .map(|c| match c {
            '.' => Some('.'),
            _ => digit_value(c).and_then(|v| char::from_digit(v, 10)),
        })
        .collect::<Option<String>>()?;
    ascii.parse::<f64>().ok().filter(|v| v.is_finite())
}
