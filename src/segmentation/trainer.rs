//! Unsupervised training of boundary detection parameters.
//!
//! Follows Kiss & Strunk (2006), *Unsupervised Multilingual Sentence Boundary Detection*:
//!
//! 1. word types that occur with a final period much more often than chance are abbreviations,
//! 1. the casing of each word type is recorded depending on whether it starts a sentence or not,
//! 1. word types that follow sentence boundaries significantly often are sentence starters.
//!
//! Collocations are not learnt.
use std::collections::HashMap;

use log::debug;

use super::params::{OrthoContext, PunktParameters};
use super::token::{self, Token, NUMBER};
use super::tokenizer::first_pass;

/// minimal score for a type to be considered an abbreviation.
const ABBREV: f64 = 0.3;
/// minimal log-likelihood for a type to be a frequent sentence starter.
const SENT_STARTER: f64 = 30.0;

#[derive(Debug, Default)]
pub struct PunktTrainer {
    type_counts: HashMap<String, usize>,
    num_tokens: usize,
    num_period_tokens: usize,
    sentbreak_count: usize,
    starter_counts: HashMap<String, usize>,
    params: PunktParameters,
}

impl PunktTrainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learn from `text`. Can be called several times to train on multiple documents.
    pub fn train(&mut self, text: &str) {
        let mut tokens = token::tokenize(text);
        debug!("training on {} tokens", tokens.len());

        for tok in &tokens {
            *self.type_counts.entry(tok.typ()).or_default() += 1;
            self.num_tokens += 1;
            if tok.period_final() {
                self.num_period_tokens += 1;
            }
        }

        self.reclassify_abbrev_types();

        first_pass(&mut tokens, &self.params);
        self.record_ortho_context(&tokens);
        self.record_sentence_starters(&tokens);
        self.find_sent_starters();
    }

    /// Get the learnt parameters.
    pub fn params(&self) -> &PunktParameters {
        &self.params
    }

    pub fn into_params(self) -> PunktParameters {
        self.params
    }

    fn count(&self, typ: &str) -> usize {
        self.type_counts.get(typ).copied().unwrap_or_default()
    }

    fn reclassify_abbrev_types(&mut self) {
        let candidates: Vec<String> = self
            .type_counts
            .keys()
            .filter_map(|typ| typ.strip_suffix('.'))
            .filter(|base| {
                !base.is_empty()
                    && !base.starts_with(NUMBER)
                    && base.chars().any(char::is_alphabetic)
                    && !base.ends_with('.')
            })
            .map(str::to_string)
            .collect();

        for base in candidates {
            let count_with_period = self.count(&format!("{base}."));
            let count_without_period = self.count(&base);

            let num_periods = base.matches('.').count() + 1;
            let num_nonperiods = base.chars().count() + 1 - num_periods;

            let ll = dunning_log_likelihood(
                (count_with_period + count_without_period) as f64,
                self.num_period_tokens as f64,
                count_with_period as f64,
                self.num_tokens as f64,
            );

            let f_length = (-(num_nonperiods as f64)).exp();
            let f_periods = num_periods as f64;
            let f_penalty = (num_nonperiods as f64).powi(-(count_without_period as i32));
            let score = ll * f_length * f_periods * f_penalty;

            if score >= ABBREV {
                if self.params.abbrev_types.insert(base.clone()) {
                    debug!("abbreviation {base} (score {score:.2})");
                }
            } else {
                self.params.abbrev_types.remove(&base);
            }
        }
    }

    fn record_ortho_context(&mut self, tokens: &[Token]) {
        #[derive(Clone, Copy)]
        enum Position {
            Initial,
            Internal,
            Unknown,
        }

        let mut position = Position::Initial;
        for tok in tokens {
            if !tok.is_non_word() {
                let flag = match (position, tok.first_upper(), tok.first_lower()) {
                    (Position::Initial, true, _) => Some(OrthoContext::BEG_UC),
                    (Position::Internal, true, _) => Some(OrthoContext::MID_UC),
                    (Position::Unknown, true, _) => Some(OrthoContext::UNK_UC),
                    (Position::Initial, _, true) => Some(OrthoContext::BEG_LC),
                    (Position::Internal, _, true) => Some(OrthoContext::MID_LC),
                    (Position::Unknown, _, true) => Some(OrthoContext::UNK_LC),
                    _ => None,
                };
                if let Some(flag) = flag {
                    self.params
                        .ortho_context
                        .entry(tok.typ_no_period())
                        .or_default()
                        .insert(flag);
                }
            }

            position = if tok.sentbreak {
                Position::Initial
            } else if tok.abbr || tok.ellipsis || tok.is_initial() {
                Position::Unknown
            } else {
                Position::Internal
            };
        }
    }

    fn record_sentence_starters(&mut self, tokens: &[Token]) {
        for (tok, next) in tokens.iter().zip(tokens.iter().skip(1)) {
            if tok.sentbreak {
                self.sentbreak_count += 1;
                if next.first_upper() {
                    *self.starter_counts.entry(next.typ_no_period()).or_default() += 1;
                }
            }
        }
    }

    fn find_sent_starters(&mut self) {
        if self.sentbreak_count == 0 {
            return;
        }
        let n = self.num_tokens as f64;
        let breaks = self.sentbreak_count as f64;

        for (typ, &at_break) in &self.starter_counts {
            if typ == NUMBER {
                continue;
            }
            let typ_count = self.count(typ) + self.count(&format!("{typ}."));
            if typ_count < at_break {
                continue;
            }

            let ll = col_log_likelihood(breaks, typ_count as f64, at_break as f64, n);
            if ll >= SENT_STARTER && n / breaks > typ_count as f64 / at_break as f64 {
                debug!("sentence starter {typ} (ll {ll:.2})");
                self.params.sent_starters.insert(typ.clone());
            }
        }
    }
}

/// `count * ln(p)`, being 0 when `count` is.
fn xlogp(count: f64, p: f64) -> f64 {
    if count == 0.0 {
        0.0
    } else {
        count * p.ln()
    }
}

/// Modified Dunning log-likelihood, where the alternative hypothesis is
/// that the type nearly always (p = 0.99) occurs with a final period.
fn dunning_log_likelihood(count_a: f64, count_b: f64, count_ab: f64, n: f64) -> f64 {
    let p1 = count_b / n;
    let p2 = 0.99;

    let null_hypo = xlogp(count_ab, p1) + xlogp(count_a - count_ab, 1.0 - p1);
    let alt_hypo = xlogp(count_ab, p2) + xlogp(count_a - count_ab, 1.0 - p2);

    -2.0 * (null_hypo - alt_hypo)
}

/// Original Dunning log-likelihood, used for collocation-like statistics.
fn col_log_likelihood(count_a: f64, count_b: f64, count_ab: f64, n: f64) -> f64 {
    let p = count_b / n;
    let p1 = count_ab / count_a;
    let p2 = (count_b - count_ab) / (n - count_a);

    let summand1 = xlogp(count_ab, p) + xlogp(count_a - count_ab, 1.0 - p);
    let summand2 = xlogp(count_b - count_ab, p) + xlogp(n - count_a - count_b + count_ab, 1.0 - p);
    let summand3 = xlogp(count_ab, p1) + xlogp(count_a - count_ab, 1.0 - p1);
    let summand4 =
        xlogp(count_b - count_ab, p2) + xlogp(n - count_a - count_b + count_ab, 1.0 - p2);

    -2.0 * (summand1 + summand2 - summand3 - summand4)
}
