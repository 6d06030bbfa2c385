//! Reading scores out of free-text model replies, and grading them.

use serde::Serialize;

pub const SCORE_KEYWORD: &str = "PUNTUACIÓN";
pub const SUMMARY_KEYWORD: &str = "RESUMEN";
pub const MAX_SCORE: u8 = 10;

/// Score and summary scanned out of one reply.
///
/// Lines lacking the keywords leave the defaults in place, so a reply with
/// no usable markers yields `score = 0` and an empty summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub score: u8,
    pub summary: String,
}

pub fn extract_evaluation(reply: &str) -> Extraction {
    let mut extraction = Extraction::default();

    for line in reply.lines() {
        let upper = line.to_uppercase();
        if upper.contains(SCORE_KEYWORD) {
            if let Some(score) = parse_score(line) {
                extraction.score = clamp_score(score);
            }
        }
        if upper.contains(SUMMARY_KEYWORD) {
            if let Some((_, rest)) = line.split_once(':') {
                extraction.summary = rest.trim().trim_matches('*').trim().to_string();
            }
        }
    }

    extraction
}

/// First integer after the colon and before any `/10` marker.
fn parse_score(line: &str) -> Option<u32> {
    let (_, rest) = line.split_once(':')?;
    let head = rest.find("/10").map_or(rest, |end| &rest[..end]);
    let start = head.find(|c: char| c.is_ascii_digit())?;
    head[start..]
        .split(|c: char| !c.is_ascii_digit())
        .next()?
        .parse()
        .ok()
}

fn clamp_score(score: u32) -> u8 {
    if score > u32::from(MAX_SCORE) {
        tracing::warn!(score, max = MAX_SCORE, "model score out of range, clamping");
        MAX_SCORE
    } else {
        score as u8
    }
}

/// Arithmetic mean rounded to one decimal, ties to even.
pub fn average_score(scores: &[u8]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();
    let mean = f64::from(sum) / scores.len() as f64;
    (mean * 10.0).round_ties_even() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Solid,
    Improvable,
    Critical,
}

impl Rating {
    pub fn from_score(score: u8) -> Self {
        match score {
            7.. => Rating::Solid,
            5..=6 => Rating::Improvable,
            _ => Rating::Critical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::Solid => "Sólida",
            Rating::Improvable => "Mejorable",
            Rating::Critical => "Crítica",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Rating::Solid => "#2e7d32",
            Rating::Improvable => "#f9a825",
            Rating::Critical => "#c62828",
        }
    }
}
