// src/display.rs
//! Pure presentation derivations from a score. Computed at render time,
//! never stored in the submission state.

/// Color band a score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Warn,
    Bad,
}

impl ScoreBand {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreBand::Good => "good",
            ScoreBand::Warn => "warn",
            ScoreBand::Bad => "bad",
        }
    }
}

pub fn score_band(score: f64) -> ScoreBand {
    if score >= 80.0 {
        ScoreBand::Good
    } else if score >= 60.0 {
        ScoreBand::Warn
    } else {
        ScoreBand::Bad
    }
}

pub fn score_label(score: f64) -> &'static str {
    if score >= 80.0 {
        "Excellent"
    } else if score >= 60.0 {
        "Good"
    } else if score >= 40.0 {
        "Fair"
    } else {
        "Needs Improvement"
    }
}

/// Fraction of the progress bar to fill; a zero denominator reads as zero
pub fn progress_fraction(score: f64, out_of: f64) -> f64 {
    if out_of == 0.0 {
        0.0
    } else {
        score / out_of
    }
}
