//! Gap-weighted score normalization.
//!
//! ```text
//! score_i = weight_i * max(goal_i - current_i, 0)
//! share_i = score_i / sum(score)
//! ```
//!
//! If every score is zero the weights alone are used; if that still sums to
//! zero every subject gets `1 / n`.

use serde::{Deserialize, Serialize};

use crate::profile::SubjectProfile;

/// Which scores produced the shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBasis {
    /// `weight * gap`
    GapWeighted,
    /// Every gap was zero, `weight` alone
    WeightOnly,
    /// Degenerate input, equal split
    Equal,
}

/// Normalized allocation driver for one subject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedSubject {
    pub gap: u8,
    pub score: f64,
    /// Fraction of the total, 0.0 to 1.0
    pub share: f64,
}

/// Result of normalizing a profile's subjects, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalization {
    pub basis: ScoreBasis,
    pub subjects: Vec<NormalizedSubject>,
}

impl Normalization {
    pub fn shares(&self) -> impl Iterator<Item = f64> + '_ {
        self.subjects.iter().map(|s| s.share)
    }
}

/// Normalize subjects into shares that sum to 1.
pub fn normalize(subjects: &[SubjectProfile]) -> Normalization {
    let gaps: Vec<u8> = subjects.iter().map(SubjectProfile::gap).collect();
    let mut scores: Vec<f64> = subjects
        .iter()
        .zip(&gaps)
        .map(|(s, &gap)| s.weight * f64::from(gap))
        .collect();
    let mut basis = ScoreBasis::GapWeighted;

    if scores.iter().all(|&s| s == 0.0) {
        tracing::debug!("every subject has reached its goal, allocating by weight");
        scores = subjects.iter().map(|s| s.weight).collect();
        basis = ScoreBasis::WeightOnly;
    }

    let total: f64 = scores.iter().sum();
    let shares: Vec<f64> = if total > 0.0 && total.is_finite() {
        scores.iter().map(|s| s / total).collect()
    } else {
        tracing::debug!(total, "score total is degenerate, splitting equally");
        basis = ScoreBasis::Equal;
        let n = subjects.len().max(1) as f64;
        vec![1.0 / n; subjects.len()]
    };

    Normalization {
        basis,
        subjects: gaps
            .into_iter()
            .zip(scores)
            .zip(shares)
            .map(|((gap, score), share)| NormalizedSubject { gap, score, share })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(weight: f64, current: u8, goal: u8) -> SubjectProfile {
        SubjectProfile {
            subject: "s".to_string(),
            weight,
            current_level: current,
            goal_level: goal,
            position: 0,
        }
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{a} != {b}");
    }

    #[test]
    fn shares_follow_weight_times_gap() {
        let n = normalize(&[subject(2.0, 3, 8), subject(1.0, 5, 6)]);
        assert_eq!(n.basis, ScoreBasis::GapWeighted);
        assert_eq!(n.subjects[0].gap, 5);
        assert_eq!(n.subjects[0].score, 10.0);
        assert_eq!(n.subjects[1].score, 1.0);
        assert_close(n.subjects[0].share, 10.0 / 11.0);
        assert_close(n.subjects[1].share, 1.0 / 11.0);
    }

    #[test]
    fn zero_gap_subject_gets_nothing_while_others_have_gaps() {
        let n = normalize(&[subject(5.0, 7, 7), subject(1.0, 2, 4)]);
        assert_eq!(n.basis, ScoreBasis::GapWeighted);
        assert_eq!(n.subjects[0].share, 0.0);
        assert_eq!(n.subjects[1].share, 1.0);
    }

    #[test]
    fn negative_gap_counts_as_zero() {
        let n = normalize(&[subject(1.0, 9, 3), subject(1.0, 0, 2)]);
        assert_eq!(n.subjects[0].gap, 0);
        assert_eq!(n.subjects[1].share, 1.0);
    }

    #[test]
    fn all_goals_reached_falls_back_to_weights() {
        let n = normalize(&[subject(3.0, 8, 8), subject(1.0, 10, 5)]);
        assert_eq!(n.basis, ScoreBasis::WeightOnly);
        assert_close(n.subjects[0].share, 0.75);
        assert_close(n.subjects[1].share, 0.25);
        assert!(n.subjects.iter().all(|s| s.gap == 0));
    }

    #[test]
    fn zero_weights_fall_back_to_equal_split() {
        let n = normalize(&[subject(0.0, 0, 5), subject(0.0, 0, 5), subject(0.0, 1, 1)]);
        assert_eq!(n.basis, ScoreBasis::Equal);
        for s in &n.subjects {
            assert_close(s.share, 1.0 / 3.0);
        }
    }

    #[test]
    fn shares_sum_to_one() {
        let n = normalize(&[subject(0.7, 1, 9), subject(2.3, 4, 6), subject(9.9, 0, 1)]);
        assert_close(n.shares().sum(), 1.0);
    }

    #[test]
    fn empty_input_yields_empty_normalization() {
        let n = normalize(&[]);
        assert!(n.subjects.is_empty());
    }
}
