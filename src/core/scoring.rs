use crate::models::ScoringWeights;

/// Round a raw score and clamp it into `0..=cap` (never above 100)
///
/// Non-finite input maps to 0.
#[inline]
pub fn clamp_score(raw: f64, cap: u8) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    let cap = cap.min(100) as f64;
    raw.round().clamp(0.0, cap) as u8
}

/// Blend the four sub-scores into the overall TalentFit score (0-100)
///
/// Scoring formula:
/// overall = (
///     skills_match * w.skills +
///     experience_match * w.experience +
///     team_fit * w.team_fit +
///     work_style_alignment * w.work_style
/// ) / (sum of weights)
///
/// Negative weights count as zero. With no positive weight the sub-scores
/// are averaged.
pub fn calculate_overall_score(
    skills_match: u8,
    experience_match: u8,
    team_fit: u8,
    work_style_alignment: u8,
    weights: &ScoringWeights,
) -> u8 {
    let parts = [
        (skills_match as f64, weights.skills),
        (experience_match as f64, weights.experience),
        (team_fit as f64, weights.team_fit),
        (work_style_alignment as f64, weights.work_style),
    ];

    let weight_sum: f64 = parts.iter().map(|(_, w)| w.max(0.0)).sum();
    if weight_sum <= 0.0 || !weight_sum.is_finite() {
        let mean = parts.iter().map(|(s, _)| s).sum::<f64>() / parts.len() as f64;
        return clamp_score(mean, 100);
    }

    let total: f64 = parts.iter().map(|(s, w)| s * w.max(0.0)).sum();
    clamp_score(total / weight_sum, 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(83.33, 95), 83);
        assert_eq!(clamp_score(120.0, 95), 95);
        assert_eq!(clamp_score(-3.0, 100), 0);
        assert_eq!(clamp_score(f64::NAN, 100), 0);
        assert_eq!(clamp_score(250.0, 200), 100);
    }

    #[test]
    fn test_default_weights_blend() {
        let weights = ScoringWeights::default();
        // 0.4*80 + 0.3*60 + 0.2*90 + 0.1*70 = 75
        let overall = calculate_overall_score(80, 60, 90, 70, &weights);
        assert_eq!(overall, 75);
    }

    #[test]
    fn test_uniform_scores_blend_to_same_value() {
        let weights = ScoringWeights::default();
        assert_eq!(calculate_overall_score(64, 64, 64, 64, &weights), 64);
    }

    #[test]
    fn test_zero_weights_fall_back_to_mean() {
        let weights = ScoringWeights {
            skills: 0.0,
            experience: 0.0,
            team_fit: 0.0,
            work_style: 0.0,
        };
        assert_eq!(calculate_overall_score(100, 0, 50, 50, &weights), 50);
    }

    #[test]
    fn test_unnormalized_weights() {
        let weights = ScoringWeights {
            skills: 2.0,
            experience: 2.0,
            team_fit: 0.0,
            work_style: 0.0,
        };
        assert_eq!(calculate_overall_score(90, 70, 0, 0, &weights), 80);
    }
}
