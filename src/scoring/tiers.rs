use crate::types::scoring::Classification;

/// One row of the threshold table: percentages at or above `lower_bound`
/// (and below the previous row's bound) fall into this band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub lower_bound: f64,
    pub classification: Classification,
    /// Chart fill color.
    pub color: &'static str,
    pub badge: &'static str,
    pub progress: &'static str,
}

/// Ordered high to low; the first band whose lower bound is met wins.
pub const BANDS: [Band; 4] = [
    Band {
        lower_bound: 80.0,
        classification: Classification::Strong,
        color: "#10b981",
        badge: "text-emerald-600 bg-emerald-50 border-emerald-200",
        progress: "bg-emerald-500",
    },
    Band {
        lower_bound: 60.0,
        classification: Classification::Viable,
        color: "#f59e0b",
        badge: "text-amber-600 bg-amber-50 border-amber-200",
        progress: "bg-amber-500",
    },
    Band {
        lower_bound: 40.0,
        classification: Classification::Weak,
        color: "#f97316",
        badge: "text-orange-600 bg-orange-50 border-orange-200",
        progress: "bg-orange-500",
    },
    Band {
        lower_bound: f64::NEG_INFINITY,
        classification: Classification::Inadequate,
        color: "#ef4444",
        badge: "text-red-600 bg-red-50 border-red-200",
        progress: "bg-red-500",
    },
];

pub fn band_for(percentage: f64) -> &'static Band {
    BANDS
        .iter()
        .find(|band| percentage >= band.lower_bound)
        .unwrap_or(&BANDS[BANDS.len() - 1])
}

pub fn badge_color(percentage: f64) -> &'static str {
    band_for(percentage).badge
}

pub fn progress_color(percentage: f64) -> &'static str {
    band_for(percentage).progress
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(percentage: f64) -> Classification {
        band_for(percentage).classification
    }

    #[test]
    fn lower_bounds_are_inclusive() {
        assert_eq!(classify(100.0), Classification::Strong);
        assert_eq!(classify(80.0), Classification::Strong);
        assert_eq!(classify(79.999), Classification::Viable);
        assert_eq!(classify(60.0), Classification::Viable);
        assert_eq!(classify(40.0), Classification::Weak);
        assert_eq!(classify(39.999), Classification::Inadequate);
        assert_eq!(classify(0.0), Classification::Inadequate);
    }

    #[test]
    fn out_of_range_percentages_are_not_clamped() {
        assert_eq!(classify(120.0), Classification::Strong);
        assert_eq!(classify(-5.0), Classification::Inadequate);
    }

    #[test]
    fn nan_falls_into_lowest_band() {
        assert_eq!(classify(f64::NAN), Classification::Inadequate);
        assert_eq!(progress_color(f64::NAN), "bg-red-500");
    }

    #[test]
    fn color_tokens_agree_with_classification() {
        let samples = [
            -1.0, 0.0, 20.0, 39.999, 40.0, 50.0, 59.999, 60.0, 70.0, 79.999, 80.0, 90.0, 100.0,
        ];
        for percentage in samples {
            let tier = classify(percentage);
            let expected = BANDS
                .iter()
                .find(|band| band.classification == tier)
                .expect("every classification has a band");
            assert_eq!(badge_color(percentage), expected.badge, "at {percentage}");
            assert_eq!(progress_color(percentage), expected.progress, "at {percentage}");
        }
        assert_eq!(badge_color(80.0), "text-emerald-600 bg-emerald-50 border-emerald-200");
        assert_eq!(progress_color(60.0), "bg-amber-500");
        assert_eq!(badge_color(40.0), "text-orange-600 bg-orange-50 border-orange-200");
        assert_eq!(progress_color(39.999), "bg-red-500");
    }

    #[test]
    fn bands_are_ordered_high_to_low() {
        assert!(BANDS
            .windows(2)
            .all(|pair| pair[0].lower_bound > pair[1].lower_bound));
    }
}
