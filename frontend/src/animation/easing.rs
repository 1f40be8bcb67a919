use serde::Deserialize;

/// Progress curves for the count-up animation.
///
/// Every variant maps `[0, 1]` onto `[0, 1]`, is non-decreasing and hits both
/// endpoints exactly, so an interpolated value never overshoots its target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseOutQuad,
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        // NaN progress is treated as "not started".
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseOutQuad,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?}", easing);
        }
    }

    #[test]
    fn curves_never_decrease_or_leave_unit_range() {
        for easing in ALL {
            let mut previous = 0.0;
            for step in 0..=1000 {
                let value = easing.apply(step as f64 / 1000.0);
                assert!(value >= previous, "{:?} decreased at step {}", easing, step);
                assert!((0.0..=1.0).contains(&value));
                previous = value;
            }
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Easing::EaseOutCubic.apply(-3.0), 0.0);
        assert_eq!(Easing::EaseOutCubic.apply(7.5), 1.0);
        assert_eq!(Easing::EaseOutCubic.apply(f64::NAN), 0.0);
    }

    #[test]
    fn ease_out_cubic_front_loads_progress() {
        assert_eq!(Easing::EaseOutCubic.apply(0.5), 0.875);
    }

    #[test]
    fn names_read_from_content() {
        let parsed: Vec<Easing> =
            serde_json::from_str(r#"["linear", "ease-out-quad", "ease-out-cubic", "ease-in-out-cubic"]"#).unwrap();
        assert_eq!(parsed, ALL.to_vec());
    }
}
