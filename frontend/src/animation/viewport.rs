use log::{debug, warn};

use super::error::{AnimationError, Result};

/// The host side of a viewport observation.
///
/// In the browser this is `IntersectionObserver`; in tests it is a fake that
/// records calls. The host reports intersection ratios back through
/// [`ViewportObserver::on_intersection`].
pub trait VisibilityHost {
    type Target: ?Sized;
    type Handle;

    fn observe(&mut self, target: &Self::Target, config: &ObserverConfig) -> Result<Self::Handle>;
    fn unobserve(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverConfig {
    threshold: f64,
    trigger_once: bool,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            trigger_once: true,
        }
    }
}

impl ObserverConfig {
    pub fn new(threshold: f64, trigger_once: bool) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(AnimationError::InvalidConfiguration(format!(
                "threshold must be within [0, 1], got {}",
                threshold
            )));
        }
        Ok(Self {
            threshold,
            trigger_once,
        })
    }

    /// Same as `default()` with a different threshold. Used for the fixed
    /// thresholds baked into page sections.
    pub fn with_threshold(threshold: f64) -> Result<Self> {
        Self::new(threshold, true)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn trigger_once(&self) -> bool {
        self.trigger_once
    }
}

enum Registration<H> {
    Active(H),
    Released,
}

/// Tracks whether one element is inside the viewport.
pub struct ViewportObserver<V: VisibilityHost> {
    config: ObserverConfig,
    in_view: bool,
    registration: Registration<V::Handle>,
}

impl<V: VisibilityHost> ViewportObserver<V> {
    /// Starts watching `target`. The signal starts out `false` even if the
    /// element is already on screen; the host's first callback settles it.
    ///
    /// If the host can't observe anything the observer falls back to
    /// reporting `true` right away so revealed content is never stuck hidden.
    pub fn register(config: ObserverConfig, host: &mut V, target: &V::Target) -> Self {
        match host.observe(target, &config) {
            Ok(handle) => {
                debug!("Observing element at threshold {}", config.threshold);
                Self {
                    config,
                    in_view: false,
                    registration: Registration::Active(handle),
                }
            }
            Err(e) => {
                warn!("{}; revealing content immediately", e);
                Self {
                    config,
                    in_view: true,
                    registration: Registration::Released,
                }
            }
        }
    }

    /// Feeds one intersection report. Returns the signal after the update.
    pub fn on_intersection(&mut self, ratio: f64, host: &mut V) -> bool {
        if let Registration::Released = self.registration {
            return self.in_view;
        }

        self.in_view = ratio >= self.config.threshold;

        if self.in_view && self.config.trigger_once {
            self.release(host);
        }
        self.in_view
    }

    /// Releases the host observation. Safe to call any number of times.
    pub fn teardown(&mut self, host: &mut V) {
        self.release(host);
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view
    }

    pub fn is_observing(&self) -> bool {
        matches!(self.registration, Registration::Active(_))
    }

    pub fn config(&self) -> &ObserverConfig {
        &self.config
    }

    fn release(&mut self, host: &mut V) {
        if let Registration::Active(handle) =
            std::mem::replace(&mut self.registration, Registration::Released)
        {
            host.unobserve(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeHost {
        available: bool,
        next_handle: u32,
        observed: Vec<u32>,
        released: Vec<u32>,
    }

    impl FakeHost {
        fn new() -> Self {
            Self {
                available: true,
                ..Default::default()
            }
        }

        fn unavailable() -> Self {
            Self::default()
        }
    }

    impl VisibilityHost for FakeHost {
        type Target = str;
        type Handle = u32;

        fn observe(&mut self, _target: &str, _config: &ObserverConfig) -> Result<u32> {
            if !self.available {
                return Err(AnimationError::EnvironmentUnavailable(
                    "no intersection observer".to_string(),
                ));
            }
            self.next_handle += 1;
            self.observed.push(self.next_handle);
            Ok(self.next_handle)
        }

        fn unobserve(&mut self, handle: u32) {
            self.released.push(handle);
        }
    }

    fn sequence(config: ObserverConfig, ratios: &[f64]) -> Vec<bool> {
        let mut host = FakeHost::new();
        let mut observer = ViewportObserver::register(config, &mut host, "stats");
        ratios
            .iter()
            .map(|ratio| observer.on_intersection(*ratio, &mut host))
            .collect()
    }

    #[test]
    fn defaults_match_reveal_sections() {
        let config = ObserverConfig::default();
        assert_eq!(config.threshold(), 0.1);
        assert!(config.trigger_once());
    }

    #[test]
    fn rejects_thresholds_outside_unit_range() {
        assert!(ObserverConfig::new(-0.1, true).is_err());
        assert!(ObserverConfig::new(1.5, false).is_err());
        assert!(ObserverConfig::new(f64::NAN, true).is_err());
        assert!(ObserverConfig::new(0.0, true).is_ok());
        assert!(ObserverConfig::new(1.0, true).is_ok());
    }

    #[test]
    fn starts_hidden_even_when_already_visible() {
        let mut host = FakeHost::new();
        let mut observer =
            ViewportObserver::register(ObserverConfig::default(), &mut host, "hero");
        assert!(!observer.is_in_view());
        assert!(observer.is_observing());

        assert!(observer.on_intersection(1.0, &mut host));
    }

    #[test]
    fn continuous_tracking_follows_every_crossing() {
        let config = ObserverConfig::new(0.1, false).unwrap();
        assert_eq!(
            sequence(config, &[0.0, 0.5, 0.05, 0.5]),
            vec![false, true, false, true]
        );
    }

    #[test]
    fn trigger_once_latches_and_releases() {
        let mut host = FakeHost::new();
        let mut observer =
            ViewportObserver::register(ObserverConfig::default(), &mut host, "stats");

        assert!(!observer.on_intersection(0.05, &mut host));
        assert!(observer.on_intersection(0.2, &mut host));
        assert!(!observer.is_observing());
        assert_eq!(host.released, vec![1]);

        assert!(observer.on_intersection(0.0, &mut host));
        assert!(observer.is_in_view());
        assert_eq!(host.released, vec![1]);
    }

    #[test]
    fn signal_matches_latest_ratio_across_thresholds() {
        let ratios = [0.0, 0.25, 0.1, 0.9, 0.3, 1.0, 0.0, 0.5];
        for step in 0..=10 {
            let threshold = step as f64 / 10.0;
            let config = ObserverConfig::new(threshold, false).unwrap();
            let observed = sequence(config, &ratios);
            for (ratio, in_view) in ratios.iter().zip(&observed) {
                assert_eq!(*in_view, *ratio >= threshold, "threshold {}", threshold);
            }

            let once = sequence(ObserverConfig::new(threshold, true).unwrap(), &ratios);
            if let Some(first) = once.iter().position(|v| *v) {
                assert!(once[first..].iter().all(|v| *v));
            }
        }
    }

    #[test]
    fn missing_host_reveals_without_callback() {
        let mut host = FakeHost::unavailable();
        let observer =
            ViewportObserver::register(ObserverConfig::default(), &mut host, "stats");
        assert!(observer.is_in_view());
        assert!(!observer.is_observing());
    }

    #[test]
    fn teardown_is_idempotent() {
        let mut host = FakeHost::new();
        let config = ObserverConfig::new(0.3, false).unwrap();
        let mut observer = ViewportObserver::register(config, &mut host, "stats");

        observer.teardown(&mut host);
        observer.teardown(&mut host);
        assert_eq!(host.released, vec![1]);

        // Late callbacks after teardown leave the signal alone.
        assert!(!observer.on_intersection(1.0, &mut host));
    }

    #[test]
    fn teardown_after_trigger_does_not_release_again() {
        let mut host = FakeHost::new();
        let mut observer =
            ViewportObserver::register(ObserverConfig::default(), &mut host, "stats");
        observer.on_intersection(1.0, &mut host);
        observer.teardown(&mut host);
        assert_eq!(host.observed, vec![1]);
        assert_eq!(host.released, vec![1]);
    }
}
