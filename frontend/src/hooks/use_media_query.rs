use yew::prelude::*;
use yew_hooks::prelude::*;

/// Layout breakpoints, by minimum viewport width in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Base,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub fn min_width(self) -> f64 {
        match self {
            Breakpoint::Base => 0.0,
            Breakpoint::Xs => 475.0,
            Breakpoint::Sm => 640.0,
            Breakpoint::Md => 768.0,
            Breakpoint::Lg => 1024.0,
            Breakpoint::Xl => 1280.0,
            Breakpoint::Xxl => 1536.0,
        }
    }

    pub fn from_width(width: f64) -> Self {
        [
            Breakpoint::Xxl,
            Breakpoint::Xl,
            Breakpoint::Lg,
            Breakpoint::Md,
            Breakpoint::Sm,
            Breakpoint::Xs,
        ]
        .into_iter()
        .find(|bp| width >= bp.min_width())
        .unwrap_or(Breakpoint::Base)
    }

    /// Phones and small tablets get the drawer nav and unstaggered cards.
    pub fn is_mobile(self) -> bool {
        self < Breakpoint::Md
    }
}

#[hook]
pub fn use_breakpoint() -> Breakpoint {
    let (width, _height) = use_window_size();
    Breakpoint::from_width(width)
}

#[hook]
pub fn use_is_mobile() -> bool {
    use_breakpoint().is_mobile()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_map_to_the_largest_matching_breakpoint() {
        assert_eq!(Breakpoint::from_width(320.0), Breakpoint::Base);
        assert_eq!(Breakpoint::from_width(475.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::from_width(767.9), Breakpoint::Sm);
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Md);
        assert_eq!(Breakpoint::from_width(1100.0), Breakpoint::Lg);
        assert_eq!(Breakpoint::from_width(1440.0), Breakpoint::Xl);
        assert_eq!(Breakpoint::from_width(2560.0), Breakpoint::Xxl);
    }

    #[test]
    fn mobile_means_below_md() {
        assert!(Breakpoint::from_width(767.0).is_mobile());
        assert!(!Breakpoint::from_width(768.0).is_mobile());
        // Before layout the window reports zero width.
        assert!(Breakpoint::from_width(0.0).is_mobile());
    }
}
