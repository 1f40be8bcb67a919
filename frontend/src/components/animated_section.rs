use yew::prelude::*;

use crate::animation::ObserverConfig;
use crate::hooks::use_in_view;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Animation {
    #[default]
    FadeIn,
    SlideUp,
    SlideLeft,
    SlideRight,
    ZoomIn,
}

impl Animation {
    pub fn class(self) -> &'static str {
        match self {
            Animation::FadeIn => "reveal-fade-in",
            Animation::SlideUp => "reveal-slide-up",
            Animation::SlideLeft => "reveal-slide-left",
            Animation::SlideRight => "reveal-slide-right",
            Animation::ZoomIn => "reveal-zoom-in",
        }
    }

    /// Where the content sits until it is revealed.
    pub fn hidden_transform(self) -> &'static str {
        match self {
            Animation::FadeIn => "none",
            Animation::SlideUp => "translateY(50px)",
            Animation::SlideLeft => "translateX(100px)",
            Animation::SlideRight => "translateX(-100px)",
            Animation::ZoomIn => "scale(0.8)",
        }
    }
}

/// Inline transition timing for a reveal, in seconds.
pub fn transition_style(duration_s: f64, delay_s: f64) -> String {
    format!(
        "transition-duration: {:.2}s; transition-delay: {:.2}s;",
        duration_s.max(0.0),
        delay_s.max(0.0)
    )
}

fn reveal_style(animation: Animation, in_view: bool, duration_s: f64, delay_s: f64) -> String {
    let timing = transition_style(duration_s, delay_s);
    if in_view {
        timing
    } else {
        format!("{} transform: {};", timing, animation.hidden_transform())
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    pub children: Children,
    #[prop_or_default]
    pub animation: Animation,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(0.6)]
    pub duration: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// A `<section>` that animates in the first time it scrolls into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), ObserverConfig::default());

    html! {
        <section
            ref={node}
            class={classes!("reveal", props.animation.class(), in_view.then_some("visible"), props.class.clone())}
            style={reveal_style(props.animation, in_view, props.duration, props.delay)}
        >
            { for props.children.iter() }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_style_clamps_negative_timings() {
        assert_eq!(
            transition_style(0.6, 0.1),
            "transition-duration: 0.60s; transition-delay: 0.10s;"
        );
        assert_eq!(
            transition_style(-1.0, -0.5),
            "transition-duration: 0.00s; transition-delay: 0.00s;"
        );
    }

    #[test]
    fn side_slides_start_a_full_100px_off() {
        assert_eq!(Animation::SlideLeft.hidden_transform(), "translateX(100px)");
        assert_eq!(Animation::SlideRight.hidden_transform(), "translateX(-100px)");
    }

    #[test]
    fn transform_is_dropped_once_visible() {
        let hidden = reveal_style(Animation::SlideLeft, false, 0.6, 0.0);
        assert!(hidden.ends_with("transform: translateX(100px);"));
        assert_eq!(
            reveal_style(Animation::SlideLeft, true, 0.6, 0.0),
            "transition-duration: 0.60s; transition-delay: 0.00s;"
        );
    }
}
