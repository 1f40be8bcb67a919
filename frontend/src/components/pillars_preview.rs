use yew::prelude::*;

use crate::components::animated_section::{Animation, AnimatedSection};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::{Card, CardVariant};
use crate::components::responsive_container::ResponsiveContainer;
use crate::content;
use crate::hooks::use_is_mobile;
use crate::Route;

/// Per-card reveal delay on desktop. Mobile reveals cards as they arrive.
pub fn stagger_delay(index: usize, is_mobile: bool) -> f64 {
    if is_mobile {
        0.0
    } else {
        index as f64 * 0.1
    }
}

#[function_component(PillarsPreview)]
pub fn pillars_preview() -> Html {
    let is_mobile = use_is_mobile();
    let pillars = use_memo(|_| content::pillars(), ());

    html! {
        <section class="section bg-white">
            <ResponsiveContainer>
                <AnimatedSection animation={Animation::FadeIn} class="section-header">
                    <h2>
                        {"The Seven Pillars of "}
                        <span class="gradient-text">{"Ethical AI"}</span>
                    </h2>
                    <p class="lead">
                        {"Ethics is our architecture — each pillar strengthens the whole, creating an unshakeable foundation for AI that serves humanity."}
                    </p>
                </AnimatedSection>

                <div class="grid grid-4">
                    { for pillars.iter().enumerate().map(|(index, pillar)| html! {
                        <Card key={pillar.id} hover=true delay={stagger_delay(index, is_mobile)} class="pillar-card">
                            <div class="pillar-number">{pillar.id}</div>
                            <h3>{&pillar.name}</h3>
                            <p class="pillar-subtitle">{&pillar.subtitle}</p>
                            <p class="muted">{&pillar.summary}</p>
                        </Card>
                    }) }
                    <Card variant={CardVariant::Gradient} hover=true delay={stagger_delay(pillars.len(), is_mobile)} class="pillar-cta">
                        <h3>{"Explore All Pillars"}</h3>
                        <p>{"Discover how we apply these principles in every product"}</p>
                        <Button to={Route::Pillars} variant={ButtonVariant::Outline} size={ButtonSize::Sm} trailing_arrow=true class="on-dark">
                            {"Learn More"}
                        </Button>
                    </Card>
                </div>
            </ResponsiveContainer>
            <style>
                {r#"
                .pillar-card { position: relative; height: 100%; }
                .pillar-number {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    font-family: var(--font-display);
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #f3f4f6;
                }
                .pillar-subtitle {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #6b7280;
                }
                .pillar-cta {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_staggers_by_index() {
        assert_eq!(stagger_delay(0, false), 0.0);
        assert!((stagger_delay(3, false) - 0.3).abs() < 1e-9);
        assert_eq!(stagger_delay(3, true), 0.0);
    }
}
