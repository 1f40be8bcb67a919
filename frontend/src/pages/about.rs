use yew::prelude::*;

use crate::animation::ObserverConfig;
use crate::components::animated_section::{transition_style, Animation, AnimatedSection};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::Card;
use crate::components::responsive_container::ResponsiveContainer;
use crate::content;
use crate::hooks::use_in_view;
use crate::Route;

const VALUES: [(&str, &str, &str); 5] = [
    (
        "❤",
        "Patient-Centered Innovation",
        "Every solution we create puts patients, caregivers, and clinicians at the center",
    ),
    (
        "✓",
        "Evidence-Based Development",
        "Rigorous clinical validation and adherence to healthcare standards guide our work",
    ),
    (
        "⚖",
        "Ethical AI Leadership",
        "The Seven Pillars framework ensures responsible AI in everything we build",
    ),
    (
        "↗",
        "Healthcare Transformation",
        "We tackle systemic gaps with innovative, scalable solutions",
    ),
    (
        "◎",
        "Global Impact",
        "Our vision extends beyond borders to improve lives worldwide",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    let founders = use_memo(|_| content::founders(), ());

    // One observer per list, so the whole row staggers in together.
    let founders_ref = use_node_ref();
    let founders_visible = use_in_view(founders_ref.clone(), ObserverConfig::default());
    let values_ref = use_node_ref();
    let values_visible = use_in_view(values_ref.clone(), ObserverConfig::default());

    html! {
        <div class="about-page">
            <section class="about-hero">
                <ResponsiveContainer>
                    <AnimatedSection animation={Animation::FadeIn} class="section-header">
                        <h1>{"About "}<span class="gradient-text">{"BEBA AI"}</span></h1>
                        <p class="lead on-dark">{"Responsible AI for Healthcare. Innovation with Integrity."}</p>
                    </AnimatedSection>
                </ResponsiveContainer>
            </section>

            <section class="section bg-white">
                <ResponsiveContainer class="story">
                    <AnimatedSection animation={Animation::SlideUp} duration={0.8}>
                        <h2 class="section-title">{"Our Story"}</h2>
                        <p>
                            {"Founded at the intersection of clinical expertise, technological innovation, and ethical leadership, BEBA AI was born from a simple conviction: artificial intelligence in healthcare must be as human as it is intelligent."}
                        </p>
                        <p>
                            {"Our journey began with a question: "}
                            <strong>{"How do we bridge the massive gap in dementia care while ensuring AI serves patients, caregivers, and clinicians with transparency, fairness, and compassion?"}</strong>
                        </p>
                        <p class="story-answer gradient-text">{"The answer became our mission."}</p>
                        <p>
                            {"Today, BEBA AI develops solutions that don't just solve problems, they transform lives. From bridging the £42.5 billion dementia care gap to establishing the Seven Pillars framework for responsible AI, we're building a future where technology serves humanity with integrity and purpose."}
                        </p>
                    </AnimatedSection>
                </ResponsiveContainer>
            </section>

            <section class="section bg-gray">
                <ResponsiveContainer>
                    <div class="section-header">
                        <h2>{"Meet Our "}<span class="gradient-text">{"Founders"}</span></h2>
                        <p class="lead">
                            {"Visionary leaders combining clinical expertise, technological innovation, and ethical guidance"}
                        </p>
                    </div>
                    <div ref={founders_ref} class="founders">
                        { for founders.iter().enumerate().map(|(index, founder)| html! {
                            <div
                                key={index}
                                class={classes!(
                                    "founder",
                                    (index % 2 == 1).then_some("reverse"),
                                    "reveal",
                                    "reveal-slide-up",
                                    founders_visible.then_some("visible")
                                )}
                                style={transition_style(0.8, index as f64 * 0.2)}
                            >
                                <div class="founder-avatar">
                                    <span>{founder.name.chars().next().unwrap_or('B')}</span>
                                </div>
                                <div class="founder-info">
                                    <h3>{&founder.name}</h3>
                                    <p class="founder-role">{&founder.role}</p>
                                    <p class="founder-title muted">{&founder.title}</p>
                                    <p>{&founder.bio}</p>
                                    <blockquote class="founder-vision">{&founder.vision}</blockquote>
                                </div>
                            </div>
                        }) }
                    </div>
                </ResponsiveContainer>
            </section>

            <section class="section bg-white">
                <ResponsiveContainer>
                    <div class="section-header">
                        <h2>{"Our "}<span class="gradient-text">{"Values"}</span></h2>
                        <p class="lead">
                            {"The principles that guide every decision we make and every solution we create"}
                        </p>
                    </div>
                    <div ref={values_ref} class="grid grid-3">
                        { for VALUES.iter().enumerate().map(|(index, (icon, title, description))| html! {
                            <div
                                key={index}
                                class={classes!("value", "reveal", "reveal-slide-up", values_visible.then_some("visible"))}
                                style={transition_style(0.6, index as f64 * 0.1)}
                            >
                                <Card hover=true>
                                    <div class="value-icon">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p class="muted">{*description}</p>
                                </Card>
                            </div>
                        }) }
                    </div>
                </ResponsiveContainer>
            </section>

            <section class="section bg-gradient">
                <ResponsiveContainer>
                    <AnimatedSection animation={Animation::ZoomIn} class="section-header on-dark">
                        <h2>{"Join Us in Transforming Healthcare"}</h2>
                        <p class="lead on-dark">
                            {"Partner with BEBA AI to bring ethical, evidence-based AI to the people who need it most."}
                        </p>
                        <div class="cta-row">
                            <Button to={Route::Products} size={ButtonSize::Lg} variant={ButtonVariant::Secondary} class="btn-light">
                                {"Explore Our Products"}
                            </Button>
                            <Button to={Route::Pillars} size={ButtonSize::Lg} variant={ButtonVariant::Outline} class="on-dark">
                                {"Our Seven Pillars"}
                            </Button>
                        </div>
                    </AnimatedSection>
                </ResponsiveContainer>
            </section>

            <style>
                {r#"
                .about-hero {
                    background: linear-gradient(135deg, var(--beba-purple), var(--beba-purple-light), var(--beba-purple));
                    color: #fff;
                    padding: 5rem 0 4rem;
                }
                .about-hero h1 { font-family: var(--font-display); font-size: clamp(2.25rem, 5vw, 3.75rem); }
                .story { max-width: 48rem; }
                .story p { font-size: 1.125rem; line-height: 1.75; color: #374151; margin-bottom: 1.25rem; }
                .story-answer { font-size: 1.5rem !important; font-weight: 700; }
                .founders { display: flex; flex-direction: column; gap: 4rem; }
                .founder { display: flex; flex-direction: column; gap: 2rem; align-items: center; }
                @media (min-width: 1024px) {
                    .founder { flex-direction: row; gap: 3rem; }
                    .founder.reverse { flex-direction: row-reverse; }
                }
                .founder-avatar {
                    flex-shrink: 0;
                    width: 12rem;
                    height: 12rem;
                    border-radius: 50%;
                    background: var(--gradient-beba);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-family: var(--font-display);
                    font-size: 4rem;
                    font-weight: 700;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                }
                .founder-info h3 { font-family: var(--font-display); font-size: 1.875rem; }
                .founder-role { font-weight: 600; color: var(--beba-pink); }
                .founder-vision {
                    margin: 1rem 0 0;
                    padding-left: 1rem;
                    border-left: 4px solid var(--beba-blue);
                    font-style: italic;
                    color: #4b5563;
                }
                .value-icon { font-size: 2rem; margin-bottom: 0.75rem; color: var(--beba-pink); }
                .cta-row { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
                "#}
            </style>
        </div>
    }
}
