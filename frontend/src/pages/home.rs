use log::error;
use yew::prelude::*;

use crate::animation::{CountUpConfig, ObserverConfig};
use crate::components::animated_section::{transition_style, Animation, AnimatedSection};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::{Card, CardPadding, CardVariant};
use crate::components::pillars_preview::{stagger_delay, PillarsPreview};
use crate::components::responsive_container::ResponsiveContainer;
use crate::config;
use crate::content::{self, StatItem};
use crate::hooks::{use_count_up, use_in_view, use_is_mobile};
use crate::Route;

/// The stats grid waits until this much of it is on screen.
const STATS_THRESHOLD: f64 = 0.3;

const VALUES: [(&str, &str); 4] = [
    ("Human-Centered", "Technology that serves humanity with compassion and understanding."),
    ("Ethical Foundation", "Transparency, fairness, and accountability in every decision."),
    ("Inclusive Design", "Solutions accessible to all, regardless of language or culture."),
    ("Innovation Impact", "Cutting-edge AI that creates real, measurable improvements."),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <Hero />
            <Stats />
            <Mission />
            <FeaturedProduct />
            <PillarsPreview />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <ResponsiveContainer class="hero-grid">
                <div class="hero-copy">
                    <div class="hero-badge">{"✦ Healthcare AI with Integrity"}</div>
                    <h1>
                        {"Responsible AI for "}
                        <span class="gradient-text">{"Healthcare"}</span>
                        {". "}
                        <span class="hero-line">
                            {"Innovation with "}
                            <span class="gradient-text">{"Integrity"}</span>
                        </span>
                    </h1>
                    <p class="hero-lead">
                        {"Transforming dementia care through ethical AI solutions that empower patients, support caregivers, and revolutionize healthcare delivery."}
                    </p>
                    <div class="hero-actions">
                        <Button to={Route::PlatformDemo} size={ButtonSize::Lg} trailing_arrow=true>
                            {"Explore Platform"}
                        </Button>
                        <Button to={Route::Pillars} variant={ButtonVariant::Outline} size={ButtonSize::Lg} class="on-dark">
                            {"Our Seven Pillars"}
                        </Button>
                    </div>
                    <div class="hero-trust">
                        <span class="trust-item">{"NHS Compliant"}</span>
                        <span class="trust-item">{"MHRA Registered"}</span>
                        <span class="trust-item">{"ISO 27001"}</span>
                    </div>
                </div>
                <div class="hero-visual desktop-only">
                    <Card variant={CardVariant::Glass} padding={CardPadding::None} class="hero-card">
                        <div class="hero-orb"></div>
                    </Card>
                </div>
            </ResponsiveContainer>
            <style>
                {r#"
                .hero {
                    background: linear-gradient(135deg, var(--beba-purple), var(--beba-purple-light), var(--beba-purple));
                    color: #fff;
                    padding: 5rem 0;
                    overflow: hidden;
                }
                .hero-grid {
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }
                @media (min-width: 1024px) {
                    .hero-grid { grid-template-columns: 1fr 1fr; }
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    color: var(--beba-cyan);
                    font-size: 0.875rem;
                    margin-bottom: 1.5rem;
                }
                .hero h1 {
                    font-family: var(--font-display);
                    font-size: clamp(2.25rem, 5vw, 4.5rem);
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                    animation: fadeIn 0.6s ease-out both;
                }
                .hero-line { display: block; margin-top: 0.5rem; }
                .hero-lead { font-size: 1.2rem; color: #e5e7eb; line-height: 1.7; }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin: 2rem 0;
                }
                .hero-trust { display: flex; flex-wrap: wrap; gap: 1.5rem; font-size: 0.875rem; color: #d1d5db; }
                .trust-item::before {
                    content: "";
                    display: inline-block;
                    width: 0.5rem;
                    height: 0.5rem;
                    margin-right: 0.5rem;
                    border-radius: 50%;
                    background: #4ade80;
                    animation: loadingBlink 2s infinite;
                }
                .hero-visual { display: flex; justify-content: center; }
                .hero-card { padding: 3rem; border-radius: 50%; }
                .hero-orb {
                    width: 18rem;
                    height: 18rem;
                    border-radius: 50%;
                    background: var(--gradient-beba);
                    opacity: 0.6;
                    filter: blur(2px);
                    animation: heroFloat 6s ease-in-out infinite;
                }
                @keyframes heroFloat {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-20px); }
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(Stats)]
fn stats() -> Html {
    let node = use_node_ref();
    let observer_config = ObserverConfig::with_threshold(STATS_THRESHOLD).unwrap_or_default();
    let in_view = use_in_view(node.clone(), observer_config);
    let is_mobile = use_is_mobile();
    let stats = use_memo(|_| content::stats(), ());
    let replay = use_state(|| 0u32);

    let on_replay = {
        let replay = replay.clone();
        Callback::from(move |_: MouseEvent| replay.set(*replay + 1))
    };

    html! {
        <section ref={node} class="section bg-gray">
            <ResponsiveContainer>
                <div
                    class={classes!("section-header", "reveal", "reveal-slide-up", in_view.then_some("visible"))}
                    style={transition_style(0.6, 0.0)}
                >
                    <h2>
                        {"The "}
                        <span class="gradient-text">{"£42.5 Billion"}</span>
                        {" Opportunity"}
                    </h2>
                    <p class="lead">
                        {"Addressing critical gaps in dementia care with AI-powered solutions that transform patient outcomes and caregiver support."}
                    </p>
                </div>

                <div class="grid grid-4">
                    { for stats.iter().enumerate().map(|(index, stat)| {
                        let delay = stagger_delay(index, is_mobile);
                        match stat.count_up(config::count_up_duration_ms()) {
                            Ok(count_up) => html! {
                                <StatCard key={index} stat={stat.clone()} count_up={count_up} in_view={in_view} delay={delay} replay={*replay} />
                            },
                            Err(e) => {
                                error!("Stat {:?} can't count up: {}", stat.label, e);
                                html! {
                                    <StatCardFrame key={index} stat={stat.clone()} display={stat.format.format(stat.value)} in_view={in_view} delay={delay} counting={false} />
                                }
                            }
                        }
                    }) }
                </div>

                <div
                    class={classes!("stats-cta", "reveal", "reveal-slide-up", in_view.then_some("visible"))}
                    style={transition_style(0.6, 0.5)}
                >
                    <p class="muted">
                        {"37% of newly diagnosed patients receive zero support. "}
                        <strong class="text-blue">{"We're changing that."}</strong>
                    </p>
                    <Button to={Route::PlatformDemo} variant={ButtonVariant::Ghost} trailing_arrow=true>
                        {"Learn how our platform bridges the care gap"}
                    </Button>
                    <Button variant={ButtonVariant::Ghost} size={ButtonSize::Sm} onclick={on_replay} class="stats-replay">
                        {"↻ Replay"}
                    </Button>
                </div>
            </ResponsiveContainer>
            <style>
                {r#"
                .stat-card {
                    position: relative;
                    background: #fff;
                    border-radius: 0.75rem;
                    padding: 2rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition-property: opacity, transform, box-shadow;
                }
                .stat-card:hover { box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15); }
                .stat-value {
                    font-family: var(--font-display);
                    font-size: clamp(2.25rem, 4vw, 3rem);
                    font-weight: 700;
                    font-variant-numeric: tabular-nums;
                    margin-bottom: 0.75rem;
                }
                .stat-label { font-size: 1.125rem; font-weight: 600; color: #1f2937; margin: 0 0 0.5rem; }
                .stat-dot {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: var(--gradient-beba);
                    opacity: 0.2;
                    animation: loadingPulse 2s infinite;
                }
                .stats-cta { text-align: center; margin-top: 3rem; }
                .stats-replay { display: block; margin: 0.5rem auto 0; color: #6b7280; }
                .stat-card.counting .stat-dot { opacity: 0.5; }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    stat: StatItem,
    count_up: CountUpConfig,
    in_view: bool,
    delay: f64,
    /// Bumped to run the count again.
    replay: u32,
}

/// One headline number that counts up once the stats grid is on screen.
#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    let count = use_count_up(props.count_up, props.in_view);

    {
        let count = count.clone();
        use_effect_with_deps(
            move |replay: &u32| {
                if *replay > 0 && (count.is_completed() || count.is_running()) {
                    count.reset();
                }
                || ()
            },
            props.replay,
        );
    }

    html! {
        <StatCardFrame
            stat={props.stat.clone()}
            display={props.stat.format.format(count.value())}
            in_view={props.in_view}
            delay={props.delay}
            counting={count.is_running()}
        />
    }
}

#[derive(Properties, PartialEq)]
struct StatCardFrameProps {
    stat: StatItem,
    display: String,
    in_view: bool,
    delay: f64,
    counting: bool,
}

#[function_component(StatCardFrame)]
fn stat_card_frame(props: &StatCardFrameProps) -> Html {
    html! {
        <div
            class={classes!(
                "stat-card",
                "reveal",
                "reveal-slide-up",
                props.in_view.then_some("visible"),
                props.counting.then_some("counting")
            )}
            style={transition_style(0.6, props.delay)}
        >
            <div class="stat-value gradient-text">{&props.display}</div>
            <h3 class="stat-label">{&props.stat.label}</h3>
            <p class="muted small">{&props.stat.description}</p>
            <div class="stat-dot" style={format!("animation-delay: {:.1}s;", props.delay)}></div>
        </div>
    }
}

#[function_component(Mission)]
fn mission() -> Html {
    html! {
        <section class="section bg-white">
            <ResponsiveContainer>
                <AnimatedSection animation={Animation::FadeIn} class="section-header">
                    <h2>{"Our "}<span class="gradient-text">{"Mission"}</span></h2>
                    <blockquote class="mission-quote">
                        <p>
                            {"\"At BEBA AI, we believe artificial intelligence must serve humanity with transparency, fairness, and accountability. Our healthcare solutions combine cutting-edge technology with unwavering ethical standards to improve lives, empower caregivers, and transform patient outcomes.\""}
                        </p>
                        <footer>{"— "}<span class="gradient-text">{"The BEBA AI Promise"}</span></footer>
                    </blockquote>
                </AnimatedSection>

                <div class="grid grid-4">
                    { for VALUES.iter().enumerate().map(|(index, (title, description))| html! {
                        <Card key={index} delay={index as f64 * 0.1} class="value-card">
                            <h3>{*title}</h3>
                            <p class="muted small">{*description}</p>
                        </Card>
                    }) }
                </div>

                <AnimatedSection animation={Animation::SlideUp} delay={0.5} class="purpose">
                    <div class="purpose-panel">
                        <h3>{"Technology with Purpose"}</h3>
                        <p>
                            {"We're not just building AI systems — we're creating the infrastructure for a more equitable, accessible, and compassionate healthcare future. Every line of code, every algorithm, every decision is guided by our commitment to responsible innovation."}
                        </p>
                    </div>
                </AnimatedSection>
            </ResponsiveContainer>
            <style>
                {r#"
                .mission-quote { max-width: 56rem; margin: 0 auto; }
                .mission-quote p { font-size: 1.35rem; font-style: italic; color: #374151; line-height: 1.7; }
                .value-card { border: 1px solid #f3f4f6; height: 100%; }
                .purpose { margin-top: 4rem; }
                .purpose-panel {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 3rem;
                    border-radius: 1rem;
                    color: #fff;
                    text-align: center;
                    background: linear-gradient(90deg, var(--beba-purple), var(--beba-purple-light));
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(FeaturedProduct)]
fn featured_product() -> Html {
    let products = use_memo(|_| content::products(), ());
    let Some(clarity) = products.iter().find(|p| p.id == "clarity") else {
        return html! {};
    };

    html! {
        <section class="section bg-gray">
            <ResponsiveContainer>
                <AnimatedSection animation={Animation::SlideRight} class="featured">
                    <span class="eyebrow">{"Featured Product"}</span>
                    <h2>
                        <span class="gradient-text">{&clarity.name}</span>
                        {" — "}
                        {&clarity.tagline}
                    </h2>
                    <p class="lead">{&clarity.description}</p>
                    <ul class="check-list">
                        { for clarity.features.iter().take(4).map(|feature| html! {
                            <li>{feature}</li>
                        }) }
                    </ul>
                    <Button to={Route::Products} trailing_arrow=true>{"Discover CLARITY"}</Button>
                </AnimatedSection>
            </ResponsiveContainer>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_threshold_is_valid() {
        assert!(ObserverConfig::with_threshold(STATS_THRESHOLD).is_ok());
    }

    #[test]
    fn every_bundled_stat_can_count_up() {
        for stat in content::stats() {
            let count_up: CountUpConfig = stat.count_up(config::count_up_duration_ms()).unwrap();
            assert_eq!(count_up.target(), stat.value);
        }
    }
}
