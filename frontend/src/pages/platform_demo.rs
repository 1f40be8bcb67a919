use yew::prelude::*;

use crate::components::animated_section::{Animation, AnimatedSection};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::{Card, CardPadding};
use crate::components::pillars_preview::stagger_delay;
use crate::components::responsive_container::ResponsiveContainer;
use crate::components::scene_switcher::{SceneSwitcher, SceneTabs};
use crate::config;
use crate::content::{self, DemoScene};
use crate::hooks::use_is_mobile;

const CARE_GAP: [(&str, &str); 6] = [
    ("37%", "receive ZERO support after diagnosis"),
    ("324,000", "patients undiagnosed (34.6% gap)"),
    ("700,000", "caregivers struggling alone"),
    ("£26.8B", "annual family costs"),
    ("90%", "of NHS costs from preventable emergencies"),
    ("7x", "ethnic minority case growth by 2051"),
];

const OPPORTUNITY: [(&str, &str, &str); 4] = [
    ("1.68M", "Users Today", "UK patients + caregivers"),
    ("2.38M", "By 2040", "42% market growth"),
    ("£26.8B", "Family Costs", "63% of total burden"),
    ("Zero", "Competition", "Only integrated solution"),
];

#[function_component(PlatformDemo)]
pub fn platform_demo() -> Html {
    let scenes = use_memo(|_| content::scenes(), ());
    let switcher = {
        let scenes = scenes.clone();
        use_state(move || SceneSwitcher::new(scenes.iter().map(|s| s.id.clone()).collect()))
    };
    let is_mobile = use_is_mobile();
    let mailto = format!("mailto:{}", config::contact_email());

    let on_select = {
        let switcher = switcher.clone();
        Callback::from(move |id: String| {
            if let Some(current) = (*switcher).as_ref() {
                switcher.set(Some(current.select(&id)));
            }
        })
    };

    let step = |forward: bool| {
        let switcher = switcher.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(current) = (*switcher).as_ref() {
                let moved = if forward { current.next() } else { current.previous() };
                switcher.set(Some(moved));
            }
        })
    };
    let on_previous = step(false);
    let on_next = step(true);

    let restart_tour = {
        let switcher = switcher.clone();
        let scenes = scenes.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(first) = scenes.first() {
                if let Some(current) = (*switcher).as_ref() {
                    switcher.set(Some(current.select(&first.id)));
                }
            }
        })
    };

    let tabs: Vec<(String, String)> = scenes
        .iter()
        .map(|scene| (scene.id.clone(), scene.title.clone()))
        .collect();
    let active_scene = (*switcher)
        .as_ref()
        .and_then(|s| scenes.iter().find(|scene| s.is_active(&scene.id)));

    html! {
        <div class="platform-demo">
            <section class="demo-hero">
                <ResponsiveContainer>
                    <AnimatedSection animation={Animation::FadeIn} class="section-header">
                        <h1>
                            {"The First Complete "}
                            <span class="gradient-text">{"Dementia Care Pathway"}</span>
                        </h1>
                        <p class="lead on-dark">
                            {"From GP Risk Assessment to Ongoing Patient Support — Bridging the £42.5B Care Gap"}
                        </p>
                        <Button size={ButtonSize::Lg} trailing_arrow=true onclick={restart_tour} class="btn-light">
                            {"Explore The Platform"}
                        </Button>
                    </AnimatedSection>
                </ResponsiveContainer>
            </section>

            <section class="section bg-white">
                <ResponsiveContainer>
                    <AnimatedSection animation={Animation::SlideUp}>
                        <h2 class="section-title">
                            {"The "}<span class="gradient-text">{"£42.5 Billion Gap"}</span>{" in Dementia Care"}
                        </h2>
                        <div class="grid grid-3">
                            { for CARE_GAP.iter().enumerate().map(|(index, (stat, label))| html! {
                                <Card key={index} padding={CardPadding::Sm} delay={index as f64 * 0.1} class="gap-card">
                                    <div class="gap-stat gradient-text">{*stat}</div>
                                    <div class="muted small">{*label}</div>
                                </Card>
                            }) }
                        </div>
                    </AnimatedSection>
                </ResponsiveContainer>
            </section>

            <section class="section bg-gray">
                <ResponsiveContainer>
                    <AnimatedSection animation={Animation::FadeIn} class="section-header">
                        <h2>{"Two Platforms. "}<span class="gradient-text">{"One Complete Solution."}</span></h2>
                        <p class="lead">
                            {"Gilly provides GPs with advanced risk assessment. CLARITY delivers continuous patient and caregiver support. Together, they create the missing infrastructure in dementia care."}
                        </p>
                    </AnimatedSection>
                </ResponsiveContainer>
            </section>

            <section class="section bg-white">
                <ResponsiveContainer>
                    if let Some(switcher) = (*switcher).as_ref() {
                        <SceneTabs
                            tabs={tabs}
                            active={AttrValue::from(switcher.active_id().to_string())}
                            on_select={on_select}
                            scrollable={is_mobile}
                        />
                    }
                    if let Some(scene) = active_scene {
                        <div key={scene.id.clone()} class={classes!("scene-panel", if is_mobile { "enter-x" } else { "enter-y" })}>
                            <ScenePanel scene={scene.clone()} />
                        </div>
                    }
                    if let Some(switcher) = (*switcher).as_ref() {
                        <div class="scene-stepper">
                            <Button variant={ButtonVariant::Ghost} size={ButtonSize::Sm} onclick={on_previous}>
                                {"‹ Previous"}
                            </Button>
                            <span class="muted small">
                                {format!("Step {} of {}", switcher.active_index() + 1, scenes.len())}
                            </span>
                            <Button variant={ButtonVariant::Ghost} size={ButtonSize::Sm} onclick={on_next}>
                                {"Next ›"}
                            </Button>
                        </div>
                    }
                </ResponsiveContainer>
            </section>

            <section class="section bg-gray">
                <ResponsiveContainer>
                    <AnimatedSection animation={Animation::SlideUp}>
                        <h2 class="section-title">
                            {"Capturing the "}<span class="gradient-text">{"£42.5 Billion Opportunity"}</span>
                        </h2>
                        <div class="grid grid-4">
                            { for OPPORTUNITY.iter().enumerate().map(|(index, (metric, label, desc))| html! {
                                <Card key={index} hover=true delay={stagger_delay(index, is_mobile)} class="gap-card">
                                    <div class="gap-stat gradient-text">{*metric}</div>
                                    <div class="opportunity-label">{*label}</div>
                                    <div class="muted small">{*desc}</div>
                                </Card>
                            }) }
                        </div>
                    </AnimatedSection>
                </ResponsiveContainer>
            </section>

            <section class="section bg-gradient">
                <ResponsiveContainer>
                    <AnimatedSection animation={Animation::FadeIn} class="section-header on-dark">
                        <h2>{"Ready to Transform Dementia Care?"}</h2>
                        <p class="lead on-dark">
                            {"Healthcare organizations, NHS trusts, and private care providers: Contact us to pilot Gilly-CLARITY in your organization."}
                        </p>
                        <div class="cta-row">
                            <Button size={ButtonSize::Xl} variant={ButtonVariant::Secondary} href={AttrValue::from(mailto)} class="btn-light">
                                {"Request a Demo"}
                            </Button>
                        </div>
                    </AnimatedSection>
                </ResponsiveContainer>
            </section>

            <style>
                {r#"
                .demo-hero {
                    background: linear-gradient(135deg, var(--beba-purple), var(--beba-purple-light), var(--beba-purple));
                    color: #fff;
                    padding: 5rem 0;
                }
                .demo-hero h1 { font-family: var(--font-display); font-size: clamp(2.25rem, 5vw, 3.75rem); }
                .gap-card { text-align: center; }
                .gap-stat { font-size: 1.875rem; font-weight: 700; margin-bottom: 0.5rem; }
                .opportunity-label { font-weight: 600; color: #1f2937; margin-bottom: 0.25rem; }
                .scene-tabs { display: flex; gap: 1rem; justify-content: center; margin-bottom: 2rem; }
                .scene-tabs.scrollable { justify-content: flex-start; overflow-x: auto; scrollbar-width: none; }
                .scene-tabs.scrollable::-webkit-scrollbar { display: none; }
                .scene-tab {
                    padding: 0.75rem 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #f3f4f6;
                    color: #374151;
                    font-weight: 500;
                    white-space: nowrap;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .scene-tab:hover { background: #e5e7eb; transform: scale(1.05); }
                .scene-tab.active { background: var(--gradient-beba); color: #fff; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
                .scene-panel { background: #f9fafb; border-radius: 1rem; padding: 2rem; animation-duration: 0.3s; animation-fill-mode: both; }
                .scene-panel.enter-x { animation-name: sceneInX; }
                .scene-panel.enter-y { animation-name: sceneInY; }
                @keyframes sceneInX { from { opacity: 0; transform: translateX(50px); } to { opacity: 1; transform: none; } }
                @keyframes sceneInY { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: none; } }
                .scene-steps li { padding: 0.4rem 0; color: #374151; }
                .scene-highlights { display: grid; grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr)); gap: 1rem; margin-top: 1.5rem; text-align: center; }
                .highlight-metric { font-size: 1.5rem; font-weight: 700; color: #16a34a; }
                .highlight-label { font-size: 0.875rem; color: #15803d; }
                .scene-stepper { display: flex; align-items: center; justify-content: space-between; margin-top: 1.5rem; }
                .cta-row { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ScenePanelProps {
    scene: DemoScene,
}

#[function_component(ScenePanel)]
fn scene_panel(props: &ScenePanelProps) -> Html {
    let scene = &props.scene;
    html! {
        <>
            <h3 class="scene-heading">{&scene.heading}</h3>
            <Card padding={CardPadding::Lg}>
                <ul class="scene-steps">
                    { for scene.items.iter().map(|item| html! { <li>{item}</li> }) }
                </ul>
            </Card>
            if !scene.highlights.is_empty() {
                <div class="scene-highlights">
                    { for scene.highlights.iter().map(|highlight| html! {
                        <div>
                            <div class="highlight-metric">{&highlight.metric}</div>
                            <div class="highlight-label">{&highlight.label}</div>
                        </div>
                    }) }
                </div>
            }
        </>
    }
}
