use yew::prelude::*;

use crate::components::accordion::{Accordion, AccordionItem};
use crate::components::animated_section::{Animation, AnimatedSection};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::responsive_container::ResponsiveContainer;
use crate::content;
use crate::Route;

#[function_component(Pillars)]
pub fn pillars() -> Html {
    let accordion = use_state(Accordion::default);
    let pillars = use_memo(|_| content::pillars(), ());

    let on_toggle = {
        let accordion = accordion.clone();
        Callback::from(move |id: u32| accordion.set(accordion.toggle(id)))
    };

    let collapse_all = {
        let accordion = accordion.clone();
        Callback::from(move |_: MouseEvent| accordion.set(accordion.collapse_all()))
    };

    html! {
        <div class="pillars-page">
            <section class="pillars-hero">
                <ResponsiveContainer>
                    <AnimatedSection animation={Animation::FadeIn} class="section-header">
                        <h1>{"The Seven Pillars of "}<span class="gradient-text">{"Ethical AI"}</span></h1>
                        <p class="lead on-dark">
                            {"A comprehensive framework ensuring AI serves humanity with integrity, transparency, and accountability."}
                        </p>
                    </AnimatedSection>
                </ResponsiveContainer>
            </section>

            <section class="section bg-white">
                <ResponsiveContainer class="pillars-list">
                    { for pillars.iter().enumerate().map(|(index, pillar)| html! {
                        <AnimatedSection key={pillar.id} animation={Animation::SlideUp} delay={index as f64 * 0.05}>
                            <AccordionItem
                                id={pillar.id}
                                title={AttrValue::from(pillar.name.clone())}
                                subtitle={AttrValue::from(pillar.subtitle.clone())}
                                expanded={accordion.is_expanded(pillar.id)}
                                on_toggle={on_toggle.clone()}
                            >
                                <p>{&pillar.description}</p>
                                <ul class="check-list">
                                    { for pillar.details.iter().map(|detail| html! { <li>{detail}</li> }) }
                                </ul>
                            </AccordionItem>
                        </AnimatedSection>
                    }) }
                    if accordion.expanded().is_some() {
                        <div class="pillars-actions">
                            <Button variant={ButtonVariant::Ghost} size={ButtonSize::Sm} onclick={collapse_all}>
                                {"Collapse all"}
                            </Button>
                        </div>
                    }
                </ResponsiveContainer>
            </section>

            <section class="section bg-gray">
                <ResponsiveContainer>
                    <AnimatedSection animation={Animation::ZoomIn} class="section-header">
                        <h2>{"Ethics is Our "}<span class="gradient-text">{"Architecture"}</span></h2>
                        <p class="lead">
                            {"Each pillar strengthens the whole. Together they form the foundation of every product we build."}
                        </p>
                        <Button to={Route::Products} size={ButtonSize::Lg} trailing_arrow=true>
                            {"See the Pillars in Practice"}
                        </Button>
                    </AnimatedSection>
                </ResponsiveContainer>
            </section>

            <style>
                {r#"
                .pillars-hero {
                    background: linear-gradient(135deg, var(--beba-purple), var(--beba-purple-light), var(--beba-purple));
                    color: #fff;
                    padding: 5rem 0 4rem;
                }
                .pillars-hero h1 { font-family: var(--font-display); font-size: clamp(2.25rem, 5vw, 3.75rem); }
                .pillars-list { max-width: 56rem; display: flex; flex-direction: column; gap: 1rem; }
                .pillars-actions { display: flex; justify-content: flex-end; }
                .accordion-item {
                    background: #fff;
                    border: 2px solid #e5e7eb;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease, box-shadow 0.3s ease;
                }
                .accordion-item.open { border-color: var(--beba-pink); box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
                .accordion-header {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                }
                .accordion-number {
                    flex-shrink: 0;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-weight: 700;
                    background: var(--gradient-beba);
                }
                .accordion-titles { flex: 1; display: flex; flex-direction: column; }
                .accordion-title { font-family: var(--font-display); font-size: 1.25rem; font-weight: 700; color: #1f2937; }
                .accordion-subtitle { font-size: 0.875rem; color: #6b7280; }
                .accordion-chevron { font-size: 1.5rem; transition: transform 0.3s ease; }
                .accordion-item.open .accordion-chevron { transform: rotate(180deg); }
                .accordion-body { padding: 0 1.5rem 1.5rem 5rem; color: #4b5563; animation: fadeIn 0.3s ease-out; }
                @media (max-width: 767px) {
                    .accordion-body { padding-left: 1.5rem; }
                }
                "#}
            </style>
        </div>
    }
}
