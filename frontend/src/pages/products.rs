use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_section::{Animation, AnimatedSection};
use crate::components::button::{Button, ButtonSize};
use crate::components::card::{Card, CardPadding, CardVariant};
use crate::components::responsive_container::ResponsiveContainer;
use crate::content::{self, Product};
use crate::Route;

/// Resolves a product's call-to-action link to an in-app route. Anything the
/// router does not know is treated as an external link.
pub fn cta_route(link: &str) -> Option<Route> {
    match Route::recognize(link) {
        Some(Route::NotFound) | None => {
            warn!("CTA link {} is not an app route", link);
            None
        }
        route => route,
    }
}

#[function_component(Products)]
pub fn products() -> Html {
    let products = use_memo(|_| content::products(), ());

    html! {
        <div class="products-page">
            <section class="products-hero">
                <ResponsiveContainer>
                    <AnimatedSection animation={Animation::FadeIn} class="section-header">
                        <h1>{"Our "}<span class="gradient-text">{"Products"}</span></h1>
                        <p class="lead on-dark">
                            {"Ethical AI solutions designed to bridge critical gaps in healthcare delivery."}
                        </p>
                    </AnimatedSection>
                </ResponsiveContainer>
            </section>

            { for products.iter().enumerate().map(|(index, product)| html! {
                <ProductSection key={product.id.clone()} product={product.clone()} alternate={index % 2 == 1} />
            }) }

            <style>
                {r#"
                .products-hero {
                    background: linear-gradient(135deg, var(--beba-purple), var(--beba-purple-light), var(--beba-purple));
                    color: #fff;
                    padding: 5rem 0 4rem;
                }
                .products-hero h1 { font-family: var(--font-display); font-size: clamp(2.25rem, 5vw, 3.75rem); }
                .product-layout { display: grid; gap: 2.5rem; align-items: start; }
                @media (min-width: 1024px) {
                    .product-layout { grid-template-columns: 3fr 2fr; }
                    .product-layout.alternate { grid-template-columns: 2fr 3fr; }
                    .product-layout.alternate .product-copy { order: 2; }
                }
                .product-name { font-family: var(--font-display); font-size: clamp(2rem, 4vw, 3rem); margin-bottom: 0.25rem; }
                .product-tagline { font-size: 1.125rem; font-weight: 600; color: var(--beba-pink); margin-bottom: 1rem; }
                .product-facts { display: flex; flex-direction: column; gap: 1.25rem; }
                .product-facts h4 { margin-bottom: 0.75rem; }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProductSectionProps {
    product: Product,
    alternate: bool,
}

#[function_component(ProductSection)]
fn product_section(props: &ProductSectionProps) -> Html {
    let product = &props.product;
    let cta = match cta_route(&product.cta_link) {
        Some(route) => html! {
            <Button to={route} size={ButtonSize::Lg} trailing_arrow=true>{&product.cta_text}</Button>
        },
        None => html! {
            <Button href={AttrValue::from(product.cta_link.clone())} size={ButtonSize::Lg} trailing_arrow=true>
                {&product.cta_text}
            </Button>
        },
    };

    html! {
        <section id={product.id.clone()} class={classes!("section", if props.alternate { "bg-gray" } else { "bg-white" })}>
            <ResponsiveContainer>
                <div class={classes!("product-layout", props.alternate.then_some("alternate"))}>
                    <AnimatedSection
                        animation={if props.alternate { Animation::SlideLeft } else { Animation::SlideRight }}
                        class="product-copy"
                    >
                        <h2 class="product-name gradient-text">{&product.name}</h2>
                        <p class="product-tagline">{&product.tagline}</p>
                        <p class="lead">{&product.description}</p>
                        <h4>{"Key Features"}</h4>
                        <ul class="check-list">
                            { for product.features.iter().map(|feature| html! { <li>{feature}</li> }) }
                        </ul>
                        { cta }
                    </AnimatedSection>

                    <div class="product-facts">
                        if !product.market_impact.is_empty() {
                            <Card variant={CardVariant::Gradient} padding={CardPadding::Lg}>
                                <h4>{"Market Impact"}</h4>
                                <ul class="check-list">
                                    { for product.market_impact.iter().map(|item| html! { <li>{item}</li> }) }
                                </ul>
                            </Card>
                        }
                        if !product.clinical_validation.is_empty() {
                            <Card variant={CardVariant::Outlined} padding={CardPadding::Lg} delay={0.1}>
                                <h4>{"Clinical Validation"}</h4>
                                <ul class="check-list">
                                    { for product.clinical_validation.iter().map(|item| html! { <li>{item}</li> }) }
                                </ul>
                            </Card>
                        }
                    </div>
                </div>
            </ResponsiveContainer>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_cta_links_resolve_to_routes() {
        assert_eq!(cta_route("/platform-demo"), Some(Route::PlatformDemo));
        assert_eq!(cta_route("/pillars"), Some(Route::Pillars));
    }

    #[test]
    fn unknown_cta_links_are_external() {
        assert_eq!(cta_route("/no-such-page"), None);
    }

    #[test]
    fn bundled_products_all_link_inside_the_app() {
        for product in content::products() {
            assert!(cta_route(&product.cta_link).is_some(), "{}", product.id);
        }
    }
}
