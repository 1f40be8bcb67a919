use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let mailto = format!("mailto:{}", config::contact_email());

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <span class="gradient-text footer-logo">{"BEBA AI"}</span>
                    <p>{"Responsible AI for Healthcare. Innovation with Integrity."}</p>
                    <p class="footer-badges">{"NHS Compliant • MHRA Registered • ISO 27001"}</p>
                </div>
                <div class="footer-column">
                    <h4>{"Company"}</h4>
                    <Link<Route> to={Route::About} classes="footer-link">{"About"}</Link<Route>>
                    <Link<Route> to={Route::Pillars} classes="footer-link">{"Seven Pillars"}</Link<Route>>
                </div>
                <div class="footer-column">
                    <h4>{"Solutions"}</h4>
                    <Link<Route> to={Route::PlatformDemo} classes="footer-link">{"Platform Demo"}</Link<Route>>
                    <Link<Route> to={Route::Products} classes="footer-link">{"Products"}</Link<Route>>
                </div>
                <div class="footer-column">
                    <h4>{"Contact"}</h4>
                    <a href={mailto} class="footer-link">{config::contact_email()}</a>
                </div>
            </div>
            <div class="container footer-bottom">
                {"© BEBA AI. All rights reserved."}
            </div>
            <style>
                {r#"
                .site-footer {
                    background: var(--beba-purple);
                    color: rgba(255, 255, 255, 0.8);
                    padding: 4rem 0 2rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }
                @media (min-width: 768px) {
                    .footer-grid { grid-template-columns: 2fr 1fr 1fr 1fr; }
                }
                .footer-logo {
                    font-family: var(--font-display);
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .footer-badges { font-size: 0.8rem; opacity: 0.7; }
                .footer-column h4 { color: #fff; margin-bottom: 1rem; }
                .footer-link {
                    display: block;
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                    padding: 0.25rem 0;
                    transition: color 0.3s ease;
                }
                .footer-link:hover { color: var(--beba-cyan); }
                .footer-bottom {
                    margin-top: 3rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    font-size: 0.8rem;
                    text-align: center;
                }
                "#}
            </style>
        </footer>
    }
}
