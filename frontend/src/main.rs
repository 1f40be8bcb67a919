use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod config;
mod content;
mod hooks;
mod components {
    pub mod accordion;
    pub mod animated_section;
    pub mod button;
    pub mod card;
    pub mod footer;
    pub mod loading_screen;
    pub mod nav;
    pub mod pillars_preview;
    pub mod responsive_container;
    pub mod scene_switcher;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod pillars;
    pub mod platform_demo;
    pub mod products;
}

use components::{footer::Footer, loading_screen::LoadingScreen, nav::Nav};
use components::button::Button;
use pages::{
    about::About,
    home::Home,
    pillars::Pillars,
    platform_demo::PlatformDemo,
    products::Products,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/platform-demo")]
    PlatformDemo,
    #[at("/pillars")]
    Pillars,
    #[at("/products")]
    Products,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::PlatformDemo => {
            info!("Rendering Platform Demo page");
            html! { <PlatformDemo /> }
        }
        Route::Pillars => {
            info!("Rendering Pillars page");
            html! { <Pillars /> }
        }
        Route::Products => {
            info!("Rendering Products page");
            html! { <Products /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! {
                <section class="section not-found">
                    <div class="container section-header">
                        <h1 class="gradient-text">{"404"}</h1>
                        <p class="lead">{"This page doesn't exist."}</p>
                        <Button to={Route::Home} trailing_arrow=true>{"Back to Home"}</Button>
                    </div>
                </section>
            }
        }
    }
}

#[function_component]
fn App() -> Html {
    let loading = use_state(|| config::loading_screen_ms() > 0);

    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = (*loading).then(|| {
                    Timeout::new(config::loading_screen_ms(), move || loading.set(false))
                });
                move || drop(timeout)
            },
            (),
        );
    }

    if *loading {
        return html! { <LoadingScreen /> };
    }

    html! {
        <BrowserRouter>
            <div class="app">
                <Nav />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </div>
            <style>
                {r#"
                :root {
                    --beba-pink: #FF1B8D;
                    --beba-blue: #0D7FDC;
                    --beba-cyan: #00D9FF;
                    --beba-purple: #2D1B3D;
                    --beba-purple-light: #4A2F5A;
                    --gradient-beba: linear-gradient(135deg, #FF1B8D 0%, #0D7FDC 50%, #00D9FF 100%);
                    --font-display: 'Poppins', 'Inter', system-ui, sans-serif;
                }
                * { box-sizing: border-box; }
                html { scroll-behavior: smooth; }
                body {
                    margin: 0;
                    font-family: 'Inter', system-ui, -apple-system, sans-serif;
                    color: #1f2937;
                    background: #fff;
                    -webkit-font-smoothing: antialiased;
                }
                h1, h2, h3, h4 { font-family: var(--font-display); margin: 0 0 0.75rem; line-height: 1.2; }
                p { margin: 0 0 1rem; line-height: 1.6; }
                a { color: inherit; text-decoration: none; }

                .container { width: 100%; max-width: 80rem; margin: 0 auto; }
                .safe-area-padding {
                    padding-left: max(1rem, env(safe-area-inset-left));
                    padding-right: max(1rem, env(safe-area-inset-right));
                }
                @media (min-width: 640px) { .safe-area-padding { padding-left: 1.5rem; padding-right: 1.5rem; } }
                @media (min-width: 1024px) { .safe-area-padding { padding-left: 2rem; padding-right: 2rem; } }

                .gradient-text {
                    background: var(--gradient-beba);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .section { padding: 4rem 0; }
                @media (min-width: 1024px) { .section { padding: 6rem 0; } }
                .bg-white { background: #fff; }
                .bg-gray { background: #f9fafb; }
                .bg-gradient { background: var(--gradient-beba); color: #fff; }
                .section-header { text-align: center; max-width: 48rem; margin: 0 auto 3rem; }
                .section-header h2, .section-title { font-size: clamp(1.875rem, 4vw, 3rem); }
                .section-title { text-align: center; margin-bottom: 2.5rem; }
                .lead { font-size: 1.125rem; color: #4b5563; }
                .muted { color: #6b7280; }
                .small { font-size: 0.875rem; }
                .eyebrow { text-transform: uppercase; letter-spacing: 0.1em; font-size: 0.75rem; font-weight: 600; color: var(--beba-pink); }
                .on-dark, .on-dark .lead, .lead.on-dark { color: rgba(255, 255, 255, 0.9); }
                .text-blue { color: var(--beba-blue); }
                .grid { display: grid; gap: 1.5rem; grid-template-columns: 1fr; }
                @media (min-width: 768px) {
                    .grid-3 { grid-template-columns: repeat(2, 1fr); }
                    .grid-4 { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .grid-3 { grid-template-columns: repeat(3, 1fr); }
                    .grid-4 { grid-template-columns: repeat(4, 1fr); }
                }
                .check-list { list-style: none; padding: 0; margin: 0 0 1.5rem; }
                .check-list li { position: relative; padding: 0.35rem 0 0.35rem 1.75rem; }
                .check-list li::before { content: '✓'; position: absolute; left: 0; color: var(--beba-pink); font-weight: 700; }

                .btn {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    border-radius: 0.75rem;
                    border: 2px solid transparent;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.2s ease, box-shadow 0.2s ease, background 0.2s ease;
                }
                .btn:hover { transform: translateY(-2px); }
                .btn:disabled { opacity: 0.5; cursor: not-allowed; transform: none; }
                .btn-primary { background: var(--gradient-beba); color: #fff; box-shadow: 0 10px 15px rgba(255, 27, 141, 0.2); }
                .btn-secondary { background: #fff; color: var(--beba-purple); }
                .btn-outline { background: transparent; border-color: var(--beba-pink); color: var(--beba-pink); }
                .btn-outline.on-dark { border-color: #fff; color: #fff; }
                .btn-ghost { background: transparent; color: #374151; }
                .btn-light { background: #fff; color: var(--beba-purple); }
                .btn-sm { padding: 0.5rem 1rem; font-size: 0.875rem; }
                .btn-md { padding: 0.75rem 1.5rem; font-size: 1rem; }
                .btn-lg { padding: 1rem 2rem; font-size: 1.125rem; }
                .btn-xl { padding: 1.25rem 2.5rem; font-size: 1.25rem; }
                .btn-full { width: 100%; }
                .btn-arrow { transition: transform 0.2s ease; }
                .btn:hover .btn-arrow { transform: translateX(4px); }

                .card { border-radius: 1rem; background: #fff; }
                .card-default { box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07); }
                .card-gradient { background: var(--gradient-beba); color: #fff; }
                .card-glass { background: rgba(255, 255, 255, 0.1); backdrop-filter: blur(12px); border: 1px solid rgba(255, 255, 255, 0.2); }
                .card-outlined { border: 2px solid #e5e7eb; }
                .card-hover { transition: transform 0.3s ease, box-shadow 0.3s ease; }
                .card-hover:hover { transform: translateY(-4px); box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1); }
                .pad-none { padding: 0; }
                .pad-sm { padding: 1rem; }
                .pad-md { padding: 1.5rem; }
                .pad-lg { padding: 2rem; }

                .reveal { opacity: 0; transition-property: opacity, transform; transition-timing-function: ease-out; }
                .reveal-slide-up { transform: translateY(50px); }
                .reveal.visible { opacity: 1; transform: none; }

                .desktop-only { display: none; }
                @media (min-width: 768px) {
                    .desktop-only { display: flex; }
                    .mobile-only { display: none; }
                }

                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled { background: rgba(255, 255, 255, 0.95); backdrop-filter: blur(12px); box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05); }
                .nav-content { display: flex; align-items: center; justify-content: space-between; height: 4.5rem; padding: 0 1rem; }
                .nav-logo { display: flex; align-items: center; gap: 0.5rem; font-family: var(--font-display); font-size: 1.5rem; font-weight: 700; }
                .logo-mark { width: 2rem; height: 2rem; border-radius: 0.5rem; background: var(--gradient-beba); }
                .nav-links { align-items: center; gap: 2rem; }
                .nav-link { font-weight: 500; color: #374151; transition: color 0.2s ease; }
                .nav-link:hover, .nav-link.active { color: var(--beba-pink); }
                .burger-menu { background: none; border: none; font-size: 1.5rem; padding: 0.5rem; cursor: pointer; }
                .nav-spacer { height: 4.5rem; }
                .drawer-backdrop { position: fixed; inset: 0; z-index: 30; background: rgba(0, 0, 0, 0.5); animation: fadeIn 0.2s ease-out; }
                .drawer {
                    position: fixed;
                    top: 4.5rem;
                    right: 0;
                    bottom: 0;
                    z-index: 35;
                    width: min(20rem, 85vw);
                    background: #fff;
                    display: flex;
                    flex-direction: column;
                    padding-top: 1.5rem;
                    padding-bottom: 1.5rem;
                    animation: drawerIn 0.3s ease-out;
                }
                .drawer-links { display: flex; flex-direction: column; }
                .drawer-link-wrapper { animation: fadeIn 0.3s ease-out both; }
                .drawer-link { display: flex; justify-content: space-between; padding: 1rem 0; border-bottom: 1px solid #f3f4f6; font-size: 1.125rem; font-weight: 500; }
                .drawer-link.active { color: var(--beba-pink); }
                .drawer-cta { margin-top: 1.5rem; }
                .drawer-footer { margin-top: auto; text-align: center; color: #6b7280; }
                @keyframes drawerIn { from { transform: translateX(100%); } to { transform: none; } }
                @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }

                .not-found h1 { font-size: 6rem; }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
