use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::button::{Button, ButtonSize};
use crate::hooks::use_is_mobile;
use crate::Route;

/// Navbar turns opaque past this many pixels of scroll.
const SCROLLED_OFFSET: f64 = 20.0;

const NAV_LINKS: [(&str, Route); 5] = [
    ("Home", Route::Home),
    ("Platform Demo", Route::PlatformDemo),
    ("Seven Pillars", Route::Pillars),
    ("Products", Route::Products),
    ("About", Route::About),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    pub fn toggle(self) -> Self {
        match self {
            DrawerState::Closed => DrawerState::Open,
            DrawerState::Open => DrawerState::Closed,
        }
    }

    pub fn close(self) -> Self {
        DrawerState::Closed
    }

    pub fn is_open(self) -> bool {
        self == DrawerState::Open
    }

    /// The drawer only exists on small screens, so only there does it pin
    /// the page behind it.
    pub fn locks_scroll(self, is_mobile: bool) -> bool {
        self.is_open() && is_mobile
    }
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let drawer = use_state(DrawerState::default);
    let is_mobile = use_is_mobile();
    let (_, scroll_y) = use_window_scroll();
    let route = use_route::<Route>();

    // Navigating anywhere closes the drawer.
    {
        let drawer = drawer.clone();
        use_effect_with_deps(
            move |_| {
                drawer.set(DrawerState::Closed);
                || ()
            },
            route.clone(),
        );
    }

    {
        let locked = drawer.locks_scroll(is_mobile);
        use_effect_with_deps(
            move |locked: &bool| {
                if *locked {
                    debug!("Locking page scroll behind nav drawer");
                    set_body_overflow("hidden");
                } else {
                    set_body_overflow("unset");
                }
                || set_body_overflow("unset")
            },
            locked,
        );
    }

    let toggle = {
        let drawer = drawer.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            drawer.set(drawer.toggle());
        })
    };

    let close = {
        let drawer = drawer.clone();
        Callback::from(move |_: MouseEvent| {
            drawer.set(drawer.close());
        })
    };

    let is_active = |target: &Route| route.as_ref() == Some(target);

    html! {
        <>
            <nav class={classes!("top-nav", (scroll_y > SCROLLED_OFFSET).then_some("scrolled"))}>
                <div class="container nav-content">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <span class="logo-mark"></span>
                        <span class="gradient-text">{"BEBA AI"}</span>
                    </Link<Route>>

                    <div class="nav-links desktop-only">
                        { for NAV_LINKS.iter().map(|(label, target)| html! {
                            <Link<Route>
                                to={target.clone()}
                                classes={classes!("nav-link", is_active(target).then_some("active"))}
                            >
                                {*label}
                            </Link<Route>>
                        }) }
                        <Button size={ButtonSize::Sm} to={Route::PlatformDemo}>{"Get Started"}</Button>
                    </div>

                    <button class="burger-menu mobile-only" aria-label="Toggle menu" onclick={toggle}>
                        { if drawer.is_open() { "✕" } else { "☰" } }
                    </button>
                </div>
            </nav>

            if drawer.is_open() && is_mobile {
                <>
                <div class="drawer-backdrop" onclick={close.clone()}></div>
                <div class="drawer safe-area-padding">
                    <nav class="drawer-links">
                        { for NAV_LINKS.iter().enumerate().map(|(index, (label, target))| html! {
                            <div
                                class="drawer-link-wrapper"
                                style={format!("animation-delay: {:.1}s;", index as f64 * 0.1)}
                                onclick={close.clone()}
                            >
                                <Link<Route>
                                    to={target.clone()}
                                    classes={classes!("drawer-link", is_active(target).then_some("active"))}
                                >
                                    {*label}
                                    <span class="chevron">{"›"}</span>
                                </Link<Route>>
                            </div>
                        }) }
                    </nav>
                    <div class="drawer-cta" onclick={close.clone()}>
                        <Button size={ButtonSize::Lg} full_width=true to={Route::PlatformDemo}>
                            {"Get Started"}
                        </Button>
                    </div>
                    <div class="drawer-footer">
                        <p>{"Responsible AI for Healthcare"}</p>
                        <p class="small">{"Innovation with Integrity"}</p>
                    </div>
                </div>
                </>
            }

            <div class="nav-spacer"></div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_states() {
        let drawer = DrawerState::default();
        assert!(!drawer.is_open());
        assert!(drawer.toggle().is_open());
        assert!(!drawer.toggle().toggle().is_open());
    }

    #[test]
    fn close_is_idempotent() {
        assert_eq!(DrawerState::Open.close(), DrawerState::Closed);
        assert_eq!(DrawerState::Closed.close(), DrawerState::Closed);
    }

    #[test]
    fn scroll_lock_only_applies_to_open_mobile_drawer() {
        assert!(DrawerState::Open.locks_scroll(true));
        assert!(!DrawerState::Open.locks_scroll(false));
        assert!(!DrawerState::Closed.locks_scroll(true));
    }
}
