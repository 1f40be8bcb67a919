use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
            ButtonSize::Xl => "btn-xl",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    /// In-app navigation target. Takes precedence over `href`.
    #[prop_or_default]
    pub to: Option<Route>,
    /// External link, opened in a new tab.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub trailing_arrow: bool,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let classes = classes!(
        "btn",
        props.variant.class(),
        props.size.class(),
        props.full_width.then_some("btn-full"),
        props.class.clone()
    );
    let content = html! {
        <>
            { for props.children.iter() }
            if props.trailing_arrow {
                <span class="btn-arrow">{"→"}</span>
            }
        </>
    };

    if let Some(route) = &props.to {
        return html! {
            <Link<Route> to={route.clone()} classes={classes}>
                { content }
            </Link<Route>>
        };
    }

    if let Some(href) = &props.href {
        return html! {
            <a href={href.clone()} target="_blank" rel="noopener noreferrer" class={classes}>
                { content }
            </a>
        };
    }

    html! {
        <button type="button" class={classes} disabled={props.disabled} onclick={props.onclick.clone()}>
            { content }
        </button>
    }
}
