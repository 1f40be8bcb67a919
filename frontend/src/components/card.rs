use yew::prelude::*;

use crate::animation::ObserverConfig;
use crate::components::animated_section::transition_style;
use crate::hooks::use_in_view;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Gradient,
    Glass,
    Outlined,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardPadding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub children: Children,
    #[prop_or_default]
    pub variant: CardVariant,
    #[prop_or_default]
    pub padding: CardPadding,
    #[prop_or_default]
    pub hover: bool,
    /// Reveal stagger in seconds.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), ObserverConfig::default());

    let variant = match props.variant {
        CardVariant::Default => "card-default",
        CardVariant::Gradient => "card-gradient",
        CardVariant::Glass => "card-glass",
        CardVariant::Outlined => "card-outlined",
    };
    let padding = match props.padding {
        CardPadding::None => "pad-none",
        CardPadding::Sm => "pad-sm",
        CardPadding::Md => "pad-md",
        CardPadding::Lg => "pad-lg",
    };

    html! {
        <div
            ref={node}
            class={classes!(
                "card",
                "reveal",
                "reveal-slide-up",
                variant,
                padding,
                props.hover.then_some("card-hover"),
                in_view.then_some("visible"),
                props.class.clone()
            )}
            style={transition_style(0.5, props.delay)}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}
