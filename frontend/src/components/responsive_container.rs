use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResponsiveContainerProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ResponsiveContainer)]
pub fn responsive_container(props: &ResponsiveContainerProps) -> Html {
    html! {
        <div class={classes!("container", "safe-area-padding", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
