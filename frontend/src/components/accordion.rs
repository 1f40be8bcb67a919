use yew::prelude::*;

/// Which item of a single-open accordion is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<u32>,
}

impl Accordion {
    /// Expands `id`, or collapses it if it is already the open one.
    pub fn toggle(self, id: u32) -> Self {
        let expanded = if self.expanded == Some(id) { None } else { Some(id) };
        Self { expanded }
    }

    pub fn collapse_all(self) -> Self {
        Self { expanded: None }
    }

    pub fn is_expanded(&self, id: u32) -> bool {
        self.expanded == Some(id)
    }

    pub fn expanded(&self) -> Option<u32> {
        self.expanded
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionItemProps {
    pub id: u32,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub expanded: bool,
    pub on_toggle: Callback<u32>,
    pub children: Children,
}

#[function_component(AccordionItem)]
pub fn accordion_item(props: &AccordionItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let id = props.id;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id);
        })
    };

    html! {
        <div class={classes!("accordion-item", props.expanded.then_some("open"))}>
            <button class="accordion-header" aria-expanded={props.expanded.to_string()} onclick={onclick}>
                <span class="accordion-number">{props.id}</span>
                <span class="accordion-titles">
                    <span class="accordion-title">{&props.title}</span>
                    if let Some(subtitle) = &props.subtitle {
                        <span class="accordion-subtitle">{subtitle}</span>
                    }
                </span>
                <span class="accordion-chevron">{"⌄"}</span>
            </button>
            if props.expanded {
                <div class="accordion-body">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let accordion = Accordion::default();
        assert_eq!(accordion.expanded(), None);
        assert!(!accordion.is_expanded(1));
    }

    #[test]
    fn toggling_same_item_collapses_it() {
        let accordion = Accordion::default().toggle(3);
        assert!(accordion.is_expanded(3));
        assert_eq!(accordion.toggle(3).expanded(), None);
    }

    #[test]
    fn only_one_item_is_open_at_a_time() {
        let accordion = Accordion::default().toggle(1).toggle(5);
        assert!(accordion.is_expanded(5));
        assert!(!accordion.is_expanded(1));
        assert_eq!(accordion.collapse_all().expanded(), None);
    }
}
