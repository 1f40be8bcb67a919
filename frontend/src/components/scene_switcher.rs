use log::warn;
use yew::prelude::*;

/// Tab state over a fixed, ordered list of scene ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneSwitcher {
    ids: Vec<String>,
    active: usize,
}

impl SceneSwitcher {
    /// The first scene starts active. `None` if there are no scenes.
    pub fn new(ids: Vec<String>) -> Option<Self> {
        if ids.is_empty() {
            return None;
        }
        Some(Self { ids, active: 0 })
    }

    pub fn active_id(&self) -> &str {
        &self.ids[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == id
    }

    /// Activates `id`. Unknown ids leave the current scene in place.
    pub fn select(&self, id: &str) -> Self {
        match self.ids.iter().position(|candidate| candidate == id) {
            Some(active) => Self {
                ids: self.ids.clone(),
                active,
            },
            None => {
                warn!("Ignoring unknown scene {:?}", id);
                self.clone()
            }
        }
    }

    pub fn next(&self) -> Self {
        Self {
            ids: self.ids.clone(),
            active: (self.active + 1) % self.ids.len(),
        }
    }

    pub fn previous(&self) -> Self {
        Self {
            ids: self.ids.clone(),
            active: (self.active + self.ids.len() - 1) % self.ids.len(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SceneTabsProps {
    /// `(id, title)` pairs in display order.
    pub tabs: Vec<(String, String)>,
    pub active: AttrValue,
    pub on_select: Callback<String>,
    #[prop_or_default]
    pub scrollable: bool,
}

#[function_component(SceneTabs)]
pub fn scene_tabs(props: &SceneTabsProps) -> Html {
    html! {
        <div class={classes!("scene-tabs", props.scrollable.then_some("scrollable"))} role="tablist">
            { for props.tabs.iter().map(|(id, title)| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    let id = id.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
                };
                let active = props.active.as_str() == id.as_str();
                html! {
                    <button
                        key={id.clone()}
                        role="tab"
                        aria-selected={active.to_string()}
                        class={classes!("scene-tab", active.then_some("active"))}
                        onclick={onclick}
                    >
                        {title}
                    </button>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switcher() -> SceneSwitcher {
        SceneSwitcher::new(
            ["gp-assessment", "data-flow", "patient-portal"]
                .iter()
                .map(|id| id.to_string())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn first_scene_starts_active() {
        assert_eq!(switcher().active_id(), "gp-assessment");
        assert!(SceneSwitcher::new(Vec::new()).is_none());
    }

    #[test]
    fn select_activates_known_scene() {
        let selected = switcher().select("patient-portal");
        assert_eq!(selected.active_index(), 2);
        assert!(selected.is_active("patient-portal"));
    }

    #[test]
    fn select_ignores_unknown_scene() {
        let selected = switcher().select("data-flow").select("nope");
        assert_eq!(selected.active_id(), "data-flow");
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let s = switcher();
        assert_eq!(s.previous().active_id(), "patient-portal");
        assert_eq!(s.next().next().next().active_id(), "gp-assessment");
        assert_eq!(s.next().previous(), s);
    }
}
