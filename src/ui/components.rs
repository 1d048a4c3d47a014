/// Reusable UI components

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabLabelProps {
    pub label: AttrValue,
    /// Full URL, shown as the tooltip
    pub url: AttrValue,
    pub active: bool,
    pub onclick: Callback<MouseEvent>,
}

/// One entry in the tab bar
#[function_component(TabLabel)]
pub fn tab_label(props: &TabLabelProps) -> Html {
    html! {
        <div
            class={classes!("tab", props.active.then_some("active"))}
            title={props.url.clone()}
            onclick={props.onclick.clone()}
        >
            {props.label.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavButtonProps {
    pub id: AttrValue,
    pub title: AttrValue,
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
    #[prop_or(false)]
    pub pressed: bool,
}

/// Toolbar button with a stable element id
#[function_component(NavButton)]
pub fn nav_button(props: &NavButtonProps) -> Html {
    html! {
        <button
            id={props.id.clone()}
            class={classes!("pf-v5-c-button", "pf-m-control", props.pressed.then_some("pf-m-active"))}
            title={props.title.clone()}
            aria-pressed={props.pressed.to_string()}
            onclick={props.onclick.clone()}
        >
            {props.children.clone()}
        </button>
    }
}
