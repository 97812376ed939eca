use yew::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq)]
pub struct SmoothAnchorProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that smooth-scrolls to its target. Falls back to normal
/// navigation when the href isn't `#id` or the target doesn't exist.
#[function_component(SmoothAnchor)]
pub fn smooth_anchor(props: &SmoothAnchorProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(id) = dom::anchor_target(&href) {
                if dom::scroll_to_id(id) {
                    e.prevent_default();
                }
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
