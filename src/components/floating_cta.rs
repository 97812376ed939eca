use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaVisibility {
    Shown,
    Hidden,
}

impl CtaVisibility {
    /// Hidden while the hero section, with its own CTA, is on screen.
    pub fn for_hero(hero_visible: bool) -> Self {
        if hero_visible {
            CtaVisibility::Hidden
        } else {
            CtaVisibility::Shown
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            CtaVisibility::Shown => config::VISIBLE_CLASS,
            CtaVisibility::Hidden => config::HIDDEN_CLASS,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingCtaProps {
    pub visibility: CtaVisibility,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(FloatingCta)]
pub fn floating_cta(props: &FloatingCtaProps) -> Html {
    let hidden = props.visibility == CtaVisibility::Hidden;

    html! {
        <button
            id="floating-cta"
            class={classes!("floating-cta", props.visibility.class())}
            onclick={props.onclick.clone()}
            aria-hidden={hidden.to_string()}
            tabindex={if hidden { "-1" } else { "0" }}
        >
            <span class="floating-cta-icon">{"💊"}</span>
            {"앱 다운로드"}
        </button>
    }
}
