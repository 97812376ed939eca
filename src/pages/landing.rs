use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::analytics::{location_params, Tracker};
use crate::components::coming_soon_modal::ComingSoonModal;
use crate::components::floating_cta::{CtaVisibility, FloatingCta};
use crate::components::smooth_anchor::SmoothAnchor;
use crate::components::store_buttons::{follow, StoreButtons};
use crate::config;
use crate::device::{destination_for, Device};
use crate::dom;
use crate::visibility::{reveal_once, Observation, VisibilityObserver};

/// Delay before the hero element at `index` fades in on first load.
pub fn stagger_delay(index: usize) -> u32 {
    index as u32 * config::HERO_STAGGER_MS
}

fn reveal_selector() -> String {
    format!(".{}", config::REVEAL_CLASS)
}

fn stagger_hero() -> Vec<Timeout> {
    let selector = format!("#{} {}", config::HERO_SECTION_ID, reveal_selector());
    dom::query_all(&selector)
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            Timeout::new(stagger_delay(index), move || {
                dom::add_class(&element, config::VISIBLE_CLASS);
            })
        })
        .collect()
}

fn reveal_on_scroll() -> Option<VisibilityObserver> {
    let observer = VisibilityObserver::new(config::REVEAL_OBSERVER, |change| {
        let next = reveal_once(change.visible);
        if next == Observation::Stop {
            dom::add_class(&change.target, config::VISIBLE_CLASS);
        }
        next
    });

    match observer {
        Ok(observer) => {
            observer.observe_all(&reveal_selector());
            Some(observer)
        }
        Err(e) => {
            // Without IntersectionObserver nothing would ever appear
            warn!("IntersectionObserver unavailable, revealing everything: {:?}", e);
            for element in dom::query_all(&reveal_selector()) {
                dom::add_class(&element, config::VISIBLE_CLASS);
            }
            None
        }
    }
}

fn watch_hero(hero: &NodeRef, set_visibility: UseStateSetter<CtaVisibility>) -> Option<VisibilityObserver> {
    let hero = hero.cast::<Element>()?;
    let observer = VisibilityObserver::new(config::HERO_OBSERVER, move |change| {
        set_visibility.set(CtaVisibility::for_hero(change.visible));
        Observation::Keep
    });

    match observer {
        Ok(observer) => {
            observer.observe(&hero);
            Some(observer)
        }
        Err(e) => {
            warn!("Floating CTA stays hidden: {:?}", e);
            None
        }
    }
}

/// Location tag for the "출시 알림" button in the download section.
pub const NOTIFY_LOCATION: &str = "notify";

/// Reports that the coming-soon modal was opened from `location`.
fn report_coming_soon(tracker: Option<&Tracker>, location: &'static str) {
    if let Some(tracker) = tracker {
        tracker.track("view_coming_soon", location_params(location));
    }
}

/// Routes a call-to-action click by device: store page on phones, the
/// download section on desktop.
fn cta_click(
    location: &'static str,
    tracker: Option<Tracker>,
    on_coming_soon: Callback<&'static str>,
) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        let device = Device::current();
        if let Some(tracker) = &tracker {
            let mut params = location_params(location);
            params.insert("device".to_string(), device.as_str().into());
            tracker.track("click_cta", params);
        }
        follow(destination_for(device, &config::STORE_LINKS), location, &on_coming_soon);
    })
}

#[derive(Properties, PartialEq)]
struct FeatureProps {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

#[function_component(Feature)]
fn feature(props: &FeatureProps) -> Html {
    html! {
        <div class={classes!("feature-item", config::REVEAL_CLASS)}>
            <div class="feature-icon">{props.icon}</div>
            <h3>{props.title}</h3>
            <p>{props.description}</p>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let tracker = use_context::<Tracker>();
    let cta_visibility = use_state(|| CtaVisibility::Hidden);
    let coming_soon_open = use_state(|| false);
    let hero_ref = use_node_ref();

    {
        let set_visibility = cta_visibility.setter();
        let hero_ref = hero_ref.clone();
        use_effect_with_deps(
            move |_| {
                dom::add_body_class(config::LOADED_CLASS);
                let stagger = stagger_hero();
                let reveal = reveal_on_scroll();
                let hero_watch = watch_hero(&hero_ref, set_visibility);

                move || {
                    drop(stagger);
                    drop(reveal);
                    drop(hero_watch);
                }
            },
            (), // Observers live as long as the page
        );
    }

    let open_coming_soon = {
        let coming_soon_open = coming_soon_open.clone();
        let tracker = tracker.clone();
        Callback::from(move |location: &'static str| {
            report_coming_soon(tracker.as_ref(), location);
            coming_soon_open.set(true);
        })
    };

    let close_coming_soon = {
        let coming_soon_open = coming_soon_open.clone();
        Callback::from(move |_| coming_soon_open.set(false))
    };

    html! {
        <div class="landing-page">
            <nav id="navbar" class="top-nav">
                <div class="nav-content">
                    <SmoothAnchor href="#hero" class="nav-logo">{"미리내약"}</SmoothAnchor>
                    <div class="nav-right">
                        <SmoothAnchor href="#features" class="nav-link">{"서비스 소개"}</SmoothAnchor>
                        <SmoothAnchor href="#how-it-works" class="nav-link">{"이용 방법"}</SmoothAnchor>
                        <SmoothAnchor href="#download" class="nav-download">{"앱 받기"}</SmoothAnchor>
                    </div>
                </div>
            </nav>

            <header id={config::HERO_SECTION_ID} class="hero" ref={hero_ref}>
                <div class="hero-background"></div>
                <div class="hero-content">
                    <p class={classes!("hero-badge", config::REVEAL_CLASS)}>{"약사가 직접 추천하는"}</p>
                    <h1 class={config::REVEAL_CLASS}>{"나에게 꼭 맞는 영양제, 미리내약"}</h1>
                    <p class={classes!("hero-subtitle", config::REVEAL_CLASS)}>
                        {"복용 중인 약과 생활 습관을 알려주시면, 약사가 함께 먹어도 안전한 영양제 조합을 찾아드려요."}
                    </p>
                    <div class={classes!("hero-cta-group", config::REVEAL_CLASS)}>
                        <button
                            class="hero-cta"
                            onclick={cta_click("hero", tracker.clone(), open_coming_soon.clone())}
                        >
                            {"무료로 시작하기"}
                        </button>
                        <SmoothAnchor href="#how-it-works" class="hero-secondary">
                            {"어떻게 추천하나요?"}
                        </SmoothAnchor>
                    </div>
                </div>
            </header>

            <section id="features" class="features">
                <h2 class={config::REVEAL_CLASS}>{"왜 미리내약인가요?"}</h2>
                <div class="features-grid">
                    <Feature
                        icon="🧑‍⚕️"
                        title="약사 1:1 맞춤 추천"
                        description="광고가 아닌 약사의 판단으로, 꼭 필요한 영양제만 골라드려요."
                    />
                    <Feature
                        icon="⚠️"
                        title="복용 약 상호작용 확인"
                        description="지금 드시는 약과 함께 먹어도 괜찮은지 성분 단위로 점검해요."
                    />
                    <Feature
                        icon="⏰"
                        title="복용 알림"
                        description="아침, 점심, 저녁 챙겨 드실 시간을 잊지 않도록 알려드려요."
                    />
                    <Feature
                        icon="📊"
                        title="건강 기록"
                        description="컨디션 변화를 기록하고 다음 추천에 반영해요."
                    />
                </div>
            </section>

            <section id="how-it-works" class="how-it-works">
                <h2 class={config::REVEAL_CLASS}>{"이용 방법"}</h2>
                <div class="steps-grid">
                    <div class={classes!("step", config::REVEAL_CLASS)}>
                        <span class="step-number">{"1"}</span>
                        <h3>{"건강 설문 작성"}</h3>
                        <p>{"3분이면 충분해요. 복용 중인 약과 고민을 알려주세요."}</p>
                    </div>
                    <div class={classes!("step", config::REVEAL_CLASS)}>
                        <span class="step-number">{"2"}</span>
                        <h3>{"약사 검토"}</h3>
                        <p>{"담당 약사가 설문을 꼼꼼히 보고 조합을 설계해요."}</p>
                    </div>
                    <div class={classes!("step", config::REVEAL_CLASS)}>
                        <span class="step-number">{"3"}</span>
                        <h3>{"맞춤 추천 받기"}</h3>
                        <p>{"앱에서 추천 결과와 복용 가이드를 확인하세요."}</p>
                    </div>
                </div>
            </section>

            <section id={config::DOWNLOAD_SECTION_ID} class="download">
                <div class={classes!("download-content", config::REVEAL_CLASS)}>
                    <h2>{"지금 미리내약을 만나보세요"}</h2>
                    <p class="subtitle">{"앱을 설치하고 첫 맞춤 추천을 무료로 받아보세요."}</p>
                    <StoreButtons location="download" on_coming_soon={open_coming_soon.clone()} />
                    <button
                        class="notify-button"
                        onclick={{
                            let open_coming_soon = open_coming_soon.clone();
                            Callback::from(move |_: MouseEvent| open_coming_soon.emit(NOTIFY_LOCATION))
                        }}
                    >
                        {"🔔 iOS 출시 알림 받기"}
                    </button>
                </div>
            </section>

            <footer class="landing-footer">
                <p>{"미리내약은 의약품 처방을 대신하지 않습니다. 복용 전 전문가와 상담하세요."}</p>
                <p class="copyright">{"© 미리내약"}</p>
            </footer>

            <FloatingCta
                visibility={*cta_visibility}
                onclick={cta_click("floating", tracker, open_coming_soon)}
            />
            <ComingSoonModal open={*coming_soon_open} on_close={close_coming_soon} />
        </div>
    }
}
