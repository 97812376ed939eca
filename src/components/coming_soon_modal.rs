use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ComingSoonModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ComingSoonModal)]
pub fn coming_soon_modal(props: &ComingSoonModalProps) -> Html {
    {
        let open = props.open;
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Clicks inside the dialog must not reach the backdrop
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div
                class="modal-content coming-soon"
                role="dialog"
                aria-modal="true"
                aria-labelledby="coming-soon-title"
                onclick={keep_open}
            >
                <button class="modal-close" aria-label="닫기" onclick={close.clone()}>{"×"}</button>
                <div class="coming-soon-icon">{"🌟"}</div>
                <h2 id="coming-soon-title">{"곧 만나요!"}</h2>
                <p>
                    {"미리내약 iOS 앱은 출시 준비 중이에요."}
                    <br/>
                    {"조금만 기다려 주시면 App Store에서 만나실 수 있어요."}
                </p>
                <p class="coming-soon-sub">
                    {"Android 사용자는 지금 바로 Google Play에서 받아보세요."}
                </p>
                <div class="modal-buttons">
                    <button class="modal-button confirm" onclick={close}>{"확인"}</button>
                </div>
            </div>
        </div>
    }
}
