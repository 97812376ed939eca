use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod analytics;
mod device;
mod dom;
mod visibility;
mod attribution {
    pub mod error;
    pub mod record;
    pub mod storage;
    pub mod enrich;
    pub mod labels;
    pub mod store;
}
mod components {
    pub mod floating_cta;
    pub mod coming_soon_modal;
    pub mod smooth_anchor;
    pub mod store_buttons;
}
mod pages {
    pub mod landing;
}

use analytics::Tracker;
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/landing")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            // Campaign links with typos still land somewhere useful
            info!("Unknown path, rendering Landing page");
            html! { <Landing /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub tracker: Tracker,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Tracker> context={props.tracker.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Tracker>>
    }
}


fn welcome(tracker: &Tracker) {
    gloo_console::log!(
        "%c미리내약 🌟",
        "font-size: 24px; font-weight: bold; color: #22c55e;"
    );
    gloo_console::log!(
        "%c약사가 직접 추천하는 맞춤 영양제 서비스",
        "font-size: 14px; color: #64748b;"
    );
    info!("Visitor came from: {}", tracker.source_label());
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    // The only place attribution is written: once, before anything can track
    let tracker = Tracker::browser();
    tracker.capture_page_load();
    welcome(&tracker);

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { tracker }).render();
}
