mod components;
mod config;
mod pages;
mod router;
mod services;

use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::config::AppConfig;
use crate::router::{switch, Route};

#[function_component(App)]
fn app() -> Html {
    // One config per deployment, injected so components never hard-code
    // the backend origin.
    let config = AppConfig::default();

    html! {
        <ContextProvider<AppConfig> context={config}>
            <BrowserRouter>
                <div id="app">
                    <components::header::Header />
                    <yew_router::Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();
    tracing::info!("session viewer starting");

    yew::Renderer::<App>::new().render();
}
