use yew::prelude::*;

use crate::components::session_viewer::SessionViewer;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="container">
            <SessionViewer />
        </div>
    }
}
