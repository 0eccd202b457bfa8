use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{ "OAuth2 Login Demo" }</h1>
            </div>
        </header>
    }
}
