use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginButtonProps {
    pub login_url: String,
}

/// Anonymous view: a link into the backend's OAuth2 authorization flow.
#[function_component(LoginButton)]
pub fn login_button(props: &LoginButtonProps) -> Html {
    html! {
        <a href={props.login_url.clone()}>
            <button class="btn btn-primary">{ "Login with Google" }</button>
        </a>
    }
}
