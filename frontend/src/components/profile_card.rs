use yew::prelude::*;

use shared::api::SessionUser;

#[derive(Properties, PartialEq)]
pub struct ProfileCardProps {
    pub user: SessionUser,
    pub logout_url: String,
}

/// Authenticated view: avatar, name, email, and a logout link.
///
/// Logout is a plain hyperlink, not an API call; the backend's
/// redirect-based flow needs a full-page navigation.
#[function_component(ProfileCard)]
pub fn profile_card(props: &ProfileCardProps) -> Html {
    let user = &props.user;

    html! {
        <div class="profile-card">
            <img class="avatar" src={user.picture.clone()} alt="avatar" width="100" height="100" />
            <h2>{ &user.name }</h2>
            <p class="profile-email">{ &user.email }</p>
            <a href={props.logout_url.clone()}>
                <button class="btn btn-primary">{ "Logout" }</button>
            </a>
        </div>
    }
}
