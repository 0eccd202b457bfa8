use yew::prelude::*;

use shared::api::SessionUser;

use crate::components::login_button::LoginButton;
use crate::components::profile_card::ProfileCard;
use crate::config::AppConfig;
use crate::services::session::SessionApi;

/// Shows the current user's profile when the backend reports a live
/// session, and a login button otherwise.
///
/// The session is fetched once on mount. Any failure (401, network error,
/// malformed body) falls back to the anonymous view, so "logged out" and
/// "backend unreachable" look the same.
#[function_component(SessionViewer)]
pub fn session_viewer() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let current_user = use_state(|| None::<SessionUser>);

    {
        let config = config.clone();
        let current_user = current_user.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match SessionApi::current_user(&config).await {
                    Ok(user) => current_user.set(Some(user)),
                    Err(_) => current_user.set(None),
                }
            });
            || ()
        });
    }

    html! {
        <div class="session-viewer">
            if let Some(user) = &*current_user {
                <ProfileCard user={user.clone()} logout_url={config.logout_url()} />
            } else {
                <LoginButton login_url={config.login_url()} />
            }
        </div>
    }
}
