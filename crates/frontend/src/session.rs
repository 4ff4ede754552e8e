//! Session context: current identity and the delegated sign-out action.

use gloo_net::http::Request;
use web_types::SessionUser;
use yew::prelude::*;

use crate::config;

/// Session state shared with the whole view tree.
///
/// Views read `user` and emit `sign_out`; nothing else may change the
/// session.
#[derive(Clone, PartialEq)]
pub struct Session {
    /// Current identity; `None` means not authenticated.
    pub user: Option<SessionUser>,
    /// False until the startup identity lookup has resolved.
    pub ready: bool,
    /// Delegated sign-out action.
    pub sign_out: Callback<()>,
}

/// Properties for SessionProvider component.
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Html,
}

/// Resolves the current identity once at startup and provides the
/// [`Session`] context to its subtree.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let user = use_state(|| None::<SessionUser>);
    let ready = use_state(|| false);

    // Resolve the current identity from the hosted auth endpoint
    {
        let user = user.clone();
        let ready = ready.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_current_user().await {
                    Ok(current) => user.set(current),
                    Err(e) => {
                        gloo_timers::callback::Timeout::new(0, move || {
                            web_sys::console::error_1(
                                &format!("Failed to resolve session: {}", e).into(),
                            );
                        })
                        .forget();
                    }
                }
                ready.set(true);
            });
        });
    }

    let sign_out = {
        let user = user.clone();
        Callback::from(move |_: ()| {
            let user = user.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = post_sign_out().await {
                    gloo_timers::callback::Timeout::new(0, move || {
                        web_sys::console::error_1(
                            &format!("Sign-out request failed: {}", e).into(),
                        );
                    })
                    .forget();
                }
                // The local identity is dropped either way; token
                // expiry is the service's problem.
                user.set(None);
            });
        })
    };

    let session = Session {
        user: (*user).clone(),
        ready: *ready,
        sign_out,
    };

    html! {
        <ContextProvider<Session> context={session}>
            { props.children.clone() }
        </ContextProvider<Session>>
    }
}

/// Look up the authenticated user; `None` when the service reports the
/// session as anonymous or expired.
async fn fetch_current_user() -> Result<Option<SessionUser>, gloo_net::Error> {
    let resp = Request::get(&format!("{}/auth/v1/user", config::api_base()))
        .header("apikey", config::api_key())
        .header("Authorization", &format!("Bearer {}", config::api_key()))
        .send()
        .await?;

    if !resp.ok() {
        return Ok(None);
    }

    Ok(Some(resp.json::<SessionUser>().await?))
}

async fn post_sign_out() -> Result<(), gloo_net::Error> {
    Request::post(&format!("{}/auth/v1/logout", config::api_base()))
        .header("apikey", config::api_key())
        .header("Authorization", &format!("Bearer {}", config::api_key()))
        .send()
        .await?;

    Ok(())
}
