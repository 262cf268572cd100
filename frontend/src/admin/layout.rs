use chrono::Utc;
use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use super::forms::event_value;
use crate::components::status::Spinner;
use crate::store::auth::{
    get_session, on_auth_state_change, refresh_session, sign_in_with_password, sign_out, AuthEvent, Session,
};
use crate::store::use_store;
use crate::Route;

#[derive(Clone, Debug, PartialEq)]
enum SessionState {
    Loading,
    SignedOut,
    SignedIn(Session),
}

/// Timer delay for a refresh `delay_secs` away, capped at what a browser
/// timer can hold.
fn refresh_millis(delay_secs: i64) -> u32 {
    delay_secs.saturating_mul(1000).clamp(0, i32::MAX as i64) as u32
}

#[function_component(LoginForm)]
fn login_form() -> Html {
    let store = use_store();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let is_mounted = use_is_mounted();

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let store = store.clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let is_mounted = is_mounted.clone();
            is_loading.set(true);
            error.set(None);
            spawn_local(async move {
                let result = sign_in_with_password(&store, &email, &password).await;
                if !is_mounted() {
                    return;
                }
                // A successful sign in swaps this form out via the auth event.
                if let Err(e) = result {
                    error.set(Some(e.to_string()));
                }
                is_loading.set(false);
            });
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: Event| email.set(event_value(&e)))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: Event| password.set(event_value(&e)))
    };

    html! {
        <div class="admin-login">
            <form class="admin-login-card" {onsubmit}>
                <h1>{"Admin Login"}</h1>
                if let Some(message) = &*error {
                    <div class="admin-error">{ message }</div>
                }
                <label class="admin-field">
                    {"Email"}
                    <input type="email" value={(*email).clone()} onchange={on_email} required=true />
                </label>
                <label class="admin-field">
                    {"Password"}
                    <input type="password" value={(*password).clone()} onchange={on_password} required=true />
                </label>
                <button type="submit" class="admin-button" disabled={*is_loading}>
                    { if *is_loading { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub active: Route,
    #[prop_or_default]
    pub children: Children,
}

/// Session gate and tab bar around every admin table.
#[function_component(AdminLayout)]
pub fn admin_layout(props: &AdminLayoutProps) -> Html {
    let store = use_store();
    let session = use_state(|| SessionState::Loading);

    {
        let session = session.clone();
        use_effect_with_deps(
            move |_| {
                session.set(match get_session() {
                    Some(s) => SessionState::SignedIn(s),
                    None => SessionState::SignedOut,
                });
                let subscription = on_auth_state_change(move |event| {
                    session.set(match event {
                        AuthEvent::SignedIn(s) => SessionState::SignedIn(s.clone()),
                        AuthEvent::SignedOut => SessionState::SignedOut,
                    });
                });
                move || drop(subscription)
            },
            (),
        );
    }

    // Swap the token shortly before it expires. A successful refresh emits
    // SignedIn, which schedules the next one.
    {
        let store = store.clone();
        let signed_in = match &*session {
            SessionState::SignedIn(s) => Some(s.clone()),
            _ => None,
        };
        use_effect_with_deps(
            move |signed_in: &Option<Session>| {
                let timeout = signed_in.clone().map(|s| {
                    let millis = refresh_millis(s.refresh_delay_at(Utc::now().timestamp()));
                    Timeout::new(millis, move || {
                        spawn_local(async move {
                            let _ = refresh_session(&store, &s).await;
                        });
                    })
                });
                move || drop(timeout)
            },
            signed_in,
        );
    }

    let logout = Callback::from(move |_: MouseEvent| {
        let store = store.clone();
        spawn_local(async move {
            sign_out(&store).await;
        });
    });

    let user = match &*session {
        SessionState::Loading => {
            return html! {
                <div class="admin-shell"><Spinner /></div>
            };
        }
        SessionState::SignedOut => {
            info!("Rendering admin login");
            return html! {
                <>
                    <LoginForm />
                    <style>{ ADMIN_SHELL_CSS }</style>
                </>
            };
        }
        SessionState::SignedIn(s) => s.user.email.clone().unwrap_or_else(|| s.user.id.clone()),
    };

    let tab = |route: Route, label: &'static str| {
        let is_active = props.active == route
            || (props.active == Route::Admin && route == Route::AdminServices);
        html! {
            <Link<Route> to={route} classes={classes!("admin-tab", is_active.then_some("active"))}>
                { label }
            </Link<Route>>
        }
    };

    html! {
        <div class="admin-shell">
            <header class="admin-header">
                <Link<Route> to={Route::Home} classes="admin-brand">{"Why Media Admin"}</Link<Route>>
                <div class="admin-user">
                    <span>{ user }</span>
                    <button class="admin-button secondary" onclick={logout}>{"Logout"}</button>
                </div>
            </header>
            <nav class="admin-tabs">
                { tab(Route::AdminServices, "Services") }
                { tab(Route::AdminServiceDetails, "Service Details") }
                { tab(Route::AdminFaqs, "FAQs") }
            </nav>
            <div class="admin-content">
                { for props.children.iter() }
            </div>
            <style>{ ADMIN_SHELL_CSS }</style>
        </div>
    }
}

const ADMIN_SHELL_CSS: &str = r#"
.admin-shell { min-height: 100vh; background: #f3f4f6; padding: 1.5rem; }
.admin-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
.admin-brand { font-size: 1.25rem; font-weight: 700; color: #111827; text-decoration: none; }
.admin-user { display: flex; align-items: center; gap: 0.75rem; color: #4b5563; }
.admin-tabs { display: flex; gap: 0.5rem; border-bottom: 1px solid #e5e7eb; margin-bottom: 1.5rem; }
.admin-tab { padding: 0.6rem 1rem; color: #4b5563; text-decoration: none; border-bottom: 2px solid transparent; }
.admin-tab.active { color: #111827; border-bottom-color: #facc15; font-weight: 600; }
.admin-login { min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #f3f4f6; }
.admin-login-card { background: white; padding: 2rem; border-radius: 1rem; width: min(24rem, 92vw); box-shadow: 0 8px 32px rgba(0,0,0,0.08); }
.admin-login-card h1 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
.admin-login-card .admin-field { display: flex; flex-direction: column; gap: 0.25rem; margin-bottom: 0.75rem; }
.admin-login-card input { padding: 0.5rem; border: 1px solid #d1d5db; border-radius: 0.5rem; }
.admin-login-card .admin-button { width: 100%; padding: 0.6rem; border: none; border-radius: 0.5rem; background: #facc15; cursor: pointer; }
.admin-login-card .admin-error { background: #fee2e2; color: #b91c1c; padding: 0.5rem 0.75rem; border-radius: 0.5rem; margin-bottom: 0.75rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_timer_fits_browser_range() {
        assert_eq!(refresh_millis(0), 0);
        assert_eq!(refresh_millis(-5), 0);
        assert_eq!(refresh_millis(3_540), 3_540_000);
        assert_eq!(refresh_millis(i64::MAX), i32::MAX as u32);
    }
}
