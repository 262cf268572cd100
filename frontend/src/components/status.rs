use yew::prelude::*;

use crate::i18n::use_i18n;

#[function_component(Spinner)]
pub fn spinner() -> Html {
    let i18n = use_i18n();
    html! {
        <div class="status-loading" role="status">
            <div class="spinner" />
            <span class="visually-hidden">{ i18n.t("status", "loading", "Loading...") }</span>
            <style>
                {r#"
                .status-loading { display: flex; justify-content: center; padding: 3rem 0; }
                .spinner {
                    width: 3rem; height: 3rem; border-radius: 50%;
                    border: 3px solid #fde68a; border-top-color: #facc15;
                    animation: spin 0.8s linear infinite;
                }
                .visually-hidden { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0 0 0 0); }
                @keyframes spin { to { transform: rotate(360deg); } }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Inline failure notice for one section. The rest of the page keeps working.
#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    let i18n = use_i18n();
    html! {
        <div class="status-error" role="alert">
            <p>{ i18n.t("status", "error", "Something went wrong while loading this section.") }</p>
            <p class="status-error-detail">{ &props.message }</p>
            if let Some(on_retry) = props.on_retry.clone() {
                <button class="status-retry" onclick={on_retry.reform(|_: MouseEvent| ())}>
                    { i18n.t("status", "retry", "Try again") }
                </button>
            }
            <style>
                {r#"
                .status-error {
                    margin: 2rem auto; max-width: 32rem; padding: 1rem 1.25rem;
                    border: 1px solid #fecaca; background: #fef2f2; color: #b91c1c;
                    border-radius: 0.5rem; text-align: center;
                }
                .status-error-detail { font-size: 0.8rem; opacity: 0.8; }
                .status-retry {
                    margin-top: 0.75rem; padding: 0.4rem 1rem; border-radius: 9999px;
                    border: none; background: #facc15; color: white; cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    let i18n = use_i18n();
    let message = props
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| i18n.t("status", "empty", "Nothing here yet."));
    html! {
        <p class="status-empty" style="text-align: center; color: #6b7280; padding: 2rem 0;">{ message }</p>
    }
}
