use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::forms::{edit, timestamp, validate_faq, ADMIN_CSS};
use super::services_table::Dialog;
use crate::components::status::{EmptyState, ErrorPanel, Spinner};
use crate::store::fetch::{use_table, FetchState};
use crate::store::models::{Faq, FaqInput, Service};
use crate::store::{use_store, Query, Table};

/// Empty select value means the FAQ is not tied to a service.
fn service_choice(value: String) -> Option<String> {
    Some(value).filter(|v| !v.is_empty())
}

#[function_component(FaqTable)]
pub fn faq_table() -> Html {
    let store = use_store();
    let faqs = use_table::<Faq>(
        Table::Faqs,
        Query::select("*,Services(name)").order("created_at", false),
        true,
    );
    let services = use_table::<Service>(Table::Services, Query::select("*").order("name", true), false);
    let dialog = use_state(|| Dialog::Closed);
    let draft = use_state(FaqInput::default);
    let pending_delete = use_state(|| None::<Faq>);
    let error = use_state(|| None::<String>);
    let is_saving = use_state(|| false);
    let is_mounted = use_is_mounted();

    let open_new = {
        let dialog = dialog.clone();
        let draft = draft.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(FaqInput::default());
            error.set(None);
            dialog.set(Dialog::New);
        })
    };

    let open_edit = |faq: &Faq| {
        let dialog = dialog.clone();
        let draft = draft.clone();
        let error = error.clone();
        let faq = faq.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(FaqInput::from(&faq));
            error.set(None);
            dialog.set(Dialog::Edit(faq.id.clone()));
        })
    };

    let close = {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(Dialog::Closed))
    };

    let save = {
        let store = store.clone();
        let dialog = dialog.clone();
        let draft = draft.clone();
        let error = error.clone();
        let is_saving = is_saving.clone();
        let reload = faqs.reload.clone();
        let is_mounted = is_mounted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut input = (*draft).clone();
            if let Err(message) = validate_faq(&input) {
                error.set(Some(message.to_string()));
                return;
            }
            let target = (*dialog).clone();
            if let Dialog::Edit(_) = target {
                input.updated_at = Some(timestamp());
            }
            let store = store.clone();
            let dialog = dialog.clone();
            let error = error.clone();
            let is_saving = is_saving.clone();
            let reload = reload.clone();
            let is_mounted = is_mounted.clone();
            is_saving.set(true);
            spawn_local(async move {
                // New rows take created_at from the column default.
                let result = match &target {
                    Dialog::Edit(id) => store.update(Table::Faqs, id, &input).await,
                    _ => store.insert(Table::Faqs, &input).await,
                };
                if !is_mounted() {
                    return;
                }
                is_saving.set(false);
                match result {
                    Ok(()) => {
                        info!("saved faq \"{}\"", input.question);
                        dialog.set(Dialog::Closed);
                        reload.emit(());
                    }
                    Err(e) => {
                        error!("saving faq failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    let confirm_delete = {
        let store = store.clone();
        let pending_delete = pending_delete.clone();
        let error = error.clone();
        let reload = faqs.reload.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(faq) = (*pending_delete).clone() else {
                return;
            };
            let store = store.clone();
            let pending_delete = pending_delete.clone();
            let error = error.clone();
            let reload = reload.clone();
            let is_mounted = is_mounted.clone();
            spawn_local(async move {
                let result = store.delete(Table::Faqs, &faq.id).await;
                if !is_mounted() {
                    return;
                }
                pending_delete.set(None);
                match result {
                    Ok(()) => reload.emit(()),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    let body = match &faqs.state {
        FetchState::Loading => html! { <Spinner /> },
        FetchState::Failed(message) => html! {
            <ErrorPanel message={message.clone()} on_retry={faqs.reload.clone()} />
        },
        FetchState::Loaded(rows) if rows.is_empty() => html! {
            <EmptyState message={AttrValue::from("No FAQs yet.")} />
        },
        FetchState::Loaded(rows) => html! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>{"Question"}</th>
                        <th>{"Answer"}</th>
                        <th>{"Service"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|faq| {
                        let ask_delete = {
                            let pending_delete = pending_delete.clone();
                            let faq = faq.clone();
                            Callback::from(move |_: MouseEvent| pending_delete.set(Some(faq.clone())))
                        };
                        let parent = faq.service.as_ref().map(|s| s.name.clone()).unwrap_or_else(|| "General".to_string());
                        html! {
                            <tr key={faq.id.clone()}>
                                <td>
                                    { &faq.question }
                                    if let Some(ar) = &faq.question_ar {
                                        <div dir="rtl">{ ar }</div>
                                    }
                                </td>
                                <td>{ &faq.answer }</td>
                                <td>{ parent }</td>
                                <td class="admin-actions">
                                    <button class="admin-button secondary" onclick={open_edit(faq)}>{"Edit"}</button>
                                    <button class="admin-button danger" onclick={ask_delete}>{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        },
    };

    let service_options = services.state.rows().unwrap_or_default().to_vec();
    let selected = draft.service_id.clone().unwrap_or_default();

    let editor = if *dialog == Dialog::Closed {
        html! {}
    } else {
        let title = if *dialog == Dialog::New { "Add FAQ" } else { "Edit FAQ" };
        html! {
            <div class="admin-modal-backdrop">
                <form class="admin-modal" onsubmit={save}>
                    <h2>{ title }</h2>
                    if let Some(message) = &*error {
                        <div class="admin-error">{ message }</div>
                    }
                    <label class="admin-field">
                        {"Service (optional)"}
                        <select onchange={edit(&draft, |d, v| d.service_id = service_choice(v))}>
                            <option value="" selected={selected.is_empty()}>{"General"}</option>
                            { for service_options.iter().map(|service| html! {
                                <option key={service.id.clone()} value={service.id.clone()} selected={selected == service.id}>
                                    { &service.name }
                                </option>
                            }) }
                        </select>
                    </label>
                    <label class="admin-field">
                        {"Question"}
                        <input value={draft.question.clone()} onchange={edit(&draft, |d, v| d.question = v)} />
                    </label>
                    <label class="admin-field">
                        {"Answer"}
                        <textarea rows="3" value={draft.answer.clone()} onchange={edit(&draft, |d, v| d.answer = v)} />
                    </label>
                    <label class="admin-field">
                        {"Question (Arabic)"}
                        <input dir="rtl" value={draft.question_ar.clone()} onchange={edit(&draft, |d, v| d.question_ar = v)} />
                    </label>
                    <label class="admin-field">
                        {"Answer (Arabic)"}
                        <textarea dir="rtl" rows="3" value={draft.answer_ar.clone()} onchange={edit(&draft, |d, v| d.answer_ar = v)} />
                    </label>
                    <div class="admin-actions">
                        <button type="submit" class="admin-button" disabled={*is_saving}>
                            { if *is_saving { "Saving..." } else { "Save" } }
                        </button>
                        <button type="button" class="admin-button secondary" onclick={close}>{"Cancel"}</button>
                    </div>
                </form>
            </div>
        }
    };

    let delete_dialog = match &*pending_delete {
        None => html! {},
        Some(faq) => {
            let cancel = {
                let pending_delete = pending_delete.clone();
                Callback::from(move |_: MouseEvent| pending_delete.set(None))
            };
            html! {
                <div class="admin-modal-backdrop">
                    <div class="admin-modal">
                        <h2>{"Delete FAQ"}</h2>
                        <p>{ format!("Delete \"{}\"? This cannot be undone.", faq.question) }</p>
                        <div class="admin-actions">
                            <button class="admin-button danger" onclick={confirm_delete}>{"Delete"}</button>
                            <button class="admin-button secondary" onclick={cancel}>{"Cancel"}</button>
                        </div>
                    </div>
                </div>
            }
        }
    };

    html! {
        <section>
            <div class="admin-toolbar">
                <h1>{"FAQs"}</h1>
                <button class="admin-button" onclick={open_new}>{"Add FAQ"}</button>
            </div>
            if *dialog == Dialog::Closed {
                if let Some(message) = &*error {
                    <div class="admin-error">{ message }</div>
                }
            }
            { body }
            { editor }
            { delete_dialog }
            <style>{ ADMIN_CSS }</style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_service_choice_means_general() {
        assert_eq!(service_choice(String::new()), None);
        assert_eq!(service_choice("s1".into()), Some("s1".to_string()));
    }
}
