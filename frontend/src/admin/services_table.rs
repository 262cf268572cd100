use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::forms::{edit, join_lines, split_lines, timestamp, validate_service, ADMIN_CSS};
use crate::components::status::{EmptyState, ErrorPanel, Spinner};
use crate::store::fetch::{use_table, FetchState};
use crate::store::models::{Service, ServiceInput};
use crate::store::{use_store, Query, Table};

#[derive(Clone, Debug, PartialEq)]
pub enum Dialog {
    Closed,
    New,
    Edit(String),
}

#[function_component(ServicesTable)]
pub fn services_table() -> Html {
    let store = use_store();
    let services = use_table::<Service>(Table::Services, Query::select("*").order("name", true), true);
    let dialog = use_state(|| Dialog::Closed);
    let draft = use_state(ServiceInput::default);
    let pending_delete = use_state(|| None::<Service>);
    let error = use_state(|| None::<String>);
    let is_saving = use_state(|| false);
    let is_mounted = use_is_mounted();

    let open_new = {
        let dialog = dialog.clone();
        let draft = draft.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(ServiceInput::default());
            error.set(None);
            dialog.set(Dialog::New);
        })
    };

    let open_edit = |service: &Service| {
        let dialog = dialog.clone();
        let draft = draft.clone();
        let error = error.clone();
        let service = service.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(ServiceInput::from(&service));
            error.set(None);
            dialog.set(Dialog::Edit(service.id.clone()));
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
        let reload = services.reload.clone();
        let is_mounted = is_mounted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut input = (*draft).clone();
            if let Err(message) = validate_service(&input) {
                error.set(Some(message.to_string()));
                return;
            }
            let target = (*dialog).clone();
            match &target {
                Dialog::New => input.created_at = Some(timestamp()),
                _ => input.updated_at = Some(timestamp()),
            }
            let store = store.clone();
            let dialog = dialog.clone();
            let error = error.clone();
            let is_saving = is_saving.clone();
            let reload = reload.clone();
            let is_mounted = is_mounted.clone();
            is_saving.set(true);
            spawn_local(async move {
                let result = match &target {
                    Dialog::Edit(id) => store.update(Table::Services, id, &input).await,
                    _ => store.insert(Table::Services, &input).await,
                };
                if !is_mounted() {
                    return;
                }
                is_saving.set(false);
                match result {
                    Ok(()) => {
                        info!("saved service {}", input.name);
                        dialog.set(Dialog::Closed);
                        reload.emit(());
                    }
                    Err(e) => {
                        error!("saving service failed: {}", e);
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
        let reload = services.reload.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(service) = (*pending_delete).clone() else {
                return;
            };
            let store = store.clone();
            let pending_delete = pending_delete.clone();
            let error = error.clone();
            let reload = reload.clone();
            let is_mounted = is_mounted.clone();
            spawn_local(async move {
                let result = store.delete(Table::Services, &service.id).await;
                if !is_mounted() {
                    return;
                }
                pending_delete.set(None);
                match result {
                    Ok(()) => {
                        info!("deleted service {}", service.name);
                        reload.emit(());
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    let body = match &services.state {
        FetchState::Loading => html! { <Spinner /> },
        FetchState::Failed(message) => html! {
            <ErrorPanel message={message.clone()} on_retry={services.reload.clone()} />
        },
        FetchState::Loaded(rows) if rows.is_empty() => html! {
            <EmptyState message={AttrValue::from("No services yet.")} />
        },
        FetchState::Loaded(rows) => html! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Description"}</th>
                        <th>{"Skills"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|service| {
                        let ask_delete = {
                            let pending_delete = pending_delete.clone();
                            let service = service.clone();
                            Callback::from(move |_: MouseEvent| pending_delete.set(Some(service.clone())))
                        };
                        html! {
                            <tr key={service.id.clone()}>
                                <td>
                                    { &service.name }
                                    if let Some(ar) = &service.name_ar {
                                        <div dir="rtl" class="admin-muted">{ ar }</div>
                                    }
                                </td>
                                <td>{ &service.description }</td>
                                <td>{ service.technical_skills_tools.as_ref().map(|s| s.join(", ")).unwrap_or_default() }</td>
                                <td class="admin-actions">
                                    <button class="admin-button secondary" onclick={open_edit(service)}>{"Edit"}</button>
                                    <button class="admin-button danger" onclick={ask_delete}>{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        },
    };

    let editor = if *dialog == Dialog::Closed {
        html! {}
    } else {
        let title = if *dialog == Dialog::New { "Add Service" } else { "Edit Service" };
        html! {
            <div class="admin-modal-backdrop">
                <form class="admin-modal" onsubmit={save}>
                    <h2>{ title }</h2>
                    if let Some(message) = &*error {
                        <div class="admin-error">{ message }</div>
                    }
                    <label class="admin-field">
                        {"Name"}
                        <input value={draft.name.clone()} onchange={edit(&draft, |d, v| d.name = v)} />
                    </label>
                    <label class="admin-field">
                        {"Name (Arabic)"}
                        <input dir="rtl" value={draft.name_ar.clone()} onchange={edit(&draft, |d, v| d.name_ar = v)} />
                    </label>
                    <label class="admin-field">
                        {"Description"}
                        <textarea rows="3" value={draft.description.clone()} onchange={edit(&draft, |d, v| d.description = v)} />
                    </label>
                    <label class="admin-field">
                        {"Description (Arabic)"}
                        <textarea dir="rtl" rows="3" value={draft.description_ar.clone()} onchange={edit(&draft, |d, v| d.description_ar = v)} />
                    </label>
                    <label class="admin-field">
                        {"Technical skills and tools (one per line)"}
                        <textarea
                            rows="4"
                            value={join_lines(&draft.technical_skills_tools)}
                            onchange={edit(&draft, |d, v| d.technical_skills_tools = split_lines(&v))}
                        />
                    </label>
                    <label class="admin-field">
                        {"Technical skills and tools (Arabic, one per line)"}
                        <textarea
                            dir="rtl"
                            rows="4"
                            value={join_lines(&draft.technical_skills_tools_ar)}
                            onchange={edit(&draft, |d, v| d.technical_skills_tools_ar = split_lines(&v))}
                        />
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
        Some(service) => {
            let cancel = {
                let pending_delete = pending_delete.clone();
                Callback::from(move |_: MouseEvent| pending_delete.set(None))
            };
            html! {
                <div class="admin-modal-backdrop">
                    <div class="admin-modal">
                        <h2>{"Delete Service"}</h2>
                        <p>{ format!("Delete \"{}\"? This cannot be undone.", service.name) }</p>
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
                <h1>{"Services"}</h1>
                <button class="admin-button" onclick={open_new}>{"Add Service"}</button>
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
