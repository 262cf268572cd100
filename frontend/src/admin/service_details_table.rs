use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::forms::{edit, join_lines, split_lines, timestamp, validate_detail, ADMIN_CSS};
use super::services_table::Dialog;
use crate::components::status::{EmptyState, ErrorPanel, Spinner};
use crate::store::fetch::{use_table, FetchState};
use crate::store::models::{ProcessStep, Service, ServiceDetail, ServiceDetailInput};
use crate::store::storage::upload_portfolio_image;
use crate::store::{use_store, Query, Table};

#[function_component(ServiceDetailsTable)]
pub fn service_details_table() -> Html {
    let store = use_store();
    let details = use_table::<ServiceDetail>(
        Table::ServiceDetails,
        Query::select("*,Services(name)").order("name", true),
        true,
    );
    let services = use_table::<Service>(Table::Services, Query::select("*").order("name", true), true);
    let dialog = use_state(|| Dialog::Closed);
    let draft = use_state(ServiceDetailInput::default);
    let pending_delete = use_state(|| None::<ServiceDetail>);
    let error = use_state(|| None::<String>);
    let is_saving = use_state(|| false);
    let is_uploading = use_state(|| false);
    let is_mounted = use_is_mounted();

    let open_new = {
        let dialog = dialog.clone();
        let draft = draft.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(ServiceDetailInput::default());
            error.set(None);
            dialog.set(Dialog::New);
        })
    };

    let open_edit = |detail: &ServiceDetail| {
        let dialog = dialog.clone();
        let draft = draft.clone();
        let error = error.clone();
        let detail = detail.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(ServiceDetailInput::from(&detail));
            error.set(None);
            dialog.set(Dialog::Edit(detail.id.clone()));
        })
    };

    let close = {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(Dialog::Closed))
    };

    let on_upload = {
        let store = store.clone();
        let draft = draft.clone();
        let error = error.clone();
        let is_uploading = is_uploading.clone();
        let is_mounted = is_mounted.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");
            let store = store.clone();
            let draft = draft.clone();
            let error = error.clone();
            let is_uploading = is_uploading.clone();
            let is_mounted = is_mounted.clone();
            is_uploading.set(true);
            spawn_local(async move {
                let result = upload_portfolio_image(&store, &file).await;
                if !is_mounted() {
                    return;
                }
                is_uploading.set(false);
                match result {
                    Ok(url) => {
                        let mut next = (*draft).clone();
                        next.graphic_design_portfolio.push(url);
                        draft.set(next);
                    }
                    Err(e) => {
                        error!("image upload failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    let remove_image = |index: usize| {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            if index < next.graphic_design_portfolio.len() {
                next.graphic_design_portfolio.remove(index);
            }
            draft.set(next);
        })
    };

    let add_step = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.process.push(ProcessStep::default());
            draft.set(next);
        })
    };

    let remove_step = |index: usize| {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            if index < next.process.len() {
                next.process.remove(index);
            }
            draft.set(next);
        })
    };

    let save = {
        let store = store.clone();
        let dialog = dialog.clone();
        let draft = draft.clone();
        let error = error.clone();
        let is_saving = is_saving.clone();
        let reload = details.reload.clone();
        let is_mounted = is_mounted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut input = (*draft).clone();
            if let Err(message) = validate_detail(&input) {
                error.set(Some(message.to_string()));
                return;
            }
            input.process.retain(|step| !step.title.trim().is_empty());
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
                    Dialog::Edit(id) => store.update(Table::ServiceDetails, id, &input).await,
                    _ => store.insert(Table::ServiceDetails, &input).await,
                };
                if !is_mounted() {
                    return;
                }
                is_saving.set(false);
                match result {
                    Ok(()) => {
                        info!("saved service detail {}", input.name);
                        dialog.set(Dialog::Closed);
                        reload.emit(());
                    }
                    Err(e) => {
                        error!("saving service detail failed: {}", e);
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
        let reload = details.reload.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(detail) = (*pending_delete).clone() else {
                return;
            };
            let store = store.clone();
            let pending_delete = pending_delete.clone();
            let error = error.clone();
            let reload = reload.clone();
            let is_mounted = is_mounted.clone();
            spawn_local(async move {
                let result = store.delete(Table::ServiceDetails, &detail.id).await;
                if !is_mounted() {
                    return;
                }
                pending_delete.set(None);
                match result {
                    Ok(()) => {
                        info!("deleted service detail {}", detail.name);
                        reload.emit(());
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    let body = match &details.state {
        FetchState::Loading => html! { <Spinner /> },
        FetchState::Failed(message) => html! {
            <ErrorPanel message={message.clone()} on_retry={details.reload.clone()} />
        },
        FetchState::Loaded(rows) if rows.is_empty() => html! {
            <EmptyState message={AttrValue::from("No service details yet.")} />
        },
        FetchState::Loaded(rows) => html! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Service"}</th>
                        <th>{"Description"}</th>
                        <th>{"Images"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|detail| {
                        let ask_delete = {
                            let pending_delete = pending_delete.clone();
                            let detail = detail.clone();
                            Callback::from(move |_: MouseEvent| pending_delete.set(Some(detail.clone())))
                        };
                        let parent = detail.service.as_ref().map(|s| s.name.clone()).unwrap_or_else(|| "-".to_string());
                        let images = detail.graphic_design_portfolio.as_ref().map_or(0, Vec::len);
                        html! {
                            <tr key={detail.id.clone()}>
                                <td>{ &detail.name }</td>
                                <td>{ parent }</td>
                                <td>{ &detail.description }</td>
                                <td>{ images.to_string() }</td>
                                <td class="admin-actions">
                                    <button class="admin-button secondary" onclick={open_edit(detail)}>{"Edit"}</button>
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

    let editor = if *dialog == Dialog::Closed {
        html! {}
    } else {
        let title = if *dialog == Dialog::New { "Add Service Detail" } else { "Edit Service Detail" };
        html! {
            <div class="admin-modal-backdrop">
                <form class="admin-modal" onsubmit={save}>
                    <h2>{ title }</h2>
                    if let Some(message) = &*error {
                        <div class="admin-error">{ message }</div>
                    }
                    <label class="admin-field">
                        {"Service"}
                        <select onchange={edit(&draft, |d, v| d.service_id = v)}>
                            <option value="" selected={draft.service_id.is_empty()}>{"Select a service"}</option>
                            { for service_options.iter().map(|service| html! {
                                <option
                                    key={service.id.clone()}
                                    value={service.id.clone()}
                                    selected={draft.service_id == service.id}
                                >
                                    { &service.name }
                                </option>
                            }) }
                        </select>
                    </label>
                    <label class="admin-field">
                        {"Name"}
                        <input value={draft.name.clone()} onchange={edit(&draft, |d, v| d.name = v)} />
                    </label>
                    <label class="admin-field">
                        {"Description"}
                        <textarea rows="2" value={draft.description.clone()} onchange={edit(&draft, |d, v| d.description = v)} />
                    </label>
                    <label class="admin-field">
                        {"Details"}
                        <textarea rows="2" value={draft.details.clone()} onchange={edit(&draft, |d, v| d.details = v)} />
                    </label>
                    <label class="admin-field">
                        {"Long description"}
                        <textarea rows="4" value={draft.long_description.clone()} onchange={edit(&draft, |d, v| d.long_description = v)} />
                    </label>

                    <div class="admin-field">
                        {"Portfolio images"}
                        <div class="admin-thumbs">
                            { for draft.graphic_design_portfolio.iter().enumerate().map(|(index, url)| html! {
                                <div class="admin-thumb" key={url.clone()}>
                                    <img src={url.clone()} alt={format!("Portfolio image {}", index + 1)} />
                                    <button type="button" onclick={remove_image(index)} aria-label="Remove image">{"×"}</button>
                                </div>
                            }) }
                        </div>
                        <input
                            type="file"
                            accept="image/jpeg,image/png,image/gif,image/webp"
                            onchange={on_upload}
                            disabled={*is_uploading}
                        />
                        if *is_uploading {
                            <Spinner />
                        }
                    </div>
                    <label class="admin-field">
                        {"Portfolio URLs (one per line)"}
                        <textarea
                            rows="3"
                            value={join_lines(&draft.graphic_design_portfolio)}
                            onchange={edit(&draft, |d, v| d.graphic_design_portfolio = split_lines(&v))}
                        />
                    </label>

                    <div class="admin-field">
                        {"Process steps"}
                        { for draft.process.iter().enumerate().map(|(index, step)| html! {
                            <div class="admin-step" key={index}>
                                <input
                                    placeholder="Title"
                                    value={step.title.clone()}
                                    onchange={edit(&draft, move |d, v| if let Some(s) = d.process.get_mut(index) { s.title = v })}
                                />
                                <textarea
                                    placeholder="Description"
                                    rows="2"
                                    value={step.description.clone()}
                                    onchange={edit(&draft, move |d, v| if let Some(s) = d.process.get_mut(index) { s.description = v })}
                                />
                                <input
                                    placeholder="Icon"
                                    value={step.icon.clone()}
                                    onchange={edit(&draft, move |d, v| if let Some(s) = d.process.get_mut(index) { s.icon = v })}
                                />
                                <button type="button" class="admin-button danger" onclick={remove_step(index)}>{"Remove step"}</button>
                            </div>
                        }) }
                        <button type="button" class="admin-button secondary" onclick={add_step}>{"Add step"}</button>
                    </div>

                    <label class="admin-field">
                        {"Benefits (one per line)"}
                        <textarea
                            rows="3"
                            value={join_lines(&draft.benefits)}
                            onchange={edit(&draft, |d, v| d.benefits = split_lines(&v))}
                        />
                    </label>
                    <label class="admin-field">
                        {"CTA title"}
                        <input value={draft.cta.title.clone()} onchange={edit(&draft, |d, v| d.cta.title = v)} />
                    </label>
                    <label class="admin-field">
                        {"CTA description"}
                        <textarea rows="2" value={draft.cta.description.clone()} onchange={edit(&draft, |d, v| d.cta.description = v)} />
                    </label>
                    <div class="admin-actions">
                        <button type="submit" class="admin-button" disabled={*is_saving || *is_uploading}>
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
        Some(detail) => {
            let cancel = {
                let pending_delete = pending_delete.clone();
                Callback::from(move |_: MouseEvent| pending_delete.set(None))
            };
            html! {
                <div class="admin-modal-backdrop">
                    <div class="admin-modal">
                        <h2>{"Delete Service Detail"}</h2>
                        <p>{ format!("Delete \"{}\"? This cannot be undone.", detail.name) }</p>
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
                <h1>{"Service Details"}</h1>
                <button class="admin-button" onclick={open_new}>{"Add Service Detail"}</button>
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
