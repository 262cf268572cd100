use gloo_timers::future::TimeoutFuture;
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::use_is_mounted;

use crate::components::reveal::ScrollTrigger;
use crate::i18n::{use_i18n, I18n};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern"));

const SEND_DELAY_MILLIS: u32 = 1_500;
const SUCCESS_MILLIS: u32 = 5_000;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

impl FieldError {
    fn message(&self, field: Field, i18n: &I18n) -> String {
        match (field, self) {
            (Field::Name, _) => i18n.t("contact", "validation.name", "Name is required"),
            (Field::Email, FieldError::Required) => {
                i18n.t("contact", "validation.email.required", "Email is required")
            }
            (Field::Email, FieldError::InvalidEmail) => {
                i18n.t("contact", "validation.email.invalid", "Email is invalid")
            }
            (Field::Subject, _) => i18n.t("contact", "validation.subject", "Subject is required"),
            (Field::Message, _) => i18n.t("contact", "validation.message", "Message is required"),
        }
    }
}

pub type FieldErrors = Vec<(Field, FieldError)>;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Every problem with `form`, in field order. Empty means it can be sent.
pub fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = Vec::new();
    if form.name.trim().is_empty() {
        errors.push((Field::Name, FieldError::Required));
    }
    if form.email.trim().is_empty() {
        errors.push((Field::Email, FieldError::Required));
    } else if !is_valid_email(&form.email) {
        errors.push((Field::Email, FieldError::InvalidEmail));
    }
    if form.subject.trim().is_empty() {
        errors.push((Field::Subject, FieldError::Required));
    }
    if form.message.trim().is_empty() {
        errors.push((Field::Message, FieldError::Required));
    }
    errors
}

fn error_for(errors: &FieldErrors, field: Field) -> Option<FieldError> {
    errors.iter().find(|(f, _)| *f == field).map(|(_, e)| *e)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Idle,
    Sending,
    Sent,
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let i18n = use_i18n();
    let form = use_state(ContactForm::default);
    let errors = use_state(FieldErrors::new);
    let status = use_state(|| Status::Idle);
    let is_mounted = use_is_mounted();

    let on_edit = |field: Field| {
        let form = form.clone();
        let errors = errors.clone();
        move |value: String| {
            let mut next = (*form).clone();
            match field {
                Field::Name => next.name = value,
                Field::Email => next.email = value,
                Field::Subject => next.subject = value,
                Field::Message => next.message = value,
            }
            form.set(next);
            // Editing a field clears only that field's error.
            if error_for(&errors, field).is_some() {
                errors.set(errors.iter().filter(|(f, _)| *f != field).cloned().collect());
            }
        }
    };
    let input = |field: Field| {
        let edit = on_edit(field);
        Callback::from(move |e: InputEvent| edit(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_message = {
        let edit = on_edit(Field::Message);
        Callback::from(move |e: InputEvent| edit(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let problems = validate(&form);
            let ok = problems.is_empty();
            errors.set(problems);
            if !ok || *status != Status::Idle {
                return;
            }
            status.set(Status::Sending);
            let form = form.clone();
            let status = status.clone();
            let is_mounted = is_mounted.clone();
            spawn_local(async move {
                TimeoutFuture::new(SEND_DELAY_MILLIS).await;
                if !is_mounted() {
                    return;
                }
                info!("contact message accepted");
                form.set(ContactForm::default());
                status.set(Status::Sent);
                TimeoutFuture::new(SUCCESS_MILLIS).await;
                if is_mounted() {
                    status.set(Status::Idle);
                }
            });
        })
    };

    let field_error = |field: Field| -> Html {
        match error_for(&errors, field) {
            Some(error) => html! { <p class="field-error">{ error.message(field, &i18n) }</p> },
            None => html! {},
        }
    };
    let field_class = |field: Field| classes!("contact-input", error_for(&errors, field).map(|_| "invalid"));

    let body = if *status == Status::Sent {
        html! {
            <div class="contact-success">
                <div class="contact-success-icon">{"✔"}</div>
                <h3>{ i18n.t("contact", "success.title", "Message Sent Successfully!") }</h3>
                <p>{ i18n.t("contact", "success.message", "Thank you for reaching out. We'll get back to you shortly.") }</p>
            </div>
        }
    } else {
        html! {
            <form class="contact-form" {onsubmit}>
                <div class="contact-row">
                    <div>
                        <label for="name">{ i18n.t("contact", "form.name.label", "Your Name") }</label>
                        <input id="name" name="name" class={field_class(Field::Name)}
                            value={form.name.clone()} oninput={input(Field::Name)}
                            placeholder={i18n.t("contact", "form.name.placeholder", "John Doe")} />
                        { field_error(Field::Name) }
                    </div>
                    <div>
                        <label for="email">{ i18n.t("contact", "form.email.label", "Email Address") }</label>
                        <input id="email" name="email" type="text" inputmode="email" class={field_class(Field::Email)}
                            value={form.email.clone()} oninput={input(Field::Email)}
                            placeholder={i18n.t("contact", "form.email.placeholder", "john@example.com")} />
                        { field_error(Field::Email) }
                    </div>
                </div>
                <div>
                    <label for="subject">{ i18n.t("contact", "form.subject.label", "Subject") }</label>
                    <input id="subject" name="subject" class={field_class(Field::Subject)}
                        value={form.subject.clone()} oninput={input(Field::Subject)}
                        placeholder={i18n.t("contact", "form.subject.placeholder", "How can we help you?")} />
                    { field_error(Field::Subject) }
                </div>
                <div>
                    <label for="message">{ i18n.t("contact", "form.message.label", "Your Message") }</label>
                    <textarea id="message" name="message" rows="5" class={field_class(Field::Message)}
                        value={form.message.clone()} oninput={on_message}
                        placeholder={i18n.t("contact", "form.message.placeholder", "Tell us about your project or inquiry...")} />
                    { field_error(Field::Message) }
                </div>
                <div class="contact-actions">
                    <button type="submit" class="contact-submit" disabled={*status != Status::Idle}>
                        {
                            if *status == Status::Sending {
                                i18n.t("contact", "form.sending", "Sending...")
                            } else {
                                i18n.t("contact", "form.button", "Send Message")
                            }
                        }
                    </button>
                </div>
            </form>
        }
    };

    html! {
        <div class="contact">
            <ScrollTrigger threshold={0.1} duration={0.6}>
                <div class="section-heading">
                    <h2>
                        <span class="heading-dark">{ i18n.t("contact", "get", "Get In ") }</span>
                        <span class="heading-accent">{ i18n.t("contact", "touch", "Touch") }</span>
                    </h2>
                    <p>{ i18n.t("contact", "subtitle", "Have a project in mind or want to learn more about our services? Send us a message and we'll get back to you as soon as possible.") }</p>
                </div>
            </ScrollTrigger>
            <div class="contact-card">{ body }</div>
            <style>
                {r#"
                .contact { max-width: 72rem; margin: 0 auto; padding: 5rem 1rem; scroll-margin-top: 100px; }
                .contact-card { background: rgba(255,255,255,0.9); border-radius: 0.75rem; padding: 2rem; box-shadow: 0 10px 25px rgba(0,0,0,0.08); }
                .contact-form > div { margin-bottom: 1.5rem; }
                .contact-row { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); }
                .contact-form label { display: block; font-size: 0.875rem; font-weight: 500; color: #374151; margin-bottom: 0.25rem; }
                .contact-input { width: 100%; padding: 0.6rem 0.75rem; border: 1px solid #e5e7eb; border-radius: 0.375rem; }
                .contact-input.invalid { border-color: #ef4444; }
                .field-error { margin-top: 0.25rem; font-size: 0.875rem; color: #ef4444; }
                .contact-actions { text-align: center; }
                .contact-submit {
                    padding: 1rem 2rem; border: none; border-radius: 9999px; color: white; font-weight: 500;
                    background: linear-gradient(to right, #facc15, #fde047); cursor: pointer;
                }
                .contact-submit:disabled { opacity: 0.7; cursor: default; }
                .contact-success { text-align: center; padding: 3rem 0; }
                .contact-success-icon { font-size: 3rem; color: #22c55e; }
                .contact-success h3 { color: #16a34a; font-size: 1.5rem; font-weight: 700; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Lina".into(),
            email: "lina@example.com".into(),
            subject: "Logo".into(),
            message: "We need a new logo.".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(validate(&filled()).is_empty());
    }

    #[test]
    fn blank_fields_are_required() {
        let errors = validate(&ContactForm {
            name: "   ".into(),
            ..ContactForm::default()
        });
        assert_eq!(
            errors,
            vec![
                (Field::Name, FieldError::Required),
                (Field::Email, FieldError::Required),
                (Field::Subject, FieldError::Required),
                (Field::Message, FieldError::Required),
            ]
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        let form = ContactForm {
            email: "lina@example".into(),
            ..filled()
        };
        assert_eq!(validate(&form), vec![(Field::Email, FieldError::InvalidEmail)]);
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@."));
        assert!(!is_valid_email("plain"));
    }
}
