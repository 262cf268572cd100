use chrono::{SecondsFormat, Utc};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::store::models::{FaqInput, ServiceDetailInput, ServiceInput};

/// Splits a textarea into list items, one per non-blank line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_lines(items: &[String]) -> String {
    items.join("\n")
}

/// ISO-8601 timestamp written into `created_at` / `updated_at`.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn validate_service(input: &ServiceInput) -> Result<(), &'static str> {
    if input.name.trim().is_empty() || input.description.trim().is_empty() {
        return Err("Name and description are required");
    }
    Ok(())
}

pub fn validate_detail(input: &ServiceDetailInput) -> Result<(), &'static str> {
    if input.service_id.trim().is_empty()
        || input.name.trim().is_empty()
        || input.description.trim().is_empty()
    {
        return Err("Service ID, name, and description are required");
    }
    Ok(())
}

pub fn validate_faq(input: &FaqInput) -> Result<(), &'static str> {
    if input.question.trim().is_empty() || input.answer.trim().is_empty() {
        return Err("Question and answer are required");
    }
    Ok(())
}

/// Current value of the input, textarea or select that fired `e`.
pub fn event_value(e: &Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Callback that applies the edited value to a copy of the draft.
pub fn edit<T: Clone + 'static>(
    draft: &UseStateHandle<T>,
    apply: impl Fn(&mut T, String) + 'static,
) -> Callback<Event> {
    let draft = draft.clone();
    Callback::from(move |e: Event| {
        let mut next = (*draft).clone();
        apply(&mut next, event_value(&e));
        draft.set(next);
    })
}

/// Shared look of the admin tables and dialogs.
pub const ADMIN_CSS: &str = r#"
.admin-toolbar { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
.admin-table { width: 100%; border-collapse: collapse; background: white; border-radius: 0.75rem; overflow: hidden; }
.admin-table th, .admin-table td { padding: 0.75rem 1rem; text-align: start; border-bottom: 1px solid #e5e7eb; vertical-align: top; }
.admin-table th { background: #f9fafb; font-weight: 600; }
.admin-actions { display: flex; gap: 0.5rem; }
.admin-button { padding: 0.5rem 1rem; border-radius: 0.5rem; border: none; background: #facc15; color: #111827; cursor: pointer; font-weight: 500; }
.admin-button.secondary { background: #e5e7eb; }
.admin-button.danger { background: #ef4444; color: white; }
.admin-button:disabled { opacity: 0.6; cursor: default; }
.admin-error { background: #fee2e2; color: #b91c1c; padding: 0.75rem 1rem; border-radius: 0.5rem; margin-bottom: 1rem; }
.admin-modal-backdrop { position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center; z-index: 100; }
.admin-modal { background: white; border-radius: 1rem; padding: 1.5rem; width: min(40rem, 92vw); max-height: 90vh; overflow-y: auto; }
.admin-field { display: flex; flex-direction: column; gap: 0.25rem; margin-bottom: 0.75rem; }
.admin-field input, .admin-field textarea, .admin-field select { padding: 0.5rem; border: 1px solid #d1d5db; border-radius: 0.5rem; font: inherit; }
.admin-thumbs { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.admin-thumb { position: relative; }
.admin-thumb img { width: 6rem; height: 4.5rem; object-fit: cover; border-radius: 0.5rem; }
.admin-thumb button { position: absolute; top: 0.2rem; inset-inline-end: 0.2rem; border: none; border-radius: 50%; background: rgba(0,0,0,0.6); color: white; cursor: pointer; }
.admin-step { border: 1px solid #e5e7eb; border-radius: 0.5rem; padding: 0.75rem; margin-bottom: 0.5rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_dropped() {
        assert_eq!(
            split_lines("Figma\n\n  Photoshop  \n\t\nIllustrator"),
            vec!["Figma", "Photoshop", "Illustrator"]
        );
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn lines_join_back_with_newlines() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(join_lines(&items), "a\nb");
        assert_eq!(split_lines(&join_lines(&items)), items);
    }

    #[test]
    fn detail_requires_service_name_and_description() {
        let mut input = ServiceDetailInput {
            name: "Web".into(),
            description: "Sites".into(),
            ..ServiceDetailInput::default()
        };
        assert_eq!(
            validate_detail(&input),
            Err("Service ID, name, and description are required")
        );
        input.service_id = "s1".into();
        assert_eq!(validate_detail(&input), Ok(()));
        input.description = "   ".into();
        assert!(validate_detail(&input).is_err());
    }

    #[test]
    fn faq_requires_question_and_answer() {
        let mut input = FaqInput {
            question: "How long?".into(),
            ..FaqInput::default()
        };
        assert!(validate_faq(&input).is_err());
        input.answer = "Two weeks".into();
        assert!(validate_faq(&input).is_ok());
    }

    #[test]
    fn service_requires_name_and_description() {
        let input = ServiceInput {
            name: "Logo Design".into(),
            ..ServiceInput::default()
        };
        assert!(validate_service(&input).is_err());
    }

    #[test]
    fn timestamps_are_utc_iso() {
        let ts = timestamp();
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
