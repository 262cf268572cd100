use std::collections::HashMap;

use log::{info, warn};
use once_cell::sync::Lazy;
use serde_json::Value;
use web_sys::window;
use yew::prelude::*;

use crate::config::LANGUAGE_STORAGE_KEY;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    pub fn direction(&self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

type Catalog = HashMap<String, String>;

/// Flattens nested objects into `namespace:dotted.key` entries.
fn flatten(root: &Value) -> Catalog {
    fn walk(prefix: &str, value: &Value, out: &mut Catalog) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let next = if prefix.is_empty() {
                        format!("{}:", key)
                    } else if prefix.ends_with(':') {
                        format!("{}{}", prefix, key)
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    walk(&next, child, out);
                }
            }
            Value::String(text) => {
                out.insert(prefix.to_string(), text.clone());
            }
            _ => {}
        }
    }
    let mut out = Catalog::new();
    walk("", root, &mut out);
    out
}

fn parse_catalog(source: &str, language: Language) -> Catalog {
    match serde_json::from_str::<Value>(source) {
        Ok(root) => flatten(&root),
        Err(e) => {
            warn!("{} catalogue is unreadable: {}", language.code(), e);
            Catalog::new()
        }
    }
}

static ENGLISH: Lazy<Catalog> =
    Lazy::new(|| parse_catalog(include_str!("../locales/en.json"), Language::En));
static ARABIC: Lazy<Catalog> =
    Lazy::new(|| parse_catalog(include_str!("../locales/ar.json"), Language::Ar));

fn catalog(language: Language) -> &'static Catalog {
    match language {
        Language::En => &ENGLISH,
        Language::Ar => &ARABIC,
    }
}

/// Looks `key` up in `namespace`, falling back to English and then to
/// `fallback`.
pub fn translate(language: Language, namespace: &str, key: &str, fallback: &str) -> String {
    let full_key = format!("{}:{}", namespace, key);
    catalog(language)
        .get(&full_key)
        .or_else(|| ENGLISH.get(&full_key))
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}

/// Picks the Arabic column when it is set and non-blank.
pub fn localized<'a>(language: Language, en: &'a str, ar: Option<&'a str>) -> &'a str {
    match (language, ar) {
        (Language::Ar, Some(ar)) if !ar.trim().is_empty() => ar,
        _ => en,
    }
}

fn stored_language() -> Option<Language> {
    let storage = window()?.local_storage().ok().flatten()?;
    let code = storage.get_item(LANGUAGE_STORAGE_KEY).ok().flatten()?;
    Language::from_code(&code)
}

fn apply_language(language: Language) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("dir", language.direction());
        let _ = root.set_attribute("lang", language.code());
    }
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Err(e) = storage.set_item(LANGUAGE_STORAGE_KEY, language.code()) {
            warn!("could not persist language: {:?}", e);
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct I18n {
    pub language: Language,
    pub set_language: Callback<Language>,
}

impl I18n {
    pub fn t(&self, namespace: &str, key: &str, fallback: &str) -> String {
        translate(self.language, namespace, key, fallback)
    }

    pub fn localized<'a>(&self, en: &'a str, ar: Option<&'a str>) -> &'a str {
        localized(self.language, en, ar)
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let language = use_state(|| stored_language().unwrap_or_default());

    {
        use_effect_with_deps(
            move |language: &Language| {
                apply_language(*language);
                || ()
            },
            *language,
        );
    }

    let set_language = {
        let language = language.clone();
        Callback::from(move |next: Language| {
            info!("language switched to {}", next.code());
            language.set(next);
        })
    };

    let context = I18n {
        language: *language,
        set_language,
    };

    html! {
        <ContextProvider<I18n> context={context}>
            { for props.children.iter() }
        </ContextProvider<I18n>>
    }
}

/// The active language, English outside a [`LanguageProvider`].
#[hook]
pub fn use_i18n() -> I18n {
    use_context::<I18n>().unwrap_or_else(|| I18n {
        language: Language::En,
        set_language: Callback::noop(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_keys_are_dotted() {
        assert_eq!(
            translate(Language::En, "contact", "validation.email.invalid", "x"),
            "Email is invalid"
        );
        assert_eq!(translate(Language::Ar, "nav", "home", "Home"), "الرئيسية");
    }

    #[test]
    fn catalogues_cover_the_same_keys() {
        let mut missing: Vec<_> = ENGLISH.keys().filter(|k| !ARABIC.contains_key(*k)).collect();
        missing.sort();
        assert!(missing.is_empty(), "missing Arabic keys: {:?}", missing);
    }

    #[test]
    fn unknown_keys_fall_back() {
        assert_eq!(translate(Language::Ar, "nav", "nope", "Fallback"), "Fallback");
        assert_eq!(translate(Language::En, "missing_ns", "home", "Home"), "Home");
    }

    #[test]
    fn flatten_ignores_non_strings() {
        let value: Value = serde_json::json!({"ns": {"a": "1", "b": {"c": "2"}, "n": 3}});
        let flat = flatten(&value);
        assert_eq!(flat.get("ns:a").map(String::as_str), Some("1"));
        assert_eq!(flat.get("ns:b.c").map(String::as_str), Some("2"));
        assert_eq!(flat.len(), 2);
    }

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(Language::Ar.direction(), "rtl");
        assert_eq!(Language::En.direction(), "ltr");
        assert_eq!(Language::En.toggled(), Language::Ar);
        assert_eq!(Language::from_code(" AR "), Some(Language::Ar));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn localized_prefers_non_blank_arabic() {
        assert_eq!(localized(Language::Ar, "Logo", Some("شعار")), "شعار");
        assert_eq!(localized(Language::Ar, "Logo", Some("  ")), "Logo");
        assert_eq!(localized(Language::En, "Logo", Some("شعار")), "Logo");
        assert_eq!(localized(Language::Ar, "Logo", None), "Logo");
    }
}
