
#[cfg(debug_assertions)]
pub fn get_supabase_url() -> Option<&'static str> {
    // Local `supabase start` stack when nothing is set at build time
    Some(option_env!("SUPABASE_URL").unwrap_or("http://localhost:54321"))
}

#[cfg(not(debug_assertions))]
pub fn get_supabase_url() -> Option<&'static str> {
    option_env!("SUPABASE_URL")
}

pub fn get_supabase_anon_key() -> Option<&'static str> {
    option_env!("SUPABASE_ANON_KEY")
}

/// Endpoint and key the site talks to, if both were provided at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub url: String,
    pub anon_key: String,
}

impl StoreConfig {
    pub fn from_build_env() -> Option<Self> {
        Self::from_parts(get_supabase_url(), get_supabase_anon_key())
    }

    pub fn from_parts(url: Option<&str>, anon_key: Option<&str>) -> Option<Self> {
        let url = url.map(str::trim).filter(|u| !u.is_empty())?;
        let anon_key = anon_key.map(str::trim).filter(|k| !k.is_empty())?;
        Some(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }
}

pub const SESSION_STORAGE_KEY: &str = "whymedia.session";
pub const LANGUAGE_STORAGE_KEY: &str = "whymedia.language";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_parts_are_required() {
        assert!(StoreConfig::from_parts(None, Some("key")).is_none());
        assert!(StoreConfig::from_parts(Some("https://x.supabase.co"), None).is_none());
        assert!(StoreConfig::from_parts(Some("  "), Some("key")).is_none());
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = StoreConfig::from_parts(Some("https://x.supabase.co/"), Some(" key ")).unwrap();
        assert_eq!(config.url, "https://x.supabase.co");
        assert_eq!(config.anon_key, "key");
    }
}
