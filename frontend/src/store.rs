pub mod auth;
pub mod error;
pub mod fetch;
pub mod models;
pub mod realtime;
pub mod storage;

use std::sync::Once;

use gloo_net::http::{Request, Response};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use yew::prelude::*;

use crate::config::StoreConfig;
use error::{StoreError, StoreResult};
use realtime::{ChangeEvent, RealtimeChannel};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    Services,
    ServiceDetails,
    Faqs,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::Services => "Services",
            Table::ServiceDetails => "ServiceDetails",
            Table::Faqs => "FAQs",
        }
    }

    pub fn channel(&self) -> &'static str {
        match self {
            Table::Services => "services-changes",
            Table::ServiceDetails => "servicedetails-changes",
            Table::Faqs => "faqs-changes",
        }
    }
}

/// PostgREST read: column selection, equality filters and one ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    select: String,
    filters: Vec<(String, String)>,
    order: Option<(String, bool)>,
}

impl Default for Query {
    fn default() -> Self {
        Self::select("*")
    }
}

impl Query {
    pub fn select(columns: &str) -> Self {
        Self {
            select: columns.to_string(),
            filters: Vec::new(),
            order: None,
        }
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_string(), value.to_string()));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some((column.to_string(), ascending));
        self
    }

    pub fn to_query_string(&self) -> String {
        let mut parts = vec![format!("select={}", urlencoding::encode(&self.select))];
        for (column, value) in &self.filters {
            parts.push(format!("{}=eq.{}", column, urlencoding::encode(value)));
        }
        if let Some((column, ascending)) = &self.order {
            let direction = if *ascending { "asc" } else { "desc" };
            parts.push(format!("order={}.{}", column, direction));
        }
        parts.join("&")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RemoteStore {
    config: StoreConfig,
}

impl RemoteStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn table_url(&self, table: Table) -> String {
        format!("{}/rest/v1/{}", self.config.url, table.name())
    }

    fn row_url(&self, table: Table, id: &str) -> String {
        format!("{}?id=eq.{}", self.table_url(table), urlencoding::encode(id))
    }

    /// Signed-in requests carry the user's token, everything else the anon key.
    fn bearer(&self) -> String {
        auth::get_session()
            .map(|s| s.access_token)
            .unwrap_or_else(|| self.config.anon_key.clone())
    }

    fn authorize(&self, request: Request) -> Request {
        request
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", self.bearer()))
    }

    async fn query<T: DeserializeOwned>(&self, table: Table, query: &Query) -> StoreResult<Vec<T>> {
        let url = format!("{}?{}", self.table_url(table), query.to_query_string());
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(StoreError::network)?;
        let response = ensure_success(response).await?;
        response.json::<Vec<T>>().await.map_err(StoreError::decode)
    }

    async fn insert<B: Serialize>(&self, table: Table, row: &B) -> StoreResult<()> {
        let request = self
            .authorize(Request::post(&self.table_url(table)))
            .header("Prefer", "return=minimal")
            .json(row)
            .map_err(StoreError::encode)?;
        let response = request.send().await.map_err(StoreError::network)?;
        ensure_success(response).await.map(|_| ())
    }

    async fn update<B: Serialize>(&self, table: Table, id: &str, patch: &B) -> StoreResult<()> {
        let request = self
            .authorize(Request::patch(&self.row_url(table, id)))
            .header("Prefer", "return=minimal")
            .json(patch)
            .map_err(StoreError::encode)?;
        let response = request.send().await.map_err(StoreError::network)?;
        ensure_success(response).await.map(|_| ())
    }

    async fn delete(&self, table: Table, id: &str) -> StoreResult<()> {
        let response = self
            .authorize(Request::delete(&self.row_url(table, id)))
            .send()
            .await
            .map_err(StoreError::network)?;
        ensure_success(response).await.map(|_| ())
    }
}

async fn ensure_success(response: Response) -> StoreResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::from_status(status, &body))
}

static OFFLINE_WARNING: Once = Once::new();

/// The site's content backend. `Offline` stands in when no endpoint was
/// configured at build time: reads come back empty and writes succeed.
#[derive(Clone, Debug, PartialEq)]
pub enum DataStore {
    Remote(RemoteStore),
    Offline,
}

impl DataStore {
    pub fn from_config(config: Option<StoreConfig>) -> Self {
        match config {
            Some(config) => {
                info!("using data store at {}", config.url);
                DataStore::Remote(RemoteStore::new(config))
            }
            None => {
                OFFLINE_WARNING.call_once(|| {
                    warn!("SUPABASE_URL or SUPABASE_ANON_KEY missing, running without a data store")
                });
                DataStore::Offline
            }
        }
    }

    pub fn from_build_env() -> Self {
        Self::from_config(StoreConfig::from_build_env())
    }

    pub async fn query<T: DeserializeOwned>(&self, table: Table, query: &Query) -> StoreResult<Vec<T>> {
        match self {
            DataStore::Remote(remote) => remote.query(table, query).await,
            DataStore::Offline => Ok(Vec::new()),
        }
    }

    pub async fn insert<B: Serialize>(&self, table: Table, row: &B) -> StoreResult<()> {
        match self {
            DataStore::Remote(remote) => remote.insert(table, row).await,
            DataStore::Offline => Ok(()),
        }
    }

    pub async fn update<B: Serialize>(&self, table: Table, id: &str, patch: &B) -> StoreResult<()> {
        match self {
            DataStore::Remote(remote) => remote.update(table, id, patch).await,
            DataStore::Offline => Ok(()),
        }
    }

    pub async fn delete(&self, table: Table, id: &str) -> StoreResult<()> {
        match self {
            DataStore::Remote(remote) => remote.delete(table, id).await,
            DataStore::Offline => Ok(()),
        }
    }

    /// Opens a change feed for `table`. Offline stores have nothing to push,
    /// and a socket that fails to open is logged and skipped.
    pub fn subscribe_to_changes(
        &self,
        table: Table,
        on_change: Callback<ChangeEvent>,
    ) -> Option<RealtimeChannel> {
        let DataStore::Remote(remote) = self else {
            return None;
        };
        match RealtimeChannel::open(remote.config(), table, remote.bearer(), on_change) {
            Ok(channel) => Some(channel),
            Err(e) => {
                warn!("realtime for {} unavailable: {}", table.name(), e);
                None
            }
        }
    }

    pub fn storage(&self) -> Option<&StoreConfig> {
        match self {
            DataStore::Remote(remote) => Some(remote.config()),
            DataStore::Offline => None,
        }
    }
}

/// The store provided by the app root, or the build-time one when rendered
/// outside the provider.
#[hook]
pub fn use_store() -> DataStore {
    use_context::<DataStore>().unwrap_or_else(DataStore::from_build_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_match_database() {
        assert_eq!(Table::Services.name(), "Services");
        assert_eq!(Table::ServiceDetails.name(), "ServiceDetails");
        assert_eq!(Table::Faqs.name(), "FAQs");
        assert_eq!(Table::ServiceDetails.channel(), "servicedetails-changes");
    }

    #[test]
    fn default_query_selects_everything() {
        assert_eq!(Query::default().to_query_string(), "select=%2A");
    }

    #[test]
    fn query_string_with_filter_and_order() {
        let query = Query::select("*,Services(name)")
            .eq("service_id", "a b&c")
            .order("created_at", false);
        assert_eq!(
            query.to_query_string(),
            "select=%2A%2CServices%28name%29&service_id=eq.a%20b%26c&order=created_at.desc"
        );
    }

    #[test]
    fn ascending_order() {
        let query = Query::select("id,name").order("name", true);
        assert_eq!(query.to_query_string(), "select=id%2Cname&order=name.asc");
    }

    #[test]
    fn missing_config_means_offline() {
        assert_eq!(DataStore::from_config(None), DataStore::Offline);
        let config = StoreConfig::from_parts(Some("https://x.supabase.co"), Some("k"));
        let store = DataStore::from_config(config);
        assert!(matches!(store, DataStore::Remote(_)));
        assert_eq!(store.storage().map(|c| c.url.as_str()), Some("https://x.supabase.co"));
    }

    #[test]
    fn row_urls_escape_ids() {
        let remote = RemoteStore::new(StoreConfig {
            url: "https://x.supabase.co".into(),
            anon_key: "k".into(),
        });
        assert_eq!(
            remote.row_url(Table::Faqs, "1 2"),
            "https://x.supabase.co/rest/v1/FAQs?id=eq.1%202"
        );
    }
}
