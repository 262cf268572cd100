use std::cell::RefCell;
use std::rc::Rc;

use log::error;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_is_mounted;

use super::{use_store, Query, Table};

#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn rows(&self) -> Option<&[T]> {
        match self {
            FetchState::Loaded(rows) => Some(rows),
            _ => None,
        }
    }
}

pub struct TableHandle<T> {
    pub state: FetchState<T>,
    pub reload: Callback<()>,
}

/// Why rows are fetched again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Refetch {
    Reload,
    Pushed,
}

impl Refetch {
    /// State shown while the request is in flight. `None` keeps the rows on
    /// screen.
    fn placeholder<T>(self) -> Option<FetchState<T>> {
        match self {
            Refetch::Reload => Some(FetchState::Loading),
            Refetch::Pushed => None,
        }
    }
}

/// Query of the latest render, shared with callbacks created earlier.
#[derive(Clone)]
struct LatestQuery(Rc<RefCell<Query>>);

impl LatestQuery {
    fn update(&self, query: &Query) {
        if *self.0.borrow() != *query {
            *self.0.borrow_mut() = query.clone();
        }
    }

    fn get(&self) -> Query {
        self.0.borrow().clone()
    }
}

/// Rows of `table` matching `query`, fetched on mount and whenever the
/// query changes. With `live`, any change pushed for the table re-fetches
/// with the current query while the old rows stay up. Results arriving
/// after unmount are dropped.
#[hook]
pub fn use_table<T>(table: Table, query: Query, live: bool) -> TableHandle<T>
where
    T: DeserializeOwned + Clone + PartialEq + 'static,
{
    let store = use_store();
    let state = use_state(|| FetchState::<T>::Loading);
    let is_mounted = use_is_mounted();
    let latest = LatestQuery(use_mut_ref(|| query.clone()));
    latest.update(&query);

    let fetch = {
        let store = store.clone();
        let state = state.clone();
        Callback::from(move |why: Refetch| {
            let store = store.clone();
            let state = state.clone();
            let query = latest.get();
            let is_mounted = is_mounted.clone();
            if let Some(placeholder) = why.placeholder() {
                state.set(placeholder);
            }
            spawn_local(async move {
                let result = store.query::<T>(table, &query).await;
                if !is_mounted() {
                    return;
                }
                match result {
                    Ok(rows) => state.set(FetchState::Loaded(rows)),
                    Err(e) => {
                        error!("fetching {} failed: {}", table.name(), e);
                        state.set(FetchState::Failed(e.to_string()));
                    }
                }
            });
        })
    };
    let reload = fetch.reform(|_: ()| Refetch::Reload);

    {
        let reload = reload.clone();
        use_effect_with_deps(
            move |_| {
                reload.emit(());
                || ()
            },
            (table, query),
        );
    }

    use_effect_with_deps(
        move |(table, live)| {
            let channel = if *live {
                store.subscribe_to_changes(*table, fetch.reform(|_| Refetch::Pushed))
            } else {
                None
            };
            move || drop(channel)
        },
        (table, live),
    );

    TableHandle {
        state: (*state).clone(),
        reload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loaded_state_has_rows() {
        let loaded: FetchState<u8> = FetchState::Loaded(vec![1, 2]);
        assert_eq!(loaded.rows(), Some(&[1, 2][..]));
        assert_eq!(FetchState::<u8>::Loading.rows(), None);
        assert_eq!(FetchState::<u8>::Failed("boom".into()).rows(), None);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let empty: FetchState<u8> = FetchState::Loaded(Vec::new());
        assert_eq!(empty.rows().map(<[u8]>::is_empty), Some(true));
        assert_ne!(empty, FetchState::Failed(String::new()));
    }

    #[test]
    fn pushed_changes_keep_rows_on_screen() {
        assert_eq!(Refetch::Pushed.placeholder::<u8>(), None);
        assert_eq!(Refetch::Reload.placeholder::<u8>(), Some(FetchState::Loading));
    }

    #[test]
    fn earlier_callbacks_see_the_latest_query() {
        let latest = LatestQuery(Rc::new(RefCell::new(Query::select("*").eq("service_id", "web"))));
        let held = latest.clone();
        latest.update(&Query::select("*").eq("service_id", "seo"));
        assert_eq!(held.get(), Query::select("*").eq("service_id", "seo"));
    }
}
