use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MessageEvent, WebSocket};
use yew::Callback;

use super::error::{StoreError, StoreResult};
use super::Table;
use crate::config::StoreConfig;

const HEARTBEAT_MILLIS: u32 = 30_000;
const PROTOCOL_VERSION: &str = "1.0.0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub table: String,
}

/// One Phoenix channel frame.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Frame {
    pub topic: String,
    pub event: String,
    pub payload: Value,
    #[serde(rename = "ref")]
    pub reference: Option<String>,
}

pub fn socket_url(config: &StoreConfig) -> String {
    let base = if let Some(rest) = config.url.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = config.url.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else {
        config.url.clone()
    };
    format!(
        "{}/realtime/v1/websocket?apikey={}&vsn={}",
        base,
        urlencoding::encode(&config.anon_key),
        PROTOCOL_VERSION
    )
}

pub fn topic_for(table: Table) -> String {
    format!("realtime:{}", table.channel())
}

pub fn join_frame(table: Table, access_token: &str, reference: u64) -> Frame {
    Frame {
        topic: topic_for(table),
        event: "phx_join".to_string(),
        payload: json!({
            "config": {
                "broadcast": { "self": false },
                "presence": { "key": "" },
                "postgres_changes": [
                    { "event": "*", "schema": "public", "table": table.name() }
                ]
            },
            "access_token": access_token,
        }),
        reference: Some(reference.to_string()),
    }
}

pub fn leave_frame(table: Table, reference: u64) -> Frame {
    Frame {
        topic: topic_for(table),
        event: "phx_leave".to_string(),
        payload: json!({}),
        reference: Some(reference.to_string()),
    }
}

pub fn heartbeat_frame(reference: u64) -> Frame {
    Frame {
        topic: "phoenix".to_string(),
        event: "heartbeat".to_string(),
        payload: json!({}),
        reference: Some(reference.to_string()),
    }
}

/// Extracts a row change from an incoming frame. Replies, heartbeats and
/// presence traffic yield `None`.
pub fn parse_change(text: &str) -> Option<ChangeEvent> {
    let frame: Frame = serde_json::from_str(text).ok()?;
    if frame.event != "postgres_changes" {
        return None;
    }
    let data = frame.payload.get("data")?;
    let kind = match data.get("type")?.as_str()? {
        "INSERT" => ChangeKind::Insert,
        "UPDATE" => ChangeKind::Update,
        "DELETE" => ChangeKind::Delete,
        _ => return None,
    };
    let table = data.get("table")?.as_str()?.to_string();
    Some(ChangeEvent { kind, table })
}

/// Live change feed for one table. Leaves the channel and closes the socket
/// when dropped.
pub struct RealtimeChannel {
    socket: WebSocket,
    table: Table,
    next_ref: Rc<Cell<u64>>,
    _on_open: Closure<dyn FnMut()>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _heartbeat: Interval,
}

impl RealtimeChannel {
    pub fn open(
        config: &StoreConfig,
        table: Table,
        access_token: String,
        on_change: Callback<ChangeEvent>,
    ) -> StoreResult<Self> {
        let socket = WebSocket::new(&socket_url(config))
            .map_err(|e| StoreError::Realtime(format!("{:?}", e)))?;
        let next_ref = Rc::new(Cell::new(1u64));

        let on_open = {
            let socket = socket.clone();
            let next_ref = next_ref.clone();
            Closure::<dyn FnMut()>::new(move || {
                let frame = join_frame(table, &access_token, take_ref(&next_ref));
                send(&socket, &frame);
                info!("joined realtime channel {}", table.channel());
            })
        };
        socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));

        let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            let Some(text) = event.data().as_string() else {
                return;
            };
            if let Some(change) = parse_change(&text) {
                debug!("{:?} on {}", change.kind, change.table);
                on_change.emit(change);
            }
        });
        socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        let heartbeat = {
            let socket = socket.clone();
            let next_ref = next_ref.clone();
            Interval::new(HEARTBEAT_MILLIS, move || {
                if socket.ready_state() == WebSocket::OPEN {
                    send(&socket, &heartbeat_frame(take_ref(&next_ref)));
                }
            })
        };

        Ok(Self {
            socket,
            table,
            next_ref,
            _on_open: on_open,
            _on_message: on_message,
            _heartbeat: heartbeat,
        })
    }
}

impl Drop for RealtimeChannel {
    fn drop(&mut self) {
        if self.socket.ready_state() == WebSocket::OPEN {
            send(&self.socket, &leave_frame(self.table, take_ref(&self.next_ref)));
        }
        self.socket.set_onopen(None);
        self.socket.set_onmessage(None);
        let _ = self.socket.close();
        info!("left realtime channel {}", self.table.channel());
    }
}

fn take_ref(counter: &Cell<u64>) -> u64 {
    let current = counter.get();
    counter.set(current + 1);
    current
}

fn send(socket: &WebSocket, frame: &Frame) {
    match serde_json::to_string(frame) {
        Ok(text) => {
            if let Err(e) = socket.send_with_str(&text) {
                warn!("realtime send failed: {:?}", e);
            }
        }
        Err(e) => warn!("could not encode realtime frame: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> StoreConfig {
        StoreConfig {
            url: url.to_string(),
            anon_key: "anon key".to_string(),
        }
    }

    #[test]
    fn socket_url_switches_scheme() {
        assert_eq!(
            socket_url(&config("https://abc.supabase.co")),
            "wss://abc.supabase.co/realtime/v1/websocket?apikey=anon%20key&vsn=1.0.0"
        );
        assert_eq!(
            socket_url(&config("http://localhost:54321")),
            "ws://localhost:54321/realtime/v1/websocket?apikey=anon%20key&vsn=1.0.0"
        );
    }

    #[test]
    fn join_subscribes_to_every_event_on_the_table() {
        let frame = join_frame(Table::Services, "token", 1);
        assert_eq!(frame.topic, "realtime:services-changes");
        assert_eq!(frame.event, "phx_join");
        let change = &frame.payload["config"]["postgres_changes"][0];
        assert_eq!(change["event"], "*");
        assert_eq!(change["schema"], "public");
        assert_eq!(change["table"], "Services");
        assert_eq!(frame.payload["access_token"], "token");

        let text = serde_json::to_string(&frame).unwrap();
        assert!(text.contains(r#""ref":"1""#));
    }

    #[test]
    fn heartbeat_targets_phoenix_topic() {
        let frame = heartbeat_frame(7);
        assert_eq!(frame.topic, "phoenix");
        assert_eq!(frame.event, "heartbeat");
        assert_eq!(frame.reference.as_deref(), Some("7"));
    }

    #[test]
    fn parses_row_changes() {
        let text = r#"{
            "topic": "realtime:faqs-changes",
            "event": "postgres_changes",
            "payload": {
                "data": {
                    "type": "DELETE",
                    "table": "FAQs",
                    "schema": "public",
                    "old_record": {"id": "f1"}
                },
                "ids": [123]
            },
            "ref": null
        }"#;
        assert_eq!(
            parse_change(text),
            Some(ChangeEvent {
                kind: ChangeKind::Delete,
                table: "FAQs".to_string()
            })
        );
    }

    #[test]
    fn ignores_control_frames() {
        let reply = r#"{"topic":"phoenix","event":"phx_reply","payload":{"status":"ok","response":{}},"ref":"2"}"#;
        assert_eq!(parse_change(reply), None);
        assert_eq!(parse_change("not json"), None);
        let unknown = r#"{"topic":"t","event":"postgres_changes","payload":{"data":{"type":"TRUNCATE","table":"x"}},"ref":null}"#;
        assert_eq!(parse_change(unknown), None);
    }

    #[test]
    fn refs_increase() {
        let counter = Cell::new(4);
        assert_eq!(take_ref(&counter), 4);
        assert_eq!(take_ref(&counter), 5);
    }
}
