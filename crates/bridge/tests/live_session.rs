use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{json, Value};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use bridge::{hot_channel, DevTransport, HotCallback, HotChannel, ServerBridge, ToolbarSession};
use relay::{AppStatePayload, PlacementPayload, ToolbarPlacement, APP_TOGGLED, PLACEMENT_UPDATED};

fn raw_sink(endpoint: &HotChannel, event: &str) -> UnboundedReceiver<Value> {
    let (tx, rx) = mpsc::unbounded_channel();
    let callback: HotCallback = Arc::new(move |value| {
        let _ = tx.send(value);
    });
    endpoint.on(event, callback);
    rx
}

fn live_bridge() -> (ServerBridge, HotChannel) {
    let (toolbar_end, server_end) = hot_channel();
    let bridge = ServerBridge::new(Some(Arc::new(toolbar_end)));
    (bridge, server_end)
}

mod bridge_over_transport {
    use super::*;

    #[tokio::test]
    async fn test_send_reaches_server_as_json() {
        let (bridge, server_end) = live_bridge();
        let mut received = raw_sink(&server_end, "custom:refresh");

        bridge.send("custom:refresh", &json!({"path": "/blog"}));

        assert_eq!(received.recv().await.unwrap(), json!({"path": "/blog"}));
    }

    #[tokio::test]
    async fn test_on_decodes_typed_payload() {
        let (bridge, server_end) = live_bridge();
        let (tx, mut rx) = mpsc::unbounded_channel();

        bridge.on(APP_TOGGLED, move |payload: AppStatePayload| {
            let _ = tx.send(payload.active);
        });

        server_end.send(bridge::HotMessage::new(APP_TOGGLED, json!({"active": true})));

        assert!(rx.recv().await.unwrap());
    }

    #[tokio::test]
    async fn test_undecodable_payload_is_skipped() {
        let (bridge, server_end) = live_bridge();
        let (tx, mut rx) = mpsc::unbounded_channel();

        bridge.on(APP_TOGGLED, move |payload: AppStatePayload| {
            let _ = tx.send(payload.active);
        });

        server_end.send(bridge::HotMessage::new(APP_TOGGLED, json!("not an object")));
        server_end.send(bridge::HotMessage::new(APP_TOGGLED, json!({"active": false})));

        // FIFO: first value through proves the bad payload was dropped.
        assert!(!rx.recv().await.unwrap());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_unserializable_payload_is_dropped() {
        let (bridge, server_end) = live_bridge();
        let mut received = raw_sink(&server_end, "bad");

        let mut non_string_keys = HashMap::new();
        non_string_keys.insert((1u32, 2u32), "value");

        bridge.send("bad", &non_string_keys);
        bridge.send("bad", &json!("good"));

        assert_eq!(received.recv().await.unwrap(), json!("good"));
        assert!(received.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_events_are_isolated_by_name() {
        let (bridge, server_end) = live_bridge();
        let mut refresh = raw_sink(&server_end, "custom:refresh");
        let mut other = raw_sink(&server_end, "custom:other");

        bridge.send("custom:other", &json!(1));
        bridge.send("custom:refresh", &json!(2));

        assert_eq!(other.recv().await.unwrap(), json!(1));
        assert_eq!(refresh.recv().await.unwrap(), json!(2));
        assert!(other.try_recv().is_err());
        assert!(refresh.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_sends_arrive_in_order() {
        let (bridge, server_end) = live_bridge();
        let mut received = raw_sink(&server_end, "seq");

        for i in 0..5 {
            bridge.send("seq", &json!(i));
        }

        for i in 0..5 {
            assert_eq!(received.recv().await.unwrap(), json!(i));
        }
    }
}

mod disconnected {
    use super::*;

    #[tokio::test]
    async fn test_send_without_transport_is_noop() {
        let bridge = ServerBridge::disconnected();
        assert!(!bridge.is_live());

        bridge.send("custom:refresh", &json!({"path": "/blog"}));
        bridge.send("", &json!(null));
        bridge.send("custom:refresh", &Value::Null);
    }

    #[tokio::test]
    async fn test_on_without_transport_never_fires() {
        let bridge = ServerBridge::disconnected();
        let (tx, mut rx) = mpsc::unbounded_channel();

        bridge.on("custom:refresh", move |value: Value| {
            let _ = tx.send(value);
        });

        bridge.send("custom:refresh", &json!(1));
        assert!(rx.try_recv().is_err());
    }
}

mod session {
    use super::*;

    #[tokio::test]
    async fn test_app_toggle_forwarded_to_server() {
        let (toolbar_end, server_end) = hot_channel();
        let session = ToolbarSession::new(Some(Arc::new(toolbar_end)));
        let mut received = raw_sink(&server_end, APP_TOGGLED);

        session
            .events()
            .toggle_app_state(AppStatePayload { active: true });

        assert_eq!(received.recv().await.unwrap(), json!({"active": true}));
    }

    #[tokio::test]
    async fn test_local_listeners_fire_without_transport() {
        let session = ToolbarSession::disconnected();
        assert!(!session.server().is_live());

        let (tx, mut rx) = mpsc::unbounded_channel();
        session.events().on_app_toggled(move |payload| {
            let _ = tx.send(payload.active);
        });

        session
            .events()
            .toggle_app_state(AppStatePayload { active: false });

        // Relay dispatch is synchronous, so the value is already queued.
        assert!(!rx.try_recv().unwrap());
    }

    #[tokio::test]
    async fn test_server_can_drive_toolbar_placement() {
        let (toolbar_end, server_end) = hot_channel();
        let session = ToolbarSession::new(Some(Arc::new(toolbar_end)));

        let relay_handle = session.events().clone();
        session
            .server()
            .on(PLACEMENT_UPDATED, move |payload: PlacementPayload| {
                relay_handle.update_placement(payload.placement);
            });

        let (tx, mut rx) = mpsc::unbounded_channel();
        session.events().on_toolbar_placement(move |placement| {
            let _ = tx.send(placement);
        });

        server_end.send(bridge::HotMessage::new(
            PLACEMENT_UPDATED,
            json!({"placement": "bottom-right"}),
        ));

        assert_eq!(rx.recv().await.unwrap(), ToolbarPlacement::BottomRight);
    }
}
