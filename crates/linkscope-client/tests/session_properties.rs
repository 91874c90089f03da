//! Property-based tests for the session state machine.
//!
//! Tests verify that lifecycle invariants hold under arbitrary event
//! sequences, including out-of-order transport notifications.

use linkscope_client::{Client, ClientAction, ClientEvent, Outbound, Role, SessionState};
use proptest::prelude::*;

/// Generate random client events.
fn event_strategy() -> impl Strategy<Value = ClientEvent> {
    prop_oneof![
        2 => ("[A-Z]{1,3}", any::<bool>()).prop_map(|(room, tx)| ClientEvent::Connect {
            room,
            role: if tx { Role::Sender } else { Role::Receiver },
        }),
        2 => Just(ClientEvent::TransportOpened),
        1 => Just(ClientEvent::TransportClosed { reason: None }),
        3 => (-10.0f64..40.0).prop_map(|snr| ClientEvent::Send(Outbound::SetSnr { snr })),
        2 => ".{0,32}".prop_map(ClientEvent::MessageReceived),
        1 => Just(ClientEvent::MessageReceived(r#"{"type":"tx_ack","info":"ok"}"#.into())),
    ]
}

proptest! {
    #[test]
    fn prop_transmit_only_when_open(events in prop::collection::vec(event_strategy(), 0..64)) {
        let mut client = Client::new();

        for event in events {
            let was_open = client.is_open();
            let was_connecting = client.state() == SessionState::Connecting;
            let is_send = matches!(event, ClientEvent::Send(_));
            let is_open_event = matches!(event, ClientEvent::TransportOpened);

            let actions = client.handle(event).unwrap();
            let transmits = actions.iter().filter(|a| matches!(a, ClientAction::Transmit(_))).count();

            if is_send {
                prop_assert_eq!(transmits, usize::from(was_open));
            }
            if is_open_event {
                // The join envelope is the only transmit, and only from Connecting.
                prop_assert_eq!(transmits, usize::from(was_connecting));
            }
        }
    }

    #[test]
    fn prop_open_requires_connect(events in prop::collection::vec(event_strategy(), 0..64)) {
        let mut client = Client::new();
        let mut connected_once = false;

        for event in events {
            if matches!(event, ClientEvent::Connect { .. }) {
                connected_once = true;
            }
            client.handle(event).unwrap();
            if client.is_open() {
                prop_assert!(connected_once);
                prop_assert!(client.room().is_some());
            }
        }
    }
}
