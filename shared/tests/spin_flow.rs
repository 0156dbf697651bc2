use rand::rngs::StdRng;
use rand::SeedableRng;

use shared::constants::{GENERIC_SPIN_ERROR, STRIP_REPETITIONS, STRIP_SPIN_DURATION_MS, STRIP_TARGET_COPY};
use shared::spin_api::SpinResponse;
use shared::spin_strip::{flattened_target_index, DeviceClass, StripLayout};
use shared::spin_wheel::WheelLayout;
use shared::{DismissOutcome, SessionTick, SpinError, SpinGeometry, SpinSession, SpinVariant};

const ROULETTE_SPIN: &str = r#"{
    "balance": 7.25,
    "gifts": [
        {"link": "https://cdn/gifts/0.json", "title": "Lol Pop", "price": 1.2, "gift_id": "g0"},
        {"link": "https://cdn/gifts/1.png", "title": "Desk Calendar", "price": 1.5, "gift_id": "g1"},
        {"link": "https://cdn/gifts/2.png", "title": "Jelly Bunny", "price": 3.1, "gift_id": "g2"},
        {"link": "", "title": "Hypno Lollipop", "price": 2.0, "gift_id": "g3"},
        {"link": "https://cdn/gifts/4.json", "title": "Plush Pepe", "price": 420.0, "gift_id": "g4", "model": "Cozy"},
        {"link": "https://cdn/gifts/5.png", "title": "Snake Box", "price": 2.4, "gift_id": "g5"}
    ],
    "win_gift": {"link": "https://cdn/gifts/4.json", "title": "Plush Pepe", "price": 420.0, "gift_id": "g4"}
}"#;

#[test]
fn roulette_spin_lands_and_reveals_declared_gift() {
    let mut rng = StdRng::seed_from_u64(2024);
    let layout = StripLayout::for_device(DeviceClass::from_viewport_width(1024.0));
    let mut session = SpinSession::new(SpinGeometry::Strip(layout));

    let response: SpinResponse = serde_json::from_str(ROULETTE_SPIN).unwrap();
    let outcome = response.into_outcome(SpinVariant::Strip).unwrap();
    assert_eq!(outcome.balance, Some(7.25));

    let start = 10_000.0;
    let target = session.begin(outcome, &mut rng, start).unwrap();
    let strip = session.tiled_strip();
    assert_eq!(strip.len(), 6 * STRIP_REPETITIONS);

    let landed = layout.slot_at_pointer(target, strip.len()).unwrap();
    assert_eq!(landed, flattened_target_index(6, 4, STRIP_TARGET_COPY));
    assert_eq!(strip[landed].identifier.as_deref(), Some("g4"));

    let mut now = start;
    let revealed = loop {
        now += 16.0;
        match session.tick(now) {
            SessionTick::Animating(offset) => {
                assert!(offset <= 0.0 && offset >= target - 1e-9);
                assert!(session.revealed_result().is_none());
            }
            SessionTick::Revealed(item) => break item,
            SessionTick::Idle => panic!("timer went idle before revealing"),
        }
    };
    assert!(now - start >= STRIP_SPIN_DURATION_MS as f64);
    assert_eq!(revealed.identifier.as_deref(), Some("g4"));
    assert_eq!(revealed.title(), "Plush Pepe");
    assert!(revealed.win_flag);

    assert_eq!(session.dismiss(), DismissOutcome::Reset { refetch_candidates: true });
    assert!(session.can_spin());
}

fn assert_idle(session: &SpinSession) {
    assert!(session.can_spin());
    assert_eq!(session.current_offset(), 0.0);
    assert_eq!(session.winning_index(), None);
    assert!(session.revealed_result().is_none());
}

#[test]
fn failed_spin_request_leaves_guard_untouched() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut session = SpinSession::new(SpinGeometry::Strip(StripLayout::for_device(DeviceClass::Mobile)));

    let refused = Err(SpinError::from_response(402, r#"{"error": "Insufficient balance"}"#));
    let err = session.begin_from_response(refused, &mut rng, 0.0).unwrap_err();
    assert_eq!(err.code(), "insufficient_funds");
    assert_eq!(err.user_message(), GENERIC_SPIN_ERROR);
    assert_idle(&session);

    let offline = Err(SpinError::Network("connection reset".into()));
    let err = session.begin_from_response(offline, &mut rng, 0.0).unwrap_err();
    assert_eq!(err.code(), "network");
    assert_eq!(err.user_message(), GENERIC_SPIN_ERROR);
    assert_idle(&session);

    // The guard still lets the next request through.
    let response: SpinResponse = serde_json::from_str(ROULETTE_SPIN).unwrap();
    let started = session.begin_from_response(Ok(response), &mut rng, 0.0).unwrap();
    assert_eq!(started.balance, Some(7.25));
    assert!(!session.can_spin());
}

#[test]
fn malformed_spin_reply_leaves_guard_untouched() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut session = SpinSession::new(SpinGeometry::Wheel(WheelLayout::default()));

    let out_of_range: SpinResponse = serde_json::from_str(
        r#"{"balance": 3.0, "gifts": [{"link": "a.png", "title": "A", "price": 1.0}], "winning_index": 4}"#,
    )
    .unwrap();
    let err = session.begin_from_response(Ok(out_of_range), &mut rng, 0.0).unwrap_err();
    assert!(matches!(err, SpinError::Malformed(_)));
    assert_eq!(err.user_message(), GENERIC_SPIN_ERROR);
    assert_idle(&session);

    let empty: SpinResponse = serde_json::from_str(r#"{"balance": 3.0, "gifts": []}"#).unwrap();
    let err = session.begin_from_response(Ok(empty), &mut rng, 0.0).unwrap_err();
    assert_eq!(err.code(), "malformed");
    assert_idle(&session);
}
