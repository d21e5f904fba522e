use chrono::NaiveDate;
use goride_api::{DelayConfig, Engine, EngineConfig, SearchError, SearchRequest};
use goride_booking::{BookingError, PassengerInfo, SeatMapError, SessionStatus, TICKET_PREFIX};
use goride_chat::{ChatTranscript, Sender};

fn test_engine(seed: u64) -> Engine {
    Engine::new(EngineConfig {
        delays: DelayConfig::none(),
        seed: Some(seed),
        ..EngineConfig::default()
    })
}

fn travel_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

#[tokio::test]
async fn test_search_validation_errors() {
    let mut engine = test_engine(1);

    let blank_origin = SearchRequest {
        origin: "   ".to_string(),
        destination: "Pune".to_string(),
        travel_date: Some(travel_date()),
        passengers: 1,
    };
    assert_eq!(
        engine.search(&blank_origin).await,
        Err(SearchError::MissingOrigin)
    );

    let no_date = SearchRequest {
        origin: "Mumbai".to_string(),
        destination: "Pune".to_string(),
        travel_date: None,
        passengers: 1,
    };
    assert_eq!(engine.search(&no_date).await, Err(SearchError::MissingDate));

    let same_city = SearchRequest::new("mumbai", "MUMBAI", travel_date(), 1);
    assert_eq!(engine.search(&same_city).await, Err(SearchError::SameCity));
}

#[tokio::test]
async fn test_end_to_end_booking_flow() {
    let mut engine = test_engine(42);

    let request = SearchRequest::new("Mumbai", "Pune", travel_date(), 2);
    let offers = engine.search(&request).await.unwrap();

    assert!(offers.len() >= 4 && offers.len() <= 7);
    assert!(offers.windows(2).all(|w| w[0].price <= w[1].price));

    let chosen = offers[0].clone();
    let mut session = engine.open_seat_selection(&chosen, travel_date(), request.passengers);

    // Pick up to the passenger cap, then verify the cap holds
    let available = session.seat_map().available_seats();
    assert!(available.len() >= 3);
    session.toggle_seat(&available[0]).unwrap();
    session.toggle_seat(&available[1]).unwrap();
    assert_eq!(
        session.toggle_seat(&available[2]),
        Err(SeatMapError::CapacityReached { capacity: 2 })
    );

    let summary = session.summary();
    assert!(summary.can_book);
    assert_eq!(summary.total, 2 * chosen.price);

    let passenger = PassengerInfo::new("Asha Rao", "asha@example.com", "9876543210");
    let ticket = engine
        .confirm_booking(&mut session, passenger.clone())
        .await
        .unwrap();

    assert!(ticket.ticket_id.starts_with(TICKET_PREFIX));
    assert_eq!(ticket.seats, [available[0].clone(), available[1].clone()]);
    assert_eq!(ticket.total, 2 * chosen.price);
    assert_eq!(session.status(), SessionStatus::Confirmed);

    // The session is closed; booking again needs a fresh one
    assert_eq!(
        engine.confirm_booking(&mut session, passenger).await,
        Err(BookingError::SessionClosed(SessionStatus::Confirmed))
    );
}

#[tokio::test]
async fn test_blank_contact_fields_fail_before_the_pause() {
    let mut engine = test_engine(9);

    let request = SearchRequest::new("Delhi", "Jaipur", travel_date(), 1);
    let offers = engine.search(&request).await.unwrap();
    let mut session = engine.open_seat_selection(&offers[0], travel_date(), 1);
    let seat = session.seat_map().available_seats()[0].clone();
    session.toggle_seat(&seat).unwrap();

    let blank_phone = PassengerInfo::new("Asha", "asha@example.com", "  ");
    let result = engine.confirm_booking(&mut session, blank_phone).await;
    assert!(matches!(result, Err(BookingError::MissingField(_))));
    // The rejection leaves the session open for re-entry
    assert_eq!(session.status(), SessionStatus::Selecting);
}

#[tokio::test]
async fn test_seeded_engines_reproduce_searches() {
    let request = SearchRequest::new("Bangalore", "Chennai", travel_date(), 1);

    let first = test_engine(7).search(&request).await.unwrap();
    let second = test_engine(7).search(&request).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_chat_exchanges_grow_the_transcript_in_pairs() {
    let mut engine = test_engine(3);
    let mut transcript = ChatTranscript::new();

    // Opens with the bot greeting
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript.messages()[0].sender, Sender::Bot);

    let reply = engine.chat(&mut transcript, "How do I cancel my ticket?").await;
    assert!(reply.text.contains("full refund"));
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript.messages()[1].sender, Sender::User);
    assert_eq!(transcript.messages()[2].sender, Sender::Bot);

    let fallback = engine.chat(&mut transcript, "asdkjqwe").await;
    assert_eq!(fallback.text, goride_chat::DEFAULT_REPLY);
    assert_eq!(transcript.len(), 5);
}
