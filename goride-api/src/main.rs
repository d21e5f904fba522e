use anyhow::Context;
use goride_api::{Engine, EngineConfig, SearchRequest};
use goride_booking::PassengerInfo;
use goride_chat::ChatTranscript;
use goride_shared::format_inr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "goride=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = EngineConfig::load().context("Failed to load config")?;
    let mut engine = Engine::new(config);

    println!("Popular routes:");
    for route in goride_catalog::popular_routes() {
        println!(
            "  {:<10} → {:<8} {:>7} · {:>2} buses · {}",
            route.origin,
            route.destination,
            route.duration.to_string(),
            route.bus_count,
            format_inr(route.base_price)
        );
    }

    let request = SearchRequest::new("Mumbai", "Pune", chrono::Local::now().date_naive(), 2);
    let offers = engine.search(&request).await?;

    println!();
    println!(
        "{} buses for {} → {}:",
        offers.len(),
        request.origin,
        request.destination
    );
    for offer in &offers {
        println!(
            "  {:<18} {:<14} {}  {:>6}  {} seats left",
            offer.operator,
            offer.service_class.to_string(),
            offer.timing(),
            format_inr(offer.price),
            offer.seats_left
        );
    }

    // The list is price-sorted, so the head is the cheapest ride
    let chosen = offers
        .first()
        .cloned()
        .context("search returned no buses")?;
    let travel_date = request.travel_date.context("demo search carries a date")?;

    let mut session = engine.open_seat_selection(&chosen, travel_date, request.passengers);
    let picks: Vec<String> = session
        .seat_map()
        .available_seats()
        .into_iter()
        .take(request.passengers as usize)
        .collect();
    for seat in &picks {
        session.toggle_seat(seat)?;
    }
    let summary = session.summary();
    println!();
    println!(
        "Boarding {} · seats {} · total {}",
        chosen.operator, summary.seats, summary.total_display
    );

    let passenger = PassengerInfo::new("Asha Rao", "asha@example.com", "9876543210");
    let ticket = engine.confirm_booking(&mut session, passenger).await?;

    println!();
    println!("Ticket #{}", ticket.ticket_id);
    println!("  {} · {}", ticket.bus.operator, ticket.bus.leg());
    println!("  {}", ticket.bus.timing());
    println!(
        "  {} · seats {} · total {}",
        ticket.travel_date.format("%A, %d %B %Y"),
        ticket.seats.join(", "),
        ticket.total_display()
    );

    println!();
    let mut transcript = ChatTranscript::new();
    for line in ["Hi!", "How do I cancel my ticket?", "asdkjqwe"] {
        println!("you: {line}");
        let reply = engine.chat(&mut transcript, line).await;
        println!("bot: {}", reply.text);
    }

    Ok(())
}
