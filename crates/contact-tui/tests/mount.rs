//! Renders a mounted widget into a test backend and checks the draw/fetch
//! contract end to end.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use ratatui::{backend::TestBackend, Terminal};
use tokio::sync::mpsc;

use contact_core::{CsrfToken, FieldId, FormClient, WidgetConfig, WidgetState};
use contact_tui::render::render;
use contact_tui::ui::{App, Focus, NetEvent};

fn offline_config() -> WidgetConfig {
    WidgetConfig {
        csrf_url: Some("http://localhost:1/csrf".into()),
        submit_url: Some("http://localhost:1/contact".into()),
        csrf_header_name: Some("X-CSRF-Token".into()),
        csrf_field_name: None,
    }
}

/// An app already in the Ready phase, never touching the network
fn ready_app() -> App {
    let client = Arc::new(FormClient::new(&offline_config()).unwrap());
    let (tx, _rx) = mpsc::channel::<NetEvent>(8);
    let mut app = App::new(client, tx);
    app.state.token_acquired(CsrfToken::new("randomToken"));
    app
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn form_survives_a_short_terminal() {
    let mut app = ready_app();
    app.focus = Focus::Field(FieldId::Message);
    let mut terminal = Terminal::new(TestBackend::new(56, 5)).unwrap();
    // Rows past the bottom are dropped rather than drawn out of bounds.
    terminal.draw(|f| render(f, &app)).unwrap();

    let mut terminal = Terminal::new(TestBackend::new(10, 1)).unwrap();
    terminal.draw(|f| render(f, &app)).unwrap();
}

#[test]
fn form_shows_hints_on_a_large_terminal() {
    let app = ready_app();
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    terminal.draw(|f| render(f, &app)).unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("First Name"));
    assert!(text.contains("[ Submit ]"));
    assert!(text.contains("Tab"));
    assert!(text.contains("switch field"));
}

#[test]
fn failed_state_renders_no_form_fields() {
    let client = Arc::new(FormClient::new(&offline_config()).unwrap());
    let (tx, _rx) = mpsc::channel::<NetEvent>(8);
    let mut app = App::new(client, tx);
    app.state.token_failed();

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| render(f, &app)).unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Unable to load contact form"));
    assert!(!text.contains("First Name"));
    assert!(!text.contains("[ Submit ]"));
}

#[tokio::test]
async fn redrawing_never_reissues_the_token_fetch() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let router = Router::new().route(
        "/csrf",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                ([("X-CSRF-Token", "randomToken")], "ok")
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let config = WidgetConfig {
        csrf_url: Some(format!("http://{addr}/csrf")),
        submit_url: Some(format!("http://{addr}/contact")),
        ..offline_config()
    };
    let client = Arc::new(FormClient::new(&config).unwrap());
    let (tx, mut rx) = mpsc::channel::<NetEvent>(8);
    let mut app = App::new(client, tx);

    // One fetch per mount, as the runtime does before its draw loop.
    app.spawn_token_fetch();
    let event = rx.recv().await.expect("token outcome");
    app.apply_net_event(event);
    assert!(matches!(app.state, WidgetState::Ready { .. }));

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    for _ in 0..5 {
        terminal.draw(|f| render(f, &app)).unwrap();
    }

    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
