use std::sync::Arc;

use tokio::sync::mpsc::Sender;
use tracing::warn;

use contact_core::{CsrfToken, FieldId, FormClient, SubmitError, TokenError, WidgetState};

/// Outcome of a background network call, applied between draws
#[derive(Debug)]
pub enum NetEvent {
    Token(Result<CsrfToken, TokenError>),
    Submit(Result<(), SubmitError>),
}

/// Which control owns keyboard input in the form view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    Submit,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Field(FieldId::FirstName) => Focus::Field(FieldId::LastName),
            Focus::Field(FieldId::LastName) => Focus::Field(FieldId::Email),
            Focus::Field(FieldId::Email) => Focus::Field(FieldId::Phone),
            Focus::Field(FieldId::Phone) => Focus::Field(FieldId::Message),
            Focus::Field(FieldId::Message) => Focus::Submit,
            Focus::Submit => Focus::Field(FieldId::FirstName),
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Focus::Field(FieldId::FirstName) => Focus::Submit,
            Focus::Field(FieldId::LastName) => Focus::Field(FieldId::FirstName),
            Focus::Field(FieldId::Email) => Focus::Field(FieldId::LastName),
            Focus::Field(FieldId::Phone) => Focus::Field(FieldId::Email),
            Focus::Field(FieldId::Message) => Focus::Field(FieldId::Phone),
            Focus::Submit => Focus::Field(FieldId::Message),
        }
    }
}

/// One mounted contact-form widget
pub struct App {
    pub state: WidgetState,
    pub focus: Focus,
    /// A submission is in flight; further submits are ignored until it lands
    pub submitting: bool,
    pub running: bool,
    /// Draw counter, drives the loading spinner
    pub tick: u64,
    client: Arc<FormClient>,
    net_tx: Sender<NetEvent>,
}

impl App {
    pub fn new(client: Arc<FormClient>, net_tx: Sender<NetEvent>) -> Self {
        Self {
            state: WidgetState::new(),
            focus: Focus::Field(FieldId::FirstName),
            submitting: false,
            running: true,
            tick: 0,
            client,
            net_tx,
        }
    }

    /// Kick off the one-shot token fetch. The runtime calls this exactly
    /// once per mount; redraws never re-issue the request.
    pub fn spawn_token_fetch(&self) {
        let client = self.client.clone();
        let tx = self.net_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_csrf_token().await;
            let _ = tx.send(NetEvent::Token(result)).await;
        });
    }

    /// POST the current form, unless one is already in flight
    pub fn begin_submit(&mut self) {
        if self.submitting {
            return;
        }
        let (fields, token) = match &self.state {
            WidgetState::Ready { fields, token, .. } => (fields.clone(), token.clone()),
            _ => return,
        };
        self.submitting = true;
        let client = self.client.clone();
        let tx = self.net_tx.clone();
        tokio::spawn(async move {
            let result = client.submit(&fields, &token).await;
            let _ = tx.send(NetEvent::Submit(result)).await;
        });
    }

    pub fn apply_net_event(&mut self, event: NetEvent) {
        match event {
            NetEvent::Token(Ok(token)) => self.state.token_acquired(token),
            NetEvent::Token(Err(err)) => {
                warn!(error = %err, "token acquisition failed");
                self.state.token_failed();
            }
            NetEvent::Submit(result) => {
                self.submitting = false;
                match result {
                    Ok(()) => self.state.submit_accepted(),
                    Err(err) => {
                        warn!(error = %err, "submission failed");
                        self.state.submit_rejected(err.user_message());
                    }
                }
            }
        }
    }

    /// Append a character to the focused field
    pub fn edit_char(&mut self, c: char) {
        if let (Focus::Field(id), WidgetState::Ready { fields, .. }) =
            (self.focus, &mut self.state)
        {
            fields.get_mut(id).push(c);
        }
    }

    /// Remove the last character of the focused field
    pub fn edit_backspace(&mut self) {
        if let (Focus::Field(id), WidgetState::Ready { fields, .. }) =
            (self.focus, &mut self.state)
        {
            fields.get_mut(id).pop();
        }
    }

    /// Field mode shows the (otherwise hidden) token row in the form
    pub fn is_field_mode(&self) -> bool {
        self.client.transport().is_field_mode()
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contact_core::WidgetConfig;
    use tokio::sync::mpsc;

    fn test_app(field_mode: bool) -> (App, mpsc::Receiver<NetEvent>) {
        let config = WidgetConfig {
            csrf_url: Some("http://localhost:1/csrf".into()),
            submit_url: Some("http://localhost:1/contact".into()),
            csrf_header_name: (!field_mode).then(|| "X-CSRF-Token".to_string()),
            csrf_field_name: field_mode.then(|| "csrfToken".to_string()),
        };
        let client = Arc::new(FormClient::new(&config).unwrap());
        let (tx, rx) = mpsc::channel(8);
        (App::new(client, tx), rx)
    }

    fn ready_app(field_mode: bool) -> (App, mpsc::Receiver<NetEvent>) {
        let (mut app, rx) = test_app(field_mode);
        app.apply_net_event(NetEvent::Token(Ok(CsrfToken::new("randomToken"))));
        (app, rx)
    }

    #[test]
    fn focus_cycles_through_all_controls() {
        let mut focus = Focus::Field(FieldId::FirstName);
        for _ in 0..6 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Field(FieldId::FirstName));
        assert_eq!(Focus::Field(FieldId::FirstName).prev(), Focus::Submit);
    }

    #[test]
    fn keystrokes_edit_the_focused_field() {
        let (mut app, _rx) = ready_app(false);
        app.focus = Focus::Field(FieldId::Email);
        for c in "a@b.c".chars() {
            app.edit_char(c);
        }
        app.edit_backspace();
        match &app.state {
            WidgetState::Ready { fields, .. } => assert_eq!(fields.email, "a@b."),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn editing_outside_ready_is_a_no_op() {
        let (mut app, _rx) = test_app(false);
        app.edit_char('x');
        assert_eq!(app.state, WidgetState::Loading);
    }

    #[tokio::test]
    async fn submit_is_single_flight() {
        let (mut app, mut rx) = ready_app(false);
        app.begin_submit();
        assert!(app.submitting);
        app.begin_submit();

        // The unreachable endpoint fails fast; exactly one outcome arrives.
        let first = rx.recv().await.expect("one submit outcome");
        assert!(matches!(first, NetEvent::Submit(Err(_))));
        app.apply_net_event(first);
        assert!(!app.submitting);
        match &app.state {
            WidgetState::Ready { error, .. } => {
                assert_eq!(error.as_deref(), Some("Unable to connect to server"));
            }
            other => panic!("expected Ready, got {other:?}"),
        }
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn submit_outside_ready_is_ignored() {
        let (mut app, mut rx) = test_app(false);
        app.begin_submit();
        assert!(!app.submitting);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn token_failure_lands_in_failed() {
        let (mut app, _rx) = test_app(true);
        app.apply_net_event(NetEvent::Token(Err(contact_core::TokenError::MissingField(
            "csrfToken".into(),
        ))));
        assert!(matches!(app.state, WidgetState::Failed { .. }));
    }

    #[test]
    fn transport_mode_drives_token_row() {
        let (app, _rx) = test_app(true);
        assert!(app.is_field_mode());
        let (app, _rx) = test_app(false);
        assert!(!app.is_field_mode());
    }
}
