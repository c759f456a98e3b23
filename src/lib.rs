//! # cyrex
//!
//! Scenario-based cybersecurity awareness assessment for the terminal.
//!
//! Users pick an age bracket, answer multiple-choice scam scenarios and get a
//! scored risk level, with every completed run saved to their history.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cyrex::{Cyrex, config::Cli, store::IdentityProvider};
//! use clap::Parser;
//!
//! # async fn example() -> Result<(), cyrex::Error> {
//! let config = Cli::parse().config();
//! let stores = config.stores();
//! let user = stores.identity.sign_in(&config.user).await?;
//!
//! Cyrex::new(stores, user, config.locale).run().await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod assessment;
pub mod backend;
pub mod config;
mod error;
pub mod i18n;
pub mod models;
pub mod protocol;
pub mod scoring;
pub mod store;
pub mod terminal;
mod ui;

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::info;

pub use app::App;
pub use backend::{Backend, Stores};
pub use error::{Error, Result};

use i18n::Locale;
use models::User;
use protocol::Response;
use terminal::TerminalSession;

const INPUT_POLL: Duration = Duration::from_millis(50);

/// An interactive session bound to a signed-in user.
pub struct Cyrex {
    app: App,
    backend: Backend,
    responses: mpsc::UnboundedReceiver<Response>,
}

impl Cyrex {
    pub fn new(stores: Stores, user: User, locale: Option<Locale>) -> Self {
        let (tx, responses) = mpsc::unbounded_channel();
        Self {
            app: App::new(user, locale),
            backend: Backend::new(stores, tx),
            responses,
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Takes over the terminal until the user quits.
    pub async fn run(mut self) -> Result<()> {
        info!(user = %self.app.user().username, "session started");

        let mut session = TerminalSession::enter()?;
        let result = self.event_loop(&mut session).await;
        drop(session);

        info!("session ended");
        result
    }

    async fn event_loop(&mut self, session: &mut TerminalSession) -> Result<()> {
        loop {
            while let Ok(response) = self.responses.try_recv() {
                self.app.apply(response);
            }

            if self.app.should_quit {
                return Ok(());
            }

            session.draw(|frame| ui::render(frame, &self.app))?;

            if !event::poll(INPUT_POLL)? {
                tokio::task::yield_now().await;
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    return Ok(());
                }

                if let Some(request) = self.app.handle_key(key.code) {
                    self.backend.dispatch(request);
                }
            }
        }
    }
}
