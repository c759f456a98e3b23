//! Runs app requests against the stores off the UI task.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::warn;

use crate::protocol::{Request, Response};
use crate::store::{IdentityProvider, QuestionStore, ResultStore, StoreError};

/// The three collaborators the front end depends on.
#[derive(Clone)]
pub struct Stores {
    pub questions: Arc<dyn QuestionStore>,
    pub results: Arc<dyn ResultStore>,
    pub identity: Arc<dyn IdentityProvider>,
}

#[derive(Clone)]
pub struct Backend {
    stores: Stores,
    tx: mpsc::UnboundedSender<Response>,
}

impl Backend {
    pub fn new(stores: Stores, tx: mpsc::UnboundedSender<Response>) -> Self {
        Self { stores, tx }
    }

    /// Spawns the request and sends its response when it finishes.
    pub fn dispatch(&self, request: Request) {
        let backend = self.clone();
        tokio::spawn(async move {
            let response = backend.handle(request).await;
            // Receiver gone means the UI has shut down.
            let _ = backend.tx.send(response);
        });
    }

    pub async fn handle(&self, request: Request) -> Response {
        match request {
            Request::FetchQuestions { age_group } => Response::Questions {
                age_group,
                result: report(
                    "fetch questions",
                    self.stores.questions.questions(age_group).await,
                ),
            },
            Request::SaveResult {
                user_id,
                assessment,
            } => Response::Saved(report(
                "save result",
                self.stores.results.save(user_id, assessment).await,
            )),
            Request::FetchHistory { user_id } => Response::History(report(
                "fetch history",
                self.stores.results.history(user_id).await,
            )),
            Request::SaveProfile { user_id, profile } => Response::ProfileSaved(report(
                "save profile",
                self.stores.identity.update_profile(user_id, profile).await,
            )),
            Request::SaveLocale { user_id, locale } => Response::LocaleSaved(report(
                "save locale",
                self.stores.identity.set_locale(user_id, locale).await,
            )),
        }
    }
}

fn report<T>(operation: &str, result: Result<T, StoreError>) -> Result<T, String> {
    result.map_err(|err| {
        warn!(%err, "{operation} failed");
        err.to_string()
    })
}
