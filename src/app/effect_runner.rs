//! Executes side effects returned by the reducer.
//!
//! Deferred effects (fetch, create, update, test) run on spawned tasks and
//! report back by sending their completion action through the channel;
//! notification and callback effects run inline, preserving order.

use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::ports::{ConnectionTester, ModalCallbacks, NotificationSink, ResourceClient};

pub struct EffectRunner {
    resource_client: Arc<dyn ResourceClient>,
    connection_tester: Arc<dyn ConnectionTester>,
    notifier: Arc<dyn NotificationSink>,
    callbacks: Arc<dyn ModalCallbacks>,
    action_tx: mpsc::Sender<Action>,
}

impl EffectRunner {
    pub fn new(
        resource_client: Arc<dyn ResourceClient>,
        connection_tester: Arc<dyn ConnectionTester>,
        notifier: Arc<dyn NotificationSink>,
        callbacks: Arc<dyn ModalCallbacks>,
        action_tx: mpsc::Sender<Action>,
    ) -> Self {
        Self {
            resource_client,
            connection_tester,
            notifier,
            callbacks,
            action_tx,
        }
    }

    pub async fn run(&self, effects: Vec<Effect>, tasks: &mut JoinSet<()>) -> Result<()> {
        for effect in effects {
            self.run_single(effect, tasks).await?;
        }
        Ok(())
    }

    async fn run_single(&self, effect: Effect, tasks: &mut JoinSet<()>) -> Result<()> {
        match effect {
            Effect::FetchDetail { id, generation } => {
                tracing::debug!(%id, generation, "fetching connection details");
                let client = Arc::clone(&self.resource_client);
                let tx = self.action_tx.clone();
                tasks.spawn(async move {
                    let action = match client.fetch_by_id(id).await {
                        Ok(record) => Action::DetailFetched {
                            generation,
                            record: Box::new(record),
                        },
                        Err(err) => Action::DetailFetchFailed {
                            generation,
                            message: err.to_string(),
                        },
                    };
                    let _ = tx.send(action).await;
                });
                Ok(())
            }
            Effect::CreateRecord { draft } => {
                let client = Arc::clone(&self.resource_client);
                let notifier = Arc::clone(&self.notifier);
                let tx = self.action_tx.clone();
                tasks.spawn(async move {
                    let action = match client.create(&draft).await {
                        Ok(id) => Action::CreateCompleted { id },
                        Err(err) => {
                            let message = format!("Failed to create database connection: {}", err);
                            notifier.report_error(&message);
                            Action::CreateFailed {
                                message: err.to_string(),
                            }
                        }
                    };
                    let _ = tx.send(action).await;
                });
                Ok(())
            }
            Effect::UpdateRecord { id, payload } => {
                let client = Arc::clone(&self.resource_client);
                let notifier = Arc::clone(&self.notifier);
                let tx = self.action_tx.clone();
                tasks.spawn(async move {
                    let action = match client.update(id, &payload).await {
                        Ok(record) => Action::UpdateCompleted {
                            record: Box::new(record),
                        },
                        Err(err) => {
                            let message = format!("Failed to update database connection: {}", err);
                            notifier.report_error(&message);
                            Action::UpdateFailed {
                                message: err.to_string(),
                            }
                        }
                    };
                    let _ = tx.send(action).await;
                });
                Ok(())
            }
            Effect::TestConnection { payload } => {
                let tester = Arc::clone(&self.connection_tester);
                let notifier = Arc::clone(&self.notifier);
                tasks.spawn(async move {
                    match tester.test(&payload).await {
                        Ok(()) => notifier.report_success("Connection looks good"),
                        Err(err) => notifier.report_error(&err.to_string()),
                    }
                });
                Ok(())
            }
            Effect::NotifyError { message } => {
                self.notifier.report_error(&message);
                Ok(())
            }
            Effect::NotifySuccess { message } => {
                self.notifier.report_success(&message);
                Ok(())
            }
            Effect::NotifySaved { record } => {
                self.callbacks.on_saved(record.map(|boxed| *boxed));
                Ok(())
            }
            Effect::CloseModal => {
                tracing::debug!("closing modal");
                self.callbacks.on_close();
                Ok(())
            }
        }
    }
}
