//! Event-queue driver for the modal: owns the state, dispatches actions
//! through the pure reducer, and feeds completions of asynchronous work
//! back into the queue.

use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::app::action::Action;
use crate::app::effect_runner::EffectRunner;
use crate::app::ports::{ConnectionTester, ModalCallbacks, NotificationSink, ResourceClient};
use crate::app::reducer::reduce;
use crate::app::shared_config::SharedConfig;
use crate::app::state::ModalState;
use crate::domain::DatabaseRecord;

const ACTION_CHANNEL_CAPACITY: usize = 64;

pub struct ModalController {
    state: ModalState,
    runner: EffectRunner,
    action_rx: mpsc::Receiver<Action>,
    tasks: JoinSet<()>,
    shared_config: SharedConfig,
}

impl ModalController {
    pub fn new(
        resource_client: Arc<dyn ResourceClient>,
        connection_tester: Arc<dyn ConnectionTester>,
        notifier: Arc<dyn NotificationSink>,
        callbacks: Arc<dyn ModalCallbacks>,
        shared_config: SharedConfig,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::channel(ACTION_CHANNEL_CAPACITY);
        let runner = EffectRunner::new(
            resource_client,
            connection_tester,
            notifier,
            callbacks,
            action_tx,
        );
        Self {
            state: ModalState::new(),
            runner,
            action_rx,
            tasks: JoinSet::new(),
            shared_config,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Opaque configuration for the rendering layer; the core never reads
    /// into it.
    pub fn shared_config(&self) -> &SharedConfig {
        &self.shared_config
    }

    /// One logical turn: reduce the action, then execute the resulting
    /// effects.
    pub async fn dispatch(&mut self, action: Action) -> Result<()> {
        let effects = reduce(&mut self.state, action);
        self.runner.run(effects, &mut self.tasks).await
    }

    /// Drives outstanding asynchronous work to completion, dispatching each
    /// completion action as it arrives. Returns once no tasks remain and
    /// the queue is drained.
    pub async fn settle(&mut self) -> Result<()> {
        loop {
            while let Ok(action) = self.action_rx.try_recv() {
                self.dispatch(action).await?;
            }
            if self.tasks.join_next().await.is_none() && self.action_rx.is_empty() {
                return Ok(());
            }
        }
    }

    // Caller-prop conveniences; each is a single dispatched action.

    pub async fn open(&mut self, record: Option<DatabaseRecord>) -> Result<()> {
        self.dispatch(Action::Open {
            record: record.map(Box::new),
        })
        .await
    }

    pub async fn show(&mut self) -> Result<()> {
        self.dispatch(Action::Show).await
    }

    pub async fn cancel(&mut self) -> Result<()> {
        self.dispatch(Action::Cancel).await
    }

    pub async fn save(&mut self) -> Result<()> {
        self.dispatch(Action::Save).await
    }

    pub async fn test_connection(&mut self) -> Result<()> {
        self.dispatch(Action::TestConnection).await
    }
}
