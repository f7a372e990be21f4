//! Message loop: runs `update`, executes the commands it returns and feeds
//! background results back in as messages.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::commands::Cmd;
use crate::messages::{Msg, ReorderMsg};
use crate::model::AppModel;
use crate::reorder::Persistence;
use crate::update::update;

use super::notifier::Notifier;

pub struct App<P: Persistence> {
    model: AppModel,
    persistence: Arc<P>,
    notifier: Box<dyn Notifier>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    /// Persistence calls spawned but not yet reported back
    in_flight: usize,
}

impl<P: Persistence> App<P> {
    pub fn new(model: AppModel, persistence: Arc<P>, notifier: Box<dyn Notifier>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            persistence,
            notifier,
            msg_tx,
            msg_rx,
            in_flight: 0,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut AppModel {
        &mut self.model
    }

    pub fn into_model(self) -> AppModel {
        self.model
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Run one message through `update` and execute the resulting command.
    /// Returns true if the UI needs a redraw.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        if let Msg::Reorder(ReorderMsg::PersistCompleted { .. }) = &msg {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        match update(&mut self.model, msg) {
            Some(cmd) => {
                let redraw = cmd.needs_redraw();
                self.process_cmd(cmd);
                redraw
            }
            None => false,
        }
    }

    /// Dispatch every message that background work has posted so far.
    /// Returns the number of messages handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
            handled += 1;
        }
        handled
    }

    /// Block until every spawned persistence call has reported back.
    /// Returns false if `timeout` elapsed first.
    pub fn wait_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.in_flight > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.msg_rx.recv_timeout(remaining) {
                Ok(msg) => {
                    self.dispatch(msg);
                }
                Err(RecvTimeoutError::Timeout) => {
                    warn!(in_flight = self.in_flight, "timed out waiting for persistence");
                    return false;
                }
                // We hold a sender ourselves, so this only happens on teardown
                Err(RecvTimeoutError::Disconnected) => return false,
            }
        }
        true
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::PersistReorder(request) => {
                debug!(ticket = request.ticket, "spawning persistence call");
                self.in_flight += 1;
                let tx = self.msg_tx.clone();
                let persistence = Arc::clone(&self.persistence);
                std::thread::spawn(move || {
                    let result = persistence.persist_reorder(&request);
                    let _ = tx.send(Msg::Reorder(ReorderMsg::PersistCompleted {
                        ticket: request.ticket,
                        result,
                    }));
                });
            }
            Cmd::Notify { message, kind } => {
                self.notifier.notify(&message, kind);
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}
