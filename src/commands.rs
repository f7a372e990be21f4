//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::model::ui::NotificationKind;
use crate::reorder::ReorderRequest;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the UI
    Redraw,
    /// Persist a reorder asynchronously.
    /// Sends Msg::Reorder(PersistCompleted) when done
    PersistReorder(ReorderRequest),
    /// Forward a notification to the external sink
    Notify {
        message: String,
        kind: NotificationKind,
    },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Persistence runs in the background; its completion redraws
            Cmd::PersistReorder(_) => false,
            Cmd::Notify { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Every persistence request in this command, batches flattened
    pub fn persist_requests(&self) -> Vec<&ReorderRequest> {
        let mut out = Vec::new();
        self.visit(&mut |cmd| {
            if let Cmd::PersistReorder(request) = cmd {
                out.push(request);
            }
        });
        out
    }

    /// Every notification in this command, batches flattened
    pub fn notifications(&self) -> Vec<(&str, NotificationKind)> {
        let mut out = Vec::new();
        self.visit(&mut |cmd| {
            if let Cmd::Notify { message, kind } = cmd {
                out.push((message.as_str(), *kind));
            }
        });
        out
    }

    fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Cmd)) {
        match self {
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    cmd.visit(f);
                }
            }
            other => f(other),
        }
    }
}
