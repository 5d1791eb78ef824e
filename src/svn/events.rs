//! Command lifecycle events
//!
//! Each runner owns its own event channel, so several runners (or tests)
//! never observe each other's traffic.

use tokio::sync::broadcast;

/// Capacity of the per-runner event channel
const EVENT_CAPACITY: usize = 256;

/// Something that happened to one svn invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// A command line is about to run (e.g. `svn status`)
    Executed { command_line: String },
    /// The command finished cleanly with this stdout
    Succeeded { output: String },
    /// The command failed with this message (stderr or spawn error)
    Failed { message: String },
}

/// Instance-scoped event emitter for command lifecycle events
#[derive(Debug, Clone)]
pub struct CommandEvents {
    sender: broadcast::Sender<CommandEvent>,
}

impl Default for CommandEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandEvents {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CAPACITY);
        Self { sender }
    }

    /// Subscribe to events emitted after this call
    pub fn subscribe(&self) -> broadcast::Receiver<CommandEvent> {
        self.sender.subscribe()
    }

    /// Emit an event. Having no subscribers is fine.
    pub fn emit(&self, event: CommandEvent) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_without_subscribers_does_not_fail() {
        let events = CommandEvents::new();
        events.emit(CommandEvent::Succeeded {
            output: String::new(),
        });
    }

    #[test]
    fn test_subscribers_are_instance_scoped() {
        let first = CommandEvents::new();
        let second = CommandEvents::new();
        let mut rx_first = first.subscribe();
        let mut rx_second = second.subscribe();

        first.emit(CommandEvent::Executed {
            command_line: "svn status".to_string(),
        });

        assert_eq!(
            rx_first.try_recv().ok(),
            Some(CommandEvent::Executed {
                command_line: "svn status".to_string()
            })
        );
        assert!(rx_second.try_recv().is_err());
    }
}
