use bevy::prelude::*;
use crossbeam_channel::{Receiver, Sender, TryRecvError};

use crate::protocol::{Command, ProtocolError, Response};

/// Session side of the message link. The transport that feeds it lives
/// outside the simulation.
#[derive(Resource)]
pub struct SessionLink {
    inbound: Receiver<Command>,
    outbound: Sender<Response>,
}

/// Transport side of the message link.
#[derive(Clone)]
pub struct SessionEndpoint {
    commands: Sender<Command>,
    responses: Receiver<Response>,
}

impl SessionLink {
    pub fn pair() -> (SessionLink, SessionEndpoint) {
        let (command_tx, command_rx) = crossbeam_channel::unbounded();
        let (response_tx, response_rx) = crossbeam_channel::unbounded();
        (
            SessionLink {
                inbound: command_rx,
                outbound: response_tx,
            },
            SessionEndpoint {
                commands: command_tx,
                responses: response_rx,
            },
        )
    }

    /// Every command queued since the last tick, without blocking.
    pub fn drain_commands(&self) -> Vec<Command> {
        let mut commands = Vec::new();
        loop {
            match self.inbound.try_recv() {
                Ok(command) => commands.push(command),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!("Command channel disconnected");
                    break;
                }
            }
        }
        commands
    }

    pub fn send(&self, response: Response) {
        if self.outbound.send(response).is_err() {
            debug!("Response dropped, endpoint closed");
        }
    }
}

impl SessionEndpoint {
    pub fn send(&self, command: Command) -> bool {
        self.commands.send(command).is_ok()
    }

    /// Decodes a raw JSON message and queues it.
    pub fn send_json(&self, message: &str) -> Result<bool, ProtocolError> {
        let command = Command::decode(message)?;
        Ok(self.send(command))
    }

    pub fn drain(&self) -> Vec<Response> {
        self.responses.try_iter().collect()
    }

    pub fn responses(&self) -> &Receiver<Response> {
        &self.responses
    }
}
