// Shared recording doubles for the integration tests.
#![allow(dead_code)]

use embedded_hal::delay::DelayNs;
use ili9xxx_spi::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Command(u8),
    Data(Vec<u8>),
}

/// Records every call; optionally fails the `n`th `send_command`.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    fail_command: Option<usize>,
    commands_seen: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on_command(n: usize) -> Self {
        Self {
            fail_command: Some(n),
            ..Self::default()
        }
    }

    pub fn commands(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Command(cmd) => Some(*cmd),
                Call::Data(_) => None,
            })
            .collect()
    }

    /// Data payload sent right after the last occurrence of `command`.
    pub fn last_payload(&self, command: u8) -> Option<Vec<u8>> {
        let pos = self.calls.iter().rposition(|c| *c == Call::Command(command))?;
        match self.calls.get(pos + 1) {
            Some(Call::Data(d)) => Some(d.clone()),
            _ => None,
        }
    }
}

impl Transport for Recorder {
    type Error = BusFault;

    fn send_command(&mut self, command: u8) -> Result<(), BusFault> {
        let n = self.commands_seen;
        self.commands_seen += 1;
        if self.fail_command == Some(n) {
            return Err(BusFault);
        }
        self.calls.push(Call::Command(command));
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), BusFault> {
        self.calls.push(Call::Data(data.to_vec()));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Delays {
    pub ms: Vec<u32>,
}

impl DelayNs for Delays {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.ms.push(ms);
    }
}
