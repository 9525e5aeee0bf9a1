// Recording transport/delay used by the unit tests.

use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::interface::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Command(u8),
    Data(Vec<u8>),
}

#[derive(Debug, Default)]
pub struct MockTransport {
    pub calls: Vec<Call>,
    fail_command: Option<usize>,
    fail_data: Option<usize>,
    commands_seen: usize,
    data_seen: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `n`th (zero-based) `send_command` call fails and is not recorded.
    pub fn failing_on_command(n: usize) -> Self {
        Self {
            fail_command: Some(n),
            ..Self::default()
        }
    }

    /// The `n`th (zero-based) `send_data` call fails and is not recorded.
    pub fn failing_on_data(n: usize) -> Self {
        Self {
            fail_data: Some(n),
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

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Transport for MockTransport {
    type Error = MockError;

    fn send_command(&mut self, command: u8) -> Result<(), MockError> {
        let n = self.commands_seen;
        self.commands_seen += 1;
        if self.fail_command == Some(n) {
            return Err(MockError);
        }
        self.calls.push(Call::Command(command));
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), MockError> {
        let n = self.data_seen;
        self.data_seen += 1;
        if self.fail_data == Some(n) {
            return Err(MockError);
        }
        self.calls.push(Call::Data(data.to_vec()));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MockDelay {
    pub delays_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}
