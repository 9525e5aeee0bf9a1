//! Declarative register sequences and the runner that plays them.

use embedded_hal::delay::DelayNs;
use log::trace;

use crate::error::Error;
use crate::interface::Transport;

/// One register write: command byte, parameter bytes, optional settle time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterStep {
    pub command: u8,
    pub parameters: &'static [u8],
    pub post_delay_ms: Option<u32>,
}

impl RegisterStep {
    pub const fn new(command: u8, parameters: &'static [u8]) -> Self {
        Self {
            command,
            parameters,
            post_delay_ms: None,
        }
    }

    pub const fn with_delay(command: u8, parameters: &'static [u8], delay_ms: u32) -> Self {
        Self {
            command,
            parameters,
            post_delay_ms: Some(delay_ms),
        }
    }
}

/// Send one command and its parameters. No delay handling.
pub fn write_register<T: Transport>(
    transport: &mut T,
    command: u8,
    parameters: &[u8],
) -> Result<(), T::Error> {
    transport.send_command(command)?;
    if !parameters.is_empty() {
        transport.send_data(parameters)?;
    }
    Ok(())
}

/// Play `steps` strictly in order.
///
/// The first transport failure stops the run; nothing after it is sent and
/// nothing is retried. The error carries the zero-based index of the step
/// that failed.
pub fn run_sequence<T, D>(
    transport: &mut T,
    delay: &mut D,
    steps: &[RegisterStep],
) -> Result<(), Error<T::Error>>
where
    T: Transport,
    D: DelayNs,
{
    run_sequence_from(transport, delay, steps, 0)
}

// `first_index` lets callers continue numbering after an earlier sequence.
pub(crate) fn run_sequence_from<T, D>(
    transport: &mut T,
    delay: &mut D,
    steps: &[RegisterStep],
    first_index: usize,
) -> Result<(), Error<T::Error>>
where
    T: Transport,
    D: DelayNs,
{
    for (i, step) in steps.iter().enumerate() {
        let index = first_index + i;
        trace!("step {}: cmd {:#04x} ({} params)", index, step.command, step.parameters.len());

        write_register(transport, step.command, step.parameters).map_err(|source| {
            Error::InitializationFailed {
                step: index,
                command: step.command,
                source,
            }
        })?;

        if let Some(ms) = step.post_delay_ms {
            delay.delay_ms(ms);
        }
    }
    Ok(())
}
