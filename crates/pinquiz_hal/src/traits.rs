use thiserror::Error;

#[derive(Debug, Error)]
pub enum LineError {
    #[error("chip open failed: {0}")]
    ChipOpen(String),
    #[error("request for line {name} (offset {offset}) failed: {reason}")]
    RequestFailed {
        name: String,
        offset: u32,
        reason: String,
    },
    #[error("line {0} is not requested")]
    NotRequested(String),
    #[error("line {name} is not an {expected}")]
    WrongDirection { name: String, expected: Direction },
    #[error("read from line {name} failed: {reason}")]
    ReadFailed { name: String, reason: String },
    #[error("write to line {name} failed: {reason}")]
    WriteFailed { name: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Input => write!(f, "input"),
            Direction::Output => write!(f, "output"),
        }
    }
}

/// A source of digital lines addressed by name. Lines must be requested
/// before they can be read or written, and a released line stays unusable
/// until requested again.
pub trait LineBackend: Send {
    fn request_input(&mut self, name: &str, offset: u32) -> Result<(), LineError>;
    fn request_output(&mut self, name: &str, offset: u32, initial: u8) -> Result<(), LineError>;
    /// Read the current value of an input line: 0 or 1 (active-low wiring
    /// means 0 is "pressed").
    fn read_line(&mut self, name: &str) -> Result<u8, LineError>;
    fn write_line(&mut self, name: &str, value: u8) -> Result<(), LineError>;
    fn release(&mut self, name: &str);
    fn release_all(&mut self);
}

impl LineBackend for Box<dyn LineBackend> {
    fn request_input(&mut self, name: &str, offset: u32) -> Result<(), LineError> {
        (**self).request_input(name, offset)
    }
    fn request_output(&mut self, name: &str, offset: u32, initial: u8) -> Result<(), LineError> {
        (**self).request_output(name, offset, initial)
    }
    fn read_line(&mut self, name: &str) -> Result<u8, LineError> {
        (**self).read_line(name)
    }
    fn write_line(&mut self, name: &str, value: u8) -> Result<(), LineError> {
        (**self).write_line(name, value)
    }
    fn release(&mut self, name: &str) {
        (**self).release(name)
    }
    fn release_all(&mut self) {
        (**self).release_all()
    }
}
