//! Linux GPIO character-device backend for the pinquiz HAL.
//!
//! Implements `LineBackend` over `/dev/gpiochipN` using gpio-cdev. Each
//! requested line holds a kernel line handle under the configured consumer
//! label; dropping the handle releases the line.

use gpio_cdev::{Chip, LineHandle, LineRequestFlags};
use pinquiz_hal::traits::{Direction, LineBackend, LineError};
use std::collections::HashMap;

pub struct CdevBackend {
    chip: Chip,
    consumer: String,
    lines: HashMap<String, (Direction, LineHandle)>,
}

fn chip_path(name: &str) -> String {
    if name.starts_with('/') {
        name.to_string()
    } else {
        format!("/dev/{name}")
    }
}

impl CdevBackend {
    /// Open the chip by name (`gpiochip0`) or full device path.
    pub fn open(chip_name: &str, consumer: &str) -> Result<Self, LineError> {
        let path = chip_path(chip_name);
        let chip = Chip::new(&path).map_err(|e| LineError::ChipOpen(format!("{path}: {e}")))?;
        log::info!("opened GPIO chip {path} as consumer {consumer:?}");
        Ok(Self {
            chip,
            consumer: consumer.to_string(),
            lines: HashMap::new(),
        })
    }

    fn request(
        &mut self,
        name: &str,
        offset: u32,
        dir: Direction,
        initial: u8,
    ) -> Result<(), LineError> {
        let line = self
            .chip
            .get_line(offset)
            .map_err(|e| LineError::RequestFailed {
                name: name.to_string(),
                offset,
                reason: e.to_string(),
            })?;
        let flags = match dir {
            Direction::Input => LineRequestFlags::INPUT,
            Direction::Output => LineRequestFlags::OUTPUT,
        };
        let handle =
            line.request(flags, initial, &self.consumer)
                .map_err(|e| LineError::RequestFailed {
                    name: name.to_string(),
                    offset,
                    reason: e.to_string(),
                })?;
        log::debug!("requested line {name} at offset {offset} as {dir}");
        self.lines.insert(name.to_string(), (dir, handle));
        Ok(())
    }

    fn handle(&self, name: &str, dir: Direction) -> Result<&LineHandle, LineError> {
        match self.lines.get(name) {
            None => Err(LineError::NotRequested(name.to_string())),
            Some((d, _)) if *d != dir => Err(LineError::WrongDirection {
                name: name.to_string(),
                expected: dir,
            }),
            Some((_, handle)) => Ok(handle),
        }
    }
}

impl LineBackend for CdevBackend {
    fn request_input(&mut self, name: &str, offset: u32) -> Result<(), LineError> {
        self.request(name, offset, Direction::Input, 0)
    }

    fn request_output(&mut self, name: &str, offset: u32, initial: u8) -> Result<(), LineError> {
        self.request(name, offset, Direction::Output, initial)
    }

    fn read_line(&mut self, name: &str) -> Result<u8, LineError> {
        let handle = self.handle(name, Direction::Input)?;
        handle.get_value().map_err(|e| LineError::ReadFailed {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }

    fn write_line(&mut self, name: &str, value: u8) -> Result<(), LineError> {
        let handle = self.handle(name, Direction::Output)?;
        handle.set_value(value).map_err(|e| LineError::WriteFailed {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }

    fn release(&mut self, name: &str) {
        if self.lines.remove(name).is_some() {
            log::debug!("released line {name}");
        }
    }

    fn release_all(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::chip_path;

    #[test]
    fn bare_chip_names_resolve_under_dev() {
        assert_eq!(chip_path("gpiochip0"), "/dev/gpiochip0");
        assert_eq!(chip_path("/dev/gpiochip2"), "/dev/gpiochip2");
    }
}
