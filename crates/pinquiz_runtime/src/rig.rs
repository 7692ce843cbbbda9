use pinquiz_hal::config::LineMap;
use pinquiz_hal::traits::{LineBackend, LineError};

/// The six claimed quiz lines, borrowed from a backend for the duration of a
/// session. Constructed by `setup`, torn down exactly once on the success
/// path; there is no partial or degraded mode.
#[derive(Debug)]
pub struct LineRig<'a, B: LineBackend> {
    backend: &'a mut B,
}

impl<'a, B: LineBackend> LineRig<'a, B> {
    /// Request the two LED outputs and four button inputs in fixed order.
    /// If any single request fails, every line acquired so far is released
    /// before the error is returned.
    pub fn setup(backend: &'a mut B, map: &LineMap) -> Result<Self, LineError> {
        for (name, offset) in map.outputs() {
            if let Err(e) = backend.request_output(name, offset, 0) {
                backend.release_all();
                return Err(e);
            }
        }
        for (name, offset) in map.inputs() {
            if let Err(e) = backend.request_input(name, offset) {
                backend.release_all();
                return Err(e);
            }
        }
        log::info!("quiz lines ready: 2 outputs, 4 inputs");
        Ok(Self { backend })
    }

    pub fn read(&mut self, role: &str) -> Result<u8, LineError> {
        self.backend.read_line(role)
    }

    pub fn set(&mut self, role: &str, value: u8) -> Result<(), LineError> {
        self.backend.write_line(role, value)
    }

    pub fn release(&mut self, role: &str) {
        self.backend.release(role)
    }

    /// Release all six lines.
    pub fn teardown(self) {
        self.backend.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinquiz_hal::config::BUTTON_2;
    use pinquiz_hal::sim::SimBackend;

    #[test]
    fn setup_claims_all_six_lines() {
        let mut sim = SimBackend::new();
        {
            let _rig = LineRig::setup(&mut sim, &LineMap::default()).unwrap();
        }
        assert_eq!(sim.requested_count(), 6);
    }

    #[test]
    fn teardown_releases_everything() {
        let mut sim = SimBackend::new();
        let rig = LineRig::setup(&mut sim, &LineMap::default()).unwrap();
        rig.teardown();
        assert_eq!(sim.requested_count(), 0);
    }

    #[test]
    fn failed_request_rolls_back_earlier_lines() {
        let mut sim = SimBackend::new();
        sim.fail_request(BUTTON_2);
        let err = LineRig::setup(&mut sim, &LineMap::default()).unwrap_err();
        assert!(matches!(err, LineError::RequestFailed { ref name, .. } if name == BUTTON_2));
        assert_eq!(sim.requested_count(), 0);
    }
}
