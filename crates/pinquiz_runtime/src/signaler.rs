use crate::rig::LineRig;
use pinquiz_hal::config::{LED_CORRECT, LED_WRONG};
use pinquiz_hal::traits::{LineBackend, LineError};
use std::time::Duration;

/// Best-effort LED feedback. A failed blink must never stop the quiz.
pub struct Signaler {
    hold: Duration,
}

impl Signaler {
    pub fn new(hold: Duration) -> Self {
        Self { hold }
    }

    /// Drive the matching LED high, hold, drive it low. A write failure is
    /// logged and the line is released from the rig; later signals against a
    /// released LED are quiet no-ops.
    pub fn signal<B: LineBackend>(&self, rig: &mut LineRig<'_, B>, correct: bool) {
        let role = if correct { LED_CORRECT } else { LED_WRONG };
        if !self.drive(rig, role, 1) {
            return;
        }
        std::thread::sleep(self.hold);
        self.drive(rig, role, 0);
    }

    fn drive<B: LineBackend>(&self, rig: &mut LineRig<'_, B>, role: &str, value: u8) -> bool {
        match rig.set(role, value) {
            Ok(()) => true,
            Err(LineError::NotRequested(_)) => {
                log::debug!("skipping {role}: line already released");
                false
            }
            Err(e) => {
                log::warn!("LED write failed, releasing {role}: {e}");
                rig.release(role);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinquiz_hal::config::LineMap;
    use pinquiz_hal::sim::SimBackend;

    fn signaler() -> Signaler {
        Signaler::new(Duration::ZERO)
    }

    #[test]
    fn correct_answer_pulses_the_good_led() {
        let mut sim = SimBackend::new();
        {
            let mut rig = LineRig::setup(&mut sim, &LineMap::default()).unwrap();
            signaler().signal(&mut rig, true);
        }
        assert_eq!(sim.writes(LED_CORRECT), &[1, 0]);
        assert_eq!(sim.writes(LED_WRONG), &[] as &[u8]);
        assert_eq!(sim.output(LED_CORRECT), Some(0));
    }

    #[test]
    fn wrong_answer_pulses_the_bad_led() {
        let mut sim = SimBackend::new();
        {
            let mut rig = LineRig::setup(&mut sim, &LineMap::default()).unwrap();
            signaler().signal(&mut rig, false);
        }
        assert_eq!(sim.writes(LED_WRONG), &[1, 0]);
    }

    #[test]
    fn write_failure_releases_the_led_and_continues() {
        let mut sim = SimBackend::new();
        sim.fail_writes(LED_WRONG);
        {
            let mut rig = LineRig::setup(&mut sim, &LineMap::default()).unwrap();
            signaler().signal(&mut rig, false);
            // second signal hits the released line and stays quiet
            signaler().signal(&mut rig, false);
            signaler().signal(&mut rig, true);
        }
        assert!(!sim.requested(LED_WRONG));
        assert_eq!(sim.writes(LED_CORRECT), &[1, 0]);
    }
}
