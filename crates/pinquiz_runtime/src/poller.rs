use crate::rig::LineRig;
use pinquiz_hal::config::{BUTTON_1, BUTTON_2, BUTTON_3, BUTTON_QUIT};
use pinquiz_hal::traits::{LineBackend, LineError};
use std::time::Duration;

/// Poll priority within a pass: quit first, then the three answer buttons.
pub const BUTTON_PRIORITY: [&str; 4] = [BUTTON_QUIT, BUTTON_1, BUTTON_2, BUTTON_3];

#[derive(Debug)]
pub enum PollOutcome {
    /// The quit button was pressed.
    Quit,
    /// Answer button 1..=3 was pressed.
    Choice(u8),
    /// A line read failed mid-poll. Distinct from `Quit`; the caller picks
    /// the policy.
    ReadFailed(LineError),
}

pub struct Poller {
    interval: Duration,
}

impl Poller {
    /// `interval` paces the poll loop; zero reproduces a tight spin.
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Block until one of the four buttons reads pressed (active-low, value
    /// 0) and report which. Within a pass the buttons are checked in
    /// `BUTTON_PRIORITY` order, so quit wins over simultaneous presses.
    pub fn wait<B: LineBackend>(&self, rig: &mut LineRig<'_, B>) -> PollOutcome {
        loop {
            for (i, role) in BUTTON_PRIORITY.iter().enumerate() {
                match rig.read(role) {
                    Err(e) => return PollOutcome::ReadFailed(e),
                    Ok(0) => {
                        return if i == 0 {
                            PollOutcome::Quit
                        } else {
                            PollOutcome::Choice(i as u8)
                        };
                    }
                    Ok(_) => {}
                }
            }
            if !self.interval.is_zero() {
                std::thread::sleep(self.interval);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinquiz_hal::config::LineMap;
    use pinquiz_hal::sim::SimBackend;

    fn poller() -> Poller {
        Poller::new(Duration::ZERO)
    }

    #[test]
    fn quit_pressed_on_first_pass() {
        let mut sim = SimBackend::new();
        sim.queue_read(BUTTON_QUIT, 0);
        let mut rig = LineRig::setup(&mut sim, &LineMap::default()).unwrap();
        assert!(matches!(poller().wait(&mut rig), PollOutcome::Quit));
    }

    #[test]
    fn choice_two_pressed() {
        let mut sim = SimBackend::new();
        sim.queue_read(BUTTON_QUIT, 1);
        sim.queue_read(BUTTON_1, 1);
        sim.queue_read(BUTTON_2, 0);
        let mut rig = LineRig::setup(&mut sim, &LineMap::default()).unwrap();
        assert!(matches!(poller().wait(&mut rig), PollOutcome::Choice(2)));
    }

    #[test]
    fn quit_wins_over_simultaneous_press() {
        let mut sim = SimBackend::new();
        sim.set_input(BUTTON_QUIT, 0);
        sim.set_input(BUTTON_1, 0);
        let mut rig = LineRig::setup(&mut sim, &LineMap::default()).unwrap();
        assert!(matches!(poller().wait(&mut rig), PollOutcome::Quit));
    }

    #[test]
    fn press_on_a_later_pass_is_seen() {
        let mut sim = SimBackend::new();
        for role in BUTTON_PRIORITY {
            sim.queue_read(role, 1);
        }
        sim.set_input(BUTTON_3, 0);
        let mut rig = LineRig::setup(&mut sim, &LineMap::default()).unwrap();
        assert!(matches!(poller().wait(&mut rig), PollOutcome::Choice(3)));
    }

    #[test]
    fn read_failure_is_reported_distinctly() {
        let mut sim = SimBackend::new();
        sim.queue_read_error(BUTTON_QUIT);
        let mut rig = LineRig::setup(&mut sim, &LineMap::default()).unwrap();
        assert!(matches!(
            poller().wait(&mut rig),
            PollOutcome::ReadFailed(LineError::ReadFailed { .. })
        ));
    }
}
