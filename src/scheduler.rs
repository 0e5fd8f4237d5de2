//! Run/pause control for periodic stepping.

use std::time::Duration;

use bevy::{
    prelude::Resource,
    time::{Timer, TimerMode},
};

/// Whether generations are currently advancing on their own.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

/// Permission to run one generation, valid only for the run that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTicket {
    epoch: u64,
}

/// Two-state machine driving the step timer.
///
/// Each toggle bumps `epoch`; tickets carry the epoch they were issued under
/// and are refused once it moves on, so nothing steps after a pause.
#[derive(Resource, Debug, Clone)]
pub struct StepScheduler {
    state: RunState,
    timer: Timer,
    epoch: u64,
}

impl StepScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            state: RunState::Idle,
            timer: Timer::new(interval, TimerMode::Repeating),
            epoch: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn interval(&self) -> Duration {
        self.timer.duration()
    }

    /// Flips between idle and running. Starting restarts the interval from zero.
    pub fn toggle(&mut self) -> RunState {
        self.epoch += 1;
        self.state = match self.state {
            RunState::Idle => {
                self.timer.reset();
                RunState::Running
            }
            RunState::Running => RunState::Idle,
        };
        self.state
    }

    /// Forces the idle state, invalidating outstanding tickets.
    pub fn pause(&mut self) {
        if self.is_running() {
            self.toggle();
        }
    }

    /// Advances the timer and hands out one ticket per elapsed interval.
    pub fn tick(&mut self, delta: Duration) -> Vec<StepTicket> {
        if !self.is_running() {
            return Vec::new();
        }
        let due = self.timer.tick(delta).times_finished_this_tick();
        let ticket = StepTicket { epoch: self.epoch };
        vec![ticket; due as usize]
    }

    /// A ticket for a manual single step. Only granted while idle.
    pub fn step_once(&self) -> Option<StepTicket> {
        (!self.is_running()).then_some(StepTicket { epoch: self.epoch })
    }

    /// Whether a ticket may still run, i.e. no toggle happened since it was issued.
    pub fn admit(&self, ticket: StepTicket) -> bool {
        ticket.epoch == self.epoch
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn idle_never_ticks() {
        let mut sched = StepScheduler::new(ms(500));
        assert_eq!(sched.state(), RunState::Idle);
        assert!(sched.tick(ms(5_000)).is_empty());
    }

    #[test]
    fn running_ticks_once_per_interval() {
        let mut sched = StepScheduler::new(ms(500));
        assert_eq!(sched.toggle(), RunState::Running);
        assert!(sched.tick(ms(499)).is_empty());
        assert_eq!(sched.tick(ms(1)).len(), 1);
        assert_eq!(sched.tick(ms(1_000)).len(), 2);
    }

    #[test]
    fn restart_resets_interval() {
        let mut sched = StepScheduler::new(ms(100));
        sched.toggle();
        sched.tick(ms(90));
        sched.toggle();
        sched.toggle();
        assert!(sched.tick(ms(20)).is_empty());
        assert_eq!(sched.tick(ms(80)).len(), 1);
    }

    #[test]
    fn pause_cancels_issued_tickets() {
        let mut sched = StepScheduler::new(ms(100));
        sched.toggle();
        let tickets = sched.tick(ms(300));
        assert_eq!(tickets.len(), 3);
        assert!(sched.admit(tickets[0]));

        assert_eq!(sched.toggle(), RunState::Idle);
        assert!(tickets.iter().all(|t| !sched.admit(*t)));

        // resuming does not revive them either
        sched.toggle();
        assert!(!sched.admit(tickets[0]));
    }

    #[test]
    fn single_step_only_when_idle() {
        let mut sched = StepScheduler::new(ms(100));
        let ticket = sched.step_once().unwrap();
        assert!(sched.admit(ticket));

        sched.toggle();
        assert_eq!(sched.step_once(), None);
        assert!(!sched.admit(ticket));

        sched.pause();
        assert!(!sched.is_running());
        sched.pause();
        assert!(!sched.is_running());
    }
}
