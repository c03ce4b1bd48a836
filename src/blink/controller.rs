// Blink controller.
// Background worker that blinks the reminder LED on command from the main loop.

use std::thread;
use std::time::Duration;

use tokio::sync::watch;

use crate::error::{Result, VerseError};

use super::led::Led;

/// Command sent from the main loop to the blink worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkCommand {
    Start,
    Stop,
    /// Turn the LED off, release it and exit. Irreversible.
    Shutdown,
}

/// Operating state of the blink worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlinkState {
    #[default]
    Idle,
    Blinking,
    Terminated,
}

impl BlinkState {
    /// State after receiving `command`. Nothing leaves `Terminated`.
    pub fn apply(self, command: BlinkCommand) -> Self {
        match (self, command) {
            (BlinkState::Terminated, _) => BlinkState::Terminated,
            (_, BlinkCommand::Start) => BlinkState::Blinking,
            (_, BlinkCommand::Stop) => BlinkState::Idle,
            (_, BlinkCommand::Shutdown) => BlinkState::Terminated,
        }
    }
}

/// Poll and pulse timing for the worker loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkTiming {
    /// Pause between polls of the command mailbox.
    pub poll: Duration,
    /// How long the LED stays lit in each pulse.
    pub pulse: Duration,
}

impl Default for BlinkTiming {
    fn default() -> Self {
        Self {
            poll: Duration::from_millis(200),
            pulse: Duration::from_millis(200),
        }
    }
}

/// Drives one LED from the latest command in a single-slot mailbox.
///
/// Only the most recent command matters; if nothing new has arrived the
/// current state's action is repeated.
pub struct BlinkController<L> {
    led: L,
    commands: watch::Receiver<BlinkCommand>,
    state: BlinkState,
    timing: BlinkTiming,
}

impl<L: Led> BlinkController<L> {
    pub fn new(led: L, commands: watch::Receiver<BlinkCommand>, timing: BlinkTiming) -> Self {
        Self {
            led,
            commands,
            state: BlinkState::Idle,
            timing,
        }
    }

    pub fn state(&self) -> BlinkState {
        self.state
    }

    /// Run one poll cycle. Returns false once the worker has terminated.
    pub fn poll(&mut self) -> bool {
        if self.state == BlinkState::Terminated {
            return false;
        }

        if let Some(command) = self.next_command() {
            let next = self.state.apply(command);
            if next != self.state {
                log::info!("Blink {:?} -> {:?}", self.state, next);
            }
            self.state = next;
        }

        match self.state {
            BlinkState::Blinking => {
                self.led.set_high();
                thread::sleep(self.timing.pulse);
                self.led.set_low();
            }
            BlinkState::Idle => self.led.set_low(),
            BlinkState::Terminated => {
                self.led.set_low();
                self.led.release();
                log::info!("Blink worker exiting");
                return false;
            }
        }

        log::debug!("Blink state: {:?}", self.state);
        true
    }

    /// Poll until terminated.
    pub fn run(mut self) {
        while self.poll() {
            thread::sleep(self.timing.poll);
        }
        log::debug!("Blink worker stopped in {:?}", self.state());
    }

    /// The newest unread command, without blocking.
    fn next_command(&mut self) -> Option<BlinkCommand> {
        match self.commands.has_changed() {
            Ok(true) => Some(*self.commands.borrow_and_update()),
            Ok(false) => None,
            // Sender gone: nobody can ever stop us, so shut down.
            Err(_) => Some(BlinkCommand::Shutdown),
        }
    }
}

/// Main loop's side of the blink worker.
pub struct BlinkHandle {
    commands: watch::Sender<BlinkCommand>,
    worker: thread::JoinHandle<()>,
}

impl BlinkHandle {
    /// Start the worker on its own thread, initially idle.
    pub fn spawn<L: Led + Send + 'static>(led: L, timing: BlinkTiming) -> Result<Self> {
        let (commands, receiver) = watch::channel(BlinkCommand::Stop);
        let controller = BlinkController::new(led, receiver, timing);
        let worker = thread::Builder::new()
            .name("blink".to_string())
            .spawn(move || controller.run())?;

        Ok(Self { commands, worker })
    }

    pub fn start(&self) {
        self.send(BlinkCommand::Start);
    }

    pub fn stop(&self) {
        self.send(BlinkCommand::Stop);
    }

    /// Send the shutdown command and wait for the worker to release the LED.
    pub fn shutdown(self) -> Result<()> {
        self.send(BlinkCommand::Shutdown);
        self.worker
            .join()
            .map_err(|_| VerseError::Other("blink worker panicked".to_string()))
    }

    fn send(&self, command: BlinkCommand) {
        // Replaces any unread command; succeeds even after the worker has exited.
        self.commands.send_replace(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blink::led::recording::{LedEvent, RecordingLed};

    fn instant() -> BlinkTiming {
        BlinkTiming {
            poll: Duration::ZERO,
            pulse: Duration::ZERO,
        }
    }

    fn controller() -> (
        BlinkController<RecordingLed>,
        watch::Sender<BlinkCommand>,
        RecordingLed,
    ) {
        let led = RecordingLed::default();
        let (tx, rx) = watch::channel(BlinkCommand::Stop);
        (BlinkController::new(led.clone(), rx, instant()), tx, led)
    }

    #[test]
    fn test_starts_idle_and_holds_led_low() {
        let (mut controller, _tx, led) = controller();
        for _ in 0..3 {
            assert!(controller.poll());
        }
        assert_eq!(controller.state(), BlinkState::Idle);
        assert_eq!(led.events(), vec![LedEvent::Low; 3]);
    }

    #[test]
    fn test_start_keeps_blinking_without_new_messages() {
        let (mut controller, tx, led) = controller();
        tx.send_replace(BlinkCommand::Start);

        for _ in 0..5 {
            assert!(controller.poll());
        }

        assert_eq!(controller.state(), BlinkState::Blinking);
        assert_eq!(led.count(LedEvent::High), 5);
        assert_eq!(led.count(LedEvent::Low), 5);
        assert_eq!(led.events().last(), Some(&LedEvent::Low));
    }

    #[test]
    fn test_stop_forces_low_and_stays_idle() {
        let (mut controller, tx, led) = controller();
        tx.send_replace(BlinkCommand::Start);
        controller.poll();
        tx.send_replace(BlinkCommand::Stop);

        for _ in 0..4 {
            assert!(controller.poll());
        }

        assert_eq!(controller.state(), BlinkState::Idle);
        assert_eq!(led.count(LedEvent::High), 1);
        assert_eq!(&led.events()[2..], &[LedEvent::Low; 4]);
    }

    #[test]
    fn test_only_latest_command_counts() {
        let (mut controller, tx, led) = controller();
        tx.send_replace(BlinkCommand::Start);
        tx.send_replace(BlinkCommand::Stop);

        controller.poll();
        assert_eq!(controller.state(), BlinkState::Idle);
        assert_eq!(led.count(LedEvent::High), 0);
    }

    #[test]
    fn test_shutdown_is_terminal() {
        for first in [BlinkCommand::Start, BlinkCommand::Stop] {
            let (mut controller, tx, led) = controller();
            tx.send_replace(first);
            controller.poll();

            tx.send_replace(BlinkCommand::Shutdown);
            assert!(!controller.poll());
            assert_eq!(controller.state(), BlinkState::Terminated);
            assert_eq!(led.events().last(), Some(&LedEvent::Released));

            tx.send_replace(BlinkCommand::Start);
            assert!(!controller.poll());
            assert_eq!(controller.state(), BlinkState::Terminated);
            assert_eq!(led.count(LedEvent::Released), 1);
        }
    }

    #[test]
    fn test_dropped_sender_shuts_down() {
        let (mut controller, tx, led) = controller();
        drop(tx);
        assert!(!controller.poll());
        assert_eq!(led.count(LedEvent::Released), 1);
    }

    #[test]
    fn test_transitions() {
        use BlinkCommand::*;
        use BlinkState::*;

        assert_eq!(Idle.apply(Start), Blinking);
        assert_eq!(Blinking.apply(Stop), Idle);
        assert_eq!(Blinking.apply(Shutdown), Terminated);
        assert_eq!(Idle.apply(Shutdown), Terminated);
        assert_eq!(Terminated.apply(Start), Terminated);
        assert_eq!(Terminated.apply(Stop), Terminated);
    }

    #[test]
    fn test_handle_round_trip() {
        let led = RecordingLed::default();
        let handle = BlinkHandle::spawn(
            led.clone(),
            BlinkTiming {
                poll: Duration::from_millis(1),
                pulse: Duration::from_millis(1),
            },
        )
        .unwrap();

        handle.start();
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while led.count(LedEvent::High) == 0 && std::time::Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        handle.stop();
        handle.shutdown().unwrap();

        let events = led.events();
        assert!(events.contains(&LedEvent::High));
        assert_eq!(events.last(), Some(&LedEvent::Released));
    }
}
