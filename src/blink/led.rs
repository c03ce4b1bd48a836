// LED backends.
// A GPIO output pin on a Raspberry Pi, or a logging stand-in elsewhere.

/// A single on/off indicator.
pub trait Led {
    fn set_high(&mut self);
    fn set_low(&mut self);
    /// Turn off and give the underlying resource back. Further calls are no-ops.
    fn release(&mut self);
}

impl<L: Led + ?Sized> Led for Box<L> {
    fn set_high(&mut self) {
        (**self).set_high();
    }

    fn set_low(&mut self) {
        (**self).set_low();
    }

    fn release(&mut self) {
        (**self).release();
    }
}

/// Stand-in for machines without a GPIO header; logs level changes.
#[derive(Debug, Default)]
pub struct LogLed {
    lit: bool,
}

impl Led for LogLed {
    fn set_high(&mut self) {
        if !self.lit {
            log::trace!("LED on");
        }
        self.lit = true;
    }

    fn set_low(&mut self) {
        if self.lit {
            log::trace!("LED off");
        }
        self.lit = false;
    }

    fn release(&mut self) {
        self.lit = false;
        log::debug!("LED released");
    }
}

#[cfg(feature = "gpio")]
pub use gpio::GpioLed;

#[cfg(feature = "gpio")]
mod gpio {
    use rppal::gpio::{Gpio, OutputPin};

    use super::Led;
    use crate::error::Result;

    /// An LED on a GPIO output pin (BCM numbering).
    pub struct GpioLed {
        pin: Option<OutputPin>,
    }

    impl GpioLed {
        /// Claim `bcm_pin` as an output, initially low.
        pub fn open(bcm_pin: u8) -> Result<Self> {
            let pin = Gpio::new()?.get(bcm_pin)?.into_output_low();
            log::info!("Using GPIO {} for the reminder LED", bcm_pin);
            Ok(Self { pin: Some(pin) })
        }
    }

    impl Led for GpioLed {
        fn set_high(&mut self) {
            if let Some(pin) = self.pin.as_mut() {
                pin.set_high();
            }
        }

        fn set_low(&mut self) {
            if let Some(pin) = self.pin.as_mut() {
                pin.set_low();
            }
        }

        fn release(&mut self) {
            // Dropping the pin restores its original mode.
            if let Some(mut pin) = self.pin.take() {
                pin.set_low();
            }
        }
    }
}

/// Open the reminder LED, falling back to [`LogLed`] when there is no usable GPIO.
pub fn open_led(bcm_pin: u8, enabled: bool) -> Box<dyn Led + Send> {
    if !enabled {
        log::info!("LED disabled, blinking is logged only");
        return Box::new(LogLed::default());
    }
    open_gpio(bcm_pin)
}

#[cfg(feature = "gpio")]
fn open_gpio(bcm_pin: u8) -> Box<dyn Led + Send> {
    match GpioLed::open(bcm_pin) {
        Ok(led) => Box::new(led),
        Err(e) => {
            log::warn!("Cannot use GPIO {} ({}), blinking is logged only", bcm_pin, e);
            Box::new(LogLed::default())
        }
    }
}

#[cfg(not(feature = "gpio"))]
fn open_gpio(bcm_pin: u8) -> Box<dyn Led + Send> {
    log::warn!(
        "Built without GPIO support, LED on pin {} is logged only",
        bcm_pin
    );
    Box::new(LogLed::default())
}

#[cfg(test)]
pub(crate) mod recording {
    use std::sync::{Arc, Mutex};

    use super::Led;

    /// Something that happened to a [`RecordingLed`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum LedEvent {
        High,
        Low,
        Released,
    }

    /// Records every call so tests can inspect them from another thread.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingLed {
        events: Arc<Mutex<Vec<LedEvent>>>,
    }

    impl RecordingLed {
        pub fn events(&self) -> Vec<LedEvent> {
            self.events.lock().unwrap().clone()
        }

        pub fn count(&self, event: LedEvent) -> usize {
            self.events().iter().filter(|e| **e == event).count()
        }

        fn push(&self, event: LedEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl Led for RecordingLed {
        fn set_high(&mut self) {
            self.push(LedEvent::High);
        }

        fn set_low(&mut self) {
            self.push(LedEvent::Low);
        }

        fn release(&mut self) {
            self.push(LedEvent::Released);
        }
    }
}
