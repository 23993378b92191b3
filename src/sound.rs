use beep::beep;
use std::error::Error;
use std::time::{Duration, Instant};

/// rings when the terminal receives BEL
pub trait Bell {
    fn beep(&mut self) -> Result<(), Box<dyn Error>>;
    fn stop(&mut self) -> Result<(), Box<dyn Error>>;
    /// silence the bell once it has rung long enough
    fn update(&mut self, _now: Instant) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}

const SIMPLEBEEP_PITCH: u16 = 2093; // C
const SIMPLEBEEP_LENGTH: Duration = Duration::from_millis(100);

/// host PC speaker
pub struct SimpleBeep {
    started: Option<Instant>,
}

impl SimpleBeep {
    pub fn new() -> Self {
        SimpleBeep { started: None }
    }
}

impl Default for SimpleBeep {
    fn default() -> Self {
        Self::new()
    }
}

impl Bell for SimpleBeep {
    fn beep(&mut self) -> Result<(), Box<dyn Error>> {
        beep(SIMPLEBEEP_PITCH)?;
        self.started = Some(Instant::now());
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Box<dyn Error>> {
        beep(0)?;
        self.started = None;
        Ok(())
    }

    fn update(&mut self, now: Instant) -> Result<(), Box<dyn Error>> {
        match self.started {
            Some(t) if now.duration_since(t) >= SIMPLEBEEP_LENGTH => self.stop(),
            _ => Ok(()),
        }
    }
}

pub struct Mute {
    rung: usize,
}

impl Mute {
    pub fn new() -> Self {
        Mute { rung: 0 }
    }

    /// how many times beep() was called
    pub fn rung(&self) -> usize {
        self.rung
    }
}

impl Default for Mute {
    fn default() -> Self {
        Self::new()
    }
}

impl Bell for Mute {
    fn beep(&mut self) -> Result<(), Box<dyn Error>> {
        self.rung += 1;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}
