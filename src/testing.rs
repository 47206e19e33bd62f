//! Host-side fakes for the hardware seams, shared by the unit tests.
//!
//! Time is simulated: the delay provider jumps the shared clock forward and
//! every `now_ms()` call ticks it by 1 ms, so busy-polling loops make
//! progress. Button presses are scripted per *round* and replayed relative
//! to the first pin read after a quiet spell (playback and feedback never
//! read the pins), which keeps scripts independent of exact phase timing.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use rand_core::{impls, RngCore};

use crate::console::Console;
use crate::hal::{Clock, ToneOutput};
use crate::input::ButtonId;

/// A read after this much silence starts the next scripted round.
const QUIET_GAP_MS: u64 = 700;

/// Simulated time limit; a test that gets here is stuck in a poll loop.
const RUNAWAY_MS: u64 = 10 * 60 * 1000;

type Time = Rc<Cell<u64>>;

// Pins

/// Input pin whose level the test sets directly.
#[derive(Clone, Default)]
pub(crate) struct FakePin {
    held: Rc<Cell<bool>>,
}

impl FakePin {
    pub(crate) fn set_held(&self, held: bool) {
        self.held.set(held);
    }
}

impl ErrorType for FakePin {
    type Error = Infallible;
}

impl InputPin for FakePin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(!self.held.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.held.get())
    }
}

/// LED that remembers whether it is lit and how often it was switched on.
#[derive(Clone, Default)]
pub(crate) struct FakeLed {
    lit: Rc<Cell<bool>>,
    flashes: Rc<Cell<u32>>,
}

impl FakeLed {
    pub(crate) fn is_lit(&self) -> bool {
        self.lit.get()
    }

    pub(crate) fn flashes(&self) -> u32 {
        self.flashes.get()
    }
}

impl ErrorType for FakeLed {
    type Error = Infallible;
}

impl OutputPin for FakeLed {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.lit.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        if !self.lit.get() {
            self.flashes.set(self.flashes.get() + 1);
        }
        self.lit.set(true);
        Ok(())
    }
}

// Buzzer

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ToneEvent {
    Frequency(u32),
    On,
    Off,
}

#[derive(Default)]
struct ToneState {
    hz: u32,
    on: bool,
    log: Vec<(u64, ToneEvent)>,
    notes: Vec<u32>,
}

/// Buzzer that logs every write with the simulated time.
#[derive(Clone, Default)]
pub(crate) struct FakeTone {
    time: Time,
    state: Rc<RefCell<ToneState>>,
}

impl FakeTone {
    /// Pitch currently audible, if any.
    pub(crate) fn sounding(&self) -> Option<u32> {
        let state = self.state.borrow();
        state.on.then_some(state.hz)
    }

    /// Every pitch that started sounding, in order.
    pub(crate) fn notes(&self) -> Vec<u32> {
        self.state.borrow().notes.clone()
    }

    pub(crate) fn log(&self) -> Vec<(u64, ToneEvent)> {
        self.state.borrow().log.clone()
    }

    pub(crate) fn writes(&self) -> usize {
        self.state.borrow().log.len()
    }

    pub(crate) fn clear(&self) {
        let mut state = self.state.borrow_mut();
        state.log.clear();
        state.notes.clear();
    }

    fn record(&self, event: ToneEvent) {
        let now = self.time.get();
        self.state.borrow_mut().log.push((now, event));
    }
}

impl ToneOutput for FakeTone {
    fn set_frequency(&mut self, hz: u32) {
        self.record(ToneEvent::Frequency(hz));
        let mut state = self.state.borrow_mut();
        state.hz = hz;
        if state.on {
            state.notes.push(hz);
        }
    }

    fn set_duty_on(&mut self) {
        self.record(ToneEvent::On);
        self.state.borrow_mut().on = true;
    }

    fn set_duty_off(&mut self) {
        self.record(ToneEvent::Off);
        self.state.borrow_mut().on = false;
    }
}

// Time

/// Clock that ticks 1 ms per reading.
pub(crate) struct FakeClock {
    time: Time,
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u64 {
        let now = self.time.get();
        assert!(now < RUNAWAY_MS, "simulation ran away at {} ms", now);
        self.time.set(now + 1);
        now
    }
}

/// Delay that advances the simulated clock instead of sleeping.
pub(crate) struct FakeDelay {
    time: Time,
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.time.set(self.time.get() + u64::from(ns).div_ceil(1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.time.set(self.time.get() + u64::from(ms));
    }
}

// Player

/// One scripted press, in ms relative to the start of its round.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Press {
    id: ButtonId,
    down: u64,
    up: u64,
}

impl Press {
    pub(crate) fn new(id: ButtonId, down: u64, up: u64) -> Self {
        Self { id, down, up }
    }
}

/// Clean presses of `ids`, one after another, 50 ms held and 50 ms apart.
pub(crate) fn replay(ids: &[ButtonId]) -> Vec<Press> {
    ids.iter()
        .enumerate()
        .map(|(k, &id)| {
            let down = 20 + 100 * k as u64;
            Press::new(id, down, down + 50)
        })
        .collect()
}

struct Player {
    time: Time,
    rounds: VecDeque<Vec<Press>>,
    current: Vec<Press>,
    round_start: u64,
    last_read: u64,
}

impl Player {
    fn held(&mut self, id: ButtonId) -> bool {
        let now = self.time.get();
        if now.saturating_sub(self.last_read) >= QUIET_GAP_MS {
            self.current = self.rounds.pop_front().unwrap_or_default();
            self.round_start = now;
        }
        self.last_read = now;

        let t = now - self.round_start;
        self.current
            .iter()
            .any(|p| p.id == id && p.down <= t && t < p.up)
    }
}

/// Input pin driven by the shared scripted player.
pub(crate) struct PlayerPin {
    id: ButtonId,
    player: Rc<RefCell<Player>>,
}

impl ErrorType for PlayerPin {
    type Error = Infallible;
}

impl InputPin for PlayerPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.player.borrow_mut().held(self.id))
    }
}

/// Cycles through a fixed list of outputs.
pub(crate) struct ScriptedRng {
    values: Vec<u32>,
    next: usize,
}

impl ScriptedRng {
    pub(crate) fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

pub(crate) type SimConsole = Console<PlayerPin, FakeLed, FakeTone, FakeClock, FakeDelay>;

/// A simulated board: shared clock, scripted player, probes on every output.
pub(crate) struct Sim {
    time: Time,
    player: Rc<RefCell<Player>>,
    leds: [FakeLed; 4],
    pub(crate) tone: FakeTone,
}

impl Sim {
    pub(crate) fn new() -> Self {
        let time: Time = Rc::new(Cell::new(0));
        let player = Player {
            time: time.clone(),
            rounds: VecDeque::new(),
            current: Vec::new(),
            round_start: 0,
            last_read: 0,
        };
        Self {
            tone: FakeTone {
                time: time.clone(),
                state: Rc::default(),
            },
            time,
            player: Rc::new(RefCell::new(player)),
            leds: Default::default(),
        }
    }

    pub(crate) fn console(&self) -> SimConsole {
        let buttons = ButtonId::ALL.map(|id| PlayerPin {
            id,
            player: self.player.clone(),
        });
        Console::new(
            buttons,
            self.leds.clone(),
            self.tone.clone(),
            FakeClock {
                time: self.time.clone(),
            },
            FakeDelay {
                time: self.time.clone(),
            },
        )
    }

    pub(crate) fn led(&self, id: ButtonId) -> &FakeLed {
        &self.leds[id.index()]
    }

    pub(crate) fn queue_round(&self, presses: Vec<Press>) {
        self.player.borrow_mut().rounds.push_back(presses);
    }

    pub(crate) fn now(&self) -> u64 {
        self.time.get()
    }

    /// When the current scripted round began, i.e. the first pin read after
    /// the latest quiet spell.
    pub(crate) fn round_start(&self) -> u64 {
        self.player.borrow().round_start
    }

    pub(crate) fn advance(&self, ms: u64) {
        self.time.set(self.time.get() + ms);
    }
}
