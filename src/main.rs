//! simon-says firmware entry point (nRF52840-DK).
//!
//! Brings up the board, wires the buttons, LEDs, buzzer and hardware RNG
//! into a [`Console`], and hands it to the game loop, which never returns.
//!
//! Hold a button while the board powers up to pick the round length:
//! 1 → 5 levels, 2 → 10, 3 → 15, 4 → 20. Without one, rounds are 10 levels.

#![no_std]
#![no_main]

mod board;

use defmt::info;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::rng::{self, Rng};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use board::{ActiveLow, Buzzer, SysClock};
use simon::{Console, GameLoop};

bind_interrupts!(struct Irqs {
    RNG => rng::InterruptHandler<peripherals::RNG>;
});

type Game = GameLoop<
    Input<'static>,
    ActiveLow<'static>,
    Buzzer<'static>,
    SysClock,
    Delay,
    Rng<'static, peripherals::RNG>,
>;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("simon-says starting...");

    // Buttons: active-low with internal pull-ups.
    let buttons = [
        Input::new(p.P0_11, Pull::Up),
        Input::new(p.P0_12, Pull::Up),
        Input::new(p.P0_24, Pull::Up),
        Input::new(p.P0_25, Pull::Up),
    ];

    // LEDs: active-low, start dark.
    let leds = [
        ActiveLow(Output::new(p.P0_13, Level::High, OutputDrive::Standard)),
        ActiveLow(Output::new(p.P0_14, Level::High, OutputDrive::Standard)),
        ActiveLow(Output::new(p.P0_15, Level::High, OutputDrive::Standard)),
        ActiveLow(Output::new(p.P0_16, Level::High, OutputDrive::Standard)),
    ];

    let buzzer = Buzzer::new(SimplePwm::new_1ch(p.PWM0, p.P0_03));
    let rng = Rng::new(p.RNG, Irqs);

    let console = Console::new(buttons, leds, buzzer, SysClock, Delay);
    let game = GameLoop::new(console, rng);

    info!("Hardware ready");
    spawner.must_spawn(game_task(game));
}

/// The game is the only task; it polls and blocks on its own schedule.
#[embassy_executor::task]
async fn game_task(game: Game) {
    game.run()
}
