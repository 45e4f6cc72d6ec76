//! Runs every motor output right, then left, then stops it, one after another.

#![no_std]
#![no_main]

use cortex_m::delay::Delay;
use cortex_m_rt::entry; // The runtime

use hal::{self, clocks::Clocks, pac};

use defmt_rtt as _; // global logger
use panic_probe as _;

use ftcomputing_core::{AssemblyConfig, DeviceAssembly, MotorId};
use ftcomputing_drivers::ShieldPlatform;

const STEP_MS: u32 = 1500;

#[entry]
fn main() -> ! {
    // Set up CPU peripherals
    let cp = cortex_m::Peripherals::take().unwrap();
    // Set up microcontroller peripherals
    let dp = pac::Peripherals::take().unwrap();

    let clock_cfg = Clocks::default();

    // Write the clock configuration to the MCU.
    clock_cfg.setup().unwrap();

    // Setup a delay, based on the Cortex-M SysTick.
    let mut delay = Delay::new(cp.SYST, clock_cfg.systick());

    let platform = ShieldPlatform::new(dp.TIM2, dp.TIM3, dp.TIM4, dp.ADC1, dp.ADC2, &clock_cfg);
    let mut ft = match DeviceAssembly::new(platform, AssemblyConfig::default()) {
        Ok(ft) => ft,
        Err((_, err)) => defmt::panic!("bad wiring: {}", err),
    };

    let max = ft.max_duty_cycle();
    defmt::println!("Motor test: max duty {}/255 at {} mV", max, ft.supply_mv());

    loop {
        for id in [MotorId::M1, MotorId::M2, MotorId::M3] {
            defmt::println!("{} right (full)", id);
            ft.motor(id).right();
            delay.delay_ms(STEP_MS);

            defmt::println!("{} left (half)", id);
            ft.motor(id).left_at(i32::from(max) / 2);
            delay.delay_ms(STEP_MS);

            ft.motor(id).stop();
            delay.delay_ms(STEP_MS / 2);
        }
    }
}

// same panicking *behavior* as panic-probe but doesn't print a panic message
// this prevents the panic message being printed *twice* when defmt::panic is invoked
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}
