//! Prints the E-inputs and both potentiometers whenever something changes.

#![no_std]
#![no_main]

use cortex_m::delay::Delay;
use cortex_m_rt::entry; // The runtime

use hal::{self, clocks::Clocks, pac};

use defmt_rtt as _; // global logger
use panic_probe as _;

use ftcomputing_core::{AssemblyConfig, DeviceAssembly, InputId};
use ftcomputing_drivers::ShieldPlatform;

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

    defmt::println!("Inputs test: press buttons on E0, E3, E4, E5, turn EX/EY");
    for id in InputId::ALL {
        defmt::println!("{} on pin {}", id, ft.input(id).to_pin());
    }

    let mut last = (ft.inputs(), ft.ex().reading(), ft.ey().reading());
    loop {
        let now = (ft.inputs(), ft.ex().reading(), ft.ey().reading());

        // Ignore ADC noise in the lowest bits
        let moved = now.1.abs_diff(last.1) > 32 || now.2.abs_diff(last.2) > 32;
        if now.0 != last.0 || moved {
            defmt::println!(
                "E7..E0 {=u8:08b}  EX {=u16}  EY {=u16}  E8==E0 {}",
                now.0.bits(),
                now.1,
                now.2,
                ft.e8().is_active() == ft.e0().is_active()
            );
            last = now;
        }

        delay.delay_ms(20);
    }
}

// same panicking *behavior* as panic-probe but doesn't print a panic message
// this prevents the panic message being printed *twice* when defmt::panic is invoked
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}
