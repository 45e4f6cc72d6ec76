#![no_main]
#![no_std]

use defmt_rtt as _;
use panic_probe as _;

use hal::{
    self,
    clocks::Clocks,
    pac,
    pac::TIM6,
    timer::{Timer, TimerInterrupt},
};

use ftcomputing_core::{AssemblyConfig, DeviceAssembly, InputSnapshot};
use ftcomputing_drivers::ShieldPlatform;

/// Control loop rate
const TICK_HZ: f32 = 50.;
/// Full scale of the 12-bit ADC
const ADC_FULL: u32 = 4095;

#[rtic::app(device = pac, peripherals = true)]
mod app {
    use super::*;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        timer: Timer<TIM6>,
        ft: DeviceAssembly<ShieldPlatform>,
        last: InputSnapshot,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local) {
        let dp = ctx.device;
        let clock_cfg = Clocks::default();
        clock_cfg.setup().unwrap();

        let sysclk_freq = clock_cfg.sysclk(); // System clock frequency in Hz
        defmt::debug!("SYSTEM: Clock frequency is {} MHz", sysclk_freq / 1000000);

        let platform = ShieldPlatform::new(dp.TIM2, dp.TIM3, dp.TIM4, dp.ADC1, dp.ADC2, &clock_cfg);

        // 12V bench supply, 6V kit motors
        let ft = match DeviceAssembly::new(platform, AssemblyConfig::default()) {
            Ok(ft) => ft,
            Err((_, err)) => defmt::panic!("INTERFACE: bad wiring: {}", err),
        };

        let mut timer = Timer::new_tim6(dp.TIM6, TICK_HZ, Default::default(), &clock_cfg);
        timer.enable_interrupt(TimerInterrupt::Update);
        timer.enable();

        (
            Shared {},
            Local {
                timer,
                ft,
                last: InputSnapshot::default(),
            },
        )
    }

    /// E0/E3 run M1 right/left at the speed set on EX, E4/E5 do the same
    /// for M2 at full speed, M3 runs while EY is past half travel.
    #[task(binds = TIM6_DACUNDER, local = [timer, ft, last])]
    fn control_tick(cx: control_tick::Context) {
        cx.local.timer.clear_interrupt(TimerInterrupt::Update);
        let ft = cx.local.ft;

        let inputs = ft.inputs();
        if inputs != *cx.local.last {
            defmt::info!("INPUTS: {=u8:08b}", inputs.bits());
            *cx.local.last = inputs;
        }

        let speed = scale(ft.ex().reading(), ft.max_duty_cycle());
        if ft.e0().is_depressed() {
            ft.motor1().right_at(speed);
        } else if ft.e3().is_depressed() {
            ft.motor1().left_at(speed);
        } else {
            ft.motor1().off();
        }

        if ft.e4().is_depressed() {
            ft.motor2().right();
        } else if ft.e5().is_depressed() {
            ft.motor2().left();
        } else {
            ft.motor2().off();
        }

        if ft.ey().reading() as u32 > ADC_FULL / 2 {
            ft.motor3().on();
        } else {
            ft.motor3().off();
        }
    }

    /// Maps a potentiometer sample onto `0..=max_duty`.
    fn scale(sample: u16, max_duty: u16) -> i32 {
        let duty = sample.min(ADC_FULL as u16) as u32 * max_duty as u32 / ADC_FULL;
        duty as i32
    }
}

#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}
