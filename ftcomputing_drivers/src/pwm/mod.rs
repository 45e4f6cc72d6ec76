use hal::{
    clocks::Clocks,
    pac::{TIM2, TIM3, TIM4},
    timer::{OutputCompare, TimChannel, Timer, TimerConfig},
};

use crate::pinout::header::{PwmOut, PwmTimer, HEADER};

/// PWM frequency of the motor outputs, close to the Arduino Uno default.
pub const PWM_FREQ_HZ: f32 = 490.;

/// Timers behind the PWM capable header pins.
pub struct ShieldPwm {
    tim2: Timer<TIM2>,
    tim3: Timer<TIM3>,
    tim4: Timer<TIM4>,
}

impl ShieldPwm {
    pub fn new(tim2: TIM2, tim3: TIM3, tim4: TIM4, clock_cfg: &Clocks) -> Self {
        // Edge aligned up-counting, all three timers share the frequency
        let mut tim2 = Timer::new_tim2(tim2, PWM_FREQ_HZ, TimerConfig::default(), clock_cfg);
        let mut tim3 = Timer::new_tim3(tim3, PWM_FREQ_HZ, TimerConfig::default(), clock_cfg);
        let mut tim4 = Timer::new_tim4(tim4, PWM_FREQ_HZ, TimerConfig::default(), clock_cfg);
        tim2.enable();
        tim3.enable();
        tim4.enable();

        ShieldPwm { tim2, tim3, tim4 }
    }

    /// Enables every PWM channel of the header at 0% and routes the pins.
    pub fn begin(&mut self) {
        for header in HEADER.iter() {
            if let Some(out) = header.pwm {
                let channel = Self::tim_channel(out.channel);
                match out.timer {
                    PwmTimer::Tim2 => self.tim2.enable_pwm_output(channel, OutputCompare::Pwm1, 0.0),
                    PwmTimer::Tim3 => self.tim3.enable_pwm_output(channel, OutputCompare::Pwm1, 0.0),
                    PwmTimer::Tim4 => self.tim4.enable_pwm_output(channel, OutputCompare::Pwm1, 0.0),
                }
                header.gpio.init();
            }
        }
    }

    /// Sets the duty of one output, `duty` in `0..=duty_max`.
    pub fn apply(&mut self, out: PwmOut, duty: u16, duty_max: u16) {
        let channel = Self::tim_channel(out.channel);
        match out.timer {
            PwmTimer::Tim2 => {
                let period = self.tim2.get_max_duty();
                self.tim2.set_duty(channel, Self::duty2period(duty, duty_max, period));
            }
            PwmTimer::Tim3 => {
                let period = self.tim3.get_max_duty();
                self.tim3.set_duty(channel, Self::duty2period(duty, duty_max, period));
            }
            PwmTimer::Tim4 => {
                let period = self.tim4.get_max_duty();
                self.tim4.set_duty(channel, Self::duty2period(duty, duty_max, period));
            }
        }
    }

    fn duty2period(duty: u16, duty_max: u16, period: u32) -> u32 {
        // Scale the 0..duty_max range onto the timer period
        if duty_max == 0 {
            0
        } else {
            (duty.min(duty_max) as u64 * period as u64 / duty_max as u64) as u32
        }
    }

    fn tim_channel(channel: u8) -> TimChannel {
        match channel {
            1 => TimChannel::C1,
            2 => TimChannel::C2,
            3 => TimChannel::C3,
            _ => TimChannel::C4,
        }
    }
}
