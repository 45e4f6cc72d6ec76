use hal::{
    adc::{Adc, AdcDevice, InputType, SampleTime},
    clocks::Clocks,
    pac::{ADC1, ADC2},
};

use crate::pinout::header::{AdcIn, HEADER};

/// Single-conversion reads of the A0..A5 header pins.
pub struct ShieldAdc {
    adc1: Adc<ADC1>,
    adc2: Adc<ADC2>,
}

impl ShieldAdc {
    pub fn new(adc1: ADC1, adc2: ADC2, clock_cfg: &Clocks) -> Self {
        let mut adc1 = Adc::new_adc1(adc1, AdcDevice::One, Default::default(), clock_cfg.systick());
        let mut adc2 = Adc::new_adc2(adc2, AdcDevice::Two, Default::default(), clock_cfg.systick());

        for header in HEADER.iter() {
            if let Some(input) = header.adc {
                header.gpio.init();
                // Potentiometers are high impedance, use a long sample time
                match input.adc {
                    1 => {
                        adc1.set_input_type(input.channel, InputType::SingleEnded);
                        adc1.set_sample_time(input.channel, SampleTime::T181);
                    }
                    _ => {
                        adc2.set_input_type(input.channel, InputType::SingleEnded);
                        adc2.set_sample_time(input.channel, SampleTime::T181);
                    }
                }
            }
        }

        ShieldAdc { adc1, adc2 }
    }

    /// Raw 12-bit sample.
    pub fn read(&mut self, input: AdcIn) -> u16 {
        match input.adc {
            1 => self.adc1.read(input.channel),
            _ => self.adc2.read(input.channel),
        }
    }
}
