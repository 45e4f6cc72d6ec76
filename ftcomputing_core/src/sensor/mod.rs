mod analog;
mod digital;

pub use analog::AnalogSensor;
pub use digital::{DigitalSensor, Polarity};
