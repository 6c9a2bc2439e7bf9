use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub type Power = i32;
pub type SampleTime = DateTime<FixedOffset>;

/// One observation in a power profile: a power reading paired with the
/// zoned time it was taken. Either field may be unset.
///
/// The sample does not check that power and time make sense together;
/// that is the job of a `ProfileValidator` looking at the whole profile.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PowerSample {
    power: Option<Power>,
    time: Option<SampleTime>,
}

impl PowerSample {
    pub fn new() -> PowerSample {
        PowerSample {
            power: None,
            time: None,
        }
    }

    pub fn from_values(power: Option<Power>, time: Option<SampleTime>) -> PowerSample {
        PowerSample { power, time }
    }

    pub fn power(&self) -> Option<Power> {
        self.power
    }

    pub fn set_power(&mut self, power: Option<Power>) {
        self.power = power;
    }

    pub fn time(&self) -> Option<SampleTime> {
        self.time
    }

    pub fn set_time(&mut self, time: Option<SampleTime>) {
        self.time = time;
    }
}
