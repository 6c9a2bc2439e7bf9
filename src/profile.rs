use crate::sample::PowerSample;
use crate::Result;

/// Checks power/time relationships across a sequence of samples.
///
/// The rules live with the implementor; `PowerSample` itself accepts any
/// combination of values, including unset fields.
pub trait ProfileValidator {
    fn validate(&self, samples: &[PowerSample]) -> Result<()>;
}
