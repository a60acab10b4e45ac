//! Device profile: pick tuning constants from input capability and screen
//! size.

mod profile;

pub use profile::{
    DeviceCapabilities, DeviceClass, DeviceProfile, MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH,
};
