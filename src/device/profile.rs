//! Device detection and tuning constants.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Point, SessionConfig};

/// Viewport width below which a touch device counts as a phone.
pub const MOBILE_MAX_WIDTH: f32 = 768.0;

/// Viewport width below which a touch device counts as a tablet.
pub const TABLET_MAX_WIDTH: f32 = 1024.0;

/// Raw input and screen capabilities reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceCapabilities {
    /// Simultaneous touch points supported (0 = no touch screen).
    pub max_touch_points: u32,

    /// Primary pointer is coarse (a finger rather than a mouse).
    pub coarse_pointer: bool,

    /// Viewport width in logical pixels.
    pub viewport_width: f32,

    /// Viewport height in logical pixels.
    pub viewport_height: f32,
}

impl DeviceCapabilities {
    /// A mouse-driven screen of the given size.
    pub fn desktop(width: f32, height: f32) -> Self {
        Self {
            max_touch_points: 0,
            coarse_pointer: false,
            viewport_width: width,
            viewport_height: height,
        }
    }

    /// A touch screen of the given size.
    pub fn touch(width: f32, height: f32) -> Self {
        Self {
            max_touch_points: 5,
            coarse_pointer: true,
            viewport_width: width,
            viewport_height: height,
        }
    }

    /// Can the device be driven by touch?
    pub fn is_touch(&self) -> bool {
        self.max_touch_points > 0 || self.coarse_pointer
    }
}

/// Coarse device class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

/// Tuning constants chosen for a device.
///
/// Computed once when the adapter is built; never polled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Detected class.
    pub class: DeviceClass,

    /// Touch capable (enables haptics and the touch offset).
    pub touch: bool,

    /// Default magnetic radius for zones built through the adapter.
    pub snap_distance: f32,

    /// Shift from the finger to the drawn card, so the finger does not
    /// cover it.
    pub touch_offset: Point,

    /// Duration of feedback animations.
    pub animation_duration: Duration,

    /// Minimum time between processed drag updates.
    pub throttle_interval: Duration,

    /// Emit haptic pulses.
    pub haptics: bool,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self::for_class(DeviceClass::Desktop)
    }
}

impl DeviceProfile {
    /// Classify the device and pick its constants.
    pub fn detect(capabilities: &DeviceCapabilities) -> Self {
        let touch = capabilities.is_touch();
        let width = capabilities.viewport_width;

        let class = if touch && width < MOBILE_MAX_WIDTH {
            DeviceClass::Mobile
        } else if touch && width < TABLET_MAX_WIDTH {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        };

        let mut profile = Self::for_class(class);
        // A large touch screen is still a desktop, but it can vibrate
        profile.touch = touch;
        profile.haptics = touch;

        tracing::debug!(?class, touch, width, "device profile detected");
        profile
    }

    /// Constants for a class.
    pub fn for_class(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Mobile => Self {
                class,
                touch: true,
                snap_distance: 60.0,
                touch_offset: Point::new(0.0, -50.0),
                animation_duration: Duration::from_millis(200),
                throttle_interval: Duration::from_millis(33),
                haptics: true,
            },
            DeviceClass::Tablet => Self {
                class,
                touch: true,
                snap_distance: 45.0,
                touch_offset: Point::new(0.0, -30.0),
                animation_duration: Duration::from_millis(250),
                throttle_interval: Duration::from_millis(16),
                haptics: true,
            },
            DeviceClass::Desktop => Self {
                class,
                touch: false,
                snap_distance: 30.0,
                touch_offset: Point::ZERO,
                animation_duration: Duration::from_millis(300),
                throttle_interval: Duration::from_millis(16),
                haptics: false,
            },
        }
    }

    /// Session configuration for this device.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default().with_throttle_interval(self.throttle_interval)
    }
}
