//! Battery estimation and joystick sample conversion
//!
//! Readout noise is handled with a monotonic-decrease filter rather than
//! averaging: a new sample is accepted only if it is lower than the held
//! value, treating upward jitter as sensor noise.

/// ADC counts at the 0% point (3.2 V through the 10K:10K divider,
/// 10-bit conversion over a 6.6 V full scale)
const ADC_EMPTY: i32 = 500;

/// Map raw 10-bit battery ADC counts to a 0-100 percentage
///
/// Linear over the 3.2-4.7 V window; clamped so divider noise below the
/// empty point cannot produce a negative estimate.
pub fn battery_percent_from_adc(raw: u16) -> u8 {
    let percent = (raw as i32 - ADC_EMPTY) * 2 / 3;
    percent.clamp(0, 100) as u8
}

/// Downsample a raw 10-bit joystick reading to the 8-bit wire format
pub fn joystick_byte(raw: u16) -> u8 {
    (raw >> 2) as u8
}

/// Battery percentage estimate with monotonic-decrease filtering
///
/// Used for both the remote's own battery and the hexapod's reported one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryMonitor {
    percent: u8,
}

impl Default for BatteryMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatteryMonitor {
    /// Start at 100%; the first real sample pulls the estimate down
    pub const fn new() -> Self {
        Self { percent: 100 }
    }

    /// Current estimate, 0-100
    pub const fn percent(&self) -> u8 {
        self.percent
    }

    /// Offer a new sample; accepted only if lower than the held value
    pub fn update(&mut self, sample: u8) {
        if sample < self.percent {
            self.percent = sample;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_adc_mapping_endpoints() {
        assert_eq!(battery_percent_from_adc(500), 0);
        assert_eq!(battery_percent_from_adc(650), 100);
    }

    #[test]
    fn test_adc_mapping_clamps() {
        assert_eq!(battery_percent_from_adc(0), 0);
        assert_eq!(battery_percent_from_adc(1023), 100);
    }

    #[test]
    fn test_adc_mapping_midpoint() {
        // (575 - 500) * 2 / 3 = 50
        assert_eq!(battery_percent_from_adc(575), 50);
    }

    #[test]
    fn test_joystick_downsample() {
        assert_eq!(joystick_byte(0), 0);
        assert_eq!(joystick_byte(512), 128);
        assert_eq!(joystick_byte(1023), 255);
    }

    #[test]
    fn test_monotonic_filter_ignores_upward_jitter() {
        let mut monitor = BatteryMonitor::new();

        monitor.update(80);
        assert_eq!(monitor.percent(), 80);

        monitor.update(85); // Noise spike, must be ignored
        assert_eq!(monitor.percent(), 80);

        monitor.update(79);
        assert_eq!(monitor.percent(), 79);
    }

    proptest! {
        #[test]
        fn prop_estimate_never_increases(samples in proptest::collection::vec(0u8..=100, 1..50)) {
            let mut monitor = BatteryMonitor::new();
            let mut previous = monitor.percent();
            for sample in samples {
                monitor.update(sample);
                prop_assert!(monitor.percent() <= previous);
                previous = monitor.percent();
            }
        }

        #[test]
        fn prop_percent_in_range(raw in 0u16..1024) {
            prop_assert!(battery_percent_from_adc(raw) <= 100);
        }
    }
}
