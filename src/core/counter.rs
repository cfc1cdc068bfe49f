//! Animated numeric counter state and number formatting

use super::animation::{AnimatedValue, EASE_OUT, Transition};

/// Duration of every counter transition
pub const COUNTER_DURATION_MS: f64 = 500.0;

/// Number formatting options for a counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFormat {
    pub min_fraction_digits: usize,
    pub max_fraction_digits: usize,
    /// Insert `,` between thousands
    pub grouping: bool,
}

impl Default for CounterFormat {
    fn default() -> Self {
        Self {
            min_fraction_digits: 0,
            max_fraction_digits: 0,
            grouping: true,
        }
    }
}

impl CounterFormat {
    pub fn with_fraction_digits(min: usize, max: usize) -> Self {
        Self {
            min_fraction_digits: min,
            max_fraction_digits: max,
            ..Self::default()
        }
    }

    pub fn without_grouping(mut self) -> Self {
        self.grouping = false;
        self
    }

    pub fn format(&self, value: f64) -> String {
        let max = self.max_fraction_digits;
        let min = self.min_fraction_digits.min(max);

        let rendered = format!("{:.*}", max, value.abs());
        let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

        let mut fraction = fraction.to_string();
        while fraction.len() > min && fraction.ends_with('0') {
            fraction.pop();
        }

        let integer = if self.grouping {
            group_thousands(integer)
        } else {
            integer.to_string()
        };

        // Rounding can turn a tiny negative into zero; never print "-0"
        let is_zero = rendered.chars().all(|c| c == '0' || c == '.');
        let sign = if value < 0.0 && !is_zero { "-" } else { "" };

        if fraction.is_empty() {
            format!("{}{}", sign, integer)
        } else {
            format!("{}{}.{}", sign, integer, fraction)
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// A counter that eases from its previous value to each new value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterState {
    value: AnimatedValue<f64>,
    format: CounterFormat,
}

impl CounterState {
    pub fn new(initial: f64, format: CounterFormat) -> Self {
        Self {
            value: AnimatedValue::new(
                initial,
                Transition::tween(COUNTER_DURATION_MS, EASE_OUT),
            ),
            format,
        }
    }

    /// Start animating towards `value`; only the latest value is kept
    pub fn set_value(&mut self, value: f64, now: f64) {
        self.value.set_target(value, now);
    }

    pub fn tick(&mut self, now: f64) -> f64 {
        self.value.tick(now)
    }

    /// Most recently supplied value
    pub fn target(&self) -> f64 {
        self.value.target()
    }

    pub fn is_settled(&self) -> bool {
        self.value.is_settled()
    }

    /// Formatted text for the current frame
    pub fn display(&self) -> String {
        self.format.format(self.value.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_integer_with_grouping() {
        let format = CounterFormat::default();
        assert_eq!(format.format(0.0), "0");
        assert_eq!(format.format(50.0), "50");
        assert_eq!(format.format(1234.0), "1,234");
        assert_eq!(format.format(1234567.4), "1,234,567");
        assert_eq!(format.format(99.6), "100");
    }

    #[test]
    fn test_format_without_grouping() {
        let format = CounterFormat::default().without_grouping();
        assert_eq!(format.format(1234567.0), "1234567");
    }

    #[test]
    fn test_format_fraction_digits() {
        let format = CounterFormat::with_fraction_digits(1, 2);
        assert_eq!(format.format(3.0), "3.0");
        assert_eq!(format.format(3.14159), "3.14");
        assert_eq!(format.format(2.5), "2.5");
        assert_eq!(format.format(1500.25), "1,500.25");
    }

    #[test]
    fn test_format_negative_values() {
        let format = CounterFormat::default();
        assert_eq!(format.format(-1500.0), "-1,500");
        assert_eq!(format.format(-0.2), "0");
    }

    #[test]
    fn test_min_digits_are_capped_by_max() {
        let format = CounterFormat::with_fraction_digits(3, 1);
        assert_eq!(format.format(1.0), "1.0");
    }

    #[test]
    fn test_counter_animates_to_new_value() {
        let mut counter = CounterState::new(0.0, CounterFormat::default());
        counter.set_value(100.0, 0.0);

        let mid = counter.tick(250.0);
        assert!(mid > 0.0 && mid < 100.0);

        counter.tick(COUNTER_DURATION_MS);
        assert!(counter.is_settled());
        assert_eq!(counter.display(), "100");
    }

    #[test]
    fn test_counter_rapid_updates_end_on_latest() {
        let mut counter = CounterState::new(0.0, CounterFormat::default());
        counter.set_value(10.0, 0.0);
        counter.tick(50.0);
        counter.set_value(20.0, 60.0);
        counter.tick(80.0);
        counter.set_value(3.0, 90.0);

        assert_eq!(counter.target(), 3.0);

        counter.tick(90.0 + COUNTER_DURATION_MS);
        assert_eq!(counter.display(), "3");
    }

    #[test]
    fn test_counter_intermediate_frames_are_between_endpoints() {
        let mut counter = CounterState::new(0.0, CounterFormat::default());
        counter.set_value(50.0, 0.0);

        let mut previous = 0.0;
        for frame in 1..=31 {
            let value = counter.tick(frame as f64 * 16.0);
            assert!(value >= previous && value <= 50.0);
            previous = value;
        }
    }
}
