//! Celsius/Fahrenheit converter.

/// Two-way temperature converter. Celsius is the stored value; Fahrenheit
/// is always derived from it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TemperatureConverter {
    celsius: f64,
}

/// Convert Celsius to Fahrenheit.
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 1.8 + 32.0
}

/// Convert Fahrenheit to Celsius.
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) / 1.8
}

impl TemperatureConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn celsius(&self) -> f64 {
        self.celsius
    }

    pub fn fahrenheit(&self) -> f64 {
        celsius_to_fahrenheit(self.celsius)
    }

    pub fn set_celsius(&mut self, celsius: f64) {
        self.celsius = celsius;
    }

    pub fn set_fahrenheit(&mut self, fahrenheit: f64) {
        self.celsius = fahrenheit_to_celsius(fahrenheit);
    }

    /// Update from a Celsius text field.
    /// Returns false, leaving the state unchanged, if the text is not a number.
    pub fn set_celsius_text(&mut self, text: &str) -> bool {
        match text.trim().parse::<f64>() {
            Ok(value) => {
                self.set_celsius(value);
                true
            }
            Err(_) => false,
        }
    }

    /// Update from a Fahrenheit text field.
    /// Returns false, leaving the state unchanged, if the text is not a number.
    pub fn set_fahrenheit_text(&mut self, text: &str) -> bool {
        match text.trim().parse::<f64>() {
            Ok(value) => {
                self.set_fahrenheit(value);
                true
            }
            Err(_) => false,
        }
    }
}
