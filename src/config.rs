/// Runtime switches shared by the views through a context provider.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Config {
    /// When on, read failures on the dashboard and spend-history screens
    /// substitute fixed sample data and log a console warning instead of
    /// showing an empty screen.
    pub demo_fallback: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config { demo_fallback: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_fallback_is_on_by_default() {
        assert!(Config::default().demo_fallback);
    }
}
