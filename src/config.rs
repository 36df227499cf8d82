use crate::DEFAULT_CAPACITY;
use crate::DEFAULT_PAD_BYTE;

/// Construction settings for a SharedString.
///
/// `initial_capacity` is also the minimum step the buffer grows by, so a
/// string created with a capacity of 20 grows 20 -> 40 -> 60 as long as each
/// edit needs no more than 20 extra bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub initial_capacity: usize,
    pub growth_allowed: bool,
    pub pad_byte: u8,
}

impl Config {
    pub const fn new() -> Self {
        Config { initial_capacity: DEFAULT_CAPACITY, growth_allowed: true, pad_byte: DEFAULT_PAD_BYTE }
    }

    pub const fn with_capacity(mut self, cap: usize) -> Self {
        self.initial_capacity = cap;
        self
    }

    /// whether edits may grow the buffer past its capacity.
    pub const fn growth(mut self, allowed: bool) -> Self {
        self.growth_allowed = allowed;
        self
    }

    pub const fn pad_byte(mut self, pad: u8) -> Self {
        self.pad_byte = pad;
        self
    }
}

impl Default for Config {
    #[inline]
    fn default() -> Config {
        Self::new()
    }
}

#[test]
fn test_default_config() {
    let c = Config::default();
    assert_eq!(c.initial_capacity, 64);
    assert!(c.growth_allowed);
    assert_eq!(c.pad_byte, b' ');
    let c = Config::new().with_capacity(5).growth(false).pad_byte(b'0');
    assert_eq!(c, Config { initial_capacity: 5, growth_allowed: false, pad_byte: b'0' });
}
