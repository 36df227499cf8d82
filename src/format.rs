//! Typed insert and append helpers. Each value is formatted once, then
//! handed to the ordinary insert with the given options, so `count` repeats
//! the formatted text and `min_width` pads the whole repetition.

extern crate alloc;
use alloc::format;
use alloc::string::String;

use crate::edit::InsertOptions;
use crate::error::Result;
use crate::SharedString;
use crate::NPOS;

/// Decimal places used when none are given.
pub const DEFAULT_DECIMALS: usize = 5;

fn format_float(num: f32, decimals: usize) -> String {
    format!("{:.*}", decimals, num)
}

fn format_bool(b: bool, display_text: bool) -> &'static str {
    match (b, display_text) {
        (true, true) => "true",
        (false, true) => "false",
        (true, false) => "1",
        (false, false) => "0",
    }
}

impl SharedString {
    pub fn insert_int(&mut self, num: i32, position: usize, opts: InsertOptions) -> Result<usize> {
        self.insert_with(format!("{}", num), position, opts)
    }

    pub fn insert_long(&mut self, num: i64, position: usize, opts: InsertOptions) -> Result<usize> {
        self.insert_with(format!("{}", num), position, opts)
    }

    /// Inserts num in fixed point notation with the given number of decimals.
    pub fn insert_float(&mut self, num: f32, decimals: usize, position: usize, opts: InsertOptions) -> Result<usize> {
        self.insert_with(format_float(num, decimals), position, opts)
    }

    /// With display_text set inserts "true" or "false", otherwise "1" or "0".
    pub fn insert_bool(&mut self, b: bool, display_text: bool, position: usize, opts: InsertOptions) -> Result<usize> {
        self.insert_with(format_bool(b, display_text), position, opts)
    }

    /// Upper case hex without a prefix. Negative numbers are written as
    /// their 32-bit two's complement, so -1 is "FFFFFFFF".
    pub fn insert_hex(&mut self, num: i32, position: usize, opts: InsertOptions) -> Result<usize> {
        self.insert_with(format!("{:X}", num), position, opts)
    }

    pub fn append_int(&mut self, num: i32, opts: InsertOptions) -> Result<usize> {
        self.insert_int(num, NPOS, opts)
    }

    pub fn append_long(&mut self, num: i64, opts: InsertOptions) -> Result<usize> {
        self.insert_long(num, NPOS, opts)
    }

    pub fn append_float(&mut self, num: f32, decimals: usize, opts: InsertOptions) -> Result<usize> {
        self.insert_float(num, decimals, NPOS, opts)
    }

    pub fn append_bool(&mut self, b: bool, display_text: bool, opts: InsertOptions) -> Result<usize> {
        self.insert_bool(b, display_text, NPOS, opts)
    }

    pub fn append_hex(&mut self, num: i32, opts: InsertOptions) -> Result<usize> {
        self.insert_hex(num, NPOS, opts)
    }
}

#[test]
fn test_format_float() {
    assert_eq!(format_float(22.0 / 7.0, DEFAULT_DECIMALS), "3.14286");
    assert_eq!(format_float(22.0 / 7.0, 2), "3.14");
    assert_eq!(format_float(2.2, DEFAULT_DECIMALS), "2.20000");
}
