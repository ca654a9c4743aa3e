//! Inline delimiters. The parser never hardcodes `**` or `](`.

pub struct Strong;

impl Strong {
    pub const DELIM: &'static str = "**";
}

pub struct Emphasis;

impl Emphasis {
    pub const DELIM: u8 = b'*';
}

pub struct Link;

impl Link {
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: &'static str = "]";
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: &'static str = ")";
    pub const TARGET: &'static str = "_blank";
    pub const REL: &'static str = "noopener noreferrer";
}
