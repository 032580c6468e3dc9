use std::ffi::OsStr;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of octets in a Bluetooth device address.
pub const BT_ADDR_LEN: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BtAddressError {
    #[error("expected 6 colon separated groups, got {0}")]
    GroupCount(usize),
    #[error("group {index} ({group:?}) must be one or two hex digits")]
    GroupWidth { index: usize, group: String },
    #[error("group {index} contains non hex digit {digit:?}")]
    InvalidDigit { index: usize, digit: char },
    #[error("address is not valid UTF-8")]
    NotUtf8,
}

/// A validated Bluetooth device address like `00:1a:2b:3c:4d:5e`.
///
/// The textual width of every group is kept, `1:2:3:4:5:6` stays `1:2:3:4:5:6`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BtAddress {
    pub raw: [u8; BT_ADDR_LEN],
    pub str: String,
    wide: [bool; BT_ADDR_LEN],
}

impl BtAddress {
    #[must_use]
    pub fn msb(&self) -> u8 {
        self.raw[0]
    }

    /// Group `index` as the user wrote it (lowercased).
    #[must_use]
    pub fn group(&self, index: usize) -> String {
        if self.wide[index] {
            format!("{:02x}", self.raw[index])
        } else {
            format!("{:x}", self.raw[index])
        }
    }
}

impl FromStr for BtAddress {
    type Err = BtAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase();

        let groups: Vec<&str> = normalized.split(':').collect();
        if groups.len() != BT_ADDR_LEN {
            return Err(BtAddressError::GroupCount(groups.len()));
        }

        let mut raw = [0u8; BT_ADDR_LEN];
        let mut wide = [false; BT_ADDR_LEN];

        for (index, group) in groups.iter().enumerate() {
            if group.is_empty() || group.len() > 2 {
                return Err(BtAddressError::GroupWidth {
                    index,
                    group: (*group).to_string(),
                });
            }
            let mut value = 0u8;
            for digit in group.chars() {
                let Some(nibble) = digit.to_digit(16) else {
                    return Err(BtAddressError::InvalidDigit { index, digit });
                };
                value = (value << 4) | nibble as u8;
            }
            raw[index] = value;
            wide[index] = group.len() == 2;
        }

        Ok(Self {
            raw,
            str: normalized,
            wide,
        })
    }
}

impl TryFrom<&OsStr> for BtAddress {
    type Error = BtAddressError;

    fn try_from(arg: &OsStr) -> Result<Self, Self::Error> {
        arg.to_str().ok_or(BtAddressError::NotUtf8)?.parse()
    }
}

impl fmt::Display for BtAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.str)
    }
}
