use std::fmt;

use crate::params::ParamMap;

/// An integer query parameter that the API only accepts within the inclusive range
/// `MIN..=MAX`.
///
/// Any value can be stored; a value outside the range is simply left out of the request rather
/// than being rejected or clamped. The default value of zero is outside every range used by the
/// API, so an unset parameter is never sent.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Bounded<const MIN: u32, const MAX: u32>(u32);

impl<const MIN: u32, const MAX: u32> Bounded<MIN, MAX> {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        MIN <= self.0 && self.0 <= MAX
    }

    pub(crate) fn insert_into(self, params: &mut ParamMap, key: &'static str) {
        if self.is_valid() {
            params.insert(key, self.to_string());
        }
    }
}

impl<const MIN: u32, const MAX: u32> From<u32> for Bounded<MIN, MAX> {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl<const MIN: u32, const MAX: u32> fmt::Display for Bounded<MIN, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        <u32 as fmt::Display>::fmt(&self.0, f)
    }
}
