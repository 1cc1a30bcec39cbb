//! Three-tier coinage and conversions to the smallest unit.
//!
//! Prices are stored as gold crowns, silver shillings and brass pennies.
//! Every computation (repair quotes, comparisons) happens on the flat brass
//! penny amount, and is turned back into a display string at the very end.

use core::fmt;
use core::str::FromStr;

use strum::{AsRefStr, Display, EnumString};

use crate::error::CurrencyError;

/// Brass pennies in one silver shilling.
pub const PENNIES_PER_SHILLING: u64 = 12;

/// Brass pennies in one gold crown.
pub const PENNIES_PER_CROWN: u64 = 240;

/// A coin tier, ordered from most to least valuable.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, Display, EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Denomination {
    #[strum(serialize = "GC")]
    GoldCrown,
    #[strum(serialize = "SS")]
    SilverShilling,
    #[strum(serialize = "BP")]
    BrassPenny,
}

impl Denomination {
    /// Value of one coin of this tier, in brass pennies.
    pub const fn pennies(self) -> u64 {
        match self {
            Self::GoldCrown => PENNIES_PER_CROWN,
            Self::SilverShilling => PENNIES_PER_SHILLING,
            Self::BrassPenny => 1,
        }
    }
}

/// Price of an item as it is written on the item record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Price {
    #[cfg_attr(feature = "serde", serde(default))]
    pub gc: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ss: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bp: u32,
}

impl Price {
    pub const fn new(gc: u32, ss: u32, bp: u32) -> Self {
        Self { gc, ss, bp }
    }

    /// Total value in brass pennies.
    pub const fn in_pennies(&self) -> u64 {
        to_pennies(self.gc as u64, self.ss as u64, self.bp as u64)
    }

    /// Splits a brass penny amount into the largest coins first.
    pub fn from_pennies(amount: u64) -> Self {
        let (gc, ss, bp) = split(amount);
        Self {
            gc: saturate(gc),
            ss: saturate(ss),
            bp: saturate(bp),
        }
    }
}

/// `gc * 240 + ss * 12 + bp`, saturating at `u64::MAX`.
pub const fn to_pennies(gc: u64, ss: u64, bp: u64) -> u64 {
    gc.saturating_mul(PENNIES_PER_CROWN)
        .saturating_add(ss.saturating_mul(PENNIES_PER_SHILLING))
        .saturating_add(bp)
}

/// Formats a brass penny amount as `"<n> GC <n> SS <n> BP"`, omitting empty tiers.
///
/// A zero amount is written as `"0 BP"` so callers never receive an empty label.
pub fn format_pennies(amount: u64) -> String {
    Money(amount).to_string()
}

/// Parses a string produced by [`format_pennies`] back into brass pennies.
///
/// Tiers may appear in any order and may repeat; their values are summed.
pub fn parse_pennies(input: &str) -> Result<u64, CurrencyError> {
    input.parse::<Money>().map(|money| money.0)
}

/// Flat amount of brass pennies with the tiered display format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Money(pub u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn pennies(self) -> u64 {
        self.0
    }
}

impl From<Price> for Money {
    fn from(price: Price) -> Self {
        Money(price.in_pennies())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "0 {}", Denomination::BrassPenny);
        }

        let (gc, ss, bp) = split(self.0);
        let tiers = [
            (gc, Denomination::GoldCrown),
            (ss, Denomination::SilverShilling),
            (bp, Denomination::BrassPenny),
        ];

        let mut first = true;
        for (count, denomination) in tiers {
            if count == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{} {}", count, denomination)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Money {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let mut total: u64 = 0;
        let mut seen_any = false;

        while let Some(count) = tokens.next() {
            let count: u64 = count
                .parse()
                .map_err(|_| CurrencyError::InvalidAmount(count.to_string()))?;
            let label = tokens.next().ok_or(CurrencyError::MissingDenomination)?;
            let denomination = Denomination::from_str(label)
                .map_err(|_| CurrencyError::UnknownDenomination(label.to_string()))?;

            total = count
                .checked_mul(denomination.pennies())
                .and_then(|value| total.checked_add(value))
                .ok_or(CurrencyError::Overflow)?;
            seen_any = true;
        }

        if !seen_any {
            return Err(CurrencyError::Empty);
        }
        Ok(Money(total))
    }
}

fn split(amount: u64) -> (u64, u64, u64) {
    let gc = amount / PENNIES_PER_CROWN;
    let rest = amount % PENNIES_PER_CROWN;
    (gc, rest / PENNIES_PER_SHILLING, rest % PENNIES_PER_SHILLING)
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
