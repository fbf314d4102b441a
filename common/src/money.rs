//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

/// Amount of money in euros.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Money(Decimal);

impl Money {
    /// Currency symbol prepended when displaying [`Money`].
    pub const SYMBOL: char = '€';

    /// Creates a new [`Money`] of the provided `amount`.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the amount of this [`Money`].
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<u32> for Money {
    fn from(amount: u32) -> Self {
        Self(amount.into())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::SYMBOL, self.0.normalize())
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let amount = s.strip_prefix(Self::SYMBOL).unwrap_or(s).trim();
        if amount.is_empty() {
            return Err("empty amount");
        }

        Decimal::from_str(amount)
            .map(Self)
            .map_err(|_| "invalid amount")
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.
    //!
    //! [`Money`] travels as a plain JSON number.

    use std::fmt;

    use rust_decimal::{
        prelude::{FromPrimitive as _, ToPrimitive as _},
        Decimal,
    };
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::Money;

    impl Serialize for Money {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let amount = self.0.normalize();
            if let Some(int) =
                amount.is_integer().then(|| amount.to_i64()).flatten()
            {
                serializer.serialize_i64(int)
            } else {
                serializer.serialize_f64(amount.to_f64().ok_or_else(|| {
                    <S::Error as serde::ser::Error>::custom(
                        "`Money` amount overflow",
                    )
                })?)
            }
        }
    }

    impl<'de> Deserialize<'de> for Money {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(Visitor)
        }
    }

    /// [`de::Visitor`] accepting JSON numbers and numeric strings.
    struct Visitor;

    impl de::Visitor<'_> for Visitor {
        type Value = Money;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or a numeric string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Money(v.into()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Money(v.into()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Decimal::from_f64(v)
                .map(Money)
                .ok_or_else(|| E::custom(format!("invalid amount: {v}")))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.parse().map_err(E::custom)
        }
    }
}
