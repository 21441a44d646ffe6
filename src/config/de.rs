// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Serde helpers for numbers that may be written as JSON numbers or strings

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{de, Deserialize, Deserializer};

use crate::types::tokens::TokenDecimals;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    String(String),
}

impl<T> NumberOrString<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn into_value<E: de::Error>(self) -> Result<T, E> {
        match self {
            NumberOrString::Number(value) => Ok(value),
            NumberOrString::String(raw) => raw
                .trim()
                .parse()
                .map_err(|e| E::custom(format!("invalid number {raw:?}: {e}"))),
        }
    }
}

/// `42` or `"42"`
pub(crate) fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    NumberOrString::<T>::deserialize(deserializer)?.into_value()
}

/// `42`, `"42"` or `null`
pub(crate) fn option_number_or_string<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    Option::<NumberOrString<T>>::deserialize(deserializer)?
        .map(|value| value.into_value())
        .transpose()
}

/// Token decimals, `null` or absent when the document leaves them unset
pub(crate) fn option_token_decimals<'de, D>(
    deserializer: D,
) -> Result<Option<TokenDecimals>, D::Error>
where
    D: Deserializer<'de>,
{
    option_number_or_string::<D, u8>(deserializer).map(|value| value.map(TokenDecimals::new))
}

/// Map of exact decimals, written as `50.5` or `"50.5"`
///
/// JSON numbers are read through their shortest textual form, so `0.1` stays
/// exactly one tenth.
pub(crate) fn decimal_map<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, BigDecimal>, D::Error>
where
    D: Deserializer<'de>,
{
    BTreeMap::<String, NumberOrString<serde_json::Number>>::deserialize(deserializer)?
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                NumberOrString::Number(number) => number.to_string(),
                NumberOrString::String(raw) => raw.trim().to_string(),
            };
            BigDecimal::from_str(&text)
                .map(|decimal| (key, decimal))
                .map_err(|e| {
                    <D::Error as de::Error>::custom(format!("invalid decimal {text:?}: {e}"))
                })
        })
        .collect()
}
