// src/common/wire.rs
//
// Helpers de (de)serialização para o JSON do webhook. O backend não garante
// tipos: IDs chegam como número ou texto, valores às vezes como string.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserialize, Deserializer, Serializer};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(serde_json::Number),
    Text(String),
    Flag(bool),
}

impl Loose {
    fn into_text(self) -> String {
        match self {
            Loose::Number(n) => n.to_string(),
            Loose::Text(s) => s.trim().to_string(),
            Loose::Flag(b) => b.to_string(),
        }
    }
}

/// `ID` numérico ou texto vira sempre `String`. `null` vira string vazia.
pub fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?
        .map(Loose::into_text)
        .unwrap_or_default())
}

/// Igual a `de_id`, mas preserva a ausência (`None`) para o upsert.
pub fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?
        .map(Loose::into_text)
        .filter(|id| !id.is_empty()))
}

pub fn de_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Loose>::deserialize(deserializer)? {
        None => Ok(Decimal::ZERO),
        Some(value) => {
            let text = value.into_text();
            if text.is_empty() {
                return Ok(Decimal::ZERO);
            }
            parse_decimal(&text)
                .ok_or_else(|| serde::de::Error::custom(format!("valor numérico inválido: {text}")))
        }
    }
}

/// Minutos inteiros; negativo ou inválido vira 0 (quem chama aplica o mínimo).
pub fn de_minutes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = de_decimal(deserializer)?;
    Ok(value.trunc().to_u32().unwrap_or(0))
}

/// Texto livre opcional: `null`, ausente ou em branco viram `None`.
pub fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?
        .map(Loose::into_text)
        .filter(|text| !text.is_empty()))
}

pub fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_opt_text(deserializer)?.unwrap_or_default())
}

/// IDs numéricos voltam como número (o webhook grava assim), o resto como texto.
pub fn ser_opt_id<S>(id: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(id) => ser_id(id, serializer),
        None => serializer.serialize_none(),
    }
}

pub fn ser_id<S>(id: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id.parse::<u64>() {
        Ok(number) => serializer.serialize_u64(number),
        Err(_) => serializer.serialize_str(id),
    }
}

/// `None` sai como string vazia: a planilha do webhook não conhece `null`.
pub fn ser_opt_text<S>(text: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(text.as_deref().unwrap_or_default())
}

/// Aceita "35.5", "35,50", "1.234,56", "1,234.56" e notação científica.
/// O último separador é o decimal; o outro é de milhar.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    let normalized = match (text.rfind(','), text.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => text.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => text.replace(',', ""),
        (Some(_), None) => text.replace(',', "."),
        _ => text.to_string(),
    };
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// "HH:mm", tolerando segundos ("HH:mm:ss").
pub fn parse_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .ok()
}
