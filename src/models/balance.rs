use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::lenient_decimal;

/// The group's financial position as computed by the backend.
///
/// Read-only: nothing in this crate derives or adjusts these figures.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GroupBalance {
    #[serde(rename = "efectivo", default, deserialize_with = "lenient_decimal")]
    pub cash: Decimal,
    #[serde(rename = "prestamos", default, deserialize_with = "lenient_decimal")]
    pub loans_outstanding: Decimal,
    #[serde(rename = "ingresos", default, deserialize_with = "lenient_decimal")]
    pub income: Decimal,
    #[serde(rename = "gastos", default, deserialize_with = "lenient_decimal")]
    pub expenses: Decimal,
    #[serde(rename = "capital_disponible", default, deserialize_with = "lenient_decimal")]
    pub available_capital: Decimal
}
