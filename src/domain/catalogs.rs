//! Fixed option lists offered by the console's forms.

use serde::Serialize;
use utoipa::ToSchema;

/// Departments (regions) events and companies can be located in.
pub const DEPARTMENTS: &[&str] = &[
    "La Paz",
    "Oruro",
    "Potosí",
    "Chuquisaca",
    "Cochabamba",
    "Tarija",
    "Santa Cruz",
    "Pando",
    "Beni",
];

/// Business sectors.
pub const SECTORS: &[&str] = &[
    "Tecnología",
    "Manufactura",
    "Distribución",
    "Servicios",
    "Comercio",
    "Construcción",
    "Alimentario",
    "Textil",
    "Automotriz",
    "Salud",
    "Educación",
    "Turismo",
    "Agricultura",
    "Minería",
    "Energía",
];

/// Units of measure for product catalogs.
pub const UNITS_OF_MEASURE: &[&str] = &[
    "unidades",
    "kilogramos",
    "toneladas",
    "litros",
    "metros",
    "metros cuadrados",
    "metros cúbicos",
    "cajas",
    "paquetes",
    "licencias",
    "proyectos",
    "servicios",
    "horas",
    "días",
    "equipos",
    "piezas",
];

/// A currency option.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct Currency {
    /// Short code stored on events.
    pub code: &'static str,
    /// Display name.
    pub name: &'static str,
}

/// Currencies an event can quote deals in.
pub const CURRENCIES: &[Currency] = &[
    Currency {
        code: "BS",
        name: "Bolivianos",
    },
    Currency {
        code: "USD",
        name: "Dólar Estadounidense",
    },
    Currency {
        code: "EUR",
        name: "Euro",
    },
];

/// Returns `true` if `code` is one of [`CURRENCIES`].
#[must_use]
pub fn is_known_currency(code: &str) -> bool {
    CURRENCIES.iter().any(|c| c.code == code)
}
