use crate::domain::filter::{Comparison, FilterField, FilterSchema, ValueKind};

pub const MAINTENANCE_FILTERS: FilterSchema = FilterSchema::new(&[
    FilterField::compare("categoria", "categoria", Comparison::Eq, ValueKind::Text),
    FilterField::compare(
        "precio_min",
        "precio_mano_obra",
        Comparison::Gte,
        ValueKind::Decimal,
    ),
    FilterField::compare(
        "precio_max",
        "precio_mano_obra",
        Comparison::Lte,
        ValueKind::Decimal,
    ),
    FilterField::compare("estado", "estado", Comparison::Eq, ValueKind::Text),
    FilterField::compare(
        "requiere_repuestos",
        "requiere_repuestos",
        Comparison::Eq,
        ValueKind::Boolean,
    ),
    FilterField::compare(
        "tiempo_max",
        "tiempo_estimado",
        Comparison::Lte,
        ValueKind::Integer,
    ),
    FilterField::search("buscar", &["nombre", "descripcion"]),
]);
