use crate::domain::filter::{Comparison, FilterField, FilterSchema, ValueKind};

pub const SPARE_PART_FILTERS: FilterSchema = FilterSchema::new(&[
    FilterField::compare("categoria", "categoria", Comparison::Eq, ValueKind::Text),
    FilterField::compare("precio_min", "precio", Comparison::Gte, ValueKind::Decimal),
    FilterField::compare("precio_max", "precio", Comparison::Lte, ValueKind::Decimal),
    FilterField::compare("estado", "estado", Comparison::Eq, ValueKind::Text),
    FilterField::compatible("marca", "marcas_compatibles", "todas"),
    FilterField::compatible("modelo", "modelos_compatibles", "todos"),
    FilterField::compare("stock_min", "stock", Comparison::Gte, ValueKind::Integer),
    FilterField::search("buscar", &["nombre", "descripcion"]),
]);
