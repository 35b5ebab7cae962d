use crate::domain::filter::{Comparison, FilterField, FilterSchema, ValueKind};

pub const APPOINTMENT_FILTERS: FilterSchema = FilterSchema::new(&[
    FilterField::compare("estado", "c.estado", Comparison::Eq, ValueKind::Text),
    FilterField::compare("fecha_inicio", "c.fecha", Comparison::Gte, ValueKind::Date),
    FilterField::compare("fecha_fin", "c.fecha", Comparison::Lte, ValueKind::Date),
    FilterField::compare("id_oficina", "c.id_oficina", Comparison::Eq, ValueKind::Integer),
    FilterField::compare("id_usuario", "c.id_usuario", Comparison::Eq, ValueKind::Integer),
    FilterField::compare("id_vehiculo", "c.id_vehiculo", Comparison::Eq, ValueKind::Integer),
]);
