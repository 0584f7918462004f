/// Unique record identifier (stable within a loaded collection).
/// Example: `24891`
pub type RecordId = String;
/// Record category name shown in the entity selector.
/// Examples: `Documento`, `Pessoa`, `Local`
pub type EntityType = String;
/// Facet/display key for one record detail.
/// Examples: `Nação`, `Condição jurídica`, `Ano(s) de produção`
pub type FieldName = String;
/// Distinct observed value for a facet dimension.
/// Examples: `Angola`, `Forro(a)`, `Escravizado(a)`
pub type FacetValue = String;
