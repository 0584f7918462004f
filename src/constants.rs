/// Constants used by dataset loading and shape validation.
pub mod dataset {
    /// Top-level namespace key holding the record array in exported data.
    pub const RECORDS_NAMESPACE: &str = "heurist";
    /// Key of the record array inside the namespace object.
    pub const RECORDS_KEY: &str = "records";
}

/// Constants naming the well-known fields of the record format.
pub mod fields {
    /// Field carrying the production year(s) of a record.
    pub const YEAR_FIELD: &str = "Ano(s) de produção";
    /// Long-form summary field rendered in its own display block.
    pub const SUMMARY_FIELD: &str = "Resumo do documento";
    /// Marker present in every transcript field name.
    pub const TRANSCRIPT_MARKER: &str = "Transcrição";
    /// Marker present in geographic field names.
    pub const GEO_MARKER: &str = "Geolocalização";
    /// Internal image-code field, never displayed.
    pub const IMAGE_CODE_FIELD: &str = "Código de imagem";
    /// Link-like fields grouped into the links display block.
    pub const LINK_FIELDS: &[&str] = &["Link para acesso", "URL", "Cota"];
    /// Person-role fields accumulated into per-role name lists.
    pub const PERSON_ROLE_FIELDS: &[&str] = &[
        "Denunciante",
        "Denunciado(a)",
        "Citado(a)",
        "Autoridades",
        "Testemunha",
        "Apresentado(a)",
    ];
    /// Declared field types that may be offered as facets.
    ///
    /// A detail without a declared type is also facetable.
    pub const FACETABLE_FIELD_TYPES: &[&str] = &["enum", "freetext", "date"];
}

/// Constants naming entity-type categories with special handling.
pub mod entities {
    /// Fallback category for records without an entity type.
    pub const FALLBACK_ENTITY_TYPE: &str = "Outros";
    /// Link-table pseudo-category, never explorable.
    pub const RELATIONSHIP_ENTITY_TYPE: &str = "Record relationship";
    /// Person-like entity type that unlocks extra facet fields.
    pub const PERSON_ENTITY_TYPE: &str = "Pessoa";
    /// Document-like entity type that unlocks extra facet fields.
    pub const DOCUMENT_ENTITY_TYPE: &str = "Documento";
}

/// Constants for the default facet surfacing policy.
pub mod facets {
    /// Facet fields surfaced for every entity selection, in display order.
    pub const PRIORITY_FIELDS: &[&str] = &[
        "Local de referência",
        "Qualidade ou cor",
        "Condição jurídica",
        "Nação",
    ];
    /// Extra facet fields surfaced when the person entity type is selected.
    pub const PERSON_EXTRA_FIELDS: &[&str] = &["Papel", "Tipo de prática"];
    /// Extra facet fields surfaced when the document entity type is selected.
    pub const DOCUMENT_EXTRA_FIELDS: &[&str] = &["Tipologia documental"];
}

/// Constants used by display classification.
pub mod display {
    /// Placeholder rendered for details without a usable value.
    pub const MISSING_VALUE_PLACEHOLDER: &str = "N/A";
    /// Fallback title for records without one.
    pub const UNTITLED_PLACEHOLDER: &str = "Sem Título";
    /// Separator used when flattening multi-line reference titles.
    pub const TITLE_LINE_SEPARATOR: &str = " - ";
}

/// Constants used by geographic extraction.
pub mod geo {
    /// Tag word of a well-known-text point encoding.
    pub const WKT_POINT_TAG: &str = "POINT";
}
