use serde_json::json;

use acervo::{
    EntitySelection, FilterEngine, FilterState, GeoExtractor, Record, RecordId,
};

fn record(value: serde_json::Value) -> Record {
    serde_json::from_value(value).unwrap()
}

/// The three-record collection used across the scenario tests:
/// a geocoded document from 1700, a person without a year, and a
/// relationship row that must never surface.
fn scenario_records() -> Vec<Record> {
    vec![
        record(json!({
            "rec_ID": "R1",
            "rec_Title": "Carta",
            "rec_RecTypeName": "Documento",
            "details": [
                { "fieldName": "Ano(s) de produção", "value": "1700" },
                { "fieldName": "Nação", "value": "Angola" },
                { "fieldName": "Geolocalização",
                  "value": { "geo": { "wkt": "POINT(-43.2 -22.9)" } } },
            ],
        })),
        record(json!({
            "rec_ID": "R2",
            "rec_Title": "Maria da Conceição",
            "rec_RecTypeName": "Pessoa",
            "details": [
                { "fieldName": "Condição jurídica", "value": "Forro(a)" },
            ],
        })),
        record(json!({
            "rec_ID": "R3",
            "rec_Title": "Vínculo",
            "rec_RecTypeName": "Record relationship",
        })),
    ]
}

fn ids(records: &[&Record]) -> Vec<RecordId> {
    records.iter().map(|record| record.id.clone()).collect()
}

#[test]
fn applying_the_same_state_twice_is_idempotent() {
    let records = scenario_records();
    let state = FilterState::default()
        .with_year_range(Some(1600), Some(1800))
        .with_search("carta");

    let first = ids(&FilterEngine::apply(&records, &state));
    let second = ids(&FilterEngine::apply(&records, &state));
    assert_eq!(first, second);
}

#[test]
fn adding_a_predicate_never_grows_the_result() {
    let records = scenario_records();
    let base = FilterState::default();
    let baseline = FilterEngine::apply(&records, &base).len();

    let narrowed = [
        base.clone().with_entity("Documento"),
        base.clone().with_year_range(Some(1650), Some(1750)),
        base.clone().with_equality("Nação", "Angola"),
        base.clone().with_search("carta"),
    ];
    for state in narrowed {
        assert!(
            FilterEngine::apply(&records, &state).len() <= baseline,
            "state {state:?} grew the result"
        );
    }
}

#[test]
fn relationship_rows_never_appear_in_any_output() {
    let records = scenario_records();
    let states = [
        FilterState::default(),
        FilterState::default().with_entity("Record relationship"),
        FilterState::default().with_search("vínculo"),
        FilterState::default().with_year_range(None, Some(9999)),
    ];
    for state in states {
        let visible = FilterEngine::apply(&records, &state);
        assert!(
            visible.iter().all(|record| record.id != "R3"),
            "state {state:?} exposed the relationship row"
        );
    }
}

#[test]
fn earliest_year_subfield_wins_over_estimated_minimum() {
    let records = vec![record(json!({
        "rec_ID": "R1",
        "rec_Title": "Traslado",
        "rec_RecTypeName": "Documento",
        "details": [
            { "fieldName": "Ano(s) de produção",
              "value": { "start": { "earliest": "1650" }, "estMinDate": "1640-01-01" } },
        ],
    }))];
    assert_eq!(records[0].year(), Some(1650));

    // The record passes a range that includes 1650 but not 1640.
    let state = FilterState::default().with_year_range(Some(1645), Some(1655));
    assert_eq!(FilterEngine::apply(&records, &state).len(), 1);
    let state = FilterState::default().with_year_range(Some(1635), Some(1645));
    assert!(FilterEngine::apply(&records, &state).is_empty());
}

#[test]
fn search_results_are_bounded_by_title_and_detail_matches() {
    let records = vec![
        record(json!({
            "rec_ID": "T1",
            "rec_Title": "Devassa contra escravos",
            "rec_RecTypeName": "Documento",
        })),
        record(json!({
            "rec_ID": "T2",
            "rec_Title": "Outro título",
            "rec_RecTypeName": "Documento",
            "details": [
                { "fieldName": "Transcrição modernizada",
                  "value": "relato sobre escravos fugidos" },
            ],
        })),
        record(json!({
            "rec_ID": "T3",
            "rec_Title": "Sem relação",
            "rec_RecTypeName": "Documento",
        })),
    ];
    let needle = "escravos";
    let state = FilterState::default().with_search(needle);
    let found = ids(&FilterEngine::apply(&records, &state));

    let title_matches: Vec<RecordId> = records
        .iter()
        .filter(|record| record.title.to_lowercase().contains(needle))
        .map(|record| record.id.clone())
        .collect();

    // Every title match is included, and nothing outside title-or-detail
    // matches sneaks in.
    for id in &title_matches {
        assert!(found.contains(id));
    }
    assert_eq!(found, vec!["T1".to_string(), "T2".to_string()]);
}

#[test]
fn geo_points_normalize_to_lat_lng_order() {
    let records = scenario_records();
    let points = GeoExtractor::extract_points(&records);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].record_id, "R1");
    assert_eq!(points[0].lat, -22.9);
    assert_eq!(points[0].lng, -43.2);
}

#[test]
fn scenario_entity_filter_yields_only_the_document() {
    let records = scenario_records();
    let state = FilterState::default().with_entity("Documento");
    assert_eq!(ids(&FilterEngine::apply(&records, &state)), vec!["R1"]);
}

#[test]
fn scenario_year_range_excludes_missing_years_and_relationships() {
    let records = scenario_records();
    let state = FilterState::default().with_year_range(Some(1650), Some(1750));
    assert_eq!(ids(&FilterEngine::apply(&records, &state)), vec!["R1"]);
}

#[test]
fn scenario_search_is_case_insensitive() {
    let records = scenario_records();
    let state = FilterState::default().with_search("carta");
    assert_eq!(ids(&FilterEngine::apply(&records, &state)), vec!["R1"]);
}

#[test]
fn entity_selection_all_with_no_filters_returns_everything_explorable() {
    let records = scenario_records();
    let visible = FilterEngine::apply(&records, &FilterState::default());
    assert_eq!(ids(&visible), vec!["R1", "R2"]);
    assert!(matches!(
        FilterState::default().entity,
        EntitySelection::All
    ));
}
