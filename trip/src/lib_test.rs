use super::*;

fn directions_body(distance: f64, duration: f64) -> String {
    serde_json::json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": [[77.2090, 28.6139], [77.2100, 28.6200], [77.2300, 28.6300]]
            },
            "properties": {
                "summary": { "distance": distance, "duration": duration }
            }
        }]
    })
    .to_string()
}

// =============================================================================
// formatting
// =============================================================================

#[test]
fn distance_rounds_half_up_on_hundredths() {
    assert_eq!(format_distance_km(12_345.0), "12.35");
}

#[test]
fn distance_keeps_trailing_zeros() {
    assert_eq!(format_distance_km(1_000.0), "1.00");
    assert_eq!(format_distance_km(0.0), "0.00");
}

#[test]
fn distance_rounds_down_below_half() {
    assert_eq!(format_distance_km(12_344.0), "12.34");
}

#[test]
fn duration_formats_hours_and_minutes() {
    assert_eq!(format_duration(3_661.0), "1h 1m");
}

#[test]
fn duration_drops_partial_minute() {
    assert_eq!(format_duration(119.0), "0h 1m");
    assert_eq!(format_duration(59.9), "0h 0m");
}

#[test]
fn duration_carries_minutes_into_hours() {
    assert_eq!(format_duration(7_200.0), "2h 0m");
    assert_eq!(format_duration(10_799.0), "2h 59m");
}

// =============================================================================
// reprojection
// =============================================================================

#[test]
fn reproject_swaps_lng_lat_into_lat_lng() {
    let path = reproject(&[vec![77.2090, 28.6139]]).unwrap();
    assert_eq!(path, vec![LatLng::new(28.6139, 77.2090)]);
}

#[test]
fn reproject_ignores_elevation_component() {
    let path = reproject(&[vec![2.35, 48.85, 35.0]]).unwrap();
    assert_eq!(path, vec![LatLng::new(48.85, 2.35)]);
}

#[test]
fn reproject_rejects_short_vertex() {
    let err = reproject(&[vec![2.35]]).unwrap_err();
    assert!(matches!(err, ParseError::InvalidCoordinate(_)));
}

// =============================================================================
// LatLng
// =============================================================================

#[test]
fn lat_lng_validity_bounds() {
    assert!(LatLng::new(28.6139, 77.2090).is_valid());
    assert!(LatLng::new(-90.0, 180.0).is_valid());
    assert!(!LatLng::new(90.5, 0.0).is_valid());
    assert!(!LatLng::new(0.0, -180.5).is_valid());
    assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
}

#[test]
fn lat_lng_param_is_lng_first() {
    assert_eq!(LatLng::new(28.5, 77.25).to_lng_lat_param(), "77.25,28.5");
}

// =============================================================================
// place search
// =============================================================================

#[test]
fn place_search_takes_first_candidate() {
    let body = r#"[{"lat":"28.6139","lon":"77.2090","display_name":"New Delhi"},{"lat":"1","lon":"2"}]"#;
    let point = parse_place_search(body).unwrap().unwrap();
    assert!((point.lat - 28.6139).abs() < f64::EPSILON);
    assert!((point.lng - 77.2090).abs() < f64::EPSILON);
}

#[test]
fn place_search_empty_list_is_none() {
    assert_eq!(parse_place_search("[]").unwrap(), None);
}

#[test]
fn place_search_accepts_numeric_degrees() {
    let point = parse_place_search(r#"[{"lat":48.85,"lon":2.35}]"#).unwrap().unwrap();
    assert_eq!(point, LatLng::new(48.85, 2.35));
}

#[test]
fn place_search_rejects_non_numeric_degrees() {
    let err = parse_place_search(r#"[{"lat":"north","lon":"2"}]"#).unwrap_err();
    assert!(matches!(err, ParseError::InvalidCoordinate(ref raw) if raw == "north"));
}

#[test]
fn place_search_rejects_non_list() {
    let err = parse_place_search(r#"{"error":"rate limited"}"#).unwrap_err();
    assert!(matches!(err, ParseError::Json(_)));
}

#[test]
fn relay_envelope_yields_inner_payload() {
    let inner = r#"[{"lat":"28.6139","lon":"77.2090"}]"#;
    let body = serde_json::json!({ "contents": inner, "status": { "http_code": 200 } }).to_string();
    let unwrapped = unwrap_relay_envelope(&body).unwrap();
    assert_eq!(parse_place_search(&unwrapped).unwrap(), parse_place_search(inner).unwrap());
}

#[test]
fn relay_envelope_null_contents_is_an_error() {
    let err = unwrap_relay_envelope(r#"{"contents":null,"status":{"http_code":502}}"#).unwrap_err();
    assert!(matches!(err, ParseError::MissingRelayContents));
}

#[test]
fn relay_envelope_without_contents_is_an_error() {
    let err = unwrap_relay_envelope(r#"{"status":{"http_code":500}}"#).unwrap_err();
    assert!(matches!(err, ParseError::MissingRelayContents));
}

// =============================================================================
// directions
// =============================================================================

#[test]
fn directions_produce_display_values() {
    let route = parse_directions(&directions_body(12_345.0, 3_661.0)).unwrap();
    assert_eq!(route.distance_km, "12.35");
    assert_eq!(route.duration, "1h 1m");
    assert_eq!(route.path.len(), 3);
    assert_eq!(route.path[0], LatLng::new(28.6139, 77.2090));
}

#[test]
fn directions_without_features_is_no_route() {
    let err = parse_directions(r#"{"type":"FeatureCollection","features":[]}"#).unwrap_err();
    assert!(matches!(err, ParseError::NoRoute));
}

#[test]
fn directions_error_payload_is_no_route() {
    let err = parse_directions(r#"{"error":{"code":2010,"message":"Could not find routable point"}}"#).unwrap_err();
    assert!(matches!(err, ParseError::NoRoute));
}

#[test]
fn directions_zero_length_summary_defaults() {
    let body = r#"{"features":[{"geometry":{"coordinates":[[1.0,2.0]]},"properties":{"summary":{}}}]}"#;
    let route = parse_directions(body).unwrap();
    assert_eq!(route.distance_km, "0.00");
    assert_eq!(route.duration, "0h 0m");
}

// =============================================================================
// wire shapes
// =============================================================================

#[test]
fn error_code_serializes_snake_case() {
    let body = ErrorBody::new(ErrorCode::GeocodeNotFound, "Location not found: Atlantis");
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["code"], "geocode_not_found");
    assert_eq!(json["message"], "Location not found: Atlantis");
}

#[test]
fn session_user_serializes_photo_url() {
    let user = SessionUser {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        photo_url: Some("https://example.com/ada.png".into()),
    };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["photo_url"], "https://example.com/ada.png");
}
