use super::*;

#[test]
fn summary_line_shows_distance_and_duration() {
    let route = RouteResult {
        path: Vec::new(),
        distance_km: "12.35".to_owned(),
        duration: "1h 1m".to_owned(),
    };
    assert_eq!(summary_line(&route), "Distance: 12.35 km, Duration: 1h 1m");
}
