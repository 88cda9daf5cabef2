use super::*;

fn p(lat: f64, lng: f64) -> LatLng {
    LatLng::new(lat, lng)
}

fn sample_route() -> RouteResult {
    RouteResult {
        path: vec![p(28.61, 77.2), p(27.17, 78.04)],
        distance_km: "233.10".to_owned(),
        duration: "3h 25m".to_owned(),
    }
}

// =============================================================================
// point selection
// =============================================================================

#[test]
fn first_click_sets_a_only() {
    let mut state = RouteState::default();
    assert_eq!(state.select_point(p(1.0, 1.0)), None);
    assert_eq!(state.point_a, Some(p(1.0, 1.0)));
    assert_eq!(state.point_b, None);
}

#[test]
fn second_click_completes_pair_and_requests_route() {
    let mut state = RouteState::default();
    state.select_point(p(1.0, 1.0));
    let request = state.select_point(p(2.0, 2.0)).unwrap();
    assert_eq!(request.from, p(1.0, 1.0));
    assert_eq!(request.to, p(2.0, 2.0));
    assert_eq!(state.point_count(), 2);
}

#[test]
fn third_click_restarts_pair_at_a() {
    let mut state = RouteState::default();
    state.select_point(p(1.0, 1.0));
    state.select_point(p(2.0, 2.0));
    assert_eq!(state.select_point(p(3.0, 3.0)), None);
    assert_eq!(state.point_a, Some(p(3.0, 3.0)));
    assert_eq!(state.point_b, None);
    assert_eq!(state.point_count(), 1);
}

#[test]
fn repeated_clicks_always_leave_one_or_two_points() {
    let mut state = RouteState::default();
    for i in 0..7 {
        state.select_point(p(f64::from(i), 0.0));
        assert!((1..=2).contains(&state.point_count()));
    }
}

#[test]
fn click_after_clearing_a_fills_a_again() {
    let mut state = RouteState::default();
    state.select_point(p(1.0, 1.0));
    state.select_point(p(2.0, 2.0));
    state.clear_point_a();
    let request = state.select_point(p(5.0, 5.0)).unwrap();
    assert_eq!(request.from, p(5.0, 5.0));
    assert_eq!(request.to, p(2.0, 2.0));
}

// =============================================================================
// route lifecycle
// =============================================================================

#[test]
fn route_applies_for_current_pair() {
    let mut state = RouteState::default();
    state.select_point(p(1.0, 1.0));
    let request = state.select_point(p(2.0, 2.0)).unwrap();
    assert!(state.apply_route(request.token, sample_route()));
    assert_eq!(state.result, Some(sample_route()));
}

#[test]
fn clearing_b_removes_route_and_ignores_late_response() {
    let mut state = RouteState::default();
    state.select_point(p(1.0, 1.0));
    let request = state.select_point(p(2.0, 2.0)).unwrap();
    assert!(state.apply_route(request.token, sample_route()));
    state.clear_point_b();
    assert_eq!(state.result, None);
    assert!(!state.apply_route(request.token, sample_route()));
    assert_eq!(state.result, None);
}

#[test]
fn response_for_superseded_pair_is_ignored() {
    let mut state = RouteState::default();
    state.select_point(p(1.0, 1.0));
    let stale = state.select_point(p(2.0, 2.0)).unwrap();
    state.select_point(p(3.0, 3.0));
    let fresh = state.select_point(p(4.0, 4.0)).unwrap();
    assert!(!state.apply_route(stale.token, sample_route()));
    assert!(!state.fail_route(stale.token));
    assert_eq!(state.result, None);
    assert!(state.apply_route(fresh.token, sample_route()));
}

#[test]
fn route_failure_leaves_points_and_shows_no_route() {
    let mut state = RouteState::default();
    state.select_point(p(1.0, 1.0));
    let request = state.select_point(p(2.0, 2.0)).unwrap();
    assert!(state.fail_route(request.token));
    assert_eq!(state.point_count(), 2);
    assert_eq!(state.result, None);
}

#[test]
fn clear_empties_everything() {
    let mut state = RouteState::default();
    state.select_point(p(1.0, 1.0));
    let request = state.select_point(p(2.0, 2.0)).unwrap();
    state.apply_route(request.token, sample_route());
    state.clear();
    assert_eq!(state.point_count(), 0);
    assert_eq!(state.result, None);
}

// =============================================================================
// search lifecycle
// =============================================================================

#[test]
fn search_sets_pair_and_requests_route() {
    let mut state = RouteState::default();
    let token = state.begin_search();
    assert!(state.searching);
    let request = state.finish_search(token, p(1.0, 1.0), p(2.0, 2.0)).unwrap();
    assert!(!state.searching);
    assert_eq!(state.point_a, Some(p(1.0, 1.0)));
    assert_eq!(state.point_b, Some(p(2.0, 2.0)));
    assert_eq!(request.from, p(1.0, 1.0));
}

#[test]
fn search_replaces_existing_pair_and_route() {
    let mut state = RouteState::default();
    state.select_point(p(9.0, 9.0));
    let old = state.select_point(p(8.0, 8.0)).unwrap();
    state.apply_route(old.token, sample_route());
    let token = state.begin_search();
    state.finish_search(token, p(1.0, 1.0), p(2.0, 2.0));
    assert_eq!(state.result, None);
    assert!(!state.apply_route(old.token, sample_route()));
}

#[test]
fn click_supersedes_in_flight_search() {
    let mut state = RouteState::default();
    let token = state.begin_search();
    state.select_point(p(5.0, 5.0));
    assert!(!state.searching);
    assert_eq!(state.finish_search(token, p(1.0, 1.0), p(2.0, 2.0)), None);
    assert_eq!(state.point_a, Some(p(5.0, 5.0)));
    assert_eq!(state.point_b, None);
}

#[test]
fn newer_search_supersedes_older_one() {
    let mut state = RouteState::default();
    let first = state.begin_search();
    let second = state.begin_search();
    assert_eq!(state.finish_search(first, p(1.0, 1.0), p(2.0, 2.0)), None);
    assert!(!state.fail_search(first));
    assert!(state.searching);
    assert!(state.finish_search(second, p(3.0, 3.0), p(4.0, 4.0)).is_some());
}

#[test]
fn current_search_failure_is_surfaced_and_keeps_points() {
    let mut state = RouteState::default();
    state.select_point(p(1.0, 1.0));
    let token = state.begin_search();
    assert!(state.fail_search(token));
    assert!(!state.searching);
    assert_eq!(state.point_a, Some(p(1.0, 1.0)));
}
