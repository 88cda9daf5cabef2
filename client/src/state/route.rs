//! Route-workflow state for the map page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds at most two selected points and the route computed for exactly that
//! pair. Every async step (place search, route fetch) is stamped with a token
//! when it starts; its response is applied only if no newer step has
//! superseded it since.
//!
//! TRADE-OFFS
//! ==========
//! Searches and route fetches use separate counters so that a successful
//! search can issue a route fetch without invalidating itself.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use trip::{LatLng, RouteResult};

/// Identifies one place-search invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchToken(u64);

/// Identifies one route fetch for one specific pair of points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteToken(u64);

/// A route fetch the page should start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteRequest {
    pub token: RouteToken,
    pub from: LatLng,
    pub to: LatLng,
}

/// Map-page route state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteState {
    pub point_a: Option<LatLng>,
    pub point_b: Option<LatLng>,
    /// Route for the current `(point_a, point_b)`; never for an older pair.
    pub result: Option<RouteResult>,
    /// A place search is in flight.
    pub searching: bool,
    search_seq: u64,
    route_seq: u64,
}

impl RouteState {
    /// Number of selected points, 0..=2.
    pub fn point_count(&self) -> usize {
        usize::from(self.point_a.is_some()) + usize::from(self.point_b.is_some())
    }

    /// Place a point from a map click.
    ///
    /// Fills A, then B; a click with both set starts a new pair at A. Any
    /// in-flight search is superseded. Returns the route fetch to start when
    /// the click completes a pair.
    pub fn select_point(&mut self, point: LatLng) -> Option<RouteRequest> {
        self.supersede_search();
        match (self.point_a, self.point_b) {
            (None, _) => self.point_a = Some(point),
            (Some(_), None) => self.point_b = Some(point),
            (Some(_), Some(_)) => {
                self.point_a = Some(point);
                self.point_b = None;
            }
        }
        self.pair_changed()
    }

    /// Remove the start point and any route drawn for it.
    pub fn clear_point_a(&mut self) {
        self.point_a = None;
        let _ = self.pair_changed();
    }

    /// Remove the end point and any route drawn for it.
    pub fn clear_point_b(&mut self) {
        self.point_b = None;
        let _ = self.pair_changed();
    }

    /// Empty the pair and cancel any pending search.
    pub fn clear(&mut self) {
        self.supersede_search();
        self.point_a = None;
        self.point_b = None;
        let _ = self.pair_changed();
    }

    /// Start a place search, superseding any earlier one.
    pub fn begin_search(&mut self) -> SearchToken {
        self.search_seq += 1;
        self.searching = true;
        SearchToken(self.search_seq)
    }

    /// Both places resolved. Sets the pair if the search is still current.
    pub fn finish_search(&mut self, token: SearchToken, from: LatLng, to: LatLng) -> Option<RouteRequest> {
        if !self.is_current_search(token) {
            return None;
        }
        self.searching = false;
        self.point_a = Some(from);
        self.point_b = Some(to);
        self.pair_changed()
    }

    /// A search failed. Returns `true` if the failure should be surfaced.
    pub fn fail_search(&mut self, token: SearchToken) -> bool {
        if !self.is_current_search(token) {
            return false;
        }
        self.searching = false;
        true
    }

    /// Store a fetched route if it belongs to the current pair.
    pub fn apply_route(&mut self, token: RouteToken, result: RouteResult) -> bool {
        if !self.is_current_route(token) {
            return false;
        }
        self.result = Some(result);
        true
    }

    /// A route fetch failed. Returns `true` if it was for the current pair.
    pub fn fail_route(&self, token: RouteToken) -> bool {
        self.is_current_route(token)
    }

    pub fn is_current_search(&self, token: SearchToken) -> bool {
        self.searching && token.0 == self.search_seq
    }

    pub fn is_current_route(&self, token: RouteToken) -> bool {
        token.0 == self.route_seq && self.point_a.is_some() && self.point_b.is_some()
    }

    fn supersede_search(&mut self) {
        self.search_seq += 1;
        self.searching = false;
    }

    /// Drop the stale route and, if both points are set, mint a fetch for them.
    fn pair_changed(&mut self) -> Option<RouteRequest> {
        self.result = None;
        self.route_seq += 1;
        Some(RouteRequest {
            token: RouteToken(self.route_seq),
            from: self.point_a?,
            to: self.point_b?,
        })
    }
}
