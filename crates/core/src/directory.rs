use std::collections::BTreeSet;

use crate::models::{
    show::{Show, ShowMatch},
    venue::{LocationGroup, LocationVenue, VenueSummary},
};

/// Groups venues by (city, state) for the venue directory.
///
/// Groups are ordered by state, then city. Venues keep their input order
/// within a group. `future_shows` must already be limited to upcoming shows;
/// each venue's count is the number of those shows booked at it.
pub fn group_venues_by_location(
    venues: &[VenueSummary],
    future_shows: &[Show],
) -> Vec<LocationGroup> {
    let locations: BTreeSet<(&str, &str)> = venues
        .iter()
        .map(|venue| (venue.state.as_str(), venue.city.as_str()))
        .collect();

    locations
        .into_iter()
        .map(|(state, city)| LocationGroup {
            city: city.to_string(),
            state: state.to_string(),
            venues: venues
                .iter()
                .filter(|venue| venue.city == city && venue.state == state)
                .map(|venue| LocationVenue {
                    id: venue.id,
                    name: venue.name.clone(),
                    num_upcoming_shows: ShowMatch::Venue.count(future_shows, venue.id),
                })
                .collect(),
        })
        .collect()
}
