use serde::{Deserialize, Serialize};

use crate::models::{
    Named,
    show::{Show, ShowMatch},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: i32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_upcoming_shows: Option<usize>,
}

/// Case-insensitive substring search over entity names.
///
/// `term` must be non-empty. Matches keep their input order. When `shows` is
/// given, each hit carries the number of those shows whose `ShowMatch` key
/// equals the hit's id; otherwise the count is left out entirely.
pub fn search<E: Named>(
    term: &str,
    entities: &[E],
    shows: Option<(&[Show], ShowMatch)>,
) -> SearchResults {
    let needle = term.to_lowercase();

    let data: Vec<SearchHit> = entities
        .iter()
        .filter(|entity| entity.name().to_lowercase().contains(&needle))
        .map(|entity| SearchHit {
            id: entity.id(),
            name: entity.name().to_string(),
            num_upcoming_shows: shows.map(|(shows, field)| field.count(shows, entity.id())),
        })
        .collect();

    SearchResults {
        count: data.len(),
        data,
    }
}
