// src/domain/mode.rs

use crate::domain::listing::Listing;
use std::cmp::Ordering;

/// Who is looking at the listings. Chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// Every listing, prices shown.
    Agent,
    /// Only these listing ids, in this order, prices hidden.
    Client(Vec<u64>),
}

impl ViewMode {
    /// Parses the startup answer.
    ///
    /// An empty answer selects agent mode and a comma-separated list of
    /// non-negative integers selects client mode. Listing ids are never
    /// negative, so `-4` is rejected like any other malformed part. Anything
    /// else is `None` and the caller should ask again.
    pub fn parse_selection(input: &str) -> Option<ViewMode> {
        if input.is_empty() {
            return Some(ViewMode::Agent);
        }

        let mut ids = Vec::new();
        for part in input.split(',') {
            let id = part.trim().parse::<u64>().ok()?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        Some(ViewMode::Client(ids))
    }

    pub fn permits(&self, id: u64) -> bool {
        match self {
            ViewMode::Agent => true,
            ViewMode::Client(ids) => ids.contains(&id),
        }
    }

    /// Drops listings this mode may not see and hides prices in client mode.
    pub fn redact(&self, listings: Vec<Listing>) -> Vec<Listing> {
        match self {
            ViewMode::Agent => listings,
            ViewMode::Client(_) => listings
                .into_iter()
                .filter(|listing| self.permits(listing.id))
                .map(|mut listing| {
                    listing.price = None;
                    listing
                })
                .collect(),
        }
    }

    /// Agent mode sorts by ascending price (unknown prices last); client mode
    /// keeps the order the ids were given in.
    pub fn sort(&self, listings: &mut [Listing]) {
        match self {
            ViewMode::Agent => listings.sort_by(|a, b| compare_prices(a.price, b.price)),
            ViewMode::Client(ids) => {
                let position = |id: u64| ids.iter().position(|i| *i == id).unwrap_or(usize::MAX);
                listings.sort_by_key(|listing| position(listing.id));
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Agent => "agent",
            ViewMode::Client(_) => "client",
        }
    }
}

fn compare_prices(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
