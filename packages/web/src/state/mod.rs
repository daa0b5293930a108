//! Shared view state

/// Sport filter for the venues listing.
///
/// Sports match the court model on the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SportFilter {
    #[default]
    All,
    Football,
    Padel,
    Pickleball,
    Esports,
}

impl SportFilter {
    pub fn label(&self) -> &'static str {
        match self {
            SportFilter::All => "All Sports",
            SportFilter::Football => "Football",
            SportFilter::Padel => "Padel",
            SportFilter::Pickleball => "Pickleball",
            SportFilter::Esports => "Esports",
        }
    }

    /// Value for the `?sport=` query parameter, `None` for no filtering.
    pub fn query(&self) -> Option<String> {
        match self {
            SportFilter::All => None,
            SportFilter::Football => Some("football".to_string()),
            SportFilter::Padel => Some("padel".to_string()),
            SportFilter::Pickleball => Some("pickleball".to_string()),
            SportFilter::Esports => Some("esports".to_string()),
        }
    }

    pub fn variants() -> &'static [SportFilter] {
        &[
            SportFilter::All,
            SportFilter::Football,
            SportFilter::Padel,
            SportFilter::Pickleball,
            SportFilter::Esports,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sports_maps_to_no_query() {
        assert_eq!(SportFilter::All.query(), None);
        assert_eq!(SportFilter::Padel.query().as_deref(), Some("padel"));
    }
}
