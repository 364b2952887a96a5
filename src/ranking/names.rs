//! Team display names.
//!
//! The odds provider reports full franchise names ("Kansas City Chiefs");
//! pick'em sheets list teams the way CBS Sports does ("Kansas City").

use std::collections::HashMap;

/// CBS Sports display names, one entry per NFL franchise.
const CBS_NAMES: &[(&str, &str)] = &[
    ("Arizona Cardinals", "Arizona"),
    ("Atlanta Falcons", "Atlanta"),
    ("Baltimore Ravens", "Baltimore"),
    ("Buffalo Bills", "Buffalo"),
    ("Carolina Panthers", "Carolina"),
    ("Chicago Bears", "Chicago"),
    ("Cincinnati Bengals", "Cincinnati"),
    ("Cleveland Browns", "Cleveland"),
    ("Dallas Cowboys", "Dallas"),
    ("Denver Broncos", "Denver"),
    ("Detroit Lions", "Detroit"),
    ("Green Bay Packers", "Green Bay"),
    ("Houston Texans", "Houston"),
    ("Indianapolis Colts", "Indianapolis"),
    ("Jacksonville Jaguars", "Jacksonville"),
    ("Kansas City Chiefs", "Kansas City"),
    ("Las Vegas Raiders", "Las Vegas"),
    ("Los Angeles Chargers", "LA Chargers"),
    ("Los Angeles Rams", "LA Rams"),
    ("Miami Dolphins", "Miami"),
    ("Minnesota Vikings", "Minnesota"),
    ("New England Patriots", "New England"),
    ("New Orleans Saints", "New Orleans"),
    ("New York Giants", "New York (NYG)"),
    ("New York Jets", "New York (NYJ)"),
    ("Philadelphia Eagles", "Philadelphia"),
    ("Pittsburgh Steelers", "Pittsburgh"),
    ("San Francisco 49ers", "San Francisco"),
    ("Seattle Seahawks", "Seattle"),
    ("Tampa Bay Buccaneers", "Tampa Bay"),
    ("Tennessee Titans", "Tennessee"),
    ("Washington Commanders", "Washington"),
];

/// Immutable full-name to display-name table.
#[derive(Debug, Clone)]
pub struct TeamNames {
    table: HashMap<String, String>,
}

impl TeamNames {
    /// The CBS Sports table.
    pub fn cbs() -> Self {
        Self::from_pairs(CBS_NAMES.iter().copied())
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            table: pairs
                .into_iter()
                .map(|(full, short)| (full.into(), short.into()))
                .collect(),
        }
    }

    /// Display name for a franchise. Unknown names are returned unchanged.
    pub fn normalize(&self, full_name: &str) -> String {
        match self.table.get(full_name) {
            Some(short) => short.clone(),
            None => {
                tracing::warn!(
                    team = full_name,
                    "No display name for team, keeping full name"
                );
                full_name.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cbs_table_covers_every_franchise() {
        let names = TeamNames::cbs();
        assert_eq!(names.table.len(), 32);
        assert_eq!(names.normalize("Kansas City Chiefs"), "Kansas City");
        assert_eq!(names.normalize("New York Jets"), "New York (NYJ)");
        assert_eq!(names.normalize("Los Angeles Rams"), "LA Rams");
    }

    #[test]
    fn test_display_names_are_unique() {
        let mut shorts: Vec<&str> = CBS_NAMES.iter().map(|(_, short)| *short).collect();
        shorts.sort();
        shorts.dedup();
        assert_eq!(shorts.len(), CBS_NAMES.len());
    }

    #[test]
    fn test_unknown_team_passes_through() {
        let names = TeamNames::cbs();
        assert_eq!(names.normalize("Brooklyn Bisons"), "Brooklyn Bisons");
    }

    #[test]
    fn test_injected_table() {
        let names = TeamNames::from_pairs([("Brooklyn Bisons", "Brooklyn")]);
        assert_eq!(names.normalize("Brooklyn Bisons"), "Brooklyn");
        assert_eq!(names.normalize("Kansas City Chiefs"), "Kansas City Chiefs");
    }
}
