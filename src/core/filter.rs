//! Filter criteria and the predicate deciding folder-level matches.

use std::str::FromStr;

use super::{CoreError, DescriptorEntry, FolderFacts};

/// The four named game modes a descriptor's `Mode:` field can carry.
///
/// Folder facts keep raw mode codes, so descriptors with out-of-range codes
/// are still representable; they just cannot be selected as criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Standard,
    Taiko,
    CatchTheBeat,
    Mania,
}

impl GameMode {
    /// The integer code used in descriptor files.
    pub fn code(self) -> u32 {
        match self {
            GameMode::Standard => 0,
            GameMode::Taiko => 1,
            GameMode::CatchTheBeat => 2,
            GameMode::Mania => 3,
        }
    }
}

impl FromStr for GameMode {
    type Err = CoreError;

    /// Accepts the numeric code or a common name. Dropdown-style values like
    /// `"3 (Mania)"` are also accepted; only the first token counts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.split_whitespace().next().unwrap_or("");
        match token.to_ascii_lowercase().as_str() {
            "0" | "std" | "standard" => Ok(GameMode::Standard),
            "1" | "taiko" => Ok(GameMode::Taiko),
            "2" | "ctb" | "catch" | "catchthebeat" => Ok(GameMode::CatchTheBeat),
            "3" | "mania" => Ok(GameMode::Mania),
            _ => Err(CoreError::InvalidCriteria(format!("unknown mode: {s:?}"))),
        }
    }
}

/// The combined filter applied during a scan or delete.
///
/// Supplied fresh for every operation and never persisted. All constraints
/// are conjunctive; an unset field deactivates its filter.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against entry file names.
    /// Empty means no title constraint.
    pub title: String,
    /// Exact key count a folder must carry (existentially, see predicate).
    pub key_count: Option<u32>,
    /// Game mode a folder must carry; `None` means all modes.
    pub mode: Option<GameMode>,
    /// Bypasses the title filter entirely.
    pub match_all: bool,
    /// Restricts matches to folders containing a video asset.
    pub video_only: bool,
}

impl FilterCriteria {
    /// Builds criteria from raw text input, failing before any I/O happens
    /// when a non-empty field cannot be interpreted.
    pub fn from_input(
        title: &str,
        key_count: &str,
        mode: &str,
        match_all: bool,
        video_only: bool,
    ) -> Result<Self, CoreError> {
        let key_count = match key_count.trim() {
            "" => None,
            raw => Some(raw.parse::<u32>().map_err(|_| {
                CoreError::InvalidCriteria(format!("key count must be a number, got {raw:?}"))
            })?),
        };
        let mode = match mode.trim() {
            "" => None,
            raw if raw.eq_ignore_ascii_case("all") => None,
            raw => Some(raw.parse()?),
        };
        Ok(Self {
            title: title.trim().to_string(),
            key_count,
            mode,
            match_all,
            video_only,
        })
    }

    /// `true` when deletion should target individual descriptor files
    /// instead of whole folders.
    pub fn is_selective(&self) -> bool {
        self.key_count.is_some() || self.mode.is_some()
    }
}

/// Stateless predicate over folder facts; associated functions only.
pub struct MatchPredicate;

impl MatchPredicate {
    /// Decides whether a folder counts as a match. Filters whose criteria
    /// field is unset are skipped; the active ones must all pass.
    pub fn matches(facts: &FolderFacts, criteria: &FilterCriteria) -> bool {
        if !criteria.match_all && !Self::matches_title(facts, &criteria.title) {
            return false;
        }
        if let Some(key_count) = criteria.key_count {
            // Existential: a folder carrying several key counts matches as
            // long as the requested one is among them.
            if !facts.key_counts.contains(&key_count) {
                return false;
            }
        }
        if let Some(mode) = criteria.mode {
            if !facts.modes.contains(&mode.code()) {
                return false;
            }
        }
        if criteria.video_only && !facts.has_video {
            return false;
        }
        true
    }

    /// Title policy: a folder matches when any of its entry file names
    /// contains the query, case-insensitively. Descriptor file content is
    /// not searched.
    fn matches_title(facts: &FolderFacts, title: &str) -> bool {
        if title.is_empty() {
            return true;
        }
        let query = title.to_lowercase();
        facts
            .entry_names
            .iter()
            .any(|name| name.to_lowercase().contains(&query))
    }

    /// Selects the descriptor files deletion should target.
    ///
    /// Empty when the criteria carry no key or mode constraint; the whole
    /// folder is the deletion unit in that case.
    pub fn deletion_targets(facts: &FolderFacts, criteria: &FilterCriteria) -> Vec<String> {
        if !criteria.is_selective() {
            return Vec::new();
        }
        facts
            .descriptors
            .iter()
            .filter(|entry| Self::descriptor_matches(entry, criteria))
            .map(|entry| entry.file_name.clone())
            .collect()
    }

    fn descriptor_matches(entry: &DescriptorEntry, criteria: &FilterCriteria) -> bool {
        if !entry.readable {
            // Fields unknown; the deletion engine still has to attempt the
            // file so the failure surfaces in the outcome.
            return true;
        }
        if let Some(key_count) = criteria.key_count {
            if entry.key_count != Some(key_count) {
                return false;
            }
        }
        if let Some(mode) = criteria.mode {
            if entry.mode != Some(mode.code()) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn descriptor(name: &str, key_count: u32, mode: u32) -> DescriptorEntry {
        DescriptorEntry {
            file_name: name.to_string(),
            key_count: Some(key_count),
            mode: Some(mode),
            readable: true,
        }
    }

    fn facts(descriptors: Vec<DescriptorEntry>, extra_entries: &[&str]) -> FolderFacts {
        let mut key_counts = BTreeSet::new();
        let mut modes = BTreeSet::new();
        let mut entry_names: Vec<String> =
            descriptors.iter().map(|d| d.file_name.clone()).collect();
        for entry in &descriptors {
            key_counts.extend(entry.key_count);
            modes.extend(entry.mode);
        }
        entry_names.extend(extra_entries.iter().map(|s| s.to_string()));
        let has_video = extra_entries.iter().any(|name| name.ends_with(".mp4"));
        FolderFacts {
            key_counts,
            modes,
            has_video,
            descriptors,
            entry_names,
        }
    }

    #[test]
    fn key_filter_is_existential_over_descriptors() {
        let facts = facts(
            vec![
                descriptor("song [4K].osu", 4, 3),
                descriptor("song [7K].osu", 7, 3),
            ],
            &[],
        );
        let four = FilterCriteria {
            match_all: true,
            key_count: Some(4),
            ..Default::default()
        };
        let seven = FilterCriteria {
            key_count: Some(7),
            match_all: true,
            ..Default::default()
        };
        let five = FilterCriteria {
            key_count: Some(5),
            match_all: true,
            ..Default::default()
        };
        assert!(MatchPredicate::matches(&facts, &four));
        assert!(MatchPredicate::matches(&facts, &seven));
        assert!(!MatchPredicate::matches(&facts, &five));
    }

    #[test]
    fn mode_filter_is_existential() {
        let facts = facts(
            vec![
                descriptor("a.osu", 4, 3),
                descriptor("b.osu", 5, 0),
            ],
            &[],
        );
        let mania = FilterCriteria {
            match_all: true,
            mode: Some(GameMode::Mania),
            ..Default::default()
        };
        let taiko = FilterCriteria {
            match_all: true,
            mode: Some(GameMode::Taiko),
            ..Default::default()
        };
        assert!(MatchPredicate::matches(&facts, &mania));
        assert!(!MatchPredicate::matches(&facts, &taiko));
    }

    #[test]
    fn title_filter_checks_entry_names_case_insensitively() {
        let facts = facts(
            vec![descriptor("Artist - Night Song [4K].osu", 4, 3)],
            &["audio.mp3"],
        );
        let hit = FilterCriteria {
            title: "night".to_string(),
            ..Default::default()
        };
        let miss = FilterCriteria {
            title: "daylight".to_string(),
            ..Default::default()
        };
        assert!(MatchPredicate::matches(&facts, &hit));
        assert!(!MatchPredicate::matches(&facts, &miss));
    }

    #[test]
    fn match_all_bypasses_the_title_filter_only() {
        let facts = facts(vec![descriptor("a.osu", 4, 3)], &[]);
        let criteria = FilterCriteria {
            title: "no such title".to_string(),
            match_all: true,
            key_count: Some(9),
            ..Default::default()
        };
        // Title is bypassed but the key filter still applies.
        assert!(!MatchPredicate::matches(&facts, &criteria));
    }

    #[test]
    fn video_only_requires_a_video_asset() {
        let with_video = facts(vec![descriptor("a.osu", 4, 3)], &["intro.mp4"]);
        let without = facts(vec![descriptor("a.osu", 4, 3)], &["audio.mp3"]);
        let criteria = FilterCriteria {
            match_all: true,
            video_only: true,
            ..Default::default()
        };
        assert!(MatchPredicate::matches(&with_video, &criteria));
        assert!(!MatchPredicate::matches(&without, &criteria));
    }

    #[test]
    fn deletion_targets_only_matching_descriptors() {
        let facts = facts(
            vec![
                descriptor("song [4K].osu", 4, 3),
                descriptor("song [7K].osu", 7, 3),
            ],
            &[],
        );
        let criteria = FilterCriteria {
            match_all: true,
            key_count: Some(4),
            ..Default::default()
        };
        assert_eq!(
            MatchPredicate::deletion_targets(&facts, &criteria),
            vec!["song [4K].osu".to_string()]
        );
    }

    #[test]
    fn deletion_targets_apply_key_and_mode_conjunctively() {
        let facts = facts(
            vec![
                descriptor("mania [4K].osu", 4, 3),
                descriptor("taiko [4K].osu", 4, 1),
            ],
            &[],
        );
        let criteria = FilterCriteria {
            match_all: true,
            key_count: Some(4),
            mode: Some(GameMode::Mania),
            ..Default::default()
        };
        assert_eq!(
            MatchPredicate::deletion_targets(&facts, &criteria),
            vec!["mania [4K].osu".to_string()]
        );
    }

    #[test]
    fn whole_folder_criteria_produce_no_file_targets() {
        let facts = facts(vec![descriptor("a.osu", 4, 3)], &[]);
        let criteria = FilterCriteria {
            match_all: true,
            ..Default::default()
        };
        assert!(MatchPredicate::deletion_targets(&facts, &criteria).is_empty());
    }

    #[test]
    fn unreadable_descriptors_are_still_attempted() {
        let mut unreadable = descriptor("locked.osu", 0, 0);
        unreadable.key_count = None;
        unreadable.mode = None;
        unreadable.readable = false;
        let facts = facts(vec![descriptor("a.osu", 4, 3), unreadable], &[]);
        let criteria = FilterCriteria {
            match_all: true,
            key_count: Some(4),
            ..Default::default()
        };
        let targets = MatchPredicate::deletion_targets(&facts, &criteria);
        assert!(targets.contains(&"a.osu".to_string()));
        assert!(targets.contains(&"locked.osu".to_string()));
    }

    #[test]
    fn criteria_from_input_validates_before_io() {
        assert!(FilterCriteria::from_input("", "abc", "all", false, false).is_err());
        assert!(FilterCriteria::from_input("", "4", "banana", false, false).is_err());

        let criteria = FilterCriteria::from_input(" night ", " 7 ", "3 (Mania)", false, true)
            .expect("valid input");
        assert_eq!(criteria.title, "night");
        assert_eq!(criteria.key_count, Some(7));
        assert_eq!(criteria.mode, Some(GameMode::Mania));
        assert!(criteria.video_only);
    }

    #[test]
    fn mode_parses_codes_and_names() {
        assert_eq!("0".parse::<GameMode>().unwrap(), GameMode::Standard);
        assert_eq!("taiko".parse::<GameMode>().unwrap(), GameMode::Taiko);
        assert_eq!("CTB".parse::<GameMode>().unwrap(), GameMode::CatchTheBeat);
        assert_eq!("3 (Mania)".parse::<GameMode>().unwrap(), GameMode::Mania);
        assert!("4".parse::<GameMode>().is_err());
    }
}
