//! Sorting of spelling patterns into the 18 phonics groups.
//!
//! A label is lower-cased and run through an ordered list of [`Rule`]s, first
//! match wins. Labels no rule knows about go through the [`Fallback`] chain and
//! finally land in the catch-all group, so every label gets exactly one group.
//! Colors are derived afterwards from the group, never from the raw text.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, FromRepr, IntoStaticStr};
use tracing::{debug, trace};

use crate::error::GroupIndexError;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumCount,
    EnumIter,
    FromRepr,
    IntoStaticStr,
    Display,
    Serialize,
    Deserialize,
)]
#[repr(usize)]
pub enum Group {
    #[strum(serialize = "single letters")]
    SingleLetters,
    #[strum(serialize = "digraphs")]
    Digraphs,
    #[strum(serialize = "l-blends")]
    LBlends,
    #[strum(serialize = "r-blends")]
    RBlends,
    #[strum(serialize = "s-blends")]
    SBlends,
    #[strum(serialize = "three-letter blends")]
    ThreeLetterBlends,
    #[strum(serialize = "w-blends")]
    WBlends,
    #[strum(serialize = "vowel teams 1")]
    VowelTeams1,
    #[strum(serialize = "vowel teams 2")]
    VowelTeams2,
    #[strum(serialize = "r-controlled")]
    RControlled,
    #[strum(serialize = "-ng / -nk")]
    NgNk,
    #[strum(serialize = "final clusters")]
    FinalClusters,
    #[strum(serialize = "prefixes")]
    Prefixes,
    #[strum(serialize = "suffixes")]
    Suffixes,
    #[strum(serialize = "magic e")]
    MagicE,
    #[strum(serialize = "y endings")]
    YEndings,
    #[strum(serialize = "oddballs")]
    Oddballs,
    #[strum(serialize = "-le syllables")]
    LeSyllables,
}

impl Group {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        self.into()
    }
}

impl TryFrom<usize> for Group {
    type Error = GroupIndexError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_repr(index).ok_or(GroupIndexError(index))
    }
}

/// Background class of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileColor {
    #[default]
    Default,
    Vowel,
    Affix,
}

/// How a label is compared against a rule's members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelForm {
    Raw,
    /// Leading and trailing `-` / `_` markers are stripped from the label.
    Trimmed,
}

impl LabelForm {
    fn apply(self, label: &str) -> &str {
        match self {
            Self::Raw => label,
            Self::Trimmed => trim_markers(label),
        }
    }
}

pub fn trim_markers(label: &str) -> &str {
    label.trim_matches(|c| c == '-' || c == '_')
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub group: Group,
    pub form: LabelForm,
    pub members: &'static [&'static str],
}

impl Rule {
    pub const fn new(group: Group, form: LabelForm, members: &'static [&'static str]) -> Self {
        Self {
            group,
            form,
            members,
        }
    }

    /// Exact match of the label, in this rule's form, against the members
    /// as written.
    pub fn matches(&self, label: &str) -> bool {
        let label = self.form.apply(label);
        self.members.iter().any(|member| *member == label)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Heuristic {
    StartsWithAny(&'static [&'static str]),
    ContainsAny(&'static [&'static str]),
    /// Begins or ends with a hyphen.
    Hyphenated,
}

impl Heuristic {
    pub fn matches(&self, label: &str) -> bool {
        match *self {
            Self::StartsWithAny(prefixes) => prefixes.iter().any(|p| label.starts_with(p)),
            Self::ContainsAny(needles) => needles.iter().any(|n| label.contains(n)),
            Self::Hyphenated => label.starts_with('-') || label.ends_with('-'),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Fallback {
    pub heuristic: Heuristic,
    pub group: Group,
}

const SINGLE_LETTERS: &[&str] = &[
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
    "s", "t", "u", "v", "w", "x", "y", "z",
];
const DIGRAPHS: &[&str] = &[
    "ch", "sh", "th", "wh", "qu", "ph", "tch", "dge", "-ck", "-ff", "-ll", "-ss", "-zz", "gn",
    "kn-", "wr-", "-mb", "-mn",
];
const L_BLENDS: &[&str] = &["bl-", "cl-", "fl-", "gl-", "pl-", "sl-"];
const R_BLENDS: &[&str] = &["br-", "cr-", "dr-", "fr-", "gr-", "pr-", "tr-"];
const S_BLENDS: &[&str] = &["sc-", "sk-", "sm-", "sn-", "sp-", "st-"];
const THREE_LETTER_BLENDS: &[&str] = &["scr-", "shr-", "spl-", "spr-", "squ-", "str-", "thr-"];
const W_BLENDS: &[&str] = &["dw-", "sw-", "tw-"];
const VOWEL_TEAMS_1: &[&str] = &[
    "ai", "ea", "oa", "-ay", "ee", "-oe", "ou", "ow", "oi", "-oy", "igh", "oo", "au", "aw", "oy",
    "oe",
];
const VOWEL_TEAMS_2: &[&str] = &[
    "eigh", "ei", "-ew", "-ey", "ie", "ough", "-ue", "ui", "au", "aw", "oe", "augh",
];
const R_CONTROLLED: &[&str] = &["er", "ir", "ur", "ar", "or", "war", "wor"];
const NG_NK: &[&str] = &["-ing", "-ang", "-ong", "-ung", "-ink", "-ank", "-onk", "-unk"];
const FINAL_CLUSTERS: &[&str] = &[
    "-ld", "-lf", "-lk", "-lp", "-lt", "-ct", "-ft", "-nt", "-pt", "-st", "-xt", "-mp", "-nd",
    "-sk", "-sp", "-nch", "-tch", "-dge",
];
const PREFIXES: &[&str] = &[
    "un-", "sub-", "con-", "in-", "mis-", "de-", "re-", "pro-", "pre-", "be-",
];
const SUFFIXES: &[&str] = &[
    "-es", "-less", "-ness", "-ment", "-ful", "-ish", "-en", "-tion", "-sion", "-ed", "-ic",
    "-ing",
];
const MAGIC_E: &[&str] = &["*e", "a_e", "e_e", "i_e", "o_e", "u_e", "y_e"];
const Y_ENDINGS: &[&str] = &[
    "-by", "-vy", "-zy", "-ky", "-ly", "-ny", "-dy", "-fy", "-py", "-sy", "-ty",
];
const ODDBALLS: &[&str] = &["y", "-ild", "-old", "-olt", "-ind", "augh", "ough"];
const LE_SYLLABLES: &[&str] = &[
    "-ble", "-cle", "-dle", "-fle", "-gle", "-kle", "-ple", "-tle", "-zle",
];

const L_BLEND_STARTS: &[&str] = &["bl", "cl", "fl", "gl", "pl", "sl"];
const R_BLEND_STARTS: &[&str] = &["br", "cr", "dr", "fr", "gr", "pr", "tr"];
const S_BLEND_STARTS: &[&str] = &["sc", "sk", "sm", "sn", "sp", "st"];
const SUFFIX_FRAGMENTS: &[&str] = &["ing", "tion"];

const VOWEL_LETTERS: &[&str] = &["a", "e", "i", "o", "u", "y"];

pub const STANDARD_RULES: &[Rule] = &[
    Rule::new(Group::SingleLetters, LabelForm::Raw, SINGLE_LETTERS),
    Rule::new(Group::Digraphs, LabelForm::Trimmed, DIGRAPHS),
    Rule::new(Group::LBlends, LabelForm::Raw, L_BLENDS),
    Rule::new(Group::RBlends, LabelForm::Raw, R_BLENDS),
    Rule::new(Group::SBlends, LabelForm::Raw, S_BLENDS),
    Rule::new(Group::ThreeLetterBlends, LabelForm::Raw, THREE_LETTER_BLENDS),
    Rule::new(Group::WBlends, LabelForm::Raw, W_BLENDS),
    Rule::new(Group::VowelTeams1, LabelForm::Trimmed, VOWEL_TEAMS_1),
    Rule::new(Group::VowelTeams2, LabelForm::Trimmed, VOWEL_TEAMS_2),
    Rule::new(Group::RControlled, LabelForm::Trimmed, R_CONTROLLED),
    Rule::new(Group::NgNk, LabelForm::Raw, NG_NK),
    Rule::new(Group::FinalClusters, LabelForm::Raw, FINAL_CLUSTERS),
    Rule::new(Group::Prefixes, LabelForm::Raw, PREFIXES),
    Rule::new(Group::Suffixes, LabelForm::Raw, SUFFIXES),
    Rule::new(Group::MagicE, LabelForm::Raw, MAGIC_E),
    Rule::new(Group::YEndings, LabelForm::Raw, Y_ENDINGS),
    Rule::new(Group::Oddballs, LabelForm::Raw, ODDBALLS),
    Rule::new(Group::LeSyllables, LabelForm::Raw, LE_SYLLABLES),
];

pub const STANDARD_FALLBACKS: &[Fallback] = &[
    Fallback {
        heuristic: Heuristic::StartsWithAny(L_BLEND_STARTS),
        group: Group::LBlends,
    },
    Fallback {
        heuristic: Heuristic::StartsWithAny(R_BLEND_STARTS),
        group: Group::RBlends,
    },
    Fallback {
        heuristic: Heuristic::StartsWithAny(S_BLEND_STARTS),
        group: Group::SBlends,
    },
    Fallback {
        heuristic: Heuristic::ContainsAny(SUFFIX_FRAGMENTS),
        group: Group::Suffixes,
    },
    Fallback {
        heuristic: Heuristic::Hyphenated,
        group: Group::Suffixes,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub group: Group,
    pub color: TileColor,
}

#[derive(Debug, Clone)]
pub struct Categorizer {
    rules: Vec<Rule>,
    fallbacks: Vec<Fallback>,
    catch_all: Group,
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(
            STANDARD_RULES.to_vec(),
            STANDARD_FALLBACKS.to_vec(),
            Group::Oddballs,
        )
    }
}

impl Categorizer {
    pub const fn new(rules: Vec<Rule>, fallbacks: Vec<Fallback>, catch_all: Group) -> Self {
        Self {
            rules,
            fallbacks,
            catch_all,
        }
    }

    pub fn classify(&self, label: &str) -> Group {
        let label = label.to_lowercase();
        if let Some(rule) = self.rules.iter().find(|rule| rule.matches(&label)) {
            trace!("{label:?} matched the {} rule", rule.group);
            return rule.group;
        }
        if let Some(fallback) = self
            .fallbacks
            .iter()
            .find(|fallback| fallback.heuristic.matches(&label))
        {
            trace!("{label:?} fell back to {}", fallback.group);
            return fallback.group;
        }
        trace!("{label:?} went to the catch-all group");
        self.catch_all
    }

    /// Groups every label, then derives colors from the finished grouping.
    pub fn assign<S: AsRef<str>>(&self, labels: &[S]) -> Vec<Assignment> {
        let groups: Vec<Group> = labels
            .iter()
            .map(|label| self.classify(label.as_ref()))
            .collect();

        let assignments: Vec<Assignment> = labels
            .iter()
            .zip(groups)
            .map(|(label, group)| Assignment {
                group,
                color: color_for(label.as_ref(), group),
            })
            .collect();

        debug!("Categorized {} labels", assignments.len());
        assignments
    }
}

pub fn color_for(label: &str, group: Group) -> TileColor {
    match group {
        Group::SingleLetters if VOWEL_LETTERS.contains(&label.to_lowercase().as_str()) => {
            TileColor::Vowel
        }
        Group::VowelTeams1 | Group::VowelTeams2 | Group::MagicE => TileColor::Vowel,
        Group::Prefixes | Group::Suffixes => TileColor::Affix,
        _ => TileColor::Default,
    }
}

/// Base-tile indices per group, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups {
    members: [Vec<usize>; Group::COUNT],
}

impl Default for Groups {
    fn default() -> Self {
        Self {
            members: core::array::from_fn(|_| Vec::new()),
        }
    }
}

impl Groups {
    pub fn from_assignments(assignments: &[Assignment]) -> Self {
        let mut groups = Self::default();
        for (index, assignment) in assignments.iter().enumerate() {
            if let Some(members) = groups.members.get_mut(assignment.group.index()) {
                members.push(index);
            }
        }
        groups
    }

    pub fn members(&self, group: Group) -> &[usize] {
        self.members
            .get(group.index())
            .map_or(&[], Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Group, &[usize])> {
        <Group as strum::IntoEnumIterator>::iter().map(|group| (group, self.members(group)))
    }

    pub fn total(&self) -> usize {
        self.members.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn classify(label: &str) -> Group {
        Categorizer::default().classify(label)
    }

    #[test]
    fn group_indices_follow_declaration_order() {
        for (expected, group) in Group::iter().enumerate() {
            assert_eq!(group.index(), expected, "{group} is out of order");
            assert_eq!(Group::try_from(expected), Ok(group), "round trip of {expected}");
        }
        assert_eq!(Group::COUNT, 18, "there are exactly 18 groups");
        assert_eq!(Group::NgNk.title(), "-ng / -nk", "titles are the display names");
        assert_eq!(
            Group::try_from(18),
            Err(GroupIndexError(18)),
            "18 is out of range"
        );
    }

    #[test]
    fn exact_rules_cover_each_category() {
        let cases = [
            ("a", Group::SingleLetters),
            ("y", Group::SingleLetters),
            ("ch", Group::Digraphs),
            ("-tch", Group::Digraphs),
            ("bl-", Group::LBlends),
            ("tr-", Group::RBlends),
            ("st-", Group::SBlends),
            ("squ-", Group::ThreeLetterBlends),
            ("dw-", Group::WBlends),
            ("-oy", Group::VowelTeams1),
            ("igh", Group::VowelTeams1),
            ("-ough", Group::VowelTeams2),
            ("eigh", Group::VowelTeams2),
            ("war", Group::RControlled),
            ("-unk", Group::NgNk),
            ("-st", Group::FinalClusters),
            ("-nch", Group::FinalClusters),
            ("mis-", Group::Prefixes),
            ("-ness", Group::Suffixes),
            ("a_e", Group::MagicE),
            ("*e", Group::MagicE),
            ("-ty", Group::YEndings),
            ("-olt", Group::Oddballs),
            ("-zle", Group::LeSyllables),
        ];
        for (label, group) in cases {
            assert_eq!(classify(label), group, "{label:?} should be in {group}");
        }
    }

    #[test]
    fn first_rule_wins_on_overlapping_sets() {
        assert_eq!(classify("oe"), Group::VowelTeams1, "oe is in both vowel team sets");
        assert_eq!(classify("au"), Group::VowelTeams1, "au is in both vowel team sets");
        assert_eq!(classify("augh"), Group::VowelTeams2, "augh is also an oddball");
        assert_eq!(classify("-ing"), Group::NgNk, "-ing is also a suffix");
        assert_eq!(classify("-tch"), Group::Digraphs, "-tch is also a final cluster");
    }

    #[test]
    fn hyphenated_set_entries_fall_through_to_suffixes() {
        let categorizer = Categorizer::default();
        for label in [
            "-ck", "-ff", "-ll", "-ss", "-zz", "kn-", "wr-", "-mb", "-mn", "-ay", "-ew", "-ey",
            "-ue",
        ] {
            assert_eq!(categorizer.classify(label), Group::Suffixes, "{label:?} group");
        }
        assert_eq!(
            categorizer.classify("-oy_"),
            Group::VowelTeams1,
            "trimmed label still finds the bare oy entry"
        );

        let assignments = categorizer.assign(&["-ck", "-ay"]);
        assert!(
            assignments
                .iter()
                .all(|assignment| assignment.group == Group::Suffixes
                    && assignment.color == TileColor::Affix),
            "hyphenated entries are affixes: {assignments:?}"
        );
    }

    #[test]
    fn labels_are_lowercased_before_matching() {
        assert_eq!(classify("CH"), Group::Digraphs, "upper-case digraph");
        assert_eq!(classify("Str-"), Group::ThreeLetterBlends, "mixed case blend");
    }

    #[test]
    fn fallback_chain_is_ordered() {
        assert_eq!(classify("blot"), Group::LBlends, "l-blend start");
        assert_eq!(classify("grin"), Group::RBlends, "r-blend start");
        assert_eq!(classify("string"), Group::SBlends, "blend start beats -ing");
        assert_eq!(classify("nation"), Group::Suffixes, "contains tion");
        assert_eq!(classify("-s"), Group::Suffixes, "leading hyphen");
        assert_eq!(classify("mega-"), Group::Suffixes, "trailing hyphen");
        assert_eq!(classify("zzz"), Group::Oddballs, "catch-all");
        assert_eq!(classify(""), Group::Oddballs, "empty label");
    }

    #[test]
    fn custom_rules_are_honored() {
        let categorizer = Categorizer::new(
            vec![Rule::new(Group::Prefixes, LabelForm::Trimmed, &["anti", "-non"])],
            Vec::new(),
            Group::LeSyllables,
        );
        assert_eq!(categorizer.classify("-anti_"), Group::Prefixes, "trimmed label matches");
        assert_eq!(categorizer.classify("-non"), Group::LeSyllables, "members are not trimmed");
        assert_eq!(categorizer.classify("a"), Group::LeSyllables, "custom catch-all");
    }

    #[test]
    fn colors_derive_from_groups() {
        let labels = ["a", "b", "y", "ee", "-oe", "i_e", "re-", "-ful", "-s", "ch"];
        let colors: Vec<TileColor> = Categorizer::default()
            .assign(&labels)
            .into_iter()
            .map(|assignment| assignment.color)
            .collect();
        assert_eq!(
            colors,
            vec![
                TileColor::Vowel,
                TileColor::Default,
                TileColor::Vowel,
                TileColor::Vowel,
                TileColor::Vowel,
                TileColor::Vowel,
                TileColor::Affix,
                TileColor::Affix,
                TileColor::Affix,
                TileColor::Default,
            ],
            "colors for {labels:?}"
        );
    }

    #[test]
    fn assignment_is_deterministic() {
        let labels = crate::catalog::TileCatalog::standard();
        let categorizer = Categorizer::default();
        assert_eq!(
            categorizer.assign(labels.labels()),
            categorizer.assign(labels.labels()),
            "two passes disagree"
        );
    }

    #[test]
    fn groups_partition_the_catalog() {
        let catalog = crate::catalog::TileCatalog::standard();
        let groups = Groups::from_assignments(&Categorizer::default().assign(catalog.labels()));

        assert_eq!(groups.total(), catalog.len(), "every tile is grouped once");
        let mut seen: Vec<usize> = groups
            .iter()
            .flat_map(|(_, members)| members.iter().copied())
            .collect();
        seen.sort_unstable();
        assert_eq!(
            seen,
            (0..catalog.len()).collect::<Vec<_>>(),
            "groups must cover each index exactly once"
        );
    }
}
