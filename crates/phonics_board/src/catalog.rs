use std::collections::HashSet;

use tracing::debug;

/// Spelling patterns shown on the board, repeats included.
#[rustfmt::skip]
pub const STANDARD_LABELS: &[&str] = &[
    // single letters
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
    "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
    // digraphs and doubled endings
    "ch", "sh", "th", "wh", "qu", "-ck", "-s", "-ff", "-ll", "-ss", "-zz",
    "-ing", "-ang", "-ong", "-ung", "-ink", "-ank", "-onk", "-unk",
    // blends
    "bl-", "cl-", "fl-", "gl-", "pl-", "sl-",
    "br-", "cr-", "dr-", "fr-", "gr-", "pr-", "tr-",
    "sc-", "sk-", "sm-", "sn-", "sp-", "st-",
    "scr-", "shr-", "spl-", "spr-", "squ-", "str-", "thr-",
    "dw-", "sw-", "tw-",
    // final clusters
    "-ld", "-lf", "-lk", "-lp", "-lt", "-ct", "-ft", "-nt", "-pt", "-st", "-xt", "-mp", "-nd",
    "-sk", "-sp", "-nch", "-tch", "-dge",
    // vowel teams
    "ai", "ea", "oa", "-ay", "ee", "-oe", "ou", "ow", "oi", "-oy", "au", "aw", "oo", "eigh", "ei",
    "-ew", "-ey", "ie", "igh", "-ue", "ui", "oe", "augh", "ough",
    // magic e
    "*e", "a_e", "e_e", "i_e", "o_e", "u_e", "y_e",
    // r-controlled
    "er", "ir", "ur", "ar", "or", "war", "wor",
    // prefixes
    "un-", "sub-", "con-", "in-", "mis-", "de-", "re-", "pro-", "pre-", "be-",
    // suffixes
    "-es", "-less", "-ness", "-ment", "-ful", "-ish", "-en", "-tion", "-sion", "-ed", "-ic", "-ing",
    // y endings
    "-by", "-vy", "-zy", "-ky", "-ly", "-ny", "-dy", "-fy", "-py", "-sy", "-ty",
    // odd endings and -le syllables
    "-ild", "-old", "-olt", "-ind", "-ble", "-cle", "-dle", "-fle", "-gle", "-kle", "-ple", "-tle",
    "-zle",
    "dw-", "sw-", "tw-", "ph", "kn-", "gn", "wr-", "-mb", "-mn",
    "ai", "ea", "oa", "ee", "ie", "oo", "igh", "eigh", "ough", "augh", "ei", "-ew", "-ey", "ie",
    "-ue", "ui", "au", "aw",
    "-s", "-ff", "-ll", "-ss", "-zz", "-ck", "tch", "-dge", "-nch", "-oy", "-oy", "-oe",
];

/// Unique labels in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileCatalog {
    labels: Vec<String>,
}

impl TileCatalog {
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut total = 0;
        let labels: Vec<String> = raw
            .into_iter()
            .inspect(|_| total += 1)
            .filter(|label| seen.insert(label.as_ref().to_owned()))
            .map(|label| label.as_ref().to_owned())
            .collect();

        debug!(
            "Catalog kept {} of {total} labels after removing repeats",
            labels.len()
        );
        Self { labels }
    }

    pub fn standard() -> Self {
        Self::from_raw(STANDARD_LABELS)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
