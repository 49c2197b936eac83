//! Share links
//!
//! Encodes the raw input and options as URL query parameters so a result
//! can be reproduced by someone else (with a seed, exactly):
//!
//! `names, mode, groupCount, groupSize, removeDuplicates, trimEmpty, seed`
//!
//! Decoding is lenient. Missing parameters keep their defaults. Numbers are
//! read from their leading digits (`3abc` is 3, `2.5` is 2); values with no
//! leading digit become 0, which validation rejects at generation time.

use std::borrow::Cow;

use url::{form_urlencoded, Url};

use crate::models::{GroupOptions, GroupingMode};

/// Everything needed to regenerate a result
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShareParams {
    /// Raw, unparsed input text
    pub names: String,
    pub options: GroupOptions,
}

impl ShareParams {
    pub fn new(names: impl Into<String>, options: GroupOptions) -> Self {
        Self {
            names: names.into(),
            options,
        }
    }

    /// Form-urlencoded query string (spaces as `+`)
    ///
    /// The field not selected by the mode is sent empty.
    ///
    /// # Example
    /// ```
    /// use group_maker_core::{GroupOptions, ShareParams};
    ///
    /// let params = ShareParams::new("Ann\nBob Lee", GroupOptions::by_count(2).with_seed("x"));
    /// assert_eq!(
    ///     params.to_query(),
    ///     "names=Ann%0ABob+Lee&mode=jumlah&groupCount=2&groupSize=\
    ///      &removeDuplicates=false&trimEmpty=false&seed=x"
    /// );
    /// ```
    pub fn to_query(&self) -> String {
        let options = &self.options;
        let (group_count, group_size) = match options.mode {
            GroupingMode::Count => (options.group_count.to_string(), String::new()),
            GroupingMode::Size => (String::new(), options.group_size.to_string()),
        };

        form_urlencoded::Serializer::new(String::new())
            .append_pair("names", &self.names)
            .append_pair("mode", options.mode.wire_name())
            .append_pair("groupCount", &group_count)
            .append_pair("groupSize", &group_size)
            .append_pair("removeDuplicates", bool_str(options.remove_duplicates))
            .append_pair("trimEmpty", bool_str(options.trim_empty))
            .append_pair("seed", options.seed.as_deref().unwrap_or(""))
            .finish()
    }

    /// `base` with its query replaced by [`to_query`](Self::to_query)
    /// and its fragment removed
    pub fn share_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_query(Some(&self.to_query()));
        url.set_fragment(None);
        url
    }

    /// Decode from the query of `url`
    pub fn from_url(url: &Url) -> Self {
        Self::from_pairs(url.query_pairs())
    }

    /// Decode from a raw query string, with or without a leading `?`
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()))
    }

    fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Cow<'a, str>, Cow<'a, str>)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let options = &mut params.options;
            match key.as_ref() {
                "names" => params.names = value.into_owned(),
                "mode" => {
                    options.mode =
                        GroupingMode::from_wire_name(&value).unwrap_or(GroupingMode::Count)
                }
                "groupCount" => options.group_count = parse_count(&value),
                "groupSize" => options.group_size = parse_count(&value),
                "removeDuplicates" => options.remove_duplicates = value == "true",
                "trimEmpty" => options.trim_empty = value == "true",
                "seed" => {
                    options.seed = Some(value.into_owned()).filter(|seed| !seed.is_empty())
                }
                _ => {}
            }
        }
        params
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Leading-digit integer parse
///
/// Leading whitespace and a `+` sign are skipped. No digits gives 0;
/// overflow saturates.
fn parse_count(value: &str) -> usize {
    let unsigned = value.trim_start();
    let unsigned = unsigned.strip_prefix('+').unwrap_or(unsigned);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if digits.is_empty() {
        0
    } else {
        digits.parse().unwrap_or(usize::MAX)
    }
}
