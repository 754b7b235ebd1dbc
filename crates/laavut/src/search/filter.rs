use ahash::AHashSet as HashSet;
use itertools::Itertools;
use laavut_data::Location;

/// Which part of a location's subtitle a query token may match.
///
/// Subtitles are category labels such as `Laavu maastossa`. The product has
/// always matched only their first word; [`SubtitleMatch::AnyWord`] lets the
/// whole label take part instead.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SubtitleMatch {
    /// Only the first whitespace-delimited word of the subtitle
    #[default]
    FirstWord,
    /// Any part of the subtitle
    AnyWord,
}

/// A cache entry with its searchable text lowercased once up front.
struct Searchable<'a> {
    location: &'a Location,
    title: String,
    subtitle: Option<String>,
}

impl<'a> Searchable<'a> {
    /// `None` for locations without a title, which can never match.
    fn new(location: &'a Location, subtitle_match: SubtitleMatch) -> Option<Self> {
        let title = location.title().filter(|title| !title.is_empty())?;

        let subtitle = location.subtitle().and_then(|subtitle| match subtitle_match {
            SubtitleMatch::FirstWord => subtitle.split_whitespace().next(),
            SubtitleMatch::AnyWord => Some(subtitle).filter(|s| !s.trim().is_empty()),
        });

        Some(Self {
            location,
            title: title.to_lowercase(),
            subtitle: subtitle.map(str::to_lowercase),
        })
    }

    fn matches(&self, token: &str) -> bool {
        self.title.contains(token)
            || self
                .subtitle
                .as_deref()
                .is_some_and(|subtitle| subtitle.contains(token))
    }
}

/// Locations matching every token, in cache order, without value duplicates.
///
/// Within a token, title and subtitle are alternatives. Across tokens the
/// per-token sets are intersected starting from the first. No tokens means no
/// results.
#[must_use]
pub fn filter_locations<'a, T>(
    tokens: &[T],
    cache: &'a [Location],
    subtitle_match: SubtitleMatch,
) -> Vec<&'a Location>
where
    T: AsRef<str>,
{
    let Some((first, rest)) = tokens.split_first() else {
        return Vec::new();
    };

    let searchable = cache
        .iter()
        .filter_map(|location| Searchable::new(location, subtitle_match))
        .collect::<Vec<_>>();

    let mut survivors = searchable
        .iter()
        .filter(|entry| entry.matches(first.as_ref()))
        .map(|entry| entry.location)
        .unique()
        .collect::<Vec<_>>();

    for token in rest {
        if survivors.is_empty() {
            break;
        }
        let token_matches = searchable
            .iter()
            .filter(|entry| entry.matches(token.as_ref()))
            .map(|entry| entry.location)
            .collect::<HashSet<_>>();
        survivors.retain(|location| token_matches.contains(location));
    }

    survivors
}
