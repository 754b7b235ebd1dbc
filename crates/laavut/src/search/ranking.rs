use laavut_data::{Coordinate, Location};

/// How a filtered result set is ordered.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RankingStrategy {
    /// Nearest to the given position first
    ByDistance(Coordinate),
    /// Alphabetical by title
    ByTitle,
}

impl RankingStrategy {
    /// Distance ranking for a usable position, title ranking otherwise.
    #[must_use]
    pub fn for_position(position: Option<Coordinate>) -> Self {
        match position {
            Some(position) if position.is_valid() => Self::ByDistance(position),
            _ => Self::ByTitle,
        }
    }
}

/// Sort `locations` in place. The sort is stable, so ties keep their order.
pub fn rank_locations(locations: &mut [&Location], strategy: RankingStrategy, precision: u8) {
    match strategy {
        RankingStrategy::ByDistance(position) => locations.sort_by_cached_key(|location| {
            rounded_distance(position.distance_km(&location.coordinate()), precision)
        }),
        RankingStrategy::ByTitle => {
            locations.sort_by_cached_key(|location| location.title().map(collation_key));
            // Untitled entries go last
            locations.sort_by_key(|location| location.title().is_none());
        }
    }
}

/// Distance in units of `10^-precision` kilometers, rounded half away from zero.
///
/// Non-finite distances sort after everything else.
#[must_use]
pub fn rounded_distance(kilometers: f64, precision: u8) -> i64 {
    if !kilometers.is_finite() {
        return i64::MAX;
    }
    (kilometers * 10f64.powi(i32::from(precision))).round() as i64
}

/// Case-insensitive sort key following the Finnish alphabet.
///
/// `å ä ö` follow `z` in that order, with `æ` and `ø` sorting as `ä` and `ö`.
/// Every other letter is transliterated to ASCII first, so `č` sorts with `c`.
#[must_use]
pub fn collation_key(title: &str) -> Vec<u32> {
    const LETTERS: u32 = 1_000;
    const OTHER: u32 = 2_000;

    fold(title)
        .chars()
        .map(|c| match c {
            'a'..='z' => LETTERS + (c as u32 - 'a' as u32),
            'å' => LETTERS + 26,
            'ä' => LETTERS + 27,
            'ö' => LETTERS + 28,
            c if c.is_ascii() => c as u32,
            c => OTHER + c as u32,
        })
        .collect()
}

fn fold(title: &str) -> String {
    let mut folded = String::with_capacity(title.len());
    for c in title.chars().flat_map(char::to_lowercase) {
        match c {
            'å' | 'ä' | 'ö' => folded.push(c),
            'æ' => folded.push('ä'),
            'ø' => folded.push('ö'),
            c => match deunicode::deunicode_char(c) {
                Some(ascii) => folded.push_str(&ascii.to_lowercase()),
                None => folded.push(c),
            },
        }
    }
    folded
}
