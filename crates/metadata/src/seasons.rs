/// Pick the seasons to query for a show with `total_seasons` seasons.
///
/// Season 1 is always queried; the latest season is added when it differs.
/// Middle seasons are never looked at.
pub fn select_seasons(total_seasons: i64) -> Vec<i64> {
    let mut seasons = vec![1];
    if total_seasons > 1 {
        seasons.push(total_seasons);
    }
    seasons
}
