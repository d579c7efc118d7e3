use std::collections::BTreeMap;

use shared::Holiday;

use super::navigation::NavigationState;

/// Date key → holiday name.
///
/// Derived state: always rebuilt wholesale from the list the backend returned,
/// never edited in place. When the list repeats a date key the later entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayMap {
    entries: BTreeMap<String, String>,
}

impl HolidayMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_holidays<I>(holidays: I) -> Self
    where
        I: IntoIterator<Item = Holiday>,
    {
        holidays.into_iter().collect()
    }

    pub fn get(&self, date_key: &str) -> Option<&str> {
        self.entries.get(date_key).map(String::as_str)
    }

    pub fn contains(&self, date_key: &str) -> bool {
        self.entries.contains_key(date_key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All (date key, name) pairs in date order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(date, name)| (date.as_str(), name.as_str()))
    }

    /// Holidays inside the displayed month, in date order
    pub fn in_month<'a>(&'a self, navigation: &'a NavigationState) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.iter().filter(move |(date, _)| navigation.contains(date))
    }
}

impl FromIterator<Holiday> for HolidayMap {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|holiday| (holiday.date, holiday.name))
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Holiday> {
        vec![
            Holiday::new("2025-12-25", "Christmas"),
            Holiday::new("2025-01-01", "New Year"),
            Holiday::new("2025-12-31", "New Year's Eve"),
        ]
    }

    #[test]
    fn test_lookup_by_date_key() {
        let map = HolidayMap::from_holidays(sample());
        assert_eq!(map.get("2025-12-25"), Some("Christmas"));
        assert!(map.contains("2025-01-01"));
        assert_eq!(map.get("2025-12-24"), None);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let first = HolidayMap::from_holidays(sample());
        let second = HolidayMap::from_holidays(sample());
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_date_keeps_last_entry() {
        let map = HolidayMap::from_holidays(vec![
            Holiday::new("2025-10-31", "Halloween"),
            Holiday::new("2025-10-31", "Reformation Day"),
        ]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("2025-10-31"), Some("Reformation Day"));
    }

    #[test]
    fn test_iter_is_date_ordered_and_month_filtered() {
        let map = HolidayMap::from_holidays(sample());
        let dates: Vec<&str> = map.iter().map(|(date, _)| date).collect();
        assert_eq!(dates, vec!["2025-01-01", "2025-12-25", "2025-12-31"]);

        let december = NavigationState::new(11, 2025);
        let names: Vec<&str> = map.in_month(&december).map(|(_, name)| name).collect();
        assert_eq!(names, vec!["Christmas", "New Year's Eve"]);
    }
}
