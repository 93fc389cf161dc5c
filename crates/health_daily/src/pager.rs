//! Page-index to calendar-date mapping.
//!
//! The report browser exposes a window of virtual pages centered on today;
//! a page index maps to a date purely by its offset from the anchor page.

use chrono::{Duration, NaiveDate};

/// Page index that maps to today.
pub const ANCHOR_PAGE: i64 = 1000;

/// Number of virtual pages.
pub const PAGE_COUNT: i64 = 2000;

/// `today + (page − ANCHOR_PAGE)` days.
pub fn date_for_page(page: i64, today: NaiveDate) -> NaiveDate {
    today + Duration::days(page - ANCHOR_PAGE)
}

pub fn is_valid_page(page: i64) -> bool {
    (0..PAGE_COUNT).contains(&page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn anchor_page_is_today() {
        let today = date(2024, 3, 15);
        assert_eq!(date_for_page(ANCHOR_PAGE, today), today);
    }

    #[test]
    fn pages_offset_in_days() {
        let today = date(2024, 3, 15);
        assert_eq!(date_for_page(ANCHOR_PAGE - 1, today), date(2024, 3, 14));
        assert_eq!(date_for_page(ANCHOR_PAGE + 7, today), date(2024, 3, 22));
        // month boundary
        assert_eq!(date_for_page(ANCHOR_PAGE - 15, today), date(2024, 2, 29));
    }

    #[test]
    fn page_range_is_bounded() {
        assert!(is_valid_page(0));
        assert!(is_valid_page(PAGE_COUNT - 1));
        assert!(!is_valid_page(PAGE_COUNT));
        assert!(!is_valid_page(-1));
    }
}
