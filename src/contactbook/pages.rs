//! Paginated, optionally filtered traversal of the contact book.
//!
//! A page is a block of text headed `Page <n>` (counting from 0) followed by
//! one line per record. A page is emitted as soon as it holds `page_size`
//! matching records. After the last record the page in progress is always
//! emitted, even when it has no records, so every traversal yields at least
//! one page:
//!
//! ```text
//! 0 records -> [Page 0]
//! 3 records -> [Page 0: 2 records] [Page 1: 1 record]
//! 4 records -> [Page 0: 2 records] [Page 1: 2 records] [Page 2: empty]
//! ```

use crate::record::Record;
use std::fmt::Write;

/// Records per page.
pub const PAGE_SIZE: usize = 2;

type Filter<'a> = Box<dyn Fn(&Record) -> bool + 'a>;

/// Lazy page iterator over a slice of records.
///
/// Built by [`AddressBook::pages`](crate::book::AddressBook::pages); each call
/// there starts a fresh traversal.
pub struct Pages<'a> {
    records: std::slice::Iter<'a, Record>,
    filter: Option<Filter<'a>>,
    page_size: usize,
    page: usize,
    finished: bool,
}

impl<'a> Pages<'a> {
    pub fn new(records: &'a [Record], page_size: usize) -> Self {
        Self {
            records: records.iter(),
            filter: None,
            page_size: page_size.max(1),
            page: 0,
            finished: false,
        }
    }

    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Record) -> bool + 'a,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    fn accepts(&self, record: &Record) -> bool {
        self.filter.as_ref().is_none_or(|filter| filter(record))
    }
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        let mut block = format!("Page {}\n", self.page);
        let mut count = 0;
        while let Some(record) = self.records.next() {
            if !self.accepts(record) {
                continue;
            }
            let _ = writeln!(block, "{}", record);
            count += 1;
            if count == self.page_size {
                self.page += 1;
                return Some(block);
            }
        }

        self.finished = true;
        Some(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Birthday, Name, Phone};

    fn records(count: usize) -> Vec<Record> {
        (0..count)
            .map(|i| {
                Record::new(Name::new(format!("User{}", i)).unwrap(), Birthday::unknown())
                    .with_phone(Phone::new(&format!("067000000{}", i)).unwrap())
            })
            .collect()
    }

    fn body_lines(page: &str) -> usize {
        page.lines().skip(1).count()
    }

    #[test]
    fn test_empty_yields_single_header() {
        let pages: Vec<String> = Pages::new(&[], PAGE_SIZE).collect();
        assert_eq!(pages, vec!["Page 0\n".to_string()]);
    }

    #[test]
    fn test_five_records_make_three_pages() {
        let recs = records(5);
        let pages: Vec<String> = Pages::new(&recs, PAGE_SIZE).collect();
        assert_eq!(pages.len(), 3);
        assert_eq!(
            pages.iter().map(|p| body_lines(p)).collect::<Vec<_>>(),
            vec![2, 2, 1]
        );
        assert!(pages[0].starts_with("Page 0\nUser User0 - Numbers: +380670000000"));
        assert!(pages[2].starts_with("Page 2\n"));
    }

    #[test]
    fn test_exact_multiple_ends_with_empty_page() {
        let recs = records(4);
        let pages: Vec<String> = Pages::new(&recs, PAGE_SIZE).collect();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2], "Page 2\n");
    }

    #[test]
    fn test_filter_counts_only_matching_records() {
        let recs = records(5);
        let pages: Vec<String> = Pages::new(&recs, PAGE_SIZE)
            .with_filter(|r| r.name().as_str() != "User1")
            .collect();
        assert_eq!(pages.len(), 3);
        assert!(!pages.concat().contains("User1"));
        assert!(pages[0].contains("User0") && pages[0].contains("User2"));
    }

    #[test]
    fn test_filter_matching_nothing() {
        let recs = records(3);
        let pages: Vec<String> = Pages::new(&recs, PAGE_SIZE)
            .with_filter(|_| false)
            .collect();
        assert_eq!(pages, vec!["Page 0\n".to_string()]);
    }

    #[test]
    fn test_custom_page_size() {
        let recs = records(5);
        assert_eq!(Pages::new(&recs, 3).count(), 2);
        assert_eq!(Pages::new(&recs, 0).count(), 6);
    }

    #[test]
    fn test_is_lazy() {
        let recs = records(5);
        let mut pages = Pages::new(&recs, PAGE_SIZE);
        assert!(pages.next().is_some());
        assert_eq!(pages.records.len(), 3);
    }
}
