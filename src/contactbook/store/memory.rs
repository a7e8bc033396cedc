use super::BookBackend;
use crate::error::Result;
use crate::record::Record;

/// Keeps the saved snapshot in memory. Used by tests.
#[derive(Debug, Default, Clone)]
pub struct MemBackend {
    saved: Option<Vec<Record>>,
    saves: usize,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            saved: Some(records),
            saves: 0,
        }
    }

    pub fn saved(&self) -> Option<&[Record]> {
        self.saved.as_deref()
    }

    /// Number of times `save` was called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl BookBackend for MemBackend {
    fn load(&self) -> Result<Option<Vec<Record>>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.saved = Some(records.to_vec());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::book::AddressBook;
    use crate::fields::{Birthday, Name, Phone};

    /// A book with `Bill` (two phones, birthday) and `Jill` (one phone).
    pub fn sample_book() -> AddressBook<MemBackend> {
        let bill = Record::new(
            Name::new("Bill").unwrap(),
            Birthday::new(Some("1990-01-05")).unwrap(),
        )
        .with_phone(Phone::new("0671234567").unwrap())
        .with_phone(Phone::new("0931234567").unwrap());
        let jill = Record::new(Name::new("Jill").unwrap(), Birthday::unknown())
            .with_phone(Phone::new("0991112233").unwrap());

        AddressBook::open(MemBackend::with_records(vec![bill, jill])).unwrap()
    }

    pub fn empty_book() -> AddressBook<MemBackend> {
        AddressBook::open(MemBackend::new()).unwrap()
    }
}
