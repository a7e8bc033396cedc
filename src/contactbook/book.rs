//! The contact book: records keyed by name, in insertion order.
//!
//! Records live in a vector that fixes their listing order, with a name index
//! next to it. Every record is stored under its own name, so the index and the
//! vector always agree.

use crate::error::{BookError, Result};
use crate::pages::{Pages, PAGE_SIZE};
use crate::record::Record;
use crate::store::BookBackend;
use std::collections::HashMap;

pub struct AddressBook<B: BookBackend> {
    backend: B,
    records: Vec<Record>,
    index: HashMap<String, usize>,
    page_size: usize,
}

impl<B: BookBackend> AddressBook<B> {
    /// Opens the book, loading whatever the backend has stored.
    ///
    /// A corrupt snapshot is returned as an error; the caller decides
    /// whether to abort.
    pub fn open(backend: B) -> Result<Self> {
        let stored = backend.load()?.unwrap_or_default();
        let mut book = Self {
            backend,
            records: Vec::with_capacity(stored.len()),
            index: HashMap::with_capacity(stored.len()),
            page_size: PAGE_SIZE,
        };
        for record in stored {
            book.add_record(record);
        }
        Ok(book)
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Writes every record to the backend, replacing what was there.
    pub fn save(&mut self) -> Result<()> {
        self.backend.save(&self.records)
    }

    /// Inserts the record under its own name. A record with the same name is
    /// replaced in place, keeping its position.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&pos| &self.records[pos])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.index.get(name).map(|&pos| &mut self.records[pos])
    }

    /// Like [`get`](Self::get), failing with `NotFound` for an unknown name.
    pub fn find(&self, name: &str) -> Result<&Record> {
        self.get(name).ok_or_else(|| unknown_contact(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.get_mut(name).ok_or_else(|| unknown_contact(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Pages over every record.
    pub fn pages(&self) -> Pages<'_> {
        Pages::new(&self.records, self.page_size)
    }

    /// Pages over the records accepted by `filter`.
    pub fn filtered_pages<'a, F>(&'a self, filter: F) -> Pages<'a>
    where
        F: Fn(&Record) -> bool + 'a,
    {
        self.pages().with_filter(filter)
    }

    /// Pages over the records matching a search term (see [`Record::matches`]).
    pub fn search<'a>(&'a self, term: &'a str) -> Pages<'a> {
        self.filtered_pages(move |record| record.matches(term))
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

fn unknown_contact(name: &str) -> BookError {
    BookError::NotFound(format!("no contact named '{}'", name))
}
