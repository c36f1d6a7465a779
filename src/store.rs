//! In-memory CRUD store for atom parameter snapshots.
//!
//! Backing storage for the glue API. Starts seeded with carbon so a fresh
//! instance always has a "latest" record to load into the form.

use crate::scene::AtomParameters;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomRecord {
    pub id: u64,
    #[serde(flatten)]
    pub params: AtomParameters,
}

#[derive(Debug)]
pub struct AtomStore {
    records: Vec<AtomRecord>,
    next_id: u64,
}

impl AtomStore {
    pub fn new() -> Self {
        let mut store = AtomStore {
            records: Vec::new(),
            next_id: 1,
        };
        store.insert(AtomParameters {
            protons: 6,
            neutrons: 6,
            electrons: 6,
        });
        store
    }

    pub fn insert(&mut self, params: AtomParameters) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(AtomRecord { id, params });
        id
    }

    pub fn get(&self, id: u64) -> Option<AtomRecord> {
        self.records.iter().find(|r| r.id == id).copied()
    }

    /// Most recently created record.
    pub fn latest(&self) -> Option<AtomRecord> {
        self.records.last().copied()
    }

    pub fn update(&mut self, id: u64, params: AtomParameters) -> Option<AtomRecord> {
        let record = self.records.iter_mut().find(|r| r.id == id)?;
        record.params = params;
        Some(*record)
    }
}

impl Default for AtomStore {
    fn default() -> Self {
        Self::new()
    }
}

pub static STORE: Lazy<RwLock<AtomStore>> = Lazy::new(|| RwLock::new(AtomStore::new()));
