//! Common test utilities and fixtures
//!
//! This module provides shared test infrastructure

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use assert_cmd::Command;
use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use ironcore_admin::storage::MemoryStore;
use ironcore_admin::store::DataStore;
use ironcore_admin::types::{Lead, LeadStatus};

/// Isolated environment for running the binary: its own config file and
/// data directory, zero latency.
pub struct TestEnvironment {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("admin.toml");
        let data_dir = temp_dir.path().join("data");
        fs::write(
            &config_path,
            format!(
                "[storage]\nbackend = \"file\"\ndata_dir = \"{}\"\n\n[api]\nlatency_ms = 0\n",
                data_dir.display()
            ),
        )
        .unwrap();
        Self {
            temp_dir,
            config_path,
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.temp_dir.path().join("data")
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write a raw collection file
    pub fn write_collection(&self, key: &str, json: &str) {
        fs::create_dir_all(self.data_dir()).unwrap();
        fs::write(self.data_dir().join(format!("{}.json", key)), json).unwrap();
    }

    pub fn read_collection(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.data_dir().join(format!("{}.json", key))).ok()
    }

    /// The binary, pointed at this environment
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("ironcore-admin").unwrap();
        cmd.env("IRONCORE_CONFIG", &self.config_path)
            .env_remove("IRONCORE_DATA_DIR")
            .env_remove("IRONCORE_STORAGE_BACKEND")
            .env_remove("IRONCORE_LATENCY_MS")
            .env_remove("IRONCORE_LOG_LEVEL")
            .env_remove("IRONCORE_LOG_FILE")
            .env_remove("IRONCORE_LOG_JSON")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Log in with `email` and assert success
    pub fn login(&self, email: &str) {
        self.cmd()
            .args(["login", "--email", email, "--password", "pw"])
            .assert()
            .success();
    }
}

/// Data store over a fresh in-memory fake, no latency
pub fn memory_store() -> (Arc<MemoryStore>, DataStore) {
    let memory = Arc::new(MemoryStore::new());
    let store = DataStore::new(memory.clone()).with_latency(Duration::ZERO);
    (memory, store)
}

/// Data store whose leads collection already holds `leads`
pub fn store_with_leads(leads: &[Lead]) -> (Arc<MemoryStore>, DataStore) {
    let json = serde_json::to_vec(leads).unwrap();
    let memory = Arc::new(MemoryStore::new().with_entry("leads", json));
    let store = DataStore::new(memory.clone()).with_latency(Duration::ZERO);
    (memory, store)
}

pub fn sample_lead(id: &str, status: LeadStatus) -> Lead {
    Lead {
        id: id.to_string(),
        name: format!("Prospect {}", id),
        email: format!("{}@prospects.test", id),
        phone: "555-0150".to_string(),
        status,
        assigned_to: Some("t1".to_string()),
        notes: vec!["Asked about classes".to_string()],
        created_at: Utc.with_ymd_and_hms(2024, 5, 18, 10, 0, 0).unwrap(),
    }
}
