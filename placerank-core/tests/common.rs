#![allow(dead_code)]

use std::sync::{Arc, Mutex, OnceLock};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use placerank_core::session::ListingSession;
use placerank_core::types::ListEntry;
use url::Url;

static INIT_PATH: OnceLock<std::path::PathBuf> = OnceLock::new();

pub fn init_test_tracing() {
    let _ = INIT_PATH.get_or_init(|| {
        let config = placerank_common::observability::LogConfig {
            app_name: "placerank-tests",
            log_dir: Some(std::env::temp_dir().join("placerank-tests")),
            emit_stderr: true,
            default_filter: "debug",
            ..placerank_common::observability::LogConfig::default()
        };
        placerank_common::observability::init_logging(config).unwrap_or_default()
    });
}

/// How a scripted list-view toggle behaves when the finder probes for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Clickable,
    Missing,
    Broken,
}

/// Call counters shared with the test after the finder consumes the session.
#[derive(Debug, Default)]
pub struct SessionLog {
    pub navigations: usize,
    pub css_attempts: usize,
    pub text_attempts: usize,
    pub focused: usize,
    pub scan_passes: usize,
    pub scrolls: usize,
    pub closes: usize,
}

/// Scripted stand-in for a browser session: serves one entry snapshot per
/// scan pass (the last snapshot repeats) and records every call.
pub struct MockSession {
    pages: Vec<Vec<ListEntry>>,
    css_toggle: Toggle,
    text_toggle: Toggle,
    fail_navigation: bool,
    log: Arc<Mutex<SessionLog>>,
}

impl MockSession {
    pub fn new(pages: Vec<Vec<ListEntry>>) -> Self {
        Self {
            pages,
            css_toggle: Toggle::Missing,
            text_toggle: Toggle::Missing,
            fail_navigation: false,
            log: Arc::default(),
        }
    }

    pub fn with_css_toggle(mut self, toggle: Toggle) -> Self {
        self.css_toggle = toggle;
        self
    }

    pub fn with_text_toggle(mut self, toggle: Toggle) -> Self {
        self.text_toggle = toggle;
        self
    }

    pub fn failing_navigation(mut self) -> Self {
        self.fail_navigation = true;
        self
    }

    pub fn log_handle(&self) -> Arc<Mutex<SessionLog>> {
        Arc::clone(&self.log)
    }

    fn page_for_pass(&self, pass: usize) -> Vec<ListEntry> {
        self.pages
            .get(pass)
            .or_else(|| self.pages.last())
            .cloned()
            .unwrap_or_default()
    }
}

fn toggle_outcome(toggle: Toggle) -> Result<bool> {
    match toggle {
        Toggle::Clickable => Ok(true),
        Toggle::Missing => Ok(false),
        Toggle::Broken => Err(anyhow!("stale element reference")),
    }
}

#[async_trait]
impl ListingSession for MockSession {
    async fn navigate(&mut self, _url: &Url) -> Result<()> {
        self.log.lock().unwrap().navigations += 1;
        if self.fail_navigation {
            return Err(anyhow!("net::ERR_NAME_NOT_RESOLVED"));
        }
        Ok(())
    }

    async fn click_toggle_by_css(&mut self, _selector: &str, _label: &str) -> Result<bool> {
        self.log.lock().unwrap().css_attempts += 1;
        toggle_outcome(self.css_toggle)
    }

    async fn click_toggle_by_text(&mut self, _label: &str) -> Result<bool> {
        self.log.lock().unwrap().text_attempts += 1;
        toggle_outcome(self.text_toggle)
    }

    async fn focus_results(&mut self) -> Result<()> {
        self.log.lock().unwrap().focused += 1;
        Ok(())
    }

    async fn visible_entries(
        &mut self,
        _item_selector: &str,
        _ad_attribute: &str,
    ) -> Result<Vec<ListEntry>> {
        let pass = {
            let mut log = self.log.lock().unwrap();
            let pass = log.scan_passes;
            log.scan_passes += 1;
            pass
        };
        Ok(self.page_for_pass(pass))
    }

    async fn scroll_to_end(&mut self) -> Result<()> {
        self.log.lock().unwrap().scrolls += 1;
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.log.lock().unwrap().closes += 1;
        Ok(())
    }
}

pub fn organic(index: usize, text: &str) -> ListEntry {
    ListEntry::derive(index, text.to_string(), None)
}

pub fn sponsored(index: usize, text: &str) -> ListEntry {
    ListEntry::derive(index, text.to_string(), Some("salt*e-banner"))
}
