use std::cell::RefCell;
use std::collections::HashMap;

use onstep_host::{HostError, HostResult, Transport};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// In-memory transport serving canned bodies, or an HTTP status for failures
#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<String, Result<Vec<u8>, u16>>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeTransport {
    pub fn serve(mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(url.into(), Ok(body.into()));
        self
    }

    pub fn fail(mut self, url: impl Into<String>, status: u16) -> Self {
        self.routes.insert(url.into(), Err(status));
        self
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str) -> HostResult<Vec<u8>> {
        self.requests.borrow_mut().push(url.to_string());
        match self.routes.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(HostError::FetchFailed {
                url: url.to_string(),
                message: format!("http status: {}", status),
            }),
            None => Err(HostError::FetchFailed {
                url: url.to_string(),
                message: "http status: 404".to_string(),
            }),
        }
    }
}
