//! Request sequence tokens
//!
//! Every lookup is tagged with an id from a monotonically increasing counter.
//! Only the latest issued id is current; anything older is stale, and
//! invalidating clears the current id so even the latest response is dropped.

/// Issues request ids and decides whether a response is still wanted
#[derive(Debug, Default, Clone)]
pub struct RequestSequence {
    last_issued: u64,
    current: Option<u64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next request id and make it the current one
    pub fn issue(&mut self) -> u64 {
        self.last_issued = self.last_issued.wrapping_add(1);
        self.current = Some(self.last_issued);
        self.last_issued
    }

    /// Forget the current request so its response is discarded on arrival
    pub fn invalidate(&mut self) -> Option<u64> {
        self.current.take()
    }

    pub fn is_current(&self, request_id: u64) -> bool {
        self.current == Some(request_id)
    }

    pub fn current(&self) -> Option<u64> {
        self.current
    }

    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }
}
