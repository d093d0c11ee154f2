use std::{
    collections::HashSet,
    sync::{Arc, Mutex, MutexGuard},
};

/// Accounts with a balance-changing operation underway.
pub type InFlight = Arc<Mutex<HashSet<String>>>;

/// Marks an account busy until dropped.
#[derive(Debug)]
pub struct InFlightGuard {
    in_flight: InFlight,
    key: String,
}

fn lock(in_flight: &InFlight) -> MutexGuard<'_, HashSet<String>> {
    match in_flight.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl InFlightGuard {
    /// `None` when the account already has an operation underway.
    pub fn acquire(in_flight: &InFlight, key: &str) -> Option<Self> {
        if !lock(in_flight).insert(key.to_string()) {
            return None;
        }

        Some(Self {
            in_flight: in_flight.clone(),
            key: key.to_string(),
        })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        lock(&self.in_flight).remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_fails_until_released() {
        let in_flight = InFlight::default();

        let guard = InFlightGuard::acquire(&in_flight, "1");
        assert!(guard.is_some());
        assert!(InFlightGuard::acquire(&in_flight, "1").is_none());
        assert!(InFlightGuard::acquire(&in_flight, "2").is_some());

        drop(guard);
        assert!(InFlightGuard::acquire(&in_flight, "1").is_some());
    }
}
