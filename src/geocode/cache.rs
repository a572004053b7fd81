use super::{GeocodeError, GeocodeResult, Geocoder};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

type Slot = Arc<Mutex<Option<Vec<GeocodeResult>>>>;

/// Memoizes another geocoder per exact address string.
///
/// Each address has its own slot lock, so concurrent first lookups of the same
/// address reach the inner geocoder once while other addresses proceed.
/// Failures are not stored; the next search for that address asks again.
pub struct CachedGeocoder<G> {
    inner: G,
    slots: Mutex<HashMap<String, Slot>>,
}

impl<G: Geocoder> CachedGeocoder<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            slots: Mutex::new(HashMap::new()),
        }
    }

    fn slot(&self, address: &str) -> Slot {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.entry(address.to_string()).or_default().clone()
    }

    /// Drops an address's slot after a failed lookup, unless another caller
    /// has already replaced it.
    fn forget(&self, address: &str, slot: &Slot) {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        if slots.get(address).is_some_and(|current| Arc::ptr_eq(current, slot)) {
            slots.remove(address);
        }
    }
}

impl<G: Geocoder> Geocoder for CachedGeocoder<G> {
    fn geocode(&self, address: &str) -> Result<Vec<GeocodeResult>, GeocodeError> {
        let slot = self.slot(address);
        let mut cached = slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(results) = cached.as_ref() {
            debug!(address, "Geocode cache hit");
            return Ok(results.clone());
        }

        debug!(address, "Geocode cache miss");
        match self.inner.geocode(address) {
            Ok(results) => {
                *cached = Some(results.clone());
                Ok(results)
            }
            Err(err) => {
                self.forget(address, &slot);
                Err(err)
            }
        }
    }
}
