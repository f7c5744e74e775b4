//! Per-session cart storage.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::ids::SessionId;
use crate::money::Currency;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Carts keyed by shopper session.
///
/// Every cart mutation runs while the store lock is held, so two requests
/// for the same session never interleave their changes.
#[derive(Debug, Default)]
pub struct CartSessions {
    currency: Currency,
    carts: Mutex<HashMap<SessionId, Cart>>,
}

impl CartSessions {
    /// Create an empty store; new carts are priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            carts: Mutex::new(HashMap::new()),
        }
    }

    /// Run `f` against the session's cart, creating the cart on first use.
    pub fn with_cart<T, F>(&self, session: &SessionId, f: F) -> Result<T, CommerceError>
    where
        F: FnOnce(&mut Cart) -> Result<T, CommerceError>,
    {
        let mut carts = self.lock()?;
        let cart = carts
            .entry(session.clone())
            .or_insert_with(|| Cart::new(self.currency));
        f(cart)
    }

    /// Snapshot of the session's cart, if it has one.
    pub fn get(&self, session: &SessionId) -> Result<Option<Cart>, CommerceError> {
        Ok(self.lock()?.get(session).cloned())
    }

    /// Put a previously persisted cart back under `session`.
    pub fn restore(&self, session: SessionId, cart: Cart) -> Result<(), CommerceError> {
        self.lock()?.insert(session, cart);
        Ok(())
    }

    /// Remove and return the session's cart.
    pub fn take(&self, session: &SessionId) -> Result<Option<Cart>, CommerceError> {
        Ok(self.lock()?.remove(session))
    }

    /// Number of sessions holding a cart.
    pub fn len(&self) -> Result<usize, CommerceError> {
        Ok(self.lock()?.len())
    }

    /// Whether no session holds a cart.
    pub fn is_empty(&self) -> Result<bool, CommerceError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, Cart>>, CommerceError> {
        self.carts
            .lock()
            .map_err(|e| CommerceError::SessionUnavailable(e.to_string()))
    }
}
