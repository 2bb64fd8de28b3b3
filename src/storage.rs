//! Basket Persistence
//!
//! The basket survives reloads in `localStorage`. The donation is not
//! stored; it is re-derived when checkout opens.

use booking_core::{BasketItem, BookingError, BookingResult};
use web_sys::Storage;

const BASKET_KEY: &str = "club-booking.basket";

fn local_storage() -> BookingResult<Storage> {
    web_sys::window()
        .ok_or_else(|| BookingError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(|err| BookingError::Storage(format!("{:?}", err)))?
        .ok_or_else(|| BookingError::Storage("localStorage unavailable".to_string()))
}

pub fn load_basket() -> BookingResult<Vec<BasketItem>> {
    let stored = local_storage()?
        .get_item(BASKET_KEY)
        .map_err(|err| BookingError::Storage(format!("{:?}", err)))?;
    match stored {
        Some(json) => serde_json::from_str(&json).map_err(|err| BookingError::Storage(err.to_string())),
        None => Ok(Vec::new()),
    }
}

pub fn save_basket(items: &[BasketItem]) -> BookingResult<()> {
    let json = serde_json::to_string(items).map_err(|err| BookingError::Storage(err.to_string()))?;
    local_storage()?
        .set_item(BASKET_KEY, &json)
        .map_err(|err| BookingError::Storage(format!("{:?}", err)))
}
