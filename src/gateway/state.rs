use std::sync::Arc;

use chrono::NaiveTime;

use crate::service::RestaurantService;
use crate::store::RestaurantStore;

/// Source of the current wall-clock time of day.
pub type Clock = fn() -> NaiveTime;

/// Local wall clock of the serving host.
pub fn local_clock() -> NaiveTime {
    chrono::Local::now().time()
}

pub struct HandlerState<S: RestaurantStore + 'static> {
    pub service: Arc<RestaurantService<S>>,

    pub clock: Clock,
}

impl<S: RestaurantStore + 'static> Clone for HandlerState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            clock: self.clock,
        }
    }
}

impl<S: RestaurantStore + 'static> HandlerState<S> {
    pub fn new(service: Arc<RestaurantService<S>>) -> Self {
        Self {
            service,
            clock: local_clock,
        }
    }

    pub fn with_clock(service: Arc<RestaurantService<S>>, clock: Clock) -> Self {
        Self { service, clock }
    }

    pub fn now(&self) -> NaiveTime {
        (self.clock)()
    }
}
