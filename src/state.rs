//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AdminService, ChirpService, UserService};
use crate::domain::hit_counter::HitCounter;
use crate::domain::operating_mode::OperatingMode;
use crate::domain::repositories::{ChirpRepository, UserRepository};

/// Handler state.
///
/// Cloned per request; all fields are `Arc`s over the same instances. The
/// hit counter is the only mutable shared state.
#[derive(Clone)]
pub struct AppState {
    pub hits: Arc<HitCounter>,
    pub user_service: Arc<UserService<dyn UserRepository>>,
    pub chirp_service: Arc<ChirpService<dyn ChirpRepository>>,
    pub admin_service: Arc<AdminService<dyn UserRepository>>,
}

impl AppState {
    /// Wires services around the given repositories.
    ///
    /// The returned state owns a fresh [`HitCounter`] starting at zero.
    pub fn new(
        users: Arc<dyn UserRepository>,
        chirps: Arc<dyn ChirpRepository>,
        mode: OperatingMode,
    ) -> Self {
        let hits = Arc::new(HitCounter::new());

        Self {
            user_service: Arc::new(UserService::new(users.clone())),
            chirp_service: Arc::new(ChirpService::new(chirps)),
            admin_service: Arc::new(AdminService::new(hits.clone(), users, mode)),
            hits,
        }
    }
}
