use airinfo_core::AirportInfoService;

#[derive(Clone)]
pub struct AppState {
    pub service: AirportInfoService,
}

impl AppState {
    pub fn new(service: AirportInfoService) -> Self {
        Self { service }
    }
}
