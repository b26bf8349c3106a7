//! Stub ports shared by the handler tests.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use sensordash_app::ports::{NetworkScanner, WifiProvisioner};
use sensordash_app::reading_bus::ReadingBus;
use sensordash_app::services::provisioning_service::ProvisioningService;
use sensordash_domain::error::SensordashError;
use sensordash_domain::network::{Encryption, Network};
use sensordash_domain::provisioning::ConnectRequest;

use crate::state::AppState;

pub struct StubScanner {
    pub networks: Vec<Network>,
    pub fail: bool,
}

impl NetworkScanner for StubScanner {
    async fn scan(&self) -> Result<Vec<Network>, SensordashError> {
        if self.fail {
            return Err(SensordashError::device(std::io::Error::other("radio busy")));
        }
        Ok(self.networks.clone())
    }
}

#[derive(Default)]
pub struct StubProvisioner {
    pub requests: Mutex<Vec<ConnectRequest>>,
    pub connected: AtomicBool,
}

impl WifiProvisioner for StubProvisioner {
    async fn begin_connect(&self, request: ConnectRequest) -> Result<(), SensordashError> {
        self.requests.lock().unwrap().push(request);
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

pub type TestState = AppState<StubScanner, Arc<StubProvisioner>>;

pub fn sample_networks() -> Vec<Network> {
    vec![
        Network::new("office", -71).with_encryption(Encryption::Encrypted),
        Network::new("lab", -40).with_encryption(Encryption::Open),
    ]
}

pub fn test_state_with(scanner: StubScanner) -> (TestState, Arc<StubProvisioner>) {
    let provisioner = Arc::new(StubProvisioner::default());
    let service = ProvisioningService::new(scanner, Arc::clone(&provisioner), "192.168.4.1");
    let state = AppState::new(Arc::new(ReadingBus::new(16)), service);
    (state, provisioner)
}

pub fn test_state() -> (TestState, Arc<StubProvisioner>) {
    test_state_with(StubScanner {
        networks: sample_networks(),
        fail: false,
    })
}
