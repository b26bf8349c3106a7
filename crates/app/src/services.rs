pub mod portal_service;
pub mod provisioning_service;
