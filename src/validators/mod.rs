pub mod control_plane_validator;
pub mod instance_validator;
pub mod provider_validator;
pub mod required_keys_validator;
pub mod storage_validator;
