use crate::api::Endpoint;
use crate::common::ApiError;
use crate::types::{LoginRequest, RegisterRequest};

pub fn login(credentials: &LoginRequest) -> Result<Endpoint, ApiError> {
    Endpoint::post(["auth", "login"]).with_json(credentials)
}

pub fn register(input: &RegisterRequest) -> Result<Endpoint, ApiError> {
    Endpoint::post(["auth", "register"]).with_json(input)
}

pub fn me() -> Endpoint {
    Endpoint::get(["auth", "me"])
}

pub fn logout() -> Endpoint {
    Endpoint::post(["auth", "logout"])
}
