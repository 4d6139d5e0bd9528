use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginResponse {
    pub data: LoginResponseData,
}

#[derive(Deserialize)]
pub struct LoginResponseData {
    pub ticket: String,
    #[serde(rename = "CSRFPreventionToken")]
    pub csrf_token: String,
    /// The canonical `user@realm` the ticket was issued for.
    #[serde(default)]
    pub username: Option<String>,
}
