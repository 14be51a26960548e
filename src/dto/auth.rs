use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Deserialize, Debug, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(custom = "crate::validation::required")]
    pub username: String,
    #[validate(custom = "crate::validation::required")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionStatus {
    pub authenticated: bool,
}

#[derive(Deserialize, Debug, Default, Validate, ToSchema)]
#[validate(schema(function = "passwords_match", skip_on_field_errors = false))]
pub struct ChangeCredentialsRequest {
    #[validate(custom = "crate::validation::required")]
    pub current_password: String,
    #[validate(custom = "crate::validation::not_blank_when_given")]
    pub new_username: Option<String>,
    #[validate(custom = "crate::validation::new_password")]
    pub new_password: Option<String>,
    pub confirm_new_password: Option<String>,
}

fn passwords_match(req: &ChangeCredentialsRequest) -> Result<(), ValidationError> {
    let new = req.new_password.as_deref().unwrap_or("");
    let confirm = req.confirm_new_password.as_deref().unwrap_or("");
    if !new.is_empty() && new != confirm {
        let mut err = ValidationError::new("confirm_new_password");
        err.message = Some("New passwords do not match.".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CredentialsUpdate {
    pub username_changed: bool,
    pub password_changed: bool,
}
