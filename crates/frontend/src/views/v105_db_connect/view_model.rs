use contracts::connect::ConnectRequest;
use leptos::prelude::*;

use crate::shared::backend;

/// Credentials check shared by the connect command and its tests.
/// The engine has a default, so only the text fields are checked.
pub fn validate(form: &ConnectRequest) -> Result<(), &'static str> {
    if form.user.trim().is_empty() {
        return Err("User is required");
    }
    if form.password.trim().is_empty() {
        return Err("Password is required");
    }
    if form.host.trim().is_empty() {
        return Err("Host is required");
    }
    if form.database.trim().is_empty() {
        return Err("Database name is required");
    }
    Ok(())
}

/// State for the connect-then-ask page.
///
/// `connected` flips once and gates the question flow; a failed or
/// rejected connection leaves it untouched.
#[derive(Clone)]
pub struct DbConnectViewModel {
    pub form: RwSignal<ConnectRequest>,
    pub is_connecting: RwSignal<bool>,
    pub connected: RwSignal<bool>,
    pub connection_error: RwSignal<Option<String>>,
    pub question: RwSignal<String>,
    pub image_bytes: RwSignal<Option<Vec<u8>>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl DbConnectViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ConnectRequest::new()),
            is_connecting: RwSignal::new(false),
            connected: RwSignal::new(false),
            connection_error: RwSignal::new(None),
            question: RwSignal::new(String::new()),
            image_bytes: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Forward the credentials and open the question flow on success.
    pub fn connect_command(&self) {
        let is_connecting = self.is_connecting;
        let connected = self.connected;
        let connection_error = self.connection_error;

        let request = self.form.get_untracked();
        if let Err(message) = validate(&request) {
            connection_error.set(Some(message.to_string()));
            return;
        }

        is_connecting.set(true);
        connection_error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            match backend::connect_db(&request).await {
                Ok(()) => connected.set(true),
                Err(e) => connection_error.set(Some(e)),
            }
            is_connecting.set(false);
        });
    }

    /// Send the question against the connected database.
    pub fn ask_command(&self) {
        let image_bytes = self.image_bytes;
        let loading = self.loading;
        let error = self.error;

        let question_value = self.question.get_untracked();
        if question_value.trim().is_empty() {
            return;
        }

        loading.set(true);
        error.set(None);
        image_bytes.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            match backend::code_to_visualization(&question_value).await {
                Ok(bytes) => image_bytes.set(Some(bytes)),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    }
}

impl Default for DbConnectViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::connect::DbType;

    fn filled_form() -> ConnectRequest {
        ConnectRequest {
            db_type: DbType::Postgresql,
            user: "admin".to_string(),
            password: "secret".to_string(),
            host: "localhost".to_string(),
            database: "sales".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_filled_form() {
        assert_eq!(validate(&filled_form()), Ok(()));
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut form = filled_form();
        form.user = String::new();
        assert_eq!(validate(&form), Err("User is required"));

        let mut form = filled_form();
        form.password = "   ".to_string();
        assert_eq!(validate(&form), Err("Password is required"));

        let mut form = filled_form();
        form.host = String::new();
        assert_eq!(validate(&form), Err("Host is required"));

        let mut form = filled_form();
        form.database = String::new();
        assert_eq!(validate(&form), Err("Database name is required"));
    }
}
