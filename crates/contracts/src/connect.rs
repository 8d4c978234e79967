use serde::{Deserialize, Serialize};

/// Database engine selectable on the connection form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DbType {
    /// PostgreSQL server
    #[default]
    Postgresql,
    /// MySQL server
    Mysql,
}

impl DbType {
    pub const ALL: [DbType; 2] = [DbType::Postgresql, DbType::Mysql];

    /// Wire value, also used as the `<option>` value
    pub fn as_str(self) -> &'static str {
        match self {
            DbType::Postgresql => "postgresql",
            DbType::Mysql => "mysql",
        }
    }

    /// Human-readable form label
    pub fn label(self) -> &'static str {
        match self {
            DbType::Postgresql => "PostgreSQL",
            DbType::Mysql => "MySQL",
        }
    }

    pub fn parse(value: &str) -> Option<DbType> {
        DbType::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// Connection parameters forwarded to the backend.
/// Travels as a JSON body; credentials must never appear in a URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectRequest {
    /// Database engine
    pub db_type: DbType,
    /// Login user
    pub user: String,
    /// Login password
    pub password: String,
    /// Server host
    pub host: String,
    /// Database name
    pub database: String,
}

impl ConnectRequest {
    /// Empty form with the default engine selected
    pub fn new() -> Self {
        Self {
            db_type: DbType::default(),
            user: String::new(),
            password: String::new(),
            host: String::new(),
            database: String::new(),
        }
    }
}

impl Default for ConnectRequest {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_type_wire_form() {
        assert_eq!(
            serde_json::to_string(&DbType::Postgresql).unwrap(),
            "\"postgresql\""
        );
        assert_eq!(serde_json::to_string(&DbType::Mysql).unwrap(), "\"mysql\"");
    }

    #[test]
    fn test_db_type_parse() {
        assert_eq!(DbType::parse("postgresql"), Some(DbType::Postgresql));
        assert_eq!(DbType::parse("mysql"), Some(DbType::Mysql));
        assert_eq!(DbType::parse("oracle"), None);
    }

    #[test]
    fn test_connect_request_body() {
        let request = ConnectRequest {
            db_type: DbType::Mysql,
            user: "admin".to_string(),
            password: "secret".to_string(),
            host: "localhost".to_string(),
            database: "sales".to_string(),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["db_type"], "mysql");
        assert_eq!(body["user"], "admin");
        assert_eq!(body["password"], "secret");
        assert_eq!(body["host"], "localhost");
        assert_eq!(body["database"], "sales");
    }
}
