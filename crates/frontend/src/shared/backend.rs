//! Client for the external query backend.
//!
//! Every question page talks to the same service: natural language in,
//! SQL rows or a rendered image out. All functions surface a single
//! human-readable error string; callers store it in view state as is.

use contracts::connect::ConnectRequest;
use contracts::query::{QueryResponse, ResultRow};
use gloo_net::http::Request;

use super::api_utils::api_url;

/// POST `/ask/`: rows for the Chart.js and ECharts pages
pub async fn ask(question: &str) -> Result<Vec<ResultRow>, String> {
    fetch_rows(&api_url(&ask_path(question))).await
}

/// POST `/ask-sql-chain/`: rows for the SQL-chain dashboard
pub async fn ask_sql_chain(question: &str) -> Result<Vec<ResultRow>, String> {
    fetch_rows(&api_url(&ask_sql_chain_path(question))).await
}

async fn fetch_rows(url: &str) -> Result<Vec<ResultRow>, String> {
    let response = Request::post(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!(
            "Error fetching the SQL result (HTTP {})",
            response.status()
        ));
    }
    let envelope: QueryResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(envelope.result)
}

/// POST `/code-to-visualization`: a rendered PNG for the image pages
pub async fn code_to_visualization(question: &str) -> Result<Vec<u8>, String> {
    let response = Request::post(&api_url(&code_to_visualization_path(question)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!(
            "Error generating visualization (HTTP {})",
            response.status()
        ));
    }
    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read image payload: {}", e))
}

/// POST `/connect_db`: forward credentials, succeed on any 2xx.
/// Credentials travel in the JSON body, never in the query string.
pub async fn connect_db(request: &ConnectRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/connect_db"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!(
            "Failed to connect to the database (HTTP {})",
            response.status()
        ));
    }
    Ok(())
}

fn ask_path(question: &str) -> String {
    format!("/ask/?question={}", urlencoding::encode(question))
}

fn ask_sql_chain_path(question: &str) -> String {
    format!("/ask-sql-chain/?question={}", urlencoding::encode(question))
}

fn code_to_visualization_path(question: &str) -> String {
    format!(
        "/code-to-visualization?question={}",
        urlencoding::encode(question)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_is_url_encoded() {
        assert_eq!(
            ask_path("total sales by month?"),
            "/ask/?question=total%20sales%20by%20month%3F"
        );
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(ask_path("q"), "/ask/?question=q");
        assert_eq!(ask_sql_chain_path("q"), "/ask-sql-chain/?question=q");
        assert_eq!(
            code_to_visualization_path("q"),
            "/code-to-visualization?question=q"
        );
    }
}
