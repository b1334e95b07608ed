//! Request builders and response decoding for the management API.
//!
//! Builders return plain [`ehttp::Request`] values; the UI layer owns
//! dispatch so it can hook completion into the frame loop. Decoding
//! helpers turn a finished [`ehttp::Result`] into typed values or a
//! [`RestError`] worth logging.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::PageResult;
use crate::query::encode_query;

#[derive(Debug, thiserror::Error)]
pub enum RestError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// `GET {api_url}/{resource}?{pairs}`.
pub fn list_request(api_url: &str, resource: &str, pairs: &[(String, String)]) -> ehttp::Request {
    let query = encode_query(pairs);
    let url = if query.is_empty() {
        format!("{api_url}/{resource}")
    } else {
        format!("{api_url}/{resource}?{query}")
    };
    ehttp::Request::get(url)
}

/// `GET` without query parameters, for lookups and fixed endpoints.
pub fn get_request(api_url: &str, path: &str) -> ehttp::Request {
    ehttp::Request::get(format!("{api_url}/{path}"))
}

/// `POST {api_url}/{resource}` with a JSON body.
pub fn create_request<T: Serialize>(
    api_url: &str,
    resource: &str,
    payload: &T,
) -> Result<ehttp::Request, RestError> {
    json_request("POST", format!("{api_url}/{resource}"), payload)
}

/// `PUT {api_url}/{resource}` with a JSON body.
pub fn update_request<T: Serialize>(
    api_url: &str,
    resource: &str,
    payload: &T,
) -> Result<ehttp::Request, RestError> {
    json_request("PUT", format!("{api_url}/{resource}"), payload)
}

/// `DELETE {api_url}/{resource}?seq=..&seq=..`, one pair per row.
pub fn delete_request(api_url: &str, resource: &str, seqs: &[i64]) -> ehttp::Request {
    let pairs: Vec<(String, String)> = seqs
        .iter()
        .map(|seq| ("seq".to_owned(), seq.to_string()))
        .collect();
    let url = format!("{api_url}/{resource}?{}", encode_query(&pairs));
    ehttp::Request {
        method: "DELETE".to_owned(),
        url,
        body: Vec::new(),
        headers: ehttp::Headers::default(),
    }
}

fn json_request<T: Serialize>(
    method: &str,
    url: String,
    payload: &T,
) -> Result<ehttp::Request, RestError> {
    let body = serde_json::to_vec(payload)?;
    Ok(ehttp::Request {
        method: method.to_owned(),
        url,
        body,
        headers: ehttp::Headers::new(&[("Content-Type", "application/json")]),
    })
}

/// Decodes a JSON body, treating non-2xx statuses and transport failures
/// as errors.
pub fn parse_json<T: DeserializeOwned>(
    result: &ehttp::Result<ehttp::Response>,
) -> Result<T, RestError> {
    match result {
        Ok(response) if (200..300).contains(&response.status) => {
            Ok(serde_json::from_slice(&response.bytes)?)
        }
        Ok(response) => Err(RestError::Status {
            status: response.status,
            url: response.url.clone(),
        }),
        Err(err) => Err(RestError::Transport(err.clone())),
    }
}

/// Decodes a paged list response.
pub fn parse_page<T: DeserializeOwned>(
    result: &ehttp::Result<ehttp::Response>,
) -> Result<PageResult<T>, RestError> {
    parse_json(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_request_encodes_query() {
        let pairs = vec![
            ("page".to_owned(), "0".to_owned()),
            ("filter[custName]".to_owned(), "a b".to_owned()),
        ];
        let request = list_request("http://host/manage/api/v1", "customer", &pairs);
        assert_eq!(request.method, "GET");
        assert_eq!(
            request.url,
            "http://host/manage/api/v1/customer?page=0&filter%5BcustName%5D=a%20b"
        );
    }

    #[test]
    fn delete_request_repeats_seq() {
        let request = delete_request("http://host/manage/api/v1", "department", &[3, 9]);
        assert_eq!(request.method, "DELETE");
        assert_eq!(
            request.url,
            "http://host/manage/api/v1/department?seq=3&seq=9"
        );
    }

    #[test]
    fn create_request_carries_json_body() {
        #[derive(Serialize)]
        struct Payload {
            name: &'static str,
        }
        let request =
            create_request("http://host/manage/api/v1", "customer", &Payload { name: "n" })
                .unwrap();
        assert_eq!(request.method, "POST");
        assert_eq!(request.body, br#"{"name":"n"}"#);
        assert_eq!(
            request.headers.get("content-type"),
            Some("application/json")
        );
    }
}
