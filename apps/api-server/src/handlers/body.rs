//! Request body extractor for post payloads.

use actix_web::http::header::CONTENT_TYPE;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use serde_json::{Map, Value};
use std::future::Future;
use std::pin::Pin;

use crate::middleware::error::AppError;

/// JSON object body.
///
/// A request that does not declare a JSON content type, or sends an empty
/// body, yields an empty object so field validation reports what is missing.
/// Only a declared JSON body that fails to parse, or is not an object, is
/// rejected here.
#[derive(Debug)]
pub struct JsonBody(pub Map<String, Value>);

impl JsonBody {
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

fn is_json(req: &HttpRequest) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| {
            let essence = ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
            essence == "application/json" || essence.ends_with("+json")
        })
        .unwrap_or(false)
}

fn parse(bytes: &[u8]) -> Result<Map<String, Value>, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
        Err(e) => Err(AppError::BadRequest(format!("Invalid JSON body: {}", e))),
    }
}

impl FromRequest for JsonBody {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = is_json(req);
        let bytes = web::Bytes::from_request(req, payload);

        Box::pin(async move {
            let bytes = bytes.await?;
            if !json {
                return Ok(JsonBody(Map::new()));
            }
            Ok(JsonBody(parse(&bytes)?))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_body_is_empty_object() {
        assert!(parse(b"").unwrap().is_empty());
        assert!(parse(b"  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        assert!(matches!(parse(b"[1]"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse(b"{oops"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_content_type_detection() {
        let req = actix_web::test::TestRequest::default()
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .to_http_request();
        assert!(is_json(&req));

        let req = actix_web::test::TestRequest::default()
            .insert_header((CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .to_http_request();
        assert!(!is_json(&req));

        assert!(!is_json(&actix_web::test::TestRequest::default().to_http_request()));
    }
}
