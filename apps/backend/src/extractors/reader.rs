use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::readings::ReaderId;

/// Request header naming the reader whose session an action targets.
pub const READER_HEADER: &str = "x-reader-id";

/// Reader identity resolved from the `x-reader-id` header.
///
/// A missing or blank header selects the shared default reader. A header
/// that is present but not a valid id is rejected with `INVALID_READER_ID`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reader(pub ReaderId);

impl Reader {
    pub fn from_request_head(req: &HttpRequest) -> Result<Self, AppError> {
        let Some(value) = req.headers().get(READER_HEADER) else {
            return Ok(Reader(ReaderId::default()));
        };

        let raw = value.to_str().map_err(|_| {
            AppError::bad_request(
                ErrorCode::InvalidReaderId,
                "x-reader-id header must be visible ASCII",
            )
        })?;

        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Reader(ReaderId::default()));
        }

        ReaderId::parse(raw).map(Reader).ok_or_else(|| {
            AppError::bad_request(
                ErrorCode::InvalidReaderId,
                "x-reader-id must be 1-64 characters of letters, digits, '-' or '_'",
            )
        })
    }

    pub fn id(&self) -> &ReaderId {
        &self.0
    }
}

impl FromRequest for Reader {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_request_head(req))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    #[test]
    fn missing_header_is_default_reader() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(Reader::from_request_head(&req).unwrap().0, ReaderId::default());
    }

    #[test]
    fn blank_header_is_default_reader() {
        let req = TestRequest::default()
            .insert_header(("x-reader-id", "   "))
            .to_http_request();
        assert!(Reader::from_request_head(&req).unwrap().0.is_default());
    }

    #[test]
    fn valid_header_is_used() {
        let req = TestRequest::default()
            .insert_header(("x-reader-id", "seeker-7"))
            .to_http_request();
        assert_eq!(Reader::from_request_head(&req).unwrap().id().name(), Some("seeker-7"));
    }

    #[test]
    fn literal_default_header_is_a_named_reader() {
        let req = TestRequest::default()
            .insert_header(("x-reader-id", "default"))
            .to_http_request();
        let reader = Reader::from_request_head(&req).unwrap();
        assert!(!reader.id().is_default());
        assert_eq!(reader.id().name(), Some("default"));
    }

    #[test]
    fn invalid_header_is_rejected() {
        let req = TestRequest::default()
            .insert_header(("x-reader-id", "no/slashes"))
            .to_http_request();
        let err = Reader::from_request_head(&req).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidReaderId);
    }
}
