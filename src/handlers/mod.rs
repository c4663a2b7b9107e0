use std::collections::HashMap;
use std::str::FromStr;

use actix_web::http::header::{self, ContentType};
use actix_web::HttpResponse;

use crate::errors::AppError;

pub mod home;
pub mod menu;
pub mod orders;

/// 303 redirect used after every mutating route.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

/// Form field lookup; absent keys read as empty (the services decide what is
/// required).
pub(crate) fn field<'a>(params: &'a HashMap<String, String>, key: &str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or_default()
}

/// Required, typed query parameter. Missing or unparseable values are a 400
/// with no mutation performed.
pub(crate) fn require_param<T: FromStr>(
    params: &HashMap<String, String>,
    key: &str,
) -> Result<T, AppError> {
    let raw = params
        .get(key)
        .ok_or_else(|| AppError::Validation(format!("missing '{key}' parameter")))?;
    raw.trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid '{key}' parameter '{raw}'")))
}
