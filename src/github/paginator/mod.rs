//! Drives a request across every page of a listing.
//!
//! The paginator knows nothing about what it is paging through: each response
//! is handed to a caller-supplied consumer that decodes and accumulates it.

use std::io::Read;

use serde::de::DeserializeOwned;

use super::descriptor::{PAGE_PARAM, RequestDescriptor};
use super::error::{GitHubError, extract_github_message, map_http_error};
use super::link::PageLinkSet;
use super::transport::{ApiResponse, Transport};

/// Fetches every page of `descriptor` and feeds each response to `consume`.
///
/// The first response decides the total page count through its `Link`
/// header, read before the consumer sees the response. Pages `2..=N` are
/// then requested in order with the `page` query parameter set. The first
/// failure from the transport, the link metadata, or the consumer stops the
/// walk and is returned unchanged; no later page is requested.
///
/// The caller's descriptor is never modified.
///
/// # Errors
///
/// Returns the transport or consumer error that stopped the walk, or
/// [`GitHubError::InvalidPagination`] when the `last` link is malformed.
pub fn paginate_all<T, F>(
    transport: &T,
    descriptor: &RequestDescriptor,
    mut consume: F,
) -> Result<(), GitHubError>
where
    T: Transport + ?Sized,
    F: FnMut(ApiResponse) -> Result<(), GitHubError>,
{
    let mut request = descriptor.clone();

    let first = transport.issue(&request)?;
    let total_pages = PageLinkSet::from_headers(first.headers()).total_pages()?;
    tracing::debug!("{} spans {total_pages} page(s)", request.endpoint());

    consume(first)?;

    for page in 2..=total_pages {
        request.set_query(PAGE_PARAM, page.to_string());
        tracing::debug!("fetching page {page}/{total_pages} of {}", request.endpoint());
        let response = transport.issue(&request)?;
        consume(response)?;
    }

    Ok(())
}

/// Builds a consumer that decodes each page as a JSON array of `T` and
/// appends the items to `sink`.
///
/// Non-success statuses are mapped to [`GitHubError::Authentication`] or
/// [`GitHubError::Api`] before any decoding is attempted.
pub fn collect_json_pages<'a, T>(
    resource: &'static str,
    sink: &'a mut Vec<T>,
) -> impl FnMut(ApiResponse) -> Result<(), GitHubError> + 'a
where
    T: DeserializeOwned,
{
    move |response| {
        let mut page = decode_page::<T>(resource, response)?;
        sink.append(&mut page);
        Ok(())
    }
}

/// Decodes one response body as a JSON array of `T`.
///
/// # Errors
///
/// Returns [`GitHubError::Authentication`] or [`GitHubError::Api`] for
/// non-success statuses and [`GitHubError::Decode`] when the body is not a
/// valid array of `T`.
pub fn decode_page<T>(resource: &'static str, response: ApiResponse) -> Result<Vec<T>, GitHubError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let mut body = response.into_body();

    if !status.is_success() {
        let mut text = String::new();
        let message = body
            .read_to_string(&mut text)
            .ok()
            .and_then(|_| extract_github_message(&text));
        return Err(map_http_error(resource, status, message));
    }

    serde_json::from_reader(body).map_err(|error| GitHubError::Decode {
        resource,
        message: error.to_string(),
    })
}
