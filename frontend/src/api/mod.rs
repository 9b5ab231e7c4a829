//! HTTP client for the addendum backend.
//!
//! Every call takes a [`RequestContext`] explicitly; nothing reads the token
//! from storage on its own. Failures are mapped into [`ConsoleError`] so the
//! pages only ever deal with displayable errors.

use gloo_net::http::{Request, RequestBuilder, Response};

use common::error::ConsoleError;
use common::model::addendum::Addendum;
use common::model::api::{parse_addendum_list, parse_vehicle_list, ApiResponse};
use common::model::vehicle::{Vehicle, VehicleCategory};
use common::requests::CreateAddendumRequest;
use common::submission::transport_error_message;

use crate::config::api_base_url;
use crate::helpers::stored_token;

/// Where requests go and who is making them.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestContext {
    base_url: String,
    token: Option<String>,
}

impl RequestContext {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self { base_url: base_url.into(), token }
    }

    /// Context for the current browser session.
    pub fn from_browser() -> Self {
        Self::new(api_base_url(), stored_token())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

/// Body and declared content type of a response, left for the caller to classify.
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

fn network_error(err: gloo_net::Error) -> ConsoleError {
    ConsoleError::Transport(transport_error_message(&err.to_string()))
}

async fn send(builder: RequestBuilder) -> Result<Response, ConsoleError> {
    builder.send().await.map_err(network_error)
}

/// `GET /vehicles/{id}`.
///
/// A non-success status or a body that is not a vehicle gives `Ok(None)`;
/// only network failures are errors.
pub async fn fetch_vehicle(ctx: &RequestContext, id: &str) -> Result<Option<Vehicle>, ConsoleError> {
    let request = ctx.authorize(Request::get(&ctx.url(&format!("/vehicles/{}", id))));
    let response = send(request).await?;
    if !response.ok() {
        gloo_console::warn!("vehicle lookup returned status", response.status());
        return Ok(None);
    }
    match response.json::<ApiResponse<Vehicle>>().await {
        Ok(envelope) => Ok(envelope.into_data()),
        Err(err) => {
            gloo_console::warn!("vehicle payload rejected:", err.to_string());
            Ok(None)
        }
    }
}

/// `GET /vehicles?vehicleType=..&search=..`.
///
/// A non-success status or a body that is not JSON is an error. Records
/// that do not parse are skipped and logged; the rest are still returned.
pub async fn search_vehicles(
    ctx: &RequestContext,
    category: VehicleCategory,
    query: &str,
) -> Result<Vec<Vehicle>, ConsoleError> {
    let request = ctx.authorize(
        Request::get(&ctx.url("/vehicles"))
            .query([("vehicleType", category.as_str()), ("search", query)]),
    );
    let response = send(request).await?;
    if !response.ok() {
        return Err(ConsoleError::transport_status(response.status()));
    }
    let body = response.text().await.map_err(network_error)?;
    let (vehicles, skipped) = parse_vehicle_list(&body).inspect_err(|_| {
        gloo_console::warn!("vehicle search payload is not JSON for", category.as_str());
    })?;
    if skipped > 0 {
        gloo_console::warn!("skipped malformed vehicles in", category.as_str(), "search:", skipped as u32);
    }
    Ok(vehicles)
}

/// `POST /addendums`. The response is returned raw so the caller can tell an
/// HTML error page from a JSON rejection.
pub async fn create_addendum(
    ctx: &RequestContext,
    body: &CreateAddendumRequest,
) -> Result<RawResponse, ConsoleError> {
    let request = ctx
        .authorize(Request::post(&ctx.url("/addendums")))
        .json(body)
        .map_err(network_error)?;
    let response = request.send().await.map_err(network_error)?;
    let status = response.status();
    let content_type = response.headers().get("content-type");
    let body = response.text().await.map_err(network_error)?;
    if !response.ok() {
        gloo_console::warn!("addendum creation returned status", status);
    }
    Ok(RawResponse { status, content_type, body })
}

/// `GET /addendums?vehicleType=..`.
///
/// A non-success status is an error; a body without a list is an empty result.
pub async fn list_addendums(
    ctx: &RequestContext,
    category: VehicleCategory,
) -> Result<Vec<Addendum>, ConsoleError> {
    let request = ctx.authorize(
        Request::get(&ctx.url("/addendums")).query([("vehicleType", category.as_str())]),
    );
    let response = send(request).await?;
    if !response.ok() {
        return Err(ConsoleError::transport_status(response.status()));
    }
    let body = response.text().await.map_err(network_error)?;
    let (addendums, skipped) = parse_addendum_list(&body);
    if skipped > 0 {
        gloo_console::warn!("skipped malformed addendums:", skipped as u32);
    }
    Ok(addendums)
}
