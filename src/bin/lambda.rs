//! AWS Lambda HTTP handler
//!
//! Accepts a JSON projection input (empty body uses the defaults) and returns the
//! JSON projection result. Malformed bodies get a 400, invalid inputs a 422.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::{info, warn};
use savings_projection::{project, ProjectionInput};

const STATUS_OK: u16 = 200;
const STATUS_BAD_REQUEST: u16 = 400;
const STATUS_UNPROCESSABLE: u16 = 422;

fn error_body(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Map a request body to a status code and JSON response body
fn respond(body: &[u8]) -> Result<(u16, String), serde_json::Error> {
    let input: ProjectionInput = if body.is_empty() {
        ProjectionInput::default()
    } else {
        match serde_json::from_slice(body) {
            Ok(input) => input,
            Err(e) => {
                warn!("Malformed request body: {}", e);
                return Ok((STATUS_BAD_REQUEST, error_body(&e.to_string())));
            }
        }
    };

    match project(&input) {
        Ok(result) => {
            info!(
                "Projected {} months of {}, final balance {:.2}",
                result.summary.term_months, result.summary.product_variant, result.summary.final_balance
            );
            Ok((STATUS_OK, serde_json::to_string(&result)?))
        }
        Err(e) => {
            warn!("Rejected projection input: {}", e);
            Ok((STATUS_UNPROCESSABLE, error_body(&e.to_string())))
        }
    }
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let body: &[u8] = event.body();
    let (status, json) = respond(body)?;
    let resp = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(json))?;
    Ok(resp)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
