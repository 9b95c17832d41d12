pub mod error;
pub mod gateway;
pub mod model;
pub mod query;
pub mod state;
pub mod store;
pub mod table;

use error::AirportError;
use gateway::{Gateway, GatewayConfig, HttpGateway};
use model::Airport;

/// Looks up a single airport by IATA/ICAO code. The API matches codes with
/// its generic `search` parameter, so the result is narrowed here to an
/// exact (case-insensitive) IATA match.
pub async fn find_airport(
    code: &str,
    config: GatewayConfig,
) -> Result<Option<Airport>, AirportError> {
    let gateway = HttpGateway::new(config);
    let envelope = gateway.fetch_airport_by_code(code).await?;
    Ok(envelope
        .data
        .into_iter()
        .find(|a| a.iata_code.eq_ignore_ascii_case(code)))
}
