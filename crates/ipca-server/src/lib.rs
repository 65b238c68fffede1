//! IPCA REST API Server.
//!
//! Serves the monthly IPCA history and inflation adjustment over HTTP.
//!
//! ## Endpoints
//!
//! - `GET /histIPCA`: full history, or one year with `?ano=YYYY`
//! - `GET /histIPCA/{id}`: a single record
//! - `GET /histIPCA/calculo`: adjust `valor` between `mesInicial/anoInicial`
//!   and `mesFinal/anoFinal`
//! - `GET /health`
//!
//! Errors are returned as `{ "Erro": "<message>" }`.
//!
//! ## Usage
//!
//! ```bash
//! # Bundled 2015-2024 dataset on port 8080
//! ipca-server
//!
//! # Custom dataset and port
//! ipca-server --dataset ./ipca.json --port 3000
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{CalculationLimits, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use server::{create_router, run_server};
pub use state::AppState;
