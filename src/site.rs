//! The documentation site's route table

use crate::patterns::{self, HandshakePattern};
use crate::router::{RouteResult, RouteTable};
use crate::routes;

pub const LANDING_PAGE: &str = "LandingPage";
pub const GET_STARTED: &str = "GetStarted";
pub const PROTOCOL_OVERVIEW: &str = "protocolOverview";
pub const LIBRARY_OVERVIEW: &str = "libraryOverview";

/// Handshake patterns that have their own protocol page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handshake {
    K,
    N,
    X,
    NNpsk2,
    KK,
    NK,
    NX,
    KX,
    XK,
    XX,
    NNoob,
}

impl Handshake {
    /// Route name of the handshake's page
    pub fn route_name(self) -> &'static str {
        match self {
            Handshake::K => "Noise_K",
            Handshake::N => "Noise_N",
            Handshake::X => "Noise_X",
            Handshake::NNpsk2 => "Noise_NNpsk2",
            Handshake::KK => "Noise_KK",
            Handshake::NK => "Noise_NK",
            Handshake::NX => "Noise_NX",
            Handshake::KX => "Noise_KX",
            Handshake::XK => "Noise_XK",
            Handshake::XX => "Noise_XX",
            Handshake::NNoob => "Noise_NNoob",
        }
    }

    /// Message patterns, when the library implements the handshake
    pub fn pattern(self) -> Option<&'static HandshakePattern> {
        match self {
            Handshake::K => Some(&patterns::NOISE_K),
            Handshake::N => Some(&patterns::NOISE_N),
            Handshake::X => Some(&patterns::NOISE_X),
            Handshake::NNpsk2 => Some(&patterns::NOISE_NNPSK2),
            Handshake::KK => Some(&patterns::NOISE_KK),
            Handshake::NK => Some(&patterns::NOISE_NK),
            Handshake::NX => Some(&patterns::NOISE_NX),
            Handshake::KX => Some(&patterns::NOISE_KX),
            Handshake::XK => Some(&patterns::NOISE_XK),
            Handshake::XX => Some(&patterns::NOISE_XX),
            Handshake::NNoob => None,
        }
    }
}

/// Key of a page in the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    LandingPage,
    GetStarted,
    ProtocolOverview,
    Handshake(Handshake),
    LibraryOverview,
}

impl View {
    /// Stable identifier used by the JSON API
    pub fn id(self) -> String {
        match self {
            View::LandingPage => "LandingPage".to_string(),
            View::GetStarted => "GetStarted".to_string(),
            View::ProtocolOverview => "protocol/Overview".to_string(),
            View::Handshake(h) => format!("handshakes/{}", h.route_name()),
            View::LibraryOverview => "library/Overview".to_string(),
        }
    }
}

/// Build the site's route table
pub fn route_table() -> RouteResult<RouteTable<View>> {
    let handshake = |path: &'static str, h: Handshake| (path, h.route_name(), View::Handshake(h));

    let table = RouteTable::from_entries([
        (routes::LANDING_PAGE, LANDING_PAGE, View::LandingPage),
        (routes::GET_STARTED, GET_STARTED, View::GetStarted),
        // protocol
        (routes::PROTOCOL_OVERVIEW, PROTOCOL_OVERVIEW, View::ProtocolOverview),
        handshake(routes::NOISE_K, Handshake::K),
        handshake(routes::NOISE_N, Handshake::N),
        handshake(routes::NOISE_X, Handshake::X),
        handshake(routes::NOISE_NNPSK2, Handshake::NNpsk2),
        handshake(routes::NOISE_KK, Handshake::KK),
        handshake(routes::NOISE_NK, Handshake::NK),
        handshake(routes::NOISE_NX, Handshake::NX),
        handshake(routes::NOISE_KX, Handshake::KX),
        handshake(routes::NOISE_XK, Handshake::XK),
        handshake(routes::NOISE_XX, Handshake::XX),
        handshake(routes::NOISE_NNOOB, Handshake::NNoob),
        // library
        (routes::LIBRARY_OVERVIEW, LIBRARY_OVERVIEW, View::LibraryOverview),
    ])?;

    tracing::info!("Site route table ready with {} routes", table.len());
    Ok(table)
}
