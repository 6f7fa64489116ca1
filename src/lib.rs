//! Printable event tickets.
//!
//! Takes one ticket record (id, event name, purchase date, email, price) and
//! produces a single-page A4 PDF carrying the ticket details and a QR code
//! that encodes only `{ticket_id, email}` for venue-side verification.
//!
//! The library never installs a logger and never exits the process; failures
//! come back as [`TicketError`].

pub mod code;
pub mod config;
pub mod error;
pub mod payload;
pub mod pipeline;
pub mod render;
pub mod scope;
pub mod ticket;

pub use code::{CodeImage, encode_payload};
pub use config::{CodeHandoff, RendererConfig};
pub use error::{EncodingError, RenderError, TicketError};
pub use payload::ScannablePayload;
pub use pipeline::{TicketPipeline, TicketPipelineBuilder};
pub use render::{TicketContent, render_ticket};
pub use scope::ScopeDir;
pub use ticket::{PurchaseDate, TicketRecord};
