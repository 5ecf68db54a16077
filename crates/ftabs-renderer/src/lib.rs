//! Filter-tabs resolution and rendering.
//!
//! Turns `::: filter-tabs` / `::: tab` directive blocks into either an
//! interactive CSS-only tab widget or flat titled sections, plus one
//! build-wide theme stylesheet.
//!
//! Typical build flow:
//!
//! ```
//! use ftabs_config::FilterTabsConfig;
//! use ftabs_model::BuilderFormat;
//! use ftabs_renderer::{BuildContext, parse_document, render_document, resolve_document};
//!
//! let mut ctx = BuildContext::new(BuilderFormat::Interactive, FilterTabsConfig::default());
//! let mut doc = parse_document("::: filter-tabs\n::: tab A\nBody.\n:::\n", &mut ctx);
//! resolve_document(&mut doc, &mut ctx);
//! let html = render_document(&doc);
//! let artifacts = ctx.finish();
//! assert!(html.contains("ft-container"));
//! assert!(artifacts.stylesheet.contains("data-slot-index"));
//! ```

mod context;
mod details;
mod fence;
mod flat;
mod html;
mod ids;
mod parser;
mod pipeline;
mod stylesheet;
mod util;
mod validate;

pub use context::{BuildArtifacts, BuildContext};
pub use parser::SlotParser;
pub use pipeline::{parse_document, render_document, resolve_document};
