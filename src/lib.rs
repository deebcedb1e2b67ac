// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Parse and format HTTP `Link` headers.
//!
//! The parser splits the header on `,` into links and each link on `;` into a
//! target and its params, then offers lookups by relation type such as
//! `next` or `prev`. Formatting writes params sorted by name with quoted
//! values, so the output is stable.
//!
//! ```
//! let header = linkrel::parse(
//!     r#"<https://api.example.org/items?page=2>; rel="next", <https://api.example.org/items?page=9>; rel="last""#,
//! )
//! .expect("valid header");
//!
//! assert_eq!(
//!     header.next().map(|link| link.url.as_str()),
//!     Some("https://api.example.org/items?page=2")
//! );
//! assert!(header.prev().is_none());
//! ```

#[macro_use]
extern crate failure;

extern crate pest;
#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod header;
pub mod link;
pub mod param;
pub mod parser;
pub mod response;
pub mod uri;

pub use header::Header;
pub use link::Link;
pub use parser::{parse, parse_with_base};
pub use response::{parse_headers, parse_response};
