//! XML document handling
//!
//! This module centralizes the tagged-tree formats:
//! - Projections and customers-tickets input documents
//! - The top customers export document
//!
//! Input documents must be rooted at their collection tag (`<Projections>`,
//! `<Customers>`). The export is written without any namespace declaration.

use crate::core::exporter::TopCustomer;
use crate::types::{CinemaError, CustomerRecord, ProjectionRecord};
use quick_xml::events::Event;
use quick_xml::se::Serializer;
use quick_xml::Reader;
use serde::{Deserialize, Serialize};

/// Root tag of the projections document
pub const PROJECTIONS_ROOT: &str = "Projections";

/// Root tag of the customers-tickets document and of the top customers export
pub const CUSTOMERS_ROOT: &str = "Customers";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

#[derive(Debug, Default, Deserialize)]
struct ProjectionsDocument {
    #[serde(rename = "Projection", default)]
    projections: Vec<ProjectionRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct CustomersDocument {
    #[serde(rename = "Customer", default)]
    customers: Vec<CustomerRecord>,
}

#[derive(Debug, Serialize)]
struct TopCustomersDocument<'a> {
    #[serde(rename = "Customer")]
    customers: &'a [TopCustomer],
}

/// Check that the first element of `document` is `<expected>`
fn ensure_root(document: &str, expected: &str) -> Result<(), CinemaError> {
    let mut reader = Reader::from_str(document);

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                let name = element.name();
                return if name.as_ref() == expected.as_bytes() {
                    Ok(())
                } else {
                    Err(CinemaError::XmlParse {
                        message: format!(
                            "expected root <{}>, found <{}>",
                            expected,
                            String::from_utf8_lossy(name.as_ref())
                        ),
                    })
                };
            }
            Ok(Event::Eof) => {
                return Err(CinemaError::XmlParse {
                    message: format!("missing root <{}>", expected),
                })
            }
            Ok(_) => continue,
            Err(e) => {
                return Err(CinemaError::XmlParse {
                    message: e.to_string(),
                })
            }
        }
    }
}

/// Parse a projections document
///
/// # Errors
///
/// Returns `CinemaError::XmlParse` if the document is not well formed, is not
/// rooted at `<Projections>`, or holds values of the wrong type.
pub fn parse_projections(document: &str) -> Result<Vec<ProjectionRecord>, CinemaError> {
    ensure_root(document, PROJECTIONS_ROOT)?;
    let parsed: ProjectionsDocument = quick_xml::de::from_str(document)?;
    Ok(parsed.projections)
}

/// Parse a customers-tickets document
///
/// # Errors
///
/// Returns `CinemaError::XmlParse` if the document is not well formed, is not
/// rooted at `<Customers>`, or holds values of the wrong type.
pub fn parse_customers(document: &str) -> Result<Vec<CustomerRecord>, CinemaError> {
    ensure_root(document, CUSTOMERS_ROOT)?;
    let parsed: CustomersDocument = quick_xml::de::from_str(document)?;
    Ok(parsed.customers)
}

/// Write the top customers export
///
/// Produces an XML declaration followed by `<Customers>` with one indented
/// `<Customer>` element per row.
pub fn write_top_customers(customers: &[TopCustomer]) -> Result<String, CinemaError> {
    let mut buffer = String::new();
    buffer.push_str(XML_DECLARATION);
    buffer.push('\n');

    let mut serializer = Serializer::with_root(&mut buffer, Some(CUSTOMERS_ROOT))
        .map_err(|e| CinemaError::document_write("XML", e))?;
    serializer.indent(' ', 2);

    TopCustomersDocument { customers }
        .serialize(serializer)
        .map_err(|e| CinemaError::document_write("XML", e))?;

    Ok(buffer.trim_end().to_string())
}
