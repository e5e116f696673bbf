//! Module containing all the necessary pieces to trace requests across
//! multiple services by passing OpenTelemetry information via HTTP headers.

pub mod headers;
