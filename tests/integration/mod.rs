//! Integration tests for Switchboard
//!
//! Verify the full request/response flow through the router, from the
//! inbound JSON body to the mocked provider and back.

pub mod validation;
