//! Wire contracts of the tips ledger API.
//!
//! Everything here is shared between the browser client and its tests:
//! request/response DTOs, the normalizers for ambiguous response shapes and
//! the table-code rules the client checks before posting.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
